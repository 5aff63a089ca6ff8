/*
 * SPDX-FileCopyrightText: Copyright (c) 2026 NVIDIA CORPORATION & AFFILIATES. All rights reserved.
 * SPDX-License-Identifier: LicenseRef-NvidiaProprietary
 *
 * NVIDIA CORPORATION, its affiliates and licensors retain all intellectual
 * property and proprietary rights in and to this material, related
 * documentation and any modifications thereto. Any use, reproduction,
 * disclosure or distribution of this material and related documentation
 * without an express license agreement from NVIDIA CORPORATION or
 * its affiliates is strictly prohibited.
 */

pub mod args;
pub mod cmds;

use std::ffi::OsString;

pub use args::Cmd;
use clap::Parser;

use crate::backend::{BackendKind, ClientManager, SecurityGroupBackend};
use crate::errors::SecurityGroupCliResult;
use crate::output::CommandOutput;

/// Runs security group commands against the backend selected for the
/// session it was built with. Build a new one for every command.
pub struct SecurityGroupHandler {
    backend: Box<dyn SecurityGroupBackend>,
}

impl SecurityGroupHandler {
    pub fn new(clients: &ClientManager) -> Self {
        let backend = clients.backend();
        tracing::debug!(backend = %backend.kind(), "Selected security group backend");
        Self { backend }
    }

    pub fn kind(&self) -> BackendKind {
        self.backend.kind()
    }

    pub fn backend(&self) -> &dyn SecurityGroupBackend {
        self.backend.as_ref()
    }

    /// Parses a command line (program name first) and checks it against the
    /// active backend.
    pub fn parse<I, T>(&self, args: I) -> SecurityGroupCliResult<Cmd>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let cmd = Cmd::try_parse_from(args)?;
        cmd.validate_for(self.backend())?;
        Ok(cmd)
    }

    pub async fn execute(&self, cmd: Cmd) -> SecurityGroupCliResult<CommandOutput> {
        cmd.validate_for(self.backend())?;
        dispatch(cmd, self.backend()).await
    }
}

// dispatch routes security group commands.
pub async fn dispatch(
    cmd: Cmd,
    backend: &dyn SecurityGroupBackend,
) -> SecurityGroupCliResult<CommandOutput> {
    match cmd {
        Cmd::Create(args) => cmds::create(args, backend).await,
        Cmd::Delete(args) => cmds::delete(args, backend).await,
        Cmd::List(args) => cmds::list(args, backend).await,
        Cmd::Set(args) => cmds::set(args, backend).await,
        Cmd::Show(args) => cmds::show(args, backend).await,
    }
}
