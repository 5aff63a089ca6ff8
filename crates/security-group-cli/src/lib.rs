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

//! Security group commands (`create`, `delete`, `list`, `set`, `show`) that
//! run against either the network service or, where it is not deployed, the
//! compute service. Flags and output columns are the same for both.
//!
//! The embedding application supplies the service clients through a
//! [`ClientManager`] and calls [`run`] with the command line.

use std::ffi::OsString;

use clap::Parser;

pub mod adapter;
pub mod backend;
pub mod cfg;
pub mod clients;
pub mod errors;
pub mod logging;
pub mod output;
pub mod rules;
pub mod security_group;

pub use backend::{BackendKind, ClientManager, SecurityGroupBackend, select_backend};
pub use cfg::cli_options::CliOptions;
pub use cfg::session::SessionConfig;
pub use errors::{ClientError, SecurityGroupCliError, SecurityGroupCliResult};
pub use output::{CommandOutput, Destination, OutputFormat};
pub use security_group::{Cmd, SecurityGroupHandler};

/// Parses `args` (program name first), runs the command and writes its
/// output. Logging is set up from `--debug` unless the caller already
/// installed a global subscriber.
pub async fn run<I, T>(args: I, clients: &ClientManager) -> SecurityGroupCliResult<()>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let options = CliOptions::try_parse_from(args)?;
    run_with_options(options, clients).await
}

pub async fn run_with_options(
    options: CliOptions,
    clients: &ClientManager,
) -> SecurityGroupCliResult<()> {
    // A subscriber installed by the embedding application takes precedence.
    if let Err(err) = logging::init(options.debug) {
        tracing::debug!(%err, "Global subscriber already installed");
    }

    let mut clients = clients.clone();
    // command line overrides the loaded session config
    if let Some(enabled) = options.network_endpoint_enabled {
        clients.session.network_endpoint_enabled = enabled;
    }

    let handler = SecurityGroupHandler::new(&clients);
    let destination = options.destination();
    let output = handler.execute(options.command).await?;
    output::cli_output(&output, &options.format, destination)
}
