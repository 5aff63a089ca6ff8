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

mod compute;
mod network;

use std::fmt;
use std::sync::Arc;

pub use compute::ComputeBackend;
pub use network::NetworkBackend;

use crate::adapter::{CreateRequest, SecurityGroupView, UpdateRequest};
use crate::cfg::session::SessionConfig;
use crate::clients::{ComputeClient, IdentityClient, NetworkClient};
use crate::errors::SecurityGroupCliResult;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BackendKind {
    Network,
    Compute,
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BackendKind::Network => write!(f, "network"),
            BackendKind::Compute => write!(f, "compute"),
        }
    }
}

/// Picks the service that manages security groups for this session.
pub fn select_backend(session: &SessionConfig) -> BackendKind {
    if session.network_endpoint_enabled {
        BackendKind::Network
    } else {
        BackendKind::Compute
    }
}

/// The clients and session settings of one invocation, handed in by the
/// embedding application.
#[derive(Clone)]
pub struct ClientManager {
    pub session: SessionConfig,
    pub identity: Arc<dyn IdentityClient>,
    pub network: Arc<dyn NetworkClient>,
    pub compute: Arc<dyn ComputeClient>,
}

impl ClientManager {
    pub fn backend_kind(&self) -> BackendKind {
        select_backend(&self.session)
    }

    /// Builds the backend selected by the current session. Called once per
    /// command, never cached.
    pub fn backend(&self) -> Box<dyn SecurityGroupBackend> {
        match self.backend_kind() {
            BackendKind::Network => Box::new(NetworkBackend::new(
                self.network.clone(),
                self.identity.clone(),
            )),
            BackendKind::Compute => Box::new(ComputeBackend::new(self.compute.clone())),
        }
    }
}

/// The security group operations every backend provides. Implementations
/// translate canonical requests through `crate::adapter` and hand errors of
/// the underlying client back unchanged.
#[async_trait::async_trait]
pub trait SecurityGroupBackend: Send + Sync {
    fn kind(&self) -> BackendKind;

    /// Whether groups can be created on behalf of another project.
    fn supports_project_scope(&self) -> bool;

    /// Whether `list` output carries the owning project.
    fn list_shows_project(&self, all_projects: bool) -> bool;

    async fn create(&self, request: &CreateRequest) -> SecurityGroupCliResult<SecurityGroupView>;

    async fn delete(&self, group: &str) -> SecurityGroupCliResult<()>;

    async fn update(&self, group: &str, request: &UpdateRequest) -> SecurityGroupCliResult<()>;

    async fn show(&self, group: &str) -> SecurityGroupCliResult<SecurityGroupView>;

    async fn list(&self, all_projects: bool) -> SecurityGroupCliResult<Vec<SecurityGroupView>>;
}
