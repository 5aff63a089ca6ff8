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

use std::sync::Arc;

use super::{BackendKind, SecurityGroupBackend};
use crate::adapter::{self, CreateRequest, SecurityGroupView, UpdateRequest};
use crate::clients::{IdentityClient, NetworkClient, NetworkSecurityGroup};
use crate::errors::{ClientError, SecurityGroupCliError, SecurityGroupCliResult};

/// Security groups managed by the network service.
pub struct NetworkBackend {
    network: Arc<dyn NetworkClient>,
    identity: Arc<dyn IdentityClient>,
}

impl NetworkBackend {
    pub fn new(network: Arc<dyn NetworkClient>, identity: Arc<dyn IdentityClient>) -> Self {
        Self { network, identity }
    }

    // find never ignores a missing group, so None only comes back from a
    // client that does not honour ignore_missing.
    async fn find(&self, group: &str) -> SecurityGroupCliResult<NetworkSecurityGroup> {
        self.network
            .find_security_group(group, false)
            .await?
            .ok_or_else(|| {
                ClientError::NotFound {
                    kind: "security group",
                    id: group.to_string(),
                }
                .into()
            })
    }

    async fn resolve_tenant(
        &self,
        request: &CreateRequest,
    ) -> SecurityGroupCliResult<Option<String>> {
        let Some(project) = request.project.as_deref() else {
            return Ok(None);
        };
        let domain = request.project_domain.as_deref();
        let project_id = self
            .identity
            .resolve_project(project, domain)
            .await
            .map_err(|source| SecurityGroupCliError::ProjectResolution {
                project: project.to_string(),
                domain: domain.map(str::to_string),
                source,
            })?;
        tracing::debug!(project, ?domain, %project_id, "Resolved project");
        Ok(Some(project_id))
    }
}

#[async_trait::async_trait]
impl SecurityGroupBackend for NetworkBackend {
    fn kind(&self) -> BackendKind {
        BackendKind::Network
    }

    fn supports_project_scope(&self) -> bool {
        true
    }

    fn list_shows_project(&self, _all_projects: bool) -> bool {
        true
    }

    async fn create(&self, request: &CreateRequest) -> SecurityGroupCliResult<SecurityGroupView> {
        let tenant_id = self.resolve_tenant(request).await?;
        let attrs = adapter::network_create_attrs(request, tenant_id);
        tracing::debug!(?attrs, "Creating network security group");
        let record = self.network.create_security_group(&attrs).await?;
        tracing::info!(id = %record.id, name = %record.name, "Created security group");
        Ok(adapter::from_network_record(&record))
    }

    async fn delete(&self, group: &str) -> SecurityGroupCliResult<()> {
        let record = self.find(group).await?;
        self.network.delete_security_group(&record).await?;
        tracing::info!(id = %record.id, "Deleted security group");
        Ok(())
    }

    async fn update(&self, group: &str, request: &UpdateRequest) -> SecurityGroupCliResult<()> {
        let record = self.find(group).await?;
        let attrs = adapter::network_update_attrs(request);
        tracing::debug!(id = %record.id, ?attrs, "Updating network security group");
        self.network.update_security_group(&record, &attrs).await?;
        tracing::info!(id = %record.id, "Updated security group");
        Ok(())
    }

    async fn show(&self, group: &str) -> SecurityGroupCliResult<SecurityGroupView> {
        let record = self.find(group).await?;
        Ok(adapter::from_network_record(&record))
    }

    // The network service scopes the listing by credentials, so all_projects
    // does not change the call.
    async fn list(&self, _all_projects: bool) -> SecurityGroupCliResult<Vec<SecurityGroupView>> {
        let records = self.network.security_groups().await?;
        tracing::debug!(count = records.len(), "Listed network security groups");
        Ok(records.iter().map(adapter::from_network_record).collect())
    }
}
