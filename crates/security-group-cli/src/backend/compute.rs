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
use crate::clients::{ComputeClient, ComputeSearchOpts};
use crate::errors::SecurityGroupCliResult;

/// Security groups managed by the compute service, used when the network
/// service is not deployed.
pub struct ComputeBackend {
    compute: Arc<dyn ComputeClient>,
}

impl ComputeBackend {
    pub fn new(compute: Arc<dyn ComputeClient>) -> Self {
        Self { compute }
    }
}

#[async_trait::async_trait]
impl SecurityGroupBackend for ComputeBackend {
    fn kind(&self) -> BackendKind {
        BackendKind::Compute
    }

    fn supports_project_scope(&self) -> bool {
        false
    }

    fn list_shows_project(&self, all_projects: bool) -> bool {
        all_projects
    }

    async fn create(&self, request: &CreateRequest) -> SecurityGroupCliResult<SecurityGroupView> {
        let (name, description) = adapter::compute_create_args(request);
        tracing::debug!(name, description, "Creating compute security group");
        let record = self
            .compute
            .create_security_group(name, description)
            .await?;
        tracing::info!(id = %record.id, name = %record.name, "Created security group");
        Ok(adapter::from_compute_record(&record))
    }

    async fn delete(&self, group: &str) -> SecurityGroupCliResult<()> {
        let record = self.compute.get_security_group(group).await?;
        self.compute.delete_security_group(&record.id).await?;
        tracing::info!(id = %record.id, "Deleted security group");
        Ok(())
    }

    async fn update(&self, group: &str, request: &UpdateRequest) -> SecurityGroupCliResult<()> {
        let record = self.compute.get_security_group(group).await?;
        let (name, description) = adapter::compute_update_args(request, &record);
        tracing::debug!(id = %record.id, name, description, "Updating compute security group");
        self.compute
            .update_security_group(&record, name, description)
            .await?;
        tracing::info!(id = %record.id, "Updated security group");
        Ok(())
    }

    async fn show(&self, group: &str) -> SecurityGroupCliResult<SecurityGroupView> {
        let record = self.compute.get_security_group(group).await?;
        Ok(adapter::from_compute_record(&record))
    }

    async fn list(&self, all_projects: bool) -> SecurityGroupCliResult<Vec<SecurityGroupView>> {
        let search_opts = ComputeSearchOpts {
            all_tenants: all_projects,
        };
        let records = self.compute.list_security_groups(&search_opts).await?;
        tracing::debug!(count = records.len(), all_projects, "Listed compute security groups");
        Ok(records.iter().map(adapter::from_compute_record).collect())
    }
}
