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

//! Interfaces and record types of the services the security group commands
//! talk to. Concrete clients are provided by the embedding application.

use serde::{Deserialize, Serialize};

use crate::errors::ClientError;

/// Security group as returned by the network service.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkSecurityGroup {
    pub id: String,
    pub name: String,
    pub description: String,
    pub project_id: Option<String>,
    pub tenant_id: Option<String>,
    pub security_group_rules: Vec<NetworkSecurityGroupRule>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkSecurityGroupRule {
    pub id: String,
    pub security_group_id: String,
    pub direction: String,
    pub ethertype: String,
    pub protocol: Option<String>,
    pub port_range_min: Option<u16>,
    pub port_range_max: Option<u16>,
    pub remote_ip_prefix: Option<String>,
    pub remote_group_id: Option<String>,
    pub description: Option<String>,
    pub project_id: Option<String>,
    pub tenant_id: Option<String>,
}

/// Attributes accepted by `NetworkClient::create_security_group`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct NetworkSecurityGroupCreate {
    pub name: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tenant_id: Option<String>,
}

/// Sparse update: only the fields that are `Some` are changed.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct NetworkSecurityGroupUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl NetworkSecurityGroupUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_none()
    }
}

/// Security group as returned by the compute service.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComputeSecurityGroup {
    pub id: String,
    pub name: String,
    pub description: String,
    pub tenant_id: String,
    pub rules: Vec<ComputeSecurityGroupRule>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComputeSecurityGroupRule {
    pub id: String,
    pub parent_group_id: String,
    pub ip_protocol: Option<String>,
    pub from_port: Option<i32>,
    pub to_port: Option<i32>,
    pub ip_range: ComputeIpRange,
    pub group: ComputeRuleGroup,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComputeIpRange {
    pub cidr: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComputeRuleGroup {
    pub name: Option<String>,
    pub tenant_id: Option<String>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ComputeSearchOpts {
    pub all_tenants: bool,
}

#[async_trait::async_trait]
pub trait IdentityClient: Send + Sync {
    /// Resolves a project name or id, optionally scoped to a domain name or
    /// id, to the project id.
    async fn resolve_project(
        &self,
        name_or_id: &str,
        domain: Option<&str>,
    ) -> Result<String, ClientError>;
}

#[async_trait::async_trait]
pub trait NetworkClient: Send + Sync {
    async fn create_security_group(
        &self,
        attrs: &NetworkSecurityGroupCreate,
    ) -> Result<NetworkSecurityGroup, ClientError>;

    /// Looks up a security group by name or id. With `ignore_missing` unset a
    /// missing group is reported as `ClientError::NotFound`.
    async fn find_security_group(
        &self,
        name_or_id: &str,
        ignore_missing: bool,
    ) -> Result<Option<NetworkSecurityGroup>, ClientError>;

    async fn delete_security_group(
        &self,
        group: &NetworkSecurityGroup,
    ) -> Result<(), ClientError>;

    async fn update_security_group(
        &self,
        group: &NetworkSecurityGroup,
        attrs: &NetworkSecurityGroupUpdate,
    ) -> Result<NetworkSecurityGroup, ClientError>;

    async fn security_groups(&self) -> Result<Vec<NetworkSecurityGroup>, ClientError>;
}

#[async_trait::async_trait]
pub trait ComputeClient: Send + Sync {
    async fn create_security_group(
        &self,
        name: &str,
        description: &str,
    ) -> Result<ComputeSecurityGroup, ClientError>;

    async fn get_security_group(&self, id: &str) -> Result<ComputeSecurityGroup, ClientError>;

    async fn delete_security_group(&self, id: &str) -> Result<(), ClientError>;

    async fn update_security_group(
        &self,
        group: &ComputeSecurityGroup,
        name: &str,
        description: &str,
    ) -> Result<ComputeSecurityGroup, ClientError>;

    async fn list_security_groups(
        &self,
        search_opts: &ComputeSearchOpts,
    ) -> Result<Vec<ComputeSecurityGroup>, ClientError>;
}
