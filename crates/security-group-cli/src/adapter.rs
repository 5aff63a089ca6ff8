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

//! Translation between the backend independent view of a security group and
//! the records and call arguments of each backend. No other module reads or
//! writes backend field names.

use serde::Serialize;

use crate::clients::{
    ComputeSecurityGroup, NetworkSecurityGroup, NetworkSecurityGroupCreate,
    NetworkSecurityGroupUpdate,
};
use crate::rules;

/// Columns of `create` and `show`, identical for both backends.
pub const SHOW_COLUMNS: [&str; 5] = ["description", "id", "name", "project_id", "rules"];

pub const LIST_COLUMNS: [&str; 3] = ["ID", "Name", "Description"];
pub const LIST_PROJECT_COLUMN: &str = "Project";

/// Canonical security group.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SecurityGroupView {
    pub id: String,
    pub name: String,
    pub description: String,
    pub project_id: String,
    pub rules: String,
}

impl SecurityGroupView {
    /// Values in `SHOW_COLUMNS` order.
    pub fn into_show_row(self) -> Vec<String> {
        vec![
            self.description,
            self.id,
            self.name,
            self.project_id,
            self.rules,
        ]
    }

    /// Values in list column order, with the project appended when requested.
    pub fn into_list_row(self, with_project: bool) -> Vec<String> {
        let mut row = vec![self.id, self.name, self.description];
        if with_project {
            row.push(self.project_id);
        }
        row
    }
}

/// Canonical create request, after argument parsing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CreateRequest {
    pub name: String,
    pub description: Option<String>,
    pub project: Option<String>,
    pub project_domain: Option<String>,
}

impl CreateRequest {
    /// A group created without a description is described by its name.
    pub fn description_or_name(&self) -> &str {
        self.description.as_deref().unwrap_or(&self.name)
    }
}

/// Canonical set request. `None` leaves the field as it is.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UpdateRequest {
    pub name: Option<String>,
    pub description: Option<String>,
}

pub fn network_create_attrs(
    request: &CreateRequest,
    tenant_id: Option<String>,
) -> NetworkSecurityGroupCreate {
    NetworkSecurityGroupCreate {
        name: request.name.clone(),
        description: request.description_or_name().to_string(),
        tenant_id,
    }
}

/// Positional `(name, description)` arguments of the compute create call.
pub fn compute_create_args(request: &CreateRequest) -> (&str, &str) {
    (request.name.as_str(), request.description_or_name())
}

pub fn network_update_attrs(request: &UpdateRequest) -> NetworkSecurityGroupUpdate {
    NetworkSecurityGroupUpdate {
        name: request.name.clone(),
        description: request.description.clone(),
    }
}

/// The compute update call always takes both fields, so omitted ones are
/// filled in from the current record.
pub fn compute_update_args<'a>(
    request: &'a UpdateRequest,
    current: &'a ComputeSecurityGroup,
) -> (&'a str, &'a str) {
    (
        request.name.as_deref().unwrap_or(&current.name),
        request
            .description
            .as_deref()
            .unwrap_or(&current.description),
    )
}

pub fn network_owning_project(record: &NetworkSecurityGroup) -> String {
    record
        .project_id
        .as_ref()
        .filter(|id| !id.is_empty())
        .or(record.tenant_id.as_ref())
        .cloned()
        .unwrap_or_default()
}

pub fn from_network_record(record: &NetworkSecurityGroup) -> SecurityGroupView {
    SecurityGroupView {
        id: record.id.clone(),
        name: record.name.clone(),
        description: record.description.clone(),
        project_id: network_owning_project(record),
        rules: rules::format_network_rules(&record.security_group_rules),
    }
}

pub fn from_compute_record(record: &ComputeSecurityGroup) -> SecurityGroupView {
    SecurityGroupView {
        id: record.id.clone(),
        name: record.name.clone(),
        description: record.description.clone(),
        project_id: record.tenant_id.clone(),
        rules: rules::format_compute_rules(&record.rules),
    }
}
