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

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};

use crate::adapter::{CreateRequest, UpdateRequest};
use crate::backend::SecurityGroupBackend;

#[derive(Parser, Debug, Clone, PartialEq, Eq)]
pub enum Cmd {
    #[clap(about = "Create a new security group")]
    Create(CreateSecurityGroup),
    #[clap(about = "Delete a security group")]
    Delete(DeleteSecurityGroup),
    #[clap(about = "List security groups")]
    List(ListSecurityGroup),
    #[clap(about = "Set security group properties")]
    Set(SetSecurityGroup),
    #[clap(about = "Display security group details")]
    Show(ShowSecurityGroup),
}

#[derive(Parser, Debug, Clone, PartialEq, Eq)]
pub struct CreateSecurityGroup {
    #[clap(help = "New security group name")]
    pub name: String,

    #[clap(long, help = "Security group description, defaults to the name")]
    pub description: Option<String>,

    #[clap(long, help = "Owner's project (name or ID), network service only")]
    pub project: Option<String>,

    #[clap(
        long,
        requires = "project",
        help = "Domain the project belongs to (name or ID), network service only"
    )]
    pub project_domain: Option<String>,
}

impl From<CreateSecurityGroup> for CreateRequest {
    fn from(args: CreateSecurityGroup) -> Self {
        CreateRequest {
            name: args.name,
            description: args.description,
            project: args.project,
            project_domain: args.project_domain,
        }
    }
}

#[derive(Parser, Debug, Clone, PartialEq, Eq)]
pub struct DeleteSecurityGroup {
    #[clap(help = "Security group to delete (name or ID)")]
    pub group: String,
}

#[derive(Parser, Debug, Clone, PartialEq, Eq)]
pub struct ListSecurityGroup {
    #[clap(long, help = "Display information from all projects (admin only)")]
    pub all_projects: bool,
}

#[derive(Parser, Debug, Clone, PartialEq, Eq)]
pub struct SetSecurityGroup {
    #[clap(help = "Security group to modify (name or ID)")]
    pub group: String,

    #[clap(long, help = "New security group name")]
    pub name: Option<String>,

    #[clap(long, help = "New security group description")]
    pub description: Option<String>,
}

impl From<SetSecurityGroup> for UpdateRequest {
    fn from(args: SetSecurityGroup) -> Self {
        UpdateRequest {
            name: args.name,
            description: args.description,
        }
    }
}

#[derive(Parser, Debug, Clone, PartialEq, Eq)]
pub struct ShowSecurityGroup {
    #[clap(help = "Security group to display (name or ID)")]
    pub group: String,
}

impl Cmd {
    /// Rejects options the active backend cannot honour. Runs after clap
    /// parsing and before any backend call.
    pub fn validate_for(&self, backend: &dyn SecurityGroupBackend) -> Result<(), clap::Error> {
        let Cmd::Create(args) = self else {
            return Ok(());
        };
        if !backend.supports_project_scope() {
            let offending = [
                ("--project", args.project.is_some()),
                ("--project-domain", args.project_domain.is_some()),
            ]
            .into_iter()
            .filter_map(|(flag, set)| set.then_some(flag))
            .collect::<Vec<_>>();
            if !offending.is_empty() {
                return Err(subcommand_error(
                    "create",
                    ErrorKind::UnknownArgument,
                    format!(
                        "{} not supported when security groups are managed by the {} service",
                        offending.join(", "),
                        backend.kind()
                    ),
                ));
            }
        }
        Ok(())
    }
}

fn subcommand_error(name: &str, kind: ErrorKind, message: String) -> clap::Error {
    let mut cmd = Cmd::command();
    match cmd.find_subcommand_mut(name) {
        Some(sub) => sub.error(kind, message),
        None => cmd.error(kind, message),
    }
}
