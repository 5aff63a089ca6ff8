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

use super::args::{
    CreateSecurityGroup, DeleteSecurityGroup, ListSecurityGroup, SetSecurityGroup,
    ShowSecurityGroup,
};
use crate::adapter::{LIST_COLUMNS, LIST_PROJECT_COLUMN, SHOW_COLUMNS, SecurityGroupView};
use crate::backend::SecurityGroupBackend;
use crate::errors::SecurityGroupCliResult;
use crate::output::CommandOutput;

fn show_one(view: SecurityGroupView) -> CommandOutput {
    CommandOutput::ShowOne {
        columns: SHOW_COLUMNS.to_vec(),
        data: view.into_show_row(),
    }
}

/// Create a security group. The description defaults to the name.
pub async fn create(
    args: CreateSecurityGroup,
    backend: &dyn SecurityGroupBackend,
) -> SecurityGroupCliResult<CommandOutput> {
    let view = backend.create(&args.into()).await?;
    Ok(show_one(view))
}

pub async fn delete(
    args: DeleteSecurityGroup,
    backend: &dyn SecurityGroupBackend,
) -> SecurityGroupCliResult<CommandOutput> {
    backend.delete(&args.group).await?;
    Ok(CommandOutput::Empty)
}

/// List security groups. The project column is always present for the
/// network service and only with `--all-projects` for the compute service.
pub async fn list(
    args: ListSecurityGroup,
    backend: &dyn SecurityGroupBackend,
) -> SecurityGroupCliResult<CommandOutput> {
    let with_project = backend.list_shows_project(args.all_projects);
    let views = backend.list(args.all_projects).await?;

    let mut columns = LIST_COLUMNS.to_vec();
    if with_project {
        columns.push(LIST_PROJECT_COLUMN);
    }
    let rows = views
        .into_iter()
        .map(|view| view.into_list_row(with_project))
        .collect();

    Ok(CommandOutput::Lister { columns, rows })
}

/// Update name and/or description. With neither given the update call is
/// still made.
pub async fn set(
    args: SetSecurityGroup,
    backend: &dyn SecurityGroupBackend,
) -> SecurityGroupCliResult<CommandOutput> {
    let group = args.group.clone();
    backend.update(&group, &args.into()).await?;
    Ok(CommandOutput::Empty)
}

pub async fn show(
    args: ShowSecurityGroup,
    backend: &dyn SecurityGroupBackend,
) -> SecurityGroupCliResult<CommandOutput> {
    let view = backend.show(&args.group).await?;
    Ok(show_one(view))
}
