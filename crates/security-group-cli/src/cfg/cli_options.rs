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
use clap::{ArgAction, Parser};

use crate::output::{Destination, OutputFormat};
use crate::security_group;

#[derive(Parser, Debug)]
#[clap(name = "security-group")]
pub struct CliOptions {
    #[clap(short, long, value_enum, default_value = "ascii-table")]
    pub format: OutputFormat,

    #[clap(short, long, help = "Write output to this file instead of stdout")]
    pub output: Option<String>,

    #[clap(short, long, action = ArgAction::Count, help = "Increase log verbosity")]
    pub debug: u8,

    #[clap(
        long,
        help = "Manage security groups through the network service (true) or the compute service (false). Defaults to SECURITY_GROUP_NETWORK_ENDPOINT_ENABLED or $HOME/.config/security_group_cli.json."
    )]
    pub network_endpoint_enabled: Option<bool>,

    #[clap(subcommand)]
    pub command: security_group::Cmd,
}

impl CliOptions {
    pub fn destination(&self) -> Destination {
        self.output.clone().into()
    }
}
