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

use std::path::PathBuf;

/// ClientError is returned by the identity, network and compute clients.
/// The command layer never rewrites these, it only wraps them.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
    #[error("No {kind} found for {id}")]
    NotFound { kind: &'static str, id: String },

    #[error("Request failed: {0}")]
    Request(String),
}

#[derive(thiserror::Error, Debug)]
pub enum SecurityGroupCliError {
    #[error("{0}")]
    Parse(#[from] clap::Error),

    #[error("Unable to resolve project {project}{}: {source}", domain_suffix(.domain))]
    ProjectResolution {
        project: String,
        domain: Option<String>,
        source: ClientError,
    },

    #[error("The backend call returned: {0}")]
    Backend(#[from] ClientError),

    #[error("Unable to load configuration from {path}: {reason}")]
    Config { path: PathBuf, reason: String },

    #[error("Invalid value '{value}' for {name}: expected a boolean")]
    InvalidEnv { name: &'static str, value: String },

    #[error("Error while writing into string: {0}")]
    StringWriteError(#[from] std::fmt::Error),

    #[error("Error while handling json: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Error while handling yaml: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("Error while writing csv: {0}")]
    CsvError(String),

    #[error("I/O error. Does the file exist? {0}")]
    IOError(#[from] std::io::Error),
}

fn domain_suffix(domain: &Option<String>) -> String {
    match domain {
        Some(domain) => format!(" in domain {domain}"),
        None => String::new(),
    }
}

impl SecurityGroupCliError {
    /// True for errors raised while validating the command line, before any
    /// backend call was made. `--help` and `--version` are not errors.
    pub fn is_parse_error(&self) -> bool {
        matches!(self, SecurityGroupCliError::Parse(err) if err.use_stderr())
    }
}

pub type SecurityGroupCliResult<T> = Result<T, SecurityGroupCliError>;
