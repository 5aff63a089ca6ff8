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

use std::env;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;

use crate::errors::{SecurityGroupCliError, SecurityGroupCliResult};

pub const NETWORK_ENDPOINT_ENABLED_ENV: &str = "SECURITY_GROUP_NETWORK_ENDPOINT_ENABLED";
pub const CONFIG_FILE: &str = ".config/security_group_cli.json";

/// Per-invocation session settings. Read only for the command layer.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Whether the network service is deployed. When it is not, security
    /// groups are managed through the compute service.
    pub network_endpoint_enabled: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            network_endpoint_enabled: true,
        }
    }
}

impl SessionConfig {
    /// Resolves the session configuration, in order of preference:
    /// 1. `network_endpoint_enabled` passed in by the caller (command line)
    /// 2. SECURITY_GROUP_NETWORK_ENDPOINT_ENABLED environment variable
    /// 3. $HOME/.config/security_group_cli.json
    /// 4. the default, which is to use the network service
    pub fn load(network_endpoint_enabled: Option<bool>) -> SecurityGroupCliResult<Self> {
        let file_config = match env::var("HOME") {
            Ok(home) => Self::from_file(&Path::new(&home).join(CONFIG_FILE))?,
            Err(_) => None,
        };
        let env_value = env::var(NETWORK_ENDPOINT_ENABLED_ENV).ok();
        Self::resolve(network_endpoint_enabled, env_value.as_deref(), file_config)
    }

    fn resolve(
        flag: Option<bool>,
        env_value: Option<&str>,
        file_config: Option<SessionConfig>,
    ) -> SecurityGroupCliResult<Self> {
        if let Some(network_endpoint_enabled) = flag {
            return Ok(Self {
                network_endpoint_enabled,
            });
        }

        if let Some(value) = env_value {
            let network_endpoint_enabled =
                parse_bool(value).ok_or_else(|| SecurityGroupCliError::InvalidEnv {
                    name: NETWORK_ENDPOINT_ENABLED_ENV,
                    value: value.to_string(),
                })?;
            return Ok(Self {
                network_endpoint_enabled,
            });
        }

        Ok(file_config.unwrap_or_default())
    }

    /// Reads a config file. A missing file is not an error, an unreadable or
    /// malformed one is.
    pub fn from_file(path: &Path) -> SecurityGroupCliResult<Option<Self>> {
        if !path.exists() {
            return Ok(None);
        }
        let config_error = |reason: String| SecurityGroupCliError::Config {
            path: path.to_path_buf(),
            reason,
        };
        let file = File::open(path).map_err(|e| config_error(e.to_string()))?;
        let config: Self = serde_json::from_reader(BufReader::new(file))
            .map_err(|e| config_error(e.to_string()))?;
        tracing::debug!(path = %path.display(), ?config, "Loaded session config");
        Ok(Some(config))
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
