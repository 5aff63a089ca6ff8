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

use tracing_subscriber::filter::{EnvFilter, LevelFilter};
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;
use tracing_subscriber::util::TryInitError;

fn debug_level(debug: u8) -> Option<LevelFilter> {
    match debug {
        0 => None,
        1 => Some(LevelFilter::DEBUG),
        _ => Some(LevelFilter::TRACE),
    }
}

pub fn env_filter(debug: u8) -> EnvFilter {
    let mut env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();
    if let Some(level) = debug_level(debug) {
        env_filter = env_filter.add_directive(level.into());
    }
    env_filter
}

/// Installs the global subscriber. Log level is set from, in order of
/// preference:
/// 1. `--debug` on the command line (once for debug, twice for trace)
/// 2. RUST_LOG environment variable
/// 3. Level::Info
///
/// Logs go to stderr so they never mix with command output.
pub fn init(debug: u8) -> Result<(), TryInitError> {
    tracing_subscriber::registry()
        .with(fmt::Layer::default().compact().with_writer(std::io::stderr))
        .with(env_filter(debug))
        .try_init()
}
