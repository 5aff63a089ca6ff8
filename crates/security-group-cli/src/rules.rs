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

//! Human readable rendering of security group rules.
//!
//! Every rule becomes one line of `key='value'` pairs in ascending key order.
//! Keys with an empty value are left out, as are keys identifying the owning
//! group or project since the caller already shows those.

use crate::clients::{ComputeSecurityGroupRule, NetworkSecurityGroupRule};

/// Joins `(key, value)` pairs into `key='value', ...`, skipping empty values.
/// `fields` must already be sorted by key.
fn format_fields(fields: &[(&str, String)]) -> String {
    fields
        .iter()
        .filter(|(_, value)| !value.is_empty())
        .map(|(key, value)| format!("{key}='{value}'"))
        .collect::<Vec<_>>()
        .join(", ")
}

fn opt_to_string<T: ToString>(value: &Option<T>) -> String {
    value.as_ref().map(|v| v.to_string()).unwrap_or_default()
}

fn format_network_rule(rule: &NetworkSecurityGroupRule) -> String {
    format_fields(&[
        ("description", opt_to_string(&rule.description)),
        ("direction", rule.direction.clone()),
        ("ethertype", rule.ethertype.clone()),
        ("id", rule.id.clone()),
        ("port_range_max", opt_to_string(&rule.port_range_max)),
        ("port_range_min", opt_to_string(&rule.port_range_min)),
        ("protocol", opt_to_string(&rule.protocol)),
        ("remote_group_id", opt_to_string(&rule.remote_group_id)),
        ("remote_ip_prefix", opt_to_string(&rule.remote_ip_prefix)),
    ])
}

/// Rules of a network security group, one line per rule in the order the
/// service returned them.
pub fn format_network_rules(rules: &[NetworkSecurityGroupRule]) -> String {
    rules
        .iter()
        .map(format_network_rule)
        .collect::<Vec<_>>()
        .join("\n")
}

fn compute_port_range(rule: &ComputeSecurityGroupRule) -> String {
    let is_icmp = rule
        .ip_protocol
        .as_deref()
        .is_some_and(|p| p.eq_ignore_ascii_case("icmp"));
    if is_icmp {
        return String::new();
    }
    match (rule.from_port, rule.to_port) {
        (None, None) => String::new(),
        (from, to) => format!("{}:{}", opt_to_string(&from), opt_to_string(&to)),
    }
}

fn format_compute_rule(rule: &ComputeSecurityGroupRule) -> String {
    let fields = [
        ("id", rule.id.clone()),
        ("ip_protocol", opt_to_string(&rule.ip_protocol)),
        ("ip_range", opt_to_string(&rule.ip_range.cidr)),
        ("port_range", compute_port_range(rule)),
        ("remote_security_group", opt_to_string(&rule.group.name)),
    ];
    // id stays even when empty so every rule keeps a line of its own.
    let mut line = format!("id='{}'", fields[0].1);
    let rest = format_fields(&fields[1..]);
    if !rest.is_empty() {
        line.push_str(", ");
        line.push_str(&rest);
    }
    line
}

/// Rules of a compute security group. Lines are sorted so the output does
/// not depend on the order the service returned the rules in.
pub fn format_compute_rules(rules: &[ComputeSecurityGroupRule]) -> String {
    let mut lines = rules.iter().map(format_compute_rule).collect::<Vec<_>>();
    lines.sort();
    lines.join("\n")
}
