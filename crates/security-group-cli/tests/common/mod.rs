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

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use security_group_cli::clients::{
    ComputeClient, ComputeIpRange, ComputeRuleGroup, ComputeSearchOpts, ComputeSecurityGroup,
    ComputeSecurityGroupRule, IdentityClient, NetworkClient, NetworkSecurityGroup,
    NetworkSecurityGroupCreate, NetworkSecurityGroupRule, NetworkSecurityGroupUpdate,
};
use security_group_cli::{ClientError, ClientManager, SecurityGroupHandler, SessionConfig};

pub const PROJECT_NAME: &str = "project-name";
pub const PROJECT_ID: &str = "project-id-1";
pub const DOMAIN_NAME: &str = "domain-name";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NetworkCall {
    Create(NetworkSecurityGroupCreate),
    Find {
        name_or_id: String,
        ignore_missing: bool,
    },
    Delete(NetworkSecurityGroup),
    Update(NetworkSecurityGroup, NetworkSecurityGroupUpdate),
    List,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ComputeCall {
    Create(String, String),
    Get(String),
    Delete(String),
    Update(ComputeSecurityGroup, String, String),
    List(ComputeSearchOpts),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IdentityCall {
    pub project: String,
    pub domain: Option<String>,
}

/// NetworkClient which serves one predefined group and records every call.
#[derive(Default)]
pub struct MockNetworkClient {
    pub group: NetworkSecurityGroup,
    pub fail_with: Option<ClientError>,
    pub calls: Mutex<Vec<NetworkCall>>,
}

impl MockNetworkClient {
    pub fn new(group: NetworkSecurityGroup) -> Self {
        Self {
            group,
            ..Default::default()
        }
    }

    pub fn calls(&self) -> Vec<NetworkCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: NetworkCall) -> Result<(), ClientError> {
        self.calls.lock().unwrap().push(call);
        match &self.fail_with {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

#[async_trait::async_trait]
impl NetworkClient for MockNetworkClient {
    async fn create_security_group(
        &self,
        attrs: &NetworkSecurityGroupCreate,
    ) -> Result<NetworkSecurityGroup, ClientError> {
        self.record(NetworkCall::Create(attrs.clone()))?;
        Ok(self.group.clone())
    }

    async fn find_security_group(
        &self,
        name_or_id: &str,
        ignore_missing: bool,
    ) -> Result<Option<NetworkSecurityGroup>, ClientError> {
        self.record(NetworkCall::Find {
            name_or_id: name_or_id.to_string(),
            ignore_missing,
        })?;
        if self.group.id == name_or_id || self.group.name == name_or_id {
            Ok(Some(self.group.clone()))
        } else if ignore_missing {
            Ok(None)
        } else {
            Err(ClientError::NotFound {
                kind: "security group",
                id: name_or_id.to_string(),
            })
        }
    }

    async fn delete_security_group(
        &self,
        group: &NetworkSecurityGroup,
    ) -> Result<(), ClientError> {
        self.record(NetworkCall::Delete(group.clone()))
    }

    async fn update_security_group(
        &self,
        group: &NetworkSecurityGroup,
        attrs: &NetworkSecurityGroupUpdate,
    ) -> Result<NetworkSecurityGroup, ClientError> {
        self.record(NetworkCall::Update(group.clone(), attrs.clone()))?;
        Ok(group.clone())
    }

    async fn security_groups(&self) -> Result<Vec<NetworkSecurityGroup>, ClientError> {
        self.record(NetworkCall::List)?;
        Ok(vec![self.group.clone()])
    }
}

/// ComputeClient which serves one predefined group and records every call.
#[derive(Default)]
pub struct MockComputeClient {
    pub group: ComputeSecurityGroup,
    pub fail_with: Option<ClientError>,
    pub calls: Mutex<Vec<ComputeCall>>,
}

impl MockComputeClient {
    pub fn new(group: ComputeSecurityGroup) -> Self {
        Self {
            group,
            ..Default::default()
        }
    }

    pub fn calls(&self) -> Vec<ComputeCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: ComputeCall) -> Result<(), ClientError> {
        self.calls.lock().unwrap().push(call);
        match &self.fail_with {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

#[async_trait::async_trait]
impl ComputeClient for MockComputeClient {
    async fn create_security_group(
        &self,
        name: &str,
        description: &str,
    ) -> Result<ComputeSecurityGroup, ClientError> {
        self.record(ComputeCall::Create(name.to_string(), description.to_string()))?;
        Ok(self.group.clone())
    }

    async fn get_security_group(&self, id: &str) -> Result<ComputeSecurityGroup, ClientError> {
        self.record(ComputeCall::Get(id.to_string()))?;
        if self.group.id == id || self.group.name == id {
            Ok(self.group.clone())
        } else {
            Err(ClientError::NotFound {
                kind: "security group",
                id: id.to_string(),
            })
        }
    }

    async fn delete_security_group(&self, id: &str) -> Result<(), ClientError> {
        self.record(ComputeCall::Delete(id.to_string()))
    }

    async fn update_security_group(
        &self,
        group: &ComputeSecurityGroup,
        name: &str,
        description: &str,
    ) -> Result<ComputeSecurityGroup, ClientError> {
        self.record(ComputeCall::Update(
            group.clone(),
            name.to_string(),
            description.to_string(),
        ))?;
        Ok(group.clone())
    }

    async fn list_security_groups(
        &self,
        search_opts: &ComputeSearchOpts,
    ) -> Result<Vec<ComputeSecurityGroup>, ClientError> {
        self.record(ComputeCall::List(*search_opts))?;
        Ok(vec![self.group.clone()])
    }
}

/// IdentityClient that knows a single project, `PROJECT_NAME` in
/// `DOMAIN_NAME`, which can also be looked up without a domain.
#[derive(Default)]
pub struct MockIdentityClient {
    pub calls: Mutex<Vec<IdentityCall>>,
}

impl MockIdentityClient {
    pub fn calls(&self) -> Vec<IdentityCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl IdentityClient for MockIdentityClient {
    async fn resolve_project(
        &self,
        name_or_id: &str,
        domain: Option<&str>,
    ) -> Result<String, ClientError> {
        self.calls.lock().unwrap().push(IdentityCall {
            project: name_or_id.to_string(),
            domain: domain.map(str::to_string),
        });
        let known_project = name_or_id == PROJECT_NAME || name_or_id == PROJECT_ID;
        let known_domain = domain.map_or(true, |d| d == DOMAIN_NAME);
        if known_project && known_domain {
            Ok(PROJECT_ID.to_string())
        } else {
            Err(ClientError::NotFound {
                kind: "project",
                id: name_or_id.to_string(),
            })
        }
    }
}

pub fn network_rule() -> NetworkSecurityGroupRule {
    NetworkSecurityGroupRule {
        id: "rule-id-1".to_string(),
        security_group_id: "sg-id-1".to_string(),
        direction: "ingress".to_string(),
        ethertype: "IPv4".to_string(),
        protocol: Some("tcp".to_string()),
        port_range_min: Some(443),
        port_range_max: Some(443),
        remote_ip_prefix: Some("0.0.0.0/0".to_string()),
        remote_group_id: None,
        description: None,
        project_id: Some(PROJECT_ID.to_string()),
        tenant_id: Some(PROJECT_ID.to_string()),
    }
}

pub fn network_group(rules: Vec<NetworkSecurityGroupRule>) -> NetworkSecurityGroup {
    NetworkSecurityGroup {
        id: "sg-id-1".to_string(),
        name: "security-group-name-1".to_string(),
        description: "security-group-description-1".to_string(),
        project_id: Some(PROJECT_ID.to_string()),
        tenant_id: Some(PROJECT_ID.to_string()),
        security_group_rules: rules,
    }
}

pub fn compute_rule(id: &str) -> ComputeSecurityGroupRule {
    ComputeSecurityGroupRule {
        id: id.to_string(),
        parent_group_id: "sg-id-2".to_string(),
        ip_protocol: Some("tcp".to_string()),
        from_port: Some(22),
        to_port: Some(22),
        ip_range: ComputeIpRange {
            cidr: Some("10.0.0.0/8".to_string()),
        },
        group: ComputeRuleGroup::default(),
    }
}

pub fn compute_group(rules: Vec<ComputeSecurityGroupRule>) -> ComputeSecurityGroup {
    ComputeSecurityGroup {
        id: "sg-id-2".to_string(),
        name: "security-group-name-2".to_string(),
        description: "security-group-description-2".to_string(),
        tenant_id: "tenant-id-2".to_string(),
        rules,
    }
}

/// Clients of one test, with the mocks kept around for assertions.
pub struct Fixture {
    pub network: Arc<MockNetworkClient>,
    pub compute: Arc<MockComputeClient>,
    pub identity: Arc<MockIdentityClient>,
    pub clients: ClientManager,
}

impl Fixture {
    pub fn new(
        network_endpoint_enabled: bool,
        network: MockNetworkClient,
        compute: MockComputeClient,
    ) -> Self {
        let network = Arc::new(network);
        let compute = Arc::new(compute);
        let identity = Arc::new(MockIdentityClient::default());
        let clients = ClientManager {
            session: SessionConfig {
                network_endpoint_enabled,
            },
            identity: identity.clone(),
            network: network.clone(),
            compute: compute.clone(),
        };
        Self {
            network,
            compute,
            identity,
            clients,
        }
    }

    pub fn network(group: NetworkSecurityGroup) -> Self {
        Self::new(
            true,
            MockNetworkClient::new(group),
            MockComputeClient::default(),
        )
    }

    pub fn compute(group: ComputeSecurityGroup) -> Self {
        Self::new(
            false,
            MockNetworkClient::default(),
            MockComputeClient::new(group),
        )
    }

    pub fn handler(&self) -> SecurityGroupHandler {
        SecurityGroupHandler::new(&self.clients)
    }

    pub fn no_backend_calls(&self) -> bool {
        self.network.calls().is_empty()
            && self.compute.calls().is_empty()
            && self.identity.calls().is_empty()
    }
}

/// Prepends the program name to a command line.
pub fn argv<'a>(args: &[&'a str]) -> Vec<&'a str> {
    std::iter::once("security-group")
        .chain(args.iter().copied())
        .collect()
}
