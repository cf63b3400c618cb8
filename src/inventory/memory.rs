// Copyright (c) 2025 - Cowboy AI, Inc.
//! In-memory cloud inventory
//!
//! Static snapshot of cloud state, for tests and offline dry runs.

use async_trait::async_trait;
use std::collections::{BTreeMap, BTreeSet};

use super::{CloudInventory, InventoryError, InventoryResult, Lookup, SecurityGroup, Subnet};

#[derive(Debug, Clone, Default)]
pub struct InMemoryInventory {
    subnet_groups: BTreeMap<String, Vec<String>>,
    subnets: BTreeMap<String, Option<String>>,
    security_groups: BTreeMap<String, Option<String>>,
    replication_groups: BTreeSet<String>,
    parameter_groups: BTreeSet<String>,
    /// Existence checks that fail instead of answering, keyed by identifier
    failing_lookups: BTreeMap<String, String>,
}

impl InMemoryInventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a subnet group made of the given subnet ids
    pub fn with_subnet_group<I, S>(mut self, name: impl Into<String>, subnet_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.subnet_groups
            .insert(name.into(), subnet_ids.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_subnet(mut self, id: impl Into<String>, vpc_id: impl Into<String>) -> Self {
        self.subnets.insert(id.into(), Some(vpc_id.into()));
        self
    }

    /// Subnet whose record carries no VPC id
    pub fn with_detached_subnet(mut self, id: impl Into<String>) -> Self {
        self.subnets.insert(id.into(), None);
        self
    }

    pub fn with_security_group(mut self, id: impl Into<String>, vpc_id: impl Into<String>) -> Self {
        self.security_groups.insert(id.into(), Some(vpc_id.into()));
        self
    }

    pub fn with_replication_group(mut self, id: impl Into<String>) -> Self {
        self.replication_groups.insert(id.into());
        self
    }

    pub fn with_parameter_group(mut self, name: impl Into<String>) -> Self {
        self.parameter_groups.insert(name.into());
        self
    }

    /// Make the existence check for `id` fail with an API error
    pub fn with_failing_lookup(
        mut self,
        id: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        self.failing_lookups.insert(id.into(), message.into());
        self
    }

    fn existence(
        &self,
        operation: &'static str,
        known: &BTreeSet<String>,
        id: &str,
    ) -> InventoryResult<Lookup> {
        if let Some(message) = self.failing_lookups.get(id) {
            return Err(InventoryError::Api {
                operation,
                message: message.clone(),
            });
        }
        Ok(if known.contains(id) {
            Lookup::Found
        } else {
            Lookup::NotFound
        })
    }
}

#[async_trait]
impl CloudInventory for InMemoryInventory {
    async fn subnet_group_subnets(&self, subnet_group_name: &str) -> InventoryResult<Vec<String>> {
        self.subnet_groups
            .get(subnet_group_name)
            .cloned()
            .ok_or_else(|| InventoryError::SubnetGroupNotFound(subnet_group_name.to_string()))
    }

    async fn subnets(&self, subnet_ids: &[String]) -> InventoryResult<Vec<Subnet>> {
        Ok(subnet_ids
            .iter()
            .filter_map(|id| {
                self.subnets.get(id).map(|vpc_id| Subnet {
                    id: id.clone(),
                    vpc_id: vpc_id.clone(),
                })
            })
            .collect())
    }

    async fn security_groups(&self, group_ids: &[String]) -> InventoryResult<Vec<SecurityGroup>> {
        Ok(group_ids
            .iter()
            .filter_map(|id| {
                self.security_groups.get(id).map(|vpc_id| SecurityGroup {
                    id: id.clone(),
                    vpc_id: vpc_id.clone(),
                })
            })
            .collect())
    }

    async fn replication_group(&self, replication_group_id: &str) -> InventoryResult<Lookup> {
        self.existence(
            "DescribeReplicationGroups",
            &self.replication_groups,
            replication_group_id,
        )
    }

    async fn parameter_group(&self, name: &str) -> InventoryResult<Lookup> {
        self.existence("DescribeCacheParameters", &self.parameter_groups, name)
    }

    fn name(&self) -> &str {
        "in-memory"
    }
}
