// Copyright (c) 2025 - Cowboy AI, Inc.

//! AWS Cloud Inventory
//!
//! Implements [`CloudInventory`] over the Elasticache and EC2 control plane
//! APIs. Credentials come from the default AWS provider chain; the region is
//! always the one from the input document.
//!
//! # API mapping
//!
//! ```text
//! subnet_group_subnets  = elasticache:DescribeCacheSubnetGroups
//! subnets               = ec2:DescribeSubnets          (paginated)
//! security_groups       = ec2:DescribeSecurityGroups   (paginated, group-id filter)
//! replication_group     = elasticache:DescribeReplicationGroups
//! parameter_group       = elasticache:DescribeCacheParameters
//! ```
//!
//! Security groups are looked up through a `group-id` filter instead of
//! `GroupIds`, so unknown ids come back as absent rather than failing the
//! whole call with `InvalidGroup.NotFound`.

use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region};
use aws_sdk_ec2::types::Filter;
use tracing::{debug, info};

use super::{CloudInventory, InventoryError, InventoryResult, Lookup, SecurityGroup, Subnet};

fn api_error(operation: &'static str, err: impl std::error::Error) -> InventoryError {
    InventoryError::Api {
        operation,
        message: aws_sdk_elasticache::error::DisplayErrorContext(err).to_string(),
    }
}

/// Inventory backed by live AWS APIs
#[derive(Debug, Clone)]
pub struct AwsInventory {
    elasticache: aws_sdk_elasticache::Client,
    ec2: aws_sdk_ec2::Client,
}

impl AwsInventory {
    /// Load AWS configuration for `region` and build the service clients
    pub async fn new(region: impl Into<String>) -> Self {
        let region = region.into();
        info!("Connecting to AWS in {}", region);

        let config = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(region))
            .load()
            .await;

        Self {
            elasticache: aws_sdk_elasticache::Client::new(&config),
            ec2: aws_sdk_ec2::Client::new(&config),
        }
    }
}

#[async_trait]
impl CloudInventory for AwsInventory {
    async fn subnet_group_subnets(&self, subnet_group_name: &str) -> InventoryResult<Vec<String>> {
        let response = match self
            .elasticache
            .describe_cache_subnet_groups()
            .cache_subnet_group_name(subnet_group_name)
            .send()
            .await
        {
            Ok(response) => response,
            Err(err) => {
                let err = err.into_service_error();
                if err.is_cache_subnet_group_not_found_fault() {
                    return Err(InventoryError::SubnetGroupNotFound(
                        subnet_group_name.to_string(),
                    ));
                }
                return Err(api_error("DescribeCacheSubnetGroups", err));
            }
        };

        let group = response
            .cache_subnet_groups()
            .first()
            .ok_or_else(|| InventoryError::SubnetGroupNotFound(subnet_group_name.to_string()))?;

        let subnet_ids: Vec<String> = group
            .subnets()
            .iter()
            .filter_map(|s| s.subnet_identifier().map(str::to_string))
            .collect();
        debug!(
            "Subnet group {} has subnets {:?}",
            subnet_group_name, subnet_ids
        );
        Ok(subnet_ids)
    }

    async fn subnets(&self, subnet_ids: &[String]) -> InventoryResult<Vec<Subnet>> {
        if subnet_ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut pages = self
            .ec2
            .describe_subnets()
            .set_subnet_ids(Some(subnet_ids.to_vec()))
            .into_paginator()
            .items()
            .send();

        let mut subnets = Vec::new();
        while let Some(item) = pages.next().await {
            let subnet = item.map_err(|e| api_error("DescribeSubnets", e.into_service_error()))?;
            if let Some(id) = subnet.subnet_id() {
                subnets.push(Subnet {
                    id: id.to_string(),
                    vpc_id: subnet.vpc_id().map(str::to_string),
                });
            }
        }
        Ok(subnets)
    }

    async fn security_groups(&self, group_ids: &[String]) -> InventoryResult<Vec<SecurityGroup>> {
        // an empty filter would match every group in the account
        if group_ids.is_empty() {
            return Ok(Vec::new());
        }

        let filter = Filter::builder()
            .name("group-id")
            .set_values(Some(group_ids.to_vec()))
            .build();

        let mut pages = self
            .ec2
            .describe_security_groups()
            .filters(filter)
            .into_paginator()
            .items()
            .send();

        let mut groups = Vec::new();
        while let Some(item) = pages.next().await {
            let group =
                item.map_err(|e| api_error("DescribeSecurityGroups", e.into_service_error()))?;
            if let Some(id) = group.group_id() {
                groups.push(SecurityGroup {
                    id: id.to_string(),
                    vpc_id: group.vpc_id().map(str::to_string),
                });
            }
        }
        Ok(groups)
    }

    async fn replication_group(&self, replication_group_id: &str) -> InventoryResult<Lookup> {
        match self
            .elasticache
            .describe_replication_groups()
            .replication_group_id(replication_group_id)
            .send()
            .await
        {
            Ok(_) => Ok(Lookup::Found),
            Err(err) => {
                let err = err.into_service_error();
                if err.is_replication_group_not_found_fault() {
                    Ok(Lookup::NotFound)
                } else {
                    Err(api_error("DescribeReplicationGroups", err))
                }
            }
        }
    }

    async fn parameter_group(&self, name: &str) -> InventoryResult<Lookup> {
        match self
            .elasticache
            .describe_cache_parameters()
            .cache_parameter_group_name(name)
            .send()
            .await
        {
            Ok(_) => Ok(Lookup::Found),
            Err(err) => {
                let err = err.into_service_error();
                if err.is_cache_parameter_group_not_found_fault() {
                    Ok(Lookup::NotFound)
                } else {
                    Err(api_error("DescribeCacheParameters", err))
                }
            }
        }
    }

    fn name(&self) -> &str {
        "aws"
    }
}
