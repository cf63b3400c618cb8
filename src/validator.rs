// Copyright (c) 2025 - Cowboy AI, Inc.
//! Plan Validator
//!
//! Cross-checks a Terraform change-plan against live cloud state before it is
//! applied.
//!
//! # Checks
//!
//! For every replication group being created (with post-change values):
//! 1. No replication group with the target id exists yet
//! 2. All subnets of its subnet group live in a single VPC
//! 3. When that VPC is known, every security group exists and lives in it
//!
//! For every parameter group being created:
//! 4. No parameter group with that name exists yet
//!
//! Business-rule violations are collected as [`Finding`]s and never stop
//! evaluation of later changes. Inventory failures (a missing subnet group,
//! API errors) are fatal and propagate.

use serde_json::{Map, Value};
use std::collections::BTreeSet;
use std::fmt;
use tracing::{info, info_span, warn, Instrument};

use crate::domain::ElasticacheData;
use crate::errors::{ElasticacheError, ElasticacheResult};
use crate::inventory::CloudInventory;
use crate::plan::{Action, Plan, ResourceChange};
use crate::stack::{PARAMETER_GROUP_TYPE, REPLICATION_GROUP_TYPE};

/// A business rule the plan would violate
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Finding {
    #[error("Replication group ID {0} already exists!")]
    ReplicationGroupExists(String),

    #[error("VpcId not found for subnet {0}")]
    SubnetWithoutVpc(String),

    #[error("All subnets must belong to the same VPC (subnet group {subnet_group}: {})", join(.vpc_ids))]
    SubnetsSpanMultipleVpcs {
        subnet_group: String,
        vpc_ids: BTreeSet<String>,
    },

    #[error("Security group(s) {} not found", join(.0))]
    SecurityGroupsNotFound(BTreeSet<String>),

    #[error("Security group {group_id} does not belong to the same VPC as the subnets ({vpc_id})")]
    SecurityGroupVpcMismatch { group_id: String, vpc_id: String },

    #[error("Parameter group {0} already exists!")]
    ParameterGroupExists(String),
}

fn join(items: &BTreeSet<String>) -> String {
    items.iter().cloned().collect::<Vec<_>>().join(", ")
}

/// Verdict of one validation run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    findings: Vec<Finding>,
}

impl ValidationReport {
    pub fn is_clean(&self) -> bool {
        self.findings.is_empty()
    }

    pub fn findings(&self) -> &[Finding] {
        &self.findings
    }

    pub fn into_findings(self) -> Vec<Finding> {
        self.findings
    }

    fn extend(&mut self, findings: impl IntoIterator<Item = Finding>) {
        self.findings.extend(findings);
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_clean() {
            return write!(f, "no findings");
        }
        for (i, finding) in self.findings.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "- {}", finding)?;
        }
        Ok(())
    }
}

/// Post-change fields of a replication group the validator needs
#[derive(Debug, Clone, PartialEq, Eq)]
struct ReplicationGroupTarget {
    replication_group_id: String,
    subnet_group_name: Option<String>,
    security_group_ids: Vec<String>,
}

impl ReplicationGroupTarget {
    fn from_after(change: &ResourceChange, after: &Map<String, Value>) -> ElasticacheResult<Self> {
        let replication_group_id = after
            .get("replication_group_id")
            .and_then(Value::as_str)
            .ok_or_else(|| {
                ElasticacheError::InvalidPlan(format!(
                    "{}.{} has no replication_group_id",
                    change.resource_type, change.name
                ))
            })?
            .to_string();

        let subnet_group_name = after
            .get("subnet_group_name")
            .and_then(Value::as_str)
            .map(str::to_string);

        let security_group_ids = after
            .get("security_group_ids")
            .and_then(Value::as_array)
            .map(|ids| {
                ids.iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        Ok(Self {
            replication_group_id,
            subnet_group_name,
            security_group_ids,
        })
    }
}

/// Validates a change-plan for one Elasticache input against live state
pub struct PlanValidator<'a, I: CloudInventory + ?Sized> {
    plan: &'a Plan,
    data: &'a ElasticacheData,
    inventory: &'a I,
}

impl<'a, I: CloudInventory + ?Sized> PlanValidator<'a, I> {
    pub fn new(plan: &'a Plan, data: &'a ElasticacheData, inventory: &'a I) -> Self {
        Self {
            plan,
            data,
            inventory,
        }
    }

    /// Replication groups being created, with known post-change values
    pub fn replication_group_creates(&self) -> Vec<&'a ResourceChange> {
        self.plan
            .changes(REPLICATION_GROUP_TYPE, Action::Create)
            .filter(|c| c.after_fields().is_some())
            .collect()
    }

    /// Parameter groups being created
    pub fn parameter_group_creates(&self) -> Vec<&'a ResourceChange> {
        self.plan
            .changes(PARAMETER_GROUP_TYPE, Action::Create)
            .collect()
    }

    /// Run every check and return the accumulated findings
    pub async fn validate(&self) -> ElasticacheResult<ValidationReport> {
        let span = info_span!(
            "validate_plan",
            identifier = %self.data.identifier,
            region = %self.data.region,
            inventory = self.inventory.name(),
        );
        self.run().instrument(span).await
    }

    async fn run(&self) -> ElasticacheResult<ValidationReport> {
        let mut report = ValidationReport::default();

        for change in self.replication_group_creates() {
            let Some(after) = change.after_fields() else {
                continue;
            };
            let target = ReplicationGroupTarget::from_after(change, after)?;
            report.extend(self.check_replication_group(&target).await?);
        }

        for change in self.parameter_group_creates() {
            let name = change
                .after_fields()
                .and_then(|after| after.get("name"))
                .and_then(Value::as_str)
                .unwrap_or(change.name.as_str());
            report.extend(self.check_parameter_group(name).await?);
        }

        Ok(report)
    }

    async fn check_replication_group(
        &self,
        target: &ReplicationGroupTarget,
    ) -> ElasticacheResult<Vec<Finding>> {
        let mut findings = self
            .check_replication_group_id(&target.replication_group_id)
            .await?;

        let Some(subnet_group) = target.subnet_group_name.as_deref() else {
            warn!(
                "Replication group {} has no subnet group, skipping network checks",
                target.replication_group_id
            );
            return Ok(findings);
        };

        let (vpc_id, subnet_findings) = self.check_subnets(subnet_group).await?;
        findings.extend(subnet_findings);

        if let Some(vpc_id) = vpc_id {
            findings.extend(
                self.check_security_groups(&target.security_group_ids, &vpc_id)
                    .await?,
            );
        }
        Ok(findings)
    }

    async fn check_replication_group_id(
        &self,
        replication_group_id: &str,
    ) -> ElasticacheResult<Vec<Finding>> {
        info!("Validating Elasticache replication group {}", replication_group_id);
        let lookup = self.inventory.replication_group(replication_group_id).await?;
        Ok(if lookup.exists() {
            vec![Finding::ReplicationGroupExists(
                replication_group_id.to_string(),
            )]
        } else {
            Vec::new()
        })
    }

    /// Resolve a subnet group to its single VPC
    ///
    /// Returns `None` when the subnets span several VPCs (reported as a
    /// finding) or when no subnet resolved to a VPC at all.
    async fn check_subnets(
        &self,
        subnet_group: &str,
    ) -> ElasticacheResult<(Option<String>, Vec<Finding>)> {
        info!("Validating Elasticache subnet group {}", subnet_group);
        let subnet_ids = self.inventory.subnet_group_subnets(subnet_group).await?;
        let subnets = self.inventory.subnets(&subnet_ids).await?;

        let mut findings = Vec::new();
        let mut vpc_ids = BTreeSet::new();
        for subnet in subnets {
            match subnet.vpc_id {
                Some(vpc_id) => {
                    vpc_ids.insert(vpc_id);
                }
                None => findings.push(Finding::SubnetWithoutVpc(subnet.id)),
            }
        }

        let vpc_id = match vpc_ids.len() {
            0 => {
                warn!(
                    "Subnet group {} resolved to no VPC, skipping security group checks",
                    subnet_group
                );
                None
            }
            1 => vpc_ids.into_iter().next(),
            _ => {
                findings.push(Finding::SubnetsSpanMultipleVpcs {
                    subnet_group: subnet_group.to_string(),
                    vpc_ids,
                });
                None
            }
        };
        Ok((vpc_id, findings))
    }

    async fn check_security_groups(
        &self,
        security_group_ids: &[String],
        vpc_id: &str,
    ) -> ElasticacheResult<Vec<Finding>> {
        info!("Validating security groups {:?}", security_group_ids);
        if security_group_ids.is_empty() {
            return Ok(Vec::new());
        }

        let groups = self.inventory.security_groups(security_group_ids).await?;
        let found: BTreeSet<&str> = groups.iter().map(|g| g.id.as_str()).collect();
        let missing: BTreeSet<String> = security_group_ids
            .iter()
            .filter(|id| !found.contains(id.as_str()))
            .cloned()
            .collect();
        if !missing.is_empty() {
            return Ok(vec![Finding::SecurityGroupsNotFound(missing)]);
        }

        Ok(groups
            .into_iter()
            .filter(|g| g.vpc_id.as_deref() != Some(vpc_id))
            .map(|g| Finding::SecurityGroupVpcMismatch {
                group_id: g.id,
                vpc_id: vpc_id.to_string(),
            })
            .collect())
    }

    async fn check_parameter_group(&self, name: &str) -> ElasticacheResult<Vec<Finding>> {
        info!("Validating Elasticache parameter group {}", name);
        let lookup = self.inventory.parameter_group(name).await?;
        Ok(if lookup.exists() {
            vec![Finding::ParameterGroupExists(name.to_string())]
        } else {
            Vec::new()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::InMemoryInventory;
    use serde_json::json;

    fn data() -> ElasticacheData {
        serde_json::from_value(json!({
            "region": "us-east-1",
            "identifier": "cache",
            "output_prefix": "cache-elasticache",
            "engine": "redis",
            "engine_version": "7.0",
            "node_type": "cache.t4g.micro",
            "replication_group_id": "cache-01"
        }))
        .unwrap()
    }

    fn plan(changes: Value) -> Plan {
        serde_json::from_value(json!({ "resource_changes": changes })).unwrap()
    }

    #[test]
    fn test_target_defaults_missing_security_groups_to_empty() {
        let change: ResourceChange = serde_json::from_value(json!({
            "type": "aws_elasticache_replication_group",
            "name": "cache",
            "change": {"actions": ["create"], "after": {"replication_group_id": "cache-01"}}
        }))
        .unwrap();
        let target =
            ReplicationGroupTarget::from_after(&change, change.after_fields().unwrap()).unwrap();
        assert!(target.security_group_ids.is_empty());
        assert!(target.subnet_group_name.is_none());
    }

    #[test]
    fn test_target_without_id_is_invalid_plan() {
        let change: ResourceChange = serde_json::from_value(json!({
            "type": "aws_elasticache_replication_group",
            "name": "cache",
            "change": {"actions": ["create"], "after": {"subnet_group_name": "default"}}
        }))
        .unwrap();
        let err = ReplicationGroupTarget::from_after(&change, change.after_fields().unwrap())
            .unwrap_err();
        assert!(matches!(err, ElasticacheError::InvalidPlan(_)));
    }

    #[tokio::test]
    async fn test_parameter_group_name_falls_back_to_resource_name() {
        let plan = plan(json!([{
            "type": "aws_elasticache_parameter_group",
            "name": "pg-01",
            "change": {"actions": ["create"], "after": null}
        }]));
        let data = data();
        let inventory = InMemoryInventory::new().with_parameter_group("pg-01");
        let report = PlanValidator::new(&plan, &data, &inventory)
            .validate()
            .await
            .unwrap();
        assert_eq!(
            report.findings(),
            &[Finding::ParameterGroupExists("pg-01".to_string())]
        );
    }

    #[tokio::test]
    async fn test_missing_subnet_group_name_skips_network_checks() {
        let plan = plan(json!([{
            "type": "aws_elasticache_replication_group",
            "name": "cache",
            "change": {"actions": ["create"], "after": {"replication_group_id": "cache-01"}}
        }]));
        let data = data();
        let inventory = InMemoryInventory::new();
        let report = PlanValidator::new(&plan, &data, &inventory)
            .validate()
            .await
            .unwrap();
        assert!(report.is_clean());
    }

    #[test]
    fn test_report_display() {
        let report = ValidationReport {
            findings: vec![
                Finding::ParameterGroupExists("pg".to_string()),
                Finding::SecurityGroupsNotFound(BTreeSet::from([
                    "sg-2".to_string(),
                    "sg-1".to_string(),
                ])),
            ],
        };
        assert_eq!(
            report.to_string(),
            "- Parameter group pg already exists!\n- Security group(s) sg-1, sg-2 not found"
        );
        assert_eq!(ValidationReport::default().to_string(), "no findings");
    }
}
