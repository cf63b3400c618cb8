// Copyright (c) 2025 - Cowboy AI, Inc.
//! Pure Validation Functions - Configuration Invariants
//!
//! Cross-field rules for [`ElasticacheData`]. Every rule is an independent
//! pure function over the whole candidate value, so they can run in any
//! order and all violations are reported together.
//!
//! # Rules
//!
//! 1. Automatic failover needs at least two cache clusters (when the count is explicit)
//! 2. No auto minor version upgrade on Redis 5.x
//! 3. Multi-AZ needs automatic failover
//! 4. `number_cache_clusters` and `num_node_groups` are mutually exclusive
//! 5. `availability_zones` cannot be combined with `num_node_groups`
//! 6. No snapshot retention on `cache.t1.micro`

use super::input::ElasticacheData;

/// Validation result with detailed error information
pub type ValidationResult = Result<(), ValidationError>;

/// A violated configuration invariant
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Automatic failover is not supported for clusters with less than 2 nodes. Set number_cache_clusters to 2 or more.")]
    FailoverNeedsTwoClusters,

    #[error("Auto minor version upgrade is not supported for Redis 5.x")]
    AutoMinorVersionUpgradeOnRedis5,

    #[error("Multi-AZ is only supported with automatic failover enabled. Either enable 'automatic_failover_enabled' or disable 'multi_az_enabled'")]
    MultiAzWithoutFailover,

    #[error("number_cache_clusters and cluster_mode.num_node_groups are mutually exclusive.")]
    ClusterCountAndNodeGroups,

    #[error("availability_zones and cluster_mode.num_node_groups are mutually exclusive. Use the subnet_group_name to control the availability zones.")]
    AvailabilityZonesWithNodeGroups,

    #[error("Snapshot retention limit is not supported for cache.t1.micro")]
    SnapshotRetentionOnT1Micro,
}

type Rule = fn(&ElasticacheData) -> ValidationResult;

const RULES: &[Rule] = &[
    validate_automatic_failover,
    validate_no_auto_minor_version_upgrade_for_redis_five,
    validate_multi_az_needs_automatic_failover,
    validate_cluster_count_vs_node_groups,
    validate_no_availability_zones_for_node_groups,
    validate_no_snapshot_retention_for_t1_micro,
];

fn truthy(value: Option<u32>) -> bool {
    value.unwrap_or(0) > 0
}

/// Run every rule and collect all violations
pub fn validate_all(data: &ElasticacheData) -> Result<(), Vec<ValidationError>> {
    let violations: Vec<ValidationError> = RULES
        .iter()
        .filter_map(|rule| rule(data).err())
        .collect();

    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

/// Failover needs a replica to fail over to
pub fn validate_automatic_failover(data: &ElasticacheData) -> ValidationResult {
    if data.automatic_failover_enabled.unwrap_or(false)
        && matches!(data.number_cache_clusters, Some(n) if n < 2)
    {
        return Err(ValidationError::FailoverNeedsTwoClusters);
    }
    Ok(())
}

pub fn validate_no_auto_minor_version_upgrade_for_redis_five(
    data: &ElasticacheData,
) -> ValidationResult {
    if data.engine == "redis"
        && data.engine_version.starts_with("5.")
        && data.auto_minor_version_upgrade.unwrap_or(false)
    {
        return Err(ValidationError::AutoMinorVersionUpgradeOnRedis5);
    }
    Ok(())
}

pub fn validate_multi_az_needs_automatic_failover(data: &ElasticacheData) -> ValidationResult {
    if data.multi_az_enabled.unwrap_or(false) && !data.automatic_failover_enabled.unwrap_or(false)
    {
        return Err(ValidationError::MultiAzWithoutFailover);
    }
    Ok(())
}

/// Zero counts are treated as unset
pub fn validate_cluster_count_vs_node_groups(data: &ElasticacheData) -> ValidationResult {
    if truthy(data.num_node_groups) && truthy(data.number_cache_clusters) {
        return Err(ValidationError::ClusterCountAndNodeGroups);
    }
    Ok(())
}

pub fn validate_no_availability_zones_for_node_groups(data: &ElasticacheData) -> ValidationResult {
    let has_zones = data
        .availability_zones
        .as_ref()
        .is_some_and(|zones| !zones.is_empty());

    if truthy(data.num_node_groups) && has_zones {
        return Err(ValidationError::AvailabilityZonesWithNodeGroups);
    }
    Ok(())
}

pub fn validate_no_snapshot_retention_for_t1_micro(data: &ElasticacheData) -> ValidationResult {
    if data.node_type == "cache.t1.micro" && truthy(data.snapshot_retention_limit) {
        return Err(ValidationError::SnapshotRetentionOnT1Micro);
    }
    Ok(())
}
