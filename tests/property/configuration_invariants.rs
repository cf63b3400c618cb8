// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests for Configuration Invariants
//!
//! Each invariant must reject every input in its forbidden region, whatever
//! the other fields look like.

use er_aws_elasticache::{AppInterfaceInput, ElasticacheError, ValidationError};
use proptest::prelude::*;
use serde_json::{json, Value};

use crate::fixtures::raw_input_with;

fn rejects_with(overrides: Value, expected: ValidationError) -> bool {
    match AppInterfaceInput::from_value(raw_input_with(overrides)) {
        Err(ElasticacheError::InvalidConfiguration(violations)) => violations.contains(&expected),
        _ => false,
    }
}

proptest! {
    #[test]
    fn prop_failover_needs_two_clusters(clusters in 0u32..2) {
        prop_assert!(rejects_with(
            json!({"automatic_failover_enabled": true, "number_cache_clusters": clusters}),
            ValidationError::FailoverNeedsTwoClusters,
        ));
    }

    #[test]
    fn prop_failover_accepts_two_or_more(clusters in 2u32..10) {
        prop_assert!(AppInterfaceInput::from_value(raw_input_with(
            json!({"automatic_failover_enabled": true, "number_cache_clusters": clusters})
        )).is_ok());
    }

    #[test]
    fn prop_redis_five_rejects_minor_upgrade(minor in 0u32..10, patch in 0u32..20) {
        prop_assert!(rejects_with(
            json!({
                "engine_version": format!("5.{minor}.{patch}"),
                "auto_minor_version_upgrade": true
            }),
            ValidationError::AutoMinorVersionUpgradeOnRedis5,
        ));
    }

    #[test]
    fn prop_multi_az_needs_failover(failover in proptest::option::of(Just(false))) {
        prop_assert!(rejects_with(
            json!({"multi_az_enabled": true, "automatic_failover_enabled": failover}),
            ValidationError::MultiAzWithoutFailover,
        ));
    }

    #[test]
    fn prop_node_groups_exclude_cluster_count(groups in 1u32..16, clusters in 1u32..16) {
        prop_assert!(rejects_with(
            json!({"num_node_groups": groups, "number_cache_clusters": clusters}),
            ValidationError::ClusterCountAndNodeGroups,
        ));
    }

    #[test]
    fn prop_node_groups_exclude_zones(
        groups in 1u32..16,
        zones in prop::collection::vec("us-east-1[a-f]", 1..4),
    ) {
        prop_assert!(rejects_with(
            json!({"num_node_groups": groups, "availability_zones": zones}),
            ValidationError::AvailabilityZonesWithNodeGroups,
        ));
    }

    #[test]
    fn prop_t1_micro_rejects_snapshots(limit in 1u32..36) {
        prop_assert!(rejects_with(
            json!({"node_type": "cache.t1.micro", "snapshot_retention_limit": limit}),
            ValidationError::SnapshotRetentionOnT1Micro,
        ));
    }
}
