// Copyright (c) 2025 - Cowboy AI, Inc.
//! Test Fixtures for er-aws-elasticache
//!
//! Deterministic input documents, plans and cloud inventories shared by the
//! integration tests.
//!
//! # Design Principles
//! - Fixtures are plain data; every test starts from the same baseline
//! - Tests tweak the baseline through `input_with`, never by hand-building documents
#![allow(dead_code)]

use er_aws_elasticache::{AppInterfaceInput, InMemoryInventory, Plan};
use serde_json::{json, Value};

pub const REPLICATION_GROUP_ID: &str = "elasticache-example-01";
pub const IDENTIFIER: &str = "example-elasticache";
pub const OUTPUT_PREFIX: &str = "example-elasticache-elasticache";
pub const PARAMETER_GROUP: &str = "elasticache-example-01-pg";
pub const SUBNET_GROUP: &str = "default";

/// Raw input document, as the provisioning framework hands it over
pub fn raw_input() -> Value {
    json!({
        "data": {
            "replication_group_id": REPLICATION_GROUP_ID,
            "replication_group_description": "test instance",
            "node_type": "cache.t4g.micro",
            "automatic_failover_enabled": true,
            "auto_minor_version_upgrade": false,
            "engine": "redis",
            "at_rest_encryption_enabled": true,
            "transit_encryption_enabled": true,
            "engine_version": "6.2",
            "apply_immediately": true,
            "security_group_ids": ["sg-123456789"],
            "maintenance_window": "wed:10:00-wed:11:00",
            "snapshot_window": "03:30-05:30",
            "snapshot_retention_limit": 2,
            "subnet_group_name": SUBNET_GROUP,
            "number_cache_clusters": 2,
            "identifier": IDENTIFIER,
            "parameter_group": {
                "family": "redis6.x",
                "description": "Just an example parameter group",
                "parameters": [{"name": "tcp-keepalive", "value": "300"}],
                "name": PARAMETER_GROUP
            },
            "output_resource_name": IDENTIFIER,
            "output_prefix": OUTPUT_PREFIX,
            "tags": {
                "managed_by_integration": "external_resources",
                "cluster": "appint-ex-01",
                "namespace": "example-elasticache-01",
                "environment": "production",
                "app": "elasticache-example"
            },
            "default_tags": [{"tags": {"app": "app-sre-infra"}}],
            "region": "us-east-1",
            "parameter_group_name": PARAMETER_GROUP
        },
        "provision": {
            "provision_provider": "aws",
            "provisioner": "app-int-example-01",
            "provider": "elasticache",
            "identifier": IDENTIFIER,
            "target_cluster": "appint-ex-01",
            "target_namespace": "example-elasticache-01",
            "target_secret_name": IDENTIFIER,
            "module_provision_data": {
                "tf_state_bucket": "external-resources-terraform-state-dev",
                "tf_state_region": "us-east-1",
                "tf_state_dynamodb_table": "external-resources-terraform-lock",
                "tf_state_key": "aws/app-int-example-01/elasticache/example-elasticache/terraform.tfstate"
            }
        }
    })
}

/// Raw input with `data` fields overridden (null removes the field)
pub fn raw_input_with(overrides: Value) -> Value {
    let mut doc = raw_input();
    let data = doc["data"]
        .as_object_mut()
        .expect("fixture data is an object");
    for (key, value) in overrides.as_object().expect("overrides must be an object") {
        if value.is_null() {
            data.remove(key);
        } else {
            data.insert(key.clone(), value.clone());
        }
    }
    doc
}

pub fn input() -> AppInterfaceInput {
    AppInterfaceInput::from_value(raw_input()).expect("baseline fixture is valid")
}

pub fn input_with(overrides: Value) -> AppInterfaceInput {
    AppInterfaceInput::from_value(raw_input_with(overrides)).expect("fixture override is valid")
}

/// Plan creating the baseline replication group and parameter group
pub fn create_plan() -> Plan {
    plan(json!([
        replication_group_change(REPLICATION_GROUP_ID, SUBNET_GROUP, &["sg-1", "sg-2"]),
        parameter_group_change(PARAMETER_GROUP, &["create"]),
    ]))
}

pub fn plan(resource_changes: Value) -> Plan {
    serde_json::from_value(json!({
        "format_version": "1.2",
        "terraform_version": "1.9.8",
        "resource_changes": resource_changes
    }))
    .expect("fixture plan is valid")
}

pub fn replication_group_change(id: &str, subnet_group: &str, security_groups: &[&str]) -> Value {
    json!({
        "address": format!("aws_elasticache_replication_group.{IDENTIFIER}"),
        "type": "aws_elasticache_replication_group",
        "name": IDENTIFIER,
        "change": {
            "actions": ["create"],
            "before": null,
            "after": {
                "replication_group_id": id,
                "subnet_group_name": subnet_group,
                "security_group_ids": security_groups
            }
        }
    })
}

pub fn parameter_group_change(name: &str, actions: &[&str]) -> Value {
    json!({
        "address": format!("aws_elasticache_parameter_group.{name}"),
        "type": "aws_elasticache_parameter_group",
        "name": name,
        "change": {
            "actions": actions,
            "before": null,
            "after": {"name": name, "family": "redis6.x"}
        }
    })
}

/// Cloud state where the baseline plan is safe: everything in `vpc-1`
pub fn clean_inventory() -> InMemoryInventory {
    InMemoryInventory::new()
        .with_subnet_group(SUBNET_GROUP, ["subnet-a", "subnet-b"])
        .with_subnet("subnet-a", "vpc-1")
        .with_subnet("subnet-b", "vpc-1")
        .with_security_group("sg-1", "vpc-1")
        .with_security_group("sg-2", "vpc-1")
}
