// Copyright (c) 2025 - Cowboy AI, Inc.
//! Terraform JSON Resource Blocks
//!
//! Field names here are the Terraform provider schema names and are part of
//! the compatibility surface. Unset optional fields are omitted, matching what
//! Terraform expects for "use the provider default".

use serde::Serialize;
use std::collections::BTreeMap;

use super::expression::Expression;
use crate::domain::Tags;

pub const PARAMETER_GROUP_TYPE: &str = "aws_elasticache_parameter_group";
pub const REPLICATION_GROUP_TYPE: &str = "aws_elasticache_replication_group";
pub const RANDOM_PASSWORD_TYPE: &str = "random_password";

/// Root of a `cdk.tf.json` document
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TerraformDocument {
    pub terraform: TerraformSettings,
    pub provider: Providers,
    pub resource: Resources,
    pub output: BTreeMap<String, Output>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TerraformSettings {
    pub backend: Backend,
    pub required_providers: BTreeMap<String, ProviderRequirement>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Backend {
    pub s3: S3Backend,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct S3Backend {
    pub bucket: String,
    pub key: String,
    pub encrypt: bool,
    pub region: String,
    pub dynamodb_table: String,
    pub profile: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProviderRequirement {
    pub source: String,
    pub version: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Providers {
    pub aws: Vec<AwsProvider>,
    pub random: Vec<RandomProvider>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AwsProvider {
    pub region: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_tags: Option<Vec<Tags>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RandomProvider {}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Resources {
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub aws_elasticache_parameter_group: BTreeMap<String, ParameterGroupResource>,
    pub aws_elasticache_replication_group: BTreeMap<String, ReplicationGroupResource>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub random_password: BTreeMap<String, RandomPasswordResource>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Lifecycle {
    pub create_before_destroy: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParameterBlock {
    pub name: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParameterGroupResource {
    pub family: String,
    pub name: String,
    pub description: String,
    pub parameter: Vec<ParameterBlock>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Tags>,
    pub lifecycle: Lifecycle,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RandomPasswordResource {
    pub length: u32,
    pub override_special: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keepers: Option<BTreeMap<String, String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogDeliveryBlock {
    pub destination: String,
    pub destination_type: String,
    pub log_format: String,
    pub log_type: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReplicationGroupResource {
    pub apply_immediately: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub at_rest_encryption_enabled: Option<bool>,
    /// String-typed in the provider schema: always "true" or "false"
    pub auto_minor_version_upgrade: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub automatic_failover_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth_token: Option<Expression>,
    pub description: String,
    pub engine: String,
    pub engine_version: String,
    pub log_delivery_configuration: Vec<LogDeliveryBlock>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maintenance_window: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multi_az_enabled: Option<bool>,
    pub node_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notification_topic_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_cache_clusters: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_node_groups: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameter_group_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_cache_cluster_azs: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replicas_per_node_group: Option<u32>,
    pub replication_group_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security_group_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snapshot_retention_limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snapshot_window: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subnet_group_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transit_encryption_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transit_encryption_mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Tags>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub depends_on: Option<Vec<String>>,
}

/// Named stack output; `value` is null when there is nothing to expose
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Output {
    pub value: Option<Expression>,
    pub sensitive: bool,
}
