// Copyright (c) 2025 - Cowboy AI, Inc.
//! Input Document Model
//!
//! The input document has two members:
//! - `data`: the desired replication group, parameter group and tagging
//! - `provision`: deployment metadata, including where Terraform state lives
//!
//! A document is only handed out after every invariant in
//! [`crate::domain::invariants`] holds. Construct it with
//! [`AppInterfaceInput::from_json_str`] or [`AppInterfaceInput::from_value`].

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::debug;

use super::invariants;
use super::parameter::ParameterGroup;
use crate::errors::{ElasticacheError, ElasticacheResult};

/// Free-form tag map
pub type Tags = BTreeMap<String, Value>;

/// Log delivery target for slow-log / engine-log streams
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogDeliveryConfiguration {
    pub destination: String,
    pub destination_type: String,
    pub log_type: String,
    pub log_format: String,
}

fn default_description() -> String {
    "elasticache replication group".to_string()
}

/// Desired Elasticache replication group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElasticacheData {
    // Identity
    pub region: String,
    pub identifier: String,
    #[serde(default)]
    pub output_resource_name: Option<String>,
    pub output_prefix: String,
    #[serde(default)]
    pub tags: Option<Tags>,
    #[serde(default)]
    pub default_tags: Option<Vec<Tags>>,

    // Replication group
    #[serde(default)]
    pub apply_immediately: bool,
    #[serde(default)]
    pub at_rest_encryption_enabled: Option<bool>,
    #[serde(default)]
    pub auto_minor_version_upgrade: Option<bool>,
    #[serde(default)]
    pub automatic_failover_enabled: Option<bool>,
    /// Only used to force rotation of the generated auth token
    #[serde(default)]
    pub reset_password: Option<String>,
    #[serde(default = "default_description")]
    pub replication_group_description: String,
    pub engine: String,
    pub engine_version: String,
    #[serde(default)]
    pub log_delivery_configuration: Option<Vec<LogDeliveryConfiguration>>,
    #[serde(default)]
    pub maintenance_window: Option<String>,
    #[serde(default)]
    pub multi_az_enabled: Option<bool>,
    pub node_type: String,
    #[serde(default)]
    pub notification_topic_arn: Option<String>,
    #[serde(default)]
    pub number_cache_clusters: Option<u32>,
    #[serde(default)]
    pub num_node_groups: Option<u32>,
    #[serde(default)]
    pub parameter_group: Option<ParameterGroup>,
    #[serde(default)]
    pub parameter_group_name: Option<String>,
    #[serde(default)]
    pub port: Option<u16>,
    #[serde(default)]
    pub availability_zones: Option<Vec<String>>,
    #[serde(default)]
    pub replicas_per_node_group: Option<u32>,
    pub replication_group_id: String,
    #[serde(default)]
    pub security_group_ids: Option<Vec<String>>,
    #[serde(default)]
    pub snapshot_retention_limit: Option<u32>,
    #[serde(default)]
    pub snapshot_window: Option<String>,
    #[serde(default)]
    pub subnet_group_name: Option<String>,
    #[serde(default)]
    pub transit_encryption_enabled: Option<bool>,
    #[serde(default)]
    pub transit_encryption_mode: Option<String>,
}

impl ElasticacheData {
    /// Cluster mode (sharded topology) is requested
    pub fn cluster_mode(&self) -> bool {
        self.num_node_groups.unwrap_or(0) > 0
    }

    pub fn transit_encryption(&self) -> bool {
        self.transit_encryption_enabled.unwrap_or(false)
    }
}

/// Where the Terraform state for this module lives
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleProvisionData {
    pub tf_state_bucket: String,
    pub tf_state_key: String,
    pub tf_state_region: String,
    pub tf_state_dynamodb_table: String,
}

/// Deployment metadata; opaque beyond the state location and identifiers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppInterfaceProvision {
    pub provision_provider: String,
    pub provisioner: String,
    pub provider: String,
    pub identifier: String,
    pub target_cluster: String,
    pub target_namespace: String,
    pub target_secret_name: Option<String>,
    pub module_provision_data: ModuleProvisionData,
}

/// Validated input document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppInterfaceInput {
    pub data: ElasticacheData,
    pub provision: AppInterfaceProvision,
}

impl AppInterfaceInput {
    /// Build from an already parsed JSON document and validate it
    pub fn from_value(value: Value) -> ElasticacheResult<Self> {
        let input: AppInterfaceInput = serde_json::from_value(value)?;
        input.validated()
    }

    /// Parse a JSON document and validate it
    pub fn from_json_str(raw: &str) -> ElasticacheResult<Self> {
        let input: AppInterfaceInput = serde_json::from_str(raw)?;
        input.validated()
    }

    /// Read, parse and validate the document at `path`
    pub fn from_file(path: impl AsRef<Path>) -> ElasticacheResult<Self> {
        let path = path.as_ref();
        debug!("Reading input document from {}", path.display());
        let raw = std::fs::read_to_string(path).map_err(|e| ElasticacheError::io(path, e))?;
        Self::from_json_str(&raw)
    }

    fn validated(self) -> ElasticacheResult<Self> {
        invariants::validate_all(&self.data).map_err(ElasticacheError::InvalidConfiguration)?;
        Ok(self)
    }
}
