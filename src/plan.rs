// Copyright (c) 2025 - Cowboy AI, Inc.
//! Terraform Plan Model
//!
//! Typed view over the JSON produced by `terraform show -json <planfile>`.
//! Only the parts the plan validator reads are modeled; everything else in
//! the document is ignored.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::Path;
use tracing::debug;

use crate::errors::{ElasticacheError, ElasticacheResult};

/// Action Terraform intends to take on a resource
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Action {
    NoOp,
    Create,
    Read,
    Update,
    Delete,
    /// Drop from state without destroying (`removed` blocks)
    Forget,
    /// Any action newer than this model
    #[serde(other)]
    Unknown,
}

/// Before/after view of one resource
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Change {
    pub actions: Vec<Action>,
    #[serde(default)]
    pub before: Option<Value>,
    /// Proposed field values; null for deletions
    #[serde(default)]
    pub after: Option<Value>,
}

impl Change {
    pub fn has_action(&self, action: Action) -> bool {
        self.actions.contains(&action)
    }

    /// Post-change values, if present and non-empty
    pub fn after_fields(&self) -> Option<&Map<String, Value>> {
        self.after
            .as_ref()
            .and_then(Value::as_object)
            .filter(|fields| !fields.is_empty())
    }
}

/// One entry of `resource_changes`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceChange {
    #[serde(default)]
    pub address: Option<String>,
    #[serde(rename = "type")]
    pub resource_type: String,
    pub name: String,
    #[serde(default)]
    pub change: Option<Change>,
}

impl ResourceChange {
    /// Whether this change is of `resource_type` and includes `action`
    pub fn is(&self, resource_type: &str, action: Action) -> bool {
        self.resource_type == resource_type
            && self.change.as_ref().is_some_and(|c| c.has_action(action))
    }

    pub fn after_fields(&self) -> Option<&Map<String, Value>> {
        self.change.as_ref().and_then(Change::after_fields)
    }
}

/// A parsed change-plan
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    #[serde(default)]
    pub format_version: Option<String>,
    #[serde(default)]
    pub resource_changes: Vec<ResourceChange>,
}

impl Plan {
    pub fn from_json_str(raw: &str) -> ElasticacheResult<Self> {
        serde_json::from_str(raw).map_err(|e| ElasticacheError::InvalidPlan(e.to_string()))
    }

    pub fn from_file(path: impl AsRef<Path>) -> ElasticacheResult<Self> {
        let path = path.as_ref();
        debug!("Reading plan from {}", path.display());
        let raw = std::fs::read_to_string(path).map_err(|e| ElasticacheError::io(path, e))?;
        Self::from_json_str(&raw)
    }

    /// Changes of `resource_type` whose action set includes `action`
    pub fn changes<'a>(
        &'a self,
        resource_type: &'a str,
        action: Action,
    ) -> impl Iterator<Item = &'a ResourceChange> + 'a {
        self.resource_changes
            .iter()
            .filter(move |c| c.is(resource_type, action))
    }
}
