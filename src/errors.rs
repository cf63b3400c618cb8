// Copyright (c) 2025 - Cowboy AI, Inc.
//! Error types for Elasticache provisioning and plan validation

use thiserror::Error;

use crate::domain::ValidationError;
use crate::inventory::InventoryError;

/// Errors that can occur while loading input, synthesizing, or validating
#[derive(Debug, Error)]
pub enum ElasticacheError {
    /// Reading or writing a file failed
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Input document violates one or more configuration invariants
    #[error("Invalid configuration: {}", join_violations(.0))]
    InvalidConfiguration(Vec<ValidationError>),

    /// Plan document is malformed or missing required fields
    #[error("Invalid plan: {0}")]
    InvalidPlan(String),

    /// Cloud inventory lookup failed
    #[error(transparent)]
    Inventory(#[from] InventoryError),
}

/// Result type for Elasticache operations
pub type ElasticacheResult<T> = Result<T, ElasticacheError>;

impl From<serde_json::Error> for ElasticacheError {
    fn from(err: serde_json::Error) -> Self {
        ElasticacheError::Serialization(err.to_string())
    }
}

impl ElasticacheError {
    pub(crate) fn io(path: impl AsRef<std::path::Path>, source: std::io::Error) -> Self {
        ElasticacheError::Io {
            path: path.as_ref().display().to_string(),
            source,
        }
    }
}

fn join_violations(violations: &[ValidationError]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
