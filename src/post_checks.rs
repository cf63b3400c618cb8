// Copyright (c) 2025 - Cowboy AI, Inc.
//! Post-apply output checks
//!
//! After `terraform apply`, the outputs document (`terraform output -json`)
//! must expose a port output. A missing port means the apply produced no
//! usable connection endpoint.

use serde_json::{Map, Value};
use std::path::Path;
use tracing::error;

use crate::errors::{ElasticacheError, ElasticacheResult};
use crate::stack::PORT_OUTPUT_SUFFIX;

/// True iff some output key ends in `__db_port`
pub fn check(outputs: &Map<String, Value>) -> bool {
    if outputs.keys().any(|key| key.ends_with(PORT_OUTPUT_SUFFIX)) {
        return true;
    }
    error!("Port output not found.");
    false
}

/// Read an outputs document from disk and run [`check`]
pub fn check_file(path: impl AsRef<Path>) -> ElasticacheResult<bool> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path).map_err(|e| ElasticacheError::io(path, e))?;
    let outputs: Map<String, Value> = serde_json::from_str(&raw)?;
    Ok(check(&outputs))
}
