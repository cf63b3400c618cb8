// Copyright (c) 2025 - Cowboy AI, Inc.

//! Cloud Inventory Reader
//!
//! Read-only façade over the cloud control plane, scoped to one region. The
//! plan validator only ever talks to this trait, so it can run against live
//! AWS ([`aws::AwsInventory`]) or a seeded in-memory view
//! ([`memory::InMemoryInventory`]).
//!
//! # Lookups
//!
//! ```text
//! subnet group ──> [subnet id]            (missing group is fatal)
//! [subnet id]  ──> [Subnet { vpc_id }]
//! [sg id]      ──> [SecurityGroup { vpc_id }]  (missing ids are simply absent)
//! rg id / pg name ──> Lookup::{Found, NotFound}
//! ```
//!
//! Existence checks distinguish three outcomes: `Ok(Found)`, `Ok(NotFound)`
//! for the service's specific not-found fault, and `Err(..)` for everything
//! else (throttling, permissions, transport).

#[cfg(feature = "aws")]
pub mod aws;
pub mod memory;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[cfg(feature = "aws")]
pub use aws::AwsInventory;
pub use memory::InMemoryInventory;

/// Outcome of an existence check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup {
    Found,
    NotFound,
}

impl Lookup {
    pub fn exists(self) -> bool {
        matches!(self, Lookup::Found)
    }
}

/// EC2 subnet as seen by the validator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subnet {
    pub id: String,
    pub vpc_id: Option<String>,
}

/// EC2 security group as seen by the validator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecurityGroup {
    pub id: String,
    pub vpc_id: Option<String>,
}

/// Errors from the cloud control plane
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InventoryError {
    /// The named cache subnet group does not exist
    #[error("Cache subnet group {0} not found")]
    SubnetGroupNotFound(String),

    /// Any other API failure
    #[error("{operation} failed: {message}")]
    Api {
        operation: &'static str,
        message: String,
    },
}

/// Result type for inventory lookups
pub type InventoryResult<T> = Result<T, InventoryError>;

/// Read-only access to live cloud state
#[async_trait]
pub trait CloudInventory: Send + Sync {
    /// Subnet ids of a cache subnet group
    ///
    /// Fails with [`InventoryError::SubnetGroupNotFound`] when the group does
    /// not exist; never returns an empty list in its place.
    async fn subnet_group_subnets(&self, subnet_group_name: &str) -> InventoryResult<Vec<String>>;

    /// Subnet records for the given ids
    async fn subnets(&self, subnet_ids: &[String]) -> InventoryResult<Vec<Subnet>>;

    /// Security group records for the given ids; unknown ids are omitted
    async fn security_groups(&self, group_ids: &[String]) -> InventoryResult<Vec<SecurityGroup>>;

    async fn replication_group(&self, replication_group_id: &str) -> InventoryResult<Lookup>;

    async fn parameter_group(&self, name: &str) -> InventoryResult<Lookup>;

    /// Name of this inventory, for logging
    fn name(&self) -> &str;
}
