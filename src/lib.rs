//! External resources module for AWS Elasticache
//!
//! Turns a validated input document into the Terraform resources for one
//! Elasticache replication group, and validates the resulting change-plan
//! against live AWS state before it is applied.

pub mod config;
pub mod domain;
pub mod errors;
pub mod inventory;
pub mod plan;
pub mod post_checks;
pub mod stack;
pub mod validator;

// Re-export commonly used types
pub use config::RuntimeConfig;
pub use domain::{AppInterfaceInput, ElasticacheData, ValidationError};
pub use errors::{ElasticacheError, ElasticacheResult};
pub use inventory::{CloudInventory, InMemoryInventory, InventoryError, Lookup};
pub use plan::{Action, Plan, ResourceChange};
pub use stack::{synthesize, write_stack, TerraformDocument};
pub use validator::{Finding, PlanValidator, ValidationReport};
