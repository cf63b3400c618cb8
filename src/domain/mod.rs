// Copyright (c) 2025 - Cowboy AI, Inc.
//! Elasticache Domain Models
//!
//! The configuration model for one replication group: the input document,
//! parameter group value objects, and the cross-field invariants that must
//! hold before anything is synthesized or validated.
//!
//! # Value Objects
//!
//! - [`ParameterValue`] - engine parameter value normalized to a string
//! - [`ApplyMethod`] - when a parameter change takes effect
//!
//! # Entities
//!
//! - [`AppInterfaceInput`] - the validated input document
//! - [`ElasticacheData`] - desired replication group
//! - [`ParameterGroup`] - optional parameter group managed alongside it

pub mod input;
pub mod invariants;
pub mod parameter;

pub use input::{
    AppInterfaceInput, AppInterfaceProvision, ElasticacheData, LogDeliveryConfiguration,
    ModuleProvisionData, Tags,
};
pub use invariants::{validate_all, ValidationError, ValidationResult};
pub use parameter::{ApplyMethod, Parameter, ParameterGroup, ParameterValue};
