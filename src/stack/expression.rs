// Copyright (c) 2025 - Cowboy AI, Inc.
//! Symbolic Terraform Expressions
//!
//! Some values only exist once a resource is materialized: the endpoint of a
//! replication group, whether cluster mode ended up enabled, the generated
//! password. These are expressed as references into the resource graph and
//! rendered as Terraform interpolations, so Terraform resolves them at apply
//! time rather than us guessing at synthesis time.
//!
//! ```text
//! Conditional(cluster_enabled, configuration_endpoint_address, primary_endpoint_address)
//!   => "${aws_elasticache_replication_group.x.cluster_enabled ? aws_elasticache_replication_group.x.configuration_endpoint_address : aws_elasticache_replication_group.x.primary_endpoint_address}"
//! ```

use serde::{Serialize, Serializer};
use std::fmt;

/// Address of a resource in the graph (`<type>.<name>`)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourceRef {
    resource_type: String,
    name: String,
}

impl ResourceRef {
    pub fn new(resource_type: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            resource_type: resource_type.into(),
            name: name.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// `<type>.<name>`, the form used in `depends_on`
    pub fn address(&self) -> String {
        format!("{}.{}", self.resource_type, self.name)
    }

    /// Reference one attribute of this resource
    pub fn attr(&self, attribute: impl Into<String>) -> Expression {
        Expression::Attribute {
            resource: self.clone(),
            attribute: attribute.into(),
        }
    }
}

impl fmt::Display for ResourceRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.resource_type, self.name)
    }
}

/// Deferred value resolved by Terraform
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expression {
    /// `<type>.<name>.<attribute>`
    Attribute {
        resource: ResourceRef,
        attribute: String,
    },

    /// `<condition> ? <when_true> : <when_false>`
    Conditional {
        condition: Box<Expression>,
        when_true: Box<Expression>,
        when_false: Box<Expression>,
    },
}

impl Expression {
    pub fn conditional(
        condition: Expression,
        when_true: Expression,
        when_false: Expression,
    ) -> Self {
        Expression::Conditional {
            condition: Box::new(condition),
            when_true: Box::new(when_true),
            when_false: Box::new(when_false),
        }
    }

    fn render(&self) -> String {
        match self {
            Expression::Attribute {
                resource,
                attribute,
            } => format!("{}.{}", resource, attribute),
            Expression::Conditional {
                condition,
                when_true,
                when_false,
            } => format!(
                "{} ? {} : {}",
                condition.render(),
                when_true.render(),
                when_false.render()
            ),
        }
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${{{}}}", self.render())
    }
}

impl Serialize for Expression {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}
