// Copyright (c) 2025 - Cowboy AI, Inc.
//! Parameter Group Value Objects
//!
//! Engine parameters arrive as strings, integers, floats or booleans, but the
//! `aws_elasticache_parameter_group` resource only accepts strings. Values are
//! normalized once at parse time so nothing downstream has to care.

use serde::{de, Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

/// Parameter value normalized to its string form
///
/// # Invariants
/// - Always holds a string
/// - Coercion is idempotent: coercing an already-coerced value is a no-op
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ParameterValue(String);

impl ParameterValue {
    /// Wrap a value that is already a string
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Coerce a JSON primitive into its string representation
    ///
    /// Booleans render capitalized (`True`/`False`), the form existing
    /// parameter groups were created with. Returns `None` for arrays, objects
    /// and null.
    pub fn coerce(value: &Value) -> Option<Self> {
        match value {
            Value::String(s) => Some(Self(s.clone())),
            Value::Bool(true) => Some(Self("True".to_string())),
            Value::Bool(false) => Some(Self("False".to_string())),
            Value::Number(n) => Some(Self(n.to_string())),
            _ => None,
        }
    }
}

impl fmt::Display for ParameterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for ParameterValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Self::coerce(&value).ok_or_else(|| {
            de::Error::custom(format!(
                "parameter value must be a string, number or boolean, got {value}"
            ))
        })
    }
}

/// When a parameter change takes effect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ApplyMethod {
    Immediate,
    PendingReboot,
}

/// A single engine parameter override
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    pub value: ParameterValue,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apply_method: Option<ApplyMethod>,
}

/// Named, reusable set of engine configuration overrides
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterGroup {
    pub family: String,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub parameters: Vec<Parameter>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_primitives_become_strings() {
        let params: Vec<Parameter> = serde_json::from_value(json!([
            {"name": "tcp-keepalive", "value": 300},
            {"name": "activerehashing", "value": true},
            {"name": "ratio", "value": 0.5},
            {"name": "maxmemory-policy", "value": "allkeys-lru"},
        ]))
        .unwrap();

        let values: Vec<&str> = params.iter().map(|p| p.value.as_str()).collect();
        assert_eq!(values, vec!["300", "True", "0.5", "allkeys-lru"]);
    }

    #[test]
    fn test_coerce_is_idempotent() {
        let once = ParameterValue::coerce(&json!(42)).unwrap();
        let twice = ParameterValue::coerce(&json!(once.as_str())).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_coerce_rejects_structured_values() {
        assert!(ParameterValue::coerce(&json!(null)).is_none());
        assert!(ParameterValue::coerce(&json!([1])).is_none());
        assert!(ParameterValue::coerce(&json!({"a": 1})).is_none());
    }

    #[test]
    fn test_booleans_are_capitalized() {
        assert_eq!(ParameterValue::coerce(&json!(true)).unwrap().as_str(), "True");
        assert_eq!(ParameterValue::coerce(&json!(false)).unwrap().as_str(), "False");
    }

    #[test]
    fn test_structured_value_fails_to_deserialize() {
        let bad = serde_json::from_value::<Parameter>(json!({"name": "p", "value": [1, 2]}));
        assert!(bad.is_err());
        let null = serde_json::from_value::<Parameter>(json!({"name": "p", "value": null}));
        assert!(null.is_err());
    }

    #[test]
    fn test_apply_method_kebab_case() {
        let p: Parameter = serde_json::from_value(json!({
            "name": "timeout",
            "value": "0",
            "apply_method": "pending-reboot"
        }))
        .unwrap();
        assert_eq!(p.apply_method, Some(ApplyMethod::PendingReboot));

        let bad = serde_json::from_value::<Parameter>(json!({
            "name": "timeout",
            "value": "0",
            "apply_method": "later"
        }));
        assert!(bad.is_err());
    }

    #[test]
    fn test_serializes_without_apply_method_when_unset() {
        let p = Parameter {
            name: "timeout".to_string(),
            value: ParameterValue::new("0"),
            apply_method: None,
        };
        assert_eq!(
            serde_json::to_value(&p).unwrap(),
            json!({"name": "timeout", "value": "0"})
        );
    }
}
