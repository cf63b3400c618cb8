// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests for Parameter Value Coercion
//!
//! Values of any primitive type become strings, and coercing an already
//! coerced value changes nothing.

use er_aws_elasticache::domain::{Parameter, ParameterValue};
use proptest::prelude::*;
use serde_json::{json, Value};

/// Generate arbitrary JSON primitives
fn primitive() -> impl Strategy<Value = Value> {
    prop_oneof![
        any::<bool>().prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        any::<u64>().prop_map(Value::from),
        // finite floats only; JSON has no NaN or infinity
        (-1.0e12f64..1.0e12).prop_map(Value::from),
        "[a-zA-Z0-9 _.-]{0,24}".prop_map(Value::from),
    ]
}

proptest! {
    /// Property: coercion is idempotent
    #[test]
    fn prop_coercion_is_idempotent(value in primitive()) {
        let once = ParameterValue::coerce(&value).expect("primitive coerces");
        let twice = ParameterValue::coerce(&json!(once.as_str())).expect("string coerces");
        prop_assert_eq!(once, twice);
    }

    /// Property: integers render in plain decimal
    #[test]
    fn prop_integers_render_decimal(n in any::<i64>()) {
        let param: Parameter = serde_json::from_value(json!({"name": "p", "value": n}))
            .expect("parameter deserializes");
        prop_assert_eq!(param.value.as_str(), n.to_string());
    }

    /// Property: booleans render capitalized
    #[test]
    fn prop_booleans_capitalized(b in any::<bool>()) {
        let param: Parameter = serde_json::from_value(json!({"name": "p", "value": b}))
            .expect("parameter deserializes");
        prop_assert_eq!(param.value.as_str(), if b { "True" } else { "False" });
    }

    /// Property: a coerced value always serializes as a JSON string
    #[test]
    fn prop_serializes_as_string(value in primitive()) {
        let param: Parameter = serde_json::from_value(json!({"name": "p", "value": value}))
            .expect("parameter deserializes");
        let out = serde_json::to_value(&param).expect("parameter serializes");
        prop_assert!(out["value"].is_string());
    }

    /// Property: strings pass through untouched
    #[test]
    fn prop_strings_unchanged(s in ".{0,32}") {
        let coerced = ParameterValue::coerce(&json!(s.clone())).expect("string coerces");
        prop_assert_eq!(coerced.as_str(), s.as_str());
    }
}
