//! Flattening of nested model parameters into span attributes
//!
//! OpenTelemetry attribute sets are flat string-to-scalar mappings, while
//! callers hand us arbitrarily nested parameter trees such as
//! `{"sampling": {"temperature": 0.7, "top_p": 0.9}}`. This module walks the
//! tree and emits one dotted leaf key per scalar, e.g.
//! `model_params.sampling.temperature`.

use opentelemetry::Value as OtelValue;
use serde_json::Value as JsonValue;

/// Root prefix under which all flattened model parameters are emitted.
pub const MODEL_PARAMS_PREFIX: &str = "model_params";

/// Flatten a nested parameter tree into dotted leaf keys.
///
/// Objects recurse with `prefix.key`; every other JSON value is a leaf emitted
/// at the current dotted key. Keys are unique by construction for tree-shaped
/// input. A non-object root yields a single leaf at the root prefix.
///
/// # Arguments
///
/// * `params` - The nested parameter tree, expected to be a JSON object
///
/// # Returns
///
/// Dotted key/leaf pairs, rooted at [`MODEL_PARAMS_PREFIX`].
pub fn flatten_model_params(params: &JsonValue) -> Vec<(String, JsonValue)> {
    let mut leaves = Vec::new();
    flatten_into(MODEL_PARAMS_PREFIX, params, &mut leaves);
    leaves
}

fn flatten_into(prefix: &str, value: &JsonValue, leaves: &mut Vec<(String, JsonValue)>) {
    match value {
        JsonValue::Object(map) => {
            for (key, nested) in map {
                let dotted = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{}.{}", prefix, key)
                };
                flatten_into(&dotted, nested, leaves);
            }
        }
        leaf => leaves.push((prefix.to_string(), leaf.clone())),
    }
}

/// Convert a JSON leaf into the corresponding OpenTelemetry attribute value.
///
/// Integers, floats, booleans, and strings map to their scalar counterparts.
/// Arrays and `null` have no scalar counterpart and are emitted as their JSON
/// text.
pub(crate) fn otel_value(value: &JsonValue) -> OtelValue {
    match value {
        JsonValue::Bool(b) => OtelValue::Bool(*b),
        JsonValue::Number(n) => {
            if let Some(i) = n.as_i64() {
                OtelValue::I64(i)
            } else if let Some(f) = n.as_f64() {
                OtelValue::F64(f)
            } else {
                OtelValue::String(n.to_string().into())
            }
        }
        JsonValue::String(s) => OtelValue::String(s.clone().into()),
        other => OtelValue::String(other.to_string().into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::HashMap;

    #[test]
    fn test_flatten_empty_object() {
        let leaves = flatten_model_params(&json!({}));
        assert!(leaves.is_empty());
    }

    #[test]
    fn test_flatten_nested_object() {
        let leaves = flatten_model_params(&json!({"a": 1, "b": {"c": 2}}));

        let map: HashMap<String, JsonValue> = leaves.into_iter().collect();
        assert_eq!(map.len(), 2);
        assert_eq!(map["model_params.a"], json!(1));
        assert_eq!(map["model_params.b.c"], json!(2));
    }

    #[test]
    fn test_flatten_deep_nesting_terminates() {
        let params = json!({"a": {"b": {"c": {"d": {"e": "deep"}}}}});
        let leaves = flatten_model_params(&params);

        assert_eq!(leaves.len(), 1);
        assert_eq!(leaves[0].0, "model_params.a.b.c.d.e");
        assert_eq!(leaves[0].1, json!("deep"));
    }

    #[test]
    fn test_flatten_preserves_leaf_types() {
        let params = json!({
            "temperature": 0.7,
            "max_tokens": 256,
            "stream": false,
            "stop": "\n",
        });

        let map: HashMap<String, JsonValue> =
            flatten_model_params(&params).into_iter().collect();
        assert_eq!(map["model_params.temperature"], json!(0.7));
        assert_eq!(map["model_params.max_tokens"], json!(256));
        assert_eq!(map["model_params.stream"], json!(false));
        assert_eq!(map["model_params.stop"], json!("\n"));
    }

    #[test]
    fn test_flatten_array_is_a_leaf() {
        let leaves = flatten_model_params(&json!({"stop": ["a", "b"]}));

        assert_eq!(leaves.len(), 1);
        assert_eq!(leaves[0].0, "model_params.stop");
        assert_eq!(leaves[0].1, json!(["a", "b"]));
    }

    #[test]
    fn test_flatten_round_trips_leaf_values() {
        let params = json!({
            "sampling": {"temperature": 0.7, "top_p": 0.9},
            "num_ctx": 32768,
        });

        let mut rebuilt = json!({});
        for (key, value) in flatten_model_params(&params) {
            let path: Vec<&str> = key
                .strip_prefix("model_params.")
                .expect("all keys carry the root prefix")
                .split('.')
                .collect();

            let mut node = &mut rebuilt;
            for segment in &path[..path.len() - 1] {
                node = &mut node[segment];
                if node.is_null() {
                    *node = json!({});
                }
            }
            node[path[path.len() - 1]] = value;
        }

        assert_eq!(rebuilt, params);
    }

    #[test]
    fn test_otel_value_scalars() {
        assert_eq!(otel_value(&json!(true)), OtelValue::Bool(true));
        assert_eq!(otel_value(&json!(7)), OtelValue::I64(7));
        assert_eq!(otel_value(&json!(0.5)), OtelValue::F64(0.5));
        assert_eq!(otel_value(&json!("hi")).as_str(), "hi");
    }

    #[test]
    fn test_otel_value_non_scalars_fall_back_to_json_text() {
        assert_eq!(otel_value(&json!(null)).as_str(), "null");
        assert_eq!(otel_value(&json!([1, 2])).as_str(), "[1,2]");
    }
}
