#![deny(missing_docs)]

//! # Deep Merge
//!
//! Merges a caller template over a generated document.
//!
//! - Objects merge key by key, recursively.
//! - Arrays merge index by index; extra template items are appended.
//! - Any other template value replaces the target value.

use serde_json::Value;

/// Merges `source` into `target`, with `source` taking priority.
pub fn deep_merge(target: &mut Value, source: &Value) {
    match (target, source) {
        (Value::Object(target), Value::Object(source)) => {
            for (key, value) in source {
                match target.get_mut(key) {
                    Some(existing) => deep_merge(existing, value),
                    None => {
                        target.insert(key.clone(), value.clone());
                    }
                }
            }
        }
        (Value::Array(target), Value::Array(source)) => {
            for (index, value) in source.iter().enumerate() {
                match target.get_mut(index) {
                    Some(existing) => deep_merge(existing, value),
                    None => target.push(value.clone()),
                }
            }
        }
        (target, source) => *target = source.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_nested_objects_merge() {
        let mut target = json!({ "info": { "title": "", "x": 1 }, "host": "" });
        deep_merge(
            &mut target,
            &json!({ "info": { "title": "Test", "version": "1.0.0" }, "host": "test.com" }),
        );
        assert_eq!(
            target,
            json!({ "info": { "title": "Test", "x": 1, "version": "1.0.0" }, "host": "test.com" })
        );
    }

    #[test]
    fn test_arrays_merge_by_index() {
        let mut target = json!({ "schemes": ["https"] });
        deep_merge(&mut target, &json!({ "schemes": ["http", "wss"] }));
        assert_eq!(target, json!({ "schemes": ["http", "wss"] }));

        let mut target = json!(["a", "b"]);
        deep_merge(&mut target, &json!(["c"]));
        assert_eq!(target, json!(["c", "b"]));
    }

    #[test]
    fn test_scalars_and_mismatched_kinds_replace() {
        let mut target = json!({ "a": { "nested": true }, "b": 1, "c": "keep" });
        deep_merge(&mut target, &json!({ "a": "flat", "b": null }));
        assert_eq!(target, json!({ "a": "flat", "b": null, "c": "keep" }));
    }

    #[test]
    fn test_key_order_of_target_is_kept() {
        let mut target = json!({ "swagger": "2.0", "info": {}, "host": "" });
        deep_merge(&mut target, &json!({ "host": "h", "extra": 1, "swagger": "2.0" }));
        let keys: Vec<&str> = target.as_object().unwrap().keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["swagger", "info", "host", "extra"]);
    }
}
