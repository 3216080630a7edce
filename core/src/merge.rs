#![deny(missing_docs)]

//! # Document Merge
//!
//! Deep merge of two specification documents. Inputs are never mutated; the
//! result is a fresh value.
//!
//! Sections with their own rules:
//! * `components`: per component type, source entries replace same-named target entries.
//! * `paths`: method keys merge per path; path-level parameters merge by `name` + `in`.
//! * `tags`: merged by `name`.
//!
//! Everywhere else arrays are unioned by structural equality, objects recurse,
//! and anything else is replaced by the source value.

use serde_json::{Map, Value};

/// Component types merged entry-by-entry.
pub const COMPONENT_TYPES: [&str; 9] = [
    "schemas",
    "responses",
    "parameters",
    "examples",
    "requestBodies",
    "headers",
    "securitySchemes",
    "links",
    "callbacks",
];

/// Merges `source` into a copy of `target`.
pub fn deep_merge(target: &Value, source: &Value) -> Value {
    match (target, source) {
        (Value::Object(t), Value::Object(s)) => Value::Object(merge_objects(t, s)),
        (Value::Array(t), Value::Array(s)) => Value::Array(merge_arrays(t, s)),
        _ => source.clone(),
    }
}

fn merge_objects(target: &Map<String, Value>, source: &Map<String, Value>) -> Map<String, Value> {
    let mut result = target.clone();

    for (key, incoming) in source {
        let merged = match key.as_str() {
            "components" => merge_components(target.get(key).unwrap_or(&Value::Null), incoming),
            "paths" => merge_paths(target.get(key).unwrap_or(&Value::Null), incoming),
            "tags" => Value::Array(merge_tags(
                as_slice(target.get(key)),
                as_slice(Some(incoming)),
            )),
            _ => match target.get(key) {
                Some(existing) => merge_generic(existing, incoming),
                None => incoming.clone(),
            },
        };
        result.insert(key.clone(), merged);
    }

    result
}

fn merge_generic(existing: &Value, incoming: &Value) -> Value {
    match (existing, incoming) {
        (Value::Array(t), Value::Array(s)) => Value::Array(merge_arrays(t, s)),
        (Value::Object(t), Value::Object(s)) => Value::Object(merge_objects(t, s)),
        _ => incoming.clone(),
    }
}

fn as_slice(value: Option<&Value>) -> &[Value] {
    match value {
        Some(Value::Array(items)) => items,
        _ => &[],
    }
}

/// Merges two `components` objects.
///
/// Each known component type is shallow-merged with source winning. Other
/// keys follow the generic rules.
pub fn merge_components(target: &Value, source: &Value) -> Value {
    let mut result = target.as_object().cloned().unwrap_or_default();
    let Some(source) = source.as_object() else {
        return Value::Object(result);
    };

    for (kind, incoming) in source {
        let merged = if COMPONENT_TYPES.contains(&kind.as_str()) {
            let mut pool = result
                .get(kind)
                .and_then(Value::as_object)
                .cloned()
                .unwrap_or_default();
            if let Some(entries) = incoming.as_object() {
                for (name, value) in entries {
                    pool.insert(name.clone(), value.clone());
                }
            }
            Value::Object(pool)
        } else {
            match result.get(kind) {
                Some(existing) => merge_generic(existing, incoming),
                None => incoming.clone(),
            }
        };
        result.insert(kind.clone(), merged);
    }

    Value::Object(result)
}

/// Merges two `paths` objects.
///
/// A path only in `source` is copied whole. A shared path gets the union of
/// its method keys (source wins per method); when the source path item carries
/// `parameters`, they are merged with [`merge_parameters`].
pub fn merge_paths(target: &Value, source: &Value) -> Value {
    let mut result = target.as_object().cloned().unwrap_or_default();
    let Some(source) = source.as_object() else {
        return Value::Object(result);
    };

    for (path, incoming) in source {
        let merged = match (result.get(path), incoming) {
            (Some(Value::Object(existing)), Value::Object(item)) => {
                let mut combined = existing.clone();
                for (method, operation) in item {
                    combined.insert(method.clone(), operation.clone());
                }
                if let Some(Value::Array(params)) = item.get("parameters") {
                    let merged =
                        merge_parameters(as_slice(existing.get("parameters")), params);
                    combined.insert("parameters".to_string(), Value::Array(merged));
                }
                Value::Object(combined)
            }
            _ => incoming.clone(),
        };
        result.insert(path.clone(), merged);
    }

    Value::Object(result)
}

fn parameter_key(param: &Value) -> Option<String> {
    let name = param.get("name")?.as_str()?;
    let location = param.get("in")?.as_str()?;
    Some(format!("{}:{}", name, location))
}

/// Merges parameter lists keyed by `name:in`, source winning.
///
/// Entries without a name or location (such as `$ref` parameters) are kept
/// and deduplicated structurally.
pub fn merge_parameters(target: &[Value], source: &[Value]) -> Vec<Value> {
    merge_keyed(target, source, parameter_key, |_, incoming| incoming.clone())
}

/// Merges tag lists by `name`.
///
/// A shared tag takes its description from `source` only when the target has
/// none; then every other source field overrides the target's.
pub fn merge_tags(target: &[Value], source: &[Value]) -> Vec<Value> {
    merge_keyed(
        target,
        source,
        |tag| tag.get("name").and_then(Value::as_str).map(str::to_string),
        |existing, incoming| match (existing, incoming) {
            (Value::Object(e), Value::Object(i)) => {
                let mut merged = e.clone();
                for (k, v) in i {
                    merged.insert(k.clone(), v.clone());
                }
                Value::Object(merged)
            }
            _ => incoming.clone(),
        },
    )
}

/// Keyed list merge that keeps first-seen positions.
fn merge_keyed<K, F>(target: &[Value], source: &[Value], key_of: K, combine: F) -> Vec<Value>
where
    K: Fn(&Value) -> Option<String>,
    F: Fn(&Value, &Value) -> Value,
{
    let mut keyed: Vec<(Option<String>, Value)> = Vec::with_capacity(target.len());

    for item in target {
        let key = key_of(item);
        match key
            .as_ref()
            .and_then(|k| keyed.iter().position(|(e, _)| e.as_ref() == Some(k)))
        {
            Some(pos) => keyed[pos].1 = item.clone(),
            None => keyed.push((key, item.clone())),
        }
    }

    for item in source {
        match key_of(item) {
            Some(key) => match keyed.iter().position(|(e, _)| e.as_ref() == Some(&key)) {
                Some(pos) => keyed[pos].1 = combine(&keyed[pos].1, item),
                None => keyed.push((Some(key), item.clone())),
            },
            None => {
                if !keyed.iter().any(|(k, v)| k.is_none() && v == item) {
                    keyed.push((None, item.clone()));
                }
            }
        }
    }

    keyed.into_iter().map(|(_, v)| v).collect()
}

/// Target items in order, then source items not structurally present yet.
pub fn merge_arrays(target: &[Value], source: &[Value]) -> Vec<Value> {
    let mut combined = target.to_vec();
    for item in source {
        if !combined.contains(item) {
            combined.push(item.clone());
        }
    }
    combined
}
