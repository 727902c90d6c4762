//! JSON codec for JSON Patch operations.
//!
//! Converts operations to and from `serde_json::Value` in RFC 6902 form.
//! Decoding goes through [`OperationRecord`], so malformed entries fail with
//! the same errors as validation.

use serde_json::{Map, Value as JsonValue};

use json_cow_value::Value;

use crate::types::{Op, OperationRecord, PatchError};

// ── Deserialization ───────────────────────────────────────────────────────

/// Read a raw record from a JSON object.
///
/// A non-string `op` is kept as its JSON text, so validation reports it as
/// an invalid kind. A non-string `path` or `from` counts as absent.
pub fn record_from_json(v: &JsonValue) -> Result<OperationRecord, PatchError> {
    let map = v.as_object().ok_or_else(|| PatchError::InvalidOperationKind {
        op: "<non-object>".into(),
    })?;
    let op = match map.get("op") {
        Some(JsonValue::String(s)) => s.clone(),
        Some(other) => other.to_string(),
        None => String::new(),
    };
    let text = |key: &str| map.get(key).and_then(JsonValue::as_str).map(str::to_string);
    Ok(OperationRecord {
        op,
        path: text("path"),
        value: map.get("value").cloned().map(Value::from),
        from: text("from"),
    })
}

/// Decode and validate one operation.
pub fn from_json(v: &JsonValue) -> Result<Op, PatchError> {
    Op::try_from(record_from_json(v)?)
}

/// Decode and validate a patch (a JSON array of operations).
pub fn from_json_patch(v: &JsonValue) -> Result<Vec<Op>, PatchError> {
    v.as_array()
        .ok_or(PatchError::NotAPatch)?
        .iter()
        .map(from_json)
        .collect()
}

// ── Serialization ─────────────────────────────────────────────────────────

/// Serialize a raw record, omitting absent fields.
pub fn record_to_json(record: &OperationRecord) -> JsonValue {
    let mut m = Map::new();
    m.insert("op".into(), JsonValue::String(record.op.clone()));
    if let Some(path) = &record.path {
        m.insert("path".into(), JsonValue::String(path.clone()));
    }
    if let Some(from) = &record.from {
        m.insert("from".into(), JsonValue::String(from.clone()));
    }
    if let Some(value) = &record.value {
        m.insert("value".into(), JsonValue::from(value));
    }
    JsonValue::Object(m)
}

/// Serialize an `Op` in RFC 6902 form.
pub fn to_json(op: &Op) -> JsonValue {
    record_to_json(&OperationRecord::from(op.clone()))
}

pub fn to_json_patch(ops: &[Op]) -> JsonValue {
    JsonValue::Array(ops.iter().map(to_json).collect())
}
