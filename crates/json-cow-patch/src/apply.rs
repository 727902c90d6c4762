//! JSON Patch apply logic.
//!
//! Every operation reads the current document and returns a new one. A
//! patch threads the document through its operations and stops at the
//! first failure.

use json_cow_pointer::{get, insert, is_child, parse_json_pointer, remove, resolve, set};
use json_cow_value::Value;
use tracing::debug;

use crate::types::{
    ApplyPatchOptions, Op, OpResult, OperationRecord, PatchAborted, PatchError, PatchResult,
};

// ── Individual operation applicators ─────────────────────────────────────

fn apply_add(doc: &Value, path: &str, value: &Value) -> Result<OpResult, PatchError> {
    let old = overwritten_by_add(doc, path);
    let doc = insert(doc, path, value.clone())?;
    Ok(OpResult { doc, old })
}

/// The value an `add` displaces: the whole document for the root, or an
/// existing object entry. Array inserts displace nothing.
fn overwritten_by_add(doc: &Value, path: &str) -> Option<Value> {
    let steps = parse_json_pointer(path).ok()?;
    match steps.split_last() {
        None => Some(doc.clone()),
        Some((key, parent)) => get(doc, parent)?.as_object()?.get(key).cloned(),
    }
}

fn apply_remove(doc: &Value, path: &str) -> Result<OpResult, PatchError> {
    let next = remove(doc, path)?;
    let old = resolve(doc, path).ok().cloned();
    Ok(OpResult { doc: next, old })
}

fn apply_replace(doc: &Value, path: &str, value: &Value) -> Result<OpResult, PatchError> {
    // the target must exist; replace never creates
    let old = resolve(doc, path)?.clone();
    let doc = set(doc, path, value.clone())?;
    Ok(OpResult {
        doc,
        old: Some(old),
    })
}

/// Remove at `from`, then `set` the value at `path` on the result.
///
/// Stricter than a bare remove-then-set: `from == path` returns the
/// document unchanged once `from` resolves, and a `path` inside `from`
/// fails with [`PatchError::MoveIntoChild`] instead of auto-vivifying.
fn apply_move(doc: &Value, from: &str, path: &str) -> Result<OpResult, PatchError> {
    let value = resolve(doc, from)?.clone();
    if from == path {
        return Ok(OpResult {
            doc: doc.clone(),
            old: None,
        });
    }
    let from_steps = parse_json_pointer(from)?;
    let path_steps = parse_json_pointer(path)?;
    if is_child(&from_steps, &path_steps) {
        return Err(PatchError::MoveIntoChild {
            from: from.to_string(),
            path: path.to_string(),
        });
    }
    let without = remove(doc, from)?;
    let doc = set(&without, path, value.clone())?;
    Ok(OpResult {
        doc,
        old: Some(value),
    })
}

fn apply_copy(doc: &Value, from: &str, path: &str) -> Result<OpResult, PatchError> {
    let value = resolve(doc, from)?.clone();
    let doc = set(doc, path, value)?;
    Ok(OpResult { doc, old: None })
}

fn apply_test(doc: &Value, path: &str, expected: &Value) -> Result<OpResult, PatchError> {
    let actual = resolve(doc, path)?;
    if actual != expected {
        return Err(PatchError::TestFailed {
            path: path.to_string(),
            expected: expected.clone(),
            actual: actual.clone(),
        });
    }
    Ok(OpResult {
        doc: doc.clone(),
        old: None,
    })
}

fn execute(doc: &Value, op: &Op) -> Result<OpResult, PatchError> {
    match op {
        Op::Add { path, value } => apply_add(doc, path, value),
        Op::Remove { path } => apply_remove(doc, path),
        Op::Replace { path, value } => apply_replace(doc, path, value),
        Op::Move { from, path } => apply_move(doc, from, path),
        Op::Copy { from, path } => apply_copy(doc, from, path),
        Op::Test { path, value } => apply_test(doc, path, value),
    }
}

// ── Operation trait ───────────────────────────────────────────────────────

/// Something a patch can be made of.
///
/// Implemented for typed [`Op`]s and for raw [`OperationRecord`]s, which are
/// validated as they are applied.
pub trait PatchOperation: Clone {
    /// Apply to `doc`, returning the new document and the displaced value.
    fn apply(&self, doc: &Value) -> Result<OpResult, PatchError>;

    /// The operation name, for diagnostics.
    fn name(&self) -> &str;

    /// The target pointer, for diagnostics.
    fn target(&self) -> Option<&str>;
}

impl PatchOperation for Op {
    fn apply(&self, doc: &Value) -> Result<OpResult, PatchError> {
        execute(doc, self)
    }

    fn name(&self) -> &str {
        self.kind().as_str()
    }

    fn target(&self) -> Option<&str> {
        Some(self.path())
    }
}

impl PatchOperation for OperationRecord {
    fn apply(&self, doc: &Value) -> Result<OpResult, PatchError> {
        execute(doc, &Op::try_from(self)?)
    }

    fn name(&self) -> &str {
        &self.op
    }

    fn target(&self) -> Option<&str> {
        self.path.as_deref()
    }
}

// ── Main apply functions ──────────────────────────────────────────────────

/// Apply a single typed operation, returning the new document.
pub fn apply_op(doc: &Value, op: &Op) -> Result<Value, PatchError> {
    execute(doc, op).map(|res| res.doc)
}

/// Validate a raw record, then apply it.
pub fn apply_operation(doc: &Value, record: &OperationRecord) -> Result<Value, PatchError> {
    record.apply(doc).map(|res| res.doc)
}

/// Apply operations left to right, all or nothing.
///
/// # Errors
///
/// On the first failing operation returns [`PatchAborted`] with the failing
/// operation, the ones applied and not yet attempted, the document as of
/// the last applied operation, and the cause. `doc` itself is never changed.
///
/// # Example
///
/// ```
/// use json_cow_patch::{apply_patch, builder};
/// use json_cow_value::Value;
/// use serde_json::json;
///
/// let doc = Value::from(json!({"foo": ["bar", "baz"]}));
/// let out = apply_patch(&doc, &[builder::add("/foo/1", "qux")]).unwrap();
/// assert_eq!(out, Value::from(json!({"foo": ["bar", "qux", "baz"]})));
/// ```
pub fn apply_patch<O: PatchOperation>(doc: &Value, ops: &[O]) -> Result<Value, PatchAborted<O>> {
    let options = ApplyPatchOptions { snapshots: false };
    apply_patch_with(doc, ops, &options).map(|res| res.doc)
}

/// Like [`apply_patch`], optionally keeping a snapshot per operation.
pub fn apply_patch_with<O: PatchOperation>(
    doc: &Value,
    ops: &[O],
    options: &ApplyPatchOptions,
) -> Result<PatchResult, PatchAborted<O>> {
    let mut current = doc.clone();
    let mut res = Vec::with_capacity(if options.snapshots { ops.len() } else { 0 });

    for (index, op) in ops.iter().enumerate() {
        match op.apply(&current) {
            Ok(result) => {
                debug!(index, op = op.name(), path = op.target(), "applied patch operation");
                current = result.doc.clone();
                if options.snapshots {
                    res.push(result);
                }
            }
            Err(cause) => {
                debug!(
                    index,
                    op = op.name(),
                    path = op.target(),
                    error = %cause,
                    "patch aborted"
                );
                return Err(PatchAborted {
                    index,
                    operation: op.clone(),
                    applied: ops[..index].to_vec(),
                    remaining: ops[index + 1..].to_vec(),
                    document: current,
                    cause,
                });
            }
        }
    }

    Ok(PatchResult { doc: current, res })
}

// ── Tests ─────────────────────────────────────────────────────────────────
