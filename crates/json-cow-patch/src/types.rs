//! Core types for the JSON Patch crate.

use std::fmt;
use std::str::FromStr;

use json_cow_pointer::PointerError;
use json_cow_value::Value;
use thiserror::Error;

// ── Error ─────────────────────────────────────────────────────────────────

#[derive(Debug, Error, Clone, PartialEq)]
pub enum PatchError {
    #[error(transparent)]
    Pointer(#[from] PointerError),
    #[error("invalid operation kind {op:?}")]
    InvalidOperationKind { op: String },
    #[error("\"{op}\" operation requires \"path\"")]
    MissingPath { op: OpKind },
    #[error("\"{op}\" operation requires \"value\"")]
    MissingValue { op: OpKind },
    #[error("\"{op}\" operation requires \"from\"")]
    MissingFrom { op: OpKind },
    #[error("test failed at {path:?}: expected {expected}, found {actual}")]
    TestFailed {
        path: String,
        expected: Value,
        actual: Value,
    },
    #[error("cannot move {from:?} into its own child {path:?}")]
    MoveIntoChild { from: String, path: String },
    #[error("patch must be an array of operations")]
    NotAPatch,
}

/// A patch stopped at its first failing operation.
///
/// `document` is the result of every operation before `index`; the caller's
/// input document is untouched.
#[derive(Debug, Error, Clone, PartialEq)]
#[error("patch aborted at operation {index}: {cause}")]
pub struct PatchAborted<O> {
    /// Position of the failing operation in the patch.
    pub index: usize,
    pub operation: O,
    /// Operations applied before the failure, in order.
    pub applied: Vec<O>,
    /// Operations after the failing one, never attempted.
    pub remaining: Vec<O>,
    pub document: Value,
    #[source]
    pub cause: PatchError,
}

// ── Operation kind ────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OpKind {
    Add,
    Remove,
    Replace,
    Move,
    Copy,
    Test,
}

impl OpKind {
    pub const ALL: [OpKind; 6] = [
        OpKind::Add,
        OpKind::Remove,
        OpKind::Replace,
        OpKind::Move,
        OpKind::Copy,
        OpKind::Test,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OpKind::Add => "add",
            OpKind::Remove => "remove",
            OpKind::Replace => "replace",
            OpKind::Move => "move",
            OpKind::Copy => "copy",
            OpKind::Test => "test",
        }
    }
}

impl fmt::Display for OpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OpKind {
    type Err = PatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OpKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| PatchError::InvalidOperationKind { op: s.to_string() })
    }
}

// ── Op enum ───────────────────────────────────────────────────────────────

/// A validated JSON Patch operation. Each variant holds exactly the fields
/// its kind needs; paths are JSON Pointer strings.
#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    Add { path: String, value: Value },
    Remove { path: String },
    Replace { path: String, value: Value },
    Move { from: String, path: String },
    Copy { from: String, path: String },
    Test { path: String, value: Value },
}

impl Op {
    pub fn kind(&self) -> OpKind {
        match self {
            Op::Add { .. } => OpKind::Add,
            Op::Remove { .. } => OpKind::Remove,
            Op::Replace { .. } => OpKind::Replace,
            Op::Move { .. } => OpKind::Move,
            Op::Copy { .. } => OpKind::Copy,
            Op::Test { .. } => OpKind::Test,
        }
    }

    /// Returns the target path of the operation.
    pub fn path(&self) -> &str {
        match self {
            Op::Add { path, .. }
            | Op::Remove { path }
            | Op::Replace { path, .. }
            | Op::Move { path, .. }
            | Op::Copy { path, .. }
            | Op::Test { path, .. } => path.as_str(),
        }
    }

    /// Returns the source path of `move` and `copy`.
    pub fn from(&self) -> Option<&str> {
        match self {
            Op::Move { from, .. } | Op::Copy { from, .. } => Some(from.as_str()),
            _ => None,
        }
    }

    pub fn value(&self) -> Option<&Value> {
        match self {
            Op::Add { value, .. } | Op::Replace { value, .. } | Op::Test { value, .. } => {
                Some(value)
            }
            _ => None,
        }
    }
}

/// An ordered list of operations.
pub type Patch = Vec<Op>;

// ── Raw record ────────────────────────────────────────────────────────────

/// An operation as it arrives off the wire, before validation.
///
/// `value` is about presence: `Some(Value::Null)` is a present null.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OperationRecord {
    pub op: String,
    pub path: Option<String>,
    pub value: Option<Value>,
    pub from: Option<String>,
}

impl From<Op> for OperationRecord {
    fn from(op: Op) -> Self {
        let kind = op.kind().as_str().to_string();
        let (path, value, from) = match op {
            Op::Add { path, value } | Op::Replace { path, value } | Op::Test { path, value } => {
                (path, Some(value), None)
            }
            Op::Remove { path } => (path, None, None),
            Op::Move { from, path } | Op::Copy { from, path } => (path, None, Some(from)),
        };
        OperationRecord {
            op: kind,
            path: Some(path),
            value,
            from,
        }
    }
}

// ── Result types ──────────────────────────────────────────────────────────

/// Result of applying a single operation.
#[derive(Debug, Clone, PartialEq)]
pub struct OpResult {
    /// The document after applying the operation.
    pub doc: Value,
    /// The value displaced by the operation, if any.
    pub old: Option<Value>,
}

/// Result of applying a full patch.
#[derive(Debug, Clone, PartialEq)]
pub struct PatchResult {
    pub doc: Value,
    /// One entry per operation when snapshots are enabled, else empty.
    pub res: Vec<OpResult>,
}

/// Options for [`crate::apply_patch_with`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplyPatchOptions {
    /// Keep an [`OpResult`] per operation. Snapshots share structure with
    /// each other, so this costs one shallow copy per edited container.
    pub snapshots: bool,
}

impl Default for ApplyPatchOptions {
    fn default() -> Self {
        Self { snapshots: true }
    }
}
