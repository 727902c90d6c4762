//! JSON Patch (RFC 6902) over immutable documents.
//!
//! # Operations
//!
//! The six RFC 6902 operations are supported:
//! `add`, `remove`, `replace`, `move`, `copy`, `test`.
//!
//! A patch applies left to right and is all or nothing: the caller gets
//! either the fully patched document or a [`PatchAborted`] naming the
//! failing operation. Input documents are never modified, and patched
//! documents share every untouched subtree with their input.
//!
//! # Example
//!
//! ```
//! use json_cow_patch::{apply_patch, builder, PatchError};
//! use json_cow_value::Value;
//! use serde_json::json;
//!
//! let doc = Value::from(json!({"foo": "bar"}));
//! let moved = apply_patch(&doc, &[builder::move_("/foo", "/baz")]).unwrap();
//! assert_eq!(moved, Value::from(json!({"baz": "bar"})));
//!
//! let err = apply_patch(&doc, &[builder::test("/foo", "qux")]).unwrap_err();
//! assert!(matches!(err.cause, PatchError::TestFailed { .. }));
//! assert_eq!(doc, Value::from(json!({"foo": "bar"})));
//! ```

pub mod apply;
pub mod builder;
pub mod codec;
pub mod types;
pub mod validate;

pub use apply::{apply_op, apply_operation, apply_patch, apply_patch_with, PatchOperation};
pub use codec::json::{from_json, from_json_patch, to_json, to_json_patch};
pub use types::{
    ApplyPatchOptions, Op, OpKind, OpResult, OperationRecord, Patch, PatchAborted, PatchError,
    PatchResult,
};
