//! JSON Pointer (RFC 6901) over immutable documents.
//!
//! This crate implements [JSON Pointer (RFC 6901)](https://tools.ietf.org/html/rfc6901)
//! parsing and formatting, strict resolution with located errors, and
//! copy-on-write `set` / `insert` / `remove` over [`json_cow_value::Value`].
//!
//! # Example
//!
//! ```
//! use json_cow_pointer::{format_json_pointer, parse_json_pointer, remove, resolve, set};
//! use json_cow_value::Value;
//!
//! let path = parse_json_pointer("/foo/bar").unwrap();
//! assert_eq!(path, vec!["foo".to_string(), "bar".to_string()]);
//! assert_eq!(format_json_pointer(&path), "/foo/bar");
//!
//! let doc = Value::from(serde_json::json!({"foo": {"bar": 42}}));
//! assert_eq!(resolve(&doc, "/foo/bar").unwrap(), &Value::from(42));
//!
//! let updated = set(&doc, "/foo/baz", Value::from(true)).unwrap();
//! let trimmed = remove(&updated, "/foo/bar").unwrap();
//! assert_eq!(trimmed, Value::from(serde_json::json!({"foo": {"baz": true}})));
//! // the input is never modified
//! assert_eq!(resolve(&doc, "/foo/bar").unwrap(), &Value::from(42));
//! ```

pub mod error;
pub mod find;
pub mod get;
pub mod mutate;
pub mod types;
pub mod util;

pub use error::{IndexError, PointerError};
pub use find::resolve;
pub use get::get;
pub use mutate::{insert, remove, set};
pub use types::{ArrayIndex, Location, Path, PathStep};
pub use util::{
    escape_component, format_json_pointer, is_child, is_integer, is_path_equal, is_root,
    parent, parse_array_index, parse_json_pointer, unescape_component,
};
