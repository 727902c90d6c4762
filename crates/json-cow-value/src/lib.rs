//! Immutable JSON document values.
//!
//! A [`Value`] is a closed sum over the six JSON kinds. Strings and
//! containers live behind [`std::sync::Arc`], so cloning a document is
//! cheap and an edited copy can share every subtree the edit did not touch.
//!
//! # Example
//!
//! ```
//! use json_cow_value::Value;
//!
//! let doc = Value::from(serde_json::json!({"foo": ["bar", "baz"]}));
//! let copy = doc.clone();
//! assert!(doc.shares_structure(&copy));
//! assert_eq!(doc.as_object().unwrap()["foo"].as_array().unwrap().len(), 2);
//! ```

pub mod convert;
pub mod ser;
pub mod value;

pub use serde_json::Number;
pub use value::{Array, Object, Value, ValueKind};
