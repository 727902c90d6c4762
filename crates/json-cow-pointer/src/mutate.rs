//! Copy-on-write updates.
//!
//! Every function here takes the document by reference and returns a new
//! one. Only the containers on the edited path are copied; each copy is
//! shallow, so siblings off the path stay shared with the input.

use json_cow_value::{Array, Object, Value};

use crate::error::PointerError;
use crate::find::step;
use crate::types::{ArrayIndex, Cursor};
use crate::util::{parse_array_index, parse_json_pointer};

/// What happens at an existing array position on the last step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Placement {
    Overwrite,
    Insert,
}

/// Set `value` at `pointer`, returning the new document.
///
/// - The root pointer replaces the whole document
/// - A missing object key along the way is created as an empty object
/// - On arrays, `-` and an index equal to the length append, an index
///   inside the array replaces in place
///
/// # Errors
///
/// - [`PointerError::IndexOutOfBounds`] for an index past the length
/// - [`PointerError::CannotSetOnPrimitive`] for a step below a scalar
/// - [`PointerError::InvalidIndex`] / [`PointerError::NegativeIndex`]
/// - [`PointerError::InvalidPointerFormat`]
///
/// # Example
///
/// ```
/// use json_cow_pointer::set;
/// use json_cow_value::Value;
/// use serde_json::json;
///
/// let doc = set(&Value::empty_object(), "/a/b/c", Value::from(1)).unwrap();
/// assert_eq!(doc, Value::from(json!({"a": {"b": {"c": 1}}})));
/// ```
pub fn set(doc: &Value, pointer: &str, value: Value) -> Result<Value, PointerError> {
    let path = parse_json_pointer(pointer)?;
    write(doc, &Cursor::new(pointer, &path), 0, value, Placement::Overwrite)
}

/// Like [`set`], except that on the last step an array index inside the
/// array inserts before that element instead of replacing it.
///
/// Object keys are still overwritten. This is the RFC 6902 `add` placement.
///
/// # Example
///
/// ```
/// use json_cow_pointer::insert;
/// use json_cow_value::Value;
/// use serde_json::json;
///
/// let doc = Value::from(json!(["bar", "baz"]));
/// let doc = insert(&doc, "/1", Value::from("qux")).unwrap();
/// assert_eq!(doc, Value::from(json!(["bar", "qux", "baz"])));
/// ```
pub fn insert(doc: &Value, pointer: &str, value: Value) -> Result<Value, PointerError> {
    let path = parse_json_pointer(pointer)?;
    write(doc, &Cursor::new(pointer, &path), 0, value, Placement::Insert)
}

fn write(
    node: &Value,
    cursor: &Cursor<'_>,
    depth: usize,
    value: Value,
    placement: Placement,
) -> Result<Value, PointerError> {
    let Some(segment) = cursor.path.get(depth) else {
        return Ok(value);
    };
    match node {
        Value::Object(map) => {
            let child = match map.get(segment) {
                Some(child) => write(child, cursor, depth + 1, value, placement)?,
                None => write(&Value::empty_object(), cursor, depth + 1, value, placement)?,
            };
            let mut map = Object::clone(map);
            map.insert(segment.clone(), child);
            Ok(Value::from(map))
        }
        Value::Array(items) => {
            let len = items.len();
            let index = match parse_array_index(segment).map_err(|e| e.at(cursor.locate(depth)))? {
                ArrayIndex::Append => len,
                ArrayIndex::Index(index) if index <= len => index,
                ArrayIndex::Index(index) => {
                    return Err(PointerError::IndexOutOfBounds {
                        location: cursor.locate(depth),
                        index,
                        len,
                    })
                }
            };
            let mut items = Array::clone(items);
            if index == len {
                let child = write(&Value::empty_object(), cursor, depth + 1, value, placement)?;
                items.push(child);
            } else if placement == Placement::Insert && cursor.is_last(depth) {
                items.insert(index, value);
            } else {
                let child = write(&items[index], cursor, depth + 1, value, placement)?;
                items[index] = child;
            }
            Ok(Value::from(items))
        }
        _ => Err(PointerError::CannotSetOnPrimitive(cursor.locate(depth))),
    }
}

/// Remove the value at `pointer`, returning the new document.
///
/// Removing an array element shifts the following elements left.
///
/// # Errors
///
/// - [`PointerError::CannotRemoveRoot`] for the root pointer
/// - [`PointerError::PathNotFound`] / [`PointerError::IndexOutOfBounds`] if
///   the target is missing
/// - [`PointerError::AppendNotRemovable`] for a final `-` step
/// - [`PointerError::PrimitiveRemove`] if the parent is a scalar
/// - any [`crate::resolve`] error for the steps leading to the parent
///
/// # Example
///
/// ```
/// use json_cow_pointer::remove;
/// use json_cow_value::Value;
/// use serde_json::json;
///
/// let doc = Value::from(json!({"a": [1, 2, 3]}));
/// let out = remove(&doc, "/a/0").unwrap();
/// assert_eq!(out, Value::from(json!({"a": [2, 3]})));
/// assert_eq!(doc, Value::from(json!({"a": [1, 2, 3]})));
/// ```
pub fn remove(doc: &Value, pointer: &str) -> Result<Value, PointerError> {
    let path = parse_json_pointer(pointer)?;
    if path.is_empty() {
        return Err(PointerError::CannotRemoveRoot {
            pointer: pointer.to_string(),
        });
    }
    delete(doc, &Cursor::new(pointer, &path), 0)
}

fn delete(node: &Value, cursor: &Cursor<'_>, depth: usize) -> Result<Value, PointerError> {
    if !cursor.is_last(depth) {
        let child = step(node, cursor, depth)?;
        let rebuilt = delete(child.value(), cursor, depth + 1)?;
        return Ok(child.replace(rebuilt));
    }
    let segment = cursor.path[depth].as_str();
    match node {
        Value::Object(map) => {
            if !map.contains_key(segment) {
                return Err(PointerError::PathNotFound(cursor.locate(depth)));
            }
            let mut map = Object::clone(map);
            map.shift_remove(segment);
            Ok(Value::from(map))
        }
        Value::Array(items) => {
            let index = match parse_array_index(segment).map_err(|e| e.at(cursor.locate(depth)))? {
                ArrayIndex::Append => {
                    return Err(PointerError::AppendNotRemovable(cursor.locate(depth)))
                }
                ArrayIndex::Index(index) => index,
            };
            if index >= items.len() {
                return Err(PointerError::IndexOutOfBounds {
                    location: cursor.locate(depth),
                    index,
                    len: items.len(),
                });
            }
            let mut items = Array::clone(items);
            items.remove(index);
            Ok(Value::from(items))
        }
        _ => Err(PointerError::PrimitiveRemove(cursor.locate(depth))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::find::resolve;
    use crate::types::Location;
    use serde_json::json;

    fn doc(v: serde_json::Value) -> Value {
        Value::from(v)
    }

    fn loc(pointer: &str, segment: &str, at: &str) -> Location {
        Location {
            pointer: pointer.into(),
            segment: segment.into(),
            at: at.into(),
        }
    }

    #[test]
    fn test_set_root() {
        let d = doc(json!({"a": 1}));
        assert_eq!(set(&d, "", Value::from(5)).unwrap(), Value::from(5));
    }

    #[test]
    fn test_set_auto_vivifies() {
        let out = set(&Value::empty_object(), "/a/b/c", Value::from(1)).unwrap();
        assert_eq!(out, doc(json!({"a": {"b": {"c": 1}}})));
    }

    #[test]
    fn test_set_overwrites_object_key_in_place() {
        let d = doc(json!({"x": 1, "y": 2}));
        let out = set(&d, "/x", Value::from(9)).unwrap();
        let keys: Vec<&String> = out.as_object().unwrap().keys().collect();
        assert_eq!(keys, ["x", "y"]);
        assert_eq!(out, doc(json!({"x": 9, "y": 2})));
    }

    #[test]
    fn test_set_array_positions() {
        let d = doc(json!([1, 2, 3]));
        assert_eq!(set(&d, "/1", Value::from(9)).unwrap(), doc(json!([1, 9, 3])));
        assert_eq!(
            set(&d, "/3", Value::from(4)).unwrap(),
            doc(json!([1, 2, 3, 4]))
        );
        assert_eq!(
            set(&d, "/-", Value::from(4)).unwrap(),
            doc(json!([1, 2, 3, 4]))
        );
        assert_eq!(
            set(&d, "/4", Value::from(5)),
            Err(PointerError::IndexOutOfBounds {
                location: loc("/4", "4", ""),
                index: 4,
                len: 3,
            })
        );
    }

    #[test]
    fn test_set_through_append_builds_object() {
        let d = doc(json!({"list": []}));
        let out = set(&d, "/list/-/name", Value::from("x")).unwrap();
        assert_eq!(out, doc(json!({"list": [{"name": "x"}]})));
    }

    #[test]
    fn test_set_on_primitive() {
        let d = doc(json!({"a": 1}));
        assert_eq!(
            set(&d, "/a/b", Value::Null),
            Err(PointerError::CannotSetOnPrimitive(loc("/a/b", "b", "/a")))
        );
    }

    #[test]
    fn test_set_bad_index() {
        let d = doc(json!([]));
        assert_eq!(
            set(&d, "/-2", Value::Null),
            Err(PointerError::NegativeIndex(loc("/-2", "-2", "")))
        );
        assert!(matches!(
            set(&d, "/x", Value::Null),
            Err(PointerError::InvalidIndex(_))
        ));
    }

    #[test]
    fn test_set_leaves_input_untouched() {
        let d = doc(json!({"a": {"b": [1, 2]}, "c": {"d": true}}));
        let saved = d.clone();
        let out = set(&d, "/a/b/0", Value::from("x")).unwrap();
        assert_eq!(d, saved);
        assert_eq!(resolve(&out, "/a/b/0").unwrap(), &Value::from("x"));

        let before = resolve(&d, "/c").unwrap();
        let after = resolve(&out, "/c").unwrap();
        assert!(before.shares_structure(after));
        let edited = resolve(&out, "/a").unwrap();
        assert!(!resolve(&d, "/a").unwrap().shares_structure(edited));
    }

    #[test]
    fn test_insert_shifts_array() {
        let d = doc(json!({"foo": ["bar", "baz"]}));
        let out = insert(&d, "/foo/1", Value::from("qux")).unwrap();
        assert_eq!(out, doc(json!({"foo": ["bar", "qux", "baz"]})));
        let out = insert(&d, "/foo/0", Value::from("first")).unwrap();
        assert_eq!(out, doc(json!({"foo": ["first", "bar", "baz"]})));
        let out = insert(&d, "/foo/2", Value::from("end")).unwrap();
        assert_eq!(out, doc(json!({"foo": ["bar", "baz", "end"]})));
        assert!(matches!(
            insert(&d, "/foo/3", Value::Null),
            Err(PointerError::IndexOutOfBounds {
                index: 3,
                len: 2,
                ..
            })
        ));
    }

    #[test]
    fn test_insert_descends_intermediate_index() {
        let d = doc(json!([[1, 2], [3]]));
        let out = insert(&d, "/0/1", Value::from(9)).unwrap();
        assert_eq!(out, doc(json!([[1, 9, 2], [3]])));
    }

    #[test]
    fn test_insert_overwrites_object_key() {
        let d = doc(json!({"a": 1}));
        assert_eq!(
            insert(&d, "/a", Value::from(2)).unwrap(),
            doc(json!({"a": 2}))
        );
    }

    #[test]
    fn test_remove_root() {
        assert_eq!(
            remove(&doc(json!({})), ""),
            Err(PointerError::CannotRemoveRoot {
                pointer: String::new(),
            })
        );
    }

    #[test]
    fn test_remove_object_key() {
        let d = doc(json!({"a": 1, "b": 2, "c": 3}));
        let out = remove(&d, "/b").unwrap();
        let keys: Vec<&String> = out.as_object().unwrap().keys().collect();
        assert_eq!(keys, ["a", "c"]);
        assert_eq!(
            remove(&d, "/z"),
            Err(PointerError::PathNotFound(loc("/z", "z", "")))
        );
    }

    #[test]
    fn test_remove_array_element() {
        let d = doc(json!({"a": {"b": [1, 2, 3]}}));
        assert_eq!(
            remove(&d, "/a/b/1").unwrap(),
            doc(json!({"a": {"b": [1, 3]}}))
        );
        assert_eq!(
            remove(&d, "/a/b/3"),
            Err(PointerError::IndexOutOfBounds {
                location: loc("/a/b/3", "3", "/a/b"),
                index: 3,
                len: 3,
            })
        );
        assert_eq!(
            remove(&d, "/a/b/-"),
            Err(PointerError::AppendNotRemovable(loc("/a/b/-", "-", "/a/b")))
        );
    }

    #[test]
    fn test_remove_from_primitive() {
        let d = doc(json!({"a": 1}));
        assert_eq!(
            remove(&d, "/a/b"),
            Err(PointerError::PrimitiveRemove(loc("/a/b", "b", "/a")))
        );
    }

    #[test]
    fn test_remove_intermediate_navigation() {
        let d = doc(json!({"a": [{"b": 1}]}));
        assert_eq!(remove(&d, "/a/0/b").unwrap(), doc(json!({"a": [{}]})));
        assert_eq!(
            remove(&d, "/x/b"),
            Err(PointerError::PathNotFound(loc("/x/b", "x", "")))
        );
        assert_eq!(
            remove(&d, "/a/-/b"),
            Err(PointerError::AppendNotNavigable(loc("/a/-/b", "-", "/a")))
        );
        assert!(matches!(
            remove(&d, "/a/0/b/c"),
            Err(PointerError::PrimitiveRemove(_))
        ));
    }

    #[test]
    fn test_remove_shares_untouched_subtrees() {
        let d = doc(json!({"keep": [1, 2], "edit": {"x": 1, "y": 2}}));
        let out = remove(&d, "/edit/x").unwrap();
        assert_eq!(out, doc(json!({"keep": [1, 2], "edit": {"y": 2}})));
        let kept = resolve(&out, "/keep").unwrap();
        assert!(resolve(&d, "/keep").unwrap().shares_structure(kept));
        assert_eq!(d, doc(json!({"keep": [1, 2], "edit": {"x": 1, "y": 2}})));
    }
}
