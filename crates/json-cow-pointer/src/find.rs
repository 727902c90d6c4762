use std::sync::Arc;

use json_cow_value::{Array, Object, Value};

use crate::error::PointerError;
use crate::types::{ArrayIndex, Cursor};
use crate::util::{parse_array_index, parse_json_pointer};

/// Resolve a pointer against a document.
///
/// The root pointer `""` returns the document itself.
///
/// # Errors
///
/// - [`PointerError::InvalidPointerFormat`] for a malformed pointer
/// - [`PointerError::PathNotFound`] for a missing object key
/// - [`PointerError::IndexOutOfBounds`] for an index past the last element
/// - [`PointerError::AppendNotNavigable`] for `-` on an array
/// - [`PointerError::InvalidIndex`] / [`PointerError::NegativeIndex`] for a
///   step that is not an array index
/// - [`PointerError::PrimitiveNavigation`] for a step below a scalar
///
/// # Example
///
/// ```
/// use json_cow_pointer::resolve;
/// use json_cow_value::Value;
///
/// let doc = Value::from(serde_json::json!({"foo": ["bar", "baz"]}));
/// assert_eq!(resolve(&doc, "/foo/1").unwrap(), &Value::from("baz"));
/// ```
pub fn resolve<'a>(doc: &'a Value, pointer: &str) -> Result<&'a Value, PointerError> {
    let path = parse_json_pointer(pointer)?;
    let cursor = Cursor::new(pointer, &path);
    let mut current = doc;
    for depth in 0..path.len() {
        current = step(current, &cursor, depth)?.value();
    }
    Ok(current)
}

/// A child found by walking one path step, together with the container that
/// holds it so the container can be rebuilt around a new child.
pub(crate) enum Child<'a> {
    Entry {
        map: &'a Arc<Object>,
        key: &'a str,
        value: &'a Value,
    },
    Element {
        items: &'a Arc<Array>,
        index: usize,
        value: &'a Value,
    },
}

impl<'a> Child<'a> {
    pub fn value(&self) -> &'a Value {
        match self {
            Child::Entry { value, .. } | Child::Element { value, .. } => *value,
        }
    }

    /// Copy of the parent container with this child swapped for `value`.
    /// Every other child is shared with the original container.
    pub fn replace(self, value: Value) -> Value {
        match self {
            Child::Entry { map, key, .. } => {
                let mut map = Object::clone(map);
                map.insert(key.to_string(), value);
                Value::from(map)
            }
            Child::Element { items, index, .. } => {
                let mut items = Array::clone(items);
                items[index] = value;
                Value::from(items)
            }
        }
    }
}

/// Walk the step at `depth` of an existing path.
pub(crate) fn step<'a>(
    current: &'a Value,
    cursor: &Cursor<'_>,
    depth: usize,
) -> Result<Child<'a>, PointerError> {
    let segment = cursor.path[depth].as_str();
    match current {
        Value::Object(map) => match map.get_key_value(segment) {
            Some((key, value)) => Ok(Child::Entry { map, key, value }),
            None => Err(PointerError::PathNotFound(cursor.locate(depth))),
        },
        Value::Array(items) => {
            let index = match parse_array_index(segment) {
                Ok(ArrayIndex::Index(index)) => index,
                Ok(ArrayIndex::Append) => {
                    return Err(PointerError::AppendNotNavigable(cursor.locate(depth)))
                }
                Err(err) => return Err(err.at(cursor.locate(depth))),
            };
            match items.get(index) {
                Some(value) => Ok(Child::Element {
                    items,
                    index,
                    value,
                }),
                None => Err(PointerError::IndexOutOfBounds {
                    location: cursor.locate(depth),
                    index,
                    len: items.len(),
                }),
            }
        }
        _ => Err(PointerError::PrimitiveNavigation(cursor.locate(depth))),
    }
}
