use json_cow_value::Value;

use crate::types::ArrayIndex;
use crate::util::parse_array_index;

/// Get a value from a document by an already-parsed path.
///
/// Returns `None` if the path doesn't exist or a step is not a usable array
/// index. Use [`crate::resolve`] when the reason matters.
///
/// # Example
///
/// ```
/// use json_cow_pointer::get;
/// use json_cow_value::Value;
///
/// let doc = Value::from(serde_json::json!({"foo": {"bar": 42}}));
/// let val = get(&doc, &["foo".to_string(), "bar".to_string()]);
/// assert_eq!(val, Some(&Value::from(42)));
/// assert_eq!(get(&doc, &["missing".to_string()]), None);
/// ```
pub fn get<'a>(val: &'a Value, path: &[String]) -> Option<&'a Value> {
    let mut current = val;
    for path_step in path {
        current = match current {
            Value::Array(arr) => match parse_array_index(path_step).ok()? {
                ArrayIndex::Index(idx) => arr.get(idx)?,
                ArrayIndex::Append => return None,
            },
            Value::Object(map) => map.get(path_step)?,
            _ => return None,
        };
    }
    Some(current)
}
