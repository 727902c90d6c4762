use crate::error::{IndexError, PointerError};
use crate::types::{ArrayIndex, Path};

/// Unescapes a JSON Pointer path component.
///
/// Per RFC 6901, `~1` is replaced with `/` and `~0` is replaced with `~`.
/// Unknown escapes such as `~2` are left as they are.
///
/// # Example
///
/// ```
/// use json_cow_pointer::unescape_component;
///
/// assert_eq!(unescape_component("a~0b"), "a~b");
/// assert_eq!(unescape_component("c~1d"), "c/d");
/// assert_eq!(unescape_component("~01"), "~1");
/// ```
pub fn unescape_component(component: &str) -> String {
    if !component.contains('~') {
        return component.to_string();
    }
    // ~1 before ~0, otherwise "~01" would decode to "/"
    component.replace("~1", "/").replace("~0", "~")
}

/// Escapes a JSON Pointer path component.
///
/// Per RFC 6901, `~` is replaced with `~0` and `/` is replaced with `~1`.
///
/// # Example
///
/// ```
/// use json_cow_pointer::escape_component;
///
/// assert_eq!(escape_component("a~b"), "a~0b");
/// assert_eq!(escape_component("c/d"), "c~1d");
/// ```
pub fn escape_component(component: &str) -> String {
    if !component.contains('/') && !component.contains('~') {
        return component.to_string();
    }
    // ~ before /, otherwise the ~ of each ~1 would be escaped again
    component.replace('~', "~0").replace('/', "~1")
}

/// Parse a JSON Pointer string into path components.
///
/// - Empty string is the root and returns an empty path
/// - Any other pointer must start with `/`
/// - Empty components are kept: `/` is `[""]`, `/a//c` is `["a", "", "c"]`
///
/// # Example
///
/// ```
/// use json_cow_pointer::parse_json_pointer;
///
/// assert_eq!(parse_json_pointer("").unwrap(), Vec::<String>::new());
/// assert_eq!(parse_json_pointer("/").unwrap(), vec![""]);
/// assert_eq!(parse_json_pointer("/a~0b/c~1d").unwrap(), vec!["a~b", "c/d"]);
/// assert!(parse_json_pointer("foo").is_err());
/// ```
pub fn parse_json_pointer(pointer: &str) -> Result<Path, PointerError> {
    if pointer.is_empty() {
        return Ok(Vec::new());
    }
    match pointer.strip_prefix('/') {
        Some(rest) => Ok(rest.split('/').map(unescape_component).collect()),
        None => Err(PointerError::InvalidPointerFormat {
            pointer: pointer.to_string(),
        }),
    }
}

/// Format path components into a JSON Pointer string.
///
/// Returns an empty string for the root path (empty components).
///
/// # Example
///
/// ```
/// use json_cow_pointer::format_json_pointer;
///
/// assert_eq!(format_json_pointer(&[]), "");
/// assert_eq!(format_json_pointer(&["foo".to_string(), "a/b".to_string()]), "/foo/a~1b");
/// ```
pub fn format_json_pointer(path: &[String]) -> String {
    let mut out = String::new();
    for component in path {
        out.push('/');
        out.push_str(&escape_component(component));
    }
    out
}

/// Parse a path step as an array index.
///
/// `-` is the append position. Digit strings parse as indices (leading zeros
/// allowed, values past `usize::MAX` saturate). `-` followed by digits is
/// negative. Anything else is invalid. Bounds are checked by the caller.
///
/// # Example
///
/// ```
/// use json_cow_pointer::{parse_array_index, ArrayIndex, IndexError};
///
/// assert_eq!(parse_array_index("-"), Ok(ArrayIndex::Append));
/// assert_eq!(parse_array_index("12"), Ok(ArrayIndex::Index(12)));
/// assert_eq!(parse_array_index("-1"), Err(IndexError::Negative));
/// assert_eq!(parse_array_index("1.5"), Err(IndexError::Invalid));
/// ```
pub fn parse_array_index(step: &str) -> Result<ArrayIndex, IndexError> {
    if step == "-" {
        return Ok(ArrayIndex::Append);
    }
    if let Some(digits) = step.strip_prefix('-') {
        return Err(if is_integer(digits) {
            IndexError::Negative
        } else {
            IndexError::Invalid
        });
    }
    if !is_integer(step) {
        return Err(IndexError::Invalid);
    }
    let index = step.bytes().fold(0usize, |acc, b| {
        acc.saturating_mul(10).saturating_add(usize::from(b - b'0'))
    });
    Ok(ArrayIndex::Index(index))
}

/// Check if a string consists only of ASCII digits.
pub fn is_integer(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Check if a path points to the root value.
pub fn is_root(path: &[String]) -> bool {
    path.is_empty()
}

/// Check if `parent` path strictly contains the `child` path.
///
/// # Example
///
/// ```
/// use json_cow_pointer::is_child;
///
/// let parent = vec!["foo".to_string()];
/// let child = vec!["foo".to_string(), "bar".to_string()];
/// assert!(is_child(&parent, &child));
/// assert!(!is_child(&child, &parent));
/// assert!(!is_child(&parent, &parent));
/// ```
pub fn is_child(parent: &[String], child: &[String]) -> bool {
    parent.len() < child.len() && child.starts_with(parent)
}

/// Check if two paths are equal.
pub fn is_path_equal(p1: &[String], p2: &[String]) -> bool {
    p1 == p2
}

/// Get the parent path of a given path.
///
/// # Errors
///
/// Returns [`PointerError::NoParent`] for the root path.
pub fn parent(path: &[String]) -> Result<Path, PointerError> {
    match path.split_last() {
        Some((_, init)) => Ok(init.to_vec()),
        None => Err(PointerError::NoParent),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(steps: &[&str]) -> Path {
        steps.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_unescape_component() {
        assert_eq!(unescape_component("foo"), "foo");
        assert_eq!(unescape_component("a~0b~1c"), "a~b/c");
        assert_eq!(unescape_component("~0~0"), "~~");
        assert_eq!(unescape_component("~1~1"), "//");
        // decodes to "~1", never to "/"
        assert_eq!(unescape_component("~01"), "~1");
        assert_eq!(unescape_component("~2"), "~2");
        assert_eq!(unescape_component("~"), "~");
    }

    #[test]
    fn test_escape_component() {
        assert_eq!(escape_component("foo"), "foo");
        assert_eq!(escape_component("a~b/c"), "a~0b~1c");
        assert_eq!(escape_component("~~"), "~0~0");
        assert_eq!(escape_component("//"), "~1~1");
        assert_eq!(escape_component("~1"), "~01");
    }

    #[test]
    fn test_parse_json_pointer() {
        assert_eq!(parse_json_pointer("").unwrap(), Vec::<String>::new());
        assert_eq!(parse_json_pointer("/").unwrap(), vec![""]);
        assert_eq!(parse_json_pointer("/foo/bar").unwrap(), vec!["foo", "bar"]);
        assert_eq!(parse_json_pointer("/a//c").unwrap(), vec!["a", "", "c"]);
        assert_eq!(
            parse_json_pointer("/foo///").unwrap(),
            vec!["foo", "", "", ""]
        );
        assert_eq!(
            parse_json_pointer("/a~0b/c~1d/1").unwrap(),
            vec!["a~b", "c/d", "1"]
        );
    }

    #[test]
    fn test_parse_json_pointer_rejects_relative() {
        assert_eq!(
            parse_json_pointer("foo/bar"),
            Err(PointerError::InvalidPointerFormat {
                pointer: "foo/bar".into()
            })
        );
        assert!(parse_json_pointer("#/foo").is_err());
    }

    #[test]
    fn test_format_json_pointer() {
        assert_eq!(format_json_pointer(&[]), "");
        assert_eq!(format_json_pointer(&path(&[""])), "/");
        assert_eq!(format_json_pointer(&path(&["foo", "bar"])), "/foo/bar");
        assert_eq!(format_json_pointer(&path(&["a~b", "c/d"])), "/a~0b/c~1d");
    }

    #[test]
    fn test_parse_array_index() {
        assert_eq!(parse_array_index("0"), Ok(ArrayIndex::Index(0)));
        assert_eq!(parse_array_index("123"), Ok(ArrayIndex::Index(123)));
        assert_eq!(parse_array_index("007"), Ok(ArrayIndex::Index(7)));
        assert_eq!(parse_array_index("-"), Ok(ArrayIndex::Append));
        assert_eq!(parse_array_index("-1"), Err(IndexError::Negative));
        assert_eq!(parse_array_index("-0"), Err(IndexError::Negative));
        assert_eq!(parse_array_index("--"), Err(IndexError::Invalid));
        assert_eq!(parse_array_index("-a"), Err(IndexError::Invalid));
        assert_eq!(parse_array_index(""), Err(IndexError::Invalid));
        assert_eq!(parse_array_index("+1"), Err(IndexError::Invalid));
        assert_eq!(parse_array_index("1e3"), Err(IndexError::Invalid));
        assert_eq!(parse_array_index(" 1"), Err(IndexError::Invalid));
    }

    #[test]
    fn test_parse_array_index_saturates() {
        let huge = "9".repeat(64);
        assert_eq!(parse_array_index(&huge), Ok(ArrayIndex::Index(usize::MAX)));
    }

    #[test]
    fn test_is_integer() {
        assert!(is_integer("0"));
        assert!(is_integer("0123"));
        assert!(!is_integer("-1"));
        assert!(!is_integer(""));
        assert!(!is_integer("١")); // non-ASCII digit
    }

    #[test]
    fn test_relationships() {
        let parent_path = path(&["foo"]);
        let child = path(&["foo", "bar"]);
        let sibling = path(&["baz"]);

        assert!(is_root(&[]));
        assert!(!is_root(&parent_path));
        assert!(is_child(&parent_path, &child));
        assert!(is_child(&[], &child));
        assert!(!is_child(&parent_path, &sibling));
        assert!(!is_child(&child, &child));
        assert!(is_path_equal(&child, &path(&["foo", "bar"])));
        assert!(!is_path_equal(&child, &parent_path));
    }

    #[test]
    fn test_parent() {
        assert_eq!(parent(&path(&["foo", "bar"])).unwrap(), vec!["foo"]);
        assert_eq!(parent(&path(&["foo"])).unwrap(), Vec::<String>::new());
        assert_eq!(parent(&[]), Err(PointerError::NoParent));
    }

    #[test]
    fn test_roundtrip() {
        for pointer in ["", "/", "/foo", "/a~0b/c~1d/1", "/foo///", "/~0/~1", "/~01"] {
            let parsed = parse_json_pointer(pointer).unwrap();
            assert_eq!(format_json_pointer(&parsed), pointer, "roundtrip {pointer:?}");
        }
    }
}
