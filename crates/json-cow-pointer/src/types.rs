//! Type definitions for JSON Pointer.

use std::fmt;

use crate::util::format_json_pointer;

/// A step in a JSON Pointer path, already unescaped.
pub type PathStep = String;

/// A JSON Pointer path.
pub type Path = Vec<PathStep>;

/// An array index token, computed from a path step at navigation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrayIndex {
    /// A non-negative position.
    Index(usize),
    /// The `-` token: one past the last element.
    Append,
}

/// Where a pointer operation failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    /// The pointer string as the caller supplied it.
    pub pointer: String,
    /// The unescaped step that could not be applied.
    pub segment: String,
    /// Pointer to the value the step was applied to.
    pub at: String,
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "at step {:?} of {:?} (parent {:?})",
            self.segment, self.pointer, self.at
        )
    }
}

/// A parsed pointer together with its source string, used to build
/// [`Location`]s lazily when a step fails.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Cursor<'a> {
    pub pointer: &'a str,
    pub path: &'a [String],
}

impl<'a> Cursor<'a> {
    pub fn new(pointer: &'a str, path: &'a [String]) -> Self {
        Self { pointer, path }
    }

    pub fn is_last(&self, depth: usize) -> bool {
        depth + 1 == self.path.len()
    }

    pub fn locate(&self, depth: usize) -> Location {
        Location {
            pointer: self.pointer.to_string(),
            segment: self.path[depth].clone(),
            at: format_json_pointer(&self.path[..depth]),
        }
    }
}
