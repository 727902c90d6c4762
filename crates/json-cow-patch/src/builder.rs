//! Shorthand constructors for [`Op`]s.
//!
//! These only assemble the operation. Paths are checked when it is applied.

use json_cow_value::Value;

use crate::types::Op;

pub fn add(path: impl Into<String>, value: impl Into<Value>) -> Op {
    Op::Add {
        path: path.into(),
        value: value.into(),
    }
}

pub fn remove(path: impl Into<String>) -> Op {
    Op::Remove { path: path.into() }
}

pub fn replace(path: impl Into<String>, value: impl Into<Value>) -> Op {
    Op::Replace {
        path: path.into(),
        value: value.into(),
    }
}

/// `move` is a keyword, hence the trailing underscore.
pub fn move_(from: impl Into<String>, path: impl Into<String>) -> Op {
    Op::Move {
        from: from.into(),
        path: path.into(),
    }
}

pub fn copy(from: impl Into<String>, path: impl Into<String>) -> Op {
    Op::Copy {
        from: from.into(),
        path: path.into(),
    }
}

pub fn test(path: impl Into<String>, value: impl Into<Value>) -> Op {
    Op::Test {
        path: path.into(),
        value: value.into(),
    }
}
