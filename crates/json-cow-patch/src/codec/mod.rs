//! Wire-shape codecs for operations.

pub mod json;
