//! JSON Patch operation validator.
//!
//! Checks a raw [`OperationRecord`] and turns it into a typed [`Op`]. Checks
//! run in a fixed order: the kind, then `path`, then the kind's own
//! required field.

use json_cow_value::Value;

use crate::types::{Op, OpKind, OperationRecord, PatchError};

impl OperationRecord {
    /// A record of the given kind with no fields set.
    pub fn new(op: impl Into<String>) -> Self {
        Self {
            op: op.into(),
            ..Self::default()
        }
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn with_value(mut self, value: impl Into<Value>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn with_from(mut self, from: impl Into<String>) -> Self {
        self.from = Some(from.into());
        self
    }

    /// Validate the record, returning it unchanged on success.
    ///
    /// # Errors
    ///
    /// - [`PatchError::InvalidOperationKind`] if `op` is not one of the six kinds
    /// - [`PatchError::MissingPath`] if `path` is absent
    /// - [`PatchError::MissingValue`] for `add` / `replace` / `test` without `value`
    /// - [`PatchError::MissingFrom`] for `move` / `copy` without `from`
    pub fn validate(&self) -> Result<&Self, PatchError> {
        Op::try_from(self).map(|_| self)
    }
}

impl TryFrom<&OperationRecord> for Op {
    type Error = PatchError;

    fn try_from(record: &OperationRecord) -> Result<Self, Self::Error> {
        let kind: OpKind = record.op.parse()?;
        let path = record
            .path
            .clone()
            .ok_or(PatchError::MissingPath { op: kind })?;
        let value = || {
            record
                .value
                .clone()
                .ok_or(PatchError::MissingValue { op: kind })
        };
        let from = || {
            record
                .from
                .clone()
                .ok_or(PatchError::MissingFrom { op: kind })
        };
        Ok(match kind {
            OpKind::Add => Op::Add {
                path,
                value: value()?,
            },
            OpKind::Remove => Op::Remove { path },
            OpKind::Replace => Op::Replace {
                path,
                value: value()?,
            },
            OpKind::Move => Op::Move {
                from: from()?,
                path,
            },
            OpKind::Copy => Op::Copy {
                from: from()?,
                path,
            },
            OpKind::Test => Op::Test {
                path,
                value: value()?,
            },
        })
    }
}

impl TryFrom<OperationRecord> for Op {
    type Error = PatchError;

    fn try_from(record: OperationRecord) -> Result<Self, Self::Error> {
        Op::try_from(&record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_unknown_kind_before_anything_else() {
        let record = OperationRecord::new("str_ins");
        assert_eq!(
            record.validate(),
            Err(PatchError::InvalidOperationKind {
                op: "str_ins".into(),
            })
        );
        assert!(OperationRecord::new("").validate().is_err());
    }

    #[test]
    fn every_kind_requires_path() {
        for kind in OpKind::ALL {
            let record = OperationRecord::new(kind.as_str())
                .with_value(1)
                .with_from("/a");
            assert_eq!(record.validate(), Err(PatchError::MissingPath { op: kind }));
        }
    }

    #[test]
    fn value_presence_not_truthiness() {
        for kind in [OpKind::Add, OpKind::Replace, OpKind::Test] {
            let bare = OperationRecord::new(kind.as_str()).with_path("/a");
            assert_eq!(bare.validate(), Err(PatchError::MissingValue { op: kind }));

            let null = bare.clone().with_value(Value::Null);
            assert_eq!(null.validate(), Ok(&null));
            let falsy = bare.with_value(false);
            assert!(falsy.validate().is_ok());
        }
    }

    #[test]
    fn move_and_copy_require_from() {
        for kind in [OpKind::Move, OpKind::Copy] {
            let record = OperationRecord::new(kind.as_str()).with_path("/a").with_value(1);
            assert_eq!(record.validate(), Err(PatchError::MissingFrom { op: kind }));
        }
    }

    #[test]
    fn remove_requires_only_path() {
        let record = OperationRecord::new("remove").with_path("/a");
        assert_eq!(record.validate(), Ok(&record));
        assert_eq!(
            Op::try_from(record),
            Ok(Op::Remove { path: "/a".into() })
        );
    }

    #[test]
    fn extra_fields_are_ignored() {
        let record = OperationRecord::new("remove")
            .with_path("/a")
            .with_value(1)
            .with_from("/b");
        assert_eq!(Op::try_from(&record), Ok(Op::Remove { path: "/a".into() }));
    }

    #[test]
    fn record_roundtrips_through_op() {
        let record = OperationRecord::new("move").with_path("/to").with_from("/from");
        let op = Op::try_from(&record).unwrap();
        assert_eq!(
            op,
            Op::Move {
                from: "/from".into(),
                path: "/to".into()
            }
        );
        assert_eq!(OperationRecord::from(op), record);
    }
}
