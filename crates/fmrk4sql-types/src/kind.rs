//! Value kind tags

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Variant tag of a [`Value`](crate::Value)
///
/// Dialect registries key their converters by kind, so every value of the
/// same kind is converted the same way regardless of its content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ValueKind {
    String,
    Long,
    Integer,
    Double,
    Boolean,
    /// Calendar date without time
    Date,
    /// Local date and time without offset
    DateTime,
    /// Point in time, rendered in the system time zone
    Timestamp,
    /// Point in time bound as an SQL date
    SqlDate,
    List,
    /// Caller-controlled value, converted as is
    Object,
    /// Null sentinel
    Null,
}

impl ValueKind {
    /// All kinds, in declaration order
    pub const ALL: [ValueKind; 12] = [
        ValueKind::String,
        ValueKind::Long,
        ValueKind::Integer,
        ValueKind::Double,
        ValueKind::Boolean,
        ValueKind::Date,
        ValueKind::DateTime,
        ValueKind::Timestamp,
        ValueKind::SqlDate,
        ValueKind::List,
        ValueKind::Object,
        ValueKind::Null,
    ];

    /// Whether values of this kind are numbers or booleans bound without quoting
    pub fn is_scalar(&self) -> bool {
        matches!(
            self,
            Self::Long | Self::Integer | Self::Double | Self::Boolean
        )
    }

    /// Whether values of this kind carry a date or a point in time
    pub fn is_temporal(&self) -> bool {
        matches!(
            self,
            Self::Date | Self::DateTime | Self::Timestamp | Self::SqlDate
        )
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::String => "String",
            Self::Long => "Long",
            Self::Integer => "Integer",
            Self::Double => "Double",
            Self::Boolean => "Boolean",
            Self::Date => "Date",
            Self::DateTime => "DateTime",
            Self::Timestamp => "Timestamp",
            Self::SqlDate => "SqlDate",
            Self::List => "List",
            Self::Object => "Object",
            Self::Null => "Null",
        };
        write!(f, "{}", name)
    }
}

/// Native Rust types with a fixed value kind
///
/// Used to build an absent value of the right kind from `None`.
pub trait Typed {
    const KIND: ValueKind;
}

impl Typed for String {
    const KIND: ValueKind = ValueKind::String;
}

impl Typed for &str {
    const KIND: ValueKind = ValueKind::String;
}

impl Typed for i64 {
    const KIND: ValueKind = ValueKind::Long;
}

impl Typed for i32 {
    const KIND: ValueKind = ValueKind::Integer;
}

impl Typed for f64 {
    const KIND: ValueKind = ValueKind::Double;
}

impl Typed for bool {
    const KIND: ValueKind = ValueKind::Boolean;
}

impl Typed for NaiveDate {
    const KIND: ValueKind = ValueKind::Date;
}

impl Typed for NaiveDateTime {
    const KIND: ValueKind = ValueKind::DateTime;
}

impl Typed for DateTime<Utc> {
    const KIND: ValueKind = ValueKind::Timestamp;
}

impl<T> Typed for Vec<T> {
    const KIND: ValueKind = ValueKind::List;
}

impl Typed for serde_json::Value {
    const KIND: ValueKind = ValueKind::Object;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_display() {
        assert_eq!(ValueKind::Date.to_string(), "Date");
        assert_eq!(ValueKind::SqlDate.to_string(), "SqlDate");
    }

    #[test]
    fn test_kind_classes() {
        assert!(ValueKind::Integer.is_scalar());
        assert!(!ValueKind::String.is_scalar());
        assert!(ValueKind::Timestamp.is_temporal());
        assert!(!ValueKind::List.is_temporal());
        assert_eq!(ValueKind::ALL.len(), 12);
    }
}
