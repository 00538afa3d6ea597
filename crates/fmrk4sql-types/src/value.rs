//! Parameter values - the typed content of a query parameter
//!
//! A [`Value`] knows its raw form and its default literal. Dialects that need
//! a different rendering register their own converters per [`ValueKind`]
//! instead of touching this type.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use fmrk4sql_diagnostics::{ParamError, ParamResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::{DATE_FORMAT, DATETIME_FORMAT, Literal, Typed, ValueKind, local_datetime};

/// A typed parameter value
///
/// Values are immutable. Equality and hashing are structural; doubles compare
/// by bit pattern so that `Eq` and `Hash` stay consistent.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum Value {
    // === Scalars ===
    String(String),
    /// 64-bit signed integer
    Long(i64),
    /// 32-bit signed integer
    Integer(i32),
    Double(f64),
    Boolean(bool),

    // === Temporal ===
    /// Calendar date
    Date(NaiveDate),
    /// Local date-time without offset
    DateTime(NaiveDateTime),
    /// Instant, rendered as wall-clock time in the system time zone
    Timestamp(DateTime<Utc>),
    /// Instant bound as an SQL date
    SqlDate(DateTime<Utc>),

    // === Composite ===
    /// Ordered values, converted element-wise
    List(Vec<Value>),
    /// Caller-controlled passthrough
    Object(serde_json::Value),

    // === Placeholders ===
    /// A value of the given kind whose backing value is missing
    Absent(ValueKind),
    /// Typed placeholder for SQL NULL; never usable as a value
    Null,
}

/// Borrowed view of the undecorated content of a [`Value`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Raw<'a> {
    String(&'a str),
    Long(i64),
    Integer(i32),
    Double(f64),
    Boolean(bool),
    Date(NaiveDate),
    DateTime(NaiveDateTime),
    Timestamp(DateTime<Utc>),
    SqlDate(DateTime<Utc>),
    List(&'a [Value]),
    Object(&'a serde_json::Value),
}

impl Value {
    /// Get the kind of this value
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::String(_) => ValueKind::String,
            Self::Long(_) => ValueKind::Long,
            Self::Integer(_) => ValueKind::Integer,
            Self::Double(_) => ValueKind::Double,
            Self::Boolean(_) => ValueKind::Boolean,
            Self::Date(_) => ValueKind::Date,
            Self::DateTime(_) => ValueKind::DateTime,
            Self::Timestamp(_) => ValueKind::Timestamp,
            Self::SqlDate(_) => ValueKind::SqlDate,
            Self::List(_) => ValueKind::List,
            Self::Object(_) => ValueKind::Object,
            Self::Absent(kind) => *kind,
            Self::Null => ValueKind::Null,
        }
    }

    /// Check if this is the null sentinel
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Check if the backing value is missing
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent(_))
    }

    /// Create a string value
    pub fn string(value: impl Into<String>) -> Self {
        Self::String(value.into())
    }

    /// Create a long value
    pub fn long(value: i64) -> Self {
        Self::Long(value)
    }

    /// Create an integer value
    pub fn integer(value: i32) -> Self {
        Self::Integer(value)
    }

    /// Create a double value
    pub fn double(value: f64) -> Self {
        Self::Double(value)
    }

    /// Create a boolean value
    pub fn boolean(value: bool) -> Self {
        Self::Boolean(value)
    }

    /// Create a date value
    pub fn date(value: NaiveDate) -> Self {
        Self::Date(value)
    }

    /// Create a date-time value
    pub fn datetime(value: NaiveDateTime) -> Self {
        Self::DateTime(value)
    }

    /// Create a timestamp value
    pub fn timestamp(value: DateTime<Utc>) -> Self {
        Self::Timestamp(value)
    }

    /// Create a timestamp from milliseconds since the Unix epoch
    pub fn timestamp_millis(millis: i64) -> Option<Self> {
        DateTime::from_timestamp_millis(millis).map(Self::Timestamp)
    }

    /// Create an SQL date value
    pub fn sql_date(value: DateTime<Utc>) -> Self {
        Self::SqlDate(value)
    }

    /// Create an SQL date from milliseconds since the Unix epoch
    pub fn sql_date_millis(millis: i64) -> Option<Self> {
        DateTime::from_timestamp_millis(millis).map(Self::SqlDate)
    }

    /// Create a list value
    pub fn list(values: impl IntoIterator<Item = impl Into<Value>>) -> Self {
        Self::List(values.into_iter().map(Into::into).collect())
    }

    /// Create an object passthrough value
    pub fn object(value: serde_json::Value) -> Self {
        Self::Object(value)
    }

    /// Create an absent value of the given kind
    pub fn absent(kind: ValueKind) -> Self {
        match kind {
            ValueKind::Null => Self::Null,
            other => Self::Absent(other),
        }
    }

    /// Create the null sentinel
    pub fn null() -> Self {
        Self::Null
    }

    /// The undecorated value
    ///
    /// Never runs conversion logic. Fails with `NullValue` when the backing
    /// value is missing and with `UnsupportedSentinel` for the null sentinel.
    pub fn raw(&self) -> ParamResult<Raw<'_>> {
        Ok(match self {
            Self::String(s) => Raw::String(s),
            Self::Long(l) => Raw::Long(*l),
            Self::Integer(i) => Raw::Integer(*i),
            Self::Double(d) => Raw::Double(*d),
            Self::Boolean(b) => Raw::Boolean(*b),
            Self::Date(d) => Raw::Date(*d),
            Self::DateTime(dt) => Raw::DateTime(*dt),
            Self::Timestamp(ts) => Raw::Timestamp(*ts),
            Self::SqlDate(ts) => Raw::SqlDate(*ts),
            Self::List(items) => Raw::List(items),
            Self::Object(obj) => Raw::Object(obj),
            Self::Absent(kind) => return Err(ParamError::null_value(kind)),
            Self::Null => return Err(ParamError::UnsupportedSentinel),
        })
    }

    /// The default literal of this value
    ///
    /// Strings and dates are single-quoted, numbers and booleans pass through,
    /// lists convert element-wise into a native list and objects are returned
    /// unchanged.
    pub fn convert(&self) -> ParamResult<Literal> {
        Ok(match self.raw()? {
            Raw::String(s) => Literal::Text(format!("'{}'", s)),
            Raw::Long(l) => Literal::Long(l),
            Raw::Integer(i) => Literal::Integer(i),
            Raw::Double(d) => Literal::Double(d),
            Raw::Boolean(b) => Literal::Boolean(b),
            Raw::Date(d) => Literal::Text(format!("'{}'", d.format(DATE_FORMAT))),
            Raw::DateTime(dt) => Literal::Text(format!("'{}'", dt.format(DATETIME_FORMAT))),
            Raw::Timestamp(ts) | Raw::SqlDate(ts) => {
                Literal::Text(format!("'{}'", local_datetime(&ts).format(DATETIME_FORMAT)))
            }
            Raw::List(items) => Literal::List(
                items
                    .iter()
                    .map(Value::convert)
                    .collect::<ParamResult<Vec<_>>>()?,
            ),
            Raw::Object(obj) => Literal::Object(obj.clone()),
        })
    }

    /// Try to get as string
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get as list
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(s) => write!(f, "{}", s),
            Self::Long(l) => write!(f, "{}", l),
            Self::Integer(i) => write!(f, "{}", i),
            Self::Double(d) => write!(f, "{}", d),
            Self::Boolean(b) => write!(f, "{}", b),
            Self::Date(d) => write!(f, "{}", d.format(DATE_FORMAT)),
            Self::DateTime(dt) => write!(f, "{}", dt.format(DATETIME_FORMAT)),
            Self::Timestamp(ts) | Self::SqlDate(ts) => {
                write!(f, "{}", local_datetime(ts).format(DATETIME_FORMAT))
            }
            Self::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
            Self::Object(obj) => write!(f, "{}", obj),
            Self::Absent(_) | Self::Null => write!(f, "null"),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::String(a), Self::String(b)) => a == b,
            (Self::Long(a), Self::Long(b)) => a == b,
            (Self::Integer(a), Self::Integer(b)) => a == b,
            (Self::Double(a), Self::Double(b)) => a.to_bits() == b.to_bits(),
            (Self::Boolean(a), Self::Boolean(b)) => a == b,
            (Self::Date(a), Self::Date(b)) => a == b,
            (Self::DateTime(a), Self::DateTime(b)) => a == b,
            (Self::Timestamp(a), Self::Timestamp(b)) => a == b,
            (Self::SqlDate(a), Self::SqlDate(b)) => a == b,
            (Self::List(a), Self::List(b)) => a == b,
            (Self::Object(a), Self::Object(b)) => a == b,
            (Self::Absent(a), Self::Absent(b)) => a == b,
            (Self::Null, Self::Null) => true,
            _ => false,
        }
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Self::String(s) => s.hash(state),
            Self::Long(l) => l.hash(state),
            Self::Integer(i) => i.hash(state),
            Self::Double(d) => d.to_bits().hash(state),
            Self::Boolean(b) => b.hash(state),
            Self::Date(d) => d.hash(state),
            Self::DateTime(dt) => dt.hash(state),
            Self::Timestamp(ts) | Self::SqlDate(ts) => ts.hash(state),
            Self::List(items) => items.hash(state),
            // serde_json values are not Hash; the compact rendering is canonical
            Self::Object(obj) => obj.to_string().hash(state),
            Self::Absent(kind) => kind.hash(state),
            Self::Null => {}
        }
    }
}

// ============================================================================
// Conversions from native types
// ============================================================================

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Long(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Double(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<NaiveDate> for Value {
    fn from(value: NaiveDate) -> Self {
        Self::Date(value)
    }
}

impl From<NaiveDateTime> for Value {
    fn from(value: NaiveDateTime) -> Self {
        Self::DateTime(value)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(value: DateTime<Utc>) -> Self {
        Self::Timestamp(value)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(values: Vec<T>) -> Self {
        Self::List(values.into_iter().map(Into::into).collect())
    }
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        Self::Object(value)
    }
}

impl<T: Into<Value> + Typed> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(inner) => inner.into(),
            None => Self::absent(T::KIND),
        }
    }
}
