//! Converted parameter values

use serde::Serialize;
use std::fmt;

/// Dialect-ready representation of a converted value
///
/// Text literals already carry whatever quoting the dialect requires, so
/// displaying a literal yields exactly what is bound into the query.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Literal {
    /// Rendered text, quoted or not depending on the converter
    Text(String),
    Long(i64),
    Integer(i32),
    Double(f64),
    Boolean(bool),
    /// Native list of converted elements
    List(Vec<Literal>),
    /// Caller-controlled value passed through unchanged
    Object(serde_json::Value),
}

impl Literal {
    /// Create a text literal
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// Try to get as text
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get as list
    pub fn as_list(&self) -> Option<&[Literal]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    /// Join the display form of `items` with `separator`
    ///
    /// An empty slice yields an empty string; no leading or trailing separator
    /// is ever produced.
    pub fn join(items: &[Literal], separator: &str) -> String {
        items
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(separator)
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => write!(f, "{}", s),
            Self::Long(l) => write!(f, "{}", l),
            Self::Integer(i) => write!(f, "{}", i),
            Self::Double(d) => write!(f, "{}", d),
            Self::Boolean(b) => write!(f, "{}", b),
            Self::List(items) => write!(f, "{}", Self::join(items, ",")),
            // Plain JSON strings are bound without JSON quoting
            Self::Object(serde_json::Value::String(s)) => write!(f, "{}", s),
            Self::Object(other) => write!(f, "{}", other),
        }
    }
}

impl From<&str> for Literal {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Literal {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for Literal {
    fn from(value: i64) -> Self {
        Self::Long(value)
    }
}

impl From<i32> for Literal {
    fn from(value: i32) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for Literal {
    fn from(value: f64) -> Self {
        Self::Double(value)
    }
}

impl From<bool> for Literal {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}
