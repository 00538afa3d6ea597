//! A single named value

use fmrk4sql_diagnostics::{ParamError, ParamResult};
use fmrk4sql_types::Value;
use serde::Serialize;
use std::fmt;

/// An immutable `(name, value)` pair
///
/// The name is validated at construction: after trimming it must not be empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Param {
    name: String,
    value: Value,
}

impl Param {
    /// Create a parameter, rejecting blank names
    pub fn new(name: impl Into<String>, value: impl Into<Value>) -> ParamResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ParamError::invalid_name(name));
        }
        Ok(Self {
            name,
            value: value.into(),
        })
    }

    /// Parameter name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Parameter value
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Consume the parameter and return its value
    pub fn into_value(self) -> Value {
        self.value
    }

    /// Copy of this parameter under another name
    ///
    /// An empty `name` keeps the current one.
    pub fn rename(&self, name: &str) -> ParamResult<Self> {
        if name.is_empty() {
            return Ok(self.clone());
        }
        Self::new(name, self.value.clone())
    }
}

impl fmt::Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.name, self.value)
    }
}
