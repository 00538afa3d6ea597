//! Dialect rendering options

use chrono::format::{Item, StrftimeItems};
use fmrk4sql_diagnostics::{ParamError, ParamResult};
use fmrk4sql_types::{DATE_FORMAT, DATETIME_FORMAT};
use serde::{Deserialize, Serialize};

/// Literal rendering rules shared by the built-in converters
///
/// Every field is optional when read from JSON; missing ones take the
/// ClickHouse defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DialectOptions {
    /// Quote placed around text literals
    pub quote: String,
    /// Separator between elements of a list rendered as a string
    pub list_separator: String,
    /// strftime pattern for dates
    pub date_format: String,
    /// strftime pattern for date-times and instants
    pub datetime_format: String,
    /// Literal bound for the null sentinel when `null_literal` is registered
    pub null_literal: String,
    /// Escape backslashes and quotes inside text literals
    pub escape_quotes: bool,
}

impl Default for DialectOptions {
    fn default() -> Self {
        Self {
            quote: "'".to_string(),
            list_separator: ",".to_string(),
            date_format: DATE_FORMAT.to_string(),
            datetime_format: DATETIME_FORMAT.to_string(),
            null_literal: "'null'".to_string(),
            escape_quotes: false,
        }
    }
}

impl DialectOptions {
    /// Read options from a JSON document
    pub fn from_json(json: &str) -> ParamResult<Self> {
        let options: Self =
            serde_json::from_str(json).map_err(|e| ParamError::invalid_options(e.to_string()))?;
        options.validate()?;
        Ok(options)
    }

    /// Check that both temporal patterns are valid strftime patterns
    pub fn validate(&self) -> ParamResult<()> {
        for (field, pattern) in [
            ("date_format", &self.date_format),
            ("datetime_format", &self.datetime_format),
        ] {
            if StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error)) {
                return Err(ParamError::invalid_options(format!(
                    "{} is not a valid strftime pattern: {:?}",
                    field, pattern
                )));
            }
        }
        Ok(())
    }

    /// Wrap `text` in the configured quote, escaping it when enabled
    pub fn quote(&self, text: &str) -> String {
        if self.escape_quotes && !self.quote.is_empty() {
            let escaped = text
                .replace('\\', "\\\\")
                .replace(self.quote.as_str(), &format!("\\{}", self.quote));
            format!("{}{}{}", self.quote, escaped, self.quote)
        } else {
            format!("{}{}{}", self.quote, text, self.quote)
        }
    }
}
