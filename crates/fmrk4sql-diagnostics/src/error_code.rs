//! fmrk4sql error codes following a structured numbering system
//!
//! Error code ranges:
//! - FMK0001-FMK0099: Parameter construction errors
//! - FMK0100-FMK0199: Value access errors
//! - FMK0200-FMK0299: Pagination errors
//! - FMK0300-FMK0399: Dialect conversion errors
//! - FMK0400-FMK0499: Configuration errors

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

/// Error code identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ErrorCode(u16);

impl ErrorCode {
    /// Create a new error code
    pub const fn new(code: u16) -> Self {
        Self(code)
    }

    /// Get the numeric code
    pub const fn code(&self) -> u16 {
        self.0
    }

    /// Get error information for this code
    pub fn info(&self) -> &'static ErrorInfo {
        ERROR_INFO.get(&self.0).unwrap_or(&UNKNOWN_ERROR)
    }

    /// Check if this is a parameter construction error (0001-0099)
    pub const fn is_param_error(&self) -> bool {
        self.0 >= 1 && self.0 < 100
    }

    /// Check if this is a value access error (0100-0199)
    pub const fn is_value_error(&self) -> bool {
        self.0 >= 100 && self.0 < 200
    }

    /// Check if this is a pagination error (0200-0299)
    pub const fn is_pagination_error(&self) -> bool {
        self.0 >= 200 && self.0 < 300
    }

    /// Check if this is a dialect conversion error (0300-0399)
    pub const fn is_dialect_error(&self) -> bool {
        self.0 >= 300 && self.0 < 400
    }

    /// Check if this is a configuration error (0400-0499)
    pub const fn is_config_error(&self) -> bool {
        self.0 >= 400 && self.0 < 500
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FMK{:04}", self.0)
    }
}

/// Information about an error code
#[derive(Debug, Clone)]
pub struct ErrorInfo {
    /// Short description of the error
    pub description: &'static str,
    /// Detailed help text
    pub help: Option<&'static str>,
}

impl ErrorInfo {
    const fn new(description: &'static str) -> Self {
        Self {
            description,
            help: None,
        }
    }

    const fn with_help(mut self, help: &'static str) -> Self {
        self.help = Some(help);
        self
    }
}

static UNKNOWN_ERROR: ErrorInfo = ErrorInfo::new("Unknown error");

static ERROR_INFO: LazyLock<HashMap<u16, ErrorInfo>> = LazyLock::new(|| {
    let mut map = HashMap::new();

    // Parameter construction errors (0001-0099)
    map.insert(1, ErrorInfo::new("Invalid parameter name")
        .with_help("Parameter names must contain at least one non-whitespace character"));

    // Value access errors (0100-0199)
    map.insert(100, ErrorInfo::new("Null value"));
    map.insert(101, ErrorInfo::new("Unsupported null sentinel")
        .with_help("Register a null literal converter to bind the null sentinel"));

    // Pagination errors (0200-0299)
    map.insert(200, ErrorInfo::new("Pageable undefined"));
    map.insert(201, ErrorInfo::new("Page offset overflow")
        .with_help("Lower the page index or the page size"));

    // Dialect conversion errors (0300-0399)
    map.insert(300, ErrorInfo::new("Unregistered converter")
        .with_help("Add a converter for the value kind with `with`"));

    // Configuration errors (0400-0499)
    map.insert(400, ErrorInfo::new("Invalid dialect options"));

    map
});

// Parameter construction errors
pub const FMK0001: ErrorCode = ErrorCode::new(1);

// Value access errors
pub const FMK0100: ErrorCode = ErrorCode::new(100);
pub const FMK0101: ErrorCode = ErrorCode::new(101);

// Pagination errors
pub const FMK0200: ErrorCode = ErrorCode::new(200);
pub const FMK0201: ErrorCode = ErrorCode::new(201);

// Dialect conversion errors
pub const FMK0300: ErrorCode = ErrorCode::new(300);

// Configuration errors
pub const FMK0400: ErrorCode = ErrorCode::new(400);
