//! fmrk4sql error types

use crate::{ErrorCode, FMK0001, FMK0100, FMK0101, FMK0200, FMK0201, FMK0300, FMK0400};
use thiserror::Error;

/// Message reported by pageable sources that carry no paging information
pub const PAGEABLE_UNDEFINED: &str = "Pageable is not defined in pageable argument";

/// Errors raised while building, decorating or binding query parameters
///
/// All of them are local and synchronous: nothing is retried, and a lookup
/// miss is never an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParamError {
    /// Null or blank parameter name
    #[error("{code}: Name cannot be null or empty: {name:?}", code = FMK0001)]
    InvalidName { name: String },

    /// Access to an absent value of a kind that requires one
    #[error("{code}: Value of kind {kind} cannot be null", code = FMK0100)]
    NullValue { kind: String },

    /// Access to the null sentinel
    #[error("{code}: Null sentinel is not supported", code = FMK0101)]
    UnsupportedSentinel,

    /// Paging accessed on a source with no paging defined
    #[error("{code}: {message}", code = FMK0200)]
    PageableUndefined { message: String },

    /// Page index times page size does not fit an element offset
    #[error("{code}: Offset of page {index} with size {size} overflows", code = FMK0201)]
    PageOverflow { index: i64, size: i32 },

    /// Dialect registry has no converter for a value kind
    #[error("{code}: No converter registered for value kind {kind}", code = FMK0300)]
    UnregisteredConverter { kind: String },

    /// Dialect options could not be read
    #[error("{code}: Invalid dialect options: {message}", code = FMK0400)]
    InvalidOptions { message: String },
}

impl ParamError {
    /// Create an invalid name error
    pub fn invalid_name(name: impl Into<String>) -> Self {
        Self::InvalidName { name: name.into() }
    }

    /// Create a null value error for the given kind
    pub fn null_value(kind: impl ToString) -> Self {
        Self::NullValue {
            kind: kind.to_string(),
        }
    }

    /// Create a pageable undefined error with the default message
    pub fn pageable_undefined() -> Self {
        Self::PageableUndefined {
            message: PAGEABLE_UNDEFINED.to_string(),
        }
    }

    /// Create a page overflow error
    pub fn page_overflow(index: i64, size: i32) -> Self {
        Self::PageOverflow { index, size }
    }

    /// Create an unregistered converter error for the given kind
    pub fn unregistered_converter(kind: impl ToString) -> Self {
        Self::UnregisteredConverter {
            kind: kind.to_string(),
        }
    }

    /// Create an invalid options error
    pub fn invalid_options(message: impl Into<String>) -> Self {
        Self::InvalidOptions {
            message: message.into(),
        }
    }

    /// Get the error code
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::InvalidName { .. } => FMK0001,
            Self::NullValue { .. } => FMK0100,
            Self::UnsupportedSentinel => FMK0101,
            Self::PageableUndefined { .. } => FMK0200,
            Self::PageOverflow { .. } => FMK0201,
            Self::UnregisteredConverter { .. } => FMK0300,
            Self::InvalidOptions { .. } => FMK0400,
        }
    }

    /// Help text registered for this error's code, if any
    pub fn help(&self) -> Option<&'static str> {
        self.code().info().help
    }
}
