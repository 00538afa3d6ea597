//! fmrk4sql diagnostics and error handling
//!
//! This crate provides the error infrastructure shared by every fmrk4sql crate:
//! stable error codes and the [`ParamError`] type returned by parameter
//! construction, value access, pagination and dialect conversion.

mod error;
mod error_code;

pub use error::*;
pub use error_code::*;

/// Result type for fmrk4sql operations
pub type ParamResult<T> = std::result::Result<T, ParamError>;
