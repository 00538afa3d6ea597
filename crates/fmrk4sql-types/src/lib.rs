//! fmrk4sql value types
//!
//! This crate defines the closed set of parameter value kinds:
//! - [`Value`]: a typed value (String, Long, Integer, Double, Boolean, Date,
//!   DateTime, Timestamp, SqlDate, List, Object), an absent value of a given
//!   kind, or the null sentinel
//! - [`ValueKind`]: the variant tag used by dialect registries for dispatch
//! - [`Raw`]: a borrowed view of the undecorated value
//! - [`Literal`]: the converted, dialect-ready representation

mod kind;
mod literal;
mod temporal;
mod value;

pub use kind::{Typed, ValueKind};
pub use literal::Literal;
pub use temporal::{DATE_FORMAT, DATETIME_FORMAT, local_datetime};
pub use value::{Raw, Value};
