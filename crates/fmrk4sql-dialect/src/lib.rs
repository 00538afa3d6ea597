//! Dialect conversion of fmrk4sql parameters
//!
//! A [`ConverterRegistry`] maps every [`ValueKind`](fmrk4sql_types::ValueKind)
//! to a [`Converter`] producing the literal a query engine expects. A
//! [`Bindable`] such as [`ChParams`] applies a registry to a
//! [`Params`](fmrk4sql_params::Params) collection and yields the name to
//! literal map used for binding.
//!
//! # Example
//!
//! ```
//! use fmrk4sql_dialect::{Bindable, ChParams};
//! use fmrk4sql_params::{Param, QueryParams};
//!
//! let params = QueryParams::new(vec![Param::new("name", "value").unwrap()]);
//! let map = ChParams::new(params).map().unwrap();
//!
//! assert_eq!(map["name"].to_string(), "'value'");
//! ```

mod bindable;
pub mod converters;
mod options;
mod registry;

pub use bindable::{Bindable, ChParams};
pub use options::DialectOptions;
pub use registry::{Converter, ConverterRegistry};
