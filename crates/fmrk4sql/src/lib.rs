//! Typed query parameters for SQL templates
//!
//! This crate bundles the fmrk4sql workspace:
//! - Typed values and their default literals
//! - Named parameter collections with case and paging decorators
//! - Dialect registries binding parameters as literals (ClickHouse built in)
//!
//! # Example
//!
//! ```
//! use fmrk4sql::{Bindable, CaseFormat, CaseParams, ChParams, PageParams, PageRequest};
//! use fmrk4sql::{Param, Params, QueryParams};
//!
//! let params = QueryParams::new(vec![Param::new("tableName", "events").unwrap()]);
//! let params = CaseParams::new(params, CaseFormat::LowerCamel, CaseFormat::LowerUnderscore);
//! let params = PageParams::new(params, PageRequest::of_size(10)).unwrap();
//!
//! assert_eq!(params.get("table_name").unwrap().unwrap().as_str(), Some("events"));
//!
//! let map = ChParams::new(params).map().unwrap();
//! assert_eq!(map["table_name"].to_string(), "'events'");
//! assert_eq!(map["size"].to_string(), "10");
//! ```

// Re-export all public APIs from internal crates
pub use fmrk4sql_diagnostics as diagnostics;
pub use fmrk4sql_dialect as dialect;
pub use fmrk4sql_params as params;
pub use fmrk4sql_types as types;

// Convenience re-exports
pub use fmrk4sql_diagnostics::{ParamError, ParamResult};
pub use fmrk4sql_dialect::{Bindable, ChParams, Converter, ConverterRegistry, DialectOptions};
pub use fmrk4sql_params::{
    CaseFormat, CaseParams, Direction, Order, PageParams, PageRequest, Pageable, Param, Params,
    QueryParams, Unpaged,
};
pub use fmrk4sql_types::{Literal, Value, ValueKind};
