//! Named query parameters
//!
//! A [`Params`] is an ordered, immutable collection of [`Param`] used as the
//! lookup context of a query template. Implementations compose by wrapping:
//!
//! - [`QueryParams`]: the base collection built by the caller
//! - [`CaseParams`]: exposes every name translated between two [`CaseFormat`]s
//! - [`PageParams`]: appends `page`, `size` and `orders` taken from a [`Pageable`]
//!
//! Every transformation returns a new collection and leaves the receiver
//! untouched.
//!
//! # Example
//!
//! ```
//! use fmrk4sql_params::{CaseFormat, CaseParams, Param, Params, QueryParams};
//!
//! let params = QueryParams::new(vec![Param::new("fooBar", "value").unwrap()]);
//! let params = CaseParams::new(params, CaseFormat::LowerCamel, CaseFormat::LowerUnderscore);
//!
//! assert_eq!(params.get("foo_bar").unwrap().unwrap().as_str(), Some("value"));
//! ```

mod case;
mod case_params;
mod page_params;
mod pageable;
mod param;
mod params;

pub use case::CaseFormat;
pub use case_params::CaseParams;
pub use page_params::{ORDERS_PARAM, PAGE_PARAM, PageParams, SIZE_PARAM};
pub use pageable::{Direction, Order, PageRequest, Pageable, Unpaged};
pub use param::Param;
pub use params::{Params, QueryParams};
