//! Pagination sources

use fmrk4sql_diagnostics::{ParamError, ParamResult};
use fmrk4sql_types::Value;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::fmt;

/// Sort direction of an order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Direction {
    Asc,
    Desc,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Asc => write!(f, "ASC"),
            Direction::Desc => write!(f, "DESC"),
        }
    }
}

/// Sort order on a single column
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Order {
    pub column: String,
    pub direction: Direction,
}

impl Order {
    pub fn new(column: impl Into<String>, direction: Direction) -> Self {
        Self {
            column: column.into(),
            direction,
        }
    }

    /// Ascending order on `column`
    pub fn asc(column: impl Into<String>) -> Self {
        Self::new(column, Direction::Asc)
    }

    /// Descending order on `column`
    pub fn desc(column: impl Into<String>) -> Self {
        Self::new(column, Direction::Desc)
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.column, self.direction)
    }
}

/// Orders travel as object values so templates can read both fields
impl From<Order> for Value {
    fn from(order: Order) -> Self {
        Value::Object(json!({
            "column": order.column,
            "direction": order.direction.to_string(),
        }))
    }
}

/// Source of paging information
///
/// `page` is the offset of the first element, not a page index. Sources with
/// no paging defined fail `page` and `size` with `PageableUndefined`.
pub trait Pageable {
    /// Offset of the first element
    fn page(&self) -> ParamResult<i64>;

    /// Number of elements per page
    fn size(&self) -> ParamResult<i32>;

    /// Orders to apply, possibly empty
    fn orders(&self) -> Vec<Order>;
}

/// Fixed paging request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    offset: i64,
    size: i32,
    orders: Vec<Order>,
}

impl PageRequest {
    /// Request starting at element `offset`
    pub fn new(offset: i64, size: i32, orders: Vec<Order>) -> Self {
        Self {
            offset,
            size,
            orders,
        }
    }

    /// Request for the zero-based page `index` of `size` elements
    ///
    /// Fails with `PageOverflow` when the element offset does not fit an `i64`.
    pub fn of(index: i64, size: i32, orders: Vec<Order>) -> ParamResult<Self> {
        let offset = index
            .checked_mul(i64::from(size))
            .ok_or_else(|| ParamError::page_overflow(index, size))?;
        Ok(Self::new(offset, size, orders))
    }

    /// Request of `size` elements from the start
    pub fn of_size(size: i32) -> Self {
        Self::new(0, size, Vec::new())
    }
}

impl Pageable for PageRequest {
    fn page(&self) -> ParamResult<i64> {
        Ok(self.offset)
    }

    fn size(&self) -> ParamResult<i32> {
        Ok(self.size)
    }

    fn orders(&self) -> Vec<Order> {
        self.orders.clone()
    }
}

/// Source with no paging defined
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Unpaged;

impl Pageable for Unpaged {
    fn page(&self) -> ParamResult<i64> {
        Err(ParamError::pageable_undefined())
    }

    fn size(&self) -> ParamResult<i32> {
        Err(ParamError::pageable_undefined())
    }

    fn orders(&self) -> Vec<Order> {
        Vec::new()
    }
}

impl<T: Pageable + ?Sized> Pageable for &T {
    fn page(&self) -> ParamResult<i64> {
        (**self).page()
    }

    fn size(&self) -> ParamResult<i32> {
        (**self).size()
    }

    fn orders(&self) -> Vec<Order> {
        (**self).orders()
    }
}
