//! Pagination decorator

use fmrk4sql_diagnostics::ParamResult;
use fmrk4sql_types::Value;
use log::debug;

use crate::{Pageable, Param, Params};

/// Name of the synthetic offset parameter
pub const PAGE_PARAM: &str = "page";

/// Name of the synthetic page size parameter
pub const SIZE_PARAM: &str = "size";

/// Name of the synthetic order list parameter
pub const ORDERS_PARAM: &str = "orders";

/// Appends `page`, `size` and `orders` to the parameters of `origin`
///
/// The three synthetic parameters are read from the pageable once, at
/// construction, so the decorator holds no mutable state and repeated
/// listings are identical.
#[derive(Debug, Clone)]
pub struct PageParams<P> {
    origin: P,
    paging: Vec<Param>,
}

impl<P: Params> PageParams<P> {
    /// Wrap `origin`, failing with `PageableUndefined` when the pageable has
    /// no paging defined
    pub fn new(origin: P, pageable: impl Pageable) -> ParamResult<Self> {
        let page = pageable.page()?;
        let size = pageable.size()?;
        let orders = pageable.orders();
        debug!(
            "Paging parameters: page={}, size={}, orders={}",
            page,
            size,
            orders.len()
        );
        let paging = vec![
            Param::new(PAGE_PARAM, page)?,
            Param::new(SIZE_PARAM, size)?,
            Param::new(ORDERS_PARAM, Value::list(orders))?,
        ];
        Ok(Self { origin, paging })
    }

    /// The wrapped collection
    pub fn origin(&self) -> &P {
        &self.origin
    }

    /// The synthetic `page`, `size` and `orders` parameters
    pub fn paging(&self) -> &[Param] {
        &self.paging
    }
}

impl<P: Params> Params for PageParams<P> {
    fn list(&self) -> ParamResult<Vec<Param>> {
        let mut result = self.origin.list()?;
        result.extend(self.paging.iter().cloned());
        Ok(result)
    }

    fn with(&self, param: Param) -> Self {
        Self {
            origin: self.origin.with(param),
            paging: self.paging.clone(),
        }
    }

    fn is_empty(&self) -> ParamResult<bool> {
        Ok(false)
    }
}
