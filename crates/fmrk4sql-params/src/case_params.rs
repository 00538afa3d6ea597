//! Naming decorator

use fmrk4sql_diagnostics::ParamResult;
use log::debug;

use crate::{CaseFormat, Param, Params};

/// Exposes the parameters of `origin` under names translated from `source`
/// to `target` format
///
/// Nothing is cached: every call recomputes from the origin.
#[derive(Debug, Clone)]
pub struct CaseParams<P> {
    origin: P,
    source: CaseFormat,
    target: CaseFormat,
}

impl<P: Params> CaseParams<P> {
    pub fn new(origin: P, source: CaseFormat, target: CaseFormat) -> Self {
        debug!("Translating parameter names from {:?} to {:?}", source, target);
        Self {
            origin,
            source,
            target,
        }
    }

    /// The wrapped collection
    pub fn origin(&self) -> &P {
        &self.origin
    }

    fn translate(&self, name: &str) -> String {
        self.source.to(self.target, name)
    }
}

impl<P: Params> Params for CaseParams<P> {
    /// Origin parameters under translated names
    ///
    /// A name that translates to nothing fails with `InvalidName`, so lookups
    /// through the default `param` and `get` always agree with the listing.
    fn list(&self) -> ParamResult<Vec<Param>> {
        self.origin
            .list()?
            .into_iter()
            .map(|param| Param::new(self.translate(param.name()), param.into_value()))
            .collect()
    }

    fn with(&self, param: Param) -> Self {
        Self {
            origin: self.origin.with(param),
            source: self.source,
            target: self.target,
        }
    }

    fn is_empty(&self) -> ParamResult<bool> {
        self.origin.is_empty()
    }
}
