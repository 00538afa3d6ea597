//! Binding parameters as dialect literals

use fmrk4sql_diagnostics::ParamResult;
use fmrk4sql_params::Params;
use fmrk4sql_types::{Literal, ValueKind};
use indexmap::IndexMap;
use log::debug;
use std::sync::Arc;

use crate::{Converter, ConverterRegistry, DialectOptions};

/// Parameters that can be bound as literals of a query engine
pub trait Bindable {
    /// Name to literal mapping; later duplicates overwrite earlier ones
    fn map(&self) -> ParamResult<IndexMap<String, Literal>>;

    /// Copy with `converter` registered for `kind`
    fn with(&self, kind: ValueKind, converter: Converter) -> Self
    where
        Self: Sized;
}

/// ClickHouse binding of a parameter collection
///
/// The collection is shared between copies made by [`Bindable::with`], so it
/// never needs to be `Clone` itself.
#[derive(Debug)]
pub struct ChParams<P> {
    params: Arc<P>,
    registry: ConverterRegistry,
}

impl<P> Clone for ChParams<P> {
    fn clone(&self) -> Self {
        Self {
            params: Arc::clone(&self.params),
            registry: self.registry.clone(),
        }
    }
}

impl<P: Params> ChParams<P> {
    /// Bind `params` with the default ClickHouse converters
    pub fn new(params: P) -> Self {
        Self::with_registry(params, ConverterRegistry::clickhouse())
    }

    /// Bind `params` with ClickHouse converters rendering with `options`
    pub fn with_options(params: P, options: DialectOptions) -> Self {
        Self::with_registry(params, ConverterRegistry::clickhouse_with(options))
    }

    /// Bind `params` with an arbitrary registry
    pub fn with_registry(params: P, registry: ConverterRegistry) -> Self {
        Self {
            params: Arc::new(params),
            registry,
        }
    }

    /// The bound collection
    pub fn params(&self) -> &P {
        &self.params
    }

    /// The converters in use
    pub fn registry(&self) -> &ConverterRegistry {
        &self.registry
    }
}

impl<P: Params> Bindable for ChParams<P> {
    fn map(&self) -> ParamResult<IndexMap<String, Literal>> {
        let params = self.params.list()?;
        debug!("Binding {} parameters", params.len());
        let mut result = IndexMap::with_capacity(params.len());
        for param in params {
            let literal = self.registry.convert(param.value())?;
            result.insert(param.name().to_string(), literal);
        }
        Ok(result)
    }

    fn with(&self, kind: ValueKind, converter: Converter) -> Self {
        Self {
            params: Arc::clone(&self.params),
            registry: self.registry.with(kind, converter),
        }
    }
}
