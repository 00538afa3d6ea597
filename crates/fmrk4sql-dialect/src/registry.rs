//! Converter registry keyed by value kind
//!
//! A registry maps every [`ValueKind`] it supports to a [`Converter`]. Kinds
//! are a closed set, so dispatch is a plain table lookup; extending a dialect
//! or overriding one of its rules means registering another converter.

use fmrk4sql_diagnostics::{ParamError, ParamResult};
use fmrk4sql_types::{Literal, Value, ValueKind};
use log::{debug, trace};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::DialectOptions;
use crate::converters;

/// Type alias for converter implementations
///
/// Converters receive the registry they are called from so that composite
/// values can convert their elements with the same rules.
pub type Converter = Arc<dyn Fn(&Value, &ConverterRegistry) -> ParamResult<Literal> + Send + Sync>;

/// Immutable table of converters per value kind
#[derive(Clone, Default)]
pub struct ConverterRegistry {
    converters: HashMap<ValueKind, Converter>,
}

impl ConverterRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// ClickHouse registry with default options
    pub fn clickhouse() -> Self {
        Self::clickhouse_with(DialectOptions::default())
    }

    /// ClickHouse registry rendering with `options`
    pub fn clickhouse_with(options: DialectOptions) -> Self {
        let options = Arc::new(options);
        let mut table = HashMap::new();

        // === Scalars ===
        table.insert(ValueKind::String, converters::string(Arc::clone(&options)));
        table.insert(ValueKind::Long, converters::passthrough());
        table.insert(ValueKind::Integer, converters::passthrough());
        table.insert(ValueKind::Double, converters::passthrough());
        table.insert(ValueKind::Boolean, converters::passthrough());

        // === Temporal ===
        table.insert(ValueKind::Date, converters::date(Arc::clone(&options)));
        let datetime = converters::datetime(Arc::clone(&options));
        table.insert(ValueKind::DateTime, Arc::clone(&datetime));
        table.insert(ValueKind::Timestamp, Arc::clone(&datetime));
        table.insert(ValueKind::SqlDate, datetime);

        // === Composite ===
        table.insert(ValueKind::List, converters::list_as_string(options));
        table.insert(ValueKind::Object, converters::object());

        // The sentinel keeps failing until a null literal is registered
        table.insert(ValueKind::Null, converters::passthrough());

        Self { converters: table }
    }

    /// New registry with `converter` registered for `kind`
    ///
    /// An existing converter for the same kind is replaced in the copy; the
    /// receiver is left untouched.
    pub fn with(&self, kind: ValueKind, converter: Converter) -> Self {
        if self.converters.contains_key(&kind) {
            debug!("Overriding converter for {}", kind);
        } else {
            debug!("Registering converter for {}", kind);
        }
        let mut converters = self.converters.clone();
        converters.insert(kind, converter);
        Self { converters }
    }

    /// New registry with a closure registered for `kind`
    pub fn with_fn<F>(&self, kind: ValueKind, converter: F) -> Self
    where
        F: Fn(&Value, &ConverterRegistry) -> ParamResult<Literal> + Send + Sync + 'static,
    {
        self.with(kind, Arc::new(converter))
    }

    /// Get the converter registered for `kind`
    pub fn get(&self, kind: ValueKind) -> Option<&Converter> {
        self.converters.get(&kind)
    }

    /// Check whether a converter is registered for `kind`
    pub fn contains(&self, kind: ValueKind) -> bool {
        self.converters.contains_key(&kind)
    }

    /// Registered kinds in declaration order
    pub fn kinds(&self) -> Vec<ValueKind> {
        let mut kinds: Vec<_> = self.converters.keys().copied().collect();
        kinds.sort();
        kinds
    }

    /// Convert `value` with the converter registered for its kind
    pub fn convert(&self, value: &Value) -> ParamResult<Literal> {
        let kind = value.kind();
        let converter = self
            .get(kind)
            .ok_or_else(|| ParamError::unregistered_converter(kind))?;
        let literal = converter(value, self)?;
        trace!("Converted {} value to {}", kind, literal);
        Ok(literal)
    }
}

impl fmt::Debug for ConverterRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConverterRegistry")
            .field("kinds", &self.kinds())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    #[test]
    fn test_clickhouse_covers_every_kind() {
        let registry = ConverterRegistry::clickhouse();
        assert_eq!(registry.kinds(), ValueKind::ALL.to_vec());
    }

    #[rstest]
    #[case(Value::from("value"), Literal::text("'value'"))]
    #[case(Value::from(13i64), Literal::Long(13))]
    #[case(Value::from(7), Literal::Integer(7))]
    #[case(Value::from(0.5), Literal::Double(0.5))]
    #[case(Value::from(false), Literal::Boolean(false))]
    #[case(Value::from(date()), Literal::text("'2024-01-01'"))]
    #[case(
        Value::from(date().and_hms_opt(23, 5, 0).unwrap()),
        Literal::text("'2024-01-01T23:05:00'")
    )]
    #[case(Value::list(["val1", "val2"]), Literal::text("'val1','val2'"))]
    #[case(Value::List(vec![]), Literal::text(""))]
    fn test_clickhouse_convert(#[case] value: Value, #[case] expected: Literal) {
        assert_eq!(ConverterRegistry::clickhouse().convert(&value).unwrap(), expected);
    }

    #[test]
    fn test_empty_registry_fails() {
        let err = ConverterRegistry::new().convert(&Value::from(date())).unwrap_err();
        assert_eq!(err, ParamError::unregistered_converter(ValueKind::Date));
    }

    #[test]
    fn test_with_does_not_mutate_receiver() {
        let base = ConverterRegistry::new();
        let extended = base.with_fn(ValueKind::String, |value, _| {
            Ok(Literal::text(value.as_str().unwrap_or_default().to_uppercase()))
        });

        assert!(!base.contains(ValueKind::String));
        assert_eq!(
            extended.convert(&Value::from("abc")).unwrap(),
            Literal::text("ABC")
        );
    }

    #[test]
    fn test_with_overrides_existing_converter() {
        let registry = ConverterRegistry::clickhouse().with(ValueKind::List, converters::list_as_list());
        assert_eq!(
            registry.convert(&Value::list(["a", "b"])).unwrap(),
            Literal::List(vec![Literal::text("'a'"), Literal::text("'b'")])
        );
        assert_eq!(
            ConverterRegistry::clickhouse().convert(&Value::list(["a", "b"])).unwrap(),
            Literal::text("'a','b'")
        );
    }

    #[test]
    fn test_null_sentinel_needs_explicit_converter() {
        let registry = ConverterRegistry::clickhouse();
        assert_eq!(
            registry.convert(&Value::null()).unwrap_err(),
            ParamError::UnsupportedSentinel
        );

        let registry = registry.with(
            ValueKind::Null,
            converters::null_literal(Arc::new(DialectOptions::default())),
        );
        assert_eq!(registry.convert(&Value::null()).unwrap(), Literal::text("'null'"));
    }

    #[test]
    fn test_debug_lists_kinds() {
        let registry = ConverterRegistry::new().with(ValueKind::Long, converters::passthrough());
        assert_eq!(
            format!("{:?}", registry),
            "ConverterRegistry { kinds: [Long] }"
        );
    }
}
