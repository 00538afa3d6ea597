//! Built-in converters
//!
//! Each function builds a [`Converter`] closing over the options it renders
//! with. A converter handed a value of another kind than the one it was built
//! for falls back to the default literal of that value.

use fmrk4sql_diagnostics::{ParamError, ParamResult};
use fmrk4sql_types::{Literal, Raw, Value, local_datetime};
use std::fmt::{Display, Write};
use std::sync::Arc;

use crate::{Converter, ConverterRegistry, DialectOptions};

/// Default literal of the value: numbers and booleans pass through unchanged
pub fn passthrough() -> Converter {
    Arc::new(|value: &Value, _: &ConverterRegistry| value.convert())
}

/// Quoted text
pub fn string(options: Arc<DialectOptions>) -> Converter {
    Arc::new(move |value: &Value, _: &ConverterRegistry| match value.raw()? {
        Raw::String(s) => Ok(Literal::Text(options.quote(s))),
        _ => value.convert(),
    })
}

/// Quoted date in `date_format`
pub fn date(options: Arc<DialectOptions>) -> Converter {
    Arc::new(move |value: &Value, _: &ConverterRegistry| match value.raw()? {
        Raw::Date(d) => quoted(&options, d.format(&options.date_format)),
        _ => value.convert(),
    })
}

/// Quoted date-time in `datetime_format`
///
/// Instants are rendered as wall-clock time in the system time zone.
pub fn datetime(options: Arc<DialectOptions>) -> Converter {
    Arc::new(move |value: &Value, _: &ConverterRegistry| match value.raw()? {
        Raw::DateTime(dt) => quoted(&options, dt.format(&options.datetime_format)),
        Raw::Timestamp(ts) | Raw::SqlDate(ts) => {
            quoted(&options, local_datetime(&ts).format(&options.datetime_format))
        }
        _ => value.convert(),
    })
}

/// Native list of elements converted through the calling registry
pub fn list_as_list() -> Converter {
    Arc::new(|value: &Value, registry: &ConverterRegistry| match value.raw()? {
        Raw::List(items) => Ok(Literal::List(
            items
                .iter()
                .map(|item| registry.convert(item))
                .collect::<ParamResult<Vec<_>>>()?,
        )),
        _ => value.convert(),
    })
}

/// Single text literal joining the converted elements with `list_separator`
///
/// An empty list yields an empty text.
pub fn list_as_string(options: Arc<DialectOptions>) -> Converter {
    Arc::new(move |value: &Value, registry: &ConverterRegistry| match value.raw()? {
        Raw::List(items) => {
            let converted = items
                .iter()
                .map(|item| registry.convert(item))
                .collect::<ParamResult<Vec<_>>>()?;
            Ok(Literal::Text(Literal::join(&converted, &options.list_separator)))
        }
        _ => value.convert(),
    })
}

/// Caller-controlled value passed through unchanged
pub fn object() -> Converter {
    Arc::new(|value: &Value, _: &ConverterRegistry| match value.raw()? {
        Raw::Object(obj) => Ok(Literal::Object(obj.clone())),
        _ => value.convert(),
    })
}

/// `null_literal` for every value, the null sentinel included
pub fn null_literal(options: Arc<DialectOptions>) -> Converter {
    Arc::new(move |_: &Value, _: &ConverterRegistry| {
        Ok(Literal::text(options.null_literal.as_str()))
    })
}

fn quoted(options: &DialectOptions, formatted: impl Display) -> ParamResult<Literal> {
    Ok(Literal::Text(options.quote(&render(formatted)?)))
}

// DelayedFormat reports bad patterns as fmt errors; to_string() would panic
fn render(formatted: impl Display) -> ParamResult<String> {
    let mut out = String::new();
    write!(out, "{}", formatted)
        .map_err(|_| ParamError::invalid_options("temporal pattern cannot be rendered"))?;
    Ok(out)
}
