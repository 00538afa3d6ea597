//! End-to-end scenarios
//!
//! Each test builds parameters the way a query template caller does and checks
//! what the renderer or the binder sees.

use chrono::NaiveDate;
use fmrk4sql::diagnostics::PAGEABLE_UNDEFINED;
use fmrk4sql::dialect::converters;
use fmrk4sql::{
    Bindable, CaseFormat, CaseParams, ChParams, ConverterRegistry, Literal, Order, PageParams,
    PageRequest, Param, ParamError, Params, QueryParams, Unpaged, Value, ValueKind,
};
use insta::assert_snapshot;
use pretty_assertions::assert_eq;

/// `name=value` pairs of a collection in list order
fn render(params: &impl Params) -> String {
    params
        .list()
        .unwrap()
        .iter()
        .map(|p| format!("{}={}", p.name(), p.value()))
        .collect::<Vec<_>>()
        .join(" ")
}

fn new_year() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
}

#[test]
fn test_case_decorated_lookup() {
    let params = CaseParams::new(
        QueryParams::new(vec![Param::new("fooBar", "value").unwrap()]),
        CaseFormat::LowerCamel,
        CaseFormat::LowerUnderscore,
    );
    assert_eq!(params.get("foo_bar").unwrap(), Some(Value::from("value")));
}

#[test]
fn test_paging_over_empty_params() {
    let params = PageParams::new(QueryParams::empty(), PageRequest::new(0, 10, vec![])).unwrap();
    let map = params.map().unwrap();

    assert_eq!(map.len(), 3);
    assert_eq!(map["page"], Value::Long(0));
    assert_eq!(map["size"], Value::Integer(10));
    assert_eq!(map["orders"], Value::List(vec![]));
}

#[test]
fn test_bind_date() {
    let params = QueryParams::new(vec![Param::new("date", new_year()).unwrap()]);
    let map = ChParams::new(params).map().unwrap();

    assert_eq!(map.len(), 1);
    assert_eq!(map["date"], Literal::text("'2024-01-01'"));
}

#[test]
fn test_list_as_string() {
    let registry = ConverterRegistry::clickhouse();
    assert_eq!(
        registry.convert(&Value::list(["val1", "val2"])).unwrap(),
        Literal::text("'val1','val2'")
    );
}

#[test]
fn test_empty_list_as_string() {
    let registry = ConverterRegistry::clickhouse();
    assert_eq!(
        registry.convert(&Value::List(vec![])).unwrap(),
        Literal::text("")
    );
}

#[test]
fn test_unpaged_source() {
    let err = PageParams::new(QueryParams::empty(), Unpaged).unwrap_err();
    assert_eq!(err, ParamError::pageable_undefined());
    assert_eq!(
        err.to_string(),
        format!("FMK0200: {}", PAGEABLE_UNDEFINED)
    );
}

#[test]
fn test_renderer_view_of_stacked_decorators() {
    let base = QueryParams::new(vec![
        Param::new("tableName", "events").unwrap(),
        Param::new("fromDate", new_year()).unwrap(),
    ]);
    let params = PageParams::new(
        CaseParams::new(base, CaseFormat::LowerCamel, CaseFormat::LowerUnderscore),
        PageRequest::of(1, 20, vec![Order::asc("test_col")]).unwrap(),
    )
    .unwrap();

    assert_snapshot!(
        render(&params),
        @r#"table_name=events from_date=2024-01-01 page=20 size=20 orders=[{"column":"test_col","direction":"ASC"}]"#
    );
}

#[test]
fn test_binder_view_with_overrides() {
    let params = QueryParams::new(vec![
        Param::new("ids", Value::list([10i64, 20])).unwrap(),
        Param::new("deletedAt", Value::null()).unwrap(),
    ]);
    let bound = ChParams::new(params)
        .with(ValueKind::List, converters::list_as_list())
        .with(
            ValueKind::Null,
            converters::null_literal(std::sync::Arc::new(Default::default())),
        );

    let map = bound.map().unwrap();
    assert_eq!(
        map["ids"],
        Literal::List(vec![Literal::Long(10), Literal::Long(20)])
    );
    assert_eq!(map["deletedAt"], Literal::text("'null'"));
}
