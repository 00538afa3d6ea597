//! ClickHouse binding tests
//!
//! Binds decorated parameter collections and checks the rendered literals.

use chrono::NaiveDate;
use fmrk4sql_dialect::{Bindable, ChParams, ConverterRegistry, DialectOptions, converters};
use fmrk4sql_params::{CaseFormat, CaseParams, Order, PageParams, PageRequest, Param, QueryParams};
use fmrk4sql_types::{Literal, Value, ValueKind};
use indexmap::IndexMap;
use insta::assert_snapshot;
use pretty_assertions::assert_eq;
use rstest::rstest;

fn render(map: &IndexMap<String, Literal>) -> String {
    map.iter()
        .map(|(name, literal)| format!("{}={}", name, literal))
        .collect::<Vec<_>>()
        .join(" ")
}

fn new_year() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
}

// === Literals ===

#[test]
fn test_date_param() {
    let params = QueryParams::new(vec![Param::new("date", new_year()).unwrap()]);
    let map = ChParams::new(params).map().unwrap();
    assert_eq!(map["date"], Literal::text("'2024-01-01'"));
}

#[rstest]
#[case(vec!["val1", "val2"], "'val1','val2'")]
#[case(vec!["only"], "'only'")]
#[case(vec![], "")]
fn test_list_as_string(#[case] items: Vec<&str>, #[case] expected: &str) {
    let params = QueryParams::new(vec![Param::new("items", Value::list(items)).unwrap()]);
    let map = ChParams::new(params).map().unwrap();
    assert_eq!(map["items"], Literal::text(expected));
}

#[test]
fn test_mixed_params_render() {
    let params = QueryParams::new(vec![
        Param::new("table", serde_json::json!("fmrk_table")).unwrap(),
        Param::new("name", "value").unwrap(),
        Param::new("date", new_year()).unwrap(),
        Param::new("at", new_year().and_hms_opt(9, 30, 0).unwrap()).unwrap(),
        Param::new("limit", 100).unwrap(),
        Param::new("ratio", 0.25).unwrap(),
        Param::new("active", true).unwrap(),
        Param::new("ids", Value::list([1i64, 2, 3])).unwrap(),
    ]);
    let map = ChParams::new(params).map().unwrap();
    assert_snapshot!(
        render(&map),
        @"table=fmrk_table name='value' date='2024-01-01' at='2024-01-01T09:30:00' limit=100 ratio=0.25 active=true ids=1,2,3"
    );
}

// === Decorated collections ===

#[test]
fn test_bind_case_and_page_decorated_params() {
    let params = QueryParams::new(vec![
        Param::new("tableName", "events").unwrap(),
        Param::new("fromDate", new_year()).unwrap(),
    ]);
    let cased = CaseParams::new(params, CaseFormat::LowerCamel, CaseFormat::LowerUnderscore);
    let paged = PageParams::new(cased, PageRequest::of(2, 25, vec![]).unwrap()).unwrap();

    let map = ChParams::new(paged).map().unwrap();
    assert_snapshot!(
        render(&map),
        @"table_name='events' from_date='2024-01-01' page=50 size=25 orders="
    );
}

#[test]
fn test_bind_orders() {
    let paged = PageParams::new(
        QueryParams::empty(),
        PageRequest::of(0, 10, vec![Order::asc("name"), Order::desc("id")]).unwrap(),
    )
    .unwrap();
    let bound = ChParams::new(paged).with(ValueKind::List, converters::list_as_list());

    let map = bound.map().unwrap();
    let orders = map["orders"].as_list().unwrap();
    assert_eq!(orders.len(), 2);
    assert_eq!(
        orders[0],
        Literal::Object(serde_json::json!({"column": "name", "direction": "ASC"}))
    );
}

// === Options ===

#[test]
fn test_custom_options() {
    let options = DialectOptions::from_json(
        r#"{"date_format": "%Y%m%d", "list_separator": ";", "escape_quotes": true}"#,
    )
    .unwrap();
    let params = QueryParams::new(vec![
        Param::new("day", new_year()).unwrap(),
        Param::new("names", Value::list(["o'hara", "smith"])).unwrap(),
    ]);

    let map = ChParams::with_options(params, options).map().unwrap();
    assert_snapshot!(render(&map), @r"day='20240101' names='o\'hara';'smith'");
}

#[test]
fn test_registry_is_shared_by_list_elements() {
    let registry = ConverterRegistry::clickhouse().with_fn(ValueKind::Date, |_, _| {
        Ok(Literal::text("today()"))
    });
    let params = QueryParams::new(vec![
        Param::new("days", Value::list([new_year(), new_year()])).unwrap(),
    ]);

    let map = ChParams::with_registry(params, registry).map().unwrap();
    assert_eq!(map["days"], Literal::text("today(),today()"));
}
