//! Parameter collections

use fmrk4sql_diagnostics::ParamResult;
use fmrk4sql_types::Value;
use indexmap::IndexMap;
use std::fmt;

use crate::Param;

/// Ordered, immutable collection of parameters
///
/// Lookups match names exactly and the first match wins; duplicate names are
/// legal. [`map`](Params::map) projects the collection into a mapping where a
/// later entry overwrites an earlier one with the same name, so list lookup
/// and map lookup can disagree on duplicates.
pub trait Params: fmt::Debug + Send + Sync {
    /// All parameters in insertion order
    fn list(&self) -> ParamResult<Vec<Param>>;

    /// First parameter named `name`
    fn param(&self, name: &str) -> ParamResult<Option<Param>> {
        Ok(self.list()?.into_iter().find(|p| p.name() == name))
    }

    /// Value of the first parameter named `name`
    fn get(&self, name: &str) -> ParamResult<Option<Value>> {
        Ok(self.param(name)?.map(Param::into_value))
    }

    /// New collection with `param` appended after every existing entry
    fn with(&self, param: Param) -> Self
    where
        Self: Sized;

    /// Name to value mapping; later duplicates overwrite earlier ones
    fn map(&self) -> ParamResult<IndexMap<String, Value>> {
        let mut result = IndexMap::new();
        for param in self.list()? {
            let name = param.name().to_string();
            result.insert(name, param.into_value());
        }
        Ok(result)
    }

    /// Whether the collection holds no parameter
    fn is_empty(&self) -> ParamResult<bool> {
        Ok(self.list()?.is_empty())
    }
}

/// Base parameter collection built by the caller
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct QueryParams {
    params: Vec<Param>,
}

impl QueryParams {
    /// Create a collection from parameters in order
    pub fn new(params: Vec<Param>) -> Self {
        Self { params }
    }

    /// Create an empty collection
    pub fn empty() -> Self {
        Self::default()
    }

    /// Iterate over parameters in order
    pub fn iter(&self) -> std::slice::Iter<'_, Param> {
        self.params.iter()
    }
}

impl Params for QueryParams {
    fn list(&self) -> ParamResult<Vec<Param>> {
        Ok(self.params.clone())
    }

    fn param(&self, name: &str) -> ParamResult<Option<Param>> {
        Ok(self.params.iter().find(|p| p.name() == name).cloned())
    }

    fn with(&self, param: Param) -> Self {
        let mut params = Vec::with_capacity(self.params.len() + 1);
        params.extend(self.params.iter().cloned());
        params.push(param);
        Self { params }
    }

    fn is_empty(&self) -> ParamResult<bool> {
        Ok(self.params.is_empty())
    }
}

impl FromIterator<Param> for QueryParams {
    fn from_iter<I: IntoIterator<Item = Param>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl From<Vec<Param>> for QueryParams {
    fn from(params: Vec<Param>) -> Self {
        Self::new(params)
    }
}

impl<'a> IntoIterator for &'a QueryParams {
    type Item = &'a Param;
    type IntoIter = std::slice::Iter<'a, Param>;

    fn into_iter(self) -> Self::IntoIter {
        self.params.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    fn params() -> QueryParams {
        QueryParams::new(vec![
            Param::new("table_name", "fmrk_table").unwrap(),
            Param::new("date", date()).unwrap(),
        ])
    }

    #[test]
    fn test_list_keeps_insertion_order() {
        let expected = vec![
            Param::new("table_name", "fmrk_table").unwrap(),
            Param::new("date", date()).unwrap(),
        ];
        assert_eq!(params().list().unwrap(), expected);
    }

    #[test]
    fn test_map() {
        let map = params().map().unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(map["table_name"], Value::from("fmrk_table"));
        assert_eq!(map["date"], Value::from(date()));
    }

    #[test]
    fn test_get_and_param() {
        let params = params();
        assert_eq!(params.get("date").unwrap(), Some(Value::from(date())));
        assert_eq!(params.param("missing").unwrap(), None);
        assert_eq!(params.get("DATE").unwrap(), None);
    }

    #[test]
    fn test_with_appends_without_mutation() {
        let base = params();
        let extended = base.with(Param::new("limit", 10).unwrap());

        assert_eq!(base.list().unwrap().len(), 2);
        assert_eq!(extended.list().unwrap().len(), 3);
        assert_eq!(extended.list().unwrap()[2].name(), "limit");
    }

    #[test]
    fn test_duplicates_first_wins_on_lookup_last_wins_on_map() {
        let params = QueryParams::new(vec![
            Param::new("name", "first").unwrap(),
            Param::new("name", "second").unwrap(),
        ]);

        assert_eq!(params.list().unwrap().len(), 2);
        assert_eq!(params.get("name").unwrap(), Some(Value::from("first")));

        let map = params.map().unwrap();
        assert_eq!(map.len(), 1);
        assert_eq!(map["name"], Value::from("second"));
    }

    #[test]
    fn test_empty() {
        assert!(QueryParams::empty().is_empty().unwrap());
        assert!(!params().is_empty().unwrap());
        assert!(QueryParams::empty().map().unwrap().is_empty());
    }

    #[test]
    fn test_collect() {
        let params: QueryParams = ["a", "b"]
            .into_iter()
            .map(|name| Param::new(name, 1).unwrap())
            .collect();
        let names: Vec<_> = params.iter().map(Param::name).collect();
        assert_eq!(names, vec!["a", "b"]);
    }
}
