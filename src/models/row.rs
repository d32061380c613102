use crate::models::schema::Schema;
use crate::models::value::Value;
use serde::Serialize;
use std::collections::HashMap;

/// Source-specific field name -> untyped value, as delivered by an adapter.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawRow {
    values: HashMap<String, Value>,
}

impl RawRow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Zip column headers with one record's values. Extra values are ignored.
    pub fn from_pairs<K, V>(headers: &[K], values: impl IntoIterator<Item = V>) -> Self
    where
        K: AsRef<str>,
        V: Into<Value>,
    {
        let values = headers
            .iter()
            .zip(values)
            .map(|(h, v)| (h.as_ref().to_string(), v.into()))
            .collect();

        Self { values }
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.values.insert(name.into(), value.into());
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for RawRow {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Canonical field name -> typed value, kept in insertion order.
///
/// Rows produced by the caster hold every field of their schema in schema
/// order. Each normalization stage consumes a row and hands back the
/// updated one, so stages compose and can be tested in isolation.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CanonicalRow {
    fields: Vec<(String, Value)>,
}

impl CanonicalRow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every field of `schema` set to null.
    pub fn empty(schema: &Schema) -> Self {
        Self {
            fields: schema
                .names()
                .map(|name| (name.to_string(), Value::Null))
                .collect(),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }

    /// Text value of `name`, if it holds one.
    pub fn text(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(Value::as_str)
    }

    pub fn number(&self, name: &str) -> Option<f64> {
        self.get(name).and_then(Value::as_f64)
    }

    /// Overwrites an existing field in place or appends a new one.
    pub fn set(&mut self, name: &str, value: impl Into<Value>) {
        let value = value.into();
        match self.fields.iter_mut().find(|(n, _)| n == name) {
            Some((_, slot)) => *slot = value,
            None => self.fields.push((name.to_string(), value)),
        }
    }

    pub fn with(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.set(name, value);
        self
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.iter().any(|(n, _)| n == name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(n, _)| n.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(n, v)| (n.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::schema::RESULT_SCHEMA;

    #[test]
    fn test_raw_row_from_pairs() {
        let row = RawRow::from_pairs(&["a", "b"], ["1", "2", "3"]);
        assert_eq!(row.len(), 2);
        assert_eq!(row.get("b"), Some(&Value::from("2")));
    }

    #[test]
    fn test_canonical_row_keeps_order() {
        let row = CanonicalRow::new()
            .with("Param", "Calcium")
            .with("ResultValue", 66.0)
            .with("Param", "Magnesium");

        let names: Vec<_> = row.names().collect();
        assert_eq!(names, vec!["Param", "ResultValue"]);
        assert_eq!(row.text("Param"), Some("Magnesium"));
        assert_eq!(row.number("ResultValue"), Some(66.0));
    }

    #[test]
    fn test_empty_row_has_every_field() {
        let row = CanonicalRow::empty(&RESULT_SCHEMA);
        assert_eq!(row.len(), RESULT_SCHEMA.len());
        assert!(row.iter().all(|(_, v)| v.is_null()));
    }
}
