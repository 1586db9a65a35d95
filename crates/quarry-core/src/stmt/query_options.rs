use super::{Value, ValueMap};
use crate::{Error, Result};

/// Top-level options of a query: the `where` filter, the `attributes`
/// projection, and any other key the query layer understands.
///
/// Entries keep their insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryOptions {
    entries: ValueMap,
}

impl QueryOptions {
    /// Key holding the filter conditions.
    pub const WHERE: &'static str = "where";

    /// Key holding the list of selected attributes.
    pub const ATTRIBUTES: &'static str = "attributes";

    pub fn new() -> QueryOptions {
        QueryOptions::default()
    }

    /// Creates options holding only a `where` filter.
    pub fn from_filter(filter: impl Into<Value>) -> QueryOptions {
        let mut options = QueryOptions::new();
        options.set_filter(filter);
        options
    }

    pub fn filter(&self) -> Option<&Value> {
        self.entries.get(Self::WHERE)
    }

    pub fn set_filter(&mut self, filter: impl Into<Value>) {
        self.entries.insert(Self::WHERE.to_string(), filter.into());
    }

    pub fn attributes(&self) -> Option<&Value> {
        self.entries.get(Self::ATTRIBUTES)
    }

    pub fn set_attributes<I, A>(&mut self, attributes: I)
    where
        I: IntoIterator<Item = A>,
        A: Into<Value>,
    {
        let attributes = attributes.into_iter().map(Into::into).collect::<Vec<_>>();
        self.entries
            .insert(Self::ATTRIBUTES.to_string(), Value::List(attributes));
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.entries.insert(key.into(), value.into())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Value> {
        self.entries.iter()
    }

    pub fn entries(&self) -> &ValueMap {
        &self.entries
    }

    pub fn into_entries(self) -> ValueMap {
        self.entries
    }
}

impl From<ValueMap> for QueryOptions {
    fn from(entries: ValueMap) -> Self {
        QueryOptions { entries }
    }
}

impl From<QueryOptions> for Value {
    fn from(options: QueryOptions) -> Self {
        Value::Map(options.entries)
    }
}

impl TryFrom<Value> for QueryOptions {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Map(entries) => Ok(QueryOptions { entries }),
            _ => Err(Error::type_conversion(value, "QueryOptions")),
        }
    }
}

impl TryFrom<serde_json::Value> for QueryOptions {
    type Error = Error;

    fn try_from(value: serde_json::Value) -> Result<Self> {
        QueryOptions::try_from(Value::from(value))
    }
}

impl FromIterator<(String, Value)> for QueryOptions {
    fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
        QueryOptions {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a QueryOptions {
    type Item = (&'a String, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
