//! Rewrites the attribute names in query options to the names of the columns
//! they are stored in.
//!
//! Only keys are ever rewritten. The `where` filter is walked through the
//! logical combinators (`$and`, `$or`, `$not`) and the lists they hold; the
//! value of an attribute is opaque and copied as-is, even when it is itself a
//! mapping. Keys the model does not know pass through, so rewriting options
//! that were already rewritten is a no-op. When a mapping holds both an
//! attribute and its storage name, the attribute's condition is kept.

use crate::schema::app::Model;
use crate::stmt::{Combinator, CombinatorValue, QueryOptions, Value, ValueMap};

use tracing::{debug, trace};

/// Maps a model's app-level field names to storage names inside query
/// options.
#[derive(Debug, Clone, Copy)]
pub struct MapFieldNames<'a> {
    model: &'a Model,
}

/// Rewrites `options` for `model`. See [`MapFieldNames::rewrite_options`].
pub fn map_option_field_names(options: &QueryOptions, model: &Model) -> QueryOptions {
    MapFieldNames::new(model).rewrite_options(options)
}

impl<'a> MapFieldNames<'a> {
    pub fn new(model: &'a Model) -> MapFieldNames<'a> {
        MapFieldNames { model }
    }

    /// Returns a copy of `options` with the `where` filter and the
    /// `attributes` projection rewritten. All other entries are copied.
    pub fn rewrite_options(&self, options: &QueryOptions) -> QueryOptions {
        let mut renamed = 0;

        let rewritten: QueryOptions = options
            .iter()
            .map(|(key, value)| {
                let value = match (key.as_str(), value) {
                    (QueryOptions::WHERE, Value::Map(filter)) => {
                        Value::Map(self.map_filter(filter, &mut renamed))
                    }
                    (QueryOptions::ATTRIBUTES, Value::List(attributes)) => {
                        Value::List(self.map_attributes(attributes, &mut renamed))
                    }
                    (_, value) => value.clone(),
                };
                (key.clone(), value)
            })
            .collect();

        debug!(model = %self.model.name, renamed, "mapped option field names");
        rewritten
    }

    /// Returns a copy of a `where`-shaped mapping with attribute keys renamed.
    pub fn rewrite_filter(&self, filter: &ValueMap) -> ValueMap {
        let mut renamed = 0;
        let rewritten = self.map_filter(filter, &mut renamed);
        debug!(model = %self.model.name, renamed, "mapped filter field names");
        rewritten
    }

    fn map_filter(&self, filter: &ValueMap, renamed: &mut usize) -> ValueMap {
        let mut mapped = ValueMap::with_capacity(filter.len());

        for (key, value) in filter {
            // The attribute's own condition takes the storage key, wherever
            // the raw storage key appears in the mapping.
            if self.is_shadowed(key, filter) {
                trace!(key = key.as_str(), "dropped storage key shadowed by its attribute");
                continue;
            }

            let (key, value) = self.map_entry(key, value, renamed);
            mapped.insert(key, value);
        }

        mapped
    }

    /// Returns `true` if `key` is the storage name of a renamed field whose
    /// app-level name is also a key of `filter`.
    fn is_shadowed(&self, key: &str, filter: &ValueMap) -> bool {
        if Combinator::from_key(key).is_some() || self.model.field_by_name(key).is_some() {
            return false;
        }

        self.model
            .field_by_storage_name(key)
            .is_some_and(|field| field.name.is_renamed() && filter.contains_key(&field.name.app_name))
    }

    fn map_entry(&self, key: &str, value: &Value, renamed: &mut usize) -> (String, Value) {
        if let Some(combinator) = Combinator::from_key(key) {
            let value = self.map_combinator_value(value.into(), renamed);
            return (combinator.key().to_string(), value);
        }

        match self.storage_name(key) {
            Some(storage_name) => {
                trace!(from = key, to = storage_name, "renamed filter key");
                *renamed += 1;
                (storage_name.to_string(), value.clone())
            }
            None => (key.to_string(), value.clone()),
        }
    }

    fn map_combinator_value(&self, value: CombinatorValue<'_>, renamed: &mut usize) -> Value {
        match value {
            CombinatorValue::Single(filter) => Value::Map(self.map_filter(filter, renamed)),
            CombinatorValue::Many(items) => Value::List(
                items
                    .iter()
                    .map(|item| match item {
                        Value::Map(filter) => Value::Map(self.map_filter(filter, renamed)),
                        other => other.clone(),
                    })
                    .collect(),
            ),
            CombinatorValue::Other(value) => value.clone(),
        }
    }

    /// Selected attributes stored under another name become a
    /// `[storage_name, app_name]` alias pair.
    fn map_attributes(&self, attributes: &[Value], renamed: &mut usize) -> Vec<Value> {
        attributes
            .iter()
            .map(|attribute| {
                let Some(storage_name) = attribute.as_str().and_then(|a| self.storage_name(a))
                else {
                    return attribute.clone();
                };

                trace!(to = storage_name, "aliased attribute");
                *renamed += 1;
                Value::List(vec![Value::from(storage_name), attribute.clone()])
            })
            .collect()
    }

    /// The storage name of the field named `attribute`, if the model has such
    /// a field and it is stored under a different name.
    fn storage_name(&self, attribute: &str) -> Option<&'a str> {
        let field = self.model.field_by_name(attribute)?;
        field.name.is_renamed().then(|| field.name.storage_name())
    }
}
