use super::{Value, ValueMap};

use std::fmt;

/// A query-option key that groups sub-conditions instead of naming an
/// attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Combinator {
    /// `$and`: every sub-condition holds
    And,

    /// `$or`: at least one sub-condition holds
    Or,

    /// `$not`: the sub-conditions do not hold
    Not,
}

/// The shapes a combinator's value can take.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CombinatorValue<'a> {
    /// A single mapping of attribute conditions.
    Single(&'a ValueMap),

    /// A sequence of condition mappings. Elements that are not mappings are
    /// kept as they are.
    Many(&'a [Value]),

    /// Any other value. Passed through untouched.
    Other(&'a Value),
}

impl Combinator {
    pub const ALL: [Combinator; 3] = [Combinator::And, Combinator::Or, Combinator::Not];

    /// Looks up the combinator spelled by `key`. Returns `None` for attribute
    /// names and every other key.
    pub fn from_key(key: &str) -> Option<Combinator> {
        match key {
            "$and" => Some(Combinator::And),
            "$or" => Some(Combinator::Or),
            "$not" => Some(Combinator::Not),
            _ => None,
        }
    }

    pub const fn key(self) -> &'static str {
        match self {
            Combinator::And => "$and",
            Combinator::Or => "$or",
            Combinator::Not => "$not",
        }
    }
}

impl fmt::Display for Combinator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl<'a> CombinatorValue<'a> {
    pub fn classify(value: &'a Value) -> CombinatorValue<'a> {
        match value {
            Value::Map(map) => CombinatorValue::Single(map),
            Value::List(items) => CombinatorValue::Many(items),
            other => CombinatorValue::Other(other),
        }
    }
}

impl<'a> From<&'a Value> for CombinatorValue<'a> {
    fn from(value: &'a Value) -> Self {
        CombinatorValue::classify(value)
    }
}
