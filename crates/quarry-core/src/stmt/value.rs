use super::Type;
use crate::{Error, Result};
use indexmap::IndexMap;
use uuid::Uuid;

use chrono::{DateTime, Utc};

/// Insertion-ordered mapping of keys to values.
pub type ValueMap = IndexMap<String, Value>;

/// A dynamically typed value: a query-option tree is built from these.
#[derive(Debug, Default, Clone, PartialEq)]
pub enum Value {
    /// Boolean value
    Bool(bool),

    /// An instant in UTC
    DateTime(DateTime<Utc>),

    /// 64-bit floating point
    F64(f64),

    /// Signed 64-bit integer
    I64(i64),

    /// An ordered sequence of values
    List(Vec<Value>),

    /// An ordered mapping of keys to values
    Map(ValueMap),

    /// Null value
    #[default]
    Null,

    /// String value
    String(String),

    /// A universally unique identifier
    Uuid(Uuid),
}

impl Value {
    pub const fn null() -> Self {
        Self::Null
    }

    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub const fn is_map(&self) -> bool {
        matches!(self, Self::Map(_))
    }

    pub const fn is_list(&self) -> bool {
        matches!(self, Self::List(_))
    }

    pub fn list_from_vec(items: Vec<Self>) -> Self {
        Self::List(items)
    }

    pub fn map_from_iter<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
    {
        Self::Map(
            entries
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&ValueMap> {
        match self {
            Self::Map(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    /// Returns `true` if the value can be stored in a field of type `ty`.
    /// `Null` is accepted by every type; nullability is checked separately.
    pub fn is_a(&self, ty: &Type) -> bool {
        match (self, ty) {
            (Self::Null, _) => true,
            (Self::Bool(_), Type::Bool) => true,
            (Self::DateTime(_), Type::DateTime) => true,
            (Self::F64(_), Type::F64) => true,
            (Self::I64(_), Type::I64) => true,
            (Self::List(_), Type::List) => true,
            (Self::Map(_), Type::Map) => true,
            (Self::String(_), Type::String) => true,
            (Self::Uuid(_), Type::Uuid) => true,
            _ => false,
        }
    }

    /// Name of the variant, used in error messages.
    pub fn variant_name(&self) -> &'static str {
        match self {
            Self::Bool(_) => "Bool",
            Self::DateTime(_) => "DateTime",
            Self::F64(_) => "F64",
            Self::I64(_) => "I64",
            Self::List(_) => "List",
            Self::Map(_) => "Map",
            Self::Null => "Null",
            Self::String(_) => "String",
            Self::Uuid(_) => "Uuid",
        }
    }
}

impl From<bool> for Value {
    fn from(src: bool) -> Self {
        Self::Bool(src)
    }
}

impl From<i32> for Value {
    fn from(src: i32) -> Self {
        Self::I64(src.into())
    }
}

impl From<i64> for Value {
    fn from(src: i64) -> Self {
        Self::I64(src)
    }
}

impl From<f64> for Value {
    fn from(src: f64) -> Self {
        Self::F64(src)
    }
}

impl From<String> for Value {
    fn from(src: String) -> Self {
        Self::String(src)
    }
}

impl From<&String> for Value {
    fn from(src: &String) -> Self {
        Self::String(src.clone())
    }
}

impl From<&str> for Value {
    fn from(src: &str) -> Self {
        Self::String(src.to_string())
    }
}

impl From<Uuid> for Value {
    fn from(src: Uuid) -> Self {
        Self::Uuid(src)
    }
}

impl From<ValueMap> for Value {
    fn from(src: ValueMap) -> Self {
        Self::Map(src)
    }
}

impl From<Vec<Value>> for Value {
    fn from(src: Vec<Value>) -> Self {
        Self::List(src)
    }
}

impl<T> From<Option<T>> for Value
where
    Value: From<T>,
{
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Value::from(value),
            None => Value::Null,
        }
    }
}

impl TryFrom<Value> for bool {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Bool(v) => Ok(v),
            _ => Err(Error::type_conversion(value, "bool")),
        }
    }
}

impl TryFrom<Value> for i64 {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::I64(v) => Ok(v),
            _ => Err(Error::type_conversion(value, "i64")),
        }
    }
}

impl TryFrom<Value> for String {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::String(v) => Ok(v),
            _ => Err(Error::type_conversion(value, "String")),
        }
    }
}

impl TryFrom<Value> for Uuid {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Uuid(v) => Ok(v),
            Value::String(v) => Ok(Uuid::parse_str(&v)?),
            _ => Err(Error::type_conversion(value, "Uuid")),
        }
    }
}

impl TryFrom<Value> for ValueMap {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Map(map) => Ok(map),
            _ => Err(Error::type_conversion(value, "ValueMap")),
        }
    }
}
