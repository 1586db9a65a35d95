use chrono::{DateTime, Utc};

use crate::stmt::Value;
use crate::Error;

impl From<DateTime<Utc>> for Value {
    fn from(value: DateTime<Utc>) -> Self {
        Self::DateTime(value)
    }
}

impl TryFrom<Value> for DateTime<Utc> {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::DateTime(value) => Ok(value),
            Value::String(value) => Ok(DateTime::parse_from_rfc3339(&value)?.with_timezone(&Utc)),
            _ => Err(Error::type_conversion(value, "DateTime<Utc>")),
        }
    }
}
