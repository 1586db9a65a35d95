use chrono::SecondsFormat;
use serde_json::Number;

use crate::stmt::Value;

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value as Json;

        match value {
            Json::Null => Value::Null,
            Json::Bool(v) => Value::Bool(v),
            Json::Number(v) => match v.as_i64() {
                Some(v) => Value::I64(v),
                // u64 beyond i64::MAX and all floats
                None => v.as_f64().map(Value::F64).unwrap_or(Value::Null),
            },
            Json::String(v) => Value::String(v),
            Json::Array(items) => Value::List(items.into_iter().map(Value::from).collect()),
            Json::Object(entries) => Value::Map(
                entries
                    .into_iter()
                    .map(|(key, value)| (key, Value::from(value)))
                    .collect(),
            ),
        }
    }
}

impl From<Value> for serde_json::Value {
    fn from(value: Value) -> Self {
        use serde_json::Value as Json;

        match value {
            Value::Null => Json::Null,
            Value::Bool(v) => Json::Bool(v),
            Value::I64(v) => Json::Number(v.into()),
            // JSON has no representation for NaN or infinity
            Value::F64(v) => Number::from_f64(v).map(Json::Number).unwrap_or(Json::Null),
            Value::String(v) => Json::String(v),
            Value::Uuid(v) => Json::String(v.hyphenated().to_string()),
            Value::DateTime(v) => Json::String(v.to_rfc3339_opts(SecondsFormat::AutoSi, true)),
            Value::List(items) => Json::Array(items.into_iter().map(Json::from).collect()),
            Value::Map(entries) => Json::Object(
                entries
                    .into_iter()
                    .map(|(key, value)| (key, Json::from(value)))
                    .collect(),
            ),
        }
    }
}
