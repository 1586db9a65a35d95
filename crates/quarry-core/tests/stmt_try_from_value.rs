use quarry_core::stmt::{QueryOptions, Type, Value, ValueMap};
use std_util::prelude::*;

use chrono::{DateTime, TimeZone, Utc};

#[test]
fn matching_variants_convert() {
    assert!(assert_ok!(bool::try_from(Value::Bool(true))));
    assert_eq!(assert_ok!(i64::try_from(Value::I64(7))), 7);
    assert_eq!(assert_ok!(String::try_from(Value::from("x"))), "x");
    assert_eq!(
        assert_ok!(ValueMap::try_from(Value::Map(ValueMap::new()))),
        ValueMap::new()
    );
}

#[test]
fn mismatched_variants_fail() {
    let err = assert_err!(String::try_from(Value::I64(42)));
    assert!(err.is_type_conversion());
    assert_eq!(err.to_string(), "cannot convert I64 to String");

    let err = assert_err!(i64::try_from(Value::Null));
    assert_eq!(err.to_string(), "cannot convert Null to i64");

    let err = assert_err!(bool::try_from(Value::from("true")));
    assert_eq!(err.to_string(), "cannot convert String to bool");
}

#[test]
fn uuid_from_value_or_string() {
    let id = uuid::Uuid::new_v4();
    assert_eq!(assert_ok!(uuid::Uuid::try_from(Value::Uuid(id))), id);
    assert_eq!(
        assert_ok!(uuid::Uuid::try_from(Value::from(id.to_string()))),
        id
    );

    let err = assert_err!(uuid::Uuid::try_from(Value::from("nope")));
    assert!(!err.is_type_conversion());

    let err = assert_err!(uuid::Uuid::try_from(Value::I64(1)));
    assert!(err.is_type_conversion());
}

#[test]
fn datetime_from_value_or_string() {
    let at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap();
    assert_eq!(assert_ok!(DateTime::<Utc>::try_from(Value::from(at))), at);
    assert_eq!(
        assert_ok!(DateTime::<Utc>::try_from(Value::from("2024-05-01T14:30:00+02:00"))),
        at
    );

    let err = assert_err!(DateTime::<Utc>::try_from(Value::Bool(false)));
    assert_eq!(err.to_string(), "cannot convert Bool to DateTime<Utc>");
}

#[test]
fn query_options_from_value() {
    let options = assert_ok!(QueryOptions::try_from(Value::map_from_iter([("limit", 1)])));
    assert_eq!(options.get("limit"), Some(&Value::I64(1)));

    let err = assert_err!(QueryOptions::try_from(Value::List(vec![])));
    assert_eq!(err.to_string(), "cannot convert List to QueryOptions");
}

#[test]
fn option_into_value() {
    assert_eq!(Value::from(None::<i64>), Value::Null);
    assert_eq!(Value::from(Some("a")), Value::from("a"));
}

#[test]
fn is_a() {
    assert!(Value::from("a").is_a(&Type::String));
    assert!(Value::I64(1).is_a(&Type::I64));
    assert!(!Value::I64(1).is_a(&Type::F64));
    assert!(Value::List(vec![]).is_a(&Type::List));
    assert!(Value::Map(ValueMap::new()).is_a(&Type::Map));
    assert!(Value::Uuid(uuid::Uuid::nil()).is_a(&Type::Uuid));
    assert!(!Value::from("a").is_a(&Type::Uuid));

    // Null fits every type
    for ty in [Type::Bool, Type::DateTime, Type::String, Type::Uuid] {
        assert!(Value::Null.is_a(&ty));
    }
}
