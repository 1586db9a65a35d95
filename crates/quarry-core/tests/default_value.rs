use quarry_core::driver::Capability;
use quarry_core::schema::app::{DefaultValue, Generator};
use quarry_core::stmt::{Value, ValueMap};

use chrono::{Timelike, Utc};

fn is_uuid_shaped(s: &str) -> bool {
    s.len() == 36
        && s.chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

fn expect_uuid(value: Value) -> uuid::Uuid {
    match value {
        Value::Uuid(id) => id,
        other => panic!("expected Uuid; actual={other:?}"),
    }
}

// ---------------------------------------------------------------------------
// Generators
// ---------------------------------------------------------------------------

#[test]
fn uuid_v1() {
    let id = expect_uuid(DefaultValue::Generate(Generator::UuidV1).resolve());
    assert!(is_uuid_shaped(&id.to_string()), "{id}");
    assert_eq!(id.get_version_num(), 1);
}

#[test]
fn uuid_v4() {
    let id = expect_uuid(DefaultValue::Generate(Generator::UuidV4).resolve());
    assert!(is_uuid_shaped(&id.to_string()), "{id}");
    assert_eq!(id.get_version_num(), 4);
}

#[test]
fn uuids_are_fresh_on_every_call() {
    for generator in [Generator::UuidV1, Generator::UuidV4] {
        let default = DefaultValue::from(generator);
        let a = default.resolve();
        let b = default.resolve();
        assert_ne!(a, b, "{generator:?}");
    }
}

#[test]
fn now_is_a_datetime() {
    let before = Utc::now();
    let value = DefaultValue::Generate(Generator::Now).resolve();
    let after = Utc::now();

    match value {
        Value::DateTime(now) => assert!(before <= now && now <= after),
        other => panic!("expected DateTime; actual={other:?}"),
    }
}

#[test]
fn now_without_fractional_seconds() {
    for cx in [Capability::MYSQL, Capability::MSSQL] {
        match DefaultValue::Generate(Generator::Now).resolve_for(&cx) {
            Value::DateTime(now) => assert_eq!(now.nanosecond(), 0),
            other => panic!("expected DateTime; actual={other:?}"),
        }
    }
}

#[test]
fn uuid_ignores_capability() {
    let id = expect_uuid(DefaultValue::Generate(Generator::UuidV4).resolve_for(&Capability::MYSQL));
    assert_eq!(id.get_version_num(), 4);
}

// ---------------------------------------------------------------------------
// Families and plain values
// ---------------------------------------------------------------------------

#[test]
fn family_resolves_to_its_label() {
    assert_eq!(
        DefaultValue::Family(Generator::UuidV4).resolve(),
        Value::from("UUIDV4")
    );
    assert_eq!(
        DefaultValue::Family(Generator::UuidV1).resolve(),
        Value::from("UUIDV1")
    );
    assert_eq!(DefaultValue::Family(Generator::Now).resolve(), Value::from("NOW"));
}

#[test]
fn plain_string() {
    assert_eq!(
        DefaultValue::from(Value::from("Test")).resolve(),
        Value::from("Test")
    );
}

#[test]
fn plain_empty_map() {
    assert_eq!(
        DefaultValue::from(Value::Map(ValueMap::new())).resolve(),
        Value::Map(ValueMap::new())
    );
}

#[test]
fn plain_values_are_identity() {
    let values = [
        Value::Null,
        Value::from(true),
        Value::from(42),
        Value::from(1.5),
        Value::from("UUIDV4"),
        Value::List(vec![Value::from(1), Value::from("a")]),
        Value::map_from_iter([("a", 1)]),
    ];

    for value in values {
        assert_eq!(DefaultValue::from(value.clone()).resolve(), value);
    }
}

#[test]
fn generator_accessor() {
    assert_eq!(
        DefaultValue::from(Generator::Now).generator(),
        Some(Generator::Now)
    );
    assert_eq!(DefaultValue::Family(Generator::Now).generator(), None);
    assert_eq!(DefaultValue::from(Value::Null).generator(), None);
}
