use crate::{driver::Capability, stmt::Value};

use chrono::{SubsecRound, Utc};
use uuid::Uuid;

/// Produces values on demand for a field default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Generator {
    /// Time-based UUID (version 1)
    UuidV1,

    /// Random UUID (version 4)
    UuidV4,

    /// The current instant
    Now,
}

/// A field's declared default.
#[derive(Debug, Clone, PartialEq)]
pub enum DefaultValue {
    /// Invoke the generator each time a default is needed.
    Generate(Generator),

    /// The generator family itself, named but not invoked. Resolves to the
    /// family's label.
    Family(Generator),

    /// A literal, resolved as-is.
    Value(Value),
}

impl Generator {
    /// The label a generator family resolves to when it is not invoked.
    pub const fn label(self) -> &'static str {
        match self {
            Generator::UuidV1 => "UUIDV1",
            Generator::UuidV4 => "UUIDV4",
            Generator::Now => "NOW",
        }
    }

    /// Produces a fresh value. Every call generates anew.
    pub fn generate(self, cx: &Capability) -> Value {
        match self {
            Generator::UuidV1 => {
                let mut node_id: [u8; 6] = rand::random();
                // Random node ids set the multicast bit (RFC 4122, 4.5)
                node_id[0] |= 0x01;
                Value::Uuid(Uuid::now_v1(&node_id))
            }
            Generator::UuidV4 => Value::Uuid(Uuid::new_v4()),
            Generator::Now => {
                let now = Utc::now();
                if cx.fractional_seconds {
                    Value::DateTime(now)
                } else {
                    Value::DateTime(now.trunc_subsecs(0))
                }
            }
        }
    }
}

impl DefaultValue {
    /// Resolves the default for the default dialect.
    pub fn resolve(&self) -> Value {
        self.resolve_for(&Capability::DEFAULT)
    }

    /// Resolves the default to a concrete value. Generators run on every
    /// call; anything else resolves to itself.
    pub fn resolve_for(&self, cx: &Capability) -> Value {
        match self {
            DefaultValue::Generate(generator) => generator.generate(cx),
            DefaultValue::Family(generator) => Value::String(generator.label().to_string()),
            DefaultValue::Value(value) => value.clone(),
        }
    }

    /// Returns the generator this default invokes, if any.
    pub fn generator(&self) -> Option<Generator> {
        match self {
            DefaultValue::Generate(generator) => Some(*generator),
            _ => None,
        }
    }
}

impl From<Generator> for DefaultValue {
    fn from(generator: Generator) -> Self {
        DefaultValue::Generate(generator)
    }
}

impl From<Value> for DefaultValue {
    fn from(value: Value) -> Self {
        DefaultValue::Value(value)
    }
}
