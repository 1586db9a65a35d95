use super::{Field, FieldId, Name};
use crate::{driver::Capability, schema::Builder, stmt::ValueMap};

use tracing::trace;

/// Describes a model: its name and the fields application code refers to,
/// each mapped to the column it is stored in.
#[derive(Debug, Clone)]
pub struct Model {
    /// Name of the model
    pub name: Name,

    /// Fields contained by the model, in declaration order
    pub fields: Vec<Field>,
}

impl Model {
    pub fn builder(name: &str) -> Builder {
        Builder::new(name)
    }

    pub fn field(&self, field: impl Into<FieldId>) -> &Field {
        &self.fields[field.into().0]
    }

    pub fn field_by_name(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|field| field.name.app_name == name)
    }

    pub fn field_by_storage_name(&self, name: &str) -> Option<&Field> {
        self.fields
            .iter()
            .find(|field| field.name.storage_name() == name)
    }

    /// Iterate over the fields making up the primary key.
    pub fn primary_key_fields(&self) -> impl Iterator<Item = &Field> + '_ {
        self.fields.iter().filter(|field| field.primary_key)
    }

    /// Populates `record`, keyed by app-level field names, with the default of
    /// every field it omits. Keys already present, including explicit nulls,
    /// are left untouched.
    pub fn apply_defaults(&self, record: &mut ValueMap, cx: &Capability) {
        for field in &self.fields {
            let Some(default) = &field.default else {
                continue;
            };

            if record.contains_key(&field.name.app_name) {
                continue;
            }

            let value = default.resolve_for(cx);
            trace!(model = %self.name, field = %field.name.app_name, ?value, "applied default");
            record.insert(field.name.app_name.clone(), value);
        }
    }
}
