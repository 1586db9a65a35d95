use super::app::{DefaultValue, Field, FieldId, FieldName, Generator, Model};
use super::Name;
use crate::{stmt, Error, Result};

use indexmap::IndexMap;
use std_util::str;
use tracing::debug;

/// Builds a [`Model`], deriving storage names and validating the result.
#[derive(Debug)]
pub struct Builder {
    /// Name of the model being built
    name: String,

    /// If set, fields without an explicit storage name are stored under the
    /// snake_case form of their app name.
    underscored: bool,

    fields: Vec<FieldDef>,
}

/// Definition of a single field, consumed by [`Builder::field`].
#[derive(Debug, Clone)]
pub struct FieldDef {
    name: String,
    ty: stmt::Type,
    storage_name: Option<String>,
    nullable: bool,
    primary_key: bool,
    default: Option<DefaultValue>,
}

impl Builder {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            underscored: false,
            fields: vec![],
        }
    }

    pub fn underscored(&mut self, underscored: bool) -> &mut Self {
        self.underscored = underscored;
        self
    }

    pub fn field(&mut self, field: FieldDef) -> &mut Self {
        self.fields.push(field);
        self
    }

    pub fn build(&self) -> Result<Model> {
        self.build_model()
            .map_err(|err| err.context(crate::err!("building model `{}`", self.name)))
    }

    fn build_model(&self) -> Result<Model> {
        let name = Name::new(&self.name);
        if name.is_empty() {
            return Err(Error::invalid_schema("model name must not be empty"));
        }

        let mut fields = Vec::with_capacity(self.fields.len());
        // Storage name -> app name of the field that claimed it
        let mut storage_names = IndexMap::<String, &str>::new();

        for (index, def) in self.fields.iter().enumerate() {
            if def.name.is_empty() {
                return Err(Error::invalid_schema(format!(
                    "field #{index} has an empty name"
                )));
            }

            if fields.iter().any(|f: &Field| f.name.app_name == def.name) {
                return Err(Error::invalid_schema(format!(
                    "field `{}` is defined more than once",
                    def.name
                )));
            }

            let field_name = self.field_name(def);

            if let Some(other) = storage_names.get(field_name.storage_name()) {
                return Err(Error::invalid_schema(format!(
                    "fields `{other}` and `{}` are both stored as `{}`",
                    def.name,
                    field_name.storage_name()
                )));
            }
            storage_names.insert(field_name.storage_name().to_string(), &def.name);

            if let Some(default) = &def.default {
                verify_default(def, default)?;
            }

            fields.push(Field {
                id: FieldId(index),
                name: field_name,
                ty: def.ty,
                nullable: def.nullable,
                primary_key: def.primary_key,
                default: def.default.clone(),
            });
        }

        debug!(model = %name, fields = fields.len(), "built model");

        Ok(Model { name, fields })
    }

    fn field_name(&self, def: &FieldDef) -> FieldName {
        match &def.storage_name {
            Some(storage_name) => FieldName::with_storage_name(&def.name, storage_name),
            None if self.underscored => {
                let storage_name = str::snake_case(&def.name);
                if storage_name == def.name {
                    FieldName::new(&def.name)
                } else {
                    debug!(field = %def.name, storage_name = %storage_name, "derived storage name");
                    FieldName::with_storage_name(&def.name, storage_name)
                }
            }
            None => FieldName::new(&def.name),
        }
    }
}

fn verify_default(def: &FieldDef, default: &DefaultValue) -> Result<()> {
    let valid = match default {
        DefaultValue::Generate(Generator::UuidV1 | Generator::UuidV4) => {
            matches!(def.ty, stmt::Type::Uuid | stmt::Type::String)
        }
        DefaultValue::Generate(Generator::Now) => def.ty == stmt::Type::DateTime,
        DefaultValue::Family(_) => def.ty == stmt::Type::String,
        DefaultValue::Value(value) => value.is_a(&def.ty) && (def.nullable || !value.is_null()),
    };

    if valid {
        Ok(())
    } else {
        Err(Error::invalid_schema(format!(
            "default {default:?} does not fit field `{}` (type {:?})",
            def.name, def.ty
        )))
    }
}

impl FieldDef {
    pub fn new(name: impl Into<String>, ty: stmt::Type) -> Self {
        Self {
            name: name.into(),
            ty,
            storage_name: None,
            nullable: false,
            primary_key: false,
            default: None,
        }
    }

    pub fn storage_name(mut self, storage_name: impl Into<String>) -> Self {
        self.storage_name = Some(storage_name.into());
        self
    }

    pub fn nullable(mut self, nullable: bool) -> Self {
        self.nullable = nullable;
        self
    }

    pub fn primary_key(mut self, primary_key: bool) -> Self {
        self.primary_key = primary_key;
        self
    }

    pub fn default(mut self, default: impl Into<DefaultValue>) -> Self {
        self.default = Some(default.into());
        self
    }
}
