use super::DefaultValue;
use crate::stmt;
use std::fmt;

#[derive(Debug, Clone)]
pub struct Field {
    /// Uniquely identifies the field within the containing model.
    pub id: FieldId,

    /// The field name
    pub name: FieldName,

    /// Type of the values the field stores
    pub ty: stmt::Type,

    /// True if the field can be null.
    pub nullable: bool,

    /// True if the field is part of the primary key
    pub primary_key: bool,

    /// Value used to populate the field when a new record omits it
    pub default: Option<DefaultValue>,
}

/// Position of a field within its model.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FieldId(pub usize);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldName {
    /// Name used by application code
    pub app_name: String,

    /// Column the field is persisted to, when it differs from `app_name`
    pub storage_name: Option<String>,
}

impl Field {
    pub fn id(&self) -> FieldId {
        self.id
    }

    pub fn name(&self) -> &FieldName {
        &self.name
    }

    pub fn default(&self) -> Option<&DefaultValue> {
        self.default.as_ref()
    }
}

impl FieldName {
    pub fn new(app_name: impl Into<String>) -> FieldName {
        FieldName {
            app_name: app_name.into(),
            storage_name: None,
        }
    }

    pub fn with_storage_name(
        app_name: impl Into<String>,
        storage_name: impl Into<String>,
    ) -> FieldName {
        FieldName {
            app_name: app_name.into(),
            storage_name: Some(storage_name.into()),
        }
    }

    pub fn storage_name(&self) -> &str {
        self.storage_name.as_ref().unwrap_or(&self.app_name)
    }

    /// Returns `true` when the field is stored under a name other than its
    /// app-level name.
    pub fn is_renamed(&self) -> bool {
        self.storage_name() != self.app_name
    }
}

impl From<usize> for FieldId {
    fn from(index: usize) -> Self {
        FieldId(index)
    }
}

impl fmt::Debug for FieldId {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "FieldId({})", self.0)
    }
}
