mod default;
pub use default::{DefaultValue, Generator};

mod field;
pub use field::{Field, FieldId, FieldName};

mod model;
pub use model::Model;

pub use super::Name;
