/// The type a model field stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Type {
    Bool,
    DateTime,
    F64,
    I64,
    /// A list of values, stored as a JSON array.
    List,
    /// A nested document, stored as a JSON object.
    Map,
    String,
    Uuid,
}
