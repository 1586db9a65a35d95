pub mod app;

mod builder;
pub use builder::{Builder, FieldDef};

mod name;
pub use name::Name;
