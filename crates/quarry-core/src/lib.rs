pub mod driver;

mod error;
pub use error::{Error, IntoError};

pub mod rewrite;
pub use rewrite::{map_option_field_names, MapFieldNames};

pub mod schema;

pub mod stmt;

/// A Result type alias that uses Quarry's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
