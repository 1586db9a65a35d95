mod combinator;
pub use combinator::{Combinator, CombinatorValue};

mod query_options;
pub use query_options::QueryOptions;

mod ty;
pub use ty::Type;

mod value;
pub use value::{Value, ValueMap};

mod value_chrono;

mod value_json;
