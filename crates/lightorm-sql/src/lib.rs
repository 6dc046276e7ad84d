mod clause;
pub use clause::{SqlClause, TypedValue};

mod flavor;
pub use flavor::Flavor;

pub mod serializer;
pub use serializer::translate;

pub mod stmt;
pub use stmt::Statement;
