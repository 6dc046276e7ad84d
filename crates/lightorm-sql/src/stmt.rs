mod delete;
pub use delete::Delete;

mod insert;
pub use insert::Insert;

mod select;
pub use select::{Direction, OrderBy, Select};

mod update;
pub use update::{Assignment, Update};

/// A minimal single-table statement. Joins, subqueries, and aggregation are
/// deliberately absent.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Select(Select),
    Insert(Insert),
    Update(Update),
    Delete(Delete),
}

impl From<Select> for Statement {
    fn from(value: Select) -> Self {
        Self::Select(value)
    }
}

impl From<Insert> for Statement {
    fn from(value: Insert) -> Self {
        Self::Insert(value)
    }
}

impl From<Update> for Statement {
    fn from(value: Update) -> Self {
        Self::Update(value)
    }
}

impl From<Delete> for Statement {
    fn from(value: Delete) -> Self {
        Self::Delete(value)
    }
}
