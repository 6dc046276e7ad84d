//! A thin data-access layer: run SQL against any [`Connection`], bind
//! parameter objects, and materialize rows into typed values.
//!
//! ```ignore
//! use lightorm::{ConnectionExt, FromRow, Params};
//!
//! #[derive(Debug, Default, FromRow)]
//! struct User {
//!     id: i64,
//!     name: String,
//! }
//!
//! #[derive(Params)]
//! struct ById {
//!     id: i64,
//! }
//!
//! let user: User = conn.query_single("SELECT id, name FROM users WHERE id = :id", &ById { id: 1 })?;
//! ```

pub mod cache;

mod coerce;
pub use coerce::coerce;

mod command;
pub use command::CommandDefinition;

mod exec;
pub use exec::ConnectionExt;

mod from_row;
pub use from_row::{FromRow, RowMap};

mod params;
pub use params::{ParamName, Params};

mod plan;
pub use plan::{Binder, Plan};

mod primitive;
pub use primitive::Primitive;

mod query;
pub use query::Query;

mod scope;

mod signature;
pub use signature::Signature;

mod table;
pub use table::Table;

pub use lightorm_core::{bail, driver, err, stmt, Connection, Driver, Error, Result};

pub use lightorm_sql as sql;
pub use lightorm_sql::{translate, Flavor, SqlClause};

pub use lightorm_macros::{FromRow, Params};

#[doc(hidden)]
pub mod codegen_support {
    pub use crate::{coerce, FromRow, ParamName, Params, Primitive, Result, RowMap};
    pub use lightorm_core::{
        driver::Row,
        stmt::{Type, Value},
    };
    pub use lightorm_sql::TypedValue;
    pub use std::{default::Default, vec::Vec};
}
