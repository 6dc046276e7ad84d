use lightorm_core::stmt::{Type, Value as CoreValue};
use rusqlite::types::{ToSql, ToSqlOutput, Value as SqlValue, ValueRef};

#[derive(Debug)]
pub(crate) struct Value(CoreValue);

impl From<CoreValue> for Value {
    fn from(value: CoreValue) -> Self {
        Self(value)
    }
}

impl Value {
    pub(crate) fn into_inner(self) -> CoreValue {
        self.0
    }

    /// Converts a SQLite value to a core value, using the column's declared
    /// type where SQLite's storage class loses information.
    pub(crate) fn from_sql(value: ValueRef<'_>, ty: Option<Type>) -> Self {
        let core_value = match value {
            ValueRef::Null => CoreValue::Null,
            ValueRef::Integer(v) => match ty {
                Some(Type::Bool) => CoreValue::Bool(v != 0),
                _ => CoreValue::I64(v),
            },
            ValueRef::Real(v) => CoreValue::F64(v),
            ValueRef::Text(v) => CoreValue::String(String::from_utf8_lossy(v).into_owned()),
            ValueRef::Blob(v) => match ty {
                Some(Type::String) => CoreValue::String(String::from_utf8_lossy(v).into_owned()),
                _ => CoreValue::Bytes(v.to_vec()),
            },
        };

        Value(core_value)
    }
}

impl ToSql for Value {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        match &self.0 {
            CoreValue::Bool(v) => Ok(ToSqlOutput::Owned(SqlValue::Integer(i64::from(*v)))),
            CoreValue::I32(v) => Ok(ToSqlOutput::Owned(SqlValue::Integer(i64::from(*v)))),
            CoreValue::I64(v) => Ok(ToSqlOutput::Owned(SqlValue::Integer(*v))),
            CoreValue::F64(v) => Ok(ToSqlOutput::Owned(SqlValue::Real(*v))),
            CoreValue::String(v) => Ok(ToSqlOutput::Borrowed(ValueRef::Text(v.as_bytes()))),
            CoreValue::Bytes(v) => Ok(ToSqlOutput::Borrowed(ValueRef::Blob(&v[..]))),
            CoreValue::Null => Ok(ToSqlOutput::Owned(SqlValue::Null)),
        }
    }
}
