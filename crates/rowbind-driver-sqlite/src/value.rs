use rowbind_core::stmt::Value as CoreValue;
use rusqlite::types::{ToSql, ToSqlOutput, Value as SqlValue, ValueRef};

#[derive(Debug)]
pub(crate) struct Value(CoreValue);

impl From<CoreValue> for Value {
    fn from(value: CoreValue) -> Self {
        Self(value)
    }
}

impl Value {
    /// Converts a column value read from SQLite.
    ///
    /// SQLite has no boolean or unsigned storage class, so those come back as `I64`. TEXT
    /// that is not valid UTF-8 comes back as `Bytes`.
    pub(crate) fn from_sql(value: ValueRef<'_>) -> CoreValue {
        match value {
            ValueRef::Null => CoreValue::Null,
            ValueRef::Integer(v) => CoreValue::I64(v),
            ValueRef::Real(v) => CoreValue::F64(v),
            ValueRef::Text(v) => match String::from_utf8(v.to_vec()) {
                Ok(text) => CoreValue::String(text),
                Err(err) => CoreValue::Bytes(err.into_bytes()),
            },
            ValueRef::Blob(v) => CoreValue::Bytes(v.to_vec()),
        }
    }
}

impl ToSql for Value {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        match &self.0 {
            CoreValue::Bool(true) => Ok(ToSqlOutput::Owned(SqlValue::Integer(1))),
            CoreValue::Bool(false) => Ok(ToSqlOutput::Owned(SqlValue::Integer(0))),
            CoreValue::I64(v) => Ok(ToSqlOutput::Owned(SqlValue::Integer(*v))),
            CoreValue::U64(v) => {
                let v = i64::try_from(*v)
                    .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))?;
                Ok(ToSqlOutput::Owned(SqlValue::Integer(v)))
            }
            CoreValue::F64(v) => Ok(ToSqlOutput::Owned(SqlValue::Real(*v))),
            CoreValue::String(v) => Ok(ToSqlOutput::Borrowed(ValueRef::Text(v.as_bytes()))),
            CoreValue::Bytes(v) => Ok(ToSqlOutput::Borrowed(ValueRef::Blob(&v[..]))),
            CoreValue::Null => Ok(ToSqlOutput::Owned(SqlValue::Null)),
        }
    }
}
