mod value;
use value::Value;

use rowbind_core::{
    async_trait, bail,
    driver::{Cursor, Flavor, VecCursor},
    stmt::Statement,
    Error, Result,
};
use rusqlite::Connection as RusqliteConnection;
use std::path::{Path, PathBuf};
use url::Url;

/// Where a SQLite database lives.
#[derive(Debug, Clone, PartialEq)]
pub enum Sqlite {
    File(PathBuf),
    InMemory,
}

impl Sqlite {
    /// Parses a connection URL: `sqlite::memory:` or `sqlite:<path>`.
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let url_str = url.into();
        let url = Url::parse(&url_str).map_err(Error::driver)?;

        if url.scheme() != "sqlite" {
            bail!("connection URL does not have a `sqlite` scheme; url={url_str}");
        }

        if url.path() == ":memory:" {
            Ok(Self::InMemory)
        } else {
            Ok(Self::File(PathBuf::from(url.path())))
        }
    }

    /// Create an in-memory SQLite database
    pub fn in_memory() -> Self {
        Self::InMemory
    }

    /// Open a SQLite database at the specified file path
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        Self::File(path.as_ref().to_path_buf())
    }

    /// Opens a connection. Every in-memory connection gets its own empty database.
    pub fn connect(&self) -> Result<Connection> {
        match self {
            Sqlite::File(path) => Connection::open(path),
            Sqlite::InMemory => Connection::in_memory(),
        }
    }
}

#[derive(Debug)]
pub struct Connection {
    connection: RusqliteConnection,
}

impl Connection {
    pub fn in_memory() -> Result<Self> {
        let connection = RusqliteConnection::open_in_memory().map_err(Error::driver)?;
        Ok(Self { connection })
    }

    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = RusqliteConnection::open(path).map_err(Error::driver)?;
        Ok(Self { connection })
    }

    /// Runs one or more `;`-separated statements without parameters, e.g. a schema.
    pub fn execute_batch(&mut self, sql: &str) -> Result<()> {
        self.connection.execute_batch(sql).map_err(Error::driver)
    }

    /// Runs the query to completion and buffers its rows.
    fn fetch(&mut self, stmt: &Statement) -> Result<VecCursor> {
        let mut prepared = self
            .connection
            .prepare_cached(&stmt.sql)
            .map_err(Error::driver)?;

        let columns: Vec<String> = prepared
            .column_names()
            .into_iter()
            .map(String::from)
            .collect();

        let params = stmt.params.iter().cloned().map(Value::from);
        let mut rows = prepared
            .query(rusqlite::params_from_iter(params))
            .map_err(Error::driver)?;

        let mut buffered = vec![];

        while let Some(row) = rows.next().map_err(Error::driver)? {
            let mut values = Vec::with_capacity(columns.len());

            for index in 0..columns.len() {
                values.push(Value::from_sql(row.get_ref(index).map_err(Error::driver)?));
            }

            buffered.push(values);
        }

        tracing::trace!(rows = buffered.len(), "fetched rows");

        Ok(VecCursor::new(columns, buffered))
    }
}

#[async_trait]
impl rowbind_core::driver::Connection for Connection {
    fn flavor(&self) -> Flavor {
        Flavor::Sqlite
    }

    async fn query(&mut self, stmt: Statement) -> Result<Box<dyn Cursor>> {
        tracing::debug!(sql = %stmt.sql, params = stmt.params.len(), "query");
        Ok(Box::new(self.fetch(&stmt)?))
    }

    async fn execute(&mut self, stmt: Statement) -> Result<u64> {
        tracing::debug!(sql = %stmt.sql, params = stmt.params.len(), "execute");

        let params = stmt.params.into_iter().map(Value::from);
        let count = self
            .connection
            .execute(&stmt.sql, rusqlite::params_from_iter(params))
            .map_err(Error::driver)?;

        Ok(count as u64)
    }
}
