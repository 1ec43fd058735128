mod cursor;
pub use cursor::{Cursor, VecCursor};

mod flavor;
pub use flavor::Flavor;

use crate::{async_trait, stmt::Statement, Result};

use std::fmt::Debug;

/// The SQL execution interface rowbind runs queries through.
///
/// Implementations own connection handling and statement execution. Errors are reported
/// with [`Error::driver`](crate::Error::driver) and surfaced to callers untouched.
#[async_trait]
pub trait Connection: Debug + Send {
    /// Positional placeholder syntax the connection expects.
    fn flavor(&self) -> Flavor;

    /// Executes a query and returns a cursor over its rows.
    async fn query(&mut self, stmt: Statement) -> Result<Box<dyn Cursor>>;

    /// Executes a statement and returns the number of affected rows.
    async fn execute(&mut self, stmt: Statement) -> Result<u64>;
}
