use crate::{async_trait, stmt::Value, Result};

use std::collections::VecDeque;

/// Rows returned by [`Connection::query`](super::Connection::query).
///
/// Resources held by a cursor are released when it is dropped, whether or not every row
/// was read.
#[async_trait]
pub trait Cursor: Send {
    /// Returned column names, in result order.
    fn columns(&self) -> &[String];

    /// Fetches the next row, or `None` when the cursor is exhausted.
    async fn next(&mut self) -> Result<Option<Vec<Value>>>;
}

/// A cursor over rows already held in memory.
#[derive(Debug, Default)]
pub struct VecCursor {
    columns: Vec<String>,
    rows: VecDeque<Vec<Value>>,
}

impl VecCursor {
    pub fn new(columns: Vec<String>, rows: Vec<Vec<Value>>) -> VecCursor {
        VecCursor {
            columns,
            rows: rows.into(),
        }
    }
}

#[async_trait]
impl Cursor for VecCursor {
    fn columns(&self) -> &[String] {
        &self.columns
    }

    async fn next(&mut self) -> Result<Option<Vec<Value>>> {
        Ok(self.rows.pop_front())
    }
}
