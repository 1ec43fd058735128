use rowbind_core::{
    async_trait,
    driver::{Connection, Cursor, Flavor},
    Result, Statement,
};

/// A connection wrapper that logs every statement sent to the database.
#[derive(Debug)]
pub struct LoggingConnection {
    /// The underlying connection that actually executes statements
    inner: Box<dyn Connection>,

    /// Log of all statements executed through this connection
    log: Vec<Statement>,
}

impl LoggingConnection {
    pub fn new(inner: Box<dyn Connection>) -> Self {
        Self {
            inner,
            log: Vec::new(),
        }
    }

    /// Statements executed so far
    pub fn statements(&self) -> &[Statement] {
        &self.log
    }
}

#[async_trait]
impl Connection for LoggingConnection {
    fn flavor(&self) -> Flavor {
        self.inner.flavor()
    }

    async fn query(&mut self, stmt: Statement) -> Result<Box<dyn Cursor>> {
        self.log.push(stmt.clone());
        self.inner.query(stmt).await
    }

    async fn execute(&mut self, stmt: Statement) -> Result<u64> {
        self.log.push(stmt.clone());
        self.inner.execute(stmt).await
    }
}
