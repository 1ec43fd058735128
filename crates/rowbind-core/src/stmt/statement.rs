use super::Value;

/// A positionally parameterized SQL statement, ready for a driver.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Statement {
    /// SQL text using the driver's positional placeholder syntax.
    pub sql: String,

    /// Arguments in placeholder order.
    pub params: Vec<Value>,
}

impl Statement {
    /// A statement without parameters.
    pub fn new(sql: impl Into<String>) -> Statement {
        Statement {
            sql: sql.into(),
            params: vec![],
        }
    }

    pub fn with_params(sql: impl Into<String>, params: Vec<Value>) -> Statement {
        Statement {
            sql: sql.into(),
            params,
        }
    }
}

impl From<&str> for Statement {
    fn from(sql: &str) -> Statement {
        Statement::new(sql)
    }
}

impl From<String> for Statement {
    fn from(sql: String) -> Statement {
        Statement::new(sql)
    }
}
