pub mod driver;
pub use driver::{Connection, Cursor};

mod error;
pub use error::{Error, IntoError};

pub mod schema;
pub use schema::{TypeDescriptor, TypeShape};

pub mod stmt;
pub use stmt::{Statement, Type, Value};

/// A Result type alias that uses rowbind's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

pub use async_trait::async_trait;
