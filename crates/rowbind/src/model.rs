use crate::{Result, TypeShape, Value};

/// A record type rowbind can bind parameters from and load rows into.
///
/// Usually derived with `#[derive(rowbind::Model)]`. Field names passed to [`get`] and
/// [`set`] are the declared field names, never column names.
///
/// [`get`]: Model::get
/// [`set`]: Model::set
pub trait Model: Send + Sync + 'static {
    /// Describes the type's fields and their persistence tags.
    ///
    /// Called at most once per type and [`TypeCache`](crate::TypeCache).
    fn shape() -> TypeShape;

    /// Current value of `field`, or `None` if the type has no such field.
    fn get(&self, field: &str) -> Option<Value>;

    /// Loads `value` into `field`, converting it to the field's declared kind.
    fn set(&mut self, field: &str, value: Value) -> Result<()>;
}
