use super::Error;
use crate::stmt::Value;

/// Error when a column value cannot be converted to a field's declared kind.
#[derive(Debug)]
pub(super) struct ConversionError {
    pub(super) value: Value,
    pub(super) to_type: &'static str,
}

impl std::error::Error for ConversionError {}

impl core::fmt::Display for ConversionError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "cannot convert {} to {}", self.value.kind_name(), self.to_type)
    }
}

impl Error {
    /// Creates a conversion error.
    ///
    /// This is used when a value returned by the database cannot be loaded into the
    /// destination field, e.g. non-numeric text into an `i64`.
    pub fn conversion(value: Value, to_type: &'static str) -> Error {
        Error::from(super::ErrorKind::Conversion(ConversionError {
            value,
            to_type,
        }))
    }

    /// Returns `true` if this error is a conversion error.
    pub fn is_conversion(&self) -> bool {
        matches!(self.root_kind(), super::ErrorKind::Conversion(_))
    }
}
