use super::Error;

/// Error when a type cannot be turned into a type descriptor.
///
/// This occurs when:
/// - The type is not a record (e.g. a newtype over a primitive)
/// - Two persisted fields map to the same column
/// - A field tag carries an unrecognized flag
#[derive(Debug)]
pub(super) struct TypeMappingError {
    type_name: Box<str>,
    reason: Box<str>,
}

impl std::error::Error for TypeMappingError {}

impl core::fmt::Display for TypeMappingError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "cannot map type `{}`: {}", self.type_name, self.reason)
    }
}

impl Error {
    /// Creates a type mapping error.
    pub fn type_mapping(type_name: impl Into<String>, reason: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::TypeMapping(TypeMappingError {
            type_name: type_name.into().into(),
            reason: reason.into().into(),
        }))
    }

    /// Returns `true` if this error is a type mapping error.
    pub fn is_type_mapping(&self) -> bool {
        matches!(self.root_kind(), super::ErrorKind::TypeMapping(_))
    }
}
