use super::Error;

/// Error when a parameter source is not a record and has no fields to bind.
#[derive(Debug)]
pub(super) struct UnsupportedTypeError {
    type_name: Box<str>,
}

impl std::error::Error for UnsupportedTypeError {}

impl core::fmt::Display for UnsupportedTypeError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "type `{}` is not a record and cannot supply parameters",
            self.type_name
        )
    }
}

impl Error {
    /// Creates an unsupported type error.
    pub fn unsupported_type(type_name: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::UnsupportedType(UnsupportedTypeError {
            type_name: type_name.into().into(),
        }))
    }

    /// Returns `true` if this error is an unsupported type error.
    pub fn is_unsupported_type(&self) -> bool {
        matches!(self.root_kind(), super::ErrorKind::UnsupportedType(_))
    }
}
