use super::Error;

/// Error when a query has named placeholders but no parameters were supplied.
#[derive(Debug)]
pub(super) struct MissingBindingError {
    placeholder: Box<str>,
}

impl std::error::Error for MissingBindingError {}

impl core::fmt::Display for MissingBindingError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "query references `:{}` but no parameters were supplied",
            self.placeholder
        )
    }
}

impl Error {
    /// Creates a missing binding error for the first unbound placeholder.
    pub fn missing_binding(placeholder: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::MissingBinding(MissingBindingError {
            placeholder: placeholder.into().into(),
        }))
    }

    /// Returns `true` if this error is a missing binding error.
    pub fn is_missing_binding(&self) -> bool {
        matches!(self.root_kind(), super::ErrorKind::MissingBinding(_))
    }
}
