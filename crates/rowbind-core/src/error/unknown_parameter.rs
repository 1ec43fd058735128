use super::Error;

/// Error when a named placeholder has no matching field on the bound input.
#[derive(Debug)]
pub(super) struct UnknownParameterError {
    type_name: Box<str>,
    parameter: Box<str>,
}

impl std::error::Error for UnknownParameterError {}

impl core::fmt::Display for UnknownParameterError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "unknown parameter `:{}` for type `{}`",
            self.parameter, self.type_name
        )
    }
}

impl Error {
    /// Creates an unknown parameter error.
    pub fn unknown_parameter(type_name: impl Into<String>, parameter: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::UnknownParameter(UnknownParameterError {
            type_name: type_name.into().into(),
            parameter: parameter.into().into(),
        }))
    }

    /// Returns `true` if this error is an unknown parameter error.
    pub fn is_unknown_parameter(&self) -> bool {
        matches!(self.root_kind(), super::ErrorKind::UnknownParameter(_))
    }
}
