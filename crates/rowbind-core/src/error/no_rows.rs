use super::Error;

/// Error when a single-row fetch finds nothing.
///
/// Kept distinct from driver failures so callers can tell "not found" apart from a
/// broken query.
#[derive(Debug)]
pub(super) struct NoRowsError {
    context: Option<Box<str>>,
}

impl std::error::Error for NoRowsError {}

impl core::fmt::Display for NoRowsError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str("no rows in result set")?;
        if let Some(ref ctx) = self.context {
            write!(f, ": {}", ctx)?;
        }
        Ok(())
    }
}

impl Error {
    /// Creates a no rows error.
    ///
    /// The context parameter usually names the destination type.
    pub fn no_rows(context: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::NoRows(NoRowsError {
            context: Some(context.into().into()),
        }))
    }

    /// Returns `true` if this error is a no rows error.
    pub fn is_no_rows(&self) -> bool {
        matches!(self.root_kind(), super::ErrorKind::NoRows(_))
    }
}
