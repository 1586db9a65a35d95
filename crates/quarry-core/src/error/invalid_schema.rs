use super::Error;

/// Error when a model definition is invalid.
///
/// This occurs when:
/// - A field has an empty name
/// - Two fields share an app-level name
/// - Two fields map to the same storage column
#[derive(Debug)]
pub(super) struct InvalidSchema {
    message: Box<str>,
}

impl std::error::Error for InvalidSchema {}

impl core::fmt::Display for InvalidSchema {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid schema: {}", self.message)
    }
}

impl Error {
    /// Creates an invalid schema error.
    pub fn invalid_schema(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidSchema(InvalidSchema {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error, or its root cause, is an invalid schema
    /// error.
    pub fn is_invalid_schema(&self) -> bool {
        matches!(self.root().kind(), super::ErrorKind::InvalidSchema(_))
    }
}
