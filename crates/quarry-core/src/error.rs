mod adhoc;
mod invalid_schema;
mod type_conversion;

use adhoc::AdhocError;
use invalid_schema::InvalidSchema;
use std::sync::Arc;
use type_conversion::TypeConversionError;

/// Builds an ad-hoc [`Error`] from a format string.
#[macro_export]
macro_rules! err {
    ($($arg:tt)*) => {
        $crate::Error::from_args(format_args!($($arg)*))
    };
}

/// An error that can occur in Quarry.
#[derive(Clone)]
pub struct Error {
    inner: Option<Arc<ErrorInner>>,
}

#[derive(Debug)]
struct ErrorInner {
    kind: ErrorKind,
    cause: Option<Error>,
}

impl Error {
    /// Adds context to this error.
    ///
    /// Context is displayed in reverse order: the most recently added context
    /// is shown first, followed by earlier context, ending with the root cause.
    #[inline(always)]
    pub fn context(self, consequent: impl IntoError) -> Error {
        self.context_impl(consequent.into_error())
    }

    #[inline(never)]
    #[cold]
    fn context_impl(self, consequent: Error) -> Error {
        let kind = match consequent.inner.map(Arc::try_unwrap) {
            Some(Ok(inner)) => {
                assert!(
                    inner.cause.is_none(),
                    "consequent error must not already have a cause"
                );
                inner.kind
            }
            // The consequent is shared with another handle; keep its message.
            Some(Err(shared)) => ErrorKind::Adhoc(AdhocError::new(shared.kind.to_string())),
            None => ErrorKind::Unknown,
        };

        Error::from_parts(kind, Some(self))
    }

    fn from_parts(kind: ErrorKind, cause: Option<Error>) -> Error {
        Error {
            inner: Some(Arc::new(ErrorInner { kind, cause })),
        }
    }

    /// Creates an ad-hoc error from format arguments. Used by [`err!`].
    pub fn from_args(args: core::fmt::Arguments<'_>) -> Error {
        Error::from(ErrorKind::Adhoc(AdhocError::new(args.to_string())))
    }

    /// The innermost cause; the error itself when it has no cause.
    fn root(&self) -> &Error {
        self.chain().last().unwrap_or(self)
    }

    fn chain(&self) -> impl Iterator<Item = &Error> {
        let mut err = self;
        core::iter::once(err).chain(core::iter::from_fn(move || {
            err = err.inner.as_ref().and_then(|inner| inner.cause.as_ref())?;
            Some(err)
        }))
    }

    fn kind(&self) -> &ErrorKind {
        self.inner
            .as_ref()
            .map(|inner| &inner.kind)
            .unwrap_or(&ErrorKind::Unknown)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self.kind() {
            ErrorKind::Anyhow(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let mut it = self.chain().peekable();
        while let Some(err) = it.next() {
            core::fmt::Display::fmt(err.kind(), f)?;
            if it.peek().is_some() {
                f.write_str(": ")?;
            }
        }
        Ok(())
    }
}

impl core::fmt::Debug for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if !f.alternate() {
            core::fmt::Display::fmt(self, f)
        } else {
            let Some(ref inner) = self.inner else {
                return f.debug_struct("Error").field("kind", &"None").finish();
            };
            f.debug_struct("Error")
                .field("kind", &inner.kind)
                .field("cause", &inner.cause)
                .finish()
        }
    }
}

#[derive(Debug)]
enum ErrorKind {
    Anyhow(anyhow::Error),
    Adhoc(AdhocError),
    InvalidSchema(InvalidSchema),
    TypeConversion(TypeConversionError),
    Unknown,
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::ErrorKind::*;

        match self {
            Anyhow(err) => core::fmt::Display::fmt(err, f),
            Adhoc(err) => core::fmt::Display::fmt(err, f),
            InvalidSchema(err) => core::fmt::Display::fmt(err, f),
            TypeConversion(err) => core::fmt::Display::fmt(err, f),
            Unknown => f.write_str("unknown quarry error"),
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error::from_parts(kind, None)
    }
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Error {
        Error::from(ErrorKind::Anyhow(err))
    }
}

impl From<uuid::Error> for Error {
    fn from(err: uuid::Error) -> Error {
        Error::from(anyhow::Error::from(err))
    }
}

impl From<chrono::ParseError> for Error {
    fn from(err: chrono::ParseError) -> Error {
        Error::from(anyhow::Error::from(err))
    }
}

/// Trait for types that can be converted into an Error.
pub trait IntoError {
    /// Converts this type into an Error.
    fn into_error(self) -> Error;
}

impl IntoError for Error {
    #[inline(always)]
    fn into_error(self) -> Error {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stmt::Value;

    #[test]
    fn error_size() {
        // One word: the `Arc` pointer.
        let expected_size = core::mem::size_of::<usize>();
        assert_eq!(expected_size, core::mem::size_of::<Error>());
    }

    #[test]
    fn error_from_args() {
        let err = Error::from_args(format_args!("test error: {}", 42));
        assert_eq!(err.to_string(), "test error: 42");
    }

    #[test]
    fn error_chain_display() {
        let root = err!("root cause");
        let mid = err!("middle context");
        let top = err!("top context");

        let chained = root.context(mid).context(top);
        assert_eq!(
            chained.to_string(),
            "top context: middle context: root cause"
        );
    }

    #[test]
    fn context_on_shared_consequent() {
        let consequent = err!("building model `User`");
        let _keep_alive = consequent.clone();

        let err = Error::invalid_schema("duplicate field `id`").context(consequent);
        assert_eq!(
            err.to_string(),
            "building model `User`: invalid schema: duplicate field `id`"
        );
    }

    #[test]
    fn anyhow_bridge() {
        let anyhow_err = anyhow::anyhow!("something failed");
        let our_err: Error = anyhow_err.into();
        assert_eq!(our_err.to_string(), "something failed");
        assert!(std::error::Error::source(&our_err).is_some());
    }

    #[test]
    fn uuid_bridge() {
        let parse_err = uuid::Uuid::parse_str("not-a-uuid").unwrap_err();
        let our_err: Error = parse_err.into();
        assert!(!our_err.to_string().is_empty());
    }

    #[test]
    fn type_conversion_error() {
        let err = Error::type_conversion(Value::I64(42), "String");
        assert_eq!(err.to_string(), "cannot convert I64 to String");
        assert!(err.is_type_conversion());
        assert!(!err.is_invalid_schema());
    }

    #[test]
    fn invalid_schema_error() {
        let err = Error::invalid_schema("field name must not be empty");
        assert_eq!(
            err.to_string(),
            "invalid schema: field name must not be empty"
        );
        assert!(err.is_invalid_schema());
    }

    #[test]
    fn kind_checks_look_at_the_root_cause() {
        let err = Error::invalid_schema("duplicate field `id`").context(err!("building model `User`"));
        assert!(err.is_invalid_schema());
        assert!(!err.is_type_conversion());
        assert!(!err!("plain").is_invalid_schema());
    }

    #[test]
    fn alternate_debug_shows_kind() {
        let err = err!("root").context(err!("top"));
        let debug = format!("{err:#?}");
        assert!(debug.contains("Adhoc"));
        assert!(debug.contains("cause"));
    }
}
