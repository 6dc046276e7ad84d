mod adhoc;
mod argument_mismatch;
mod driver;
mod invalid_connection_url;
mod invalid_result;
mod invalid_statement;
mod type_conversion;
mod unsupported_expression;
mod unsupported_feature;

use adhoc::AdhocError;
use argument_mismatch::ArgumentMismatch;
use driver::DriverError;
use invalid_connection_url::InvalidConnectionUrl;
use invalid_result::InvalidResult;
use invalid_statement::InvalidStatement;
use std::sync::Arc;
use type_conversion::TypeConversionError;
use unsupported_expression::UnsupportedExpression;
use unsupported_feature::UnsupportedFeature;

/// Returns early with an ad-hoc [`Error`] built from a format string.
#[macro_export]
macro_rules! bail {
    ($($arg:tt)*) => {
        return Err($crate::Error::from_args(format_args!($($arg)*)))
    };
}

/// Creates an ad-hoc [`Error`] from a format string.
#[macro_export]
macro_rules! err {
    ($($arg:tt)*) => {
        $crate::Error::from_args(format_args!($($arg)*))
    };
}

/// An error that can occur in LightORM.
///
/// The error is a single pointer wide and cheap to clone. Errors form a chain:
/// [`Error::context`] wraps an existing error with a new, more general one.
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
    /// Wraps this error in a more general one.
    ///
    /// Displayed outermost first: `outer: inner: root cause`.
    pub fn context(self, outer: Error) -> Error {
        let mut outer = match outer.inner {
            Some(inner) => inner,
            None => Arc::new(ErrorInner {
                kind: ErrorKind::Unknown,
                cause: None,
            }),
        };

        // Shared or already wrapping something: keep its message only
        if Arc::get_mut(&mut outer).map_or(true, |inner| inner.cause.is_some()) {
            let message = Error { inner: Some(outer) }.to_string();
            return Error::from(ErrorKind::Adhoc(AdhocError::new(message))).with_cause(self);
        }

        Error { inner: Some(outer) }.with_cause(self)
    }

    /// Returns the innermost error of the chain.
    pub fn root(&self) -> &Error {
        let mut err = self;
        while let Some(cause) = err.cause() {
            err = cause;
        }
        err
    }

    fn cause(&self) -> Option<&Error> {
        self.inner.as_deref()?.cause.as_ref()
    }

    fn with_cause(mut self, cause: Error) -> Error {
        if let Some(inner) = self.inner.as_mut().and_then(Arc::get_mut) {
            inner.cause = Some(cause);
        }
        self
    }

    fn kind(&self) -> &ErrorKind {
        match &self.inner {
            Some(inner) => &inner.kind,
            None => &ErrorKind::Unknown,
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        if let Some(cause) = self.cause() {
            return Some(cause);
        }

        match self.kind() {
            ErrorKind::Driver(err) => Some(err),
            _ => None,
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "{}", self.kind())?;

        match self.cause() {
            Some(cause) => write!(f, ": {cause}"),
            None => Ok(()),
        }
    }
}

impl core::fmt::Debug for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if f.alternate() {
            f.debug_struct("Error")
                .field("kind", self.kind())
                .field("cause", &self.cause())
                .finish()
        } else {
            write!(f, "{self}")
        }
    }
}

#[derive(Debug)]
enum ErrorKind {
    Adhoc(AdhocError),
    Driver(DriverError),
    ArgumentMismatch(ArgumentMismatch),
    UnsupportedExpression(UnsupportedExpression),
    TypeConversion(TypeConversionError),
    InvalidResult(InvalidResult),
    InvalidStatement(InvalidStatement),
    InvalidConnectionUrl(InvalidConnectionUrl),
    UnsupportedFeature(UnsupportedFeature),
    Unknown,
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::ErrorKind::*;

        match self {
            Adhoc(err) => core::fmt::Display::fmt(err, f),
            Driver(err) => core::fmt::Display::fmt(err, f),
            ArgumentMismatch(err) => core::fmt::Display::fmt(err, f),
            UnsupportedExpression(err) => core::fmt::Display::fmt(err, f),
            TypeConversion(err) => core::fmt::Display::fmt(err, f),
            InvalidResult(err) => core::fmt::Display::fmt(err, f),
            InvalidStatement(err) => core::fmt::Display::fmt(err, f),
            InvalidConnectionUrl(err) => core::fmt::Display::fmt(err, f),
            UnsupportedFeature(err) => core::fmt::Display::fmt(err, f),
            Unknown => f.write_str("unknown lightorm error"),
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error {
            inner: Some(Arc::new(ErrorInner { kind, cause: None })),
        }
    }
}
