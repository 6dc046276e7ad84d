use super::Error;

/// Error when the SQL translator meets an expression node it has no rule
/// for. The kind name identifies the node.
#[derive(Debug)]
pub(super) struct UnsupportedExpression {
    kind: &'static str,
}

impl std::error::Error for UnsupportedExpression {}

impl core::fmt::Display for UnsupportedExpression {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "unsupported expression: {}", self.kind)
    }
}

impl Error {
    /// Creates an unsupported expression error for the given node kind.
    pub fn unsupported_expression(kind: &'static str) -> Error {
        Error::from(super::ErrorKind::UnsupportedExpression(
            UnsupportedExpression { kind },
        ))
    }

    /// Returns `true` if this error is an unsupported expression error.
    pub fn is_unsupported_expression(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::UnsupportedExpression(_))
    }
}
