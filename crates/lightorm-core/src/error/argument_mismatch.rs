use super::Error;

/// Error when a batch is given a different number of statements and
/// parameter sets.
#[derive(Debug)]
pub(super) struct ArgumentMismatch {
    statements: usize,
    params: usize,
}

impl std::error::Error for ArgumentMismatch {}

impl core::fmt::Display for ArgumentMismatch {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "argument mismatch: {} statements but {} parameter sets",
            self.statements, self.params
        )
    }
}

impl Error {
    /// Creates an argument mismatch error.
    pub fn argument_mismatch(statements: usize, params: usize) -> Error {
        Error::from(super::ErrorKind::ArgumentMismatch(ArgumentMismatch {
            statements,
            params,
        }))
    }

    /// Returns `true` if this error is an argument mismatch error.
    pub fn is_argument_mismatch(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::ArgumentMismatch(_))
    }
}
