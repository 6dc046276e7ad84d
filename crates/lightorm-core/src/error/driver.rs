use super::Error;

/// Error from a database driver.
#[derive(Debug)]
pub(super) struct DriverError {
    pub(super) inner: Box<dyn std::error::Error + Send + Sync>,
}

impl std::error::Error for DriverError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.inner.as_ref())
    }
}

impl core::fmt::Display for DriverError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let first: &(dyn std::error::Error + 'static) = self.inner.as_ref();
        let mut chain = std::iter::successors(Some(first), |err| err.source());

        if let Some(err) = chain.next() {
            write!(f, "{err}")?;
        }

        chain.try_for_each(|err| write!(f, ": {err}"))
    }
}

impl Error {
    /// Creates an error from a driver error.
    ///
    /// Drivers convert every failure raised while opening connections,
    /// executing commands, or fetching rows through this constructor. The
    /// execution pipeline hands these errors back to the caller unchanged.
    pub fn driver(err: impl std::error::Error + Send + Sync + 'static) -> Error {
        Error::from(super::ErrorKind::Driver(DriverError {
            inner: Box::new(err),
        }))
    }

    /// Returns `true` if this error is a driver error.
    pub fn is_driver(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::Driver(_))
    }
}
