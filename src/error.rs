//! Unified error types for affinity.

use affinity_core::AccessViolation;
use thiserror::Error;

/// All affinity errors.
///
/// Wraps the errors of the underlying crates behind one stable type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A checked operation ran on a thread that does not own the object.
    #[error(transparent)]
    AccessViolation(#[from] AccessViolation),
}

/// Result type for affinity operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check if this is an access violation.
    pub fn is_access_violation(&self) -> bool {
        matches!(self, Error::AccessViolation(_))
    }

    /// Label of the object involved, if the error names one.
    pub fn identifier(&self) -> Option<&str> {
        match self {
            Error::AccessViolation(violation) => Some(violation.identifier()),
        }
    }

    /// Check if this is a serious/unrecoverable error.
    ///
    /// Access violations always are: they mean a thread-confinement invariant
    /// is broken somewhere else in the program.
    pub fn is_serious(&self) -> bool {
        matches!(self, Error::AccessViolation(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_access_violation_keeps_message() {
        let err: Error = AccessViolation::new("cache").into();
        assert!(err.is_access_violation());
        assert!(err.is_serious());
        assert_eq!(err.identifier(), Some("cache"));
        assert_eq!(
            err.to_string(),
            "Cross-thread Access to 'cache' is not permitted from this scope."
        );
    }
}
