//! Error types for thread affinity checks

use thiserror::Error;

/// A checked operation ran on a thread that does not own the object.
///
/// This indicates a broken concurrency invariant elsewhere in the program.
/// It is not meant to be caught and retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Cross-thread Access to '{identifier}' is not permitted from this scope.")]
pub struct AccessViolation {
    identifier: String,
}

impl AccessViolation {
    /// Create a violation for the object labelled `identifier`.
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
        }
    }

    /// Label of the object that was accessed.
    pub fn identifier(&self) -> &str {
        &self.identifier
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_format() {
        let err = AccessViolation::new("cache");
        assert_eq!(
            err.to_string(),
            "Cross-thread Access to 'cache' is not permitted from this scope."
        );
        assert_eq!(err.identifier(), "cache");
    }

    #[test]
    fn test_empty_identifier() {
        let err = AccessViolation::new("");
        assert_eq!(
            err.to_string(),
            "Cross-thread Access to '' is not permitted from this scope."
        );
    }
}
