//! Guard configuration
//!
//! Enforcement is meant to be on while a program's concurrency invariants are
//! being validated and may be switched off on production hot paths afterward.
//! The builder makes that policy explicit at the construction site.

use crate::guard::ThreadAffinityGuard;

/// Builder for guard configuration.
///
/// # Example
///
/// ```ignore
/// // Always enforced (default)
/// let guard = ThreadAffinityGuard::builder("cache").build();
///
/// // Enforced in debug builds, inert in release builds
/// let guard = ThreadAffinityGuard::builder("cache")
///     .enforce_in_debug()
///     .build();
/// ```
#[derive(Debug, Clone)]
pub struct GuardBuilder {
    identifier: String,
    enforce: bool,
}

impl GuardBuilder {
    /// Create a new builder with enforcement enabled.
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            enforce: true,
        }
    }

    /// Enable or disable enforcement.
    pub fn enforce(mut self, enforce: bool) -> Self {
        self.enforce = enforce;
        self
    }

    /// Disable enforcement. The built guard never reports a violation.
    pub fn unenforced(self) -> Self {
        self.enforce(false)
    }

    /// Enforce only when compiled with debug assertions.
    pub fn enforce_in_debug(self) -> Self {
        self.enforce(cfg!(debug_assertions))
    }

    /// Build the guard.
    ///
    /// The calling thread becomes the owner, so build on the thread meant to
    /// own the protected object.
    pub fn build(self) -> ThreadAffinityGuard {
        tracing::debug!(
            identifier = %self.identifier,
            enforce = self.enforce,
            "Creating thread affinity guard"
        );
        ThreadAffinityGuard::with_enforcement(self.identifier, self.enforce)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults_to_enforcing() {
        let guard = GuardBuilder::new("cache").build();
        assert_eq!(guard.identifier(), "cache");
        assert!(guard.is_enforcing());
        assert!(guard.is_owner());
    }

    #[test]
    fn test_unenforced() {
        let guard = ThreadAffinityGuard::builder("x").unenforced().build();
        assert!(!guard.is_enforcing());
    }

    #[test]
    fn test_last_setting_wins() {
        let guard = ThreadAffinityGuard::builder("x")
            .unenforced()
            .enforce(true)
            .build();
        assert!(guard.is_enforcing());
    }

    #[test]
    fn test_enforce_in_debug_follows_build_profile() {
        let guard = ThreadAffinityGuard::builder("x").enforce_in_debug().build();
        assert_eq!(guard.is_enforcing(), cfg!(debug_assertions));
    }
}
