//! Thread affinity guard
//!
//! A guard is embedded in an object that must only be used from one thread at
//! a time. Operations on that object call [`ThreadAffinityGuard::check_access`]
//! first; a call from any thread other than the current owner is reported as
//! an [`AccessViolation`].
//!
//! The guard is not a lock. It never blocks and never serializes callers.
//! Concurrent use from two threads is a programming error to surface.
//!
//! ## Ownership Handoff
//!
//! ```text
//! 1. Owner stops touching the object
//! 2. Owner hands the object to the new thread (channel send, join, signal)
//! 3. New thread calls transfer_ownership()
//! 4. New thread's check_access() now succeeds; the old owner's fails
//! ```
//!
//! `transfer_ownership` does not verify step 1. Verifying it would require
//! the very synchronization the guard is auditing.

use crate::config::GuardBuilder;
use affinity_core::{
    AccessViolation, AtomicThreadToken, OperationContract, ThreadSafety, ThreadToken,
};
use std::fmt;

/// Detects use of a thread-confined object from a non-owning thread.
///
/// The owner is the thread that constructed the guard or most recently
/// called [`transfer_ownership`](Self::transfer_ownership).
///
/// # Thread Safety
///
/// The owner token lives in an [`AtomicThreadToken`], so a thread reading it
/// while another thread transfers ownership sees either the old or the new
/// owner. Either way a third thread is never mistaken for the owner.
pub struct ThreadAffinityGuard {
    /// Label used in violation messages.
    identifier: String,

    /// Fixed at construction; when false every check succeeds.
    enforce: bool,

    /// Current owner.
    owner: AtomicThreadToken,
}

impl ThreadAffinityGuard {
    /// Calling-thread rules for each guard operation.
    pub const CONTRACT: &'static [OperationContract] = &[
        OperationContract::new("new", ThreadSafety::ThreadSafe),
        OperationContract::new("is_owner", ThreadSafety::ThreadSafe),
        OperationContract::new("is_enforcing", ThreadSafety::ThreadSafe),
        OperationContract::new("check_access", ThreadSafety::Enforced),
        OperationContract::new("transfer_ownership", ThreadSafety::Unsafe),
    ];

    /// Create an enforcing guard owned by the calling thread.
    ///
    /// Construct the guard on the thread meant to own the object.
    pub fn new(identifier: impl Into<String>) -> Self {
        Self::with_enforcement(identifier, true)
    }

    /// Create a guard owned by the calling thread.
    ///
    /// # Arguments
    /// * `identifier` - Label used in violation messages
    /// * `enforce` - When false, [`check_access`](Self::check_access) never fails
    pub fn with_enforcement(identifier: impl Into<String>, enforce: bool) -> Self {
        ThreadAffinityGuard {
            identifier: identifier.into(),
            enforce,
            owner: AtomicThreadToken::new(ThreadToken::current()),
        }
    }

    /// Create a builder for guard configuration.
    pub fn builder(identifier: impl Into<String>) -> GuardBuilder {
        GuardBuilder::new(identifier)
    }

    /// Label used in violation messages.
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Whether [`check_access`](Self::check_access) can fail.
    pub fn is_enforcing(&self) -> bool {
        self.enforce
    }

    /// Current owner.
    ///
    /// Diagnostic only: by the time the caller looks at the value another
    /// thread may already have taken ownership.
    pub fn owner(&self) -> ThreadToken {
        self.owner.load()
    }

    /// Whether the calling thread is the current owner.
    pub fn is_owner(&self) -> bool {
        self.owner.holds(ThreadToken::current())
    }

    /// Verify the calling thread owns the guarded object.
    ///
    /// Call this at the top of every operation that must not run from
    /// multiple threads. Always succeeds when enforcement is disabled.
    ///
    /// # Errors
    /// [`AccessViolation`] when enforcement is enabled and the caller is not
    /// the owner.
    pub fn check_access(&self) -> Result<(), AccessViolation> {
        if !self.enforce {
            return Ok(());
        }

        let caller = ThreadToken::current();
        if self.owner.holds(caller) {
            return Ok(());
        }

        tracing::warn!(
            identifier = %self.identifier,
            owner = %self.owner.load(),
            caller = %caller,
            "Cross-thread access rejected"
        );
        Err(AccessViolation::new(self.identifier.as_str()))
    }

    /// Make the calling thread the owner.
    ///
    /// Unconditional: the previous owner is not consulted, and enforcement
    /// does not matter. Only call this after the previous owner has stopped
    /// using the object and handed it over through some external
    /// synchronization.
    pub fn transfer_ownership(&self) {
        let caller = ThreadToken::current();
        let previous = self.owner.swap(caller);

        if previous != caller {
            tracing::debug!(
                identifier = %self.identifier,
                from = %previous,
                to = %caller,
                "Thread ownership transferred"
            );
        }
    }
}

impl fmt::Debug for ThreadAffinityGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThreadAffinityGuard")
            .field("identifier", &self.identifier)
            .field("enforce", &self.enforce)
            .field("owner", &self.owner.load())
            .finish()
    }
}
