//! Values confined to one thread at a time
//!
//! `Affine<T>` bundles a value with the guard that protects it, so every
//! access goes through [`ThreadAffinityGuard::check_access`] first.

use crate::guard::ThreadAffinityGuard;
use affinity_core::AccessViolation;

/// A value that may only be accessed from its owning thread.
///
/// Ownership starts with the constructing thread and moves with
/// [`Affine::transfer_ownership`]. `Affine<T>` is `Send`/`Sync` exactly when
/// `T` is, so the compiler still rules out what it can; the guard catches
/// the handoff mistakes it cannot.
#[derive(Debug)]
pub struct Affine<T> {
    guard: ThreadAffinityGuard,
    value: T,
}

impl<T> Affine<T> {
    /// Wrap `value` in an enforcing guard owned by the calling thread.
    pub fn new(identifier: impl Into<String>, value: T) -> Self {
        Self::with_guard(ThreadAffinityGuard::new(identifier), value)
    }

    /// Wrap `value` with a preconfigured guard.
    pub fn with_guard(guard: ThreadAffinityGuard, value: T) -> Self {
        Affine { guard, value }
    }

    /// The guard protecting this value.
    pub fn guard(&self) -> &ThreadAffinityGuard {
        &self.guard
    }

    /// Borrow the value.
    pub fn get(&self) -> Result<&T, AccessViolation> {
        self.guard.check_access()?;
        Ok(&self.value)
    }

    /// Mutably borrow the value.
    pub fn get_mut(&mut self) -> Result<&mut T, AccessViolation> {
        self.guard.check_access()?;
        Ok(&mut self.value)
    }

    /// Run `f` against the value.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> Result<R, AccessViolation> {
        self.get().map(f)
    }

    /// Make the calling thread the owner.
    ///
    /// See [`ThreadAffinityGuard::transfer_ownership`] for the handoff
    /// contract.
    pub fn transfer_ownership(&self) {
        self.guard.transfer_ownership();
    }

    /// Unwrap the value.
    ///
    /// Not checked: holding `self` by value already proves no other thread
    /// can reach it.
    pub fn into_inner(self) -> T {
        self.value
    }
}
