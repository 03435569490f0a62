//! # Affinity
//!
//! Runtime thread-affinity guards with explicit ownership handoff.
//!
//! A guard is embedded in an object that must only be used from one thread
//! at a time. Methods on that object call `check_access()` first; a call from
//! any other thread fails with an access violation. Ownership moves only when
//! the new thread calls `transfer_ownership()` after the old owner has handed
//! the object over.
//!
//! ## Quick Start
//!
//! ```ignore
//! use affinity::prelude::*;
//!
//! struct Cache {
//!     guard: ThreadAffinityGuard,
//!     entries: Vec<String>,
//! }
//!
//! impl Cache {
//!     fn insert(&mut self, entry: String) -> Result<()> {
//!         self.guard.check_access()?;
//!         self.entries.push(entry);
//!         Ok(())
//!     }
//! }
//!
//! let mut cache = Cache { guard: ThreadAffinityGuard::new("cache"), entries: Vec::new() };
//! cache.insert("a".into())?;
//!
//! // Hand the cache to a worker
//! std::thread::spawn(move || {
//!     cache.guard.transfer_ownership();
//!     cache.insert("b".into())
//! });
//! ```
//!
//! ## Enforcement
//!
//! Guards built with enforcement disabled never report violations. Use
//! [`GuardBuilder::enforce_in_debug`] to validate invariants in tests and
//! skip the check in release builds.

#![warn(missing_docs)]

mod error;

pub mod prelude;

// Re-export main entry points
pub use affinity_concurrency::{Affine, GuardBuilder, ThreadAffinityGuard};
pub use affinity_core::{AccessViolation, OperationContract, ThreadSafety, ThreadToken};
pub use error::{Error, Result};
