//! Core types for affinity
//!
//! This crate defines the foundational types shared by the guard layer:
//! - ThreadToken: opaque, never-reused thread identity
//! - AtomicThreadToken: tear-free shared cell for a ThreadToken
//! - AccessViolation: the single error a guard can report
//! - ThreadSafety: contract metadata describing how an operation may be called

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod contract;
pub mod error;
pub mod thread;

pub use contract::{OperationContract, ThreadSafety};
pub use error::AccessViolation;
pub use thread::{AtomicThreadToken, ThreadToken};
