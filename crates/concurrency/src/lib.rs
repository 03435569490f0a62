//! Concurrency layer for affinity
//!
//! This crate implements single-owner thread confinement with explicit
//! handoff:
//! - ThreadAffinityGuard: detects calls from a non-owning thread
//! - GuardBuilder: enforcement policy at construction time
//! - Affine: a value bundled with the guard that protects it
//!
//! Nothing here blocks. Violations are detected and reported, never waited out.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod affine;
pub mod config;
pub mod guard;

pub use affine::Affine;
pub use config::GuardBuilder;
pub use guard::ThreadAffinityGuard;

// Re-export the core types guard users need
pub use affinity_core::{AccessViolation, ThreadSafety, ThreadToken};
