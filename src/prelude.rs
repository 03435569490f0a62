//! Convenient imports for affinity.
//!
//! ```ignore
//! use affinity::prelude::*;
//!
//! let guard = ThreadAffinityGuard::new("cache");
//! guard.check_access()?;
//! ```

// Guards
pub use crate::{Affine, GuardBuilder, ThreadAffinityGuard};

// Error handling
pub use crate::error::{Error, Result};
pub use crate::AccessViolation;

// Identity and contract metadata
pub use crate::{ThreadSafety, ThreadToken};
