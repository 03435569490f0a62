//! Thread-safety contract metadata
//!
//! Describes how each operation of a thread-confined type may be called.
//! These values are documentation only; nothing checks them at runtime.
//!
//! | Class | Meaning |
//! |-------|---------|
//! | ThreadSafe | May be called from any thread at any time |
//! | Enforced | Verifies the caller owns the object and fails otherwise |
//! | Unsafe | Caller must provide external synchronization |

use std::fmt;

/// Thread-safety class of an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThreadSafety {
    /// Callable from any thread.
    ThreadSafe,
    /// Checks ownership and reports a violation for non-owners.
    Enforced,
    /// Requires an external handoff before it is called.
    Unsafe,
}

impl ThreadSafety {
    /// Canonical name.
    pub fn as_str(&self) -> &'static str {
        match self {
            ThreadSafety::ThreadSafe => "ThreadSafe",
            ThreadSafety::Enforced => "Enforced",
            ThreadSafety::Unsafe => "Unsafe",
        }
    }

    /// Whether any thread may call the operation without coordination.
    pub fn is_callable_from_any_thread(&self) -> bool {
        matches!(self, ThreadSafety::ThreadSafe)
    }
}

impl fmt::Display for ThreadSafety {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Contract entry for a single named operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperationContract {
    /// Method name.
    pub operation: &'static str,
    /// How the method may be called.
    pub safety: ThreadSafety,
}

impl OperationContract {
    /// Create a contract entry.
    pub const fn new(operation: &'static str, safety: ThreadSafety) -> Self {
        Self { operation, safety }
    }

    /// Look up `operation` in a contract table.
    pub fn find<'a>(
        table: &'a [OperationContract],
        operation: &str,
    ) -> Option<&'a OperationContract> {
        table.iter().find(|entry| entry.operation == operation)
    }
}
