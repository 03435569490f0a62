//! Thread identity tokens
//!
//! `std::thread::ThreadId` cannot be stored in an atomic, so every thread is
//! lazily assigned a `u64` token from a process-wide counter instead. The
//! counter only moves forward, which means a token is never handed to a
//! second thread even after the first one has exited.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Next token to hand out. Zero is reserved and never handed out.
static NEXT_TOKEN: AtomicU64 = AtomicU64::new(1);

thread_local! {
    static CURRENT: ThreadToken = ThreadToken::allocate();
}

/// Opaque identity of a thread.
///
/// Tokens are cheap to copy and compare. Two tokens are equal iff they were
/// obtained on the same thread. The only way to get one is
/// [`ThreadToken::current`]; a raw value cannot be turned back into a token
/// outside this crate.
///
/// ```compile_fail
/// use affinity_core::ThreadToken;
///
/// let owner = ThreadToken::current().as_u64();
/// let forged = ThreadToken::from_raw(owner);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ThreadToken(u64);

impl ThreadToken {
    /// Token of the calling thread.
    pub fn current() -> Self {
        CURRENT.with(|token| *token)
    }

    /// Raw representation, for logging and diagnostics.
    pub fn as_u64(self) -> u64 {
        self.0
    }

    /// Rebuild a token from a value previously returned by [`ThreadToken::as_u64`].
    pub(crate) fn from_raw(raw: u64) -> Self {
        ThreadToken(raw)
    }

    fn allocate() -> Self {
        // Wrapping back to the reserved zero takes 2^64 thread creations
        ThreadToken(NEXT_TOKEN.fetch_add(1, Ordering::Relaxed))
    }
}

/// Atomic cell holding a [`ThreadToken`].
///
/// Loads and stores are single machine-word atomics, so a reader observes
/// either the old token or the new one, never a mixture of both.
#[derive(Debug)]
pub struct AtomicThreadToken {
    raw: AtomicU64,
}

impl AtomicThreadToken {
    /// Create a cell holding `token`.
    pub fn new(token: ThreadToken) -> Self {
        Self {
            raw: AtomicU64::new(token.as_u64()),
        }
    }

    /// Current token.
    pub fn load(&self) -> ThreadToken {
        ThreadToken::from_raw(self.raw.load(Ordering::SeqCst))
    }

    /// Replace the token, returning the previous one.
    pub fn swap(&self, token: ThreadToken) -> ThreadToken {
        ThreadToken::from_raw(self.raw.swap(token.as_u64(), Ordering::SeqCst))
    }

    /// Whether the cell currently holds `token`.
    pub fn holds(&self, token: ThreadToken) -> bool {
        self.raw.load(Ordering::SeqCst) == token.as_u64()
    }
}

impl fmt::Display for ThreadToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "thread#{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashSet;
    use std::thread;

    #[test]
    fn test_current_is_stable_on_one_thread() {
        let a = ThreadToken::current();
        let b = ThreadToken::current();
        assert_eq!(a, b);
    }

    #[test]
    fn test_other_thread_gets_other_token() {
        let here = ThreadToken::current();
        let there = thread::spawn(ThreadToken::current).join().unwrap();
        assert_ne!(here, there);
    }

    #[test]
    fn test_raw_round_trip() {
        let token = ThreadToken::current();
        assert_eq!(ThreadToken::from_raw(token.as_u64()), token);
        assert_ne!(token.as_u64(), 0);
    }

    #[test]
    fn test_remote_thread_cannot_obtain_owner_token() {
        let owner = ThreadToken::current();
        let cell = AtomicThreadToken::new(owner);

        // Another thread can only mint its own token
        let (remote, remote_holds) =
            thread::spawn(move || (ThreadToken::current(), cell.holds(ThreadToken::current())))
                .join()
                .unwrap();
        assert_ne!(remote, owner);
        assert!(!remote_holds);
    }

    #[test]
    fn test_tokens_not_reused_after_exit() {
        // Run sequentially so the OS is free to recycle native thread ids.
        let mut seen = HashSet::new();
        for _ in 0..32 {
            let token = thread::spawn(ThreadToken::current).join().unwrap();
            assert!(seen.insert(token), "token {} handed out twice", token);
        }
    }

    #[test]
    fn test_atomic_swap_returns_previous() {
        let here = ThreadToken::current();
        let there = thread::spawn(ThreadToken::current).join().unwrap();

        let cell = AtomicThreadToken::new(here);
        assert!(cell.holds(here));
        assert_eq!(cell.swap(there), here);
        assert_eq!(cell.load(), there);
        assert!(!cell.holds(here));
    }

    #[test]
    fn test_display() {
        let token = ThreadToken::from_raw(7);
        assert_eq!(token.to_string(), "thread#7");
    }

    proptest! {
        #[test]
        fn prop_concurrent_threads_get_distinct_tokens(n in 1usize..16) {
            let handles: Vec<_> = (0..n).map(|_| thread::spawn(ThreadToken::current)).collect();
            let tokens: HashSet<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
            prop_assert_eq!(tokens.len(), n);
            prop_assert!(!tokens.contains(&ThreadToken::current()));
        }
    }
}
