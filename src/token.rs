//! Sources for the tokens [`RoutedCall::unique`](crate::RoutedCall::unique) appends.
//!
//! Tokens are cache-busters, not secrets: collisions are harmless and none of
//! the sources here are cryptographically secure.

use crate::compat::Vec;
use core::sync::atomic::{AtomicUsize, Ordering};

/// Produces uniquification tokens.
///
/// Implementations are shared between threads, so they must handle their own
/// synchronization.
pub trait TokenSource: Send + Sync {
    fn next_token(&self) -> i64;
}

impl<F> TokenSource for F
where
    F: Fn() -> i64 + Send + Sync,
{
    fn next_token(&self) -> i64 {
        self()
    }
}

/// Uniformly distributed tokens over the whole `i64` range.
///
/// Backed by `fastrand`'s thread-local generator, seeded per thread from the
/// OS, so concurrent callers never contend on a lock.
#[cfg(feature = "std")]
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomTokens;

#[cfg(feature = "std")]
impl TokenSource for RandomTokens {
    fn next_token(&self) -> i64 {
        fastrand::i64(..)
    }
}

/// Always yields the same token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedToken(pub i64);

impl TokenSource for FixedToken {
    fn next_token(&self) -> i64 {
        self.0
    }
}

/// Cycles through a fixed list of tokens, restarting at the front when exhausted.
#[derive(Debug)]
pub struct SequenceTokens {
    tokens: Vec<i64>,
    cursor: AtomicUsize,
}

impl SequenceTokens {
    /// Create a sequence; an empty list always yields `0`
    pub fn new(tokens: impl Into<Vec<i64>>) -> Self {
        Self {
            tokens: tokens.into(),
            cursor: AtomicUsize::new(0),
        }
    }

    /// Create a reproducible pseudo-random sequence from a seed
    pub fn seeded(seed: u64, len: usize) -> Self {
        let mut rng = fastrand::Rng::with_seed(seed);
        Self::new((0..len).map(|_| rng.i64(..)).collect::<Vec<_>>())
    }
}

impl TokenSource for SequenceTokens {
    fn next_token(&self) -> i64 {
        if self.tokens.is_empty() {
            return 0;
        }
        let index = self.cursor.fetch_add(1, Ordering::Relaxed) % self.tokens.len();
        self.tokens[index]
    }
}
