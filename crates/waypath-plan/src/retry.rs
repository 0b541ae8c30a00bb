//! Bounded retry helper for embedders.
//!
//! Planning inputs sometimes are not ready the moment a caller wants a
//! path (obstacle fields still loading, waypoints not yet placed). This
//! helper runs a fallible attempt a bounded number of times and reports
//! giving up as a value rather than an error, so "proceed without a path"
//! stays an ordinary, explicit branch in the caller. Pacing between
//! attempts is the embedder's business; `run` never sleeps.

/// Default attempt bound.
pub const DEFAULT_MAX_ATTEMPTS: usize = 50;

/// Outcome of a bounded retry loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryOutcome<T> {
    /// An attempt produced a value.
    Ready(T),
    /// Every attempt came up empty.
    GaveUp,
}

impl<T> RetryOutcome<T> {
    /// Returns `true` if the loop exhausted its attempts.
    #[must_use]
    pub const fn gave_up(&self) -> bool {
        matches!(self, Self::GaveUp)
    }

    /// Converts into an `Option`, discarding the give-up marker.
    #[must_use]
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Ready(value) => Some(value),
            Self::GaveUp => None,
        }
    }
}

/// Runs an attempt closure up to a fixed number of times.
///
/// # Example
///
/// ```
/// use waypath_plan::{RetryOutcome, RetryPolicy};
///
/// let policy = RetryPolicy::new(5);
/// let outcome = policy.run(|attempt| (attempt >= 2).then_some(attempt));
/// assert_eq!(outcome, RetryOutcome::Ready(2));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    max_attempts: usize,
}

impl RetryPolicy {
    /// Creates a policy with the given attempt bound.
    #[must_use]
    pub const fn new(max_attempts: usize) -> Self {
        Self { max_attempts }
    }

    /// Returns the attempt bound.
    #[must_use]
    pub const fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    /// Calls `attempt` with the attempt index until it yields a value or
    /// the bound is reached.
    pub fn run<T>(&self, mut attempt: impl FnMut(usize) -> Option<T>) -> RetryOutcome<T> {
        for index in 0..self.max_attempts {
            if let Some(value) = attempt(index) {
                return RetryOutcome::Ready(value);
            }
        }
        RetryOutcome::GaveUp
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ATTEMPTS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_success_short_circuits() {
        let mut calls = 0;
        let outcome = RetryPolicy::new(10).run(|_| {
            calls += 1;
            Some("ready")
        });
        assert_eq!(outcome, RetryOutcome::Ready("ready"));
        assert_eq!(calls, 1);
    }

    #[test]
    fn exhaustion_gives_up() {
        let mut calls = 0;
        let outcome: RetryOutcome<()> = RetryPolicy::new(7).run(|_| {
            calls += 1;
            None
        });
        assert!(outcome.gave_up());
        assert_eq!(outcome.into_option(), None);
        assert_eq!(calls, 7);
    }

    #[test]
    fn attempt_indices_count_up_from_zero() {
        let mut seen = Vec::new();
        let _: RetryOutcome<()> = RetryPolicy::new(3).run(|i| {
            seen.push(i);
            None
        });
        assert_eq!(seen, vec![0, 1, 2]);
    }

    #[test]
    fn zero_attempts_never_calls() {
        let outcome: RetryOutcome<i32> = RetryPolicy::new(0).run(|_| unreachable!());
        assert!(outcome.gave_up());
    }

    #[test]
    fn default_bound_matches_constant() {
        assert_eq!(RetryPolicy::default().max_attempts(), DEFAULT_MAX_ATTEMPTS);
    }
}
