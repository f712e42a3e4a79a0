use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// A cooperative stop signal, polled by the search at every recursive entry.
///
/// Clones share the same flag, so any clone may cancel. A token also trips once its deadline, if any, has passed.
#[derive(Clone, Debug, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
    deadline: Option<Instant>,
}

impl CancelToken {
    /// A token with no deadline that has not been cancelled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Tighten the deadline to `deadline`, keeping an earlier one if already set.
    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(match self.deadline {
            Some(existing) => existing.min(deadline),
            None => deadline,
        });
        self
    }

    /// Tighten the deadline to `timeout` from now. A timeout too long to represent as an [`Instant`] leaves the deadline as it was.
    pub fn with_timeout(self, timeout: Duration) -> Self {
        match Instant::now().checked_add(timeout) {
            Some(deadline) => self.with_deadline(deadline),
            None => self,
        }
    }

    /// The deadline in effect, if any.
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Signal every clone of this token.
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    /// Whether the token was cancelled or its deadline has passed.
    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Relaxed) || self.deadline.is_some_and(|deadline| Instant::now() >= deadline)
    }
}
