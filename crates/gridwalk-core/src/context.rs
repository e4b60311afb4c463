//! Cooperative cancellation for searches.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Shared cancellation flag.
///
/// Searches poll it once per frontier pop, so a run can be stopped from
/// another thread holding a clone.
#[derive(Clone, Debug, Default)]
pub struct Context {
    cancelled: Arc<AtomicBool>,
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }

    /// Ask every holder of this context to stop. Cannot be undone.
    #[inline]
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_the_flag() {
        let ctx = Context::new();
        let other = ctx.clone();
        assert!(!other.is_cancelled());
        ctx.cancel();
        assert!(other.is_cancelled());
        assert!(!Context::default().is_cancelled());
    }
}
