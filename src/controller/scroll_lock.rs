//! RAII scroll lock held while a detail view is open.
//!
//! While a modal or drawer is up, the page behind it must not scroll. The
//! lock is exclusive: a second acquisition attempt while the guard lives is
//! refused, and the guard releases on [`Drop`] on every exit path — explicit
//! close, Escape, or the controller being torn down.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Handle to a page's scroll-lock flag. Cloneable so the render layer can
/// consult the same flag the controller acquires through.
#[derive(Debug, Clone, Default)]
pub struct ScrollLock {
    locked: Arc<AtomicBool>,
}

impl ScrollLock {
    /// New unlocked handle.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Acquire the exclusive lock. Returns `None` if it is already held.
    #[must_use]
    pub fn acquire(&self) -> Option<ScrollLockGuard> {
        self.locked
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| ScrollLockGuard {
                locked: Arc::clone(&self.locked),
            })
    }

    /// Whether the page scroll is currently locked.
    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.locked.load(Ordering::Acquire)
    }
}

/// Guard for an acquired scroll lock. Releases on drop.
#[derive(Debug)]
pub struct ScrollLockGuard {
    locked: Arc<AtomicBool>,
}

impl Drop for ScrollLockGuard {
    fn drop(&mut self) {
        self.locked.store(false, Ordering::Release);
    }
}
