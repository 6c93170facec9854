//! Keyboard routing and the listener-set registry.
//!
//! The documented bindings are part of the external contract: Escape closes
//! the open detail view, Left/Right arrows navigate it. Resolution is
//! deterministic with overlay precedence — an open filter dropdown consumes
//! Escape before the detail view sees it.
//!
//! Listener sets are a scoped resource: one set is registered on the
//! transition into `Open` and deregistered on the transition out, with the
//! registry refusing a second concurrent registration so repeated open/close
//! cycles can never stack duplicate handlers.

#![allow(missing_docs)]

use std::sync::Arc;

use parking_lot::Mutex;

/// Keys the engine cares about. Anything else arrives as `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    ArrowLeft,
    ArrowRight,
    Enter,
    Char(char),
    Other,
}

/// Snapshot of the UI state the resolver needs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputContext {
    /// A detail view (modal or drawer) is open.
    pub detail_open: bool,
    /// The floating filter dropdown is open (projects page).
    pub dropdown_open: bool,
}

/// Action produced by key resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    CloseDropdown,
    CloseDetail,
    NavigatePrev,
    NavigateNext,
}

/// Outcome of routing one key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputResolution {
    pub action: Option<InputAction>,
    pub consumed: bool,
}

impl InputResolution {
    const fn action(action: InputAction) -> Self {
        Self {
            action: Some(action),
            consumed: true,
        }
    }

    const fn passthrough() -> Self {
        Self {
            action: None,
            consumed: false,
        }
    }
}

/// Resolve a key event using deterministic precedence rules:
/// dropdown first, then the open detail view; everything else passes through.
#[must_use]
pub fn resolve_key(key: Key, context: InputContext) -> InputResolution {
    if context.dropdown_open && key == Key::Escape {
        return InputResolution::action(InputAction::CloseDropdown);
    }
    if context.detail_open {
        return match key {
            Key::Escape => InputResolution::action(InputAction::CloseDetail),
            Key::ArrowLeft => InputResolution::action(InputAction::NavigatePrev),
            Key::ArrowRight => InputResolution::action(InputAction::NavigateNext),
            _ => InputResolution::passthrough(),
        };
    }
    InputResolution::passthrough()
}

/// Registry enforcing at most one active listener set per page.
#[derive(Debug, Clone, Default)]
pub struct ListenerRegistry {
    active: Arc<Mutex<Option<&'static str>>>,
}

impl ListenerRegistry {
    /// New empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a named listener set. Returns `None` if a set is already
    /// active — callers must deregister (drop the guard) first.
    #[must_use]
    pub fn register(&self, set: &'static str) -> Option<KeyListenerGuard> {
        let mut active = self.active.lock();
        if active.is_some() {
            return None;
        }
        *active = Some(set);
        Some(KeyListenerGuard {
            active: Arc::clone(&self.active),
        })
    }

    /// Name of the active listener set, if any.
    #[must_use]
    pub fn active(&self) -> Option<&'static str> {
        *self.active.lock()
    }
}

/// Guard for a registered listener set. Deregisters on drop.
#[derive(Debug)]
pub struct KeyListenerGuard {
    active: Arc<Mutex<Option<&'static str>>>,
}

impl Drop for KeyListenerGuard {
    fn drop(&mut self) {
        *self.active.lock() = None;
    }
}
