//! The content-list controller: ordered/filtered views, the detail-view
//! selection cursor, keyboard routing, and the scoped page resources
//! (scroll lock, listener set) that bracket an open detail view.

pub mod input;
pub mod model;
pub mod scroll_lock;
pub mod update;

#[cfg(test)]
mod test_properties;

pub use input::{InputAction, InputContext, InputResolution, Key, ListenerRegistry, resolve_key};
pub use model::{DetailPhase, Direction, ListController, PendingClear, Selection};
pub use scroll_lock::{ScrollLock, ScrollLockGuard};
pub use update::{ListCmd, ListMsg, update};
