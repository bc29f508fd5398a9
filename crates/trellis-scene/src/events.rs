// crates/trellis-scene/src/events.rs
use glam::Vec2;

/// Notifications the host run loop delivers to the layout root.
///
/// The backend owns the event loop; the layout engine only reacts. A
/// `Tick` arrives once per host frame, `ViewportResized` whenever the
/// top-level extent changes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SceneEvent {
    ViewportResized(Vec2),
    Tick,
}
