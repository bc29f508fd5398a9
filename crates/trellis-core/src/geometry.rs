// crates/trellis-core/src/geometry.rs
use glam::Vec2;

/// A widget geometry rectangle in scene coordinates.
///
/// A panel hangs right-and-down from its anchor node: the anchor sits at the
/// panel's top-left corner, so the rectangle spans `[0, width]` horizontally
/// and `[-height, 0]` vertically. This matches the top-down coordinate
/// convention used by the scene backend.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelRect {
    pub left: f32,
    pub right: f32,
    pub bottom: f32,
    pub top: f32,
}

impl PanelRect {
    pub fn new(left: f32, right: f32, bottom: f32, top: f32) -> Self {
        Self {
            left,
            right,
            bottom,
            top,
        }
    }

    /// Rectangle of the given extent hanging from its top-left anchor.
    pub fn from_extent(width: f32, height: f32) -> Self {
        Self::new(0.0, width, -height, 0.0)
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.top - self.bottom
    }

    pub fn extent(&self) -> Vec2 {
        Vec2::new(self.width(), self.height())
    }
}
