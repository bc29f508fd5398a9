// crates/trellis-core/src/size_spec.rs
use glam::Vec2;

/// Per-axis size requirement negotiated between a node and its parent.
///
/// A weight of `0.0` pins the node to its minimum along that axis; a
/// positive weight claims a proportional share of whatever space is left
/// over once every sibling's minimum is satisfied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeSpec {
    pub w_min: f32,
    pub h_min: f32,
    pub w_weight: f32,
    pub h_weight: f32,
}

impl SizeSpec {
    pub fn new(w_min: f32, h_min: f32, w_weight: f32, h_weight: f32) -> Self {
        Self {
            w_min,
            h_min,
            w_weight,
            h_weight,
        }
    }

    /// A spec with zero minima that grows freely on both axes.
    pub fn flexible() -> Self {
        Self::default()
    }

    /// A spec pinned to exactly `w` by `h` on both axes.
    pub fn fixed(w: f32, h: f32) -> Self {
        Self::new(w, h, 0.0, 0.0)
    }

    pub fn with_w_min(mut self, w_min: f32) -> Self {
        self.w_min = w_min;
        self
    }

    pub fn with_h_min(mut self, h_min: f32) -> Self {
        self.h_min = h_min;
        self
    }

    pub fn with_w_weight(mut self, w_weight: f32) -> Self {
        self.w_weight = w_weight;
        self
    }

    pub fn with_h_weight(mut self, h_weight: f32) -> Self {
        self.h_weight = h_weight;
        self
    }

    /// Minimum extent along `axis`.
    pub fn min(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Horizontal => self.w_min,
            Axis::Vertical => self.h_min,
        }
    }

    /// Flex weight along `axis`.
    pub fn weight(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Horizontal => self.w_weight,
            Axis::Vertical => self.h_weight,
        }
    }
}

impl Default for SizeSpec {
    fn default() -> Self {
        Self {
            w_min: 0.0,
            h_min: 0.0,
            w_weight: 1.0,
            h_weight: 1.0,
        }
    }
}

/// The axis a frame stacks its children along.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    pub fn perpendicular(&self) -> Axis {
        match self {
            Axis::Horizontal => Axis::Vertical,
            Axis::Vertical => Axis::Horizontal,
        }
    }

    /// Extent of `size` along this axis.
    pub fn main(&self, size: Vec2) -> f32 {
        match self {
            Axis::Horizontal => size.x,
            Axis::Vertical => size.y,
        }
    }

    /// Extent of `size` along the perpendicular axis.
    pub fn cross(&self, size: Vec2) -> f32 {
        match self {
            Axis::Horizontal => size.y,
            Axis::Vertical => size.x,
        }
    }

    /// Recombine a main-axis and cross-axis extent into a size.
    pub fn pack(&self, main: f32, cross: f32) -> Vec2 {
        match self {
            Axis::Horizontal => Vec2::new(main, cross),
            Axis::Vertical => Vec2::new(cross, main),
        }
    }

    /// Anchor position for a child placed at stacking offset `cursor`.
    pub fn offset(&self, cursor: f32) -> Vec2 {
        match self {
            Axis::Horizontal => Vec2::new(cursor, 0.0),
            Axis::Vertical => Vec2::new(0.0, cursor),
        }
    }

    /// Advance the placement cursor past a child of extent `extent`.
    ///
    /// Horizontal stacking runs left to right (offsets increase); vertical
    /// stacking runs top-down in scene coordinates, so offsets decrease and
    /// the first child sits highest.
    pub fn advance(&self, cursor: f32, extent: f32) -> f32 {
        match self {
            Axis::Horizontal => cursor + extent,
            Axis::Vertical => cursor - extent,
        }
    }
}
