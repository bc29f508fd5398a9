// crates/trellis-core/src/lib.rs
pub mod geometry;
pub mod size_spec;
pub mod widget;

pub use geometry::*;
pub use size_spec::*;
pub use widget::*;

#[derive(Debug, thiserror::Error)]
pub enum LayoutError {
    #[error("Child index {index} out of range for frame of {len} children")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Cannot resize a frame with no children")]
    EmptyFrame,

    #[error("Node is not bound to the scene (create it before resizing or mutating)")]
    NotCreated,

    #[error("Node is already bound to the scene")]
    AlreadyCreated,

    #[error("Scene backend error: {0}")]
    Backend(String),
}

pub type LayoutResult<T> = std::result::Result<T, LayoutError>;
