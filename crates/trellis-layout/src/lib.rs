// crates/trellis-layout/src/lib.rs
pub mod frame;
pub mod leaf;
pub mod node;
pub mod root;
pub mod scroll;
pub mod tools;

pub use frame::*;
pub use leaf::*;
pub use node::*;
pub use root::*;
pub use scroll::*;
pub use tools::*;

pub use trellis_core::{
    Axis, AttrValue, LayoutError, LayoutResult, PanelRect, SizeSpec, TextAlignment, WidgetConfig,
};
