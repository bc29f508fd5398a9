// crates/trellis-scene/src/lib.rs
use glam::Vec2;
use trellis_core::{LayoutResult, PanelRect, TextAlignment, WidgetConfig};

pub mod events;
pub use events::*;

/// Scrollbar region thickness reported by a scroll container.
///
/// The vertical bar consumes width, the horizontal bar consumes height.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollbarThickness {
    pub vertical: f32,
    pub horizontal: f32,
}

/// Capabilities the layout engine consumes from the host scene graph.
///
/// Handles are opaque references to positioned or visual objects owned by
/// the backend. Destroying a node handle destroys everything parented under
/// it; the layout tree relies on that for composite teardown.
pub trait SceneBackend {
    /// Positioned attachment point in the scene graph.
    type NodeHandle: Clone;
    /// A leaf visual widget.
    type WidgetHandle;
    /// A scroll container widget with a content canvas.
    type ScrollHandle;

    /// Top-level coordinate frame, origin at the viewport's top-left corner.
    fn root_node(&mut self) -> LayoutResult<Self::NodeHandle>;

    fn attach_node(
        &mut self,
        parent: &Self::NodeHandle,
        name: &str,
    ) -> LayoutResult<Self::NodeHandle>;

    fn set_node_position(&mut self, node: &Self::NodeHandle, position: Vec2) -> LayoutResult<()>;

    /// Destroy a node and its whole subtree (widgets included).
    fn remove_node(&mut self, node: &Self::NodeHandle) -> LayoutResult<()>;

    /// Instantiate a leaf widget from an opaque configuration record.
    fn create_widget(
        &mut self,
        parent: &Self::NodeHandle,
        config: &WidgetConfig,
    ) -> LayoutResult<Self::WidgetHandle>;

    fn set_widget_frame(
        &mut self,
        widget: &Self::WidgetHandle,
        frame: PanelRect,
    ) -> LayoutResult<()>;

    fn set_widget_text_anchor(
        &mut self,
        widget: &Self::WidgetHandle,
        offset: Vec2,
        alignment: TextAlignment,
    ) -> LayoutResult<()>;

    fn remove_widget(&mut self, widget: &Self::WidgetHandle) -> LayoutResult<()>;

    fn create_scroll_container(
        &mut self,
        parent: &Self::NodeHandle,
    ) -> LayoutResult<Self::ScrollHandle>;

    /// Content attachment node of a scroll container.
    fn scroll_canvas(&self, scroll: &Self::ScrollHandle) -> LayoutResult<Self::NodeHandle>;

    /// Outer frame of the scroll container.
    fn set_scroll_frame(
        &mut self,
        scroll: &Self::ScrollHandle,
        frame: PanelRect,
    ) -> LayoutResult<()>;

    /// Extent of the scrollable canvas inside the container.
    fn set_scroll_canvas(
        &mut self,
        scroll: &Self::ScrollHandle,
        canvas: PanelRect,
    ) -> LayoutResult<()>;

    /// Bar thickness for this container; valid once the frame has been set.
    fn scrollbar_thickness(
        &self,
        scroll: &Self::ScrollHandle,
    ) -> LayoutResult<ScrollbarThickness>;

    fn remove_scroll_container(&mut self, scroll: &Self::ScrollHandle) -> LayoutResult<()>;

    /// Current viewport extent in scene units.
    fn viewport_size(&self) -> Vec2;
}
