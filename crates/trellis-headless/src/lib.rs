// crates/trellis-headless/src/lib.rs

//! In-memory scene backend.
//!
//! Records every node, widget and scroll container the layout engine
//! creates, along with the geometry written to them, so tests and headless
//! hosts can inspect the computed layout without a real scene graph.

use std::collections::HashMap;

use glam::Vec2;
use tracing::trace;
use trellis_core::{LayoutError, LayoutResult, PanelRect, TextAlignment, WidgetConfig};
use trellis_scene::{SceneBackend, ScrollbarThickness};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WidgetId(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScrollId(u64);

#[derive(Debug)]
struct NodeRecord {
    parent: Option<u64>,
    name: String,
    position: Vec2,
}

#[derive(Debug)]
struct WidgetRecord {
    parent: u64,
    config: WidgetConfig,
    frame: Option<PanelRect>,
    text_anchor: Option<(Vec2, TextAlignment)>,
}

#[derive(Debug)]
struct ScrollRecord {
    node: u64,
    canvas: u64,
    frame: Option<PanelRect>,
    canvas_rect: Option<PanelRect>,
}

/// Recording backend with integer handles.
pub struct HeadlessScene {
    viewport: Vec2,
    scrollbar: ScrollbarThickness,
    next_id: u64,
    fail_next_widget_create: bool,
    root: Option<u64>,
    nodes: HashMap<u64, NodeRecord>,
    widgets: HashMap<u64, WidgetRecord>,
    scrolls: HashMap<u64, ScrollRecord>,
}

impl HeadlessScene {
    pub fn new(viewport: Vec2) -> Self {
        Self {
            viewport,
            scrollbar: ScrollbarThickness {
                vertical: 0.05,
                horizontal: 0.05,
            },
            next_id: 0,
            fail_next_widget_create: false,
            root: None,
            nodes: HashMap::new(),
            widgets: HashMap::new(),
            scrolls: HashMap::new(),
        }
    }

    pub fn with_scrollbar_thickness(mut self, vertical: f32, horizontal: f32) -> Self {
        self.scrollbar = ScrollbarThickness {
            vertical,
            horizontal,
        };
        self
    }

    /// Simulate a host-side viewport change.
    pub fn set_viewport(&mut self, viewport: Vec2) {
        self.viewport = viewport;
    }

    /// Make the next `create_widget` call fail, for mutation rollback tests.
    pub fn fail_next_widget_create(&mut self) {
        self.fail_next_widget_create = true;
    }

    fn allocate(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }

    fn node(&self, id: u64) -> LayoutResult<&NodeRecord> {
        self.nodes
            .get(&id)
            .ok_or_else(|| LayoutError::Backend(format!("unknown node handle {id}")))
    }

    fn attach(&mut self, parent: Option<u64>, name: &str) -> u64 {
        let id = self.allocate();
        self.nodes.insert(
            id,
            NodeRecord {
                parent,
                name: name.to_string(),
                position: Vec2::ZERO,
            },
        );
        id
    }

    /// Ids of every node in `root`'s subtree, `root` included.
    fn subtree(&self, root: u64) -> Vec<u64> {
        let mut members = vec![root];
        let mut frontier = vec![root];
        while let Some(current) = frontier.pop() {
            for (&id, record) in &self.nodes {
                if record.parent == Some(current) {
                    members.push(id);
                    frontier.push(id);
                }
            }
        }
        members
    }

    fn drop_subtree(&mut self, root: u64) {
        let members = self.subtree(root);
        for id in &members {
            self.nodes.remove(id);
        }
        self.widgets
            .retain(|_, widget| !members.contains(&widget.parent));
        self.scrolls.retain(|_, scroll| !members.contains(&scroll.node));
    }

    // --- Inspection -------------------------------------------------------

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn widget_count(&self) -> usize {
        self.widgets.len()
    }

    pub fn scroll_count(&self) -> usize {
        self.scrolls.len()
    }

    pub fn node_position(&self, node: NodeId) -> Option<Vec2> {
        self.nodes.get(&node.0).map(|record| record.position)
    }

    pub fn node_name(&self, node: NodeId) -> Option<&str> {
        self.nodes.get(&node.0).map(|record| record.name.as_str())
    }

    /// Direct children of `node`, in creation order.
    pub fn children_of(&self, node: NodeId) -> Vec<NodeId> {
        let mut ids: Vec<u64> = self
            .nodes
            .iter()
            .filter(|(_, record)| record.parent == Some(node.0))
            .map(|(&id, _)| id)
            .collect();
        ids.sort_unstable();
        ids.into_iter().map(NodeId).collect()
    }

    /// Widget handles in creation order.
    pub fn widgets(&self) -> Vec<WidgetId> {
        let mut ids: Vec<u64> = self.widgets.keys().copied().collect();
        ids.sort_unstable();
        ids.into_iter().map(WidgetId).collect()
    }

    pub fn widget_frame(&self, widget: WidgetId) -> Option<PanelRect> {
        self.widgets.get(&widget.0).and_then(|record| record.frame)
    }

    /// The positioning anchor the widget hangs under.
    pub fn widget_anchor(&self, widget: WidgetId) -> Option<NodeId> {
        self.widgets.get(&widget.0).map(|record| NodeId(record.parent))
    }

    pub fn widget_config(&self, widget: WidgetId) -> Option<&WidgetConfig> {
        self.widgets.get(&widget.0).map(|record| &record.config)
    }

    pub fn widget_text_anchor(&self, widget: WidgetId) -> Option<(Vec2, TextAlignment)> {
        self.widgets
            .get(&widget.0)
            .and_then(|record| record.text_anchor)
    }

    /// Scroll container handles in creation order.
    pub fn scrolls(&self) -> Vec<ScrollId> {
        let mut ids: Vec<u64> = self.scrolls.keys().copied().collect();
        ids.sort_unstable();
        ids.into_iter().map(ScrollId).collect()
    }

    pub fn scroll_frame(&self, scroll: ScrollId) -> Option<PanelRect> {
        self.scrolls.get(&scroll.0).and_then(|record| record.frame)
    }

    pub fn scroll_canvas_rect(&self, scroll: ScrollId) -> Option<PanelRect> {
        self.scrolls
            .get(&scroll.0)
            .and_then(|record| record.canvas_rect)
    }
}

impl SceneBackend for HeadlessScene {
    type NodeHandle = NodeId;
    type WidgetHandle = WidgetId;
    type ScrollHandle = ScrollId;

    fn root_node(&mut self) -> LayoutResult<NodeId> {
        if let Some(root) = self.root {
            return Ok(NodeId(root));
        }
        let id = self.attach(None, "scene root");
        self.root = Some(id);
        Ok(NodeId(id))
    }

    fn attach_node(&mut self, parent: &NodeId, name: &str) -> LayoutResult<NodeId> {
        self.node(parent.0)?;
        let id = self.attach(Some(parent.0), name);
        trace!(id, parent = parent.0, name, "attached node");
        Ok(NodeId(id))
    }

    fn set_node_position(&mut self, node: &NodeId, position: Vec2) -> LayoutResult<()> {
        let record = self
            .nodes
            .get_mut(&node.0)
            .ok_or_else(|| LayoutError::Backend(format!("unknown node handle {}", node.0)))?;
        record.position = position;
        Ok(())
    }

    fn remove_node(&mut self, node: &NodeId) -> LayoutResult<()> {
        self.node(node.0)?;
        self.drop_subtree(node.0);
        if self.root == Some(node.0) {
            self.root = None;
        }
        Ok(())
    }

    fn create_widget(&mut self, parent: &NodeId, config: &WidgetConfig) -> LayoutResult<WidgetId> {
        if self.fail_next_widget_create {
            self.fail_next_widget_create = false;
            return Err(LayoutError::Backend("widget creation rejected".into()));
        }
        self.node(parent.0)?;
        let id = self.allocate();
        self.widgets.insert(
            id,
            WidgetRecord {
                parent: parent.0,
                config: config.clone(),
                frame: None,
                text_anchor: None,
            },
        );
        trace!(id, parent = parent.0, kind = %config.kind, "created widget");
        Ok(WidgetId(id))
    }

    fn set_widget_frame(&mut self, widget: &WidgetId, frame: PanelRect) -> LayoutResult<()> {
        let record = self
            .widgets
            .get_mut(&widget.0)
            .ok_or_else(|| LayoutError::Backend(format!("unknown widget handle {}", widget.0)))?;
        record.frame = Some(frame);
        Ok(())
    }

    fn set_widget_text_anchor(
        &mut self,
        widget: &WidgetId,
        offset: Vec2,
        alignment: TextAlignment,
    ) -> LayoutResult<()> {
        let record = self
            .widgets
            .get_mut(&widget.0)
            .ok_or_else(|| LayoutError::Backend(format!("unknown widget handle {}", widget.0)))?;
        record.text_anchor = Some((offset, alignment));
        Ok(())
    }

    fn remove_widget(&mut self, widget: &WidgetId) -> LayoutResult<()> {
        self.widgets
            .remove(&widget.0)
            .ok_or_else(|| LayoutError::Backend(format!("unknown widget handle {}", widget.0)))?;
        Ok(())
    }

    fn create_scroll_container(&mut self, parent: &NodeId) -> LayoutResult<ScrollId> {
        self.node(parent.0)?;
        let node = self.attach(Some(parent.0), "scroll container");
        let canvas = self.attach(Some(node), "scroll canvas");
        let id = self.allocate();
        self.scrolls.insert(
            id,
            ScrollRecord {
                node,
                canvas,
                frame: None,
                canvas_rect: None,
            },
        );
        Ok(ScrollId(id))
    }

    fn scroll_canvas(&self, scroll: &ScrollId) -> LayoutResult<NodeId> {
        let record = self
            .scrolls
            .get(&scroll.0)
            .ok_or_else(|| LayoutError::Backend(format!("unknown scroll handle {}", scroll.0)))?;
        Ok(NodeId(record.canvas))
    }

    fn set_scroll_frame(&mut self, scroll: &ScrollId, frame: PanelRect) -> LayoutResult<()> {
        let record = self
            .scrolls
            .get_mut(&scroll.0)
            .ok_or_else(|| LayoutError::Backend(format!("unknown scroll handle {}", scroll.0)))?;
        record.frame = Some(frame);
        Ok(())
    }

    fn set_scroll_canvas(&mut self, scroll: &ScrollId, canvas: PanelRect) -> LayoutResult<()> {
        let record = self
            .scrolls
            .get_mut(&scroll.0)
            .ok_or_else(|| LayoutError::Backend(format!("unknown scroll handle {}", scroll.0)))?;
        record.canvas_rect = Some(canvas);
        Ok(())
    }

    fn scrollbar_thickness(&self, scroll: &ScrollId) -> LayoutResult<ScrollbarThickness> {
        let record = self
            .scrolls
            .get(&scroll.0)
            .ok_or_else(|| LayoutError::Backend(format!("unknown scroll handle {}", scroll.0)))?;
        if record.frame.is_none() {
            return Err(LayoutError::Backend(
                "scrollbar thickness queried before the container frame was set".into(),
            ));
        }
        Ok(self.scrollbar)
    }

    fn remove_scroll_container(&mut self, scroll: &ScrollId) -> LayoutResult<()> {
        let record = self
            .scrolls
            .remove(&scroll.0)
            .ok_or_else(|| LayoutError::Backend(format!("unknown scroll handle {}", scroll.0)))?;
        self.drop_subtree(record.node);
        Ok(())
    }

    fn viewport_size(&self) -> Vec2 {
        self.viewport
    }
}
