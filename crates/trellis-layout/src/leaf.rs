// crates/trellis-layout/src/leaf.rs
use glam::Vec2;
use trellis_core::{LayoutError, LayoutResult, PanelRect, SizeSpec, WidgetConfig};
use trellis_scene::SceneBackend;

use crate::node::{LayoutNode, LayoutSignal};

/// A leaf that occupies space and renders nothing.
#[derive(Debug, Clone)]
pub struct Empty {
    spec: SizeSpec,
    bound: bool,
}

impl Empty {
    pub fn new(spec: SizeSpec) -> Self {
        Self { spec, bound: false }
    }
}

impl<B: SceneBackend> LayoutNode<B> for Empty {
    fn size_spec(&self) -> SizeSpec {
        self.spec
    }

    fn create(
        &mut self,
        _backend: &mut B,
        _parent: &B::NodeHandle,
        _signal: &LayoutSignal,
    ) -> LayoutResult<()> {
        if self.bound {
            return Err(LayoutError::AlreadyCreated);
        }
        self.bound = true;
        Ok(())
    }

    fn resize(&mut self, _backend: &mut B, _size: Vec2) -> LayoutResult<()> {
        if !self.bound {
            return Err(LayoutError::NotCreated);
        }
        Ok(())
    }

    fn destroy(&mut self, _backend: &mut B) -> LayoutResult<()> {
        if !self.bound {
            return Err(LayoutError::NotCreated);
        }
        self.bound = false;
        Ok(())
    }

    fn mark_dirty(&mut self) -> LayoutResult<()> {
        if !self.bound {
            return Err(LayoutError::NotCreated);
        }
        // Leaves have no structure of their own to invalidate.
        Ok(())
    }
}

/// A leaf wrapping exactly one backend widget.
///
/// The widget is instantiated from its opaque configuration record at
/// `create` time; `resize` only ever rewrites its geometry rectangle.
pub struct Panel<B: SceneBackend> {
    config: WidgetConfig,
    spec: SizeSpec,
    widget: Option<B::WidgetHandle>,
}

impl<B: SceneBackend> Panel<B> {
    pub fn new(config: WidgetConfig, spec: SizeSpec) -> Self {
        Self {
            config,
            spec,
            widget: None,
        }
    }

    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }
}

impl<B: SceneBackend> LayoutNode<B> for Panel<B> {
    fn size_spec(&self) -> SizeSpec {
        self.spec
    }

    fn create(
        &mut self,
        backend: &mut B,
        parent: &B::NodeHandle,
        _signal: &LayoutSignal,
    ) -> LayoutResult<()> {
        if self.widget.is_some() {
            return Err(LayoutError::AlreadyCreated);
        }
        let widget = backend.create_widget(parent, &self.config)?;
        if let Some(anchor) = self.config.text_anchor {
            backend.set_widget_text_anchor(&widget, anchor.offset, anchor.alignment)?;
        }
        self.widget = Some(widget);
        Ok(())
    }

    fn resize(&mut self, backend: &mut B, size: Vec2) -> LayoutResult<()> {
        let widget = self.widget.as_ref().ok_or(LayoutError::NotCreated)?;
        backend.set_widget_frame(widget, PanelRect::from_extent(size.x, size.y))
    }

    fn destroy(&mut self, backend: &mut B) -> LayoutResult<()> {
        let widget = self.widget.take().ok_or(LayoutError::NotCreated)?;
        backend.remove_widget(&widget)
    }

    fn mark_dirty(&mut self) -> LayoutResult<()> {
        if self.widget.is_none() {
            return Err(LayoutError::NotCreated);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::LayoutSignal;
    use glam::Vec2;
    use trellis_core::{AttrValue, TextAlignment};
    use trellis_headless::HeadlessScene;
    use trellis_scene::SceneBackend;

    #[test]
    fn test_panel_binds_one_widget() {
        let mut scene = HeadlessScene::new(Vec2::new(1.0, 1.0));
        let root = scene.root_node().unwrap();
        let config = WidgetConfig::new("label")
            .attr("text", AttrValue::String("Foo".into()))
            .with_text_anchor(Vec2::new(0.0, -0.02), TextAlignment::Center);
        let mut panel = Panel::new(config, SizeSpec::default());

        panel
            .create(&mut scene, &root, &LayoutSignal::new())
            .unwrap();
        assert_eq!(scene.widget_count(), 1);

        let widget = scene.widgets()[0];
        assert_eq!(scene.widget_config(widget).unwrap().kind, "label");
        assert_eq!(
            scene.widget_text_anchor(widget),
            Some((Vec2::new(0.0, -0.02), TextAlignment::Center))
        );
    }

    #[test]
    fn test_panel_resize_writes_hanging_rect() {
        let mut scene = HeadlessScene::new(Vec2::new(1.0, 1.0));
        let root = scene.root_node().unwrap();
        let mut panel = Panel::new(WidgetConfig::new("label"), SizeSpec::default());
        panel
            .create(&mut scene, &root, &LayoutSignal::new())
            .unwrap();
        panel.resize(&mut scene, Vec2::new(0.7, 0.4)).unwrap();

        let frame = scene.widget_frame(scene.widgets()[0]).unwrap();
        assert_eq!(frame, PanelRect::from_extent(0.7, 0.4));
    }

    #[test]
    fn test_lifecycle_misuse_fails_fast() {
        let mut scene = HeadlessScene::new(Vec2::new(1.0, 1.0));
        let root = scene.root_node().unwrap();
        let signal = LayoutSignal::new();
        let mut panel = Panel::new(WidgetConfig::new("label"), SizeSpec::default());

        assert!(matches!(
            panel.resize(&mut scene, Vec2::ONE),
            Err(LayoutError::NotCreated)
        ));
        panel.create(&mut scene, &root, &signal).unwrap();
        assert!(matches!(
            panel.create(&mut scene, &root, &signal),
            Err(LayoutError::AlreadyCreated)
        ));
        panel.destroy(&mut scene).unwrap();
        assert!(matches!(
            panel.resize(&mut scene, Vec2::ONE),
            Err(LayoutError::NotCreated)
        ));
        assert_eq!(scene.widget_count(), 0);
    }

    #[test]
    fn test_empty_occupies_space_without_widgets() {
        let mut scene = HeadlessScene::new(Vec2::new(1.0, 1.0));
        let root = scene.root_node().unwrap();
        let mut empty = Empty::new(SizeSpec::fixed(0.5, 0.5));
        assert_eq!(
            LayoutNode::<HeadlessScene>::size_spec(&empty),
            SizeSpec::fixed(0.5, 0.5)
        );

        empty
            .create(&mut scene, &root, &LayoutSignal::new())
            .unwrap();
        empty.resize(&mut scene, Vec2::new(0.5, 0.5)).unwrap();
        assert_eq!(scene.widget_count(), 0);
    }
}
