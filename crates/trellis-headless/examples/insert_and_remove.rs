// crates/trellis-headless/examples/insert_and_remove.rs

//! Runtime tree mutation against the headless scene.
//!
//! Builds a one-panel horizontal frame under a root, then inserts and
//! removes panels over simulated ticks while logging the geometry the
//! backend records.

use std::cell::RefCell;
use std::rc::Rc;

use glam::Vec2;
use tracing::info;
use trellis_core::{AttrValue, SizeSpec, WidgetConfig};
use trellis_headless::HeadlessScene;
use trellis_layout::{Frame, IntoNode, Panel, RelayoutPolicy, Root};
use trellis_scene::SceneEvent;

fn numbered_panel(index: usize) -> Panel<HeadlessScene> {
    Panel::new(
        WidgetConfig::new("label").attr("text", AttrValue::String(index.to_string())),
        SizeSpec::default(),
    )
}

fn dump_geometry(scene: &HeadlessScene) {
    for widget in scene.widgets() {
        let text = scene
            .widget_config(widget)
            .and_then(|config| config.get("text"))
            .and_then(AttrValue::as_string)
            .unwrap_or("?")
            .to_string();
        let frame = scene.widget_frame(widget);
        let offset = scene
            .widget_anchor(widget)
            .and_then(|anchor| scene.node_position(anchor));
        info!(?frame, ?offset, text, "panel");
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let mut scene = HeadlessScene::new(Vec2::new(2.0, 1.0));
    let container = Rc::new(RefCell::new(Frame::horizontal(vec![
        numbered_panel(0).into_node(),
    ])));
    let mut root = Root::from_shared(container.clone()).with_policy(RelayoutPolicy::Immediate);
    root.create(&mut scene)?;

    // Grow the row one panel per tick, always at the front.
    for index in 1..=4 {
        container
            .borrow_mut()
            .add(&mut scene, 0, numbered_panel(index).into_node())?;
        root.commit(&mut scene)?;
        info!(panels = index + 1, "inserted at 0");
        root.handle_event(&mut scene, SceneEvent::Tick)?;
    }
    dump_geometry(&scene);

    // Shrink back down from the middle.
    while container.borrow().len() > 1 {
        let middle = container.borrow().len() / 2;
        container.borrow_mut().remove(&mut scene, middle)?;
        root.commit(&mut scene)?;
        info!(removed = middle, "removed");
    }

    // A viewport change from the host re-negotiates the remaining panel.
    scene.set_viewport(Vec2::new(3.0, 1.5));
    root.handle_event(&mut scene, SceneEvent::ViewportResized(Vec2::new(3.0, 1.5)))?;
    dump_geometry(&scene);

    root.destroy(&mut scene)?;
    Ok(())
}
