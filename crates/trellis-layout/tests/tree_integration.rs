// crates/trellis-layout/tests/tree_integration.rs

//! Whole-tree scenarios driven through the headless scene backend.

use std::cell::RefCell;
use std::rc::Rc;

use glam::Vec2;
use trellis_core::{AttrValue, SizeSpec, WidgetConfig};
use trellis_headless::HeadlessScene;
use trellis_layout::{
    filler, intersperse, spacer, Frame, IntoNode, NodeRc, Panel, RelayoutPolicy, Root, ScrollFrame,
};
use trellis_scene::SceneEvent;

fn label(text: &str, spec: SizeSpec) -> Panel<HeadlessScene> {
    Panel::new(
        WidgetConfig::new("label").attr("text", AttrValue::String(text.into())),
        spec,
    )
}

#[test]
fn nested_frames_compose_offsets() {
    // A vertical frame holding a fixed-height header row and a flexible
    // body, the header itself a horizontal frame of two labels.
    let mut scene = HeadlessScene::new(Vec2::new(2.0, 2.0));
    let header = Frame::horizontal(vec![
        label("left", SizeSpec::new(1.0, 1.0, 0.0, 0.0)).into_node(),
        label("right", SizeSpec::new(0.0, 0.0, 1.0, 0.0)).into_node(),
    ])
    .with_weight(0.0);
    let body = label("body", SizeSpec::default());
    let mut root = Root::new(Frame::vertical(vec![
        header.into_node(),
        body.into_node(),
    ]));
    root.create(&mut scene).unwrap();

    let widgets = scene.widgets();
    let left = scene.widget_frame(widgets[0]).unwrap();
    let right = scene.widget_frame(widgets[1]).unwrap();
    let body = scene.widget_frame(widgets[2]).unwrap();

    // Header row: fixed 1.0 label plus flexible remainder of the 2.0 width.
    assert_eq!(left.width(), 1.0);
    assert_eq!(right.width(), 1.0);
    assert_eq!(left.height(), 1.0);

    // Header is pinned to its aggregate minimum height (weight 0), the body
    // soaks up the rest.
    assert_eq!(body.height(), 1.0);
    assert_eq!(body.width(), 2.0);

    // The body's anchor sits one header-height below the top.
    let body_anchor = scene.widget_anchor(widgets[2]).unwrap();
    assert_eq!(scene.node_position(body_anchor).unwrap().y, -1.0);
}

#[test]
fn deep_resize_is_idempotent() {
    let mut scene = HeadlessScene::new(Vec2::new(1.0, 1.0));
    let mut root = Root::new(Frame::vertical(vec![
        Frame::horizontal(vec![
            label("a", SizeSpec::new(0.1, 0.0, 1.0, 1.0)).into_node(),
            label("b", SizeSpec::new(0.3, 0.0, 0.0, 1.0)).into_node(),
        ])
        .into_node(),
        ScrollFrame::new(label("c", SizeSpec::new(0.0, 3.0, 0.0, 0.0))).into_node(),
    ]));
    root.create(&mut scene).unwrap();

    let first: Vec<_> = scene
        .widgets()
        .iter()
        .map(|&id| scene.widget_frame(id))
        .collect();
    root.relayout(&mut scene).unwrap();
    let second: Vec<_> = scene
        .widgets()
        .iter()
        .map(|&id| scene.widget_frame(id))
        .collect();
    assert_eq!(first, second);
}

#[test]
fn runtime_mutation_through_shared_handle() {
    let mut scene = HeadlessScene::new(Vec2::new(1.0, 1.0));
    let container = Rc::new(RefCell::new(Frame::horizontal(vec![
        label("0", SizeSpec::default()).into_node(),
    ])));
    let mut root = Root::from_shared(container.clone());
    root.create(&mut scene).unwrap();
    assert_eq!(scene.widget_count(), 1);
    assert!(!root.is_dirty());

    // Insert through the host's own handle, then commit.
    container
        .borrow_mut()
        .add(&mut scene, 1, label("1", SizeSpec::default()).into_node())
        .unwrap();
    assert!(root.is_dirty());
    root.commit(&mut scene).unwrap();
    assert!(!root.is_dirty());
    assert_eq!(scene.widget_count(), 2);

    // Both panels share the viewport width evenly after the relayout.
    for &id in &scene.widgets() {
        assert_eq!(scene.widget_frame(id).unwrap().width(), 0.5);
    }
}

#[test]
fn next_tick_policy_defers_until_tick() {
    let mut scene = HeadlessScene::new(Vec2::new(1.0, 1.0));
    let container = Rc::new(RefCell::new(Frame::horizontal(vec![
        label("0", SizeSpec::default()).into_node(),
    ])));
    let mut root = Root::from_shared(container.clone()).with_policy(RelayoutPolicy::NextTick);
    root.create(&mut scene).unwrap();

    container
        .borrow_mut()
        .add(&mut scene, 0, label("1", SizeSpec::default()).into_node())
        .unwrap();
    root.commit(&mut scene).unwrap();
    assert!(root.is_dirty());

    root.handle_event(&mut scene, SceneEvent::Tick).unwrap();
    assert!(!root.is_dirty());
    for &id in &scene.widgets() {
        assert_eq!(scene.widget_frame(id).unwrap().width(), 0.5);
    }
}

#[test]
fn interspersed_toolbar_lays_out_with_padding() {
    // Two unit buttons padded by rigid spacers on every side, with a filler
    // soaking up the leftover width.
    let mut scene = HeadlessScene::new(Vec2::new(2.0, 1.0));
    let buttons: Vec<NodeRc<HeadlessScene>> = vec![
        label("one", SizeSpec::new(0.4, 0.0, 0.0, 1.0)).into_node(),
        label("two", SizeSpec::new(0.4, 0.0, 0.0, 1.0)).into_node(),
    ];
    let mut children = intersperse(buttons, || spacer(0.1, 0.0).into_node(), true, true);
    children.push(filler().into_node());

    let mut root = Root::new(Frame::horizontal(children));
    root.create(&mut scene).unwrap();

    let widgets = scene.widgets();
    let one_anchor = scene.widget_anchor(widgets[0]).unwrap();
    let two_anchor = scene.widget_anchor(widgets[1]).unwrap();
    // spacer(0.1) | one(0.4) | spacer(0.1) | two(0.4) | spacer(0.1) | filler
    assert!((scene.node_position(one_anchor).unwrap().x - 0.1).abs() < 1e-6);
    assert!((scene.node_position(two_anchor).unwrap().x - 0.6).abs() < 1e-6);
}
