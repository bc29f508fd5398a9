// crates/trellis-layout/src/tools.rs
use trellis_core::SizeSpec;
use trellis_scene::SceneBackend;

use crate::leaf::Empty;
use crate::node::NodeRc;

/// A fixed invisible block of exactly `width` by `height`.
pub fn spacer(width: f32, height: f32) -> Empty {
    Empty::new(SizeSpec::fixed(width, height))
}

/// An invisible block that soaks up as much space as its siblings allow.
pub fn filler() -> Empty {
    Empty::new(SizeSpec::flexible())
}

/// Weave separator nodes between `nodes`, optionally before the first and
/// after the last. The factory runs once per separator.
pub fn intersperse<B: SceneBackend>(
    nodes: Vec<NodeRc<B>>,
    mut separator: impl FnMut() -> NodeRc<B>,
    first: bool,
    last: bool,
) -> Vec<NodeRc<B>> {
    let mut output = Vec::with_capacity(nodes.len() * 2 + 1);
    if first {
        output.push(separator());
    }
    let last_index = nodes.len().saturating_sub(1);
    for (index, node) in nodes.into_iter().enumerate() {
        output.push(node);
        if index < last_index {
            output.push(separator());
        }
    }
    if last {
        output.push(separator());
    }
    output
}
