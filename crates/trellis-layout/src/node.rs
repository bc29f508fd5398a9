// crates/trellis-layout/src/node.rs
use std::cell::{Cell, RefCell};
use std::rc::Rc;

use glam::Vec2;
use trellis_core::{LayoutResult, SizeSpec};
use trellis_scene::SceneBackend;

/// Shared dirty channel between a tree and its root.
///
/// Handed down at `create` time; structural mutations raise it, the root
/// clears it after a layout pass. This is the only non-owning back-reference
/// in the tree: nodes never reach their parent for anything but this
/// notification.
#[derive(Debug, Clone, Default)]
pub struct LayoutSignal(Rc<Cell<bool>>);

impl LayoutSignal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn raise(&self) {
        self.0.set(true);
    }

    pub fn is_raised(&self) -> bool {
        self.0.get()
    }

    pub fn clear(&self) {
        self.0.set(false);
    }
}

/// Shared handle to a tree participant.
///
/// Hosts keep clones of the handles they intend to mutate at runtime, the
/// same way the owning frame does; all access is serialized through the
/// single-threaded host loop.
pub type NodeRc<B> = Rc<RefCell<dyn LayoutNode<B>>>;

/// The capability set every tree participant implements.
///
/// A node is constructed detached. `create` binds it (and, for composites,
/// its children) to the scene backend exactly once; `resize` assigns an
/// absolute extent and is deterministic and idempotent for a fixed tree
/// shape; `destroy` releases children first, then the node's own backend
/// resources. After `destroy` a node is inert and must not be reused.
pub trait LayoutNode<B: SceneBackend> {
    /// Current size requirement, recomputed from the live child set.
    fn size_spec(&self) -> SizeSpec;

    fn create(
        &mut self,
        backend: &mut B,
        parent: &B::NodeHandle,
        signal: &LayoutSignal,
    ) -> LayoutResult<()>;

    fn resize(&mut self, backend: &mut B, size: Vec2) -> LayoutResult<()>;

    fn destroy(&mut self, backend: &mut B) -> LayoutResult<()>;

    /// Signal that a structural change occurred and a re-layout is owed.
    ///
    /// Fails with `LayoutError::NotCreated` on a node that is not bound.
    fn mark_dirty(&mut self) -> LayoutResult<()>;
}

/// Wrap a concrete node into a shared tree handle.
///
/// Hosts that want to mutate a composite after it is in the tree keep a
/// typed `Rc<RefCell<Frame<_>>>` of their own and pass a coerced clone
/// straight to `Root::from_shared` or `Frame::add` instead.
pub trait IntoNode<B: SceneBackend> {
    fn into_node(self) -> NodeRc<B>;
}

impl<B: SceneBackend, N: LayoutNode<B> + 'static> IntoNode<B> for N {
    fn into_node(self) -> NodeRc<B> {
        Rc::new(RefCell::new(self))
    }
}
