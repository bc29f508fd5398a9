// crates/trellis-layout/src/root.rs
use glam::Vec2;
use tracing::{debug, info};
use trellis_core::{LayoutError, LayoutResult, SizeSpec};
use trellis_scene::{SceneBackend, SceneEvent};

use crate::node::{IntoNode, LayoutSignal, NodeRc};

/// When a raised dirty signal is honored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelayoutPolicy {
    /// Re-layout at the host's `commit` call and at any scene event.
    Immediate,
    /// Re-layout only when the next `Tick` arrives.
    NextTick,
}

/// Entry point binding a layout tree to the backend's top-level frame.
///
/// The root negotiates the tree's aggregate requirement against the live
/// viewport, owns the dirty signal its descendants raise, and decides when
/// that signal turns into a layout pass. The backend context is passed into
/// every operation explicitly; the root holds no ambient scene state.
pub struct Root<B: SceneBackend> {
    child: NodeRc<B>,
    anchor: Option<B::NodeHandle>,
    signal: LayoutSignal,
    auto_resize: bool,
    policy: RelayoutPolicy,
}

impl<B: SceneBackend> Root<B> {
    pub fn new(child: impl IntoNode<B>) -> Self {
        Self::from_shared(child.into_node())
    }

    /// Bind to an already-shared handle, letting the host keep a typed
    /// clone of its own for runtime mutation.
    pub fn from_shared(child: NodeRc<B>) -> Self {
        Self {
            child,
            anchor: None,
            signal: LayoutSignal::new(),
            auto_resize: true,
            policy: RelayoutPolicy::Immediate,
        }
    }

    /// Whether `ViewportResized` events trigger a layout pass (default true).
    pub fn with_auto_resize(mut self, auto_resize: bool) -> Self {
        self.auto_resize = auto_resize;
        self
    }

    pub fn with_policy(mut self, policy: RelayoutPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Aggregate requirement of the whole tree.
    pub fn size_spec(&self) -> SizeSpec {
        self.child.borrow().size_spec()
    }

    pub fn is_dirty(&self) -> bool {
        self.signal.is_raised()
    }

    /// Bind the tree under the backend's top-level node and lay it out once.
    pub fn create(&mut self, backend: &mut B) -> LayoutResult<()> {
        if self.anchor.is_some() {
            return Err(LayoutError::AlreadyCreated);
        }
        let anchor = backend.root_node()?;
        self.child
            .borrow_mut()
            .create(backend, &anchor, &self.signal)?;
        self.anchor = Some(anchor);
        info!("layout tree bound to scene root");
        self.relayout(backend)
    }

    /// Negotiate against the current viewport and resize the tree top-down.
    ///
    /// Each axis is clamped to the child's minimum when the viewport
    /// undercuts it, or when the child declines to grow (weight 0.0) —
    /// flex space is never allowed to shrink a tree below what it asked for.
    pub fn relayout(&mut self, backend: &mut B) -> LayoutResult<()> {
        let viewport = backend.viewport_size();
        let spec = self.child.borrow().size_spec();

        let mut width = viewport.x;
        if spec.w_min > width || spec.w_weight == 0.0 {
            width = spec.w_min;
        }
        let mut height = viewport.y;
        if spec.h_min > height || spec.h_weight == 0.0 {
            height = spec.h_min;
        }
        debug!(
            viewport_w = viewport.x,
            viewport_h = viewport.y,
            width,
            height,
            "laying out tree"
        );

        self.child
            .borrow_mut()
            .resize(backend, Vec2::new(width, height))?;
        self.signal.clear();
        Ok(())
    }

    /// Honor a pending dirty signal according to the relayout policy.
    ///
    /// Hosts call this right after mutating the tree; under `NextTick` it
    /// defers to the next tick instead.
    pub fn commit(&mut self, backend: &mut B) -> LayoutResult<()> {
        if self.policy == RelayoutPolicy::Immediate && self.signal.is_raised() {
            self.relayout(backend)?;
        }
        Ok(())
    }

    /// React to a host run-loop notification.
    pub fn handle_event(&mut self, backend: &mut B, event: SceneEvent) -> LayoutResult<()> {
        match event {
            SceneEvent::ViewportResized(_) if self.auto_resize => self.relayout(backend),
            SceneEvent::Tick if self.signal.is_raised() => self.relayout(backend),
            _ => {
                if self.policy == RelayoutPolicy::Immediate && self.signal.is_raised() {
                    self.relayout(backend)
                } else {
                    Ok(())
                }
            }
        }
    }

    /// Tear the tree down: children first, then the top-level binding.
    pub fn destroy(&mut self, backend: &mut B) -> LayoutResult<()> {
        let anchor = self.anchor.take().ok_or(LayoutError::NotCreated)?;
        self.child.borrow_mut().destroy(backend)?;
        backend.remove_node(&anchor)?;
        info!("layout tree detached from scene root");
        Ok(())
    }
}
