// crates/trellis-layout/src/scroll.rs
use glam::Vec2;
use tracing::trace;
use trellis_core::{LayoutError, LayoutResult, PanelRect, SizeSpec};
use trellis_scene::SceneBackend;

use crate::node::{IntoNode, LayoutNode, LayoutSignal, NodeRc};

struct ScrollBinding<B: SceneBackend> {
    handle: B::ScrollHandle,
    signal: LayoutSignal,
}

/// Decorator that gives one child a scrollable canvas.
///
/// Always occupies the full rectangle offered to it; when the child's
/// minimum size overflows an axis, the matching scrollbar's thickness is
/// reserved out of the opposite axis budget.
pub struct ScrollFrame<B: SceneBackend> {
    child: NodeRc<B>,
    w_weight: f32,
    h_weight: f32,
    binding: Option<ScrollBinding<B>>,
}

impl<B: SceneBackend> ScrollFrame<B> {
    pub fn new(child: impl IntoNode<B>) -> Self {
        Self {
            child: child.into_node(),
            w_weight: 1.0,
            h_weight: 1.0,
            binding: None,
        }
    }

    /// Weights reported to the enclosing frame (default 1.0 on both axes).
    pub fn with_weights(mut self, w_weight: f32, h_weight: f32) -> Self {
        self.w_weight = w_weight;
        self.h_weight = h_weight;
        self
    }
}

impl<B: SceneBackend> LayoutNode<B> for ScrollFrame<B> {
    fn size_spec(&self) -> SizeSpec {
        // Zero minima: the container accepts whatever rectangle it is
        // offered and scrolls the child inside it.
        SizeSpec::new(0.0, 0.0, self.w_weight, self.h_weight)
    }

    fn create(
        &mut self,
        backend: &mut B,
        parent: &B::NodeHandle,
        signal: &LayoutSignal,
    ) -> LayoutResult<()> {
        if self.binding.is_some() {
            return Err(LayoutError::AlreadyCreated);
        }
        let handle = backend.create_scroll_container(parent)?;
        let canvas = backend.scroll_canvas(&handle)?;
        self.child.borrow_mut().create(backend, &canvas, signal)?;
        self.binding = Some(ScrollBinding {
            handle,
            signal: signal.clone(),
        });
        Ok(())
    }

    fn resize(&mut self, backend: &mut B, size: Vec2) -> LayoutResult<()> {
        let binding = self.binding.as_ref().ok_or(LayoutError::NotCreated)?;
        let spec = self.child.borrow().size_spec();

        backend.set_scroll_frame(&binding.handle, PanelRect::from_extent(size.x, size.y))?;
        let bars = backend.scrollbar_thickness(&binding.handle)?;

        // Single forward correction pass: reserving the vertical bar may
        // newly trigger the horizontal condition, but the vertical condition
        // is not re-checked afterwards. Known approximation, kept as-is.
        let mut actual_w = size.x.max(spec.w_min);
        let mut actual_h = size.y.max(spec.h_min);
        if actual_h > size.y {
            actual_w = (size.x - bars.vertical).max(spec.w_min);
        }
        if actual_w > size.x {
            actual_h = (size.y - bars.horizontal).max(spec.h_min);
        }
        trace!(
            offered_w = size.x,
            offered_h = size.y,
            actual_w,
            actual_h,
            "sized scroll canvas"
        );

        backend.set_scroll_canvas(&binding.handle, PanelRect::from_extent(actual_w, actual_h))?;
        self.child
            .borrow_mut()
            .resize(backend, Vec2::new(actual_w, actual_h))
    }

    fn destroy(&mut self, backend: &mut B) -> LayoutResult<()> {
        let binding = self.binding.take().ok_or(LayoutError::NotCreated)?;
        self.child.borrow_mut().destroy(backend)?;
        backend.remove_scroll_container(&binding.handle)
    }

    fn mark_dirty(&mut self) -> LayoutResult<()> {
        let binding = self.binding.as_ref().ok_or(LayoutError::NotCreated)?;
        binding.signal.raise();
        Ok(())
    }
}
