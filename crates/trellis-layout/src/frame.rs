// crates/trellis-layout/src/frame.rs
use glam::Vec2;
use tracing::trace;
use trellis_core::{Axis, LayoutError, LayoutResult, SizeSpec};
use trellis_scene::SceneBackend;

use crate::node::{LayoutNode, LayoutSignal, NodeRc};

struct FrameBinding<B: SceneBackend> {
    parent: B::NodeHandle,
    signal: LayoutSignal,
}

/// An ordered sequence of children stacked along one axis.
///
/// Each child gets its minimum plus a weighted share of the leftover
/// stacking extent, and the frame's full cross extent (the child's own
/// cross-axis spec is not consulted — known simplification). Children are
/// placed at cumulative offsets in declaration order; each child's
/// positioning anchor lives in `anchors` at the same index.
pub struct Frame<B: SceneBackend> {
    axis: Axis,
    weight: f32,
    children: Vec<NodeRc<B>>,
    anchors: Vec<B::NodeHandle>,
    binding: Option<FrameBinding<B>>,
}

impl<B: SceneBackend> Frame<B> {
    pub fn new(axis: Axis, children: Vec<NodeRc<B>>) -> Self {
        Self {
            axis,
            weight: 1.0,
            children,
            anchors: Vec::new(),
            binding: None,
        }
    }

    /// Stack children left to right.
    pub fn horizontal(children: Vec<NodeRc<B>>) -> Self {
        Self::new(Axis::Horizontal, children)
    }

    /// Stack children top-down.
    pub fn vertical(children: Vec<NodeRc<B>>) -> Self {
        Self::new(Axis::Vertical, children)
    }

    /// Cross-axis weight this frame reports to its own parent (default 1.0).
    ///
    /// Lets a frame act as a fixed block (`0.0`) or a flexible one from the
    /// enclosing frame's point of view.
    pub fn with_weight(mut self, weight: f32) -> Self {
        self.weight = weight;
        self
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Insert `child` at `index` (`0 <= index <= len`).
    ///
    /// The child is created against a freshly attached anchor before either
    /// sequence is touched, so a failed create leaves the frame unchanged.
    pub fn add(&mut self, backend: &mut B, index: usize, child: NodeRc<B>) -> LayoutResult<()> {
        let binding = self.binding.as_ref().ok_or(LayoutError::NotCreated)?;
        if index > self.children.len() {
            return Err(LayoutError::IndexOutOfRange {
                index,
                len: self.children.len(),
            });
        }

        let anchor = backend.attach_node(&binding.parent, "frame slot")?;
        if let Err(err) = child.borrow_mut().create(backend, &anchor, &binding.signal) {
            // Unwind the half-attached slot so the sequences stay aligned.
            let _ = backend.remove_node(&anchor);
            return Err(err);
        }

        self.children.insert(index, child);
        self.anchors.insert(index, anchor);
        binding.signal.raise();
        Ok(())
    }

    /// Destroy and remove the child at `index` (`0 <= index < len`).
    pub fn remove(&mut self, backend: &mut B, index: usize) -> LayoutResult<()> {
        let binding = self.binding.as_ref().ok_or(LayoutError::NotCreated)?;
        if index >= self.children.len() {
            return Err(LayoutError::IndexOutOfRange {
                index,
                len: self.children.len(),
            });
        }

        self.children[index].borrow_mut().destroy(backend)?;
        backend.remove_node(&self.anchors[index])?;
        self.children.remove(index);
        self.anchors.remove(index);
        binding.signal.raise();
        Ok(())
    }
}

impl<B: SceneBackend> LayoutNode<B> for Frame<B> {
    fn size_spec(&self) -> SizeSpec {
        let mut main_min = 0.0;
        let mut main_weight = 0.0;
        let mut cross_min = 0.0f32;
        for child in &self.children {
            let spec = child.borrow().size_spec();
            main_min += spec.min(self.axis);
            main_weight += spec.weight(self.axis);
            cross_min = cross_min.max(spec.min(self.axis.perpendicular()));
        }

        match self.axis {
            Axis::Horizontal => SizeSpec::new(main_min, cross_min, main_weight, self.weight),
            Axis::Vertical => SizeSpec::new(cross_min, main_min, self.weight, main_weight),
        }
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

        for child in &self.children {
            let anchor = backend.attach_node(parent, "frame slot")?;
            child.borrow_mut().create(backend, &anchor, signal)?;
            self.anchors.push(anchor);
        }
        self.binding = Some(FrameBinding {
            parent: parent.clone(),
            signal: signal.clone(),
        });
        Ok(())
    }

    fn resize(&mut self, backend: &mut B, size: Vec2) -> LayoutResult<()> {
        if self.binding.is_none() {
            return Err(LayoutError::NotCreated);
        }
        if self.children.is_empty() {
            return Err(LayoutError::EmptyFrame);
        }

        let specs: Vec<SizeSpec> = self
            .children
            .iter()
            .map(|child| child.borrow().size_spec())
            .collect();
        let extent = self.axis.main(size);
        let cross = self.axis.cross(size);
        let min_sum: f32 = specs.iter().map(|spec| spec.min(self.axis)).sum();
        let weight_sum: f32 = specs.iter().map(|spec| spec.weight(self.axis)).sum();

        // May be negative when the outer extent undercuts the aggregate
        // minimum; children are over-shrunk without clamping.
        let flex_unit = if weight_sum == 0.0 {
            0.0
        } else {
            (extent - min_sum) / weight_sum
        };
        trace!(
            axis = ?self.axis,
            extent,
            min_sum,
            weight_sum,
            flex_unit,
            "distributing frame extent"
        );

        let mut cursor = 0.0;
        for ((child, anchor), spec) in self.children.iter().zip(&self.anchors).zip(&specs) {
            let main = spec.min(self.axis) + flex_unit * spec.weight(self.axis);
            backend.set_node_position(anchor, self.axis.offset(cursor))?;
            child.borrow_mut().resize(backend, self.axis.pack(main, cross))?;
            cursor = self.axis.advance(cursor, main);
        }
        Ok(())
    }

    fn destroy(&mut self, backend: &mut B) -> LayoutResult<()> {
        if self.binding.take().is_none() {
            return Err(LayoutError::NotCreated);
        }
        for child in &self.children {
            child.borrow_mut().destroy(backend)?;
        }
        for anchor in self.anchors.drain(..) {
            backend.remove_node(&anchor)?;
        }
        Ok(())
    }

    fn mark_dirty(&mut self) -> LayoutResult<()> {
        let binding = self.binding.as_ref().ok_or(LayoutError::NotCreated)?;
        binding.signal.raise();
        Ok(())
    }
}
