//! Projection/modelview state with a bounded push/pop stack.
//!
//! Pushing in modelview mode redirects edits to a separate `transform`
//! matrix and flags every subsequent vertex for CPU-side
//! pre-transformation. The modelview itself is only applied by the
//! executor through the combined MVP uniform.

use crate::matrix::{self, Mat4, IDENTITY};

/// Which matrix subsequent matrix operations target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatrixMode {
    Projection,
    #[default]
    Modelview,
    /// Accepted for compatibility; has no matrix slot of its own.
    Texture,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    Projection,
    Modelview,
    Transform,
}

#[derive(Debug, Clone)]
pub struct MatrixStack {
    mode: MatrixMode,
    slot: Slot,
    projection: Mat4,
    modelview: Mat4,
    transform: Mat4,
    stack: Vec<Mat4>,
    capacity: usize,
    transform_required: bool,
}

impl MatrixStack {
    pub fn new(capacity: usize) -> Self {
        Self {
            mode: MatrixMode::Modelview,
            slot: Slot::Modelview,
            projection: IDENTITY,
            modelview: IDENTITY,
            transform: IDENTITY,
            stack: Vec::with_capacity(capacity),
            capacity,
            transform_required: false,
        }
    }

    pub fn mode(&self) -> MatrixMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: MatrixMode) {
        match mode {
            MatrixMode::Projection => self.slot = Slot::Projection,
            MatrixMode::Modelview => self.slot = Slot::Modelview,
            MatrixMode::Texture => {}
        }
        self.mode = mode;
    }

    /// Push the current matrix. Returns `false` (and pushes nothing) when
    /// the stack is full.
    pub fn push(&mut self) -> bool {
        if self.stack.len() >= self.capacity {
            tracing::warn!(
                capacity = self.capacity,
                "matrix stack overflow, push ignored"
            );
            return false;
        }

        if self.mode == MatrixMode::Modelview {
            self.transform_required = true;
            self.slot = Slot::Transform;
        }

        let top = *self.current();
        self.stack.push(top);
        true
    }

    /// Pop into the current matrix. A pop at depth 0 restores nothing, but
    /// still leaves modelview mode un-transformed.
    pub fn pop(&mut self) {
        if let Some(top) = self.stack.pop() {
            *self.current_mut() = top;
        }

        if self.stack.is_empty() && self.mode == MatrixMode::Modelview {
            self.slot = Slot::Modelview;
            self.transform_required = false;
        }
    }

    /// Pop every entry, then once more so modelview mode is fully restored.
    pub fn pop_all(&mut self) {
        for _ in 0..=self.stack.len() {
            self.pop();
        }
    }

    pub fn load_identity(&mut self) {
        *self.current_mut() = IDENTITY;
    }

    pub fn translate(&mut self, x: f32, y: f32, z: f32) {
        self.multiply(&matrix::translate(x, y, z));
    }

    /// Rotate by `angle_deg` degrees around the (unnormalized) axis.
    pub fn rotate(&mut self, angle_deg: f32, x: f32, y: f32, z: f32) {
        self.multiply(&matrix::rotate([x, y, z], angle_deg.to_radians()));
    }

    pub fn scale(&mut self, x: f32, y: f32, z: f32) {
        self.multiply(&matrix::scale(x, y, z));
    }

    /// Post-multiply the current matrix: `m` applies before what is
    /// already there.
    pub fn multiply(&mut self, m: &Mat4) {
        let current = self.current_mut();
        *current = matrix::mul(current, m);
    }

    pub fn ortho(&mut self, left: f64, right: f64, bottom: f64, top: f64, near: f64, far: f64) {
        self.multiply(&matrix::ortho(
            left as f32,
            right as f32,
            bottom as f32,
            top as f32,
            near as f32,
            far as f32,
        ));
    }

    pub fn frustum(&mut self, left: f64, right: f64, bottom: f64, top: f64, near: f64, far: f64) {
        self.multiply(&matrix::frustum(
            left as f32,
            right as f32,
            bottom as f32,
            top as f32,
            near as f32,
            far as f32,
        ));
    }

    /// Apply the push/pop transform to a vertex when one is active.
    pub fn transform_vertex(&self, p: [f32; 3]) -> [f32; 3] {
        if self.transform_required {
            matrix::transform_point(&self.transform, p)
        } else {
            p
        }
    }

    pub fn current(&self) -> &Mat4 {
        match self.slot {
            Slot::Projection => &self.projection,
            Slot::Modelview => &self.modelview,
            Slot::Transform => &self.transform,
        }
    }

    fn current_mut(&mut self) -> &mut Mat4 {
        match self.slot {
            Slot::Projection => &mut self.projection,
            Slot::Modelview => &mut self.modelview,
            Slot::Transform => &mut self.transform,
        }
    }

    pub fn projection(&self) -> &Mat4 {
        &self.projection
    }

    pub fn modelview(&self) -> &Mat4 {
        &self.modelview
    }

    pub fn transform(&self) -> &Mat4 {
        &self.transform
    }

    pub fn set_projection(&mut self, m: Mat4) {
        self.projection = m;
    }

    pub fn set_modelview(&mut self, m: Mat4) {
        self.modelview = m;
    }

    /// Combined transform: modelview first, then projection.
    pub fn mvp(&self) -> Mat4 {
        matrix::mul(&self.projection, &self.modelview)
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn transform_required(&self) -> bool {
        self.transform_required
    }
}

impl Default for MatrixStack {
    fn default() -> Self {
        Self::new(32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_in_modelview_at_depth_zero() {
        let stack = MatrixStack::new(4);
        assert_eq!(stack.mode(), MatrixMode::Modelview);
        assert_eq!(stack.depth(), 0);
        assert!(!stack.transform_required());
        assert_eq!(*stack.current(), IDENTITY);
    }

    #[test]
    fn push_in_modelview_requires_transform() {
        let mut stack = MatrixStack::new(4);
        assert!(stack.push());
        assert!(stack.transform_required());
        stack.translate(5.0, 0.0, 0.0);
        // Edits land on the transform, not the modelview.
        assert_eq!(*stack.modelview(), IDENTITY);
        assert_eq!(stack.transform_vertex([1.0, 1.0, 0.0]), [6.0, 1.0, 0.0]);
    }

    #[test]
    fn pop_to_zero_restores_modelview() {
        let mut stack = MatrixStack::new(4);
        stack.push();
        stack.translate(5.0, 0.0, 0.0);
        stack.pop();
        assert_eq!(stack.depth(), 0);
        assert!(!stack.transform_required());
        assert_eq!(*stack.transform(), IDENTITY);
        assert_eq!(stack.transform_vertex([1.0, 1.0, 0.0]), [1.0, 1.0, 0.0]);
    }

    #[test]
    fn n_pushes_m_pops_leave_n_minus_m() {
        let mut stack = MatrixStack::new(8);
        for _ in 0..5 {
            stack.push();
        }
        for _ in 0..3 {
            stack.pop();
        }
        assert_eq!(stack.depth(), 2);
        assert!(stack.transform_required());
    }

    #[test]
    fn pop_at_depth_zero_is_noop() {
        let mut stack = MatrixStack::new(4);
        stack.translate(1.0, 2.0, 3.0);
        let before = *stack.modelview();
        stack.pop();
        assert_eq!(stack.depth(), 0);
        assert_eq!(*stack.modelview(), before);
    }

    #[test]
    fn push_past_capacity_is_ignored() {
        let mut stack = MatrixStack::new(3);
        for _ in 0..3 {
            assert!(stack.push());
        }
        assert!(!stack.push());
        assert_eq!(stack.depth(), 3);
    }

    #[test]
    fn projection_mode_targets_projection() {
        let mut stack = MatrixStack::new(4);
        stack.set_mode(MatrixMode::Projection);
        stack.ortho(0.0, 800.0, 450.0, 0.0, 0.0, 1.0);
        assert_ne!(*stack.projection(), IDENTITY);
        assert_eq!(*stack.modelview(), IDENTITY);
    }

    #[test]
    fn projection_push_pop_restores_projection() {
        let mut stack = MatrixStack::new(4);
        stack.set_mode(MatrixMode::Projection);
        stack.push();
        assert!(!stack.transform_required());
        stack.scale(2.0, 2.0, 2.0);
        stack.pop();
        assert_eq!(*stack.projection(), IDENTITY);
    }

    #[test]
    fn texture_mode_keeps_previous_target() {
        let mut stack = MatrixStack::new(4);
        stack.set_mode(MatrixMode::Projection);
        stack.set_mode(MatrixMode::Texture);
        stack.translate(1.0, 0.0, 0.0);
        assert_ne!(*stack.projection(), IDENTITY);
        assert_eq!(stack.mode(), MatrixMode::Texture);
    }

    #[test]
    fn pop_all_unwinds_everything() {
        let mut stack = MatrixStack::new(8);
        for _ in 0..4 {
            stack.push();
            stack.translate(1.0, 0.0, 0.0);
        }
        stack.pop_all();
        assert_eq!(stack.depth(), 0);
        assert!(!stack.transform_required());
        assert_eq!(*stack.transform(), IDENTITY);
    }

    #[test]
    fn translate_applies_in_local_space() {
        let mut stack = MatrixStack::new(4);
        stack.push();
        stack.translate(10.0, 0.0, 0.0);
        stack.scale(2.0, 2.0, 2.0);
        // Scale first, then translate.
        assert_eq!(stack.transform_vertex([1.0, 0.0, 0.0]), [12.0, 0.0, 0.0]);
    }

    #[test]
    fn rotate_uses_degrees() {
        let mut stack = MatrixStack::new(4);
        stack.push();
        stack.rotate(90.0, 0.0, 0.0, 1.0);
        let p = stack.transform_vertex([1.0, 0.0, 0.0]);
        assert!(p[0].abs() < 1e-5);
        assert!((p[1] - 1.0).abs() < 1e-5);
    }

    #[test]
    fn mvp_applies_modelview_then_projection() {
        let mut stack = MatrixStack::new(4);
        stack.set_modelview(matrix::translate(1.0, 0.0, 0.0));
        stack.set_projection(matrix::scale(2.0, 2.0, 2.0));
        let p = matrix::transform_point(&stack.mvp(), [0.0, 0.0, 0.0]);
        assert_eq!(p, [2.0, 0.0, 0.0]);
    }
}
