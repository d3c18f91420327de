use super::BatchContext;
use crate::backend::GraphicsBackend;
use crate::matrix::Mat4;
use crate::matrix_stack::MatrixMode;

impl<B: GraphicsBackend> BatchContext<B> {
    pub fn matrix_mode(&mut self, mode: MatrixMode) {
        self.matrices.set_mode(mode);
    }

    pub fn push_matrix(&mut self) {
        if !self.matrices.push() {
            self.stats.stack_overflows += 1;
        }
    }

    pub fn pop_matrix(&mut self) {
        self.matrices.pop();
    }

    pub fn load_identity(&mut self) {
        self.matrices.load_identity();
    }

    pub fn translate(&mut self, x: f32, y: f32, z: f32) {
        self.matrices.translate(x, y, z);
    }

    /// Rotate by `angle` degrees around `(x, y, z)`.
    pub fn rotate(&mut self, angle: f32, x: f32, y: f32, z: f32) {
        self.matrices.rotate(angle, x, y, z);
    }

    pub fn scale(&mut self, x: f32, y: f32, z: f32) {
        self.matrices.scale(x, y, z);
    }

    pub fn mult_matrix(&mut self, m: &Mat4) {
        self.matrices.multiply(m);
    }

    pub fn ortho(&mut self, left: f64, right: f64, bottom: f64, top: f64, near: f64, far: f64) {
        self.matrices.ortho(left, right, bottom, top, near, far);
    }

    pub fn frustum(&mut self, left: f64, right: f64, bottom: f64, top: f64, near: f64, far: f64) {
        self.matrices.frustum(left, right, bottom, top, near, far);
    }

    pub fn matrix_projection(&self) -> Mat4 {
        *self.matrices.projection()
    }

    pub fn matrix_modelview(&self) -> Mat4 {
        *self.matrices.modelview()
    }

    /// Transform applied to vertices inside a modelview push/pop span.
    pub fn matrix_transform(&self) -> Mat4 {
        *self.matrices.transform()
    }

    pub fn set_matrix_projection(&mut self, m: Mat4) {
        self.matrices.set_projection(m);
    }

    pub fn set_matrix_modelview(&mut self, m: Mat4) {
        self.matrices.set_modelview(m);
    }

    pub fn stack_depth(&self) -> usize {
        self.matrices.depth()
    }

    pub fn transform_required(&self) -> bool {
        self.matrices.transform_required()
    }
}
