use quadbatch_common::{BufferId, Color};

use crate::backend::VertexStreams;

/// Fixed-capacity vertex attribute streams for one batch buffer.
///
/// Capacity is expressed in quads; every stream holds at most four
/// vertices per quad. Writes past capacity are refused. The three
/// stream lengths act as the write counters and may diverge while a
/// primitive is open; [`VertexBuffer::reconcile`] realigns them.
#[derive(Debug, Clone)]
pub struct VertexBuffer {
    elements: usize,
    positions: Vec<[f32; 3]>,
    texcoords: Vec<[f32; 2]>,
    colors: Vec<[u8; 4]>,
    indices: Vec<u32>,
    gpu: Option<BufferId>,
}

impl VertexBuffer {
    pub fn new(elements: usize) -> Self {
        let vertices = elements * 4;
        Self {
            elements,
            positions: Vec::with_capacity(vertices),
            texcoords: Vec::with_capacity(vertices),
            colors: Vec::with_capacity(vertices),
            indices: quad_indices(elements),
            gpu: None,
        }
    }

    /// Capacity in quads.
    pub fn elements(&self) -> usize {
        self.elements
    }

    /// Capacity in vertices.
    pub fn capacity(&self) -> usize {
        self.elements * 4
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn texcoord_count(&self) -> usize {
        self.texcoords.len()
    }

    pub fn color_count(&self) -> usize {
        self.colors.len()
    }

    /// True when `extra` more vertices would reach or pass capacity.
    pub fn would_overflow(&self, extra: usize) -> bool {
        self.positions.len() + extra >= self.capacity()
    }

    pub fn push_vertex(&mut self, position: [f32; 3]) -> bool {
        if self.positions.len() >= self.capacity() {
            return false;
        }
        self.positions.push(position);
        true
    }

    pub fn push_texcoord(&mut self, uv: [f32; 2]) -> bool {
        if self.texcoords.len() >= self.capacity() {
            return false;
        }
        self.texcoords.push(uv);
        true
    }

    pub fn push_color(&mut self, color: Color) -> bool {
        if self.colors.len() >= self.capacity() {
            return false;
        }
        self.colors.push(color.to_array());
        true
    }

    /// Advance all three counters by `count` unrendered vertices.
    ///
    /// Returns `false` without writing anything if the padding does not fit.
    pub fn pad(&mut self, count: usize) -> bool {
        if self.positions.len() + count > self.capacity() {
            return false;
        }
        self.reconcile();
        let target = self.positions.len() + count;
        self.positions.resize(target, [0.0; 3]);
        self.texcoords.resize(target, [0.0; 2]);
        self.colors.resize(target, [0; 4]);
        true
    }

    /// Bring color and texcoord counts in line with the vertex count.
    ///
    /// Missing colors repeat the last written color (opaque white if none
    /// was ever written); missing texcoords are `(0, 0)`. Surplus entries
    /// beyond the vertex count are discarded.
    pub fn reconcile(&mut self) {
        let target = self.positions.len();

        let last = self
            .colors
            .last()
            .copied()
            .unwrap_or(Color::WHITE.to_array());
        self.colors.resize(target, last);
        self.texcoords.resize(target, [0.0; 2]);
    }

    /// Zero all counters. Storage capacity is kept.
    pub fn clear(&mut self) {
        self.positions.clear();
        self.texcoords.clear();
        self.colors.clear();
    }

    pub fn positions(&self) -> &[[f32; 3]] {
        &self.positions
    }

    pub fn texcoords(&self) -> &[[f32; 2]] {
        &self.texcoords
    }

    pub fn colors(&self) -> &[[u8; 4]] {
        &self.colors
    }

    /// Precomputed `[0,1,2, 0,2,3]` quad pattern for every element.
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Written prefix of every stream, ready for upload.
    pub fn streams(&self) -> VertexStreams<'_> {
        VertexStreams {
            positions: &self.positions,
            texcoords: &self.texcoords,
            colors: &self.colors,
        }
    }

    pub fn gpu(&self) -> Option<BufferId> {
        self.gpu
    }

    pub(crate) fn set_gpu(&mut self, id: BufferId) {
        self.gpu = Some(id);
    }
}

fn quad_indices(elements: usize) -> Vec<u32> {
    let mut indices = Vec::with_capacity(elements * 6);
    for k in 0..elements as u32 {
        let base = 4 * k;
        indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }
    indices
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_repeat_quad_pattern() {
        let vb = VertexBuffer::new(3);
        assert_eq!(vb.indices().len(), 18);
        assert_eq!(&vb.indices()[..6], &[0, 1, 2, 0, 2, 3]);
        assert_eq!(&vb.indices()[6..12], &[4, 5, 6, 4, 6, 7]);
        assert_eq!(&vb.indices()[12..], &[8, 9, 10, 8, 10, 11]);
    }

    #[test]
    fn refuses_vertices_past_capacity() {
        let mut vb = VertexBuffer::new(2);
        for i in 0..8 {
            assert!(vb.push_vertex([i as f32, 0.0, 0.0]));
        }
        assert!(!vb.push_vertex([9.0, 0.0, 0.0]));
        assert_eq!(vb.vertex_count(), 8);
        assert_eq!(vb.positions()[7], [7.0, 0.0, 0.0]);
    }

    #[test]
    fn would_overflow_is_inclusive() {
        let mut vb = VertexBuffer::new(1);
        vb.push_vertex([0.0; 3]);
        assert!(!vb.would_overflow(2));
        assert!(vb.would_overflow(3));
    }

    #[test]
    fn reconcile_repeats_last_color() {
        let mut vb = VertexBuffer::new(1);
        vb.push_color(Color::from_rgba(10, 20, 30, 40));
        for _ in 0..3 {
            vb.push_vertex([0.0; 3]);
        }
        vb.push_texcoord([0.5, 0.5]);
        vb.reconcile();
        assert_eq!(vb.color_count(), 3);
        assert_eq!(vb.texcoord_count(), 3);
        assert!(vb.colors().iter().all(|c| *c == [10, 20, 30, 40]));
        assert_eq!(vb.texcoords()[0], [0.5, 0.5]);
        assert_eq!(vb.texcoords()[2], [0.0, 0.0]);
    }

    #[test]
    fn reconcile_without_color_uses_white() {
        let mut vb = VertexBuffer::new(1);
        vb.push_vertex([0.0; 3]);
        vb.reconcile();
        assert_eq!(vb.colors(), &[[255, 255, 255, 255]]);
    }

    #[test]
    fn reconcile_drops_surplus_attributes() {
        let mut vb = VertexBuffer::new(1);
        vb.push_vertex([0.0; 3]);
        vb.push_color(Color::BLACK);
        vb.push_color(Color::WHITE);
        vb.reconcile();
        assert_eq!(vb.color_count(), 1);
        assert_eq!(vb.colors()[0], [0, 0, 0, 255]);
    }

    #[test]
    fn pad_advances_all_counters() {
        let mut vb = VertexBuffer::new(2);
        for _ in 0..3 {
            vb.push_vertex([1.0; 3]);
        }
        assert!(vb.pad(1));
        assert_eq!(vb.vertex_count(), 4);
        assert_eq!(vb.color_count(), 4);
        assert_eq!(vb.texcoord_count(), 4);
    }

    #[test]
    fn pad_refuses_overflow() {
        let mut vb = VertexBuffer::new(1);
        for _ in 0..3 {
            vb.push_vertex([1.0; 3]);
        }
        assert!(!vb.pad(2));
        assert_eq!(vb.vertex_count(), 3);
    }

    #[test]
    fn clear_resets_counters() {
        let mut vb = VertexBuffer::new(1);
        vb.push_vertex([0.0; 3]);
        vb.push_color(Color::WHITE);
        vb.push_texcoord([0.0; 2]);
        vb.clear();
        assert_eq!(vb.vertex_count(), 0);
        assert_eq!(vb.color_count(), 0);
        assert_eq!(vb.texcoord_count(), 0);
    }
}
