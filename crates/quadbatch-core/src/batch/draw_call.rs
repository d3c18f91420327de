use quadbatch_common::TextureId;

/// Primitive topology of a draw call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DrawMode {
    Lines,
    Triangles,
    Quads,
}

impl DrawMode {
    /// Padding vertices needed after `count` vertices of this mode so the
    /// next call starts on a four-vertex boundary.
    ///
    /// Quads are always aligned. Lines and triangles use their usual
    /// padding rule; malformed counts (odd line vertices, partial
    /// triangles) are rounded up to the next multiple of four instead.
    pub fn alignment(self, count: usize) -> usize {
        let raw = match self {
            DrawMode::Lines => {
                if count < 4 {
                    count
                } else {
                    count % 4
                }
            }
            DrawMode::Triangles => {
                if count < 4 {
                    1
                } else {
                    4 - (count % 4)
                }
            }
            DrawMode::Quads => return 0,
        };

        if (count + raw) % 4 == 0 {
            raw
        } else {
            (4 - count % 4) % 4
        }
    }
}

/// One contiguous run of vertices sharing topology and texture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawCall {
    pub mode: DrawMode,
    pub texture: TextureId,
    pub vertex_count: usize,
    pub vertex_alignment: usize,
}

impl DrawCall {
    pub fn new(mode: DrawMode, texture: TextureId) -> Self {
        Self {
            mode,
            texture,
            vertex_count: 0,
            vertex_alignment: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.vertex_count == 0
    }

    /// Compute and store this call's alignment padding.
    pub fn close_out(&mut self) -> usize {
        self.vertex_alignment = self.mode.alignment(self.vertex_count);
        self.vertex_alignment
    }

    /// Vertices this call occupies in the buffer, padding included.
    pub fn span(&self) -> usize {
        self.vertex_count + self.vertex_alignment
    }

    pub(crate) fn reset(&mut self, mode: DrawMode, texture: TextureId) {
        *self = Self::new(mode, texture);
    }
}
