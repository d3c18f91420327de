use serde::{Deserialize, Serialize};
use std::fmt;

/// Backend texture handle. Zero is never handed out by a backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct TextureId(pub u32);

impl TextureId {
    pub const INVALID: TextureId = TextureId(0);

    pub fn is_valid(self) -> bool {
        self.0 != 0
    }
}

impl fmt::Display for TextureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "texture-{}", self.0)
    }
}

/// Backend shader program handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ShaderId(pub u32);

impl ShaderId {
    pub const INVALID: ShaderId = ShaderId(0);

    pub fn is_valid(self) -> bool {
        self.0 != 0
    }
}

impl fmt::Display for ShaderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "shader-{}", self.0)
    }
}

/// Backend vertex buffer handle (one per CPU-side vertex buffer).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct BufferId(pub u32);

impl fmt::Display for BufferId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "buffer-{}", self.0)
    }
}

/// Rectangle of the framebuffer that draws land in, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Half-width viewport for stereo eye `eye` (0 = left, 1 = right).
    pub fn eye(&self, eye: u32) -> Self {
        let half = self.width / 2;
        Self {
            x: self.x + eye * half,
            y: self.y,
            width: half,
            height: self.height,
        }
    }
}
