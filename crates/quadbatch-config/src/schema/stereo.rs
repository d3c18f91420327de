//! Stereo rendering and framebuffer configuration.

use serde::{Deserialize, Serialize};

/// Dual-view rendering settings.
///
/// When enabled, every flush is issued once per eye into a half-width
/// viewport. The eye separation derives the default per-eye view offsets.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StereoConfig {
    pub enabled: bool,
    /// Distance between the eyes in world units (valid range: 0.0-1.0).
    pub eye_separation: f32,
}

impl Default for StereoConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            eye_separation: 0.0635,
        }
    }
}

/// Framebuffer size used for viewports.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FramebufferConfig {
    /// Width in pixels (valid range: 1-16384).
    pub width: u32,
    /// Height in pixels (valid range: 1-16384).
    pub height: u32,
}

impl Default for FramebufferConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 450,
        }
    }
}
