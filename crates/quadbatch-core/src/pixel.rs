//! Pixel formats and the codec that packs/unpacks them.
//!
//! Lives beside the batching core rather than inside it: backends use it
//! to turn caller texture data into whatever layout they upload.

use quadbatch_common::{BackendError, Color};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PixelFormat {
    /// 8-bit luminance.
    Grayscale,
    /// 8-bit luminance + 8-bit alpha.
    GrayAlpha,
    /// 16-bit packed, no alpha.
    R5G6B5,
    R8G8B8,
    /// 16-bit packed, 1-bit alpha.
    R5G5B5A1,
    R4G4B4A4,
    R8G8B8A8,
    /// 32-bit float luminance.
    R32,
    R32G32B32A32,
}

impl PixelFormat {
    pub fn bytes_per_pixel(self) -> usize {
        match self {
            PixelFormat::Grayscale => 1,
            PixelFormat::GrayAlpha | PixelFormat::R5G6B5 => 2,
            PixelFormat::R5G5B5A1 | PixelFormat::R4G4B4A4 => 2,
            PixelFormat::R8G8B8 => 3,
            PixelFormat::R8G8B8A8 | PixelFormat::R32 => 4,
            PixelFormat::R32G32B32A32 => 16,
        }
    }

    /// Bytes needed for a `width` × `height` image.
    pub fn data_size(self, width: u32, height: u32) -> usize {
        width as usize * height as usize * self.bytes_per_pixel()
    }
}

/// Converts between RGBA colors and packed pixel bytes.
pub trait PixelCodec {
    fn encode(&self, pixels: &[Color], format: PixelFormat) -> Vec<u8>;

    fn decode(&self, data: &[u8], format: PixelFormat) -> Result<Vec<Color>, BackendError>;
}

/// Little-endian packing of every [`PixelFormat`].
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardCodec;

fn luminance(c: Color) -> f32 {
    c.r as f32 * 0.299 + c.g as f32 * 0.587 + c.b as f32 * 0.114
}

fn to_bits(v: u8, bits: u32) -> u16 {
    let max = (1u32 << bits) - 1;
    ((v as u32 * max + 127) / 255) as u16
}

fn from_bits(v: u16, bits: u32) -> u8 {
    let max = (1u32 << bits) - 1;
    ((v as u32 * 255 + max / 2) / max) as u8
}

impl PixelCodec for StandardCodec {
    fn encode(&self, pixels: &[Color], format: PixelFormat) -> Vec<u8> {
        let mut out = Vec::with_capacity(pixels.len() * format.bytes_per_pixel());
        for &c in pixels {
            match format {
                PixelFormat::Grayscale => out.push(luminance(c) as u8),
                PixelFormat::GrayAlpha => {
                    out.push(luminance(c) as u8);
                    out.push(c.a);
                }
                PixelFormat::R5G6B5 => {
                    let v = to_bits(c.r, 5) << 11 | to_bits(c.g, 6) << 5 | to_bits(c.b, 5);
                    out.extend_from_slice(&v.to_le_bytes());
                }
                PixelFormat::R8G8B8 => out.extend_from_slice(&[c.r, c.g, c.b]),
                PixelFormat::R5G5B5A1 => {
                    let a = u16::from(c.a > 50);
                    let v = to_bits(c.r, 5) << 11 | to_bits(c.g, 5) << 6 | to_bits(c.b, 5) << 1 | a;
                    out.extend_from_slice(&v.to_le_bytes());
                }
                PixelFormat::R4G4B4A4 => {
                    let v = to_bits(c.r, 4) << 12
                        | to_bits(c.g, 4) << 8
                        | to_bits(c.b, 4) << 4
                        | to_bits(c.a, 4);
                    out.extend_from_slice(&v.to_le_bytes());
                }
                PixelFormat::R8G8B8A8 => out.extend_from_slice(&c.to_array()),
                PixelFormat::R32 => {
                    out.extend_from_slice(&(luminance(c) / 255.0).to_le_bytes());
                }
                PixelFormat::R32G32B32A32 => {
                    for v in c.to_array() {
                        out.extend_from_slice(&(v as f32 / 255.0).to_le_bytes());
                    }
                }
            }
        }
        out
    }

    fn decode(&self, data: &[u8], format: PixelFormat) -> Result<Vec<Color>, BackendError> {
        let bpp = format.bytes_per_pixel();
        if data.len() % bpp != 0 {
            return Err(BackendError::Texture(format!(
                "{} bytes is not a whole number of {format:?} pixels",
                data.len()
            )));
        }

        let float = |b: &[u8]| {
            let v = f32::from_le_bytes([b[0], b[1], b[2], b[3]]);
            (v.clamp(0.0, 1.0) * 255.0).round() as u8
        };

        let colors = data
            .chunks_exact(bpp)
            .map(|p| match format {
                PixelFormat::Grayscale => Color::from_rgba(p[0], p[0], p[0], 255),
                PixelFormat::GrayAlpha => Color::from_rgba(p[0], p[0], p[0], p[1]),
                PixelFormat::R5G6B5 => {
                    let v = u16::from_le_bytes([p[0], p[1]]);
                    Color::from_rgba(
                        from_bits(v >> 11, 5),
                        from_bits((v >> 5) & 0x3f, 6),
                        from_bits(v & 0x1f, 5),
                        255,
                    )
                }
                PixelFormat::R8G8B8 => Color::from_rgba(p[0], p[1], p[2], 255),
                PixelFormat::R5G5B5A1 => {
                    let v = u16::from_le_bytes([p[0], p[1]]);
                    Color::from_rgba(
                        from_bits(v >> 11, 5),
                        from_bits((v >> 6) & 0x1f, 5),
                        from_bits((v >> 1) & 0x1f, 5),
                        if v & 1 == 1 { 255 } else { 0 },
                    )
                }
                PixelFormat::R4G4B4A4 => {
                    let v = u16::from_le_bytes([p[0], p[1]]);
                    Color::from_rgba(
                        from_bits(v >> 12, 4),
                        from_bits((v >> 8) & 0xf, 4),
                        from_bits((v >> 4) & 0xf, 4),
                        from_bits(v & 0xf, 4),
                    )
                }
                PixelFormat::R8G8B8A8 => Color::from_rgba(p[0], p[1], p[2], p[3]),
                PixelFormat::R32 => {
                    let g = float(p);
                    Color::from_rgba(g, g, g, 255)
                }
                PixelFormat::R32G32B32A32 => Color::from_rgba(
                    float(&p[0..4]),
                    float(&p[4..8]),
                    float(&p[8..12]),
                    float(&p[12..16]),
                ),
            })
            .collect();

        Ok(colors)
    }
}
