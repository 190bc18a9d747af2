//! Procedural texel buffers for untextured surfaces.

/// The ground plane's color: a single flat green texel.
pub const GROUND_GREEN: [u8; 4] = [0, 204, 0, 255];

/// A CPU-side RGBA8 pixel buffer ready for texture upload.
#[derive(Debug, Clone, PartialEq)]
pub struct TexelBuffer {
    /// Width in texels.
    pub width: u32,
    /// Height in texels.
    pub height: u32,
    /// Tightly packed RGBA8 data, row-major from the top-left.
    pub pixels: Vec<u8>,
}

impl TexelBuffer {
    /// The texel at `(x, y)`.
    ///
    /// # Panics
    /// Panics if the coordinates are outside the buffer.
    #[must_use]
    pub fn texel(&self, x: u32, y: u32) -> [u8; 4] {
        assert!(x < self.width && y < self.height);
        let offset = ((y * self.width + x) * 4) as usize;
        [
            self.pixels[offset],
            self.pixels[offset + 1],
            self.pixels[offset + 2],
            self.pixels[offset + 3],
        ]
    }
}

/// A 1×1 buffer of a single color.
#[must_use]
pub fn solid_texel(rgba: [u8; 4]) -> TexelBuffer {
    TexelBuffer {
        width: 1,
        height: 1,
        pixels: rgba.to_vec(),
    }
}

/// A square checkerboard with 4×4 cells of the two colors.
#[must_use]
pub fn checkerboard(size: u32, color_a: [u8; 4], color_b: [u8; 4]) -> TexelBuffer {
    let cell = (size / 4).max(1);
    let mut pixels = Vec::with_capacity((size * size * 4) as usize);
    for y in 0..size {
        for x in 0..size {
            let color = if ((x / cell) + (y / cell)).is_multiple_of(2) {
                color_a
            } else {
                color_b
            };
            pixels.extend_from_slice(&color);
        }
    }
    TexelBuffer {
        width: size,
        height: size,
        pixels,
    }
}
