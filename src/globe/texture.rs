//! Procedural globe textures.
//!
//! Generates the earth surface and cloud layer as RGBA images. Everything
//! is derived from a small integer hash, so the imagery is identical on
//! every run and across platforms (no RNG dependency).

/// An RGBA8 image destined for GL upload.
pub struct TextureImage {
    pub width: usize,
    pub height: usize,
    pub pixels: Vec<u8>,
}

impl TextureImage {
    fn filled(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![0u8; width * height * 4],
        }
    }

    fn put(&mut self, x: usize, y: usize, rgba: [u8; 4]) {
        let idx = (y * self.width + x) * 4;
        self.pixels[idx..idx + 4].copy_from_slice(&rgba);
    }

    fn get(&self, x: usize, y: usize) -> [u8; 4] {
        let idx = (y * self.width + x) * 4;
        [
            self.pixels[idx],
            self.pixels[idx + 1],
            self.pixels[idx + 2],
            self.pixels[idx + 3],
        ]
    }
}

const TEXTURE_WIDTH: usize = 256;
const TEXTURE_HEIGHT: usize = 128;

/// Latitude-banded surface gradient: polar blue through greens into arid
/// tones toward the opposite pole.
const SURFACE_BANDS: [(f32, [u8; 3]); 5] = [
    (0.0, [74, 144, 226]),
    (0.3, [46, 125, 50]),
    (0.6, [139, 195, 74]),
    (0.8, [255, 193, 7]),
    (1.0, [244, 67, 54]),
];

/// Deterministic hash of a seed and index onto [0, 1).
fn hash01(seed: u32, index: u32) -> f32 {
    let mut h = seed.wrapping_mul(0x9E37_79B9).wrapping_add(index);
    h ^= h >> 16;
    h = h.wrapping_mul(0x7FEB_352D);
    h ^= h >> 15;
    h = h.wrapping_mul(0x846C_A68B);
    h ^= h >> 16;
    (h as f32) / (u32::MAX as f32)
}

fn gradient_color(t: f32) -> [u8; 3] {
    let t = t.clamp(0.0, 1.0);
    for pair in SURFACE_BANDS.windows(2) {
        let (t0, c0) = pair[0];
        let (t1, c1) = pair[1];
        if t <= t1 {
            let f = if t1 > t0 { (t - t0) / (t1 - t0) } else { 0.0 };
            return [
                lerp_u8(c0[0], c1[0], f),
                lerp_u8(c0[1], c1[1], f),
                lerp_u8(c0[2], c1[2], f),
            ];
        }
    }
    SURFACE_BANDS[SURFACE_BANDS.len() - 1].1
}

fn lerp_u8(a: u8, b: u8, f: f32) -> u8 {
    (a as f32 + (b as f32 - a as f32) * f).round() as u8
}

/// Generates the earth surface texture: latitude gradient plus hashed
/// terrain speckle.
pub fn earth_texture() -> TextureImage {
    let mut image = TextureImage::filled(TEXTURE_WIDTH, TEXTURE_HEIGHT);

    for y in 0..TEXTURE_HEIGHT {
        let t = y as f32 / (TEXTURE_HEIGHT - 1) as f32;
        let [r, g, b] = gradient_color(t);
        for x in 0..TEXTURE_WIDTH {
            image.put(x, y, [r, g, b, 255]);
        }
    }

    // Speckle pass: small forest/ocean dots scattered by hash.
    const SPECKLES: u32 = 1000;
    const FOREST: [u8; 3] = [46, 125, 50];
    const OCEAN: [u8; 3] = [25, 118, 210];

    for i in 0..SPECKLES {
        let cx = (hash01(1, i) * TEXTURE_WIDTH as f32) as i32;
        let cy = (hash01(2, i) * TEXTURE_HEIGHT as f32) as i32;
        let radius = (hash01(3, i) * 3.0).ceil() as i32;
        let color = if hash01(4, i) > 0.5 { FOREST } else { OCEAN };

        for dy in -radius..=radius {
            for dx in -radius..=radius {
                if dx * dx + dy * dy > radius * radius {
                    continue;
                }
                let x = cx + dx;
                let y = cy + dy;
                if x < 0 || y < 0 || x >= TEXTURE_WIDTH as i32 || y >= TEXTURE_HEIGHT as i32 {
                    continue;
                }
                image.put(x as usize, y as usize, [color[0], color[1], color[2], 255]);
            }
        }
    }

    image
}

/// Generates the translucent cloud layer: hashed soft blobs on a clear
/// background.
pub fn clouds_texture() -> TextureImage {
    let mut image = TextureImage::filled(TEXTURE_WIDTH, TEXTURE_HEIGHT);

    const BLOBS: u32 = 50;
    for i in 0..BLOBS {
        let cx = hash01(11, i) * TEXTURE_WIDTH as f32;
        let cy = hash01(12, i) * TEXTURE_HEIGHT as f32;
        let radius = hash01(13, i) * 20.0 + 5.0;
        let strength = hash01(14, i) * 0.5 + 0.2;

        let x0 = (cx - radius).floor().max(0.0) as usize;
        let x1 = (cx + radius).ceil().min(TEXTURE_WIDTH as f32 - 1.0) as usize;
        let y0 = (cy - radius).floor().max(0.0) as usize;
        let y1 = (cy + radius).ceil().min(TEXTURE_HEIGHT as f32 - 1.0) as usize;

        for y in y0..=y1 {
            for x in x0..=x1 {
                let dx = x as f32 - cx;
                let dy = y as f32 - cy;
                let dist = (dx * dx + dy * dy).sqrt();
                if dist > radius {
                    continue;
                }

                // Soft edge falloff; overlapping blobs accumulate.
                let falloff = 1.0 - dist / radius;
                let alpha = (strength * falloff * 255.0) as u16;
                let existing = image.get(x, y)[3] as u16;
                let combined = (existing + alpha).min(230) as u8;
                image.put(x, y, [255, 255, 255, combined]);
            }
        }
    }

    image
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_textures_are_deterministic() {
        assert_eq!(earth_texture().pixels, earth_texture().pixels);
        assert_eq!(clouds_texture().pixels, clouds_texture().pixels);
    }

    #[test]
    fn test_earth_texture_dimensions_and_opacity() {
        let image = earth_texture();
        assert_eq!(image.pixels.len(), image.width * image.height * 4);
        // Surface is fully opaque everywhere.
        assert!(image.pixels.chunks_exact(4).all(|px| px[3] == 255));
    }

    #[test]
    fn test_earth_gradient_runs_pole_to_pole() {
        let image = earth_texture();
        // North pole row leans blue, far row leans red (before speckle the
        // corners may be overwritten, so sample a full-row average).
        let row_avg = |y: usize| -> (u32, u32) {
            let mut r = 0u32;
            let mut b = 0u32;
            for x in 0..image.width {
                let px = image.get(x, y);
                r += px[0] as u32;
                b += px[2] as u32;
            }
            (r, b)
        };

        let (top_r, top_b) = row_avg(0);
        let (bottom_r, bottom_b) = row_avg(image.height - 1);
        assert!(top_b > top_r, "north rows should lean blue");
        assert!(bottom_r > bottom_b, "south rows should lean red");
    }

    #[test]
    fn test_cloud_alpha_bounded() {
        let image = clouds_texture();
        assert!(image.pixels.chunks_exact(4).all(|px| px[3] <= 230));
        // Some cloud cover exists.
        assert!(image.pixels.chunks_exact(4).any(|px| px[3] > 0));
    }
}
