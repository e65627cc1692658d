//! Application icon pixels.
//!
//! The icon is either a user-supplied PNG or a generated badge. Backends
//! consume it as PNG bytes (macOS `NSImage`) or as BGRA pixels plus a
//! monochrome AND mask (Win32 `CreateIconIndirect`).

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};

use crate::error::IconError;
use crate::model::constants::{rgb_bytes, COLOR_IDLE};

/// Default edge length of the generated badge.
pub const DEFAULT_ICON_SIZE: u32 = 64;

/// Straight (non-premultiplied) RGBA pixels, row-major, top row first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconImage {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

impl IconImage {
    /// Blue disc with a white centre dot on a transparent square.
    pub fn badge(size: u32) -> Self {
        let size = size.max(1);
        let (r, g, b) = rgb_bytes(COLOR_IDLE);
        let centre = size as f64 / 2.0;
        let outer = size as f64 * 14.0 / 32.0;
        let dot = size as f64 * 3.0 / 32.0;

        let mut rgba = Vec::with_capacity((size * size * 4) as usize);
        for y in 0..size {
            for x in 0..size {
                let dx = x as f64 + 0.5 - centre;
                let dy = y as f64 + 0.5 - centre;
                let d = (dx * dx + dy * dy).sqrt();
                let px = if d <= dot {
                    [0xFF, 0xFF, 0xFF, 0xFF]
                } else if d <= outer {
                    [r, g, b, 0xFF]
                } else {
                    [0, 0, 0, 0]
                };
                rgba.extend_from_slice(&px);
            }
        }

        Self {
            width: size,
            height: size,
            rgba,
        }
    }

    /// Decode PNG (or any format the `image` crate was built with).
    pub fn from_png(bytes: &[u8]) -> Result<Self, IconError> {
        if bytes.is_empty() {
            return Err(IconError::Empty);
        }
        let decoded = image::load_from_memory(bytes)
            .map_err(IconError::Decode)?
            .to_rgba8();
        let (width, height) = decoded.dimensions();
        if width == 0 || height == 0 {
            return Err(IconError::ZeroSize);
        }
        Ok(Self {
            width,
            height,
            rgba: decoded.into_raw(),
        })
    }

    pub fn to_png(&self) -> Result<Vec<u8>, IconError> {
        let mut out = Vec::new();
        PngEncoder::new(&mut out)
            .write_image(&self.rgba, self.width, self.height, ExtendedColorType::Rgba8)
            .map_err(IconError::Encode)?;
        Ok(out)
    }

    /// Nearest-neighbour rescale to a `size`×`size` square.
    pub fn resize_nearest(&self, size: u32) -> Self {
        let size = size.max(1);
        if self.width == size && self.height == size {
            return self.clone();
        }
        let mut rgba = Vec::with_capacity((size * size * 4) as usize);
        for y in 0..size {
            let sy = (y as u64 * self.height as u64 / size as u64) as usize;
            for x in 0..size {
                let sx = (x as u64 * self.width as u64 / size as u64) as usize;
                let i = (sy * self.width as usize + sx) * 4;
                rgba.extend_from_slice(&self.rgba[i..i + 4]);
            }
        }
        Self {
            width: size,
            height: size,
            rgba,
        }
    }

    /// Pixels reordered to BGRA, the layout of a 32-bit DIB.
    pub fn to_bgra(&self) -> Vec<u8> {
        self.rgba
            .chunks_exact(4)
            .flat_map(|px| [px[2], px[1], px[0], px[3]])
            .collect()
    }

    /// 1-bpp transparency mask: bit set where alpha is zero.
    ///
    /// Rows are padded to a 16-bit boundary, the stride monochrome bitmaps
    /// expect.
    pub fn and_mask(&self) -> Vec<u8> {
        let stride = self.mask_stride();
        let mut mask = vec![0u8; stride * self.height as usize];
        for y in 0..self.height as usize {
            for x in 0..self.width as usize {
                let alpha = self.rgba[(y * self.width as usize + x) * 4 + 3];
                if alpha == 0 {
                    mask[y * stride + x / 8] |= 0x80 >> (x % 8);
                }
            }
        }
        mask
    }

    /// Bytes per row of [`and_mask`](Self::and_mask).
    pub fn mask_stride(&self) -> usize {
        (self.width as usize).div_ceil(16) * 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pixel(img: &IconImage, x: u32, y: u32) -> [u8; 4] {
        let i = ((y * img.width + x) * 4) as usize;
        [img.rgba[i], img.rgba[i + 1], img.rgba[i + 2], img.rgba[i + 3]]
    }

    #[test]
    fn badge_layers() {
        let img = IconImage::badge(32);
        assert_eq!(img.rgba.len(), 32 * 32 * 4);
        assert_eq!(pixel(&img, 16, 16), [0xFF, 0xFF, 0xFF, 0xFF]);
        assert_eq!(pixel(&img, 16, 8), [0x00, 0x78, 0xD4, 0xFF]);
        assert_eq!(pixel(&img, 0, 0), [0, 0, 0, 0]);
    }

    #[test]
    fn bgra_swaps_red_and_blue() {
        let img = IconImage {
            width: 1,
            height: 1,
            rgba: vec![1, 2, 3, 4],
        };
        assert_eq!(img.to_bgra(), vec![3, 2, 1, 4]);
    }

    #[test]
    fn and_mask_marks_transparent_pixels() {
        let img = IconImage {
            width: 3,
            height: 1,
            rgba: vec![0, 0, 0, 0, 9, 9, 9, 255, 0, 0, 0, 0],
        };
        assert_eq!(img.mask_stride(), 2);
        assert_eq!(img.and_mask(), vec![0b1010_0000, 0]);
    }

    #[test]
    fn resize_nearest_samples_top_left_of_each_cell() {
        let img = IconImage {
            width: 2,
            height: 2,
            rgba: vec![
                1, 1, 1, 1, 2, 2, 2, 2, //
                3, 3, 3, 3, 4, 4, 4, 4,
            ],
        };
        let big = img.resize_nearest(4);
        assert_eq!(big.width, 4);
        assert_eq!(pixel(&big, 1, 1), [1, 1, 1, 1]);
        assert_eq!(pixel(&big, 2, 0), [2, 2, 2, 2]);
        assert_eq!(pixel(&big, 3, 3), [4, 4, 4, 4]);
        assert_eq!(big.resize_nearest(1).rgba, vec![1, 1, 1, 1]);
    }

    #[test]
    fn empty_png_is_rejected() {
        assert!(matches!(IconImage::from_png(&[]), Err(IconError::Empty)));
    }

    #[test]
    fn garbage_png_is_a_decode_error() {
        assert!(matches!(
            IconImage::from_png(b"not an image"),
            Err(IconError::Decode(_))
        ));
    }
}
