//! Still frames grabbed from a live video stream.
//!
//! A [`Frame`] is a tightly packed RGBA raster at the video's native
//! resolution. The browser fills it from an offscreen canvas; tests build
//! them by hand. Mirroring and JPEG re-encoding happen here so both targets
//! share one implementation.

#[cfg(test)]
#[path = "frame_test.rs"]
mod frame_test;

use base64::Engine as _;
use image::ExtendedColorType;
use image::codecs::jpeg::JpegEncoder;

/// Quality used when re-encoding a confirmed still (0.9 on the canvas scale).
pub const JPEG_QUALITY: u8 = 90;

const BYTES_PER_PIXEL: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FrameError {
    #[error("frame has zero area ({width}x{height})")]
    Empty { width: u32, height: u32 },

    #[error("frame is too large to address ({width}x{height})")]
    TooLarge { width: u32, height: u32 },

    #[error("RGBA buffer holds {actual} bytes, expected {expected}")]
    BufferSize { expected: usize, actual: usize },

    #[error("JPEG encode failed: {0}")]
    Encode(String),
}

/// RGBA still image.
#[derive(Clone, PartialEq, Eq)]
pub struct Frame {
    width: u32,
    height: u32,
    rgba: Vec<u8>,
}

impl Frame {
    /// Wrap an RGBA buffer of `width * height * 4` bytes.
    ///
    /// # Errors
    ///
    /// Returns [`FrameError::Empty`] for a zero dimension and
    /// [`FrameError::BufferSize`] when the buffer length does not match.
    pub fn new(width: u32, height: u32, rgba: Vec<u8>) -> Result<Self, FrameError> {
        let expected = byte_len(width, height)?;
        if rgba.len() != expected {
            return Err(FrameError::BufferSize { expected, actual: rgba.len() });
        }
        Ok(Self { width, height, rgba })
    }

    /// A frame filled with one color.
    ///
    /// # Errors
    ///
    /// Returns [`FrameError::Empty`] for a zero dimension and
    /// [`FrameError::TooLarge`] when the buffer size overflows `usize`.
    pub fn solid(width: u32, height: u32, rgba: [u8; 4]) -> Result<Self, FrameError> {
        let pixels = byte_len(width, height)? / BYTES_PER_PIXEL;
        Self::new(width, height, rgba.repeat(pixels))
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn as_rgba(&self) -> &[u8] {
        &self.rgba
    }

    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        let offset = self.offset(x, y)?;
        let px = self.rgba.get(offset..offset + BYTES_PER_PIXEL)?;
        Some([px[0], px[1], px[2], px[3]])
    }

    pub fn set_pixel(&mut self, x: u32, y: u32, rgba: [u8; 4]) {
        if let Some(offset) = self.offset(x, y) {
            self.rgba[offset..offset + BYTES_PER_PIXEL].copy_from_slice(&rgba);
        }
    }

    /// Flip left-right in place.
    pub fn mirror_horizontal(&mut self) {
        let row_len = self.width as usize * BYTES_PER_PIXEL;
        for row in self.rgba.chunks_exact_mut(row_len) {
            let (mut left, mut right) = (0_usize, self.width as usize - 1);
            while left < right {
                let (l, r) = (left * BYTES_PER_PIXEL, right * BYTES_PER_PIXEL);
                for i in 0..BYTES_PER_PIXEL {
                    row.swap(l + i, r + i);
                }
                left += 1;
                right -= 1;
            }
        }
    }

    /// Encode as baseline JPEG. Alpha is dropped.
    ///
    /// # Errors
    ///
    /// Returns [`FrameError::Encode`] if the encoder rejects the raster.
    pub fn encode_jpeg(&self, quality: u8) -> Result<Vec<u8>, FrameError> {
        let rgb: Vec<u8> = self
            .rgba
            .chunks_exact(BYTES_PER_PIXEL)
            .flat_map(|px| [px[0], px[1], px[2]])
            .collect();
        let mut out = Vec::new();
        JpegEncoder::new_with_quality(&mut out, quality.clamp(1, 100))
            .encode(&rgb, self.width, self.height, ExtendedColorType::Rgb8)
            .map_err(|e| FrameError::Encode(e.to_string()))?;
        Ok(out)
    }

    /// `data:image/jpeg` URL for previewing the frame.
    ///
    /// # Errors
    ///
    /// Propagates [`FrameError::Encode`].
    pub fn jpeg_data_url(&self, quality: u8) -> Result<String, FrameError> {
        let jpeg = self.encode_jpeg(quality)?;
        let encoded = base64::engine::general_purpose::STANDARD.encode(jpeg);
        Ok(format!("data:image/jpeg;base64,{encoded}"))
    }

    fn offset(&self, x: u32, y: u32) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize * self.width as usize + x as usize) * BYTES_PER_PIXEL)
    }
}

impl std::fmt::Debug for Frame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Frame")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}

/// RGBA byte length of a `width` by `height` frame.
fn byte_len(width: u32, height: u32) -> Result<usize, FrameError> {
    if width == 0 || height == 0 {
        return Err(FrameError::Empty { width, height });
    }
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|px| px.checked_mul(BYTES_PER_PIXEL))
        .ok_or(FrameError::TooLarge { width, height })
}
