#![deny(unsafe_code)]
//! Rendering for the itten color advisor: turns resolved color records into
//! RGBA pixel buffers and PNG files.
//!
//! The core never draws. Front-ends hand this crate the ordered records a
//! [`ColorWheel`](itten_core::ColorWheel) returns and get back a buffer laid
//! out in the same order.

pub mod pixel;
pub mod text;

#[cfg(feature = "png")]
pub mod snapshot;

use itten_core::Rgb;
use thiserror::Error;

/// Errors produced while rendering.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Nothing to draw.
    #[error("nothing to render: no colors given")]
    Empty,

    /// Requested image size cannot hold the layout.
    #[error("invalid dimensions: {0}")]
    InvalidDimensions(String),

    /// Writing the image failed.
    #[error("i/o error: {0}")]
    Io(String),

    /// Font data could not be parsed.
    #[error("invalid font: {0}")]
    Font(String),
}

/// Largest buffer [`RgbaBuffer::new`] will allocate, in pixels (64 MiB of RGBA).
pub const MAX_PIXELS: u64 = 4096 * 4096;

/// An owned RGBA8 image buffer, row-major, `width * height * 4` bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbaBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl RgbaBuffer {
    /// Creates a buffer filled with an opaque background color.
    ///
    /// Rejects empty sizes and anything above [`MAX_PIXELS`].
    pub fn new(width: u32, height: u32, background: Rgb) -> Result<Self, RenderError> {
        if width == 0 || height == 0 {
            return Err(RenderError::InvalidDimensions(format!(
                "{width}x{height} has no pixels"
            )));
        }
        if u64::from(width) * u64::from(height) > MAX_PIXELS {
            return Err(RenderError::InvalidDimensions(format!(
                "{width}x{height} exceeds the {MAX_PIXELS} pixel limit"
            )));
        }
        let data = [background.r, background.g, background.b, 255]
            .repeat(width as usize * height as usize);
        Ok(Self {
            width,
            height,
            data,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    /// Color at `(x, y)`, or `None` outside the buffer.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * 4;
        Some(Rgb::new(self.data[i], self.data[i + 1], self.data[i + 2]))
    }

    /// Sets one pixel; coordinates outside the buffer are ignored.
    pub fn put(&mut self, x: u32, y: u32, color: Rgb) {
        if x >= self.width || y >= self.height {
            return;
        }
        let i = (y as usize * self.width as usize + x as usize) * 4;
        self.data[i..i + 4].copy_from_slice(&[color.r, color.g, color.b, 255]);
    }

    /// Mixes `color` over the existing pixel by `coverage` in [0, 1].
    pub fn blend(&mut self, x: u32, y: u32, color: Rgb, coverage: f32) {
        let Some(under) = self.pixel(x, y) else {
            return;
        };
        let a = coverage.clamp(0.0, 1.0);
        let mix = |fg: u8, bg: u8| (fg as f32 * a + bg as f32 * (1.0 - a)).round() as u8;
        self.put(
            x,
            y,
            Rgb::new(mix(color.r, under.r), mix(color.g, under.g), mix(color.b, under.b)),
        );
    }

    /// Fills the half-open rectangle `[x0, x1) x [y0, y1)`, clipped to the buffer.
    pub fn fill_rect(&mut self, x0: u32, y0: u32, x1: u32, y1: u32, color: Rgb) {
        for y in y0..y1.min(self.height) {
            for x in x0..x1.min(self.width) {
                self.put(x, y, color);
            }
        }
    }

    /// Draws a `thickness`-pixel border along the buffer edges.
    pub fn frame(&mut self, thickness: u32, color: Rgb) {
        let (w, h) = (self.width, self.height);
        self.fill_rect(0, 0, w, thickness, color);
        self.fill_rect(0, h.saturating_sub(thickness), w, h, color);
        self.fill_rect(0, 0, thickness, h, color);
        self.fill_rect(w.saturating_sub(thickness), 0, w, h, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rejects_zero_dimensions() {
        assert!(matches!(
            RgbaBuffer::new(0, 10, Rgb::WHITE),
            Err(RenderError::InvalidDimensions(_))
        ));
        assert!(RgbaBuffer::new(10, 0, Rgb::WHITE).is_err());
    }

    #[test]
    fn new_rejects_sizes_above_pixel_limit() {
        assert!(matches!(
            RgbaBuffer::new(u32::MAX, u32::MAX, Rgb::WHITE),
            Err(RenderError::InvalidDimensions(_))
        ));
        assert!(RgbaBuffer::new(4097, 4096, Rgb::WHITE).is_err());
        assert!(RgbaBuffer::new(4096, 1, Rgb::WHITE).is_ok());
    }

    #[test]
    fn blend_mixes_by_coverage() {
        let mut buf = RgbaBuffer::new(3, 1, Rgb::WHITE).unwrap();
        buf.blend(0, 0, Rgb::BLACK, 1.0);
        buf.blend(1, 0, Rgb::BLACK, 0.0);
        buf.blend(2, 0, Rgb::BLACK, 0.5);
        buf.blend(9, 9, Rgb::BLACK, 1.0);
        assert_eq!(buf.pixel(0, 0), Some(Rgb::BLACK));
        assert_eq!(buf.pixel(1, 0), Some(Rgb::WHITE));
        assert_eq!(buf.pixel(2, 0), Some(Rgb::new(128, 128, 128)));
    }

    #[test]
    fn new_fills_background_with_opaque_alpha() {
        let buf = RgbaBuffer::new(3, 2, Rgb::new(1, 2, 3)).unwrap();
        assert_eq!(buf.data().len(), 3 * 2 * 4);
        assert!(buf.data().chunks(4).all(|px| px == [1, 2, 3, 255]));
    }

    #[test]
    fn put_and_pixel_agree() {
        let mut buf = RgbaBuffer::new(4, 4, Rgb::WHITE).unwrap();
        buf.put(2, 3, Rgb::BLACK);
        assert_eq!(buf.pixel(2, 3), Some(Rgb::BLACK));
        assert_eq!(buf.pixel(3, 2), Some(Rgb::WHITE));
        assert_eq!(buf.pixel(4, 0), None);
    }

    #[test]
    fn fill_rect_clips_to_buffer() {
        let mut buf = RgbaBuffer::new(4, 4, Rgb::WHITE).unwrap();
        buf.fill_rect(2, 2, 100, 100, Rgb::BLACK);
        assert_eq!(buf.pixel(3, 3), Some(Rgb::BLACK));
        assert_eq!(buf.pixel(1, 1), Some(Rgb::WHITE));
    }

    #[test]
    fn frame_paints_edges_only() {
        let mut buf = RgbaBuffer::new(10, 10, Rgb::WHITE).unwrap();
        buf.frame(2, Rgb::BLACK);
        assert_eq!(buf.pixel(0, 5), Some(Rgb::BLACK));
        assert_eq!(buf.pixel(9, 9), Some(Rgb::BLACK));
        assert_eq!(buf.pixel(8, 1), Some(Rgb::BLACK));
        assert_eq!(buf.pixel(5, 5), Some(Rgb::WHITE));
        assert_eq!(buf.pixel(2, 2), Some(Rgb::WHITE));
    }

    #[test]
    fn render_error_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<RenderError>();
    }
}
