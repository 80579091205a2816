//! PNG encoding of an [`RgbaBuffer`].
//!
//! Feature-gated behind `png` (default on) so that consumers that only need
//! raw pixel buffers do not pull in the `image` crate.

use crate::{RenderError, RgbaBuffer};
use std::path::Path;

/// Writes the buffer as a PNG image.
///
/// Returns `RenderError::Io` on encode or write failure.
pub fn write_png(buf: &RgbaBuffer, path: &Path) -> Result<(), RenderError> {
    let img = image::RgbaImage::from_raw(buf.width(), buf.height(), buf.data().to_vec())
        .ok_or_else(|| RenderError::Io("RGBA buffer size mismatch".into()))?;
    img.save(path).map_err(|e| RenderError::Io(e.to_string()))
}
