//! Glyph rasterization onto an [`RgbaBuffer`].
//!
//! Text is optional everywhere: layouts take an `Option<&Typeface>` and draw
//! plain swatches when no font could be loaded.

use crate::{RenderError, RgbaBuffer};
use ab_glyph::{point, Font, FontArc, GlyphId, PxScale, ScaleFont};
use itten_core::Rgb;
use std::path::Path;

/// Well-known font locations tried by [`Typeface::system`], in order.
const SYSTEM_FONTS: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/truetype/Carlito-Regular.ttf",
    "/System/Library/Fonts/Helvetica.ttc",
    "/Library/Fonts/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

/// Suffix appended by [`Typeface::fit`] to shortened text.
const ELLIPSIS: &str = "..";

/// A loaded font used for captions.
#[derive(Clone)]
pub struct Typeface {
    font: FontArc,
}

impl std::fmt::Debug for Typeface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Typeface")
            .field("glyphs", &self.font.glyph_count())
            .finish()
    }
}

impl Typeface {
    /// Parses TrueType/OpenType font data.
    pub fn from_bytes(data: Vec<u8>) -> Result<Self, RenderError> {
        let font = FontArc::try_from_vec(data).map_err(|e| RenderError::Font(e.to_string()))?;
        Ok(Self { font })
    }

    /// Reads and parses a font file.
    pub fn from_file(path: &Path) -> Result<Self, RenderError> {
        let data = std::fs::read(path)
            .map_err(|e| RenderError::Io(format!("cannot read font {}: {e}", path.display())))?;
        Self::from_bytes(data)
    }

    /// First readable font among the usual system locations.
    pub fn system() -> Option<Self> {
        SYSTEM_FONTS.iter().find_map(|candidate| {
            let path = Path::new(candidate);
            if !path.exists() {
                return None;
            }
            match Self::from_file(path) {
                Ok(face) => {
                    tracing::debug!(path = %path.display(), "loaded system font");
                    Some(face)
                }
                Err(e) => {
                    tracing::debug!(path = %path.display(), error = %e, "skipping font");
                    None
                }
            }
        })
    }

    /// Advance width of a single line at `px` pixels per em.
    pub fn text_width(&self, text: &str, px: f32) -> f32 {
        let font = self.font.as_scaled(PxScale::from(px));
        let mut width = 0.0;
        let mut prev: Option<GlyphId> = None;
        for c in text.chars() {
            let id = font.glyph_id(c);
            if let Some(prev) = prev {
                width += font.kern(prev, id);
            }
            width += font.h_advance(id);
            prev = Some(id);
        }
        width
    }

    /// Distance between baselines at `px`.
    pub fn line_height(&self, px: f32) -> f32 {
        self.font.as_scaled(PxScale::from(px)).height()
    }

    /// `text`, shortened with a ".." suffix until it fits in `max_width`.
    pub fn fit(&self, text: &str, px: f32, max_width: f32) -> String {
        if self.text_width(text, px) <= max_width {
            return text.to_string();
        }
        let mut chars: Vec<char> = text.chars().collect();
        while chars.pop().is_some() {
            let head: String = chars.iter().collect();
            let candidate = format!("{}{ELLIPSIS}", head.trim_end());
            if self.text_width(&candidate, px) <= max_width {
                return candidate;
            }
        }
        String::new()
    }

    /// Draws one line with its top-left corner at `(x, top)`. Glyph pixels
    /// outside the buffer are dropped.
    pub fn draw(&self, buf: &mut RgbaBuffer, text: &str, x: f32, top: f32, px: f32, color: Rgb) {
        let scale = PxScale::from(px);
        let font = self.font.as_scaled(scale);
        let baseline = top + font.ascent();
        let mut caret = x;
        let mut prev: Option<GlyphId> = None;
        for c in text.chars() {
            let id = font.glyph_id(c);
            if let Some(prev) = prev {
                caret += font.kern(prev, id);
            }
            let glyph = id.with_scale_and_position(scale, point(caret, baseline));
            caret += font.h_advance(id);
            prev = Some(id);

            let Some(outline) = self.font.outline_glyph(glyph) else {
                continue;
            };
            let bounds = outline.px_bounds();
            outline.draw(|gx, gy, coverage| {
                let px_x = bounds.min.x as i64 + i64::from(gx);
                let px_y = bounds.min.y as i64 + i64::from(gy);
                if let (Ok(px_x), Ok(px_y)) = (u32::try_from(px_x), u32::try_from(px_y)) {
                    buf.blend(px_x, px_y, color, coverage);
                }
            });
        }
    }

    /// Draws one line horizontally centered on `center_x`.
    pub fn draw_centered(
        &self,
        buf: &mut RgbaBuffer,
        text: &str,
        center_x: f32,
        top: f32,
        px: f32,
        color: Rgb,
    ) {
        let x = center_x - self.text_width(text, px) / 2.0;
        self.draw(buf, text, x, top, px, color);
    }
}
