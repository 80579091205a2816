//! Pure-computation layouts from color records to [`RgbaBuffer`]s.
//!
//! Always available (no feature gate); the `png` snapshot path only encodes
//! what these functions produce. Captions are drawn only when a
//! [`Typeface`] is supplied.

use crate::text::Typeface;
use crate::{RenderError, RgbaBuffer};
use itten_core::{ColorInfo, ColorRecord, ColorWheel, Rgb};

/// Border color for swatch strips and palette grids.
pub const FRAME_COLOR: Rgb = Rgb::new(0x80, 0x80, 0x80);
/// Frame thickness in pixels.
pub const FRAME_WIDTH: u32 = 2;

/// Palette grid cell size and spacing.
const CELL_WIDTH: u32 = 90;
const CELL_HEIGHT: u32 = 60;
const CELL_MARGIN: u32 = 10;
/// Band above the grid, holding the title.
const HEADER_HEIGHT: u32 = 50;

/// Wheel radius as a fraction of the image size.
const WHEEL_RADIUS: f64 = 0.4;
const CENTER_DOT_RADIUS: f64 = 5.0;
/// Sector names sit this far outside the wheel, as a fraction of the size.
const WHEEL_LABEL_GAP: f64 = 0.05;

/// Caption and title sizes in pixels per em.
const LABEL_PX: f32 = 12.0;
const TITLE_PX: f32 = 16.0;
/// Swatch strips need this much height to carry name, hex and RGB lines.
const LABEL_BAND: u32 = 60;
const LABEL_LINE: u32 = 15;

const PREVIEW_WIDTH: u32 = 400;
const PREVIEW_HEIGHT: u32 = 300;
const PREVIEW_MARGIN: u32 = 50;
const PREVIEW_SWATCH_BOTTOM: u32 = 150;

/// Text drawn on top of an image.
#[derive(Debug, Clone, Copy)]
pub struct Labels<'a> {
    pub font: &'a Typeface,
    pub title: &'a str,
}

fn rgb_caption(rgb: Rgb) -> String {
    format!("RGB: {}, {}, {}", rgb.r, rgb.g, rgb.b)
}

/// Horizontal span `[x0, x1)` of swatch `index`; the last swatch absorbs
/// leftover width.
fn swatch_span(index: u32, count: u32, width: u32) -> (u32, u32) {
    let swatch = width / count;
    let x0 = index * swatch;
    let x1 = if index + 1 == count { width } else { x0 + swatch };
    (x0, x1)
}

/// Draws records as equal-width vertical swatches, left to right in the given
/// order, inside a gray frame. With labels, each swatch carries its name, hex
/// and RGB near the bottom in a contrasting color, and the title sits top left.
pub fn swatch_strip(
    records: &[ColorRecord],
    width: u32,
    height: u32,
    labels: Option<Labels<'_>>,
) -> Result<RgbaBuffer, RenderError> {
    if records.is_empty() {
        return Err(RenderError::Empty);
    }
    let n = u32::try_from(records.len())
        .ok()
        .filter(|&n| n <= width)
        .ok_or_else(|| {
            RenderError::InvalidDimensions(format!(
                "width {width} cannot hold {} swatches",
                records.len()
            ))
        })?;
    let mut buf = RgbaBuffer::new(width, height, Rgb::WHITE)?;
    for (i, record) in (0..n).zip(records) {
        let (x0, x1) = swatch_span(i, n, width);
        buf.fill_rect(x0, 0, x1, height, record.rgb());
    }

    if let Some(Labels { font, title }) = labels {
        if height >= LABEL_BAND {
            for (i, record) in (0..n).zip(records) {
                let (x0, x1) = swatch_span(i, n, width);
                let center = (x0 + x1) as f32 / 2.0;
                let max = (x1 - x0).saturating_sub(4) as f32;
                let ink = record.rgb().text_color();
                let lines = [
                    record.display_name(),
                    record.hex().to_string(),
                    rgb_caption(record.rgb()),
                ];
                for (row, line) in (0u32..).zip(&lines) {
                    let top = (height - LABEL_BAND + 5 + row * LABEL_LINE) as f32;
                    let line = font.fit(line, LABEL_PX, max);
                    font.draw_centered(&mut buf, &line, center, top, LABEL_PX, ink);
                }
            }
        }
        let title = font.fit(title, TITLE_PX, width.saturating_sub(20) as f32);
        let ink = records[0].rgb().text_color();
        font.draw(&mut buf, &title, 10.0, 10.0, TITLE_PX, ink);
    }

    buf.frame(FRAME_WIDTH, FRAME_COLOR);
    Ok(buf)
}

/// Horizontal center of swatch `index` in a strip of `count` swatches, or
/// `None` when `index` is not a swatch.
pub fn swatch_center(index: usize, count: usize, width: u32) -> Option<u32> {
    let index = u32::try_from(index).ok()?;
    let count = u32::try_from(count).ok()?;
    if index >= count || count > width {
        return None;
    }
    let (x0, x1) = swatch_span(index, count, width);
    Some(x0 + (x1 - x0) / 2)
}

/// Draws the 12-sector wheel: sector `i` is centered on `i * 30` degrees,
/// measured clockwise from 3 o'clock, filled with the hue's mid-tone. With
/// labels, hue names ring the wheel and the title is centered on top.
pub fn wheel(
    wheel: &ColorWheel,
    size: u32,
    labels: Option<Labels<'_>>,
) -> Result<RgbaBuffer, RenderError> {
    let mut buf = RgbaBuffer::new(size, size, Rgb::WHITE)?;
    let hues = wheel.list_principal_hue_names();
    let colors = wheel.principal_records();
    if colors.len() != hues.len() {
        return Err(RenderError::Empty);
    }

    let center = size as f64 / 2.0;
    let radius = size as f64 * WHEEL_RADIUS;
    for y in 0..size {
        for x in 0..size {
            let dx = x as f64 + 0.5 - center;
            let dy = y as f64 + 0.5 - center;
            let dist = (dx * dx + dy * dy).sqrt();
            if dist <= CENTER_DOT_RADIUS {
                buf.put(x, y, FRAME_COLOR);
            } else if dist <= radius {
                // y grows downward, so atan2 already runs clockwise.
                let angle = dy.atan2(dx).to_degrees().round() as i32;
                let hue = wheel.color_at_angle(angle);
                if let Some(i) = hues.iter().position(|h| h == hue) {
                    buf.put(x, y, colors[i].rgb());
                }
            }
        }
    }

    if let Some(Labels { font, title }) = labels {
        let reach = radius + size as f64 * WHEEL_LABEL_GAP;
        let line_height = font.line_height(LABEL_PX);
        for (record, angle) in colors.iter().zip((0i32..).step_by(30)) {
            let rad = f64::from(angle).to_radians();
            let cx = (center + reach * rad.cos()) as f32;
            let cy = (center + reach * rad.sin()) as f32;
            let words: Vec<String> = record
                .display_name()
                .split(' ')
                .filter(|w| !w.chars().all(|c| c.is_ascii_digit()))
                .map(str::to_string)
                .collect();
            let mut top = cy - words.len() as f32 * line_height / 2.0;
            for word in &words {
                font.draw_centered(&mut buf, word, cx, top, LABEL_PX, Rgb::BLACK);
                top += line_height;
            }
        }
        font.draw_centered(&mut buf, title, center as f32, 12.0, TITLE_PX, Rgb::BLACK);
    }
    Ok(buf)
}

/// Image size of a grid of `count` cells in `columns` columns, or `None` when
/// it does not fit in `u32`.
fn grid_size(count: u32, columns: u32) -> Option<(u32, u32)> {
    if columns == 0 {
        return None;
    }
    let rows = count.div_ceil(columns);
    let width = columns
        .checked_mul(CELL_WIDTH + CELL_MARGIN)?
        .checked_add(CELL_MARGIN)?;
    let height = rows
        .checked_mul(CELL_HEIGHT + CELL_MARGIN)?
        .checked_add(HEADER_HEIGHT + CELL_MARGIN)?;
    Some((width, height))
}

/// Lays out every record in a grid of fixed-size cells, `columns` per row
/// (never more columns than records), below the header band. With labels,
/// each cell is captioned with name, hex and RGB, and the title is centered
/// in the header.
pub fn palette_grid(
    records: &[ColorRecord],
    columns: u32,
    labels: Option<Labels<'_>>,
) -> Result<RgbaBuffer, RenderError> {
    if records.is_empty() {
        return Err(RenderError::Empty);
    }
    if columns == 0 {
        return Err(RenderError::InvalidDimensions(
            "palette grid needs at least one column".to_string(),
        ));
    }
    let count = u32::try_from(records.len()).map_err(|_| {
        RenderError::InvalidDimensions(format!("{} colors do not fit a grid", records.len()))
    })?;
    let columns = columns.min(count);
    let (width, height) = grid_size(count, columns).ok_or_else(|| {
        RenderError::InvalidDimensions(format!(
            "{count} cells in {columns} columns overflow the image size"
        ))
    })?;

    let mut buf = RgbaBuffer::new(width, height, Rgb::WHITE)?;
    for (idx, record) in (0..count).zip(records) {
        let (x0, y0) = grid_cell_origin(idx, columns).ok_or_else(|| {
            RenderError::InvalidDimensions(format!("cell {idx} lies outside the image"))
        })?;
        let rgb = record.rgb();
        buf.fill_rect(x0, y0, x0 + CELL_WIDTH, y0 + CELL_HEIGHT, rgb);

        if let Some(Labels { font, .. }) = labels {
            let ink = rgb.text_color();
            let lines = [
                font.fit(&record.display_name(), LABEL_PX, (CELL_WIDTH - 10) as f32),
                record.hex().to_string(),
                format!("{},{},{}", rgb.r, rgb.g, rgb.b),
            ];
            for (row, line) in (0u32..).zip(&lines) {
                let top = (y0 + 5 + row * LABEL_LINE) as f32;
                font.draw(&mut buf, line, (x0 + 5) as f32, top, LABEL_PX, ink);
            }
        }
    }
    if let Some(Labels { font, title }) = labels {
        font.draw_centered(&mut buf, title, width as f32 / 2.0, 15.0, TITLE_PX, Rgb::BLACK);
    }
    buf.frame(FRAME_WIDTH, FRAME_COLOR);
    Ok(buf)
}

/// Top-left corner of grid cell `idx`, or `None` for zero columns or a cell
/// beyond the `u32` coordinate range.
pub fn grid_cell_origin(idx: u32, columns: u32) -> Option<(u32, u32)> {
    if columns == 0 {
        return None;
    }
    let (row, col) = (idx / columns, idx % columns);
    let x = col
        .checked_mul(CELL_WIDTH + CELL_MARGIN)?
        .checked_add(CELL_MARGIN)?;
    let y = row
        .checked_mul(CELL_HEIGHT + CELL_MARGIN)?
        .checked_add(HEADER_HEIGHT)?;
    Some((x, y))
}

/// A single-color card: a wide swatch with name, hex, RGB, HSV and wheel
/// position centered underneath.
pub fn preview(info: &ColorInfo, font: Option<&Typeface>) -> Result<RgbaBuffer, RenderError> {
    let mut buf = RgbaBuffer::new(PREVIEW_WIDTH, PREVIEW_HEIGHT, Rgb::WHITE)?;
    buf.fill_rect(
        PREVIEW_MARGIN,
        PREVIEW_MARGIN,
        PREVIEW_WIDTH - PREVIEW_MARGIN,
        PREVIEW_SWATCH_BOTTOM,
        info.record.rgb(),
    );

    if let Some(font) = font {
        let [h, s, v] = info.hsv;
        let position = match (info.position, &info.family) {
            (Some(pos), Some(family)) => format!("Wheel position: {pos}° ({family})"),
            _ => "Wheel position: N/A".to_string(),
        };
        let center = PREVIEW_WIDTH as f32 / 2.0;
        let max = (PREVIEW_WIDTH - 20) as f32;
        let title = font.fit(&format!("Color: {}", info.display_name), TITLE_PX, max);
        font.draw_centered(&mut buf, &title, center, 160.0, TITLE_PX, Rgb::BLACK);
        let lines = [
            format!("HEX: {}", info.record.hex()),
            rgb_caption(info.record.rgb()),
            format!("HSV: {h}°, {s}%, {v}%"),
            position,
        ];
        for (row, line) in (0u32..).zip(&lines) {
            let top = (190 + row * 20) as f32;
            font.draw_centered(&mut buf, line, center, top, LABEL_PX, Rgb::BLACK);
        }
    }

    buf.frame(FRAME_WIDTH, FRAME_COLOR);
    Ok(buf)
}
