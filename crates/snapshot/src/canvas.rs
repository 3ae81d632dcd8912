//! Snapshot rendering with tiny-skia.

use geodesy::Viewport;
use map_features::{BufferFeature, MapSession, MarkerFeature, MarkerIcon};
use thiserror::Error;
use tiny_skia::{Color, FillRule, Paint, PathBuilder, Pixmap, Stroke, Transform};
use tracing::debug;
use warning_common::level::parse_hex_color;

/// Largest accepted image side, in pixels.
pub const MAX_DIMENSION: u32 = 4096;

/// Minimum extent, in degrees, when the features collapse to a point.
const MIN_SPAN_DEG: f64 = 0.5;

const BACKGROUND: (u8, u8, u8) = (0xE8, 0xEC, 0xEF);
const DOT_BORDER: (u8, u8, u8) = (0x33, 0x33, 0x33);
const PIN_COLOR: (u8, u8, u8) = (0x2A, 0x81, 0xCB);

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("snapshot size {width}x{height} must be between 1 and 4096 pixels per side")]
    InvalidSize { width: u32, height: u32 },

    #[error("PNG encoding failed: {0}")]
    Encode(String),
}

/// Output size and framing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapshotOptions {
    pub width: u32,
    pub height: u32,
    /// Margin added around the feature extent, as a fraction of it.
    pub padding: f64,
}

impl Default for SnapshotOptions {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 768,
            padding: 0.1,
        }
    }
}

/// Render the session and encode it as PNG.
pub fn render_snapshot(
    session: &MapSession,
    options: &SnapshotOptions,
) -> Result<Vec<u8>, SnapshotError> {
    let pixmap = render_pixmap(session, options)?;
    pixmap
        .encode_png()
        .map_err(|e| SnapshotError::Encode(e.to_string()))
}

/// Render the session into a pixmap.
pub fn render_pixmap(
    session: &MapSession,
    options: &SnapshotOptions,
) -> Result<Pixmap, SnapshotError> {
    let (width, height) = (options.width, options.height);
    if width == 0 || height == 0 || width > MAX_DIMENSION || height > MAX_DIMENSION {
        return Err(SnapshotError::InvalidSize { width, height });
    }

    let mut pixmap =
        Pixmap::new(width, height).ok_or(SnapshotError::InvalidSize { width, height })?;
    pixmap.fill(Color::from_rgba8(BACKGROUND.0, BACKGROUND.1, BACKGROUND.2, 255));

    let viewport = viewport_for(session, options);

    // Buffers first so markers stay on top.
    for buffer in session.buffers() {
        draw_buffer(&mut pixmap, &viewport, buffer);
    }
    for marker in session.markers() {
        draw_marker(&mut pixmap, &viewport, marker);
    }

    debug!(
        width,
        height,
        features = session.len(),
        "Rendered snapshot"
    );

    Ok(pixmap)
}

/// Viewport framing every feature, or the session's view when empty.
pub fn viewport_for(session: &MapSession, options: &SnapshotOptions) -> Viewport {
    match session.bounds() {
        Some(bounds) => {
            let mut bounds = bounds.padded(options.padding);
            let (cx, cy) = bounds.center();
            if bounds.width() < MIN_SPAN_DEG {
                bounds.min_x = cx - MIN_SPAN_DEG / 2.0;
                bounds.max_x = cx + MIN_SPAN_DEG / 2.0;
            }
            if bounds.height() < MIN_SPAN_DEG {
                bounds.min_y = cy - MIN_SPAN_DEG / 2.0;
                bounds.max_y = cy + MIN_SPAN_DEG / 2.0;
            }
            Viewport::fit(&bounds, options.width, options.height)
        }
        None => {
            let view = session.view();
            Viewport::centered(
                view.center_lng(),
                view.center_lat(),
                view.zoom,
                options.width,
                options.height,
            )
        }
    }
}

fn draw_buffer(pixmap: &mut Pixmap, viewport: &Viewport, buffer: &BufferFeature) {
    let mut pb = PathBuilder::new();
    for (i, c) in buffer.polygon.exterior().coords().enumerate() {
        let (x, y) = viewport.project(c.x, c.y);
        if i == 0 {
            pb.move_to(x, y);
        } else {
            pb.line_to(x, y);
        }
    }
    pb.close();

    let Some(path) = pb.finish() else {
        return;
    };

    let style = &buffer.style;
    let (r, g, b, _) = parse_hex_color(&style.fill_color);
    let alpha = (style.fill_opacity.clamp(0.0, 1.0) * 255.0).round() as u8;

    let mut fill = Paint::default();
    fill.set_color_rgba8(r, g, b, alpha);
    fill.anti_alias = true;
    pixmap.fill_path(&path, &fill, FillRule::Winding, Transform::identity(), None);

    let (r, g, b, a) = parse_hex_color(&style.color);
    let mut stroke_paint = Paint::default();
    stroke_paint.set_color_rgba8(r, g, b, a);
    stroke_paint.anti_alias = true;

    let stroke = Stroke {
        width: style.weight as f32,
        ..Stroke::default()
    };
    pixmap.stroke_path(&path, &stroke_paint, &stroke, Transform::identity(), None);
}

fn draw_marker(pixmap: &mut Pixmap, viewport: &Viewport, marker: &MarkerFeature) {
    let (x, y) = viewport.project(marker.lng, marker.lat);

    match &marker.icon {
        MarkerIcon::Dot { color, size, .. } => {
            // Drawn 2px smaller than the icon box, leaving room for the border.
            let radius = (size[0].min(size[1]) as f32 - 2.0) / 2.0;
            let Some(path) = PathBuilder::from_circle(x, y, radius.max(1.0)) else {
                return;
            };

            let (r, g, b, a) = parse_hex_color(color);
            let mut fill = Paint::default();
            fill.set_color_rgba8(r, g, b, a);
            fill.anti_alias = true;
            pixmap.fill_path(&path, &fill, FillRule::Winding, Transform::identity(), None);

            let mut border = Paint::default();
            border.set_color_rgba8(DOT_BORDER.0, DOT_BORDER.1, DOT_BORDER.2, 255);
            border.anti_alias = true;
            let stroke = Stroke {
                width: 1.0,
                ..Stroke::default()
            };
            pixmap.stroke_path(&path, &border, &stroke, Transform::identity(), None);
        }
        MarkerIcon::Image { size, anchor, .. } => {
            // Pin whose tip sits on the anchor; the icon box spans
            // (x - anchor.x, y - anchor.y) .. (+size).
            let w = size[0] as f32;
            let h = size[1] as f32;
            let left = x - anchor[0] as f32;
            let top = y - anchor[1] as f32;
            let head_r = w * 0.3;
            let head_cx = left + w / 2.0;
            let head_cy = top + head_r + 1.0;

            let mut pb = PathBuilder::new();
            pb.move_to(head_cx - head_r, head_cy);
            pb.line_to(x, top + h);
            pb.line_to(head_cx + head_r, head_cy);
            pb.close();
            pb.push_circle(head_cx, head_cy, head_r);

            let Some(path) = pb.finish() else {
                return;
            };

            let mut paint = Paint::default();
            paint.set_color_rgba8(PIN_COLOR.0, PIN_COLOR.1, PIN_COLOR.2, 255);
            paint.anti_alias = true;
            pixmap.fill_path(&path, &paint, FillRule::Winding, Transform::identity(), None);
        }
    }
}
