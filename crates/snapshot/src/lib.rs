//! Raster snapshots of a map session.
//!
//! Draws buffers and markers over a plain background in Web Mercator. Base
//! tiles and remote marker images are not fetched; image markers are drawn
//! as a pin glyph at their anchor point.

pub mod canvas;

pub use canvas::{
    render_pixmap, render_snapshot, viewport_for, SnapshotError, SnapshotOptions, MAX_DIMENSION,
};
