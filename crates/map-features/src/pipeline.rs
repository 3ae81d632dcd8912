//! Row-to-feature rendering pipeline.
//!
//! Each source row is handled on its own by [`render_row`]:
//!
//! 1. Coordinates are parsed. Unusable coordinates drop the row with a
//!    diagnostic; this is the only hard gate.
//! 2. A geodesic buffer is built around the point. A failure here only loses
//!    the buffer; the diagnostic travels with the rendered row.
//! 3. A marker with an image or dot icon and a popup is always produced.
//!
//! [`render_batch`] appends the results to a [`MapSession`], logs every
//! diagnostic exactly once and summarises the batch in a [`BatchReport`].

use std::collections::BTreeMap;
use std::fmt;

use geodesy::{buffer_point, BufferSpec};
use serde::Serialize;
use tracing::{error, info, warn};
use warning_common::{SourceRow, WarningRecord};

use crate::feature::{BufferFeature, MarkerFeature};
use crate::icon::MarkerIcon;
use crate::popup::format_popup;
use crate::session::MapSession;
use crate::style::PathStyle;

/// Pipeline parameters.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RenderOptions {
    pub buffer: BufferSpec,
}

/// What went wrong with a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// Row dropped: no buffer, no marker.
    InvalidCoordinates,
    /// Buffer omitted; the marker was still rendered.
    BufferFailed,
}

/// A per-row problem, identifying the offending row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Diagnostic {
    pub row: usize,
    pub kind: DiagnosticKind,
    pub message: String,
    /// The raw row as parsed.
    pub fields: BTreeMap<String, String>,
}

impl Diagnostic {
    fn new(row: &SourceRow, kind: DiagnosticKind, message: impl Into<String>) -> Self {
        Self {
            row: row.row,
            kind,
            message: message.into(),
            fields: row.fields.clone(),
        }
    }

    /// Emit the diagnostic to the log.
    pub fn log(&self) {
        match self.kind {
            DiagnosticKind::InvalidCoordinates => warn!(
                row = self.row,
                fields = ?self.fields,
                "Invalid coordinates for row: {}",
                self.message
            ),
            DiagnosticKind::BufferFailed => error!(
                row = self.row,
                fields = ?self.fields,
                "Buffer construction failed for row: {}",
                self.message
            ),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "row {}: {}", self.row, self.message)
    }
}

/// Features produced for a row with valid coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedRow {
    pub row: usize,
    pub buffer: Result<BufferFeature, Diagnostic>,
    pub marker: MarkerFeature,
}

/// Render one row. `Err` means the row was dropped.
pub fn render_row(row: &SourceRow, options: &RenderOptions) -> Result<RenderedRow, Diagnostic> {
    let record = WarningRecord::from_row(row)
        .map_err(|e| Diagnostic::new(row, DiagnosticKind::InvalidCoordinates, e.to_string()))?;

    let color = record.warning_level.severity();

    let buffer = buffer_point(record.longitude, record.latitude, &options.buffer)
        .map(|polygon| BufferFeature {
            row: record.row,
            warning_level: record.warning_level.clone(),
            center: (record.longitude, record.latitude),
            polygon,
            style: PathStyle::buffer(color),
        })
        .map_err(|e| Diagnostic::new(row, DiagnosticKind::BufferFailed, e.to_string()));

    let marker = MarkerFeature {
        row: record.row,
        popup: format_popup(&record.warning_level, record.latitude, record.longitude),
        icon: MarkerIcon::for_record(record.icon_url.as_deref(), color),
        warning_level: record.warning_level,
        lat: record.latitude,
        lng: record.longitude,
    };

    Ok(RenderedRow {
        row: record.row,
        buffer,
        marker,
    })
}

/// Outcome of one pipeline run.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BatchReport {
    /// Rows seen.
    pub rows: usize,
    pub markers: usize,
    pub buffers: usize,
    /// Rows dropped for bad coordinates.
    pub skipped: usize,
    pub diagnostics: Vec<Diagnostic>,
}

impl BatchReport {
    pub fn buffer_failures(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.kind == DiagnosticKind::BufferFailed)
            .count()
    }

    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// Render every row into `session`. Rows never affect each other.
pub fn render_batch(
    rows: &[SourceRow],
    options: &RenderOptions,
    session: &mut MapSession,
) -> BatchReport {
    let mut report = BatchReport {
        rows: rows.len(),
        ..BatchReport::default()
    };

    for row in rows {
        match render_row(row, options) {
            Ok(rendered) => {
                match rendered.buffer {
                    Ok(buffer) => {
                        session.add_buffer(buffer);
                        report.buffers += 1;
                    }
                    Err(diagnostic) => {
                        diagnostic.log();
                        report.diagnostics.push(diagnostic);
                    }
                }
                session.add_marker(rendered.marker);
                report.markers += 1;
            }
            Err(diagnostic) => {
                diagnostic.log();
                report.skipped += 1;
                report.diagnostics.push(diagnostic);
            }
        }
    }

    info!(
        rows = report.rows,
        markers = report.markers,
        buffers = report.buffers,
        skipped = report.skipped,
        buffer_failures = report.buffer_failures(),
        "Rendered warning rows"
    );

    report
}
