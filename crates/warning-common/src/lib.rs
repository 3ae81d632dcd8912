//! Common types shared across the hazard warning map crates.

pub mod bbox;
pub mod error;
pub mod level;
pub mod record;
pub mod view;

pub use bbox::BoundingBox;
pub use error::{WarnMapError, WarnMapResult};
pub use level::{classify, RawLevel, SeverityColor};
pub use record::{RecordError, SourceRow, WarningRecord};
pub use view::{MapView, TileLayer};
