//! # varaq
//!
//! Builds paginated, declarative document trees out of flat datasets and
//! "map + property" report payloads:
//!
//! - **dataset table**: an ordered set of flat records, chunked into
//!   column groups and row groups and laid out as one table per page.
//! - **map report**: a structured payload with map images, grouped
//!   key/value properties and attachments, one detail page per data row.
//!
//! The output is an intermediate document tree ([`varaq_idf`]) consumed
//! by a downstream PDF renderer; no bytes are emitted here. All string
//! cells are routed through the bidirectional text segmenter so mixed
//! Persian/Latin content carries a resolved direction and per-token font
//! selection.

pub mod documents;
pub mod error;

pub use documents::dataset_table::DatasetTableDocument;
pub use documents::map_report::{
    MapImagePair, MapReportData, MapReportDocument, MapSettings, ReportRow, ReportTable,
};
pub use error::DocumentError;

// Re-export foundation crates
pub use varaq_idf as idf;
pub use varaq_layout as layout;
pub use varaq_types as types;
