use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    #[error("Chunk size must be a positive integer, got {0}.")]
    InvalidChunkSize(usize),
    #[error("Cannot derive a field list from an empty dataset.")]
    EmptyDataset,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TextError {
    #[error("Not a valid displayable string.")]
    NotDisplayable,
}

pub mod cell;
pub mod chunk;
pub mod fields;
pub mod grid;
pub mod group;
pub mod text;

pub use self::cell::{NOT_VIEWABLE, format_cell};
pub use self::chunk::{chunk, chunk_count, page_count};
pub use self::fields::{enabled_columns, field_names, omit_fields};
pub use self::grid::{TablePage, build_grid};
pub use self::group::{PropertyGroup, group_properties};
pub use self::text::{DisplayText, TextSegment, normalize_for_display};

// Re-export the direction type used throughout display text handling
pub use varaq_types::Direction;
