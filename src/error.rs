use thiserror::Error;
use varaq_layout::{LayoutError, TextError};

/// Errors surfaced by the document builders.
#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("Cannot build a document from an empty dataset.")]
    EmptyDataset,

    #[error("Layout error: {0}")]
    Layout(#[from] LayoutError),

    #[error("Text error: {0}")]
    Text(#[from] TextError),

    #[error("Report payload error: {0}")]
    Payload(#[from] serde_json::Error),
}
