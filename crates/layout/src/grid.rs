//! Page-grid construction: the outer product of record and field chunks.

use itertools::iproduct;

use crate::LayoutError;
use crate::cell::{NOT_VIEWABLE, format_cell};
use crate::chunk::chunk;
use varaq_types::Record;

/// One page of a chunked table: a column group crossed with a row group,
/// with every cell already reduced to its display string.
///
/// Pages are purely derived and rebuilt on every call; `(row_group,
/// col_group)` identifies the cell of the grid a page came from.
#[derive(Debug, Clone, PartialEq)]
pub struct TablePage {
    pub row_group: usize,
    pub col_group: usize,
    pub field_names: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Splits `fields` x `records` into pages of at most `max_cols` columns
/// and `max_rows` rows.
///
/// Pages are emitted row-major: every column group of the first record
/// chunk, then the next record chunk, matching reading order for a
/// paginated report. A field missing from a record renders as the
/// not-viewable placeholder.
pub fn build_grid(
    fields: &[String],
    records: &[Record],
    max_cols: usize,
    max_rows: usize,
) -> Result<Vec<TablePage>, LayoutError> {
    let field_chunks = chunk(fields, max_cols)?;
    let record_chunks = chunk(records, max_rows)?;
    log::debug!(
        "paginating {} fields x {} records into a {}x{} page grid",
        fields.len(),
        records.len(),
        record_chunks.len(),
        field_chunks.len(),
    );

    let pages = iproduct!(
        record_chunks.iter().enumerate(),
        field_chunks.iter().enumerate()
    )
    .map(|((row_group, rows), (col_group, cols))| TablePage {
        row_group,
        col_group,
        field_names: cols.to_vec(),
        rows: rows
            .iter()
            .map(|record| {
                cols.iter()
                    .map(|name| {
                        record
                            .get(name)
                            .map_or_else(|| NOT_VIEWABLE.to_string(), format_cell)
                    })
                    .collect()
            })
            .collect(),
    })
    .collect();
    Ok(pages)
}
