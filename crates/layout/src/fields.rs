//! Field-list derivation and the removal steps that precede chunking.

use crate::LayoutError;
use varaq_types::Record;

/// Derives the ordered column list from the first record.
///
/// The record set is assumed shape-uniform, so the first record is the
/// schema source. An empty dataset is signalled as a distinct error
/// before any field access happens.
pub fn field_names(records: &[Record]) -> Result<Vec<String>, LayoutError> {
    let first = records.first().ok_or(LayoutError::EmptyDataset)?;
    Ok(first.keys().cloned().collect())
}

/// Returns a copy of `record` without the ignored fields, preserving the
/// order of the remaining properties.
pub fn omit_fields(record: &Record, ignore: &[String]) -> Record {
    record
        .iter()
        .filter(|(key, _)| !ignore.iter().any(|ig| ig == *key))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

/// Report-side column filter: a column survives only when its toggle is
/// on and it is not an attachment column.
pub fn enabled_columns(toggles: &[(String, bool)], attachment_columns: &[String]) -> Vec<String> {
    toggles
        .iter()
        .filter(|(name, show)| *show && !attachment_columns.iter().any(|a| a == name))
        .map(|(name, _)| name.clone())
        .collect()
}
