//! Builder configuration with the defaults the dataset and report
//! documents ship with.

use serde::Deserialize;

pub const DEFAULT_MAX_COLS_PER_PAGE: usize = 5;
pub const DEFAULT_DATASET_MAX_ROWS_PER_PAGE: usize = 8;
pub const DEFAULT_REPORT_MAX_ROWS_PER_PAGE: usize = 16;
pub const DEFAULT_FIELDS_TO_IGNORE: [&str; 3] = ["id", "_count", "deleted_at"];

/// "Unnamed" - fallback title for dataset documents.
pub const DEFAULT_DATASET_TITLE: &str = "بدون نام";
/// "Reporting" - fallback title for map reports.
pub const DEFAULT_REPORT_TITLE: &str = "گزارش‌گیری";

/// Options for the dataset table document.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DatasetTableOptions {
    pub max_rows_per_page: usize,
    pub max_cols_per_page: usize,
    /// Field names removed from every record before chunking.
    pub fields_to_ignore: Vec<String>,
    pub title: String,
}

impl Default for DatasetTableOptions {
    fn default() -> Self {
        Self {
            max_rows_per_page: DEFAULT_DATASET_MAX_ROWS_PER_PAGE,
            max_cols_per_page: DEFAULT_MAX_COLS_PER_PAGE,
            fields_to_ignore: DEFAULT_FIELDS_TO_IGNORE
                .iter()
                .map(|s| s.to_string())
                .collect(),
            title: DEFAULT_DATASET_TITLE.to_string(),
        }
    }
}

/// Options for the map/property report document.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MapReportOptions {
    pub max_rows_per_page: usize,
    pub max_cols_per_page: usize,
    /// When set, properties covered by no grouping rule are collected into
    /// a trailing group of this name instead of being dropped.
    pub catch_all_group: Option<String>,
}

impl Default for MapReportOptions {
    fn default() -> Self {
        Self {
            max_rows_per_page: DEFAULT_REPORT_MAX_ROWS_PER_PAGE,
            max_cols_per_page: DEFAULT_MAX_COLS_PER_PAGE,
            catch_all_group: None,
        }
    }
}
