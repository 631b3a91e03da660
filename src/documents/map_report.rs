//! The map/property report document: optional table pages for the
//! enabled columns, then one detail page per data row with grouped
//! properties, the two map captures and any attachments.

use serde::Deserialize;
use serde_json::Value;

use varaq_idf::{
    Document, Node, Orientation, Page, PageSize, PropertyEntry, TableNode, TableRow, TableStyle,
};
use varaq_layout::{TablePage, build_grid, enabled_columns, format_cell, group_properties};
use varaq_types::config::DEFAULT_REPORT_TITLE;
use varaq_types::{FontFamilies, GroupingRule, MapReportOptions, Record};

use crate::documents::text_node;
use crate::error::DocumentError;

const PAGE_PADDING: f32 = 16.0;
const PAGE_GAP: f32 = 12.0;
const MAP_IMAGE_WIDTH: f32 = 550.0;

// --- Payload model ---

/// The report payload as produced by the map client.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapReportData {
    #[serde(rename = "map_1Settings")]
    pub map_1_settings: MapSettings,
    #[serde(rename = "map_2Settings")]
    pub map_2_settings: MapSettings,
    #[serde(default)]
    pub with_logo: bool,
    #[serde(default)]
    pub logo_src: Option<String>,
    #[serde(default)]
    pub title: String,
    pub table: ReportTable,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapSettings {
    pub enabled: bool,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub show_title: bool,
    #[serde(default)]
    pub with_coordinates: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportTable {
    #[serde(default)]
    pub enabled: bool,
    /// `(column name, visible)` toggles in declared column order.
    #[serde(default)]
    pub column_names: Vec<(String, bool)>,
    /// Columns whose values hold serialized attachment lists; these are
    /// excluded from the table and rendered as image sections instead.
    #[serde(default)]
    pub attachment_columns: Vec<String>,
    #[serde(default)]
    pub grouping_data: Vec<GroupingRule>,
    #[serde(default)]
    pub rows_data: Vec<ReportRow>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportRow {
    #[serde(default)]
    pub properties: Record,
    pub data_url: MapImagePair,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MapImagePair {
    pub map_1: String,
    pub map_2: String,
}

// --- Builder ---

pub struct MapReportDocument {
    options: MapReportOptions,
    fonts: FontFamilies,
}

impl MapReportDocument {
    pub fn new(options: MapReportOptions, fonts: FontFamilies) -> Self {
        Self { options, fonts }
    }

    /// Parses a serialized report payload.
    pub fn parse_payload(payload: &str) -> Result<MapReportData, DocumentError> {
        Ok(serde_json::from_str(payload)?)
    }

    /// Builds the report document tree: table pages first (when the table
    /// is enabled and has visible columns), then one detail page per row.
    pub fn build(&self, data: &MapReportData) -> Result<Document, DocumentError> {
        let title = if data.title.is_empty() {
            DEFAULT_REPORT_TITLE.to_string()
        } else {
            data.title.clone()
        };

        let mut pages = Vec::new();

        if data.table.enabled {
            let fields =
                enabled_columns(&data.table.column_names, &data.table.attachment_columns);
            let records: Vec<Record> = data
                .table
                .rows_data
                .iter()
                .map(|row| row.properties.clone())
                .collect();

            if !fields.is_empty() {
                let grid = build_grid(
                    &fields,
                    &records,
                    self.options.max_cols_per_page,
                    self.options.max_rows_per_page,
                )?;
                for table_page in grid {
                    pages.push(self.page(vec![
                        self.header(data),
                        Node::Block {
                            children: vec![Node::Table(self.table_node(table_page))],
                        },
                    ]));
                }
            }
        }

        for row in &data.table.rows_data {
            pages.push(self.detail_page(data, row));
        }

        Ok(Document {
            title,
            fonts: self.fonts.clone(),
            pages,
        })
    }

    fn page(&self, children: Vec<Node>) -> Page {
        Page {
            size: PageSize::A4,
            orientation: Orientation::Landscape,
            padding: PAGE_PADDING,
            gap: PAGE_GAP,
            children,
        }
    }

    fn header(&self, data: &MapReportData) -> Node {
        Node::PageHeader {
            logo_src: if data.with_logo {
                data.logo_src.clone()
            } else {
                None
            },
            title: (!data.title.is_empty()).then(|| text_node(&data.title, false, &self.fonts)),
        }
    }

    fn table_node(&self, page: TablePage) -> TableNode {
        TableNode {
            style: TableStyle::default(),
            header: TableRow {
                cells: page
                    .field_names
                    .iter()
                    .map(|name| text_node(name, true, &self.fonts))
                    .collect(),
                bold: true,
            },
            rows: page
                .rows
                .iter()
                .map(|row| TableRow {
                    cells: row
                        .iter()
                        .map(|cell| text_node(cell, false, &self.fonts))
                        .collect(),
                    bold: false,
                })
                .collect(),
        }
    }

    fn detail_page(&self, data: &MapReportData, row: &ReportRow) -> Page {
        let mut children = vec![self.header(data)];

        for group in group_properties(
            &row.properties,
            &data.table.grouping_data,
            self.options.catch_all_group.as_deref(),
        ) {
            if group.entries.is_empty() {
                continue;
            }
            children.push(Node::PropertySection {
                name: group
                    .name
                    .as_deref()
                    .map(|name| text_node(name, true, &self.fonts)),
                entries: group
                    .entries
                    .iter()
                    .map(|(key, value)| PropertyEntry {
                        key: text_node(key, true, &self.fonts),
                        value: text_node(&format_cell(value), false, &self.fonts),
                    })
                    .collect(),
            });
        }

        if data.map_1_settings.enabled {
            self.push_map_section(&mut children, &data.map_1_settings, &row.data_url.map_1);
        }
        if data.map_2_settings.enabled {
            self.push_map_section(&mut children, &data.map_2_settings, &row.data_url.map_2);
        }

        for column in &data.table.attachment_columns {
            if let Some(value) = row.properties.get(column) {
                for src in parse_attachments(column, value) {
                    children.push(Node::Image { src, width: None });
                }
            }
        }

        self.page(children)
    }

    fn push_map_section(&self, children: &mut Vec<Node>, settings: &MapSettings, src: &str) {
        if settings.show_title && !settings.title.is_empty() {
            children.push(Node::Text(text_node(&settings.title, true, &self.fonts)));
        }
        children.push(Node::Image {
            src: src.to_string(),
            width: Some(MAP_IMAGE_WIDTH),
        });
    }
}

/// Parses an attachment column value: a string holding a serialized list
/// of image URLs. Malformed payloads are logged and degrade to no
/// attachments; they never fail the build.
fn parse_attachments(column: &str, value: &Value) -> Vec<String> {
    let Value::String(raw) = value else {
        return Vec::new();
    };
    match serde_json::from_str::<Vec<String>>(raw) {
        Ok(urls) => urls,
        Err(err) => {
            log::warn!("ignoring malformed attachment payload in column {column}: {err}");
            Vec::new()
        }
    }
}
