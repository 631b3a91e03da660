//! The dataset table document: one flat record set paginated across A4
//! landscape pages, at most `max_cols_per_page` columns and
//! `max_rows_per_page` records per page.

use varaq_idf::{Document, Node, Orientation, Page, PageSize, TableNode, TableRow, TableStyle};
use varaq_layout::{TablePage, build_grid, field_names, omit_fields};
use varaq_types::{DatasetTableOptions, FontFamilies, Record};

use crate::documents::text_node;
use crate::error::DocumentError;

const PAGE_PADDING: f32 = 16.0;

pub struct DatasetTableDocument {
    options: DatasetTableOptions,
    fonts: FontFamilies,
}

impl DatasetTableDocument {
    pub fn new(options: DatasetTableOptions, fonts: FontFamilies) -> Self {
        Self { options, fonts }
    }

    /// Builds the paginated document tree for `data`.
    ///
    /// Ignored fields are removed from every record first; the column
    /// list then comes from the first record's property order. Pages run
    /// row-major: all column groups of a record chunk before the next
    /// record chunk.
    pub fn build(&self, data: &[Record]) -> Result<Document, DocumentError> {
        if data.is_empty() {
            return Err(DocumentError::EmptyDataset);
        }

        let clean: Vec<Record> = data
            .iter()
            .map(|record| omit_fields(record, &self.options.fields_to_ignore))
            .collect();
        let fields = field_names(&clean)?;

        let grid = build_grid(
            &fields,
            &clean,
            self.options.max_cols_per_page,
            self.options.max_rows_per_page,
        )?;

        let pages = grid
            .into_iter()
            .map(|page| Page {
                size: PageSize::A4,
                orientation: Orientation::Landscape,
                padding: PAGE_PADDING,
                gap: 0.0,
                children: vec![Node::Table(self.table_node(page))],
            })
            .collect();

        Ok(Document {
            title: self.options.title.clone(),
            fonts: self.fonts.clone(),
            pages,
        })
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
}
