//! Intermediate Document Format (IDF)
//! This crate defines the in-memory representation of a built document:
//! the declarative page tree the document builders emit and a downstream
//! PDF renderer consumes. Nothing here performs layout or drawing.

use varaq_types::{Color, Direction, FontFamilies, FontRole};

/// A string type for the document.
pub type TextStr = String;

/// The root of a built document: a title, the fonts it should be drawn
/// with, and its pages in final reading order.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub title: TextStr,
    pub fonts: FontFamilies,
    pub pages: Vec<Page>,
}

impl Document {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageSize {
    #[default]
    A4,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    #[default]
    Portrait,
    Landscape,
}

/// A single page: physical format plus block-level children in order.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub size: PageSize,
    pub orientation: Orientation,
    pub padding: f32,
    /// Vertical gap between block children.
    pub gap: f32,
    pub children: Vec<Node>,
}

/// Represents a block-level element on a page.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// A generic block container.
    Block { children: Vec<Node> },
    /// A paginated table slice: a header row of field names plus one body
    /// row per record.
    Table(TableNode),
    /// A full-width image referenced by URL or data URL.
    Image { src: TextStr, width: Option<f32> },
    /// The report page header: an optional logo slot and a title slot,
    /// laid out edge to edge.
    PageHeader {
        logo_src: Option<TextStr>,
        title: Option<TextNode>,
    },
    /// A titled key/value section produced by property grouping.
    PropertySection {
        name: Option<TextNode>,
        entries: Vec<PropertyEntry>,
    },
    /// A standalone run of display text.
    Text(TextNode),
}

impl Node {
    /// Returns a string identifier for the node type, used by renderers
    /// for dispatch and by tests for structural assertions.
    pub fn kind(&self) -> &'static str {
        match self {
            Node::Block { .. } => "block",
            Node::Table(_) => "table",
            Node::Image { .. } => "image",
            Node::PageHeader { .. } => "page-header",
            Node::PropertySection { .. } => "property-section",
            Node::Text(_) => "text",
        }
    }
}

/// One grouped key/value pair inside a [`Node::PropertySection`].
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyEntry {
    pub key: TextNode,
    pub value: TextNode,
}

/// A run of display text with a single resolved direction.
///
/// Spans are stored in logical token order; when `direction` is RTL the
/// renderer reverses span order at the container level.
#[derive(Debug, Clone, PartialEq)]
pub struct TextNode {
    pub direction: Direction,
    pub spans: Vec<TextSpan>,
    pub font_size: f32,
}

impl TextNode {
    /// An empty LTR run, the fallback for cell values that are not
    /// displayable text.
    pub fn empty(font_size: f32) -> Self {
        Self {
            direction: Direction::Ltr,
            spans: Vec::new(),
            font_size,
        }
    }

    /// The concatenated text of all spans, in logical order.
    pub fn plain_text(&self) -> String {
        self.spans
            .iter()
            .map(|s| s.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextSpan {
    pub text: TextStr,
    pub font: FontRole,
}

// --- Table-specific Structures ---

#[derive(Debug, Clone, PartialEq)]
pub struct TableNode {
    pub style: TableStyle,
    pub header: TableRow,
    pub rows: Vec<TableRow>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    pub cells: Vec<TextNode>,
    /// Header rows are bold and shaded.
    pub bold: bool,
}

/// Fixed table styling, overridable per document.
#[derive(Debug, Clone, PartialEq)]
pub struct TableStyle {
    pub header_background: Color,
    pub cell_padding: f32,
    pub row_height: f32,
    pub border_width: f32,
}

impl Default for TableStyle {
    fn default() -> Self {
        Self {
            header_background: Color::gray(0xc9),
            cell_padding: 4.0,
            row_height: 30.0,
            border_width: 1.0,
        }
    }
}
