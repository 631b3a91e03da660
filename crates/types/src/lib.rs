pub mod color;
pub mod config;
pub mod fonts;
pub mod record;
pub mod text;

pub use color::Color;
pub use config::{DatasetTableOptions, MapReportOptions};
pub use fonts::{FontFamilies, FontRole, FontSizes};
pub use record::{GroupingRule, Record};
pub use text::Direction;
