//! Builds the demo dataset document (20 columns x 10 rows, mirroring the
//! library's reference dataset) and prints the resulting page structure.
//!
//! Run with: cargo run --example dataset_table

use serde_json::json;
use varaq::DatasetTableDocument;
use varaq::types::{DatasetTableOptions, FontFamilies, Record};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let data: Vec<Record> = (1..=10)
        .map(|i| {
            (1..=20)
                .map(|c| {
                    (
                        format!("col{}_key", c),
                        json!(format!("col{}_val_item_{}", c, i)),
                    )
                })
                .collect()
        })
        .collect();

    let fonts = FontFamilies {
        regular: Some("Vazirmatn-Regular".to_string()),
        bold: Some("Vazirmatn-Bold".to_string()),
        ..Default::default()
    };

    let document = DatasetTableDocument::new(DatasetTableOptions::default(), fonts).build(&data)?;

    println!("\"{}\": {} pages", document.title, document.page_count());
    for (i, page) in document.pages.iter().enumerate() {
        let kinds: Vec<&str> = page.children.iter().map(|n| n.kind()).collect();
        println!("  page {:>2}: {:?}", i + 1, kinds);
    }
    Ok(())
}
