//! Parses a sample map-report payload and prints the built document
//! structure: table pages for the visible columns, then one detail page
//! per data row.
//!
//! Run with: cargo run --example map_report

use serde_json::json;
use varaq::MapReportDocument;
use varaq::types::{FontFamilies, MapReportOptions};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let payload = json!({
        "map_1Settings": { "enabled": true, "title": "نقشه اصلی", "showTitle": true },
        "map_2Settings": { "enabled": false, "title": "", "showTitle": false },
        "withLogo": true,
        "logoSrc": "logo.png",
        "title": "گزارش شعب",
        "table": {
            "enabled": true,
            "columnNames": [
                ["نام بانک", true],
                ["شعبه", true],
                ["تلفن", false],
                ["photos", true]
            ],
            "attachmentColumns": ["photos"],
            "groupingData": [
                { "groupName": "مشخصات", "fields": ["نام بانک", "شعبه"] }
            ],
            "rowsData": [
                {
                    "properties": {
                        "نام بانک": "ملی",
                        "شعبه": "مرکزی",
                        "تلفن": "۰۲۱۱۲۳۴",
                        "photos": "[\"branch.png\"]"
                    },
                    "dataUrl": { "map_1": "map1.png", "map_2": "map2.png" }
                }
            ]
        }
    })
    .to_string();

    let data = MapReportDocument::parse_payload(&payload)?;

    let fonts = FontFamilies {
        regular: Some("Vazirmatn-Regular".to_string()),
        bold: Some("Vazirmatn-Bold".to_string()),
        alt_numeral: Some("Roboto".to_string()),
        ..Default::default()
    };

    let document = MapReportDocument::new(MapReportOptions::default(), fonts).build(&data)?;

    println!("\"{}\": {} pages", document.title, document.page_count());
    for (i, page) in document.pages.iter().enumerate() {
        let kinds: Vec<&str> = page.children.iter().map(|n| n.kind()).collect();
        println!("  page {:>2}: {:?}", i + 1, kinds);
    }
    Ok(())
}
