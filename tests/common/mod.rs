use serde_json::{Value, json};
use varaq::types::{FontFamilies, Record};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// The demo dataset shape: `colN_key` -> `colN_val_item_I`.
pub fn mock_records(cols: usize, rows: usize) -> Vec<Record> {
    (1..=rows)
        .map(|i| {
            (1..=cols)
                .map(|c| {
                    (
                        format!("col{}_key", c),
                        json!(format!("col{}_val_item_{}", c, i)),
                    )
                })
                .collect()
        })
        .collect()
}

pub fn record(value: Value) -> Record {
    match value {
        Value::Object(map) => map,
        other => panic!("expected object, got {}", other),
    }
}

pub fn fonts() -> FontFamilies {
    FontFamilies {
        regular: Some("Vazirmatn-Regular".to_string()),
        bold: Some("Vazirmatn-Bold".to_string()),
        alt_numeral: Some("Roboto".to_string()),
        ..Default::default()
    }
}

/// A small but complete report payload: two enabled maps, a logo, one
/// hidden column, one attachment column and two grouping rules.
pub fn report_payload() -> Value {
    json!({
        "map_1Settings": { "enabled": true, "title": "نقشه اصلی", "showTitle": true },
        "map_2Settings": { "enabled": true, "title": "", "showTitle": false },
        "withLogo": true,
        "logoSrc": "logo.png",
        "title": "گزارش شعب",
        "table": {
            "enabled": true,
            "columnNames": [
                ["user_id", true],
                ["نام بانک", true],
                ["شعبه", false],
                ["کدپستی", true],
                ["photos", true]
            ],
            "attachmentColumns": ["photos"],
            "groupingData": [
                { "groupName": "گروه ۱", "fields": ["user_id", "نام بانک"] },
                { "groupName": null, "fields": ["کدپستی"] }
            ],
            "rowsData": [
                {
                    "properties": {
                        "user_id": 7,
                        "نام بانک": "ملی",
                        "شعبه": "مرکزی",
                        "کدپستی": "۱۲۳۴۵",
                        "geometry": { "type": "Point" },
                        "photos": "[\"p1.png\",\"p2.png\"]"
                    },
                    "dataUrl": { "map_1": "row0_map1.png", "map_2": "row0_map2.png" }
                },
                {
                    "properties": {
                        "user_id": 8,
                        "نام بانک": "ملت",
                        "شعبه": "غرب",
                        "کدپستی": "۵۴۳۲۱",
                        "geometry": { "type": "Point" },
                        "photos": "not a json array"
                    },
                    "dataUrl": { "map_1": "row1_map1.png", "map_2": "row1_map2.png" }
                }
            ]
        }
    })
}
