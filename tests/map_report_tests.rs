mod common;

use common::{TestResult, fonts, report_payload};
use varaq::idf::{Node, Page};
use varaq::types::{Direction, MapReportOptions};
use varaq::{MapReportDocument, MapReportData};

fn parse() -> Result<MapReportData, varaq::DocumentError> {
    MapReportDocument::parse_payload(&report_payload().to_string())
}

fn kinds(page: &Page) -> Vec<&'static str> {
    page.children.iter().map(|n| n.kind()).collect()
}

#[test]
fn payload_parses_and_builds() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let data = parse()?;
    let doc = MapReportDocument::new(MapReportOptions::default(), fonts()).build(&data)?;

    // One table page (3 visible columns, 2 rows fit a single chunk) plus
    // one detail page per data row.
    assert_eq!(doc.page_count(), 3);
    assert_eq!(doc.title, "گزارش شعب");
    Ok(())
}

#[test]
fn table_columns_exclude_hidden_and_attachment_columns() -> TestResult {
    let data = parse()?;
    let doc = MapReportDocument::new(MapReportOptions::default(), fonts()).build(&data)?;

    let Node::Block { children } = &doc.pages[0].children[1] else {
        panic!("expected table block");
    };
    let Node::Table(table) = &children[0] else {
        panic!("expected table");
    };
    let header: Vec<String> = table.header.cells.iter().map(|c| c.plain_text()).collect();
    assert_eq!(header, vec!["user_id", "نام بانک", "کدپستی"]);
    Ok(())
}

#[test]
fn detail_page_holds_groups_maps_and_attachments() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let data = parse()?;
    let doc = MapReportDocument::new(MapReportOptions::default(), fonts()).build(&data)?;

    // Row 0: header, two property sections, titled map 1, untitled map 2,
    // two attachment images.
    let detail = &doc.pages[1];
    assert_eq!(
        kinds(detail),
        vec![
            "page-header",
            "property-section",
            "property-section",
            "text",
            "image",
            "image",
            "image",
            "image",
        ]
    );

    let Node::PropertySection { name, entries } = &detail.children[1] else {
        panic!("expected property section");
    };
    assert_eq!(name.as_ref().map(|n| n.plain_text()), Some("گروه 1".to_string()));
    let keys: Vec<String> = entries.iter().map(|e| e.key.plain_text()).collect();
    assert_eq!(keys, vec!["user_id", "نام بانک"]);
    assert_eq!(entries[1].value.direction, Direction::Rtl);

    // The unnamed rule renders without a heading, with its digits
    // normalized out of Persian-indic form.
    let Node::PropertySection { name, entries } = &detail.children[2] else {
        panic!("expected property section");
    };
    assert!(name.is_none());
    assert_eq!(entries[0].value.plain_text(), "12345");
    Ok(())
}

#[test]
fn malformed_attachments_degrade_to_none() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let data = parse()?;
    let doc = MapReportDocument::new(MapReportOptions::default(), fonts()).build(&data)?;

    // Row 1 carries an attachment payload that is not valid JSON: the two
    // map images survive, the attachments do not.
    let images = doc.pages[2]
        .children
        .iter()
        .filter(|n| n.kind() == "image")
        .count();
    assert_eq!(images, 2);
    Ok(())
}

#[test]
fn ungrouped_properties_are_dropped_without_catch_all() -> TestResult {
    let data = parse()?;
    let doc = MapReportDocument::new(MapReportOptions::default(), fonts()).build(&data)?;

    let sections = doc.pages[1]
        .children
        .iter()
        .filter(|n| n.kind() == "property-section")
        .count();
    assert_eq!(sections, 2);
    Ok(())
}

#[test]
fn catch_all_collects_leftover_properties() -> TestResult {
    let data = parse()?;
    let options = MapReportOptions {
        catch_all_group: Some("سایر".to_string()),
        ..Default::default()
    };
    let doc = MapReportDocument::new(options, fonts()).build(&data)?;

    let last_section = doc.pages[1]
        .children
        .iter()
        .filter_map(|n| match n {
            Node::PropertySection { name, entries } => Some((name, entries)),
            _ => None,
        })
        .last()
        .expect("catch-all section");
    assert_eq!(
        last_section.0.as_ref().map(|n| n.plain_text()),
        Some("سایر".to_string())
    );
    // شعبه, geometry and photos are covered by no rule.
    assert_eq!(last_section.1.len(), 3);
    Ok(())
}

#[test]
fn empty_title_falls_back_to_default() -> TestResult {
    let mut payload = report_payload();
    payload["title"] = serde_json::json!("");
    let data = MapReportDocument::parse_payload(&payload.to_string())?;
    let doc = MapReportDocument::new(MapReportOptions::default(), fonts()).build(&data)?;

    assert_eq!(doc.title, "گزارش‌گیری");
    let Node::PageHeader { title, .. } = &doc.pages[1].children[0] else {
        panic!("expected page header");
    };
    assert!(title.is_none());
    Ok(())
}

#[test]
fn disabled_table_emits_only_detail_pages() -> TestResult {
    let mut payload = report_payload();
    payload["table"]["enabled"] = serde_json::json!(false);
    let data = MapReportDocument::parse_payload(&payload.to_string())?;
    let doc = MapReportDocument::new(MapReportOptions::default(), fonts()).build(&data)?;

    assert_eq!(doc.page_count(), 2);
    assert!(doc.pages.iter().all(|p| kinds(p)[0] == "page-header"));
    Ok(())
}

#[test]
fn disabled_map_is_not_rendered() -> TestResult {
    let mut payload = report_payload();
    payload["map_2Settings"]["enabled"] = serde_json::json!(false);
    let data = MapReportDocument::parse_payload(&payload.to_string())?;
    let doc = MapReportDocument::new(MapReportOptions::default(), fonts()).build(&data)?;

    // Row 0 keeps map 1 and its two attachments: three images total.
    let images = doc.pages[1]
        .children
        .iter()
        .filter(|n| n.kind() == "image")
        .count();
    assert_eq!(images, 3);
    Ok(())
}
