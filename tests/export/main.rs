//! Integration tests for the CSV and markup projections.

#[path = "../support/mod.rs"]
mod support;

use asset_tracker::csv::HEADER;
use asset_tracker::{AssetStore, CsvStyle, Draft, Filter, StoreConfig};
use support::{laptop_and_chair, store};

#[test]
fn header_matches_export_format() {
    let store = store();
    assert_eq!(
        store.export_csv(&Filter::all()),
        "Name,Category,Status,Purchase Date,Purchase Price,Current Value,Location,Assigned To,Serial Number,Description"
    );
    assert_eq!(HEADER.len(), 10);
}

#[test]
fn one_line_per_record_plus_header() {
    let mut store = store();
    for i in 0..5 {
        store
            .create(Draft::new(format!("Asset {}", i)).description("multi\nline\ntext"))
            .unwrap();
    }

    let csv = store.export_csv(&Filter::all());
    assert_eq!(csv.lines().count(), 6);
    assert!(!csv.ends_with('\n'));
}

#[test]
fn description_commas_and_newlines_are_flattened() {
    let mut store = store();
    let asset = store
        .create(Draft::new("Server").description("line1,line2\nline3"))
        .unwrap();

    let csv = store.to_csv([store.get(asset.id).unwrap()]);
    let row = csv.lines().nth(1).unwrap();
    let fields: Vec<&str> = row.split(',').collect();

    assert_eq!(fields.len(), 10);
    assert_eq!(fields[9], "line1;line2 line3");
    assert_eq!(csv.lines().count(), 2);
}

#[test]
fn amounts_are_plain_decimals() {
    let mut store = store();
    store
        .create(
            Draft::new("Generator")
                .purchase_price("250000")
                .current_value("1234.5"),
        )
        .unwrap();

    let csv = store.export_csv(&Filter::all());
    let row = csv.lines().nth(1).unwrap();
    assert_eq!(row, "Generator,,Active,,250000,1234.5,,,,");
}

#[test]
fn export_respects_filter() {
    let (store, _, _) = laptop_and_chair();

    let csv = store.export_csv(&Filter::all().category("Furniture"));
    let rows: Vec<&str> = csv.lines().skip(1).collect();
    assert_eq!(
        rows,
        vec!["Chair,Furniture,Under Maintenance,,0,250,Warehouse,,,"]
    );
}

#[test]
fn quoted_style_keeps_commas_in_any_field() {
    let config = StoreConfig {
        csv_style: CsvStyle::Quoted,
        ..StoreConfig::default()
    };
    let mut store = AssetStore::with_config(config).unwrap();
    store
        .create(
            Draft::new("Desk, standing")
                .location("Floor 2, East")
                .description("line1,line2\nline3"),
        )
        .unwrap();

    let csv = store.export_csv(&Filter::all());
    assert!(csv.starts_with(&HEADER.join(",")));
    assert!(csv.contains("\"Desk, standing\""));
    assert!(csv.contains("\"Floor 2, East\""));
    assert!(csv.ends_with("\"line1,line2\nline3\""));
}

#[test]
fn export_file_name_defaults_to_assets_csv() {
    assert_eq!(store().export_file_name(), "assets.csv");
}

#[test]
fn table_renders_filtered_rows() {
    let (store, laptop, chair) = laptop_and_chair();

    let html = store.render_table(&Filter::all().search("lap"));
    assert_eq!(html.matches("<tr>").count(), 1);
    assert!(html.contains("Laptop A"));
    assert!(html.contains("S/N: LT-0042"));
    assert!(html.contains("badge-green"));
    assert!(html.contains(&format!("editAsset({})", laptop.id)));
    assert!(!html.contains(&format!("editAsset({})", chair.id)));

    let html = store.render_table(&Filter::all());
    assert_eq!(html.matches("<tr>").count(), 2);
    assert!(html.contains("badge-yellow"));
}

#[test]
fn detail_panel_for_stored_asset() {
    let (store, laptop, _) = laptop_and_chair();

    let html = store.render_detail(laptop.id).unwrap();
    assert!(html.contains("<strong>Asset Name:</strong> Laptop A"));
    assert!(html.contains("<strong>Assigned To:</strong> Chidi"));
    assert!(html.contains("<strong>Current Value:</strong> $100"));
    assert!(html.contains("<strong>Warranty Expiry:</strong> N/A"));
}

#[test]
fn dashboard_total_value_is_currency_formatted() {
    let mut store = store();
    store.create(Draft::new("HP Laptop").current_value(250000)).unwrap();
    store.create(Draft::new("Dock").current_value("1500.25")).unwrap();

    assert_eq!(store.stats().formatted_total_value(), "$251,500.25");
}
