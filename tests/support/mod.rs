//! Shared fixtures for the integration suites.

#![allow(dead_code)]

use asset_tracker::{Asset, AssetStore, Draft};
use tracing_subscriber::EnvFilter;

/// Route store logs to the test writer; `RUST_LOG=asset_tracker=debug` to see them.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn store() -> AssetStore {
    init_tracing();
    AssetStore::new()
}

/// The two-asset inventory: an active IT laptop and a chair under maintenance.
pub fn laptop_and_chair() -> (AssetStore, Asset, Asset) {
    let mut store = store();
    let laptop = store
        .create(
            Draft::new("Laptop A")
                .category("IT")
                .status("Active")
                .serial_number("LT-0042")
                .assigned_to("Chidi")
                .location("Admin Office")
                .current_value(100),
        )
        .unwrap();
    let chair = store
        .create(
            Draft::new("Chair")
                .category("Furniture")
                .status("Under Maintenance")
                .location("Warehouse")
                .current_value(250),
        )
        .unwrap();
    (store, laptop, chair)
}

pub fn names(rows: &[&Asset]) -> Vec<String> {
    rows.iter().map(|asset| asset.name.clone()).collect()
}
