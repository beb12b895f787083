use asset_tracker::{AssetStore, Draft, Filter, StoreConfig};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = StoreConfig::default().apply_env()?;
    let mut store = AssetStore::with_config(config)?;

    #[cfg(feature = "emitter")]
    store
        .events_mut()
        .on(asset_tracker::emitter::ASSET_CREATED, |json| {
            println!("created: {}", json);
        });

    let laptop = store.create(
        Draft::new("HP Laptop")
            .category("Electronics")
            .location("Admin Office")
            .assigned_to("Chidi")
            .serial_number("HP-7731")
            .purchase_price("310000")
            .current_value("250000"),
    )?;
    store.create(
        Draft::new("Office Chair")
            .category("Furniture")
            .status("Under Maintenance")
            .description("Broken armrest,\nawaiting parts"),
    )?;

    let stats = store.stats();
    println!(
        "{} assets, {} active, {} total value",
        stats.total,
        stats.active,
        stats.formatted_total_value()
    );

    for asset in store.query(&Filter::all().search("laptop")) {
        println!("match: #{} {}", asset.id, asset.name);
    }

    store.update(
        laptop.id,
        Draft::from_asset(&laptop).status("Under Maintenance"),
    )?;

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| store.export_file_name().to_string());
    std::fs::write(&path, store.export_csv(&Filter::all()))?;
    println!("wrote {}", path);

    Ok(())
}
