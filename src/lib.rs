//! In-memory asset inventory: an owned store of asset records with
//! filtered queries, dashboard stats, CSV export and table markup.
//!
//! ```ignore
//! use asset_tracker::{AssetStore, Draft, Filter};
//!
//! let mut store = AssetStore::new();
//! let laptop = store.create(Draft::new("Laptop A").category("IT"))?;
//! store.create(Draft::new("Chair").status("Under Maintenance"))?;
//!
//! let rows = store.query(&Filter::all().search("lap"));
//! assert_eq!(rows[0].id, laptop.id);
//!
//! let csv = store.export_csv(&Filter::all());
//! ```

extern crate self as asset_tracker;

mod asset;
mod config;
pub mod csv;
#[cfg(feature = "emitter")]
pub mod emitter;
mod error;
mod id;
mod query;
mod record;
pub mod render;
mod stats;
mod store;

pub use asset::{parse_amount, Asset, Draft, ACTIVE, UNDER_MAINTENANCE};
pub use config::{StoreConfig, ENV_CSV_STYLE, ENV_DEFAULT_STATUS, ENV_ID_STRATEGY};
pub use csv::CsvStyle;
pub use error::{ConfigError, Result, StoreError};
pub use id::{IdGenerator, IdStrategy, SequentialIds, TimestampIds};
pub use query::{Filter, Matcher, SearchField};
pub use record::{Collection, Record};
pub use render::StatusBadge;
pub use stats::Stats;
pub use store::AssetStore;

#[cfg(feature = "emitter")]
pub use emitter::StoreEvents;
