//! AssetStore - the owning container for all assets and the only place they change.

use std::fmt;

use tracing::{debug, trace, warn};

use crate::asset::{Asset, Draft};
use crate::config::StoreConfig;
use crate::csv;
use crate::error::{ConfigError, Result, StoreError};
use crate::id::IdGenerator;
use crate::query::Filter;
use crate::record::{Collection, Record};
use crate::render;
use crate::stats::Stats;

#[cfg(feature = "emitter")]
use crate::emitter::{StoreEvents, ASSET_CREATED, ASSET_DELETED, ASSET_UPDATED};

/// In-memory asset list with create/update/delete, filtered queries,
/// dashboard stats and CSV/markup projections.
///
/// Assets keep insertion order. Updates replace the whole record in place.
pub struct AssetStore {
    assets: Collection<Asset>,
    ids: Box<dyn IdGenerator>,
    config: StoreConfig,
    #[cfg(feature = "emitter")]
    events: StoreEvents,
}

impl Default for AssetStore {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for AssetStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AssetStore")
            .field("collection", &Asset::COLLECTION)
            .field("assets", &self.assets)
            .field("config", &self.config)
            .finish()
    }
}

impl AssetStore {
    /// Create an empty store with the default configuration.
    pub fn new() -> Self {
        let config = StoreConfig::default();
        let ids = config.id_strategy.generator();
        Self::from_parts(config, ids)
    }

    /// Create an empty store, validating `config` first.
    pub fn with_config(config: StoreConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let ids = config.id_strategy.generator();
        Ok(Self::from_parts(config, ids))
    }

    /// Create an empty store that draws ids from `ids` instead of the configured strategy.
    pub fn with_id_generator(
        config: StoreConfig,
        ids: impl IdGenerator + 'static,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_parts(config, Box::new(ids)))
    }

    fn from_parts(config: StoreConfig, ids: Box<dyn IdGenerator>) -> Self {
        AssetStore {
            assets: Collection::new(),
            ids,
            config,
            #[cfg(feature = "emitter")]
            events: StoreEvents::new(),
        }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Listener registry for change notifications.
    #[cfg(feature = "emitter")]
    pub fn events_mut(&mut self) -> &mut StoreEvents {
        &mut self.events
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    /// Admit a new asset built from `draft` under a fresh id.
    pub fn create(&mut self, draft: Draft) -> Result<Asset> {
        if let Err(err) = draft.validate() {
            warn!(error = %err, "rejected asset draft");
            return Err(err);
        }

        let asset = draft.into_asset(0, &self.config.default_status)?;
        let asset = self.insert_with_fresh_id(asset)?;

        debug!(
            collection = Asset::COLLECTION,
            id = asset.id,
            name = %asset.name,
            "asset created"
        );
        #[cfg(feature = "emitter")]
        self.notify_changed(ASSET_CREATED, &asset);
        Ok(asset)
    }

    /// Replace the asset stored under `id` with one built from `draft`.
    ///
    /// The whole record is replaced; fields left blank in the draft take
    /// their defaults rather than keeping the previous values.
    pub fn update(&mut self, id: u64, draft: Draft) -> Result<Asset> {
        if let Err(err) = draft.validate() {
            warn!(id, error = %err, "rejected asset draft");
            return Err(err);
        }
        if !self.assets.contains(id) {
            warn!(id, "update of unknown asset");
            return Err(StoreError::NotFound { id });
        }

        let asset = draft.into_asset(id, &self.config.default_status)?;
        self.assets
            .replace(asset.clone())
            .map_err(|_| StoreError::NotFound { id })?;

        debug!(collection = Asset::COLLECTION, id, name = %asset.name, "asset updated");
        #[cfg(feature = "emitter")]
        self.notify_changed(ASSET_UPDATED, &asset);
        Ok(asset)
    }

    /// Remove the asset stored under `id`. Returns whether anything was removed.
    pub fn delete(&mut self, id: u64) -> bool {
        match self.assets.remove(id) {
            Some(asset) => {
                debug!(collection = Asset::COLLECTION, id, name = %asset.name, "asset deleted");
                #[cfg(feature = "emitter")]
                self.events.emit(ASSET_DELETED, id.to_string());
                true
            }
            None => {
                trace!(id, "delete of unknown asset");
                false
            }
        }
    }

    pub fn get(&self, id: u64) -> Option<&Asset> {
        self.assets.get(id)
    }

    /// All assets in insertion order.
    pub fn list(&self) -> Vec<&Asset> {
        self.assets.iter().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Asset> {
        self.assets.iter()
    }

    /// Assets matching every part of `filter`, in insertion order.
    pub fn query(&self, filter: &Filter) -> Vec<&Asset> {
        let matcher = filter.matcher(&self.config.search_fields);
        let rows: Vec<&Asset> = self.assets.find(|asset| matcher.matches(asset)).collect();
        trace!(matched = rows.len(), total = self.assets.len(), "asset query");
        rows
    }

    /// Counters over the full, unfiltered list.
    pub fn stats(&self) -> Stats {
        Stats::of(self.assets.iter(), &self.config.active_status)
    }

    /// Serialize `rows` as CSV in the configured style.
    pub fn to_csv<'a>(&self, rows: impl IntoIterator<Item = &'a Asset>) -> String {
        csv::to_csv(rows, self.config.csv_style)
    }

    /// CSV of the assets matching `filter`.
    pub fn export_csv(&self, filter: &Filter) -> String {
        self.to_csv(self.query(filter))
    }

    /// File name offered for CSV downloads.
    pub fn export_file_name(&self) -> &str {
        &self.config.export_file_name
    }

    /// Table body markup for the assets matching `filter`.
    pub fn render_table(&self, filter: &Filter) -> String {
        render::table_rows(self.query(filter), &self.config)
    }

    /// Detail panel markup for the asset stored under `id`.
    pub fn render_detail(&self, id: u64) -> Result<String> {
        let asset = self.get(id).ok_or(StoreError::NotFound { id })?;
        Ok(render::detail(asset, &self.config))
    }

    /// A draft pre-filled from the asset stored under `id`, for edit forms.
    pub fn edit_draft(&self, id: u64) -> Result<Draft> {
        self.get(id)
            .map(Draft::from_asset)
            .ok_or(StoreError::NotFound { id })
    }

    /// Distinct categories in first-seen order, blanks skipped.
    pub fn categories(&self) -> Vec<&str> {
        distinct(self.assets.iter().map(|asset| asset.category.as_str()))
    }

    /// Distinct statuses in first-seen order, blanks skipped.
    pub fn statuses(&self) -> Vec<&str> {
        distinct(self.assets.iter().map(|asset| asset.status.as_str()))
    }

    /// Admit fully formed assets, e.g. seed data.
    ///
    /// All names are checked before anything is admitted. Amounts are
    /// re-coerced, blank statuses take the default, and an id of 0 or one
    /// already in use is replaced with a fresh id. Returns the ids assigned.
    ///
    /// If fresh ids run out part way, the assets admitted before the
    /// failing one stay in the store.
    pub fn import(&mut self, assets: Vec<Asset>) -> Result<Vec<u64>> {
        if let Some(invalid) = assets.iter().find(|a| a.name.trim().is_empty()) {
            warn!(id = invalid.id, "rejected asset import");
            return Err(StoreError::blank("name"));
        }

        let mut ids = Vec::with_capacity(assets.len());
        for mut asset in assets {
            asset.name = asset.name.trim().to_string();
            if asset.status.trim().is_empty() {
                asset.status = self.config.default_status.clone();
            }
            asset.purchase_price = coerce_amount(asset.purchase_price);
            asset.current_value = coerce_amount(asset.current_value);

            let asset = if asset.id == 0 {
                self.insert_with_fresh_id(asset)?
            } else {
                match self.assets.try_insert(asset) {
                    Ok(stored) => stored.clone(),
                    Err(taken) => self.insert_with_fresh_id(taken)?,
                }
            };
            #[cfg(feature = "emitter")]
            self.notify_changed(ASSET_CREATED, &asset);
            ids.push(asset.id);
        }

        debug!(collection = Asset::COLLECTION, count = ids.len(), "assets imported");
        Ok(ids)
    }

    /// Store `asset` under the first id from the generator that is non-zero
    /// and not taken, giving up after `MAX_ID_ATTEMPTS` draws.
    fn insert_with_fresh_id(&mut self, mut asset: Asset) -> Result<Asset> {
        for _ in 0..MAX_ID_ATTEMPTS {
            let Some(id) = self.ids.next_id() else {
                break;
            };
            if id == 0 {
                continue;
            }
            asset.id = id;
            match self.assets.try_insert(asset) {
                Ok(stored) => return Ok(stored.clone()),
                Err(taken) => {
                    trace!(id, "generated id already in use");
                    asset = taken;
                }
            }
        }

        warn!(attempts = MAX_ID_ATTEMPTS, "asset ids exhausted");
        Err(StoreError::IdsExhausted {
            attempts: MAX_ID_ATTEMPTS,
        })
    }

    #[cfg(feature = "emitter")]
    fn notify_changed(&mut self, event: &str, asset: &Asset) {
        match serde_json::to_string(asset) {
            Ok(json) => self.events.emit(event, json),
            Err(err) => warn!(id = asset.id, error = %err, "failed to encode change event"),
        }
    }
}

const MAX_ID_ATTEMPTS: usize = 1024;

fn coerce_amount(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut seen: Vec<&str> = Vec::new();
    for value in values {
        if !value.is_empty() && !seen.contains(&value) {
            seen.push(value);
        }
    }
    seen
}
