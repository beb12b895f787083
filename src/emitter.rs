use event_emitter_rs::EventEmitter;

pub const ASSET_CREATED: &str = "AssetCreated";
pub const ASSET_UPDATED: &str = "AssetUpdated";
pub const ASSET_DELETED: &str = "AssetDeleted";

/// Change notifications fired by the store after each successful mutation.
///
/// `AssetCreated` and `AssetUpdated` carry the asset as JSON; `AssetDeleted`
/// carries the removed id. Listeners run on the emitter's own threads.
///
/// # Example
///
/// ```ignore
/// let mut store = AssetStore::new();
///
/// store.events_mut().on(ASSET_CREATED, |json| {
///     println!("created: {}", json);
/// });
///
/// store.create(Draft::new("Laptop"))?;
/// ```
pub struct StoreEvents {
    event_emitter: EventEmitter,
}

impl Default for StoreEvents {
    fn default() -> Self {
        Self::new()
    }
}

impl StoreEvents {
    pub fn new() -> Self {
        Self {
            event_emitter: EventEmitter::new(),
        }
    }

    /// Register a listener for an event type.
    pub fn on<F>(&mut self, event: &str, listener: F)
    where
        F: Fn(String) + Send + Sync + 'static,
    {
        self.event_emitter.on(event, listener);
    }

    /// Emit an event immediately.
    pub fn emit(&mut self, event: &str, data: impl Into<String>) {
        self.event_emitter.emit(event, data.into());
    }
}
