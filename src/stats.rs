//! Dashboard counters derived from the full asset list.

use serde::Serialize;

use crate::asset::Asset;
use crate::render::format_currency;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub total: usize,
    pub active: usize,
    /// Sum of current values, saturating at `f64::MAX`.
    pub total_value: f64,
}

impl Stats {
    pub fn of<'a>(assets: impl IntoIterator<Item = &'a Asset>, active_status: &str) -> Self {
        assets.into_iter().fold(Stats::default(), |mut stats, asset| {
            stats.total += 1;
            if asset.is_active(active_status) {
                stats.active += 1;
            }
            stats.total_value = (stats.total_value + asset.current_value).min(f64::MAX);
            stats
        })
    }

    /// Total value as shown on the dashboard, e.g. `$250,000`.
    pub fn formatted_total_value(&self) -> String {
        format_currency(self.total_value)
    }
}
