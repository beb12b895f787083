//! The asset record and the caller-supplied draft it is built from.

mod draft;

use serde::{Deserialize, Serialize};

use crate::record::Record;

pub use draft::{parse_amount, Draft};

/// Status recognised as in service.
pub const ACTIVE: &str = "Active";

/// Status recognised as temporarily out of service.
pub const UNDER_MAINTENANCE: &str = "Under Maintenance";

/// A tracked inventory item.
///
/// Field names serialize in camelCase (`serialNumber`, `currentValue`, ...).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Record)]
#[record(collection = "assets")]
#[serde(rename_all = "camelCase", default)]
pub struct Asset {
    #[record(id)]
    pub id: u64,
    pub name: String,
    pub category: String,
    pub status: String,
    pub serial_number: String,
    pub location: String,
    pub assigned_to: String,
    pub warranty_expiry: String,
    pub purchase_date: String,
    pub description: String,
    pub purchase_price: f64,
    pub current_value: f64,
}

impl Default for Asset {
    fn default() -> Self {
        Asset {
            id: 0,
            name: String::new(),
            category: String::new(),
            status: ACTIVE.to_string(),
            serial_number: String::new(),
            location: String::new(),
            assigned_to: String::new(),
            warranty_expiry: String::new(),
            purchase_date: String::new(),
            description: String::new(),
            purchase_price: 0.0,
            current_value: 0.0,
        }
    }
}

impl Asset {
    pub fn is_active(&self, active_status: &str) -> bool {
        self.status == active_status
    }
}
