use serde::{Deserialize, Serialize};

use super::Asset;
use crate::error::{Result, StoreError};

/// Field values gathered from an asset form, before defaults and validation.
///
/// Amounts are kept as the raw text the user typed; they are coerced with
/// [`parse_amount`] when the draft is admitted.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Draft {
    pub name: String,
    pub category: String,
    pub status: String,
    pub serial_number: String,
    pub location: String,
    pub assigned_to: String,
    pub warranty_expiry: String,
    pub purchase_date: String,
    pub description: String,
    pub purchase_price: String,
    pub current_value: String,
}

impl Draft {
    pub fn new(name: impl Into<String>) -> Self {
        Draft {
            name: name.into(),
            ..Draft::default()
        }
    }

    /// Populate a draft from an existing asset, as an edit form would be.
    pub fn from_asset(asset: &Asset) -> Self {
        Draft {
            name: asset.name.clone(),
            category: asset.category.clone(),
            status: asset.status.clone(),
            serial_number: asset.serial_number.clone(),
            location: asset.location.clone(),
            assigned_to: asset.assigned_to.clone(),
            warranty_expiry: asset.warranty_expiry.clone(),
            purchase_date: asset.purchase_date.clone(),
            description: asset.description.clone(),
            purchase_price: asset.purchase_price.to_string(),
            current_value: asset.current_value.to_string(),
        }
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn serial_number(mut self, serial_number: impl Into<String>) -> Self {
        self.serial_number = serial_number.into();
        self
    }

    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    pub fn assigned_to(mut self, assigned_to: impl Into<String>) -> Self {
        self.assigned_to = assigned_to.into();
        self
    }

    pub fn warranty_expiry(mut self, warranty_expiry: impl Into<String>) -> Self {
        self.warranty_expiry = warranty_expiry.into();
        self
    }

    pub fn purchase_date(mut self, purchase_date: impl Into<String>) -> Self {
        self.purchase_date = purchase_date.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn purchase_price(mut self, purchase_price: impl ToString) -> Self {
        self.purchase_price = purchase_price.to_string();
        self
    }

    pub fn current_value(mut self, current_value: impl ToString) -> Self {
        self.current_value = current_value.to_string();
        self
    }

    /// The only rule: a name that is not blank after trimming.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(StoreError::blank("name"));
        }
        Ok(())
    }

    /// Validate the draft and fill defaults, producing the asset stored under `id`.
    pub(crate) fn into_asset(self, id: u64, default_status: &str) -> Result<Asset> {
        self.validate()?;
        let name = self.name.trim();

        let status = match self.status.trim() {
            "" => default_status.to_string(),
            status => status.to_string(),
        };

        Ok(Asset {
            id,
            name: name.to_string(),
            category: self.category,
            status,
            serial_number: self.serial_number,
            location: self.location,
            assigned_to: self.assigned_to,
            warranty_expiry: self.warranty_expiry,
            purchase_date: self.purchase_date,
            description: self.description,
            purchase_price: parse_amount(&self.purchase_price),
            current_value: parse_amount(&self.current_value),
        })
    }
}

/// Lenient amount parse: the longest leading decimal number in `input`.
///
/// Blank, unparsable, negative and non-finite input all yield `0.0`.
pub fn parse_amount(input: &str) -> f64 {
    let s = input.trim();
    let value = s
        .parse::<f64>()
        .ok()
        .or_else(|| leading_decimal(s).and_then(|prefix| prefix.parse().ok()));

    match value {
        Some(v) if v.is_finite() && v > 0.0 => v,
        _ => 0.0,
    }
}

fn leading_decimal(s: &str) -> Option<&str> {
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }

    if digits == 0 {
        return None;
    }

    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && matches!(bytes[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let exp_digits = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits {
            end = exp_end;
        }
    }

    Some(&s[..end])
}
