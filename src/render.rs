//! Markup projection for the asset table and the detail panel.
//!
//! All interpolated asset text is HTML-escaped.

use std::fmt::Write;

use crate::asset::Asset;
use crate::config::StoreConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusBadge {
    Green,
    Yellow,
    Red,
}

impl StatusBadge {
    pub fn for_status(status: &str, config: &StoreConfig) -> Self {
        if status == config.active_status {
            StatusBadge::Green
        } else if status == config.maintenance_status {
            StatusBadge::Yellow
        } else {
            StatusBadge::Red
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            StatusBadge::Green => "badge-green",
            StatusBadge::Yellow => "badge-yellow",
            StatusBadge::Red => "badge-red",
        }
    }
}

const WHOLE_DOLLARS_ABOVE: f64 = 1e15;

/// `$` followed by the amount with thousands separators and at most two
/// fraction digits, trailing zeros dropped: `1234.5` renders as `$1,234.5`.
///
/// Amounts too large for cent precision render as whole dollars.
pub fn format_currency(amount: f64) -> String {
    let amount = if amount.is_finite() { amount } else { 0.0 };
    let (whole, fraction) = if amount.abs() < WHOLE_DOLLARS_ABOVE {
        let cents = (amount.abs() * 100.0).round() as u128;
        ((cents / 100).to_string(), cents % 100)
    } else {
        (format!("{:.0}", amount.abs()), 0)
    };
    let nonzero = fraction > 0 || whole != "0";

    let mut out = String::with_capacity(whole.len() + whole.len() / 3 + 5);
    if amount < 0.0 && nonzero {
        out.push('-');
    }
    out.push('$');
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(digit);
    }
    if fraction > 0 {
        let digits = format!("{:02}", fraction);
        out.push('.');
        out.push_str(digits.trim_end_matches('0'));
    }
    out
}

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

fn or_fallback<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.is_empty() {
        fallback
    } else {
        value
    }
}

/// Table body markup: one `<tr>` per asset, in the given order.
pub fn table_rows<'a>(assets: impl IntoIterator<Item = &'a Asset>, config: &StoreConfig) -> String {
    let mut out = String::new();
    for asset in assets {
        table_row(&mut out, asset, config);
    }
    out
}

fn table_row(out: &mut String, asset: &Asset, config: &StoreConfig) {
    let badge = StatusBadge::for_status(&asset.status, config);
    let serial = if asset.serial_number.is_empty() {
        String::new()
    } else {
        format!("S/N: {}", escape_html(&asset.serial_number))
    };

    let _ = write!(
        out,
        concat!(
            "<tr>\n",
            "  <td>\n",
            "    <div>\n",
            "      <div style=\"font-weight: 500;\">{name}</div>\n",
            "      <div style=\"font-size: 0.875rem; color: #6b7280;\">{serial}</div>\n",
            "    </div>\n",
            "  </td>\n",
            "  <td><span class=\"badge badge-blue\">{category}</span></td>\n",
            "  <td><span class=\"badge {badge}\">{status}</span></td>\n",
            "  <td>{location}</td>\n",
            "  <td>{assigned_to}</td>\n",
            "  <td>{value}</td>\n",
            "  <td>\n",
            "    <div class=\"actions\">\n",
            "      <button class=\"action-btn\" onclick=\"viewAsset({id})\" title=\"View\">👁️</button>\n",
            "      <button class=\"action-btn\" onclick=\"editAsset({id})\" title=\"Edit\">✏️</button>\n",
            "      <button class=\"btn-danger\" onclick=\"deleteAsset({id})\" title=\"Delete\">🗑️</button>\n",
            "    </div>\n",
            "  </td>\n",
            "</tr>\n",
        ),
        name = escape_html(&asset.name),
        serial = serial,
        category = escape_html(&asset.category),
        badge = badge.css_class(),
        status = escape_html(&asset.status),
        location = escape_html(or_fallback(&asset.location, "N/A")),
        assigned_to = escape_html(or_fallback(&asset.assigned_to, "Unassigned")),
        value = format_currency(asset.current_value),
        id = asset.id,
    );
}

/// Detail panel markup for a single asset.
pub fn detail(asset: &Asset, config: &StoreConfig) -> String {
    let badge = StatusBadge::for_status(&asset.status, config);
    let mut out = String::new();

    let _ = write!(
        out,
        concat!(
            "<div class=\"form-grid\">\n",
            "  <div><strong>Asset Name:</strong> {name}</div>\n",
            "  <div><strong>Serial Number:</strong> {serial}</div>\n",
            "  <div><strong>Status:</strong> <span class=\"badge {badge}\">{status}</span></div>\n",
            "  <div><strong>Location:</strong> {location}</div>\n",
            "  <div><strong>Assigned To:</strong> {assigned_to}</div>\n",
            "  <div><strong>Purchase Date:</strong> {purchase_date}</div>\n",
            "  <div><strong>Purchase Price:</strong> {purchase_price}</div>\n",
            "  <div><strong>Current Value:</strong> {current_value}</div>\n",
            "  <div><strong>Warranty Expiry:</strong> {warranty}</div>\n",
            "</div>\n",
        ),
        name = escape_html(&asset.name),
        serial = escape_html(or_fallback(&asset.serial_number, "N/A")),
        badge = badge.css_class(),
        status = escape_html(&asset.status),
        location = escape_html(or_fallback(&asset.location, "N/A")),
        assigned_to = escape_html(or_fallback(&asset.assigned_to, "Unassigned")),
        purchase_date = escape_html(or_fallback(&asset.purchase_date, "N/A")),
        purchase_price = format_currency(asset.purchase_price),
        current_value = format_currency(asset.current_value),
        warranty = escape_html(or_fallback(&asset.warranty_expiry, "N/A")),
    );

    if !asset.description.is_empty() {
        let _ = write!(
            out,
            concat!(
                "<div style=\"margin-top: 1rem;\"><strong>Description:</strong><br>",
                "<div style=\"background: #f9fafb; padding: 1rem; border-radius: 8px; margin-top: 0.5rem;\">",
                "{}</div></div>\n",
            ),
            escape_html(&asset.description),
        );
    }

    out
}
