//! CSV projection of asset lists.
//!
//! The legacy style never quotes. It keeps rows intact by rewriting the
//! free-text description only: line breaks become a space and commas become
//! a semicolon. Other fields are written verbatim, so a comma in a name
//! still shifts columns in legacy output.
//!
//! The quoted style applies RFC 4180 quoting to every field that needs it and
//! leaves descriptions untouched. Rows without special characters are
//! byte-identical in both styles.

use std::borrow::Cow;
use std::fmt::Write;

use serde::{Deserialize, Serialize};

use crate::asset::Asset;

pub const HEADER: [&str; 10] = [
    "Name",
    "Category",
    "Status",
    "Purchase Date",
    "Purchase Price",
    "Current Value",
    "Location",
    "Assigned To",
    "Serial Number",
    "Description",
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CsvStyle {
    #[default]
    Legacy,
    Quoted,
}

impl std::str::FromStr for CsvStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "legacy" => Ok(CsvStyle::Legacy),
            "quoted" => Ok(CsvStyle::Quoted),
            other => Err(format!("unknown csv style: {}", other)),
        }
    }
}

/// Serialize assets as CSV: the header line then one line per asset,
/// joined by `\n` with no trailing newline.
pub fn to_csv<'a>(assets: impl IntoIterator<Item = &'a Asset>, style: CsvStyle) -> String {
    let mut out = HEADER.join(",");
    for asset in assets {
        out.push('\n');
        write_row(&mut out, asset, style);
    }
    out
}

fn write_row(out: &mut String, asset: &Asset, style: CsvStyle) {
    let purchase_price = asset.purchase_price.to_string();
    let current_value = asset.current_value.to_string();
    let description = match style {
        CsvStyle::Legacy => flatten_description(&asset.description),
        CsvStyle::Quoted => Cow::Borrowed(asset.description.as_str()),
    };

    let fields: [&str; 10] = [
        &asset.name,
        &asset.category,
        &asset.status,
        &asset.purchase_date,
        &purchase_price,
        &current_value,
        &asset.location,
        &asset.assigned_to,
        &asset.serial_number,
        &description,
    ];

    for (i, field) in fields.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        match style {
            CsvStyle::Legacy => out.push_str(field),
            CsvStyle::Quoted => write_quoted(out, field),
        }
    }
}

/// Line breaks (`\r\n`, `\r`, `\n`) to a single space, commas to semicolons.
pub fn flatten_description(text: &str) -> Cow<'_, str> {
    if !text.contains(['\n', '\r', ',']) {
        return Cow::Borrowed(text);
    }
    let flattened = text
        .replace("\r\n", " ")
        .replace(['\r', '\n'], " ")
        .replace(',', ";");
    Cow::Owned(flattened)
}

fn write_quoted(out: &mut String, field: &str) {
    if !field.contains([',', '"', '\r', '\n']) {
        out.push_str(field);
        return;
    }
    let _ = write!(out, "\"{}\"", field.replace('"', "\"\""));
}
