//! Filtering assets for table display and export.

use serde::{Deserialize, Serialize};

use crate::asset::Asset;

/// Text fields the search term can be matched against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SearchField {
    Name,
    SerialNumber,
    AssignedTo,
    Location,
    Category,
    Description,
}

impl SearchField {
    /// Fields searched unless configured otherwise.
    pub const DEFAULT: [SearchField; 4] = [
        SearchField::Name,
        SearchField::SerialNumber,
        SearchField::AssignedTo,
        SearchField::Location,
    ];

    pub fn value<'a>(&self, asset: &'a Asset) -> &'a str {
        match self {
            SearchField::Name => &asset.name,
            SearchField::SerialNumber => &asset.serial_number,
            SearchField::AssignedTo => &asset.assigned_to,
            SearchField::Location => &asset.location,
            SearchField::Category => &asset.category,
            SearchField::Description => &asset.description,
        }
    }
}

/// The `{searchTerm, category, status}` selection. Empty parts match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Filter {
    pub search_term: String,
    pub category: String,
    pub status: String,
}

impl Filter {
    /// A filter that matches every asset.
    pub fn all() -> Self {
        Filter::default()
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search_term = term.into();
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn is_empty(&self) -> bool {
        self.search_term.is_empty() && self.category.is_empty() && self.status.is_empty()
    }

    /// Compile the filter against a set of search fields.
    pub fn matcher<'a>(&'a self, fields: &'a [SearchField]) -> Matcher<'a> {
        Matcher {
            needle: self.search_term.to_lowercase(),
            filter: self,
            fields,
        }
    }
}

/// A [`Filter`] with its search term pre-lowercased.
#[derive(Debug)]
pub struct Matcher<'a> {
    needle: String,
    filter: &'a Filter,
    fields: &'a [SearchField],
}

impl Matcher<'_> {
    pub fn matches(&self, asset: &Asset) -> bool {
        self.matches_text(asset) && self.matches_category(asset) && self.matches_status(asset)
    }

    fn matches_text(&self, asset: &Asset) -> bool {
        self.needle.is_empty()
            || self
                .fields
                .iter()
                .any(|field| field.value(asset).to_lowercase().contains(&self.needle))
    }

    fn matches_category(&self, asset: &Asset) -> bool {
        self.filter.category.is_empty() || asset.category == self.filter.category
    }

    fn matches_status(&self, asset: &Asset) -> bool {
        self.filter.status.is_empty() || asset.status == self.filter.status
    }
}
