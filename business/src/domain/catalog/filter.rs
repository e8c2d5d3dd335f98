//! Selector-based filtering of the catalog.
//!
//! Filtering is stable: the output keeps the input's relative order and
//! nothing is re-sorted.

use std::str::FromStr;

use crate::domain::product::model::Product;
use crate::domain::product::value_objects::{Category, Collection, Size};

/// Raw selector value meaning "do not filter on this dimension".
pub const ALL: &str = "all";

/// One filter dimension: either everything, or a single value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selector<T> {
    All,
    Only(T),
}

impl<T> Default for Selector<T> {
    fn default() -> Self {
        Selector::All
    }
}

impl<T: PartialEq> Selector<T> {
    pub fn matches(&self, value: &T) -> bool {
        match self {
            Selector::All => true,
            Selector::Only(expected) => expected == value,
        }
    }
}

impl<T> Selector<T> {
    pub fn is_all(&self) -> bool {
        matches!(self, Selector::All)
    }
}

impl<T: FromStr> Selector<T> {
    /// Parses a raw selector. Anything outside the enumeration falls back to
    /// `All` instead of failing.
    pub fn parse_lenient(raw: &str) -> Self {
        let raw = raw.trim();
        if raw == ALL {
            return Selector::All;
        }
        raw.parse().map(Selector::Only).unwrap_or(Selector::All)
    }
}

impl<T: std::fmt::Display> std::fmt::Display for Selector<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Selector::All => write!(f, "{}", ALL),
            Selector::Only(value) => write!(f, "{}", value),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterSelection {
    pub category: Selector<Category>,
    pub collection: Selector<Collection>,
    pub size: Selector<Size>,
}

impl FilterSelection {
    pub fn from_raw(category: &str, collection: &str, size: &str) -> Self {
        Self {
            category: Selector::parse_lenient(category),
            collection: Selector::parse_lenient(collection),
            size: Selector::parse_lenient(size),
        }
    }

    pub fn matches(&self, product: &Product) -> bool {
        self.category.matches(&product.category)
            && self.collection.matches(&product.collection)
            && self.size.matches(&product.size)
    }
}

/// Products matching every selector, in their original order.
pub fn filter_products<'a>(products: &'a [Product], selection: &FilterSelection) -> Vec<&'a Product> {
    products.iter().filter(|p| selection.matches(p)).collect()
}
