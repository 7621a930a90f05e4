//! The menu catalog.
//!
//! A [`Catalog`] is loaded once, from the built-in fixture or a JSON document,
//! and never mutated afterwards.

mod menu_item;

pub use menu_item::{Category, MenuItem};

use std::collections::HashMap;

use common::{MenuItemId, VendorId};
use thiserror::Error;

use crate::fixtures;

/// Errors that can occur while loading or querying the catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Two entries share an identifier.
    #[error("Duplicate menu item: {0}")]
    DuplicateItem(MenuItemId),

    /// A price below zero.
    #[error("Invalid price for {item_id}: {price} (must not be negative)")]
    InvalidPrice { item_id: MenuItemId, price: i64 },

    /// Category name not in the fixed set.
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    /// The catalog document could not be parsed.
    #[error("Catalog parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Ordered, read-only collection of menu items.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: Vec<MenuItem>,
    index: HashMap<MenuItemId, usize>,
}

impl Catalog {
    /// Builds a catalog, keeping the given order.
    pub fn new(items: Vec<MenuItem>) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(items.len());

        for (position, item) in items.iter().enumerate() {
            if item.price.is_negative() {
                return Err(CatalogError::InvalidPrice {
                    item_id: item.id.clone(),
                    price: item.price.minor(),
                });
            }
            if index.insert(item.id.clone(), position).is_some() {
                return Err(CatalogError::DuplicateItem(item.id.clone()));
            }
        }

        tracing::debug!(items = items.len(), "catalog loaded");
        Ok(Self { items, index })
    }

    /// Parses a catalog from a JSON array of menu items.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let items: Vec<MenuItem> = serde_json::from_str(json)?;
        Self::new(items)
    }

    /// The built-in campus canteen menu.
    pub fn campus() -> Self {
        let items = fixtures::campus_menu();
        let index = items
            .iter()
            .enumerate()
            .map(|(position, item)| (item.id.clone(), position))
            .collect();
        Self { items, index }
    }

    /// Returns all items in catalog order.
    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    /// Looks up an item by identifier.
    pub fn get(&self, id: &MenuItemId) -> Option<&MenuItem> {
        self.index.get(id).map(|&position| &self.items[position])
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the items in a category.
    pub fn by_category(&self, category: Category) -> Vec<&MenuItem> {
        self.items
            .iter()
            .filter(|item| item.category == category)
            .collect()
    }

    /// Returns the items a vendor sells.
    pub fn by_vendor(&self, vendor_id: &VendorId) -> Vec<&MenuItem> {
        self.items
            .iter()
            .filter(|item| &item.vendor_id == vendor_id)
            .collect()
    }

    /// Returns the items whose name or description contains `query`, ignoring case.
    pub fn search(&self, query: &str) -> Vec<&MenuItem> {
        self.browse(query, None)
    }

    /// Search narrowed to one category; `None` means all categories.
    pub fn browse(&self, query: &str, category: Option<Category>) -> Vec<&MenuItem> {
        self.items
            .iter()
            .filter(|item| category.is_none_or(|c| item.category == c))
            .filter(|item| item.matches_query(query))
            .collect()
    }
}
