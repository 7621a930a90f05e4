//! Menu items and categories.

use common::{MenuItemId, Money, VendorId};
use serde::{Deserialize, Serialize};

use super::CatalogError;

/// Menu section a dish is listed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Breakfast,
    Lunch,
    Snacks,
    Drinks,
}

impl Category {
    /// All categories in menu order.
    pub const ALL: [Category; 4] = [
        Category::Breakfast,
        Category::Lunch,
        Category::Snacks,
        Category::Drinks,
    ];

    /// Returns the category name as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Breakfast => "breakfast",
            Category::Lunch => "lunch",
            Category::Snacks => "snacks",
            Category::Drinks => "drinks",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CatalogError::UnknownCategory(s.to_string()))
    }
}

/// A catalog entry.
///
/// The JSON shape uses camelCase field names (`vendorId`, `imageUrl`) and the
/// price in minor units.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub id: MenuItemId,
    pub name: String,
    pub price: Money,
    /// Units left in stock.
    pub availability: u32,
    pub category: Category,
    pub vendor_id: VendorId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl MenuItem {
    /// Creates a menu item with no stock, description or image.
    pub fn new(
        id: impl Into<MenuItemId>,
        name: impl Into<String>,
        price: Money,
        category: Category,
        vendor_id: impl Into<VendorId>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            availability: 0,
            category,
            vendor_id: vendor_id.into(),
            description: None,
            image_url: None,
        }
    }

    pub fn with_availability(mut self, availability: u32) -> Self {
        self.availability = availability;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }

    /// Returns true when no units are left.
    pub fn is_sold_out(&self) -> bool {
        self.availability == 0
    }

    /// Returns true when stock is running out but not gone (`0 < availability < threshold`).
    pub fn is_low_stock(&self, threshold: u32) -> bool {
        self.availability > 0 && self.availability < threshold
    }

    /// Case-insensitive substring match against the name and description.
    ///
    /// An empty query matches everything.
    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }

        self.name.to_lowercase().contains(&query)
            || self
                .description
                .as_deref()
                .is_some_and(|d| d.to_lowercase().contains(&query))
    }
}
