//! Cart store: one customer's pending selections.

use std::collections::HashSet;

use common::{MAX_LINE_QUANTITY, MenuItemId, Money, VendorId};

use crate::catalog::MenuItem;

use super::{CartError, CartItem, CartSummary};

/// The lines a customer intends to buy, in the order they were first added.
///
/// Holds at most one line per menu item, each with a quantity between 1 and
/// [`MAX_LINE_QUANTITY`]. Every mutation succeeds; operations on an identifier that is not in the
/// cart do nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CartStore {
    items: Vec<CartItem>,
}

impl CartStore {
    /// Creates an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a cart from existing lines, checking the one-line-per-item rule
    /// and the quantity bounds.
    pub fn from_items(items: Vec<CartItem>) -> Result<Self, CartError> {
        let mut seen = HashSet::with_capacity(items.len());
        for line in &items {
            if !(1..=MAX_LINE_QUANTITY).contains(&line.quantity()) {
                return Err(CartError::InvalidQuantity {
                    item_id: line.id().clone(),
                    quantity: line.quantity(),
                });
            }
            if !seen.insert(line.id()) {
                return Err(CartError::DuplicateItem(line.id().clone()));
            }
        }
        Ok(Self { items })
    }

    /// Restores a cart stashed with [`CartStore::to_json`].
    pub fn from_json(json: &str) -> Result<Self, CartError> {
        let items: Vec<CartItem> = serde_json::from_str(json)?;
        Self::from_items(items)
    }

    /// Serializes the cart so it can be restored after a login round-trip.
    pub fn to_json(&self) -> Result<String, CartError> {
        Ok(serde_json::to_string(&self.items)?)
    }

    /// Returns the lines in insertion order.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn get(&self, id: &MenuItemId) -> Option<&CartItem> {
        self.items.iter().find(|line| line.id() == id)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of distinct lines.
    pub fn line_count(&self) -> usize {
        self.items.len()
    }

    /// Total units across all lines. Computed on every call.
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(CartItem::quantity).sum()
    }

    /// Σ price × quantity.
    pub fn subtotal(&self) -> Money {
        self.items.iter().map(CartItem::line_total).sum()
    }

    /// Subtotal, tax and total with the tax rate in basis points.
    pub fn summary(&self, tax_rate_bps: u32) -> CartSummary {
        CartSummary::new(self.item_count(), self.subtotal(), tax_rate_bps)
    }

    /// Vendors in the cart, in the order their first item was added.
    pub fn vendors(&self) -> Vec<&VendorId> {
        let mut vendors: Vec<&VendorId> = Vec::new();
        for line in &self.items {
            if !vendors.contains(&&line.item().vendor_id) {
                vendors.push(&line.item().vendor_id);
            }
        }
        vendors
    }

    /// Adds one unit of `item`, creating the line if needed. Returns the new
    /// quantity, which stops growing at [`MAX_LINE_QUANTITY`].
    pub fn add_item(&mut self, item: &MenuItem) -> u32 {
        let quantity = match self.position(&item.id) {
            Some(position) => {
                let line = &mut self.items[position];
                let quantity = (line.quantity() + 1).min(MAX_LINE_QUANTITY);
                line.set_quantity(quantity);
                quantity
            }
            None => {
                self.items.push(CartItem::new(item.clone()));
                1
            }
        };

        tracing::debug!(item_id = %item.id, quantity, "item added to cart");
        quantity
    }

    /// Removes the line for `id`, returning it if it was there.
    pub fn remove_item(&mut self, id: &MenuItemId) -> Option<CartItem> {
        let position = self.position(id)?;
        let removed = self.items.remove(position);
        tracing::debug!(item_id = %id, "item removed from cart");
        Some(removed)
    }

    /// Sets the quantity of the line for `id`.
    ///
    /// A quantity of 0 removes the line; anything above [`MAX_LINE_QUANTITY`]
    /// is capped. Returns the quantity left in the cart, or `None` if there is
    /// no line for `id` afterwards.
    pub fn update_quantity(&mut self, id: &MenuItemId, quantity: u32) -> Option<u32> {
        let position = self.position(id)?;
        let quantity = quantity.min(MAX_LINE_QUANTITY);

        if quantity == 0 {
            self.items.remove(position);
            tracing::debug!(item_id = %id, "quantity set to zero, line removed");
            return None;
        }

        self.items[position].set_quantity(quantity);
        tracing::debug!(item_id = %id, quantity, "cart quantity updated");
        Some(quantity)
    }

    /// Adds one unit to an existing line.
    pub fn increase_quantity(&mut self, id: &MenuItemId) -> Option<u32> {
        let quantity = self.get(id)?.quantity() + 1;
        self.update_quantity(id, quantity)
    }

    /// Takes one unit off an existing line, never going below 1.
    ///
    /// Use [`CartStore::remove_item`] to drop the line.
    pub fn decrease_quantity(&mut self, id: &MenuItemId) -> Option<u32> {
        let quantity = self.get(id)?.quantity().saturating_sub(1).max(1);
        self.update_quantity(id, quantity)
    }

    /// Removes every line.
    pub fn clear_cart(&mut self) {
        self.items.clear();
        tracing::debug!("cart cleared");
    }

    fn position(&self, id: &MenuItemId) -> Option<usize> {
        self.items.iter().position(|line| line.id() == id)
    }
}
