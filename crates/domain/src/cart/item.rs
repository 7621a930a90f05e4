use common::{MAX_LINE_QUANTITY, MenuItemId, Money};
use serde::{Deserialize, Serialize};

use crate::catalog::MenuItem;

use super::CartError;

/// A menu item in the cart with the number of units wanted.
///
/// The quantity is always between 1 and [`MAX_LINE_QUANTITY`]. Serializes flat, as the menu item's
/// fields plus `quantity`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    #[serde(flatten)]
    item: MenuItem,
    quantity: u32,
}

impl CartItem {
    /// A new cart line holding one unit.
    pub fn new(item: MenuItem) -> Self {
        Self { item, quantity: 1 }
    }

    /// Sets the quantity, rejecting zero and anything above [`MAX_LINE_QUANTITY`].
    pub fn with_quantity(mut self, quantity: u32) -> Result<Self, CartError> {
        if !(1..=MAX_LINE_QUANTITY).contains(&quantity) {
            return Err(CartError::InvalidQuantity {
                item_id: self.item.id.clone(),
                quantity,
            });
        }
        self.quantity = quantity;
        Ok(self)
    }

    pub fn id(&self) -> &MenuItemId {
        &self.item.id
    }

    pub fn item(&self) -> &MenuItem {
        &self.item
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Unit price times quantity.
    pub fn line_total(&self) -> Money {
        self.item.price.multiply(self.quantity)
    }

    // Callers guarantee 1 <= quantity <= MAX_LINE_QUANTITY.
    pub(super) fn set_quantity(&mut self, quantity: u32) {
        debug_assert!((1..=MAX_LINE_QUANTITY).contains(&quantity));
        self.quantity = quantity;
    }
}
