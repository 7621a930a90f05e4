//! Value objects for the order domain.

use common::{MenuItemId, Money};
use serde::{Deserialize, Serialize};

use crate::cart::CartItem;

/// A line on an order.
///
/// Name and price are copied from the menu when the order is placed, so later
/// catalog changes do not affect existing orders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    /// The menu item this line was ordered from.
    pub item_id: MenuItemId,

    /// Dish name at order time.
    pub name: String,

    /// Unit price at order time.
    pub price: Money,

    /// Quantity ordered.
    pub quantity: u32,
}

impl OrderItem {
    /// Creates a new order line.
    pub fn new(
        item_id: impl Into<MenuItemId>,
        name: impl Into<String>,
        price: Money,
        quantity: u32,
    ) -> Self {
        Self {
            item_id: item_id.into(),
            name: name.into(),
            price,
            quantity,
        }
    }

    /// Returns `price * quantity`.
    pub fn line_total(&self) -> Money {
        self.price.multiply(self.quantity)
    }
}

impl From<&CartItem> for OrderItem {
    fn from(line: &CartItem) -> Self {
        let item = line.item();
        Self {
            item_id: item.id.clone(),
            name: item.name.clone(),
            price: item.price,
            quantity: line.quantity(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Category, MenuItem};

    #[test]
    fn test_line_total() {
        let item = OrderItem::new("9", "Vegetable Cutlets", Money::from_minor(1250), 3);
        assert_eq!(item.line_total(), Money::from_minor(3750));
    }

    #[test]
    fn test_snapshot_from_cart_line() {
        let menu_item =
            MenuItem::new("4", "Thali", Money::from_major(75), Category::Lunch, "2");
        let line = CartItem::new(menu_item).with_quantity(2).unwrap();

        let order_item = OrderItem::from(&line);
        assert_eq!(order_item.item_id.as_str(), "4");
        assert_eq!(order_item.name, "Thali");
        assert_eq!(order_item.quantity, 2);
        assert_eq!(order_item.line_total(), Money::from_major(150));
    }

    #[test]
    fn test_json_shape() {
        let item = OrderItem::new("10", "Masala Chai", Money::from_major(15), 1);
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["itemId"], "10");
        assert_eq!(json["price"], 1500);
    }
}
