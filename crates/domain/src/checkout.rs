//! Turning a cart into orders.

use common::{CustomerId, VendorId};

use crate::cart::CartStore;
use crate::order::{Order, OrderError, OrderItem, OrderService};

/// Places the cart's contents as orders, one per vendor.
///
/// Lines are grouped by the vendor that owns them, in the order each vendor
/// first appears in the cart. Every group is validated before any order is
/// created, and the cart is cleared only after all orders have been placed.
/// On error the cart and the order book are left untouched.
#[tracing::instrument(skip(cart, orders), fields(lines = cart.line_count()))]
pub fn checkout(
    cart: &mut CartStore,
    customer_id: &CustomerId,
    orders: &mut OrderService,
) -> Result<Vec<Order>, OrderError> {
    if cart.is_empty() {
        return Err(OrderError::NoItems);
    }

    let groups = group_by_vendor(cart);
    for (_, items) in &groups {
        Order::validate_items(items)?;
    }

    let mut placed = Vec::with_capacity(groups.len());
    for (vendor_id, items) in groups {
        let result = orders.create_order(customer_id.clone(), items, vendor_id)?;
        placed.push(result.aggregate);
    }

    cart.clear_cart();
    tracing::info!(orders = placed.len(), "checkout complete");

    Ok(placed)
}

fn group_by_vendor(cart: &CartStore) -> Vec<(VendorId, Vec<OrderItem>)> {
    let mut groups: Vec<(VendorId, Vec<OrderItem>)> = Vec::new();
    for line in cart.items() {
        let vendor_id = &line.item().vendor_id;
        match groups.iter_mut().find(|(vendor, _)| vendor == vendor_id) {
            Some((_, items)) => items.push(OrderItem::from(line)),
            None => groups.push((vendor_id.clone(), vec![OrderItem::from(line)])),
        }
    }
    groups
}
