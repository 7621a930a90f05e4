//! Storefront demo: walks one customer and the campus canteen through a
//! scripted session and prints the resulting dashboards.

use domain::{Aggregate, Category, MenuItemId, OrderStatus, fixtures};
use storefront::{Config, CustomerSession, Storefront, StorefrontError};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

fn init_tracing(config: &Config) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(config.log_json.then(|| tracing_subscriber::fmt::layer().json()))
        .with((!config.log_json).then(|| tracing_subscriber::fmt::layer()))
        .init();
}

fn main() -> Result<(), StorefrontError> {
    // 1. Configuration and tracing
    let config = Config::from_env();
    init_tracing(&config);

    let metrics = match metrics_exporter_prometheus::PrometheusBuilder::new().install_recorder() {
        Ok(handle) => Some(handle),
        Err(err) => {
            tracing::warn!(error = %err, "metrics recorder not installed");
            None
        }
    };

    // 2. Storefront with the orders already in flight
    let mut shop = Storefront::from_config(config)?;
    shop.seed_orders()?;

    // 3. A guest fills a cart before signing in
    let mut guest = CustomerSession::new("guest".into());
    for item in shop.browse("rice", Some(Category::Breakfast)) {
        tracing::info!(item = %item.name, price = %shop.format_price(item.price), "found");
    }
    shop.add_to_cart(&mut guest, &MenuItemId::new("2"))?;
    let stash = guest.stash_cart()?;

    // 4. Signed in, the cart comes along and grows
    let customer = fixtures::campus_customer();
    let mut session = CustomerSession::resume(customer.clone(), &stash)?;
    for id in ["7", "7", "7", "10"] {
        shop.add_to_cart(&mut session, &MenuItemId::new(id))?;
    }
    session.cart_mut().decrease_quantity(&MenuItemId::new("7"));

    let summary = shop.cart_summary(&session);
    tracing::info!(
        items = summary.item_count,
        subtotal = %shop.format_price(summary.subtotal),
        tax = %shop.format_price(summary.tax),
        total = %shop.format_price(summary.total),
        "cart ready"
    );

    // 5. Checkout
    let placed = shop.checkout(&mut session)?;

    // 6. The canteen works through the new order
    let canteen = fixtures::campus_canteen();
    for order in &placed {
        shop.advance_order(&canteen, order.id(), OrderStatus::Preparing)?;
        shop.advance_order(&canteen, order.id(), OrderStatus::Ready)?;
    }

    let queue = shop.vendor_queue(&canteen);
    for order in &queue.active {
        tracing::info!(
            order = %order.id().short(),
            status = %order.status(),
            action = order.status().next_action_label().unwrap_or("-"),
            "in the kitchen"
        );
    }

    // 7. What each side sees now
    let report = serde_json::json!({
        "vendor": shop.vendor_stats(&canteen),
        "activeOrders": queue.active.len(),
        "completedOrders": queue.completed.len(),
        "dailySales": shop.daily_sales(&canteen),
        "orderHistory": shop.order_history(&customer),
        "notifications": shop.notifications(&customer),
        "unread": shop.unread_notifications(&customer),
    });
    println!("{}", serde_json::to_string_pretty(&report)?);

    if let Some(handle) = metrics {
        println!("{}", handle.render());
    }

    Ok(())
}
