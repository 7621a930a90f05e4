//! The storefront composition root.

use chrono::{DateTime, Duration, Utc};
use common::{CustomerId, MenuItemId, Money, OrderId, VendorId};
use domain::fixtures::{self, SeedOrder};
use domain::{
    Aggregate, CartSummary, Catalog, Category, MenuItem, Order, OrderService, OrderStatus,
    VendorQueue,
};
use projections::{
    CustomerOrdersView, DailySales, DailySalesView, Notification, NotificationsView, OrderSummary,
    ProjectionProcessor, VendorDashboardView, VendorStats,
};
use uuid::Uuid;

use crate::config::Config;
use crate::error::{Result, StorefrontError};
use crate::session::CustomerSession;

/// Owns the catalog, the order book and the read models built from it.
///
/// Every command that records events brings the read models up to date
/// before returning. Once events are journaled the command succeeds even if a
/// read model rejects them; the failure is logged and the read models stay
/// behind until a later [`Storefront::sync_projections`] gets through.
pub struct Storefront {
    config: Config,
    catalog: Catalog,
    orders: OrderService,
    processor: ProjectionProcessor,
    projected: u64,
    dashboard: VendorDashboardView,
    customers: CustomerOrdersView,
    notifications: NotificationsView,
    sales: DailySalesView,
}

impl Storefront {
    /// Creates a storefront over `catalog` with an empty order book.
    pub fn new(config: Config, catalog: Catalog) -> Self {
        let dashboard = VendorDashboardView::new();
        let customers = CustomerOrdersView::new();
        let notifications = NotificationsView::new();
        let sales = DailySalesView::new();

        let mut processor = ProjectionProcessor::new();
        processor.register(Box::new(dashboard.clone()));
        processor.register(Box::new(customers.clone()));
        processor.register(Box::new(notifications.clone()));
        processor.register(Box::new(sales.clone()));

        Self {
            config,
            catalog,
            orders: OrderService::new(),
            processor,
            projected: 0,
            dashboard,
            customers,
            notifications,
            sales,
        }
    }

    /// Creates a storefront from configuration, loading the catalog file if one
    /// is configured and the built-in campus menu otherwise.
    pub fn from_config(config: Config) -> Result<Self> {
        let catalog = match &config.catalog_path {
            Some(path) => {
                let json = std::fs::read_to_string(path).map_err(|source| {
                    StorefrontError::CatalogFile {
                        path: path.clone(),
                        source,
                    }
                })?;
                Catalog::from_json(&json)?
            }
            None => Catalog::campus(),
        };

        tracing::info!(items = catalog.len(), "catalog ready");
        Ok(Self::new(config, catalog))
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The order book, for direct queries.
    pub fn orders(&self) -> &OrderService {
        &self.orders
    }

    /// Formats an amount with the configured currency symbol.
    pub fn format_price(&self, amount: Money) -> String {
        amount.display_with(&self.config.currency)
    }

    /// Brings every read model up to date with the journal.
    pub fn sync_projections(&mut self) -> Result<()> {
        let pending = self.orders.events_since(self.projected);
        if pending.is_empty() {
            return Ok(());
        }
        self.processor.run_catch_up(pending)?;
        self.projected = self.orders.journal().len() as u64;
        Ok(())
    }

    // Runs after the journal has been written, so it only logs.
    fn refresh_views(&mut self) {
        if let Err(err) = self.sync_projections() {
            tracing::warn!(error = %err, "read models behind the order journal");
        }
    }
}

// Customer operations
impl Storefront {
    /// Menu items matching `query`, optionally limited to one category.
    pub fn browse(&self, query: &str, category: Option<Category>) -> Vec<&MenuItem> {
        self.catalog.browse(query, category)
    }

    /// Items still in stock but below the configured threshold.
    pub fn low_stock(&self) -> Vec<&MenuItem> {
        let threshold = self.config.low_stock_threshold;
        self.catalog
            .items()
            .iter()
            .filter(|item| item.is_low_stock(threshold))
            .collect()
    }

    /// Adds one unit of a catalog item to the session's cart.
    ///
    /// Sold-out items are refused.
    pub fn add_to_cart(&self, session: &mut CustomerSession, item_id: &MenuItemId) -> Result<u32> {
        let item = self
            .catalog
            .get(item_id)
            .ok_or_else(|| StorefrontError::MenuItemNotFound(item_id.clone()))?;
        if item.is_sold_out() {
            return Err(StorefrontError::SoldOut(item_id.clone()));
        }
        Ok(session.cart_mut().add_item(item))
    }

    /// Subtotal, tax and total for the session's cart at the configured rate.
    pub fn cart_summary(&self, session: &CustomerSession) -> CartSummary {
        session.cart().summary(self.config.tax_rate_bps)
    }

    /// Places the session's cart as orders, one per vendor.
    #[tracing::instrument(skip(self, session), fields(customer_id = %session.customer_id()))]
    pub fn checkout(&mut self, session: &mut CustomerSession) -> Result<Vec<Order>> {
        let customer_id = session.customer_id().clone();
        let placed = domain::checkout(session.cart_mut(), &customer_id, &mut self.orders)?;
        metrics::counter!("checkouts_total").increment(1);
        self.refresh_views();
        Ok(placed)
    }

    /// A customer's orders, newest first.
    pub fn order_history(&self, customer_id: &CustomerId) -> Vec<OrderSummary> {
        self.customers.history(customer_id)
    }

    /// A customer's notifications, newest first.
    pub fn notifications(&self, customer_id: &CustomerId) -> Vec<Notification> {
        self.notifications.for_customer(customer_id)
    }

    pub fn unread_notifications(&self, customer_id: &CustomerId) -> usize {
        self.notifications.unread_count(customer_id)
    }

    pub fn mark_notification_read(&self, id: Uuid) -> bool {
        self.notifications.mark_read(id)
    }
}

// Vendor operations
impl Storefront {
    /// Moves one of `vendor_id`'s orders to its next status.
    pub fn advance_order(
        &mut self,
        vendor_id: &VendorId,
        order_id: OrderId,
        requested: OrderStatus,
    ) -> Result<Order> {
        let result = self
            .orders
            .advance_status_for_vendor(vendor_id, order_id, requested)?;
        self.refresh_views();
        Ok(result.aggregate)
    }

    /// The vendor's orders split into active and completed.
    pub fn vendor_queue(&self, vendor_id: &VendorId) -> VendorQueue<'_> {
        self.orders.vendor_queue(vendor_id)
    }

    pub fn vendor_stats(&self, vendor_id: &VendorId) -> VendorStats {
        self.dashboard.stats(vendor_id)
    }

    /// Per-day sales for a vendor, oldest day first.
    pub fn daily_sales(&self, vendor_id: &VendorId) -> Vec<DailySales> {
        self.sales.for_vendor(vendor_id)
    }
}

// Demo data
impl Storefront {
    /// Loads the built-in seed orders, placed relative to now.
    pub fn seed_orders(&mut self) -> Result<Vec<OrderId>> {
        self.seed_orders_at(Utc::now())
    }

    /// Loads the built-in seed orders, placed relative to `now`.
    pub fn seed_orders_at(&mut self, now: DateTime<Utc>) -> Result<Vec<OrderId>> {
        let mut ids = Vec::new();
        for seed in fixtures::seed_orders() {
            ids.push(self.place_seed(seed, now)?);
        }
        self.refresh_views();

        tracing::info!(orders = ids.len(), "seed orders loaded");
        Ok(ids)
    }

    fn place_seed(&mut self, seed: SeedOrder, now: DateTime<Utc>) -> Result<OrderId> {
        let placed_at = now - seed.placed_ago;
        let order_id = self
            .orders
            .create_order_at(seed.customer_id, seed.items, seed.vendor_id, placed_at)?
            .aggregate
            .id();

        let mut at = placed_at;
        let mut status = OrderStatus::Pending;
        while status != seed.status {
            let Some(next) = status.next() else {
                break;
            };
            at += Duration::minutes(5);
            self.orders.advance_status_at(order_id, next, at)?;
            status = next;
        }

        Ok(order_id)
    }
}
