//! Integration tests: OrderService commands → ProjectionProcessor → all four views.

use chrono::{Duration, Utc};
use domain::{
    Aggregate, CartStore, Catalog, CustomerId, MenuItemId, Money, OrderItem, OrderService,
    OrderStatus, VendorId, checkout,
};
use projections::{
    CustomerOrdersView, DailySalesView, NotificationStatus, NotificationsView,
    ProjectionProcessor, ReadModel, VendorDashboardView,
};

struct Harness {
    service: OrderService,
    processor: ProjectionProcessor,
    dashboard: VendorDashboardView,
    customers: CustomerOrdersView,
    notifications: NotificationsView,
    sales: DailySalesView,
}

/// Helper to set up service, processor, and all views.
fn setup() -> Harness {
    let dashboard = VendorDashboardView::new();
    let customers = CustomerOrdersView::new();
    let notifications = NotificationsView::new();
    let sales = DailySalesView::new();

    let mut processor = ProjectionProcessor::new();
    processor.register(Box::new(dashboard.clone()));
    processor.register(Box::new(customers.clone()));
    processor.register(Box::new(notifications.clone()));
    processor.register(Box::new(sales.clone()));

    Harness {
        service: OrderService::new(),
        processor,
        dashboard,
        customers,
        notifications,
        sales,
    }
}

impl Harness {
    fn catch_up(&self) {
        self.processor.run_catch_up(self.service.journal()).unwrap();
    }
}

#[test]
fn test_full_order_lifecycle_across_all_views() {
    let mut h = setup();
    let customer = CustomerId::new("1");
    let canteen = VendorId::new("2");

    let catalog = Catalog::campus();
    let mut cart = CartStore::new();
    for id in ["4", "12", "12"] {
        cart.add_item(catalog.get(&MenuItemId::new(id)).unwrap());
    }
    let placed = checkout(&mut cart, &customer, &mut h.service).unwrap();
    let order_id = placed[0].id();

    h.catch_up();

    let stats = h.dashboard.stats(&canteen);
    assert_eq!(stats.total_orders, 1);
    assert_eq!(stats.pending, 1);
    assert_eq!(stats.revenue, Money::from_major(125));

    let history = h.customers.history(&customer);
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].item_count, 3);
    assert_eq!(history[0].status, OrderStatus::Pending);
    assert!(h.notifications.for_customer(&customer).is_empty());

    h.service
        .advance_status_for_vendor(&canteen, order_id, OrderStatus::Preparing)
        .unwrap();
    h.service
        .advance_status_for_vendor(&canteen, order_id, OrderStatus::Ready)
        .unwrap();
    h.catch_up();

    let stats = h.dashboard.stats(&canteen);
    assert_eq!((stats.pending, stats.preparing, stats.completed), (0, 0, 1));

    let summary = h.customers.get_customer(&customer).unwrap();
    assert_eq!(summary.completed_orders, 1);
    assert_eq!(summary.active_orders, 0);
    assert_eq!(summary.total_spent, Money::from_major(125));

    let notifications = h.notifications.for_customer(&customer);
    assert_eq!(notifications.len(), 2);
    assert!(notifications[0].message.ends_with("is ready for pickup!"));
    assert!(
        notifications
            .iter()
            .all(|n| n.status == NotificationStatus::Unread)
    );

    let today = h.sales.for_vendor(&canteen);
    assert_eq!(today.len(), 1);
    assert_eq!(today[0].total_orders, 1);
    assert_eq!(today[0].total_sales, Money::from_major(125));
}

#[test]
fn test_incremental_catch_up_matches_single_pass() {
    let mut h = setup();
    let now = Utc::now();

    let first = h
        .service
        .create_order_at(
            CustomerId::new("1"),
            vec![OrderItem::new("1", "Idli Sambar", Money::from_major(45), 2)],
            VendorId::new("2"),
            now - Duration::days(1),
        )
        .unwrap()
        .aggregate
        .id();
    h.catch_up();

    h.service
        .advance_status(first, OrderStatus::Preparing)
        .unwrap();
    h.service
        .create_order(
            CustomerId::new("7"),
            vec![OrderItem::new("5", "Biryani", Money::from_major(85), 1)],
            VendorId::new("2"),
        )
        .unwrap();
    h.processor
        .run_catch_up(h.service.events_since(1))
        .unwrap();

    let fresh = setup();
    fresh.processor.run_catch_up(h.service.journal()).unwrap();

    assert_eq!(
        h.dashboard.stats(&VendorId::new("2")),
        fresh.dashboard.stats(&VendorId::new("2"))
    );
    assert_eq!(
        h.customers.history(&CustomerId::new("1")),
        fresh.customers.history(&CustomerId::new("1"))
    );
    assert_eq!(h.sales.for_vendor(&VendorId::new("2")).len(), 2);
    assert_eq!(
        h.sales.for_vendor(&VendorId::new("2")),
        fresh.sales.for_vendor(&VendorId::new("2"))
    );
}

#[test]
fn test_rebuild_restores_views() {
    let mut h = setup();
    let order_id = h
        .service
        .create_order(
            CustomerId::new("1"),
            vec![OrderItem::new("10", "Masala Chai", Money::from_major(15), 3)],
            VendorId::new("2"),
        )
        .unwrap()
        .aggregate
        .id();
    h.service
        .advance_status(order_id, OrderStatus::Preparing)
        .unwrap();
    h.catch_up();

    let before = h.dashboard.stats(&VendorId::new("2"));
    h.notifications.mark_all_read(&CustomerId::new("1"));

    let delivered = h.processor.rebuild_all(h.service.journal()).unwrap();
    assert_eq!(delivered, 8);

    assert_eq!(h.dashboard.stats(&VendorId::new("2")), before);
    assert_eq!(h.customers.count(), 1);
    // read flags are not part of the journal
    assert_eq!(h.notifications.unread_count(&CustomerId::new("1")), 1);
}

#[test]
fn test_multiple_customers_and_vendors() {
    let mut h = setup();
    let catalog = Catalog::campus();

    let mut cart = CartStore::new();
    cart.add_item(catalog.get(&MenuItemId::new("5")).unwrap());
    checkout(&mut cart, &CustomerId::new("1"), &mut h.service).unwrap();

    cart.add_item(catalog.get(&MenuItemId::new("7")).unwrap());
    cart.add_item(catalog.get(&MenuItemId::new("7")).unwrap());
    checkout(&mut cart, &CustomerId::new("2"), &mut h.service).unwrap();

    h.service
        .create_order(
            CustomerId::new("2"),
            vec![OrderItem::new("j1", "Fresh Juice", Money::from_major(40), 1)],
            VendorId::new("juice-bar"),
        )
        .unwrap();

    h.catch_up();

    assert_eq!(h.dashboard.count(), 2);
    assert_eq!(h.dashboard.stats(&VendorId::new("2")).total_orders, 2);
    assert_eq!(h.dashboard.stats(&VendorId::new("juice-bar")).total_orders, 1);

    let top = h.customers.top_customers(2);
    assert_eq!(top[0].customer_id, CustomerId::new("1"));
    assert_eq!(top[0].total_spent, Money::from_major(85));
    assert_eq!(top[1].total_spent, Money::from_major(80));
    assert_eq!(h.customers.history(&CustomerId::new("2")).len(), 2);
}
