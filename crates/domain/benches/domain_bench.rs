use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use domain::{
    Aggregate, CartStore, Catalog, CustomerId, MenuItemId, Money, Order, OrderItem, OrderService,
    OrderStatus, VendorId, checkout,
};

fn lunch_items() -> Vec<OrderItem> {
    vec![
        OrderItem::new("4", "Thali", Money::from_major(75), 1),
        OrderItem::new("12", "Soft Drinks", Money::from_major(25), 1),
    ]
}

fn bench_cart_add(c: &mut Criterion) {
    let catalog = Catalog::campus();

    c.bench_function("domain/cart_add_full_menu", |b| {
        b.iter(|| {
            let mut cart = CartStore::new();
            for item in catalog.items() {
                cart.add_item(item);
                cart.add_item(item);
            }
            cart.item_count()
        });
    });
}

fn bench_create_order(c: &mut Criterion) {
    let mut service = OrderService::new();

    c.bench_function("domain/create_order", |b| {
        b.iter(|| {
            service
                .create_order(CustomerId::new("1"), lunch_items(), VendorId::new("2"))
                .unwrap()
        });
    });
}

fn bench_full_lifecycle(c: &mut Criterion) {
    c.bench_function("domain/place_prepare_ready", |b| {
        b.iter_batched(
            OrderService::new,
            |mut service| {
                let order_id = service
                    .create_order(CustomerId::new("1"), lunch_items(), VendorId::new("2"))
                    .unwrap()
                    .aggregate
                    .id();
                service
                    .advance_status(order_id, OrderStatus::Preparing)
                    .unwrap();
                service.advance_status(order_id, OrderStatus::Ready).unwrap();
                service
            },
            BatchSize::SmallInput,
        );
    });
}

fn bench_checkout(c: &mut Criterion) {
    let catalog = Catalog::campus();
    let customer = CustomerId::new("1");
    let ids: Vec<MenuItemId> = ["1", "4", "7", "10"].into_iter().map(MenuItemId::new).collect();

    c.bench_function("domain/checkout", |b| {
        b.iter_batched(
            || {
                let mut cart = CartStore::new();
                for id in &ids {
                    if let Some(item) = catalog.get(id) {
                        cart.add_item(item);
                    }
                }
                (cart, OrderService::new())
            },
            |(mut cart, mut service)| checkout(&mut cart, &customer, &mut service).unwrap(),
            BatchSize::SmallInput,
        );
    });
}

fn bench_replay(c: &mut Criterion) {
    let mut service = OrderService::new();
    let order_id = service
        .create_order(CustomerId::new("1"), lunch_items(), VendorId::new("2"))
        .unwrap()
        .aggregate
        .id();
    service
        .advance_status(order_id, OrderStatus::Preparing)
        .unwrap();
    service.advance_status(order_id, OrderStatus::Ready).unwrap();

    let events: Vec<_> = service
        .journal()
        .iter()
        .map(|envelope| envelope.event.clone())
        .collect();

    c.bench_function("domain/replay_order", |b| {
        b.iter(|| Order::replay(events.clone()).unwrap());
    });
}

criterion_group!(
    benches,
    bench_cart_add,
    bench_create_order,
    bench_full_lifecycle,
    bench_checkout,
    bench_replay
);
criterion_main!(benches);
