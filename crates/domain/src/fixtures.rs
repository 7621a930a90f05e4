//! Built-in mock data for the campus canteen.
//!
//! Stands in for a backend until one exists: one customer, one vendor, the
//! canteen's twelve dishes and two orders already in flight.

use chrono::Duration;
use common::{CustomerId, Money, VendorId};

use crate::catalog::{Category, MenuItem};
use crate::order::{OrderItem, OrderStatus};

/// The demo student account.
pub fn campus_customer() -> CustomerId {
    CustomerId::new("1")
}

/// The campus canteen, owner of every fixture dish.
pub fn campus_canteen() -> VendorId {
    VendorId::new("2")
}

fn dish(
    id: &str,
    name: &str,
    price: Money,
    availability: u32,
    category: Category,
    image: &str,
    description: &str,
) -> MenuItem {
    MenuItem::new(id, name, price, category, campus_canteen())
        .with_availability(availability)
        .with_image_url(format!("/Menu Items/{image}.jpeg"))
        .with_description(description)
}

/// The canteen menu in display order.
pub fn campus_menu() -> Vec<MenuItem> {
    vec![
        dish(
            "1",
            "Idli Sambar",
            Money::from_major(45),
            20,
            Category::Breakfast,
            "Idli Sambhar",
            "Soft rice cakes served with lentil stew and coconut chutney",
        ),
        dish(
            "2",
            "Masala Dosa",
            Money::from_major(50),
            15,
            Category::Breakfast,
            "Masala Dosa",
            "Crispy rice pancake filled with spiced potato filling",
        ),
        dish(
            "3",
            "Poha",
            Money::from_major(30),
            25,
            Category::Breakfast,
            "Poha",
            "Flattened rice with onions, peanuts, and spices",
        ),
        dish(
            "4",
            "Thali",
            Money::from_major(75),
            10,
            Category::Lunch,
            "Thali",
            "Complete meal with rice, dal, curry, yogurt, and sides",
        ),
        dish(
            "5",
            "Biryani",
            Money::from_major(85),
            8,
            Category::Lunch,
            "Biryani",
            "Fragrant rice dish with tender meat and aromatic spices",
        ),
        dish(
            "6",
            "Chole Bhature",
            Money::from_major(65),
            12,
            Category::Lunch,
            "Chole Bhature",
            "Spiced chickpea curry with fried bread",
        ),
        dish(
            "7",
            "Samosa",
            Money::from_major(20),
            30,
            Category::Snacks,
            "Samosa",
            "Crispy pastry filled with spiced potatoes and peas",
        ),
        dish(
            "8",
            "Vada Pav",
            Money::from_major(25),
            25,
            Category::Snacks,
            "Vada Pav",
            "Spiced potato fritter in a bun with chutneys",
        ),
        dish(
            "9",
            "Vegetable Cutlets",
            Money::from_minor(1250),
            20,
            Category::Snacks,
            "Vegetable Cutlets",
            "Mixed vegetable patties with spices, crispy fried",
        ),
        dish(
            "10",
            "Masala Chai",
            Money::from_major(15),
            40,
            Category::Drinks,
            "Masala Chai",
            "Spiced tea with milk",
        ),
        dish(
            "11",
            "Cold Coffee",
            Money::from_major(35),
            30,
            Category::Drinks,
            "Cold Coffee",
            "Chilled coffee with milk and sugar",
        ),
        dish(
            "12",
            "Soft Drinks",
            Money::from_major(25),
            50,
            Category::Drinks,
            "Soft Drinks",
            "Various branded soft drinks",
        ),
    ]
}

/// An order to replay into a fresh order book.
#[derive(Debug, Clone)]
pub struct SeedOrder {
    pub customer_id: CustomerId,
    pub vendor_id: VendorId,
    pub items: Vec<OrderItem>,
    /// Status the order should be advanced to after placing it.
    pub status: OrderStatus,
    /// How long before "now" the order was placed.
    pub placed_ago: Duration,
}

/// Orders already in the system when the storefront starts.
pub fn seed_orders() -> Vec<SeedOrder> {
    vec![
        SeedOrder {
            customer_id: campus_customer(),
            vendor_id: campus_canteen(),
            items: vec![
                OrderItem::new("1", "Idli Sambar", Money::from_major(45), 2),
                OrderItem::new("10", "Masala Chai", Money::from_major(15), 1),
            ],
            status: OrderStatus::Ready,
            placed_ago: Duration::hours(1),
        },
        SeedOrder {
            customer_id: campus_customer(),
            vendor_id: campus_canteen(),
            items: vec![
                OrderItem::new("4", "Thali", Money::from_major(75), 1),
                OrderItem::new("12", "Soft Drinks", Money::from_major(25), 1),
            ],
            status: OrderStatus::Preparing,
            placed_ago: Duration::minutes(15),
        },
    ]
}
