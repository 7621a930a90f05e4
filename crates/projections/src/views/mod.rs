//! Read model views fed from the order journal.

pub mod customer_orders;
pub mod daily_sales;
pub mod notifications;
pub mod vendor_dashboard;

pub use customer_orders::{CustomerOrdersSummary, CustomerOrdersView, OrderSummary};
pub use daily_sales::{DailySales, DailySalesView};
pub use notifications::{Notification, NotificationStatus, NotificationsView};
pub use vendor_dashboard::{VendorDashboardView, VendorStats};
