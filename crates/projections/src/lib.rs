//! Read models built from the order journal.
//!
//! This crate provides the query side of the storefront:
//! - [`Projection`] trait for folding journal entries into read models
//! - [`ReadModel`] trait for query access to denormalized data
//! - [`ProjectionProcessor`] for feeding journal entries to projections
//! - Four views: vendor dashboard, customer orders, notifications, daily sales

pub mod error;
mod lock;
pub mod processor;
pub mod projection;
pub mod read_model;
pub mod views;

pub use error::{ProjectionError, Result};
pub use processor::ProjectionProcessor;
pub use projection::{Projection, ProjectionPosition};
pub use read_model::ReadModel;
pub use views::{
    CustomerOrdersSummary, CustomerOrdersView, DailySales, DailySalesView, Notification,
    NotificationStatus, NotificationsView, OrderSummary, VendorDashboardView, VendorStats,
};
