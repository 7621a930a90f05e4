//! Domain layer for the campus storefront.
//!
//! This crate provides:
//! - The menu [`Catalog`] and its fixture data
//! - The customer's [`CartStore`]
//! - The [`Order`] aggregate with its pending → preparing → ready lifecycle
//! - [`OrderService`], an in-memory order book with an append-only event journal
//! - [`checkout`], which turns a cart into one order per vendor

pub mod aggregate;
pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod command;
pub mod envelope;
pub mod error;
pub mod fixtures;
pub mod order;

pub use aggregate::{Aggregate, DomainEvent};
pub use cart::{CartError, CartItem, CartStore, CartSummary};
pub use catalog::{Catalog, CatalogError, Category, MenuItem};
pub use checkout::checkout;
pub use command::CommandResult;
pub use envelope::EventEnvelope;
pub use error::DomainError;
pub use order::{
    Order, OrderError, OrderEvent, OrderItem, OrderPlacedData, OrderService, OrderStatus,
    StatusAdvancedData, UnknownStatus, VendorQueue,
};

pub use common::{CustomerId, MAX_LINE_QUANTITY, MenuItemId, Money, OrderId, VendorId, Version};
