//! Shared types for the campus storefront.
//!
//! Identifiers and the [`Money`] amount are used by the domain, the read
//! models and the storefront binary alike, so they live here.

pub mod money;
pub mod types;

pub use money::Money;
pub use types::{CustomerId, MAX_LINE_QUANTITY, MenuItemId, OrderId, VendorId, Version};
