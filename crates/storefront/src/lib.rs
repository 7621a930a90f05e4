//! Campus storefront: the catalog, customer carts, the order book and the
//! vendor and customer read models wired into one owned object.
//!
//! Structured logging goes through `tracing` and counters through the
//! `metrics` facade; the binary decides where either ends up.

pub mod app;
pub mod config;
pub mod error;
pub mod session;

pub use app::Storefront;
pub use config::Config;
pub use error::{Result, StorefrontError};
pub use session::CustomerSession;
