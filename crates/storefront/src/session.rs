//! A signed-in customer's session.

use common::CustomerId;
use domain::CartStore;

use crate::Result;

/// One customer's browsing session and the cart that goes with it.
#[derive(Debug, Clone)]
pub struct CustomerSession {
    customer_id: CustomerId,
    cart: CartStore,
}

impl CustomerSession {
    /// Starts a session with an empty cart.
    pub fn new(customer_id: CustomerId) -> Self {
        Self {
            customer_id,
            cart: CartStore::new(),
        }
    }

    /// Starts a session with a cart stashed by [`CustomerSession::stash_cart`],
    /// e.g. one filled before signing in.
    pub fn resume(customer_id: CustomerId, stashed_cart: &str) -> Result<Self> {
        let cart = CartStore::from_json(stashed_cart)?;
        tracing::debug!(%customer_id, lines = cart.line_count(), "cart restored");
        Ok(Self { customer_id, cart })
    }

    pub fn customer_id(&self) -> &CustomerId {
        &self.customer_id
    }

    pub fn cart(&self) -> &CartStore {
        &self.cart
    }

    pub fn cart_mut(&mut self) -> &mut CartStore {
        &mut self.cart
    }

    /// Serializes the cart so it can be carried into another session.
    pub fn stash_cart(&self) -> Result<String> {
        Ok(self.cart.to_json()?)
    }
}
