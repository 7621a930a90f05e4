use common::Money;
use serde::{Deserialize, Serialize};

/// Totals shown at checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartSummary {
    /// Number of units across all lines.
    pub item_count: u32,

    /// Σ price × quantity.
    pub subtotal: Money,

    /// Tax on the subtotal.
    pub tax: Money,

    /// Subtotal plus tax.
    pub total: Money,
}

impl CartSummary {
    /// Computes the summary for a subtotal, with the tax rate in basis points.
    pub fn new(item_count: u32, subtotal: Money, tax_rate_bps: u32) -> Self {
        let tax = subtotal.apply_rate(tax_rate_bps);
        Self {
            item_count,
            subtotal,
            tax,
            total: subtotal + tax,
        }
    }
}
