//! Money amounts in integer minor units.

use serde::{Deserialize, Serialize};

/// Money amount represented in minor units (paise, cents) to avoid floating point issues.
///
/// Serialized as the bare integer amount of minor units, so `12.50` is `1250`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Creates a new amount from minor units.
    pub fn from_minor(minor: i64) -> Self {
        Self(minor)
    }

    /// Creates a new amount from whole major units (`45` becomes `45.00`).
    pub fn from_major(major: i64) -> Self {
        Self(major * 100)
    }

    /// Returns zero money.
    pub fn zero() -> Self {
        Self(0)
    }

    /// Returns the amount in minor units.
    pub fn minor(&self) -> i64 {
        self.0
    }

    /// Returns the whole major-unit portion.
    pub fn major(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor-unit remainder after the major units.
    pub fn minor_part(&self) -> i64 {
        self.0.abs() % 100
    }

    /// Returns true if the amount is zero.
    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Returns true if the amount is negative.
    pub fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies by a quantity, saturating at the `i64` bounds.
    pub fn multiply(&self, quantity: u32) -> Money {
        Money(self.0.saturating_mul(i64::from(quantity)))
    }

    /// Applies a rate given in basis points (500 = 5%), rounding half away from zero.
    pub fn apply_rate(&self, basis_points: u32) -> Money {
        let scaled = self.0 * i64::from(basis_points);
        let rounded = if scaled < 0 {
            (scaled - 5_000) / 10_000
        } else {
            (scaled + 5_000) / 10_000
        };
        Money(rounded)
    }

    /// Formats the amount with a currency symbol in front, e.g. `₹12.50`.
    pub fn display_with(&self, symbol: &str) -> String {
        if self.0 < 0 {
            format!("-{symbol}{}.{:02}", self.major().abs(), self.minor_part())
        } else {
            format!("{symbol}{}.{:02}", self.major(), self.minor_part())
        }
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.display_with(""))
    }
}

impl std::ops::Add for Money {
    type Output = Money;

    fn add(self, rhs: Self) -> Self::Output {
        Money(self.0 + rhs.0)
    }
}

impl std::ops::Sub for Money {
    type Output = Money;

    fn sub(self, rhs: Self) -> Self::Output {
        Money(self.0 - rhs.0)
    }
}

impl std::ops::AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_from_minor() {
        let money = Money::from_minor(1250);
        assert_eq!(money.minor(), 1250);
        assert_eq!(money.major(), 12);
        assert_eq!(money.minor_part(), 50);
    }

    #[test]
    fn test_money_from_major() {
        let money = Money::from_major(45);
        assert_eq!(money.minor(), 4500);
        assert_eq!(money.minor_part(), 0);
    }

    #[test]
    fn test_money_display() {
        assert_eq!(Money::from_minor(1250).to_string(), "12.50");
        assert_eq!(Money::from_minor(5).to_string(), "0.05");
        assert_eq!(Money::from_minor(-1250).to_string(), "-12.50");
        assert_eq!(Money::from_major(100).display_with("₹"), "₹100.00");
        assert_eq!(Money::from_minor(-99).display_with("$"), "-$0.99");
    }

    #[test]
    fn test_money_arithmetic() {
        let a = Money::from_major(75);
        let b = Money::from_major(25);

        assert_eq!((a + b).minor(), 10_000);
        assert_eq!((a - b).minor(), 5_000);
        assert_eq!(a.multiply(3).minor(), 22_500);
        assert_eq!(Money::from_minor(i64::MAX).multiply(2).minor(), i64::MAX);

        let total: Money = [a, b, Money::from_minor(1250)].into_iter().sum();
        assert_eq!(total.minor(), 11_250);
    }

    #[test]
    fn test_apply_rate_rounds_half_up() {
        // 5% of 12.50 is 0.625
        assert_eq!(Money::from_minor(1250).apply_rate(500).minor(), 63);
        // 5% of 170.00 is 8.50
        assert_eq!(Money::from_major(170).apply_rate(500).minor(), 850);
        assert_eq!(Money::zero().apply_rate(500), Money::zero());
        assert_eq!(Money::from_minor(-1250).apply_rate(500).minor(), -63);
    }

    #[test]
    fn test_money_serializes_as_minor_units() {
        let json = serde_json::to_string(&Money::from_minor(1250)).unwrap();
        assert_eq!(json, "1250");
        let back: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Money::from_minor(1250));
    }
}
