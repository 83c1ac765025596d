//! Order summary — the running amount/shipping/total projection.

use crate::shared::currency;
use rust_decimal::Decimal;

/// Fixed shipping fee: 5,00 €.
pub fn shipping_cost() -> Decimal {
    Decimal::new(500, 2)
}

/// Derived totals shown beside the form.
///
/// Purely a projection of the current amount field text; recomputed on every
/// change, never cached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderSummary {
    pub amount: Decimal,
    pub shipping: Decimal,
    pub total: Decimal,
}

impl OrderSummary {
    /// Recompute from the raw amount field text. Malformed text counts as
    /// zero.
    pub fn from_amount_text(raw: &str) -> Self {
        let amount = currency::parse_amount(raw);
        let shipping = shipping_cost();
        Self {
            amount,
            shipping,
            total: amount + shipping,
        }
    }

    pub fn amount_display(&self) -> String {
        currency::format_currency(&self.amount)
    }

    pub fn shipping_display(&self) -> String {
        currency::format_currency(&self.shipping)
    }

    pub fn total_display(&self) -> String {
        currency::format_currency(&self.total)
    }
}
