//! Pure pricing arithmetic for order composition. No I/O here.

use crate::model::OrderItemCreate;

/// Orders whose total exceeds this amount earn the discount.
pub const DISCOUNT_THRESHOLD: f64 = 500.0;

/// Discount rate applied above the threshold.
pub const DISCOUNT_RATE: f64 = 0.10;

/// The three amounts every order carries.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Totals {
    pub total: f64,
    pub discount: f64,
    pub final_total: f64,
}

/// Prices a set of requested items.
///
/// `total` is the sum of `quantity × price` over the items; the discount
/// applies only strictly above [`DISCOUNT_THRESHOLD`].
pub fn price(items: &[OrderItemCreate]) -> Totals {
    let total: f64 = items
        .iter()
        .map(|item| f64::from(item.quantity) * item.price)
        .sum();
    let discount = if total > DISCOUNT_THRESHOLD {
        total * DISCOUNT_RATE
    } else {
        0.0
    };
    Totals {
        total,
        discount,
        final_total: total - discount,
    }
}
