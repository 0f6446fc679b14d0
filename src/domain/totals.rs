use bigdecimal::{BigDecimal, RoundingMode};

/// Flat shipping fee charged on every order, in whole currency units.
pub const SHIPPING_FEE: i64 = 50;

/// VAT rate applied to the subtotal (20%).
fn vat_rate() -> BigDecimal {
    BigDecimal::from(2) / BigDecimal::from(10)
}

/// Monetary breakdown of an order. Built exclusively by [`compute_totals`],
/// so `grand_total == subtotal + vat + shipping` holds by construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Totals {
    pub subtotal: BigDecimal,
    pub vat: BigDecimal,
    pub shipping: BigDecimal,
    pub grand_total: BigDecimal,
}

/// Single source of truth for order arithmetic, used both for pre-submission
/// display and for the persisted order so the two can never diverge.
///
/// VAT is 20% of the subtotal rounded half-up to the nearest whole currency
/// unit; shipping is a flat [`SHIPPING_FEE`].
pub fn compute_totals(subtotal: BigDecimal) -> Totals {
    let vat = (&subtotal * vat_rate()).with_scale_round(0, RoundingMode::HalfUp);
    let shipping = BigDecimal::from(SHIPPING_FEE);
    let grand_total = &subtotal + &vat + &shipping;

    Totals {
        subtotal,
        vat,
        shipping,
        grand_total,
    }
}
