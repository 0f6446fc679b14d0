use std::sync::LazyLock;

use bigdecimal::{BigDecimal, Zero};
use chrono::{DateTime, Utc};
use rand::Rng;
use regex::Regex;

use super::errors::ValidationError;
use super::totals::Totals;

/// Basic `local@domain.tld` shape: no whitespace, a single `@`, a dotted
/// domain part.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Invalid email regex pattern")
});

const ID_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// One purchased line. Immutable once attached to an [`Order`].
#[derive(Debug, Clone, PartialEq)]
pub struct OrderItem {
    pub id: i64,
    pub name: String,
    pub price: BigDecimal,
    pub quantity: i32,
    pub image: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShippingInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub zip_code: String,
    pub city: String,
    pub country: String,
}

/// Payment details chosen at checkout. `Emoney` carries the prepaid card
/// number and pin exactly as entered; both are validated but never
/// transformed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaymentInfo {
    Cash,
    Emoney { number: String, pin: String },
}

/// Raw checkout input assembled by the caller: the cart lines, both checkout
/// forms and the totals obtained from [`compute_totals`].
///
/// [`compute_totals`]: super::totals::compute_totals
#[derive(Debug, Clone)]
pub struct OrderData {
    pub items: Vec<OrderItem>,
    pub shipping: ShippingInfo,
    pub payment: PaymentInfo,
    pub totals: Totals,
}

/// Immutable record of one checkout attempt.
///
/// Construction always succeeds; validity is a queryable predicate rather
/// than a constructor error, so callers must check [`Order::validate`] (or
/// [`Order::is_valid`]) before trusting the entity. The identifier and
/// creation timestamp are assigned exactly once, at construction.
#[derive(Debug, Clone)]
pub struct Order {
    id: String,
    items: Vec<OrderItem>,
    shipping: ShippingInfo,
    payment: PaymentInfo,
    totals: Totals,
    created_at: DateTime<Utc>,
}

impl Order {
    pub fn new(data: OrderData) -> Self {
        Self {
            id: generate_order_id(),
            items: data.items,
            shipping: data.shipping,
            payment: data.payment,
            totals: data.totals,
            created_at: Utc::now(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn items(&self) -> &[OrderItem] {
        &self.items
    }

    pub fn shipping(&self) -> &ShippingInfo {
        &self.shipping
    }

    pub fn payment(&self) -> &PaymentInfo {
        &self.payment
    }

    pub fn totals(&self) -> &Totals {
        &self.totals
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Run every domain rule against the order, reporting the first check
    /// that fails.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.has_valid_items() {
            return Err(ValidationError::InvalidItems);
        }
        if !self.has_valid_shipping() {
            return Err(ValidationError::InvalidShipping);
        }
        if !self.has_valid_payment() {
            return Err(ValidationError::InvalidPayment);
        }
        if !self.has_valid_totals() {
            return Err(ValidationError::InvalidTotals);
        }
        Ok(())
    }

    /// True iff all four validation checks pass.
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    fn has_valid_items(&self) -> bool {
        !self.items.is_empty()
            && self.items.iter().all(|item| {
                item.id > 0
                    && !item.name.trim().is_empty()
                    && item.price > BigDecimal::zero()
                    && item.quantity > 0
                    && !item.image.trim().is_empty()
            })
    }

    fn has_valid_shipping(&self) -> bool {
        let s = &self.shipping;
        !s.name.trim().is_empty()
            && EMAIL_PATTERN.is_match(&s.email)
            && !s.phone.trim().is_empty()
            && !s.address.trim().is_empty()
            && !s.zip_code.trim().is_empty()
            && !s.city.trim().is_empty()
            && !s.country.trim().is_empty()
    }

    fn has_valid_payment(&self) -> bool {
        match &self.payment {
            PaymentInfo::Cash => true,
            PaymentInfo::Emoney { number, pin } => is_digits(number, 9) && is_digits(pin, 4),
        }
    }

    fn has_valid_totals(&self) -> bool {
        let t = &self.totals;
        t.subtotal > BigDecimal::zero()
            && t.vat >= BigDecimal::zero()
            && t.grand_total > BigDecimal::zero()
            && t.grand_total >= t.subtotal
    }
}

fn is_digits(value: &str, expected_len: usize) -> bool {
    value.len() == expected_len && value.chars().all(|c| c.is_ascii_digit())
}

/// `ORDER-<base36 millisecond timestamp>-<6 random base36 chars>`, upper-cased.
///
/// Unique with overwhelming probability within a session's timescale;
/// collisions are treated as practically impossible rather than handled.
fn generate_order_id() -> String {
    let millis = Utc::now().timestamp_millis().max(0) as u64;
    let mut rng = rand::rng();
    let suffix: String = (0..6)
        .map(|_| ID_ALPHABET[rng.random_range(0..ID_ALPHABET.len())] as char)
        .collect();

    format!("ORDER-{}-{}", base36(millis), suffix).to_uppercase()
}

fn base36(mut value: u64) -> String {
    if value == 0 {
        return "0".to_string();
    }
    let mut digits = Vec::new();
    while value > 0 {
        digits.push(ID_ALPHABET[(value % 36) as usize] as char);
        value /= 36;
    }
    digits.iter().rev().collect()
}
