//! Wire representation of an order as the order API expects it.
//!
//! The JSON shape is a contract: `total` carries the subtotal, amounts are
//! plain JSON numbers, timestamps are RFC 3339 strings and the field names
//! are camelCase where the contract says so.

use bigdecimal::{BigDecimal, ToPrimitive};
use serde::Serialize;

use crate::domain::errors::PersistenceError;
use crate::domain::order::{Order, OrderItem, PaymentInfo, ShippingInfo};

#[derive(Debug, Serialize)]
pub struct OrderPayload {
    pub id: String,
    pub items: Vec<OrderItemPayload>,
    pub shipping: ShippingPayload,
    pub payment: PaymentPayload,
    pub total: f64,
    pub vat: f64,
    #[serde(rename = "grandTotal")]
    pub grand_total: f64,
    #[serde(rename = "createdAt")]
    pub created_at: String,
}

#[derive(Debug, Serialize)]
pub struct OrderItemPayload {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub quantity: i32,
    pub image: String,
}

#[derive(Debug, Serialize)]
pub struct ShippingPayload {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    #[serde(rename = "zipCode")]
    pub zip_code: String,
    pub city: String,
    pub country: String,
}

#[derive(Debug, Serialize)]
#[serde(tag = "method", rename_all = "lowercase")]
pub enum PaymentPayload {
    Cash,
    Emoney {
        #[serde(rename = "emoneyNumber")]
        number: String,
        #[serde(rename = "emoneyPin")]
        pin: String,
    },
}

impl OrderPayload {
    pub fn from_order(order: &Order) -> Result<Self, PersistenceError> {
        let items = order
            .items()
            .iter()
            .map(OrderItemPayload::from_item)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            id: order.id().to_string(),
            items,
            shipping: ShippingPayload::from_shipping(order.shipping()),
            payment: PaymentPayload::from_payment(order.payment()),
            total: json_number(&order.totals().subtotal)?,
            vat: json_number(&order.totals().vat)?,
            grand_total: json_number(&order.totals().grand_total)?,
            created_at: order.created_at().to_rfc3339(),
        })
    }
}

impl OrderItemPayload {
    fn from_item(item: &OrderItem) -> Result<Self, PersistenceError> {
        Ok(Self {
            id: item.id,
            name: item.name.clone(),
            price: json_number(&item.price)?,
            quantity: item.quantity,
            image: item.image.clone(),
        })
    }
}

impl ShippingPayload {
    fn from_shipping(shipping: &ShippingInfo) -> Self {
        Self {
            name: shipping.name.clone(),
            email: shipping.email.clone(),
            phone: shipping.phone.clone(),
            address: shipping.address.clone(),
            zip_code: shipping.zip_code.clone(),
            city: shipping.city.clone(),
            country: shipping.country.clone(),
        }
    }
}

impl PaymentPayload {
    fn from_payment(payment: &PaymentInfo) -> Self {
        match payment {
            PaymentInfo::Cash => Self::Cash,
            PaymentInfo::Emoney { number, pin } => Self::Emoney {
                number: number.clone(),
                pin: pin.clone(),
            },
        }
    }
}

fn json_number(amount: &BigDecimal) -> Result<f64, PersistenceError> {
    amount
        .to_f64()
        .ok_or_else(|| PersistenceError(format!("amount {amount} is not representable on the wire")))
}

#[cfg(test)]
mod tests {
    use bigdecimal::BigDecimal;
    use serde_json::json;

    use super::*;
    use crate::domain::order::{OrderData, PaymentInfo, ShippingInfo};
    use crate::domain::totals::compute_totals;

    fn order(payment: PaymentInfo) -> Order {
        Order::new(OrderData {
            items: vec![OrderItem {
                id: 1,
                name: "Speaker".to_string(),
                price: BigDecimal::from(100),
                quantity: 2,
                image: "x.jpg".to_string(),
            }],
            shipping: ShippingInfo {
                name: "Alexei Ward".to_string(),
                email: "alexei@mail.com".to_string(),
                phone: "+1 202-555-0136".to_string(),
                address: "1137 Williams Avenue".to_string(),
                zip_code: "10001".to_string(),
                city: "New York".to_string(),
                country: "United States".to_string(),
            },
            payment,
            totals: compute_totals(BigDecimal::from(200)),
        })
    }

    #[test]
    fn payload_carries_the_contract_field_names_and_amounts() {
        let order = order(PaymentInfo::Cash);
        let payload = OrderPayload::from_order(&order).expect("mapping failed");
        let value = serde_json::to_value(&payload).expect("serialization failed");

        assert_eq!(value["id"], json!(order.id()));
        assert_eq!(value["total"], json!(200.0));
        assert_eq!(value["vat"], json!(40.0));
        assert_eq!(value["grandTotal"], json!(290.0));
        assert_eq!(value["items"][0]["price"], json!(100.0));
        assert_eq!(value["items"][0]["quantity"], json!(2));
        assert_eq!(value["items"][0]["image"], json!("x.jpg"));
        assert_eq!(value["shipping"]["zipCode"], json!("10001"));
        assert_eq!(value["payment"]["method"], json!("cash"));

        let created_at = value["createdAt"].as_str().expect("createdAt missing");
        assert!(created_at.contains('T'), "not a timestamp: {created_at}");
    }

    #[test]
    fn cash_payment_serializes_with_no_extra_fields() {
        let order = order(PaymentInfo::Cash);
        let payload = OrderPayload::from_order(&order).expect("mapping failed");
        let value = serde_json::to_value(&payload).expect("serialization failed");

        assert_eq!(value["payment"], json!({ "method": "cash" }));
    }

    #[test]
    fn emoney_payment_serializes_number_and_pin() {
        let order = order(PaymentInfo::Emoney {
            number: "123456789".to_string(),
            pin: "1234".to_string(),
        });
        let payload = OrderPayload::from_order(&order).expect("mapping failed");
        let value = serde_json::to_value(&payload).expect("serialization failed");

        assert_eq!(
            value["payment"],
            json!({
                "method": "emoney",
                "emoneyNumber": "123456789",
                "emoneyPin": "1234"
            })
        );
    }
}
