use super::money::{Cents, Currency};
use super::payment::PaymentOutcome;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single line of an order request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub sku: String,
    /// Signed so that zero and negative quantities reach validation.
    pub qty: i64,
    /// Price of one unit in major currency units.
    pub unit_price: Decimal,
}

impl OrderItem {
    pub fn new(sku: impl Into<String>, qty: i64, unit_price: Decimal) -> Self {
        Self {
            sku: sku.into(),
            qty,
            unit_price,
        }
    }
}

/// Raw input to the pipeline, exactly as received from the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateOrderRequest {
    pub user_email: String,
    pub items: Vec<OrderItem>,
    #[serde(default)]
    pub coupon_code: Option<String>,
    pub currency: Currency,
}

/// An order accepted and paid for.
///
/// Built once after a successful charge and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// `ord_` followed by a random alphanumeric token.
    pub id: String,
    /// Trimmed and lower-cased.
    pub user_email: String,
    pub items: Vec<OrderItem>,
    /// Trimmed and upper-cased, `None` when absent or blank.
    pub coupon_code: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Amounts computed by the pricing engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceBreakdown {
    pub subtotal: Cents,
    pub discount: Cents,
    pub shipping: Cents,
    pub tax: Cents,
    pub total: Cents,
}

/// Successful result of `OrderPipeline::create_order`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatedOrder {
    pub order: Order,
    pub total_cents: Cents,
    pub payment: PaymentOutcome,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_request_deserialization_defaults_coupon() {
        let json = r#"{
            "user_email": "a@b.com",
            "items": [{"sku": "A", "qty": 2, "unit_price": "10.00"}],
            "currency": "USD"
        }"#;
        let request: CreateOrderRequest = serde_json::from_str(json).unwrap();

        assert_eq!(request.coupon_code, None);
        assert_eq!(request.currency, Currency::Usd);
        assert_eq!(request.items[0], OrderItem::new("A", 2, dec!(10.00)));
    }

    #[test]
    fn test_order_serializes_iso_timestamp() {
        let order = Order {
            id: "ord_abc".to_string(),
            user_email: "a@b.com".to_string(),
            items: vec![],
            coupon_code: None,
            created_at: DateTime::parse_from_rfc3339("2025-01-02T03:04:05Z")
                .unwrap()
                .with_timezone(&Utc),
        };
        let json = serde_json::to_value(&order).unwrap();
        assert_eq!(json["created_at"], "2025-01-02T03:04:05Z");
        assert_eq!(json["coupon_code"], serde_json::Value::Null);
    }
}
