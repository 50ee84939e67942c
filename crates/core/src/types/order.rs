//! Basket, checkout, and order resources.
//!
//! A checkout is a basket snapshot captured at payment time; an order is the
//! paid resource. Cost fields stay opaque decimal strings end to end.

use serde::{Deserialize, Serialize};

use super::item::{DeliveryDetails, Item};

/// The user's current basket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Basket {
    #[serde(default)]
    pub items: Vec<Item>,
    #[serde(default)]
    pub delivery_details: Option<DeliveryDetails>,
}

/// A basket snapshot captured at payment time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Checkout {
    #[serde(default)]
    pub reference: String,
    #[serde(default)]
    pub items: Vec<Item>,
    #[serde(default)]
    pub delivery_details: Option<DeliveryDetails>,
    #[serde(default)]
    pub total_order_cost: String,
    #[serde(default)]
    pub payment_reference: Option<String>,
    #[serde(default)]
    pub paid_at: Option<String>,
}

/// A paid order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(default)]
    pub reference: String,
    #[serde(default)]
    pub items: Vec<Item>,
    #[serde(default)]
    pub delivery_details: Option<DeliveryDetails>,
    #[serde(default)]
    pub total_order_cost: String,
    #[serde(default)]
    pub payment_reference: Option<String>,
    #[serde(default)]
    pub ordered_at: Option<String>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_checkout_deserializes_with_missing_optionals() {
        let checkout: Checkout = serde_json::from_str(
            r#"{"reference": "ORD-123456-789012", "totalOrderCost": "45"}"#,
        )
        .unwrap();
        assert_eq!(checkout.reference, "ORD-123456-789012");
        assert!(checkout.items.is_empty());
        assert!(checkout.delivery_details.is_none());
    }

    #[test]
    fn test_order_serializes_camel_case() {
        let order = Order {
            reference: "ORD-123456-789012".to_string(),
            total_order_cost: "15".to_string(),
            ..Default::default()
        };
        let json = serde_json::to_value(&order).unwrap();
        assert_eq!(json["totalOrderCost"], "15");
        assert_eq!(json["reference"], "ORD-123456-789012");
    }
}
