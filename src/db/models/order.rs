//! Order models and DTOs.
//!
//! Line items are embedded in the order row as a JSON TEXT column and
//! persisted verbatim as supplied by the caller; no recomputation of the
//! total and no stock adjustment happens on order creation.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Order {
    pub id: String,
    pub user_id: String,
    /// JSON array of OrderItem objects
    pub items: String,
    pub total: f64,
    pub status: String,
    pub created_at: String,
}

/// A single line item within an order
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderItem {
    /// Weak reference to a Product id; existence is not enforced
    pub product_id: String,
    pub quantity: i64,
    /// Price at order time, as supplied by the caller
    pub price: f64,
}

/// Response DTO for Order with the items column parsed back into objects
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderResponse {
    pub id: String,
    pub user_id: String,
    pub items: Vec<OrderItem>,
    pub total: f64,
    pub status: String,
    pub created_at: String,
}

impl From<Order> for OrderResponse {
    fn from(order: Order) -> Self {
        Self {
            items: parse_items(&order.items),
            id: order.id,
            user_id: order.user_id,
            total: order.total,
            status: order.status,
            created_at: order.created_at,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateOrderRequest {
    pub items: Vec<OrderItem>,
    pub total: f64,
}

/// Helper to parse the items JSON column from the database
pub fn parse_items(json: &str) -> Vec<OrderItem> {
    serde_json::from_str(json).unwrap_or_default()
}

/// Helper to serialize line items for the items column
pub fn serialize_items(items: &[OrderItem]) -> String {
    serde_json::to_string(items).unwrap_or_else(|_| "[]".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn items_round_trip_through_json_column() {
        let items = vec![
            OrderItem {
                product_id: "p1".to_string(),
                quantity: 2,
                price: 10.0,
            },
            OrderItem {
                product_id: "p2".to_string(),
                quantity: 1,
                price: 4.5,
            },
        ];

        let json = serialize_items(&items);
        assert_eq!(parse_items(&json), items);
    }

    #[test]
    fn malformed_items_column_parses_as_empty() {
        assert!(parse_items("not json").is_empty());
    }
}
