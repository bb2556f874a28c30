//! The order record and its creation payload.
//!
//! [`Order`] implements the [`ActorEntity`](crate::framework::ActorEntity) trait (see
//! [`crate::order_actor::entity`]), allowing it to be kept by a
//! [`ResourceActor`](crate::framework::ResourceActor).

use crate::order_actor::OrderError;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Orders.
///
/// Serialized as a bare integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub u64);

impl From<u64> for OrderId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl From<OrderId> for u64 {
    fn from(id: OrderId) -> Self {
        id.0
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A stored order. Never mutated once the store has accepted it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    pub customer_name: String,
    pub total_amount: Decimal,
    pub created_at: DateTime<Utc>,
}

impl Order {
    /// Creates a new Order instance.
    ///
    /// # Notes
    /// Only the store and seed loading should call this; everyone else goes through
    /// [`OrderCreate`] so that `id` and `created_at` stay server-assigned.
    pub fn new(
        id: OrderId,
        customer_name: impl Into<String>,
        total_amount: Decimal,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            customer_name: customer_name.into(),
            total_amount,
            created_at,
        }
    }
}

/// Payload for creating a new order.
///
/// Carries no id or timestamp; the store assigns both.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderCreate {
    pub customer_name: String,
    pub total_amount: Decimal,
}

impl OrderCreate {
    pub fn new(customer_name: impl Into<String>, total_amount: Decimal) -> Self {
        Self {
            customer_name: customer_name.into(),
            total_amount,
        }
    }

    /// Check the payload against the order rules.
    ///
    /// - `customer_name` must contain something other than whitespace.
    /// - `total_amount` must not be negative. Zero is allowed.
    pub fn validate(&self) -> Result<(), OrderError> {
        if self.customer_name.trim().is_empty() {
            return Err(OrderError::validation("customerName", "must not be empty"));
        }
        if self.total_amount < Decimal::ZERO {
            return Err(OrderError::validation("totalAmount", "must not be negative"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_validate_boundaries() {
        assert!(OrderCreate::new("Alice", dec("0.00")).validate().is_ok());
        assert!(OrderCreate::new("Alice", dec("-0.00")).validate().is_ok());
        assert!(OrderCreate::new("Alice", dec("10.00")).validate().is_ok());

        let err = OrderCreate::new("", dec("10.00")).validate().unwrap_err();
        assert_eq!(err.field(), Some("customerName"));

        let err = OrderCreate::new("   ", dec("10.00")).validate().unwrap_err();
        assert_eq!(err.field(), Some("customerName"));

        let err = OrderCreate::new("Alice", dec("-1.00")).validate().unwrap_err();
        assert_eq!(err.field(), Some("totalAmount"));
    }

    #[test]
    fn test_order_wire_shape() {
        let created_at = DateTime::parse_from_rfc3339("2024-05-01T12:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        let order = Order::new(OrderId(2), "Bob", dec("42.50"), created_at);

        let json = serde_json::to_value(&order).unwrap();
        assert_eq!(json["id"], 2);
        assert_eq!(json["customerName"], "Bob");
        assert_eq!(json["totalAmount"], "42.50");
        assert_eq!(json["createdAt"], "2024-05-01T12:00:00Z");
    }
}
