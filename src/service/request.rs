//! Inbound request shapes.

use crate::model::OrderCreate;
use crate::order_actor::OrderError;
use rust_decimal::Decimal;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer};

const CUSTOMER_NAME: &str = "customerName";
const TOTAL_AMOUNT: &str = "totalAmount";

/// Accepts any JSON string. Blank names are left for the store to reject.
fn deserialize_customer_name<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    String::deserialize(deserializer)
        .map_err(|_| D::Error::custom(format!("`{CUSTOMER_NAME}` must be a string")))
}

/// Accepts a JSON number or a numeric string (`"42.50"`), both parsed exactly.
fn deserialize_amount<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    <Decimal as Deserialize>::deserialize(deserializer).map_err(|_| {
        D::Error::custom(format!("`{TOTAL_AMOUNT}` must be a number that fits a decimal"))
    })
}

/// A create-order request as it arrives from the transport.
///
/// Only `customerName` and `totalAmount` are read. Anything else in the payload, including
/// a caller-supplied `id` or `createdAt`, is dropped here and never reaches the store.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    #[serde(deserialize_with = "deserialize_customer_name")]
    pub customer_name: String,
    #[serde(deserialize_with = "deserialize_amount")]
    pub total_amount: Decimal,
}

impl CreateOrderRequest {
    pub fn new(customer_name: impl Into<String>, total_amount: Decimal) -> Self {
        Self {
            customer_name: customer_name.into(),
            total_amount,
        }
    }

    /// Parse a JSON request body.
    ///
    /// `totalAmount` keeps its digits and scale exactly, whether it arrives as a number or a
    /// string. Numbers too large for a `Decimal` are rejected rather than rounded.
    ///
    /// # Errors
    ///
    /// [`OrderError::Validation`] naming the offending field, or `body` when the payload is
    /// not a JSON object. Range checks (empty name, negative amount) are left to the store.
    pub fn from_json(body: &[u8]) -> Result<Self, OrderError> {
        serde_json::from_slice(body).map_err(rejection)
    }

    pub fn into_create(self) -> OrderCreate {
        OrderCreate::new(self.customer_name, self.total_amount)
    }
}

fn rejection(e: serde_json::Error) -> OrderError {
    if !e.is_data() {
        return OrderError::validation("body", format!("is not valid JSON: {e}"));
    }
    let message = e.to_string();
    let field = [CUSTOMER_NAME, TOTAL_AMOUNT]
        .into_iter()
        .find(|field| message.contains(&format!("`{field}`")))
        .unwrap_or("body");
    OrderError::validation(field, format!("is invalid: {message}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_extra_fields_are_ignored() {
        let body = br#"{
            "id": 99,
            "createdAt": "1999-01-01T00:00:00Z",
            "customerName": "Bob",
            "totalAmount": 42.5,
            "coupon": "FREE"
        }"#;
        let request = CreateOrderRequest::from_json(body).unwrap();
        assert_eq!(request, CreateOrderRequest::new("Bob", Decimal::new(425, 1)));
    }

    #[test]
    fn test_string_amount_keeps_scale() {
        let body = br#"{"customerName": "Bob", "totalAmount": "42.50"}"#;
        let request = CreateOrderRequest::from_json(body).unwrap();
        assert_eq!(request.total_amount.to_string(), "42.50");
    }

    #[test]
    fn test_number_amount_is_exact() {
        let body = br#"{"customerName": "Bob", "totalAmount": 42.50}"#;
        let request = CreateOrderRequest::from_json(body).unwrap();
        assert_eq!(request.total_amount.to_string(), "42.50");

        // more significant digits than an f64 can hold
        let body = br#"{"customerName": "A", "totalAmount": 12345678901234567890123}"#;
        let request = CreateOrderRequest::from_json(body).unwrap();
        assert_eq!(
            request.total_amount,
            Decimal::from_str("12345678901234567890123").unwrap()
        );

        let body = br#"{"customerName": "A", "totalAmount": 0.1234567890123456789}"#;
        let request = CreateOrderRequest::from_json(body).unwrap();
        assert_eq!(request.total_amount.to_string(), "0.1234567890123456789");
    }

    #[test]
    fn test_rejects_amount_outside_decimal_range() {
        let body =
            br#"{"customerName": "A", "totalAmount": 100000000000000000000000000000000000000000}"#;
        let err = CreateOrderRequest::from_json(body).unwrap_err();
        assert_eq!(err.field(), Some("totalAmount"));
    }

    #[test]
    fn test_rejects_non_numeric_amount() {
        let body = br#"{"customerName": "Bob", "totalAmount": "lots"}"#;
        let err = CreateOrderRequest::from_json(body).unwrap_err();
        assert_eq!(err.field(), Some("totalAmount"));

        let body = br#"{"customerName": "Bob", "totalAmount": true}"#;
        let err = CreateOrderRequest::from_json(body).unwrap_err();
        assert_eq!(err.field(), Some("totalAmount"));
    }

    #[test]
    fn test_rejects_non_string_name() {
        let body = br#"{"customerName": 7, "totalAmount": 1}"#;
        let err = CreateOrderRequest::from_json(body).unwrap_err();
        assert_eq!(err.field(), Some("customerName"));
    }

    #[test]
    fn test_rejects_missing_fields() {
        let err = CreateOrderRequest::from_json(br#"{"totalAmount": 1}"#).unwrap_err();
        assert_eq!(err.field(), Some("customerName"));

        let err = CreateOrderRequest::from_json(br#"{"customerName": "Bob"}"#).unwrap_err();
        assert_eq!(err.field(), Some("totalAmount"));

        let err = CreateOrderRequest::from_json(b"42").unwrap_err();
        assert_eq!(err.field(), Some("body"));

        let err = CreateOrderRequest::from_json(b"{not json").unwrap_err();
        assert_eq!(err.field(), Some("body"));
    }

    #[test]
    fn test_empty_name_passes_parsing() {
        // the store rejects it, not the parser
        let request = CreateOrderRequest::from_json(br#"{"customerName": "", "totalAmount": 10}"#)
            .unwrap();
        assert!(request.into_create().validate().is_err());
    }
}
