//! Error types for the Order store.

use crate::model::OrderId;
use thiserror::Error;

/// Errors that can occur during order operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// The order data provided is invalid. Nothing was stored.
    #[error("Order validation error: {field} {reason}")]
    Validation { field: &'static str, reason: String },

    /// The requested order was not found.
    #[error("Order not found: {0}")]
    NotFound(OrderId),

    /// The store could not be reached (stopped or shutting down).
    #[error("Order store unavailable: {0}")]
    Unavailable(String),
}

impl OrderError {
    pub fn validation(field: &'static str, reason: impl Into<String>) -> Self {
        OrderError::Validation {
            field,
            reason: reason.into(),
        }
    }

    /// The offending field, for validation errors.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            OrderError::Validation { field, .. } => Some(*field),
            _ => None,
        }
    }
}
