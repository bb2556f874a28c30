//! Outbound reply shapes handed to the transport.

use crate::model::OrderId;
use crate::order_actor::OrderError;
use serde::{Deserialize, Serialize};

/// Outcome class of a reply. The transport maps it onto its own status codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    Ok,
    Created,
    BadRequest,
    NotFound,
    ServiceUnavailable,
}

impl Status {
    /// HTTP status code equivalent.
    pub fn code(self) -> u16 {
        match self {
            Status::Ok => 200,
            Status::Created => 201,
            Status::BadRequest => 400,
            Status::NotFound => 404,
            Status::ServiceUnavailable => 503,
        }
    }
}

/// A reply ready to be serialized by the transport.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Reply<T> {
    pub status: Status,
    /// Resource locator of a newly created record.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub body: T,
}

impl<T> Reply<T> {
    pub fn ok(body: T) -> Self {
        Self {
            status: Status::Ok,
            location: None,
            body,
        }
    }

    pub fn created(body: T, location: String) -> Self {
        Self {
            status: Status::Created,
            location: Some(location),
            body,
        }
    }
}

impl<T: Serialize> Reply<T> {
    /// The body as JSON.
    pub fn body_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.body)
    }
}

/// Body of a failed request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FailureBody {
    /// The invalid field, when the failure is a validation error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    pub message: String,
}

impl Reply<FailureBody> {
    /// Transport-facing form of an order error.
    pub fn failure(err: &OrderError) -> Self {
        let (status, field, message) = match err {
            OrderError::Validation { field, reason } => {
                (Status::BadRequest, Some(field.to_string()), format!("{field} {reason}"))
            }
            OrderError::NotFound(_) => (Status::NotFound, None, err.to_string()),
            OrderError::Unavailable(_) => (Status::ServiceUnavailable, None, err.to_string()),
        };
        Self {
            status,
            location: None,
            body: FailureBody { field, message },
        }
    }
}

impl From<&OrderError> for Reply<FailureBody> {
    fn from(err: &OrderError) -> Self {
        Self::failure(err)
    }
}

/// Resource locator for an order.
pub fn order_location(id: OrderId) -> String {
    format!("/orders/{id}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_is_bad_request() {
        let err = OrderError::validation("totalAmount", "must not be negative");
        let reply = Reply::failure(&err);

        assert_eq!(reply.status, Status::BadRequest);
        assert_eq!(reply.status.code(), 400);
        assert_eq!(
            reply.body_json().unwrap(),
            r#"{"field":"totalAmount","message":"totalAmount must not be negative"}"#
        );
    }

    #[test]
    fn test_not_found_and_unavailable() {
        let reply = Reply::failure(&OrderError::NotFound(OrderId(9)));
        assert_eq!(reply.status.code(), 404);
        assert_eq!(reply.body.field, None);

        let reply = Reply::failure(&OrderError::Unavailable("Actor closed".into()));
        assert_eq!(reply.status.code(), 503);
    }

    #[test]
    fn test_location() {
        assert_eq!(order_location(OrderId(2)), "/orders/2");
    }
}
