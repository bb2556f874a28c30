//! # Order Client
//!
//! Provides a high-level API for interacting with the Order store.
//! It wraps a `ResourceClient<Order>` and turns framework errors back into `OrderError`.
use crate::framework::{ActorClient, FrameworkError, ResourceClient};
use crate::model::{Order, OrderCreate};
use crate::order_actor::OrderError;
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Order store.
///
/// Cheap to clone; every clone talks to the same store.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>) -> Self {
        Self { inner }
    }

    /// Store a new order. Validation happens inside the store, before an id is assigned.
    #[instrument(skip(self))]
    pub async fn create_order(&self, params: OrderCreate) -> Result<Order, OrderError> {
        debug!("Sending create_order to store");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Snapshot of all orders, oldest first.
    pub async fn list_orders(&self) -> Result<Vec<Order>, OrderError> {
        self.list().await
    }
}

#[async_trait]
impl ActorClient<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::EntityError(inner) => match inner.downcast::<OrderError>() {
                Ok(order_error) => *order_error,
                Err(other) => OrderError::Unavailable(other.to_string()),
            },
            other => OrderError::Unavailable(other.to_string()),
        }
    }
}
