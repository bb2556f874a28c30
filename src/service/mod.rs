//! # Order Service
//!
//! Boundary-facing handlers. Each call translates a request into one store operation and
//! shapes the result into a [`Reply`] for the transport. The service holds no order data of
//! its own between calls; everything is fetched from or appended to the store.
//!
//! Failures are returned as [`OrderError`]; `Reply::failure(&err)` turns one into the
//! transport-facing form (validation failures become `BadRequest`).

pub mod reply;
pub mod request;

pub use reply::*;
pub use request::*;

use crate::clients::OrderClient;
use crate::framework::ActorClient;
use crate::model::{Order, OrderId};
use crate::order_actor::OrderError;
use tracing::{debug, info, instrument};

/// Request handlers for the orders resource.
#[derive(Clone)]
pub struct OrderService {
    client: OrderClient,
}

impl OrderService {
    pub fn new(client: OrderClient) -> Self {
        Self { client }
    }

    /// All orders, oldest first.
    #[instrument(skip(self))]
    pub async fn list_orders(&self) -> Result<Reply<Vec<Order>>, OrderError> {
        let orders = self.client.list_orders().await?;
        debug!(count = orders.len(), "Listed orders");
        Ok(Reply::ok(orders))
    }

    /// Store a new order and reply `Created` with its locator.
    #[instrument(skip(self))]
    pub async fn create_order(&self, request: CreateOrderRequest) -> Result<Reply<Order>, OrderError> {
        let order = self.client.create_order(request.into_create()).await?;
        info!(id = %order.id, "Order created");
        let location = order_location(order.id);
        Ok(Reply::created(order, location))
    }

    /// Parse a JSON body, then [`create_order`](Self::create_order).
    pub async fn create_order_json(&self, body: &[u8]) -> Result<Reply<Order>, OrderError> {
        let request = CreateOrderRequest::from_json(body)?;
        self.create_order(request).await
    }

    /// A single order by id.
    #[instrument(skip(self))]
    pub async fn get_order(&self, id: OrderId) -> Result<Reply<Order>, OrderError> {
        self.client
            .get(id)
            .await?
            .map(Reply::ok)
            .ok_or(OrderError::NotFound(id))
    }
}
