//! ActorEntity implementation for the Order domain type.
//!
//! This is where the store's order rules meet the generic actor: payload validation runs
//! before an id is reserved, and `created_at` is stamped while the actor holds exclusive
//! access, so the timestamp order matches the id order.

use crate::framework::ActorEntity;
use crate::model::{Order, OrderCreate, OrderId};
use crate::order_actor::OrderError;
use async_trait::async_trait;
use chrono::Utc;

#[async_trait]
impl ActorEntity for Order {
    type Id = OrderId;
    type Create = OrderCreate;
    type Error = OrderError;

    fn id(&self) -> OrderId {
        self.id
    }

    fn validate(params: &OrderCreate) -> Result<(), OrderError> {
        params.validate()
    }

    fn from_create_params(id: OrderId, params: OrderCreate) -> Result<Self, OrderError> {
        Ok(Order::new(
            id,
            params.customer_name,
            params.total_amount,
            Utc::now(),
        ))
    }
}
