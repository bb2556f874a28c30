//! Store configuration.
//!
//! There is no file or environment layer: the configuration is a plain value built in code,
//! with a default that matches the demo service (one seeded order).

use crate::model::{Order, OrderId};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

/// Default capacity of the store's request channel.
pub const DEFAULT_CHANNEL_CAPACITY: usize = 32;

/// An order loaded into the store at startup.
///
/// The timestamp is not part of the seed; it is taken when the store is built.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderSeed {
    pub id: OrderId,
    pub customer_name: String,
    pub total_amount: Decimal,
}

impl OrderSeed {
    pub fn new(id: u64, customer_name: impl Into<String>, total_amount: Decimal) -> Self {
        Self {
            id: OrderId(id),
            customer_name: customer_name.into(),
            total_amount,
        }
    }

    pub fn to_order(&self, created_at: DateTime<Utc>) -> Order {
        Order::new(
            self.id,
            self.customer_name.clone(),
            self.total_amount,
            created_at,
        )
    }
}

/// Settings for building the order store.
#[derive(Debug, Clone, PartialEq)]
pub struct StoreConfig {
    /// Requests that may queue before callers wait. Zero is treated as one.
    pub channel_capacity: usize,
    /// Orders present before the first create, in list order. Ids must be unique.
    pub seed: Vec<OrderSeed>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            channel_capacity: DEFAULT_CHANNEL_CAPACITY,
            seed: vec![OrderSeed::new(1, "Test User", Decimal::new(15000, 2))],
        }
    }
}

impl StoreConfig {
    /// A configuration with no seed orders.
    pub fn empty() -> Self {
        Self {
            channel_capacity: DEFAULT_CHANNEL_CAPACITY,
            seed: Vec::new(),
        }
    }

    pub fn with_channel_capacity(mut self, channel_capacity: usize) -> Self {
        self.channel_capacity = channel_capacity;
        self
    }

    pub fn with_seed(mut self, seed: Vec<OrderSeed>) -> Self {
        self.seed = seed;
        self
    }
}
