//! Order store: the entity implementation, its errors and the store factory.
//!
//! The store is volatile. Orders live only as long as the actor task; nothing is persisted
//! and a restart begins again from the configured seed.

pub mod entity;
pub mod error;

pub use error::*;

use crate::framework::{FrameworkError, ResourceActor, ResourceClient};
use crate::lifecycle::StoreConfig;
use crate::model::Order;
use chrono::Utc;

/// Creates a new Order store actor and its generic client.
///
/// The seed orders from `config` are loaded in their given order and stamped with the
/// current time.
///
/// # Errors
///
/// [`FrameworkError::DuplicateId`] if the seed repeats an id, and
/// [`FrameworkError::IdSpaceExhausted`] if a seed id is `u64::MAX`.
pub fn new(config: &StoreConfig) -> Result<(ResourceActor<Order>, ResourceClient<Order>), FrameworkError> {
    let now = Utc::now();
    let seed = config
        .seed
        .iter()
        .map(|s| s.to_order(now))
        .collect();
    ResourceActor::with_seed(config.channel_capacity, seed)
}
