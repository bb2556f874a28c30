//! # ActorEntity Trait
//!
//! The `ActorEntity` trait defines the contract a record type must implement to be kept by the
//! generic [`ResourceActor`](crate::framework::ResourceActor). It names the identifier, the
//! creation payload and the error type, and provides the hooks the actor calls while creating
//! a record.
//!
//! # Architecture Note
//! The actor owns id assignment, ordering and exclusive access. The entity owns the business
//! rules: what a valid payload looks like and how a payload plus an id becomes a record.
//! Keeping those apart means the message loop is written once and never touches domain fields.
//!
//! # Provided Methods (Hooks)
//! - [`ActorEntity::validate`]
//! - [`ActorEntity::on_create`]
//!
//! Both default to `Ok(())`. Override them only when the entity has rules to enforce.

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any record type must implement to be managed by `ResourceActor`.
///
/// Records are immutable once stored; there is no update or delete hook.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// The unique identifier for this entity.
    ///
    /// The actor generates ids from a `u64` sequence, so the id must round-trip through `u64`.
    type Id: Copy + Eq + Hash + Send + Sync + Display + Debug + From<u64> + Into<u64>;

    /// The data required to create a new instance (DTO - Data Transfer Object).
    type Create: Send + Sync + Debug;

    /// The error type for this entity.
    ///
    /// # Design Note: Error Granularity
    ///
    /// One error enum per entity, not one per message. Clients then match a single type,
    /// e.g. `OrderError`, for every operation on the resource.
    type Error: std::error::Error + Send + Sync + 'static;

    /// The identifier of this record.
    fn id(&self) -> Self::Id;

    /// Check a creation payload before any id is reserved.
    ///
    /// A rejected payload never consumes id space and never touches the store.
    fn validate(_params: &Self::Create) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Construct the full entity from the assigned id and the payload.
    /// This is called synchronously before `on_create`.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// Called after construction and before the record becomes visible to readers.
    async fn on_create(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}
