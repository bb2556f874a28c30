//! Generic actor framework for append-only resource stores.
//!
//! This module provides the building blocks for keeping a collection of records behind a
//! single Tokio task, so that concurrent callers never race on ids or on the collection.
//!
//! # Main Components
//!
//! - [`ActorEntity`] - Trait that record types implement to be managed by an actor
//! - [`ResourceActor`] - Generic actor that owns the records and the id sequence
//! - [`ResourceClient`] - Cloneable handle for sending requests to an actor
//! - [`ActorClient`] - Trait that domain clients implement to inherit the read operations
//! - [`FrameworkError`] - Channel and entity failures
//!
//! # Testing
//!
//! See [`mock`] module for utilities to test clients without spawning full actors.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;

pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
