//! # System Lifecycle & Orchestration
//!
//! This module owns startup and shutdown of the orders service.
//!
//! **Key Responsibilities:**
//! 1. **Configuration** - [`StoreConfig`] describes the store's channel size and seed orders
//! 2. **Actor Creation** - build the store actor and its client
//! 3. **Wiring** - hand the client to the [`OrderService`](crate::service::OrderService)
//! 4. **Graceful Shutdown** - close the channel and wait for the actor to exit
//! 5. **Observability Setup** - [`setup_tracing`] for the binary
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop all clients** - closes the sender side of the channel
//! 2. **Actor detects closure** - `receiver.recv()` returns `None` once the queue is drained
//! 3. **Await completion** - wait for the actor task to finish
//!
//! Requests already queued are still answered, so no accepted create is lost.

pub mod config;
pub mod order_system;
pub mod tracing;

pub use self::config::*;
pub use self::order_system::*;
pub use self::tracing::setup_tracing;
