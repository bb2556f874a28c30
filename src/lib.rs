//! # Orders API
//!
//! > **A minimal resource API for creating and listing orders, backed by an in-memory store.**
//!
//! The store is a single Tokio task (an actor) that owns every order and the id sequence.
//! Callers talk to it through cheap, cloneable clients; the actor handles one request at a
//! time, so concurrent creates can never collide on an id and a list never sees half a
//! create.
//!
//! The store is volatile by intent: orders exist for the lifetime of the process and nothing
//! is persisted.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! The generic `ResourceActor<T>` and its client.
//! - **Role**: Separates the *record rules* (your entity) from the *plumbing* (channels,
//!   message loop, id sequence, ordering).
//! - **Key items**: [`ActorEntity`](framework::ActorEntity), [`ResourceActor`](framework::ResourceActor).
//!
//! ### 2. The Data ([`model`], [`order_actor`])
//! - [`Order`](model::Order) and its creation payload, with the validation rules.
//! - The store factory and [`OrderError`](order_actor::OrderError).
//!
//! ### 3. The Interface ([`clients`], [`service`])
//! - [`OrderClient`](clients::OrderClient) wraps the generic client with order types and errors.
//! - [`OrderService`](service::OrderService) is what a transport calls: list, create, get,
//!   each returning a [`Reply`](service::Reply) with a status and body.
//!
//! ### 4. The Orchestrator ([`lifecycle`])
//! - [`StoreConfig`](lifecycle::StoreConfig), [`OrderSystem`](lifecycle::OrderSystem) and
//!   [`setup_tracing`](lifecycle::setup_tracing).
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Run the demo with info logs
//! RUST_LOG=info cargo run
//!
//! # Run the tests
//! cargo test
//! ```

pub mod clients;
pub mod framework;
pub mod lifecycle;
pub mod model;
pub mod order_actor;
pub mod service;
