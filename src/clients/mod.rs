//! Domain clients wrapping the generic [`ResourceClient`](crate::framework::ResourceClient).

pub mod order_client;

pub use order_client::OrderClient;
