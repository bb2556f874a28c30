//! # Observability & Tracing
//!
//! [`setup_tracing`] installs the global subscriber for the binary. Library code only emits
//! events; it never installs a subscriber itself.
//!
//! ## Configuration
//!
//! - **Structured logging** with the `tracing` crate
//! - **Configurable log levels** via the `RUST_LOG` environment variable
//! - **Compact format**, without the module prefix (`with_target(false)`)
//!
//! ## What Gets Traced
//!
//! - **Store Lifecycle**: startup (seed size, next id) and shutdown (final size)
//! - **Creates**: assigned id and store size on success, the reason on rejection
//! - **Reads**: lookups and list sizes at `debug`
//! - **Service calls**: one span per handler, carrying its arguments
//!
//! ## Usage Examples
//!
//! ```bash
//! RUST_LOG=info cargo run     # creates and lifecycle
//! RUST_LOG=debug cargo run    # plus payloads and reads
//! ```
//!
//! With `RUST_LOG=info` a create looks like:
//!
//! ```text
//! INFO Actor started entity_type="Order" size=1 next_id=2
//! INFO create_order:create_order: Created entity_type="Order" id=2 size=2
//! INFO create_order: Order created id=2
//! ```

/// Installs the global `fmt` subscriber. Call once, at the top of `main`.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
