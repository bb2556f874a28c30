//! # Framework Errors
//!
//! Errors raised by the actor machinery itself, as opposed to the entity rules it hosts.

/// Errors that can occur within the actor framework itself.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Duplicate id in seed data: {0}")]
    DuplicateId(String),
    #[error("No ids left to assign after {0}")]
    IdSpaceExhausted(u64),
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}
