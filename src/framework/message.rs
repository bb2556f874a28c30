//! # Generic Messages
//!
//! Message types exchanged between the [`ResourceClient`](crate::framework::ResourceClient)
//! and the [`ResourceActor`](crate::framework::ResourceActor).

use crate::framework::entity::ActorEntity;
use crate::framework::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Request sent to the actor.
///
/// The store is append-only, so the vocabulary is limited to creating a record and reading
/// one or all of them back. Every variant carries its own reply channel.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    /// Validate, assign the next id and append. Replies with the stored record.
    Create {
        params: T::Create,
        respond_to: Response<T>,
    },
    /// Look up a single record by id.
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    /// Snapshot of every record in creation order.
    List { respond_to: Response<Vec<T>> },
}
