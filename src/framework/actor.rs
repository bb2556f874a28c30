//! # Generic Actor Server
//!
//! This module defines the `ResourceActor`, the component that owns a collection of records
//! and serves requests against it. It is the "Server" side of the Actor Model: one task, one
//! receiver, messages processed strictly in arrival order.

use crate::framework::client::ResourceClient;
use crate::framework::entity::ActorEntity;
use crate::framework::error::FrameworkError;
use crate::framework::message::ResourceRequest;
use std::collections::HashMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that keeps an ordered, append-only collection of entities.
///
/// # Architecture Note
/// This struct is the "Server" half of the actor. It owns the records, the id sequence and
/// the receiver end of the channel.
///
/// **Concurrency Model**:
/// Any number of clients may send requests at once, but the actor handles them one at a
/// time. A create (validate, assign id, append) therefore runs to completion before the next
/// message is looked at, and a list always sees either all of a create or none of it. No
/// `Mutex` or `RwLock` is needed; exclusive ownership inside the task is the lock.
///
/// **Volatility**:
/// Records live in memory for as long as the task runs. Nothing is written anywhere; when
/// the last client is dropped the actor exits and the records are gone.
///
/// # Usage Pattern
///
/// 1.  **Create**: Call `ResourceActor::new()` (or `with_seed()`) to get the `actor` and `client`.
/// 2.  **Run**: Spawn `actor.run()` in a background task.
/// 3.  **Use**: Clone the client into whatever needs it.
///
/// ```rust
/// use orders_api::framework::{ActorEntity, ResourceActor};
/// use async_trait::async_trait;
///
/// #[derive(Clone, Debug)] struct Note { id: u64, text: String }
/// #[derive(Debug)] struct NoteCreate { text: String }
/// #[derive(Debug, thiserror::Error)] #[error("empty note")] struct NoteError;
///
/// #[async_trait]
/// impl ActorEntity for Note {
///     type Id = u64;
///     type Create = NoteCreate;
///     type Error = NoteError;
///
///     fn id(&self) -> u64 { self.id }
///     fn validate(params: &NoteCreate) -> Result<(), NoteError> {
///         if params.text.is_empty() { Err(NoteError) } else { Ok(()) }
///     }
///     fn from_create_params(id: u64, params: NoteCreate) -> Result<Self, NoteError> {
///         Ok(Self { id, text: params.text })
///     }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = ResourceActor::<Note>::new(10);
///     tokio::spawn(actor.run());
///
///     let note = client.create(NoteCreate { text: "hello".into() }).await.unwrap();
///     assert_eq!(note.id, 1);
///     assert_eq!(client.list().await.unwrap().len(), 1);
/// }
/// ```
///
/// # Implementation Details
///
/// Records are kept in a `Vec` in creation order, with a `HashMap` from id to position for
/// lookups. `next_id` is one past the highest id ever stored.
///
/// * **Create**:
///     1. Calls `T::validate` on the payload.
///     2. Builds the entity with `T::from_create_params`, using `next_id` as the id.
///     3. Calls the `on_create` hook.
///     4. Appends, indexes and advances `next_id`.
///     5. Returns a clone of the stored entity.
///
///     A failure at any step returns before step 4, so rejected creates leave no trace and
///     consume no id. `u64::MAX` is never handed out; once `next_id` reaches it, creates
///     fail with `IdSpaceExhausted` and the store keeps serving reads.
///
/// * **Get**: clone of the record with that id, or `None`.
///
/// * **List**: clone of the whole collection.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    records: Vec<T>,
    index: HashMap<T::Id, usize>,
    next_id: u64,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates an empty `ResourceActor` and its associated `ResourceClient`.
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - The capacity of the MPSC channel. If the channel is full,
    ///   calls to the client will wait until there is space. Zero is treated as one.
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        // tokio panics on a zero-capacity channel
        let (sender, receiver) = mpsc::channel(buffer_size.max(1));
        let actor = Self {
            receiver,
            records: Vec::new(),
            index: HashMap::new(),
            next_id: 1,
        };
        (actor, ResourceClient::new(sender))
    }

    /// Creates a `ResourceActor` pre-populated with `seed`, kept in the given order.
    ///
    /// Seed ids consume id space: the first created record gets one more than the highest
    /// seed id.
    ///
    /// # Errors
    ///
    /// [`FrameworkError::DuplicateId`] if two seed records share an id, and
    /// [`FrameworkError::IdSpaceExhausted`] if a seed id is `u64::MAX`, which would leave no
    /// id for the next create.
    pub fn with_seed(buffer_size: usize, seed: Vec<T>) -> Result<(Self, ResourceClient<T>), FrameworkError> {
        let (mut actor, client) = Self::new(buffer_size);
        for item in seed {
            let id = item.id();
            if actor.index.contains_key(&id) {
                return Err(FrameworkError::DuplicateId(id.to_string()));
            }
            let raw: u64 = id.into();
            let after = raw
                .checked_add(1)
                .ok_or(FrameworkError::IdSpaceExhausted(raw))?;
            actor.next_id = actor.next_id.max(after);
            actor.append(item);
        }
        Ok((actor, client))
    }

    /// Runs the actor's event loop, processing messages until every client is dropped.
    pub async fn run(mut self) {
        // Extract just the type name (e.g., "Order" instead of "orders_api::model::order::Order")
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, size = self.records.len(), next_id = self.next_id, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let result = self.create(params).await;
                    match &result {
                        Ok(item) => {
                            info!(entity_type, id = %item.id(), size = self.records.len(), "Created")
                        }
                        Err(e) => warn!(entity_type, error = %e, "Create rejected"),
                    }
                    // The record is stored even if the caller has gone away.
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.index.get(&id).map(|&pos| self.records[pos].clone());
                    debug!(entity_type, %id, found = item.is_some(), "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::List { respond_to } => {
                    debug!(entity_type, size = self.records.len(), "List");
                    let _ = respond_to.send(Ok(self.records.clone()));
                }
            }
        }

        info!(entity_type, size = self.records.len(), "Shutdown");
    }

    async fn create(&mut self, params: T::Create) -> Result<T, FrameworkError> {
        T::validate(&params).map_err(entity_error)?;
        let following = self
            .next_id
            .checked_add(1)
            .ok_or(FrameworkError::IdSpaceExhausted(self.next_id))?;
        let id = T::Id::from(self.next_id);
        let mut item = T::from_create_params(id, params).map_err(entity_error)?;
        item.on_create().await.map_err(entity_error)?;

        self.append(item.clone());
        self.next_id = following;
        Ok(item)
    }

    fn append(&mut self, item: T) {
        self.index.insert(item.id(), self.records.len());
        self.records.push(item);
    }
}

fn entity_error<E: std::error::Error + Send + Sync + 'static>(e: E) -> FrameworkError {
    FrameworkError::EntityError(Box::new(e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    #[derive(Clone, Debug, PartialEq)]
    struct Note {
        id: u64,
        text: String,
    }

    #[derive(Debug)]
    struct NoteCreate {
        text: String,
    }

    #[derive(Debug, thiserror::Error)]
    #[error("note text must not be empty")]
    struct NoteError;

    #[async_trait]
    impl ActorEntity for Note {
        type Id = u64;
        type Create = NoteCreate;
        type Error = NoteError;

        fn id(&self) -> u64 {
            self.id
        }

        fn validate(params: &NoteCreate) -> Result<(), NoteError> {
            if params.text.is_empty() {
                return Err(NoteError);
            }
            Ok(())
        }

        fn from_create_params(id: u64, params: NoteCreate) -> Result<Self, NoteError> {
            Ok(Self { id, text: params.text })
        }
    }

    fn note(id: u64, text: &str) -> Note {
        Note {
            id,
            text: text.to_string(),
        }
    }

    #[tokio::test]
    async fn test_rejected_create_consumes_no_id() {
        let (actor, client) = ResourceActor::<Note>::new(10);
        tokio::spawn(actor.run());

        let err = client
            .create(NoteCreate { text: String::new() })
            .await
            .unwrap_err();
        assert!(matches!(err, FrameworkError::EntityError(_)));
        assert!(client.list().await.unwrap().is_empty());

        let created = client
            .create(NoteCreate { text: "first".into() })
            .await
            .unwrap();
        assert_eq!(created.id, 1);
    }

    #[tokio::test]
    async fn test_seed_sets_next_id_and_order() {
        let seed = vec![note(7, "seven"), note(3, "three")];
        let (actor, client) = ResourceActor::with_seed(10, seed).unwrap();
        tokio::spawn(actor.run());

        let created = client
            .create(NoteCreate { text: "eight".into() })
            .await
            .unwrap();
        assert_eq!(created.id, 8);

        let ids: Vec<u64> = client.list().await.unwrap().iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![7, 3, 8]);

        assert_eq!(client.get(3).await.unwrap(), Some(note(3, "three")));
        assert_eq!(client.get(42).await.unwrap(), None);
    }

    #[test]
    fn test_duplicate_seed_rejected() {
        let seed = vec![note(1, "a"), note(1, "b")];
        let result = ResourceActor::with_seed(10, seed);
        assert!(matches!(result, Err(FrameworkError::DuplicateId(id)) if id == "1"));
    }

    #[test]
    fn test_seed_with_max_id_rejected() {
        let seed = vec![note(1, "a"), note(u64::MAX, "last")];
        let result = ResourceActor::with_seed(10, seed);
        assert!(matches!(result, Err(FrameworkError::IdSpaceExhausted(id)) if id == u64::MAX));
    }

    #[tokio::test]
    async fn test_exhausted_id_space_keeps_store_alive() {
        let seed = vec![note(u64::MAX - 1, "almost")];
        let (actor, client) = ResourceActor::with_seed(10, seed).unwrap();
        let handle = tokio::spawn(actor.run());

        let err = client
            .create(NoteCreate { text: "one too many".into() })
            .await
            .unwrap_err();
        assert!(matches!(err, FrameworkError::IdSpaceExhausted(id) if id == u64::MAX));

        // nothing was stored and the actor is still answering
        let ids: Vec<u64> = client.list().await.unwrap().iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![u64::MAX - 1]);

        drop(client);
        assert!(handle.await.is_ok());
    }

    #[tokio::test]
    async fn test_zero_buffer_is_usable() {
        let (actor, client) = ResourceActor::<Note>::new(0);
        tokio::spawn(actor.run());

        let created = client
            .create(NoteCreate { text: "fits".into() })
            .await
            .unwrap();
        assert_eq!(created.id, 1);
    }

    #[tokio::test]
    async fn test_client_reports_closed_actor() {
        let (actor, client) = ResourceActor::<Note>::new(1);
        drop(actor);

        let err = client.list().await.unwrap_err();
        assert!(matches!(err, FrameworkError::ActorClosed));
    }
}
