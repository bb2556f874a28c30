use crate::clients::OrderClient;
use crate::framework::FrameworkError;
use crate::lifecycle::StoreConfig;
use crate::service::OrderService;
use tracing::{error, info};

/// The runtime orchestrator for the orders service.
///
/// `OrderSystem` is responsible for:
/// - **Lifecycle Management**: Starting the store actor and stopping it on shutdown
/// - **Dependency Wiring**: Handing the store's client to the service
///
/// The store lives exactly as long as this system (and any clones of its clients). It is
/// in-memory only: shutting down discards every order.
///
/// # Example
///
/// ```ignore
/// let system = OrderSystem::new()?;
///
/// let reply = system.order_service.list_orders().await?;
///
/// // Gracefully shut down when done
/// system.shutdown().await?;
/// ```
pub struct OrderSystem {
    /// Request handlers for the transport layer
    pub order_service: OrderService,

    /// Direct client for the Order store
    pub order_client: OrderClient,

    /// Task handle of the store actor (used for graceful shutdown)
    handle: tokio::task::JoinHandle<()>,
}

impl OrderSystem {
    /// Starts a system with the default configuration (one seeded order).
    ///
    /// Must be called from within a Tokio runtime.
    pub fn new() -> Result<Self, FrameworkError> {
        Self::with_config(StoreConfig::default())
    }

    /// Starts a system from `config`.
    ///
    /// # Errors
    ///
    /// [`FrameworkError::DuplicateId`] if the seed repeats an id, or
    /// [`FrameworkError::IdSpaceExhausted`] if a seed id is `u64::MAX`. Nothing is spawned then.
    pub fn with_config(config: StoreConfig) -> Result<Self, FrameworkError> {
        let (order_actor, generic_client) = crate::order_actor::new(&config)?;
        let order_client = OrderClient::new(generic_client);
        let order_service = OrderService::new(order_client.clone());

        let handle = tokio::spawn(order_actor.run());
        info!(seeded = config.seed.len(), "Order system started");

        Ok(Self {
            order_service,
            order_client,
            handle,
        })
    }

    /// Gracefully shuts down the store.
    ///
    /// Drops this system's clients and waits for the actor to drain its queue and exit.
    /// Clones of the client or service held elsewhere keep the store alive, so drop them
    /// first or this call will wait for them.
    ///
    /// # Returns
    ///
    /// - `Ok(())` if the actor shut down cleanly
    /// - `Err(String)` if the actor task failed or panicked
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        // Closing every sender ends the actor's receive loop.
        drop(self.order_service);
        drop(self.order_client);

        if let Err(e) = self.handle.await {
            error!("Actor task failed: {:?}", e);
            return Err(format!("Actor task failed: {:?}", e));
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
