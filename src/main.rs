//! # Orders API demo
//!
//! Starts the order system with its default seed, lists, creates an order, shows a rejected
//! create, and shuts down.

use orders_api::lifecycle::{setup_tracing, OrderSystem};
use orders_api::service::Reply;
use tracing::{error, info, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    info!("Starting orders service");
    let system = OrderSystem::new().map_err(|e| e.to_string())?;
    let service = &system.order_service;

    let listed = service.list_orders().await.map_err(|e| e.to_string())?;
    info!(count = listed.body.len(), "Seeded orders");

    let span = tracing::info_span!("order_processing");
    let created = async {
        service
            .create_order_json(br#"{"customerName": "Bob", "totalAmount": "42.50"}"#)
            .await
    }
    .instrument(span)
    .await;

    match created {
        Ok(reply) => {
            let body = reply.body_json().map_err(|e| e.to_string())?;
            info!(
                status = reply.status.code(),
                location = reply.location.as_deref().unwrap_or_default(),
                %body,
                "Order created"
            );
        }
        Err(e) => error!(error = %e, "Order creation failed"),
    }

    // Negative totals are rejected before anything is stored.
    if let Err(e) = service
        .create_order_json(br#"{"customerName": "Eve", "totalAmount": -1}"#)
        .await
    {
        let reply = Reply::failure(&e);
        let body = reply.body_json().map_err(|e| e.to_string())?;
        info!(status = reply.status.code(), %body, "Create rejected");
    }

    let listed = service.list_orders().await.map_err(|e| e.to_string())?;
    let body = listed.body_json().map_err(|e| e.to_string())?;
    info!(%body, "Current orders");

    system.shutdown().await?;

    info!("Application completed successfully");
    Ok(())
}
