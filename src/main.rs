mod app_system;
mod cart;
mod catalog;
mod chat_responder;
mod clients;
mod display;
mod domain;
mod error;
mod messages;
mod notifier;
mod render;
mod storefront_actor;

#[cfg(test)]
mod mock_framework;

use std::time::Duration;

use tracing::{info, warn, Instrument};

use crate::app_system::{setup_tracing, StorefrontSystem};
use crate::display::{InputTarget, CART_LINK, CONSULTATION_FORM};
use crate::domain::ProductId;
use crate::error::StorefrontError;

/// Walks one shopper through the storefront: browse, fill the cart, chat
/// with the bot and request a consultation.
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), StorefrontError> {
    setup_tracing();

    info!("Starting storefront session");
    let system = StorefrontSystem::new();
    let client = system.client.clone();

    let span = tracing::info_span!("browsing");
    async {
        for product in client.list_products().await? {
            info!(product_id = %product.id, name = %product.name, price = %product.price, "Listed product");
        }
        client.click("add-to-cart-1".into()).await?;
        client.click("add-to-cart-1".into()).await?;
        client.click("add-to-cart-2".into()).await?;
        if let Err(e) = client.add_to_cart(ProductId(9)).await {
            warn!(error = %e, "Add rejected");
        }
        client.remove_from_cart(ProductId(1)).await?;
        client.click(CART_LINK.into()).await?;
        Ok::<_, StorefrontError>(())
    }
    .instrument(span)
    .await?;

    let span = tracing::info_span!("chatting");
    async {
        client.type_and_enter("My pet is sick and the food is expensive").await?;
        client.type_and_enter("What's the delivery cost?").await?;
        client.type_and_enter("   ").await?;
        Ok::<_, StorefrontError>(())
    }
    .instrument(span)
    .await?;

    let span = tracing::info_span!("consultation");
    async {
        client.input(InputTarget::FormField("name".into()), "Meera".into()).await?;
        client.input(InputTarget::FormField("pet".into()), "Persian cat".into()).await?;
        client.submit(CONSULTATION_FORM.into()).await?;
        Ok::<_, StorefrontError>(())
    }
    .instrument(span)
    .await?;

    // let the bot answer and the banners clear
    tokio::time::sleep(Duration::from_millis(3100)).await;

    let view = client.snapshot().await?;
    info!(total = %view.surface.cart_total, "Cart total");
    for message in &view.surface.chat_log {
        info!(sender = %message.sender, text = %message.text, "Chat");
    }
    info!(banners = view.surface.notifications.len(), "Notifications still shown");

    system.shutdown().await?;

    info!("Storefront session completed");
    Ok(())
}
