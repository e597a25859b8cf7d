//! # Mock Framework
//!
//! Utilities for testing the storefront client without a running session.
//!
//! Use [`create_mock_client`] to get a client and the receiving end of its
//! mailbox, then assert on requests with the `expect_*` helpers and answer
//! through the returned responder.

use tokio::sync::mpsc;

use crate::clients::StorefrontClient;
use crate::display::{ControlId, DispatchOutcome, InputTarget, Key};
use crate::domain::{Price, ProductId};
use crate::messages::{ServiceResponse, StorefrontRequest};

pub fn create_mock_client(buffer_size: usize) -> (StorefrontClient, mpsc::Receiver<StorefrontRequest>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (StorefrontClient::new(sender), receiver)
}

/// Helper to verify that the next message is an AddToCart request
pub async fn expect_add_to_cart(
    receiver: &mut mpsc::Receiver<StorefrontRequest>,
) -> Option<(ProductId, ServiceResponse<Price>)> {
    match receiver.recv().await {
        Some(StorefrontRequest::AddToCart { product_id, respond_to }) => Some((product_id, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is an Input request
pub async fn expect_input(
    receiver: &mut mpsc::Receiver<StorefrontRequest>,
) -> Option<(InputTarget, String, ServiceResponse<()>)> {
    match receiver.recv().await {
        Some(StorefrontRequest::Input { target, value, respond_to }) => Some((target, value, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a KeyPress request
pub async fn expect_key_press(
    receiver: &mut mpsc::Receiver<StorefrontRequest>,
) -> Option<(InputTarget, Key, ServiceResponse<DispatchOutcome>)> {
    match receiver.recv().await {
        Some(StorefrontRequest::KeyPress { target, key, respond_to }) => Some((target, key, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Click request
pub async fn expect_click(
    receiver: &mut mpsc::Receiver<StorefrontRequest>,
) -> Option<(ControlId, ServiceResponse<DispatchOutcome>)> {
    match receiver.recv().await {
        Some(StorefrontRequest::Click { control, respond_to }) => Some((control, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::CartError;
    use crate::error::StorefrontError;

    #[tokio::test]
    async fn test_add_to_cart_round_trip() {
        let (client, mut receiver) = create_mock_client(10);

        let add_task = tokio::spawn(async move { client.add_to_cart(ProductId(2)).await });

        let (product_id, responder) = expect_add_to_cart(&mut receiver).await.expect("Expected AddToCart request");
        assert_eq!(product_id, ProductId(2));
        responder.send(Ok(Price(1299))).unwrap();

        assert_eq!(add_task.await.unwrap(), Ok(Price(1299)));
    }

    #[tokio::test]
    async fn test_add_to_cart_error_passes_through() {
        let (client, mut receiver) = create_mock_client(10);

        let add_task = tokio::spawn(async move { client.add_to_cart(ProductId(9)).await });

        let (_, responder) = expect_add_to_cart(&mut receiver).await.expect("Expected AddToCart request");
        responder
            .send(Err(CartError::ProductNotFound(ProductId(9)).into()))
            .unwrap();

        assert_eq!(
            add_task.await.unwrap(),
            Err(StorefrontError::Cart(CartError::ProductNotFound(ProductId(9))))
        );
    }

    #[tokio::test]
    async fn test_type_and_enter_sends_input_then_key_press() {
        let (client, mut receiver) = create_mock_client(10);

        let chat_task = tokio::spawn(async move { client.type_and_enter("any food?").await });

        let (target, value, responder) = expect_input(&mut receiver).await.expect("Expected Input request");
        assert_eq!(target, InputTarget::ChatInput);
        assert_eq!(value, "any food?");
        responder.send(Ok(())).unwrap();

        let (target, key, responder) = expect_key_press(&mut receiver).await.expect("Expected KeyPress request");
        assert_eq!(target, InputTarget::ChatInput);
        assert_eq!(key, Key::Enter);
        responder.send(Ok(DispatchOutcome::handled())).unwrap();

        assert_eq!(chat_task.await.unwrap(), Ok(DispatchOutcome::handled()));
    }

    #[tokio::test]
    async fn test_click_forwards_control_id() {
        let (client, mut receiver) = create_mock_client(10);

        let click_task = tokio::spawn(async move { client.click("cart-link".into()).await });

        let (control, responder) = expect_click(&mut receiver).await.expect("Expected Click request");
        assert_eq!(control, ControlId::from("cart-link"));
        responder.send(Ok(DispatchOutcome::prevented())).unwrap();

        assert_eq!(click_task.await.unwrap(), Ok(DispatchOutcome::prevented()));
    }

    #[tokio::test]
    async fn test_closed_mailbox_is_reported() {
        let (client, receiver) = create_mock_client(1);
        drop(receiver);

        let result = client.get_total().await;
        assert_eq!(
            result,
            Err(StorefrontError::ActorCommunicationError("Actor closed".to_string()))
        );
    }

    #[tokio::test]
    async fn test_dropped_responder_is_reported() {
        let (client, mut receiver) = create_mock_client(1);

        let total_task = tokio::spawn(async move { client.get_total().await });
        // drop the request without answering
        let _ = receiver.recv().await;

        assert_eq!(
            total_task.await.unwrap(),
            Err(StorefrontError::ActorCommunicationError("Actor dropped".to_string()))
        );
    }
}
