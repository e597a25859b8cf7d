use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, instrument};

use crate::display::{ControlId, DispatchOutcome, InputTarget, Key, ViewSnapshot};
use crate::domain::{Price, Product, ProductId};
use crate::error::StorefrontError;
use crate::messages::StorefrontRequest;

/// Handle to one storefront session. Cheap to clone; every clone talks to
/// the same session.
#[derive(Clone, Debug)]
pub struct StorefrontClient {
    sender: mpsc::Sender<StorefrontRequest>,
}

impl StorefrontClient {
    pub fn new(sender: mpsc::Sender<StorefrontRequest>) -> Self {
        Self { sender }
    }

    #[instrument(skip(self))]
    pub async fn shutdown(&self) -> Result<(), StorefrontError> {
        debug!("Sending shutdown request");
        self.sender
            .send(StorefrontRequest::Shutdown)
            .await
            .map_err(|e| StorefrontError::ActorCommunicationError(e.to_string()))?;
        Ok(())
    }

    /// Types `text` into the chat input and presses Enter.
    pub async fn type_and_enter(&self, text: &str) -> Result<DispatchOutcome, StorefrontError> {
        self.input(InputTarget::ChatInput, text.to_string()).await?;
        self.key_press(InputTarget::ChatInput, Key::Enter).await
    }
}

// User interactions
client_method!(StorefrontClient => fn click(control: ControlId) -> DispatchOutcome as StorefrontRequest::Click);
client_method!(StorefrontClient => fn input(target: InputTarget, value: String) -> () as StorefrontRequest::Input);
client_method!(StorefrontClient => fn key_press(target: InputTarget, key: Key) -> DispatchOutcome as StorefrontRequest::KeyPress);
client_method!(StorefrontClient => fn submit(form: ControlId) -> DispatchOutcome as StorefrontRequest::Submit);

// Direct store operations
client_method!(StorefrontClient => fn add_to_cart(product_id: ProductId) -> Price as StorefrontRequest::AddToCart);
client_method!(StorefrontClient => fn remove_from_cart(product_id: ProductId) -> Price as StorefrontRequest::RemoveFromCart);
client_method!(StorefrontClient => fn get_total() -> Price as StorefrontRequest::GetTotal);
client_method!(StorefrontClient => fn list_products() -> Vec<Arc<Product>> as StorefrontRequest::ListProducts);
client_method!(StorefrontClient => fn send_chat(text: String) -> bool as StorefrontRequest::SendChat);
client_method!(StorefrontClient => fn snapshot() -> ViewSnapshot as StorefrontRequest::Snapshot);
