use tokio::task::JoinHandle;
use tracing::{error, info, instrument};

use crate::catalog::Catalog;
use crate::clients::StorefrontClient;
use crate::display::{Modal, OverlayModal};
use crate::error::StorefrontError;
use crate::storefront_actor::StorefrontService;

use super::StorefrontConfig;

/// Starts a storefront session and manages its lifetime.
///
/// Each system owns an independent session (its own cart, chat log and
/// notifications); several can share one [`Catalog`].
pub struct StorefrontSystem {
    pub client: StorefrontClient,
    handle: JoinHandle<()>,
}

impl StorefrontSystem {
    pub fn new() -> Self {
        Self::with_config(StorefrontConfig::default(), Catalog::storefront())
    }

    pub fn with_config(config: StorefrontConfig, catalog: Catalog) -> Self {
        Self::with_modal(config, catalog, Box::new(OverlayModal::default()))
    }

    #[instrument(name = "storefront_system", skip(catalog, cart_modal))]
    pub fn with_modal(config: StorefrontConfig, catalog: Catalog, cart_modal: Box<dyn Modal>) -> Self {
        info!("Starting storefront session");

        let (service, client) = StorefrontService::new(config, catalog, cart_modal);
        let handle = tokio::spawn(service.run());

        info!("Storefront session started");
        Self { client, handle }
    }

    /// Stops the session and waits for its task. Timers still pending are
    /// dropped when they fire.
    #[instrument(skip(self))]
    pub async fn shutdown(self) -> Result<(), StorefrontError> {
        info!("Shutting down storefront session");

        let _ = self.client.shutdown().await;

        if let Err(e) = self.handle.await {
            error!(error = ?e, "Service shutdown error");
            return Err(StorefrontError::ActorCommunicationError(e.to_string()));
        }

        info!("Storefront session shutdown complete");
        Ok(())
    }
}

impl Default for StorefrontSystem {
    fn default() -> Self {
        Self::new()
    }
}
