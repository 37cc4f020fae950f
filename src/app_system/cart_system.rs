use std::sync::Arc;

use tracing::{error, info, warn};

use super::CartConfig;
use crate::actors::CartService;
use crate::clients::{CartClient, HttpStoreApi, NotifyingCart, StoreApi};
use crate::error::CartError;
use crate::notify::Notifier;
use crate::storage::{CartRepository, FileStore, KeyValueStore};

/// Owns the running cart actor.
///
/// Construction hydrates the cart from storage and starts the actor; the
/// owner decides when it ends by calling [`CartSystem::shutdown`].
pub struct CartSystem {
    pub cart_client: CartClient,
    handle: tokio::task::JoinHandle<()>,
}

impl CartSystem {
    /// Wires the HTTP store API and file storage described by `config`.
    /// Must be called inside a Tokio runtime.
    pub fn new(config: &CartConfig) -> Result<Self, CartError> {
        let api = HttpStoreApi::new(&config.api_url, config.request_timeout, config.connect_timeout)?;
        let store = FileStore::new(&config.storage_dir);
        info!(
            api_url = %api.base_url(),
            storage_dir = %store.dir().display(),
            "Starting cart system"
        );
        Ok(Self::with_parts(
            Arc::new(api),
            Arc::new(store),
            &config.storage_key,
            config.mailbox_size,
        ))
    }

    /// Starts the actor over caller-supplied collaborators.
    pub fn with_parts(
        api: Arc<dyn StoreApi>,
        store: Arc<dyn KeyValueStore>,
        storage_key: &str,
        mailbox_size: usize,
    ) -> Self {
        let repository = CartRepository::new(store, storage_key);
        let (service, cart_client) = CartService::new(mailbox_size, api, repository);
        let handle = tokio::spawn(service.run());
        Self { cart_client, handle }
    }

    /// A handle that reports failures through `notifier` instead of
    /// returning them.
    pub fn notifying(&self, notifier: Arc<dyn Notifier>) -> NotifyingCart {
        NotifyingCart::new(self.cart_client.clone(), notifier)
    }

    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down cart system...");
        // Other clones may still be alive, so ask explicitly. Requests queued
        // ahead of this one are still answered.
        if let Err(e) = self.cart_client.shutdown().await {
            warn!(error = %e, "Cart actor already stopped");
        }
        drop(self.cart_client);

        if let Err(e) = self.handle.await {
            error!("Actor task failed: {:?}", e);
            return Err(format!("Actor task failed: {:?}", e));
        }

        info!("Cart system shutdown complete.");
        Ok(())
    }
}
