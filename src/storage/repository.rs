use std::sync::Arc;

use tracing::{debug, instrument, warn};

use super::KeyValueStore;
use crate::domain::Cart;
use crate::error::StorageError;

/// Key the storefront has always used for its cart snapshot.
pub const DEFAULT_CART_KEY: &str = "@RocketShoes:cart";

/// Reads and writes the whole cart under a single key as a JSON array.
#[derive(Clone)]
pub struct CartRepository {
    store: Arc<dyn KeyValueStore>,
    key: String,
}

impl CartRepository {
    pub fn new(store: Arc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        Self { store, key: key.into() }
    }

    /// Hydrates the cart. A missing, unreadable or malformed entry yields an
    /// empty cart.
    #[instrument(skip(self), fields(key = %self.key))]
    pub fn load(&self) -> Cart {
        let raw = match self.store.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!("No stored cart, starting empty");
                return Cart::new();
            }
            Err(e) => {
                warn!(error = %e, "Failed to read stored cart, starting empty");
                return Cart::new();
            }
        };

        match serde_json::from_str::<Cart>(&raw) {
            Ok(cart) => {
                debug!(lines = cart.len(), "Loaded stored cart");
                cart
            }
            Err(e) => {
                warn!(error = %e, "Stored cart is malformed, starting empty");
                Cart::new()
            }
        }
    }

    /// Overwrites the stored snapshot with `cart`.
    #[instrument(skip(self, cart), fields(key = %self.key, lines = cart.len()))]
    pub fn save(&self, cart: &Cart) -> Result<(), StorageError> {
        let raw = serde_json::to_string(cart)?;
        self.store.set(&self.key, &raw)?;
        debug!("Persisted cart");
        Ok(())
    }
}
