use std::sync::Arc;

use tracing::{error, instrument};

use super::CartClient;
use crate::domain::{Cart, ProductId};
use crate::error::CartError;
use crate::messages::UpdateProductAmount;
use crate::notify::{Notice, Notifier};

/// UI-facing wrapper around [`CartClient`].
///
/// Failures never reach the caller: each one is turned into a single notice
/// for the shopper. Successful operations hand back the updated cart.
#[derive(Clone)]
pub struct NotifyingCart {
    client: CartClient,
    notifier: Arc<dyn Notifier>,
}

impl NotifyingCart {
    pub fn new(client: CartClient, notifier: Arc<dyn Notifier>) -> Self {
        Self { client, notifier }
    }

    /// Current cart, or an empty one if the actor is gone.
    pub async fn cart(&self) -> Cart {
        self.client.cart().await.unwrap_or_else(|e| {
            error!(error = %e, "Failed to read cart");
            Cart::new()
        })
    }

    #[instrument(skip(self))]
    pub async fn add_product(&self, product_id: ProductId) -> Option<Cart> {
        let result = self.client.add_product(product_id).await;
        self.surface(result, Notice::AddFailed)
    }

    #[instrument(skip(self))]
    pub async fn remove_product(&self, product_id: ProductId) -> Option<Cart> {
        let result = self.client.remove_product(product_id).await;
        self.surface(result, Notice::RemoveFailed)
    }

    #[instrument(skip(self))]
    pub async fn update_product_amount(&self, update: UpdateProductAmount) -> Option<Cart> {
        let result = self.client.update_product_amount(update).await;
        self.surface(result, Notice::UpdateFailed)
    }

    fn surface(&self, result: Result<Cart, CartError>, failed: Notice) -> Option<Cart> {
        match result {
            Ok(cart) => Some(cart),
            Err(e) => {
                self.notifier.notify(notice_for(&e, failed));
                None
            }
        }
    }
}

/// Stock rejections share one message; everything else reports the
/// operation that failed.
fn notice_for(error: &CartError, failed: Notice) -> Notice {
    match error {
        CartError::OutOfStock { .. } => Notice::OutOfStock,
        _ => failed,
    }
}
