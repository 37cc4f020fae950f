use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, error, info, instrument, warn};
use crate::domain::{Cart, ProductId};
use crate::messages::{CartRequest, UpdateProductAmount};
use crate::error::{CartError, StorageError};
use crate::clients::{CartClient, StoreApi};
use crate::storage::CartRepository;

// =============================================================================
// CART SERVICE
// =============================================================================

/// Owns the cart and applies one request at a time.
///
/// Each request runs to completion, remote lookups included, before the next
/// one is taken from the mailbox. Changes are made on a copy that replaces
/// the live cart only after it has been persisted.
pub struct CartService {
    receiver: mpsc::Receiver<CartRequest>,
    api: Arc<dyn StoreApi>,
    repository: CartRepository,
    cart: Cart,
}

impl CartService {
    /// Builds the service and hydrates the cart from `repository`.
    pub fn new(buffer_size: usize, api: Arc<dyn StoreApi>, repository: CartRepository) -> (Self, CartClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let cart = repository.load();
        let service = Self {
            receiver,
            api,
            repository,
            cart,
        };
        let client = CartClient::new(sender);
        (service, client)
    }

    #[instrument(name = "cart_service", skip(self))]
    pub async fn run(mut self) {
        info!(lines = self.cart.len(), "CartService starting");
        while let Some(msg) = self.receiver.recv().await {
            match msg {
                CartRequest::GetCart { respond_to } => {
                    let _ = respond_to.send(Ok(self.cart.clone()));
                }
                CartRequest::AddProduct { product_id, respond_to } => {
                    let _ = respond_to.send(self.handle_add_product(product_id).await);
                }
                CartRequest::RemoveProduct { product_id, respond_to } => {
                    let _ = respond_to.send(self.handle_remove_product(product_id).await);
                }
                CartRequest::UpdateProductAmount { update, respond_to } => {
                    let _ = respond_to.send(self.handle_update_product_amount(update).await);
                }
                CartRequest::Shutdown => {
                    info!("CartService shutting down");
                    break;
                }
            }
        }
        info!("CartService stopped");
    }

    #[instrument(fields(product_id = %product_id), skip(self))]
    async fn handle_add_product(&mut self, product_id: ProductId) -> Result<Cart, CartError> {
        debug!("Processing add_product request");
        let current = self.cart.amount_of(product_id);

        let stock = self.api.stock(product_id).await.map_err(|e| {
            error!(error = %e, "Stock lookup failed");
            CartError::from(e)
        })?;

        let requested = current.saturating_add(1);
        if !stock.covers(requested) {
            warn!(requested, available = stock.amount, "Requested quantity exceeds stock");
            return Err(CartError::OutOfStock { product_id, requested, available: stock.amount });
        }

        let mut next = self.cart.clone();
        if current > 0 {
            next.set_amount(product_id, requested);
        } else {
            let product = self.api.product(product_id).await.map_err(|e| {
                error!(error = %e, "Catalog lookup failed");
                CartError::from(e)
            })?;
            let mut line = product.into_line(1);
            line.id = product_id;
            next.push(line);
        }

        self.commit(next).await?;
        info!(amount = requested, "Product added");
        Ok(self.cart.clone())
    }

    #[instrument(fields(product_id = %product_id), skip(self))]
    async fn handle_remove_product(&mut self, product_id: ProductId) -> Result<Cart, CartError> {
        debug!("Processing remove_product request");
        let mut next = self.cart.clone();
        if next.remove(product_id).is_none() {
            warn!("Product not in cart");
            return Err(CartError::NotFound(product_id));
        }

        self.commit(next).await?;
        info!("Product removed");
        Ok(self.cart.clone())
    }

    #[instrument(fields(product_id = %update.product_id, amount = update.amount), skip(self))]
    async fn handle_update_product_amount(&mut self, update: UpdateProductAmount) -> Result<Cart, CartError> {
        debug!("Processing update_product_amount request");
        let UpdateProductAmount { product_id, amount } = update;
        if amount <= 0 {
            debug!("Ignoring non-positive amount");
            return Ok(self.cart.clone());
        }

        let stock = self.api.stock(product_id).await.map_err(|e| {
            error!(error = %e, "Stock lookup failed");
            CartError::from(e)
        })?;

        // Anything past u32::MAX is more than any stock can hold.
        let requested = u32::try_from(amount).unwrap_or(u32::MAX);
        if !stock.covers(requested) {
            warn!(available = stock.amount, "Requested quantity exceeds stock");
            return Err(CartError::OutOfStock { product_id, requested, available: stock.amount });
        }

        let mut next = self.cart.clone();
        if !next.set_amount(product_id, requested) {
            warn!("Product not in cart");
            return Err(CartError::NotFound(product_id));
        }

        self.commit(next).await?;
        info!("Product amount updated");
        Ok(self.cart.clone())
    }

    /// Persists `next` and makes it the live cart. On failure the live cart
    /// is left as it was.
    ///
    /// Stores may do blocking file I/O, so the write runs on the blocking
    /// pool while the actor waits for it.
    async fn commit(&mut self, next: Cart) -> Result<(), CartError> {
        let repository = self.repository.clone();
        let snapshot = next.clone();
        let saved = tokio::task::spawn_blocking(move || repository.save(&snapshot))
            .await
            .unwrap_or_else(|e| Err(StorageError::Io(format!("Storage task failed: {e}"))));

        if let Err(e) = saved {
            error!(error = %e, "Failed to persist cart");
            return Err(e.into());
        }
        self.cart = next;
        Ok(())
    }
}
