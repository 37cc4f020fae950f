//! # Mock Framework
//!
//! Utilities for testing the cart in isolation.
//!
//! Use [`create_mock_client`] to get a client and the receiving end of its
//! mailbox, then helpers like [`expect_add`] to assert on what was sent and
//! answer it. [`MockStoreApi`] stands in for the stock and catalog endpoints.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use tokio::sync::{mpsc, oneshot};

use crate::clients::{CartClient, StoreApi};
use crate::domain::{Cart, CatalogProduct, ProductId, Stock};
use crate::error::{ApiError, CartError};
use crate::messages::{CartRequest, UpdateProductAmount};

pub type CartResponder = oneshot::Sender<Result<Cart, CartError>>;

/// Creates a client whose requests land on a receiver the test controls.
///
/// The test plays the actor: it inspects each request and decides the reply,
/// so adapters built on [`CartClient`] can be driven through success and
/// failure paths deterministically.
pub fn create_mock_client(buffer_size: usize) -> (CartClient, mpsc::Receiver<CartRequest>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (CartClient::new(sender), receiver)
}

/// Helper to verify that the next message is an AddProduct request
pub async fn expect_add(receiver: &mut mpsc::Receiver<CartRequest>) -> Option<(ProductId, CartResponder)> {
    match receiver.recv().await {
        Some(CartRequest::AddProduct { product_id, respond_to }) => Some((product_id, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a RemoveProduct request
pub async fn expect_remove(receiver: &mut mpsc::Receiver<CartRequest>) -> Option<(ProductId, CartResponder)> {
    match receiver.recv().await {
        Some(CartRequest::RemoveProduct { product_id, respond_to }) => Some((product_id, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is an UpdateProductAmount request
pub async fn expect_update(
    receiver: &mut mpsc::Receiver<CartRequest>,
) -> Option<(UpdateProductAmount, CartResponder)> {
    match receiver.recv().await {
        Some(CartRequest::UpdateProductAmount { update, respond_to }) => Some((update, respond_to)),
        _ => None,
    }
}

/// Scripted stock and catalog responses.
#[derive(Default)]
pub struct MockStoreApi {
    stock: Mutex<HashMap<ProductId, i64>>,
    catalog: Mutex<HashMap<ProductId, CatalogProduct>>,
    offline: Mutex<bool>,
    latency: Option<Duration>,
    stock_calls: AtomicUsize,
    product_calls: AtomicUsize,
}

impl MockStoreApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every lookup sleeps for `latency` before answering.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    /// Registers a catalog entry with `available` units in stock.
    pub fn with_product(self, id: ProductId, available: i64) -> Self {
        self.set_stock(id, available);
        self.catalog
            .lock()
            .unwrap()
            .insert(id, CatalogProduct::new(id, format!("Product {id}"), 10.0 * id as f64, format!("https://img/{id}.jpg")));
        self
    }

    pub fn set_stock(&self, id: ProductId, available: i64) {
        self.stock.lock().unwrap().insert(id, available);
    }

    /// While offline every lookup fails with a request error.
    pub fn set_offline(&self, offline: bool) {
        *self.offline.lock().unwrap() = offline;
    }

    pub fn stock_calls(&self) -> usize {
        self.stock_calls.load(Ordering::SeqCst)
    }

    pub fn product_calls(&self) -> usize {
        self.product_calls.load(Ordering::SeqCst)
    }

    async fn respond(&self) -> Result<(), ApiError> {
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }
        if *self.offline.lock().unwrap() {
            return Err(ApiError::Request("connection refused".to_string()));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl StoreApi for MockStoreApi {
    async fn stock(&self, id: ProductId) -> Result<Stock, ApiError> {
        self.stock_calls.fetch_add(1, Ordering::SeqCst);
        self.respond().await?;
        let amount = self.stock.lock().unwrap().get(&id).copied();
        amount
            .map(|amount| Stock::new(id, amount))
            .ok_or(ApiError::Status { status: 404, url: format!("stock/{id}") })
    }

    async fn product(&self, id: ProductId) -> Result<CatalogProduct, ApiError> {
        self.product_calls.fetch_add(1, Ordering::SeqCst);
        self.respond().await?;
        let product = self.catalog.lock().unwrap().get(&id).cloned();
        product.ok_or(ApiError::Status { status: 404, url: format!("/products/{id}") })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_client() {
        let (client, mut receiver) = create_mock_client(10);

        let add_task = tokio::spawn(async move { client.add_product(3).await });

        let (product_id, responder) = expect_add(&mut receiver).await.expect("Expected AddProduct request");
        assert_eq!(product_id, 3);
        responder.send(Err(CartError::NotFound(3))).unwrap();

        let result = add_task.await.unwrap();
        assert_eq!(result, Err(CartError::NotFound(3)));
    }

    #[tokio::test]
    async fn test_mock_store_api() {
        let api = MockStoreApi::new().with_product(1, 5);

        assert_eq!(api.stock(1).await, Ok(Stock::new(1, 5)));
        assert_eq!(api.product(1).await.unwrap().title, "Product 1");
        assert!(matches!(api.stock(2).await, Err(ApiError::Status { status: 404, .. })));

        api.set_offline(true);
        assert!(matches!(api.product(1).await, Err(ApiError::Request(_))));
        assert_eq!(api.stock_calls(), 2);
        assert_eq!(api.product_calls(), 2);
    }
}
