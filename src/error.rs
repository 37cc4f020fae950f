use thiserror::Error;

use crate::domain::ProductId;

/// Failures talking to the stock or catalog endpoints.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ApiError {
    #[error("HTTP client build failed: {0}")]
    ClientBuild(String),
    #[error("Request failed: {0}")]
    Request(String),
    #[error("Unexpected status {status} from {url}")]
    Status { status: u16, url: String },
    #[error("Response parse failed: {0}")]
    Parse(String),
}

/// Failures reading or writing the durable key-value store.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum StorageError {
    #[error("Storage I/O error: {0}")]
    Io(String),
    #[error("Cart serialization error: {0}")]
    Serialization(String),
}

impl From<std::io::Error> for StorageError {
    fn from(e: std::io::Error) -> Self {
        StorageError::Io(e.to_string())
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(e: serde_json::Error) -> Self {
        StorageError::Serialization(e.to_string())
    }
}

/// Outcome of a rejected cart operation.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CartError {
    #[error("Insufficient stock for product {product_id}: requested {requested}, available {available}")]
    OutOfStock { product_id: ProductId, requested: u32, available: i64 },
    #[error("Product not in cart: {0}")]
    NotFound(ProductId),
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

/// Errors loading [`crate::app_system::CartConfig`].
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid value for {var}: {value:?}")]
    InvalidValue { var: &'static str, value: String },
}
