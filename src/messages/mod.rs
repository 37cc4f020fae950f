use tokio::sync::oneshot;
use crate::domain::{Cart, ProductId};
use crate::error::CartError;

/// Generic type aliases for service communication
pub type ServiceResult<T, E> = std::result::Result<T, E>;
pub type ServiceResponse<T, E> = oneshot::Sender<ServiceResult<T, E>>;

/// Target quantity for a line already in the cart.
///
/// `amount` is signed because callers pass whatever the quantity control
/// produced; values of zero or below are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpdateProductAmount {
    pub product_id: ProductId,
    pub amount: i64,
}

/// Typed messages for the cart actor. Each variant carries its parameters
/// and a oneshot channel for the response.
#[derive(Debug)]
pub enum CartRequest {
    GetCart {
        respond_to: ServiceResponse<Cart, CartError>,
    },
    AddProduct {
        product_id: ProductId,
        respond_to: ServiceResponse<Cart, CartError>,
    },
    RemoveProduct {
        product_id: ProductId,
        respond_to: ServiceResponse<Cart, CartError>,
    },
    UpdateProductAmount {
        update: UpdateProductAmount,
        respond_to: ServiceResponse<Cart, CartError>,
    },
    Shutdown,
}
