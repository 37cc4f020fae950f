use tokio::sync::mpsc;
use tracing::{debug, instrument};
use crate::domain::{Cart, ProductId};
use crate::error::CartError;
use crate::messages::{CartRequest, UpdateProductAmount};

/// Cloneable handle to a running [`crate::actors::CartService`].
///
/// Every operation returns the cart as it stands after the request, or the
/// reason it was refused.
#[derive(Clone)]
pub struct CartClient {
    sender: mpsc::Sender<CartRequest>,
}

impl CartClient {
    pub fn new(sender: mpsc::Sender<CartRequest>) -> Self {
        Self { sender }
    }

    /// Asks the actor to stop after the requests already queued.
    #[instrument(skip(self))]
    pub async fn shutdown(&self) -> Result<(), CartError> {
        debug!("Sending request");
        self.sender
            .send(CartRequest::Shutdown)
            .await
            .map_err(|_| CartError::ActorCommunicationError("Actor closed".to_string()))
    }
}

client_method!(CartClient => fn cart() -> Cart as CartRequest::GetCart, Error = CartError);
client_method!(CartClient => fn add_product(product_id: ProductId) -> Cart as CartRequest::AddProduct, Error = CartError);
client_method!(CartClient => fn remove_product(product_id: ProductId) -> Cart as CartRequest::RemoveProduct, Error = CartError);
client_method!(CartClient => fn update_product_amount(update: UpdateProductAmount) -> Cart as CartRequest::UpdateProductAmount, Error = CartError);
