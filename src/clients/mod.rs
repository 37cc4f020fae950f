//! Handles for talking to the cart actor and the remote store.

#[macro_use]
mod macros;
mod cart_client;
mod notifying_cart;
mod store_api;

pub use cart_client::CartClient;
pub use notifying_cart::NotifyingCart;
pub use store_api::{HttpStoreApi, StoreApi};
