//! # Cart Store
//!
//! Shopping-cart state for a storefront: add, remove and re-quantify
//! products, checked against remote stock and persisted to a key-value
//! store so the cart survives restarts.
//!
//! The cart lives inside a single actor ([`actors::CartService`]). Callers
//! hold a [`clients::CartClient`], which returns explicit results, or a
//! [`clients::NotifyingCart`], which turns failures into shopper-facing
//! notices. [`app_system::CartSystem`] wires everything together.
//!
//! ```no_run
//! # async fn demo() -> Result<(), String> {
//! use std::sync::Arc;
//! use cart_store::app_system::{CartConfig, CartSystem};
//! use cart_store::notify::TracingNotifier;
//!
//! let config = CartConfig::from_env().map_err(|e| e.to_string())?;
//! let system = CartSystem::new(&config).map_err(|e| e.to_string())?;
//! let cart = system.notifying(Arc::new(TracingNotifier));
//!
//! cart.add_product(1).await;
//! system.shutdown().await?;
//! # Ok(())
//! # }
//! ```

pub mod actors;
pub mod app_system;
pub mod clients;
pub mod domain;
pub mod error;
pub mod messages;
pub mod notify;
pub mod storage;

#[cfg(test)]
mod mock_framework;
