use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Catalog identifier of a product.
pub type ProductId = u64;

/// Product metadata as served by the catalog.
///
/// Fields the cart does not interpret are kept in `extra` so they survive a
/// round trip through storage unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogProduct {
    pub id: ProductId,
    pub title: String,
    pub price: f64,
    pub image: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CatalogProduct {
    pub fn new(id: ProductId, title: impl Into<String>, price: f64, image: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            price,
            image: image.into(),
            extra: Map::new(),
        }
    }

    /// Turns catalog metadata into a cart line holding `amount` units.
    ///
    /// A catalog `amount` is replaced by the cart's own; leaving it in
    /// `extra` would serialize the key twice.
    pub fn into_line(self, amount: u32) -> Product {
        let mut extra = self.extra;
        extra.remove("amount");
        extra.remove("id");
        Product {
            id: self.id,
            title: self.title,
            price: self.price,
            image: self.image,
            extra,
            amount,
        }
    }
}

/// Represents a line in the cart: a catalog product plus the quantity wanted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub price: f64,
    pub image: String,
    pub amount: u32,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Product {
    pub fn new(id: ProductId, title: impl Into<String>, price: f64, amount: u32) -> Self {
        Self {
            id,
            title: title.into(),
            price,
            image: String::new(),
            amount,
            extra: Map::new(),
        }
    }

    /// Price of the whole line.
    pub fn subtotal(&self) -> f64 {
        self.price * f64::from(self.amount)
    }
}
