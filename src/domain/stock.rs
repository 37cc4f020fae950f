use serde::{Deserialize, Serialize};

use super::ProductId;

/// Available quantity for a product, as reported by the stock service.
///
/// Signed because the service does not guarantee a non-negative count; a
/// negative amount covers nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stock {
    #[serde(default)]
    pub id: ProductId,
    pub amount: i64,
}

impl Stock {
    pub fn new(id: ProductId, amount: i64) -> Self {
        Self { id, amount }
    }

    /// Whether `requested` units fit inside what is available.
    pub fn covers(&self, requested: u32) -> bool {
        i64::from(requested) <= self.amount
    }
}
