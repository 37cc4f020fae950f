use serde::{Deserialize, Serialize};

use super::{Product, ProductId};

/// The ordered list of lines a shopper intends to buy.
///
/// Lines keep insertion order and product ids are unique. Serialized as a
/// bare JSON array; duplicate or empty lines are dropped when loading.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<Product>", into = "Vec<Product>")]
pub struct Cart {
    lines: Vec<Product>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[Product] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of distinct products in the cart.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.lines.iter().find(|line| line.id == id)
    }

    fn get_mut(&mut self, id: ProductId) -> Option<&mut Product> {
        self.lines.iter_mut().find(|line| line.id == id)
    }

    /// Quantity of `id` in the cart, 0 when absent.
    pub fn amount_of(&self, id: ProductId) -> u32 {
        self.get(id).map_or(0, |line| line.amount)
    }

    pub fn total(&self) -> f64 {
        self.lines.iter().map(Product::subtotal).sum()
    }

    /// Appends a new line. Returns `false` without touching the cart if a
    /// line for the same product already exists or `amount` is zero.
    pub fn push(&mut self, line: Product) -> bool {
        if line.amount == 0 || self.get(line.id).is_some() {
            return false;
        }
        self.lines.push(line);
        true
    }

    /// Sets the quantity of an existing line. Returns `false` if the line is
    /// missing or `amount` is zero.
    pub fn set_amount(&mut self, id: ProductId, amount: u32) -> bool {
        if amount == 0 {
            return false;
        }
        match self.get_mut(id) {
            Some(line) => {
                line.amount = amount;
                true
            }
            None => false,
        }
    }

    /// Removes the line for `id`, keeping the others in order.
    pub fn remove(&mut self, id: ProductId) -> Option<Product> {
        let index = self.lines.iter().position(|line| line.id == id)?;
        Some(self.lines.remove(index))
    }
}

impl From<Vec<Product>> for Cart {
    fn from(lines: Vec<Product>) -> Self {
        let mut cart = Cart::new();
        for line in lines {
            cart.push(line);
        }
        cart
    }
}

impl From<Cart> for Vec<Product> {
    fn from(cart: Cart) -> Self {
        cart.lines
    }
}
