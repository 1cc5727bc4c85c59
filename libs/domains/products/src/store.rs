//! Ordered, in-process collection of products.
//!
//! Insertion order is preserved and used by every listing. Apart from the
//! replace-in-place update, positions never change without a removal.

use crate::models::Product;

#[derive(Debug, Clone, Default)]
pub struct ProductStore {
    products: Vec<Product>,
}

impl ProductStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn list(&self) -> &[Product] {
        &self.products
    }

    pub fn find_by_id(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn find_index_by_id(&self, id: &str) -> Option<usize> {
        self.products.iter().position(|p| p.id == id)
    }

    pub fn append(&mut self, product: Product) {
        self.products.push(product);
    }

    /// Replace the product at `index`, returning the previous value.
    ///
    /// Returns `None` without touching the store when `index` is out of range.
    pub fn replace_at(&mut self, index: usize, product: Product) -> Option<Product> {
        let slot = self.products.get_mut(index)?;
        Some(std::mem::replace(slot, product))
    }

    /// Remove the product at `index`, shifting later products down.
    pub fn remove_at(&mut self, index: usize) -> Option<Product> {
        (index < self.products.len()).then(|| self.products.remove(index))
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
