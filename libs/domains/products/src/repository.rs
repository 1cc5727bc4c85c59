use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::ProductResult;
use crate::models::Product;
use crate::store::ProductStore;

/// Repository trait for Product persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// All products in insertion order
    async fn list(&self) -> ProductResult<Vec<Product>>;

    /// Get a product by ID
    async fn get_by_id(&self, id: &str) -> ProductResult<Option<Product>>;

    /// Append a new product
    async fn create(&self, product: Product) -> ProductResult<Product>;

    /// Replace the product with the same id in place.
    ///
    /// Returns `None` when no product has that id.
    async fn update(&self, product: Product) -> ProductResult<Option<Product>>;

    /// Delete a product by ID, returning whether it existed
    async fn delete(&self, id: &str) -> ProductResult<bool>;
}

/// In-memory implementation of ProductRepository.
///
/// Lookups share a read guard; every find-then-mutate sequence runs under a
/// single write guard so concurrent requests cannot interleave between the
/// lookup and the mutation.
#[derive(Debug, Default, Clone)]
pub struct InMemoryProductRepository {
    store: Arc<RwLock<ProductStore>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.store.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.store.read().await.is_empty()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn list(&self) -> ProductResult<Vec<Product>> {
        let store = self.store.read().await;
        Ok(store.list().to_vec())
    }

    async fn get_by_id(&self, id: &str) -> ProductResult<Option<Product>> {
        let store = self.store.read().await;
        Ok(store.find_by_id(id).cloned())
    }

    async fn create(&self, product: Product) -> ProductResult<Product> {
        let mut store = self.store.write().await;
        store.append(product.clone());

        tracing::info!(product_id = %product.id, "Created product");
        Ok(product)
    }

    async fn update(&self, product: Product) -> ProductResult<Option<Product>> {
        let mut store = self.store.write().await;

        let Some(index) = store.find_index_by_id(&product.id) else {
            return Ok(None);
        };
        store.replace_at(index, product.clone());

        tracing::info!(product_id = %product.id, "Updated product");
        Ok(Some(product))
    }

    async fn delete(&self, id: &str) -> ProductResult<bool> {
        let mut store = self.store.write().await;

        let removed = store
            .find_index_by_id(id)
            .and_then(|index| store.remove_at(index))
            .is_some();

        if removed {
            tracing::info!(product_id = %id, "Deleted product");
        }
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProductInput;

    fn input(name: &str, category: &str) -> ProductInput {
        ProductInput {
            name: name.to_string(),
            description: format!("{name} description"),
            price: 9.99,
            category: category.to_string(),
            in_stock: true,
        }
    }

    #[tokio::test]
    async fn test_create_and_get() {
        let repo = InMemoryProductRepository::new();
        let product = repo
            .create(Product::new(input("Pen", "Stationery")))
            .await
            .unwrap();

        let found = repo.get_by_id(&product.id).await.unwrap();
        assert_eq!(found, Some(product));
        assert_eq!(repo.len().await, 1);
    }

    #[tokio::test]
    async fn test_list_preserves_insertion_order() {
        let repo = InMemoryProductRepository::new();
        for name in ["A", "B", "C"] {
            repo.create(Product::new(input(name, "Misc"))).await.unwrap();
        }

        let names: Vec<String> = repo
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(names, ["A", "B", "C"]);
    }

    #[tokio::test]
    async fn test_update_replaces_in_place() {
        let repo = InMemoryProductRepository::new();
        let first = repo.create(Product::new(input("A", "Misc"))).await.unwrap();
        repo.create(Product::new(input("B", "Misc"))).await.unwrap();

        let replacement = Product::with_id(first.id.clone(), input("A2", "Tools"));
        let updated = repo.update(replacement.clone()).await.unwrap();

        assert_eq!(updated, Some(replacement));
        let list = repo.list().await.unwrap();
        assert_eq!(list[0].name, "A2");
        assert_eq!(list[0].id, first.id);
        assert_eq!(list[1].name, "B");
    }

    #[tokio::test]
    async fn test_update_unknown_id() {
        let repo = InMemoryProductRepository::new();
        let ghost = Product::with_id("missing".into(), input("Ghost", "Misc"));

        assert_eq!(repo.update(ghost).await.unwrap(), None);
        assert!(repo.is_empty().await);
    }

    #[tokio::test]
    async fn test_delete() {
        let repo = InMemoryProductRepository::new();
        let product = repo.create(Product::new(input("Pen", "Misc"))).await.unwrap();

        assert!(repo.delete(&product.id).await.unwrap());
        assert!(!repo.delete(&product.id).await.unwrap());
        assert!(repo.get_by_id(&product.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_concurrent_creates_are_all_kept() {
        let repo = InMemoryProductRepository::new();

        let tasks: Vec<_> = (0..32)
            .map(|i| {
                let repo = repo.clone();
                tokio::spawn(async move {
                    repo.create(Product::new(input(&format!("P{i}"), "Misc")))
                        .await
                        .unwrap()
                })
            })
            .collect();
        for task in tasks {
            task.await.unwrap();
        }

        assert_eq!(repo.len().await, 32);
    }
}
