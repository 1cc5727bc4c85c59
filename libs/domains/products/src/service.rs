use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::instrument;

use crate::error::{ProductError, ProductResult};
use crate::models::{CategoryStats, ListQuery, Product, ProductPage};
use crate::repository::ProductRepository;
use crate::validation::validate;

/// Service layer for Product business logic
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> Clone for ProductService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R: ProductRepository> ProductService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// List products, optionally filtered by category, one page at a time.
    ///
    /// `total` counts every product that matches the filter. A page past the
    /// end yields an empty `data` array.
    #[instrument(skip(self, query), fields(category = ?query.category()))]
    pub async fn list_products(&self, query: &ListQuery) -> ProductResult<ProductPage> {
        let page = query.page();
        let limit = query.limit();

        let mut products = self.repository.list().await?;
        if let Some(category) = query.category() {
            let category = category.to_lowercase();
            products.retain(|p| p.category.to_lowercase() == category);
        }

        let total = products.len();
        let start = (page - 1).saturating_mul(limit);
        let data = products.into_iter().skip(start).take(limit).collect();

        Ok(ProductPage {
            page,
            limit,
            total,
            data,
        })
    }

    /// Get a product by ID
    #[instrument(skip(self))]
    pub async fn get_product(&self, id: &str) -> ProductResult<Product> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or_else(|| ProductError::NotFound(id.to_string()))
    }

    /// Validate a payload and store it as a new product with a fresh id
    #[instrument(skip(self, payload))]
    pub async fn create_product(&self, payload: &Value) -> ProductResult<Product> {
        let input = validate(payload)?;
        self.repository.create(Product::new(input)).await
    }

    /// Replace every business field of an existing product.
    ///
    /// The payload is validated before the product is looked up, so an
    /// invalid body is reported even when the id is unknown.
    #[instrument(skip(self, payload))]
    pub async fn update_product(&self, id: &str, payload: &Value) -> ProductResult<Product> {
        let input = validate(payload)?;

        self.repository
            .update(Product::with_id(id.to_string(), input))
            .await?
            .ok_or_else(|| ProductError::NotFound(id.to_string()))
    }

    /// Delete a product
    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: &str) -> ProductResult<()> {
        let deleted = self.repository.delete(id).await?;

        if !deleted {
            return Err(ProductError::NotFound(id.to_string()));
        }

        Ok(())
    }

    /// Products whose name contains `name`, ignoring case, in insertion order
    #[instrument(skip(self))]
    pub async fn search_products(&self, name: Option<&str>) -> ProductResult<Vec<Product>> {
        let needle = name
            .filter(|n| !n.is_empty())
            .ok_or(ProductError::MissingQueryParameter("name"))?
            .to_lowercase();

        let matches = self
            .repository
            .list()
            .await?
            .into_iter()
            .filter(|p| p.name.to_lowercase().contains(&needle))
            .collect();

        Ok(matches)
    }

    /// Count products per exact (case-sensitive) category
    #[instrument(skip(self))]
    pub async fn category_stats(&self) -> ProductResult<CategoryStats> {
        let mut counts = BTreeMap::new();
        for product in self.repository.list().await? {
            *counts.entry(product.category).or_insert(0) += 1;
        }
        Ok(CategoryStats(counts))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::{InMemoryProductRepository, MockProductRepository};
    use serde_json::json;

    fn product(name: &str, category: &str) -> Product {
        Product {
            id: format!("id-{name}"),
            name: name.to_string(),
            description: String::new(),
            price: 1.0,
            category: category.to_string(),
            in_stock: true,
        }
    }

    fn payload(name: &str, category: &str) -> Value {
        json!({
            "name": name,
            "description": "desc",
            "price": 1.0,
            "category": category,
            "inStock": true
        })
    }

    fn list_query(category: Option<&str>, page: Option<&str>, limit: Option<&str>) -> ListQuery {
        ListQuery {
            category: category.map(str::to_string),
            page: page.map(str::to_string),
            limit: limit.map(str::to_string),
        }
    }

    fn seeded(products: Vec<Product>) -> ProductService<MockProductRepository> {
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_list()
            .returning(move || Ok(products.clone()));
        ProductService::new(mock_repo)
    }

    #[tokio::test]
    async fn test_list_paginates_after_filtering() {
        let products = (1..=12)
            .map(|i| product(&format!("P{i}"), if i % 2 == 0 { "Even" } else { "Odd" }))
            .collect();
        let service = seeded(products);

        let page = service
            .list_products(&list_query(Some("even"), Some("2"), Some("4")))
            .await
            .unwrap();

        assert_eq!((page.page, page.limit, page.total), (2, 4, 6));
        let names: Vec<_> = page.data.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["P10", "P12"]);
    }

    #[tokio::test]
    async fn test_list_page_past_end_is_empty() {
        let service = seeded(vec![product("A", "Misc"), product("B", "Misc")]);

        let page = service
            .list_products(&list_query(None, Some("5"), None))
            .await
            .unwrap();

        assert_eq!(page.total, 2);
        assert!(page.data.is_empty());
    }

    #[tokio::test]
    async fn test_list_huge_page_does_not_overflow() {
        let service = seeded(vec![product("A", "Misc")]);
        let huge = usize::MAX.to_string();

        let page = service
            .list_products(&list_query(None, Some(&huge), Some(&huge)))
            .await
            .unwrap();

        assert!(page.data.is_empty());
        assert_eq!(page.total, 1);
    }

    #[tokio::test]
    async fn test_invalid_update_never_touches_repository() {
        // No expectations: any repository call would panic.
        let service = ProductService::new(MockProductRepository::new());

        let result = service
            .update_product("missing", &json!({ "name": "" }))
            .await;

        assert!(matches!(result, Err(ProductError::Validation(_))));
    }

    #[tokio::test]
    async fn test_invalid_create_never_touches_repository() {
        let service = ProductService::new(MockProductRepository::new());

        let result = service.create_product(&json!("not an object")).await;

        assert!(matches!(result, Err(ProductError::Validation(_))));
    }

    #[tokio::test]
    async fn test_create_stores_validated_product() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo.expect_create().times(1).returning(Ok);

        let service = ProductService::new(mock_repo);
        let mut body = payload("Pen", "Stationery");
        body["id"] = json!("client-id");

        let created = service.create_product(&body).await.unwrap();

        assert_eq!(created.name, "Pen");
        assert_ne!(created.id, "client-id");
    }

    #[tokio::test]
    async fn test_update_unknown_id_is_not_found() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo.expect_update().times(1).returning(|_| Ok(None));

        let service = ProductService::new(mock_repo);
        let result = service
            .update_product("missing", &payload("Pen", "Stationery"))
            .await;

        assert!(matches!(result, Err(ProductError::NotFound(id)) if id == "missing"));
    }

    #[tokio::test]
    async fn test_update_keeps_id() {
        let service = ProductService::new(InMemoryProductRepository::new());
        let created = service
            .create_product(&payload("Pen", "Stationery"))
            .await
            .unwrap();

        let mut body = payload("Marker", "Art");
        body["id"] = json!("other");
        let updated = service.update_product(&created.id, &body).await.unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.name, "Marker");
        assert_eq!(service.get_product(&created.id).await.unwrap(), updated);
    }

    #[tokio::test]
    async fn test_delete_unknown_id_is_not_found() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo.expect_delete().times(1).returning(|_| Ok(false));

        let service = ProductService::new(mock_repo);

        assert!(matches!(
            service.delete_product("missing").await,
            Err(ProductError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_search_is_case_insensitive_substring() {
        let service = seeded(vec![
            product("Blue Pen", "Stationery"),
            product("Notebook", "Stationery"),
            product("PENCIL", "Stationery"),
        ]);

        let found = service.search_products(Some("pen")).await.unwrap();

        let names: Vec<_> = found.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["Blue Pen", "PENCIL"]);
    }

    #[tokio::test]
    async fn test_search_requires_name() {
        let service = ProductService::new(MockProductRepository::new());

        for name in [None, Some("")] {
            assert!(matches!(
                service.search_products(name).await,
                Err(ProductError::MissingQueryParameter("name"))
            ));
        }
    }

    #[tokio::test]
    async fn test_search_without_matches_is_empty() {
        let service = seeded(vec![product("Notebook", "Stationery")]);

        assert!(service.search_products(Some("laptop")).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_stats_count_exact_categories() {
        let service = seeded(vec![
            product("A", "Tools"),
            product("B", "tools"),
            product("C", "Tools"),
        ]);

        let stats = service.category_stats().await.unwrap();

        assert_eq!(stats.0.get("Tools"), Some(&2));
        assert_eq!(stats.0.get("tools"), Some(&1));
        assert_eq!(stats.0.values().sum::<usize>(), 3);
    }

    #[tokio::test]
    async fn test_stats_on_empty_store() {
        let service = seeded(Vec::new());
        assert_eq!(service.category_stats().await.unwrap(), CategoryStats::default());
    }
}
