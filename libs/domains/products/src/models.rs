use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

pub const DEFAULT_PAGE: usize = 1;
pub const DEFAULT_LIMIT: usize = 10;

/// Product entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Server-generated identifier, immutable after creation
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub in_stock: bool,
}

/// Business fields of a product, as accepted by create and update.
///
/// Built only by [`crate::validation::validate`]; every field is required.
#[derive(Debug, Clone, PartialEq, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductInput {
    #[validate(length(min = 1))]
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub in_stock: bool,
}

impl Product {
    /// Create a new product with a freshly generated id
    pub fn new(input: ProductInput) -> Self {
        Self::with_id(Uuid::now_v7().to_string(), input)
    }

    /// Build a product that keeps an existing id; used for full replacement.
    pub fn with_id(id: String, input: ProductInput) -> Self {
        Self {
            id,
            name: input.name,
            description: input.description,
            price: input.price,
            category: input.category,
            in_stock: input.in_stock,
        }
    }
}

/// Query parameters for listing products.
///
/// `page` and `limit` are kept as raw strings so that a non-numeric value
/// falls back to the default instead of rejecting the request.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListQuery {
    /// Case-insensitive category filter
    pub category: Option<String>,
    /// 1-based page number (default 1)
    #[param(value_type = Option<u32>)]
    pub page: Option<String>,
    /// Page size (default 10)
    #[param(value_type = Option<u32>)]
    pub limit: Option<String>,
}

impl ListQuery {
    pub fn page(&self) -> usize {
        positive_or(self.page.as_deref(), DEFAULT_PAGE)
    }

    pub fn limit(&self) -> usize {
        positive_or(self.limit.as_deref(), DEFAULT_LIMIT)
    }

    /// Category filter, ignoring an empty value
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref().filter(|c| !c.is_empty())
    }
}

fn positive_or(raw: Option<&str>, default: usize) -> usize {
    raw.and_then(|value| value.trim().parse::<usize>().ok())
        .filter(|value| *value > 0)
        .unwrap_or(default)
}

/// Pagination envelope returned by the list endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProductPage {
    pub page: usize,
    pub limit: usize,
    /// Number of products matching the filter, before pagination
    pub total: usize,
    pub data: Vec<Product>,
}

/// Search query parameters
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchQuery {
    /// Case-insensitive substring matched against product names (required)
    pub name: Option<String>,
}

/// Product count per exact category string
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct CategoryStats(pub BTreeMap<String, usize>);
