use async_trait::async_trait;

use crate::error::ProductResult;
use crate::models::{Product, ProductDraft};

/// Repository trait for Product persistence
///
/// Defines the data access interface for the product catalog.
/// Implementations can use different storage backends; the shipped one is
/// a single JSON file re-read on every call.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Full ordered catalog as currently persisted.
    async fn list_all(&self) -> ProductResult<Vec<Product>>;

    /// Product with the given id, or None. Linear scan.
    async fn get_by_id(&self, id: i64) -> ProductResult<Option<Product>>;

    /// Append a new product; the store assigns the id (max existing + 1,
    /// or 1 for an empty catalog). Returns the stored product.
    async fn create(&self, draft: ProductDraft) -> ProductResult<Product>;

    /// Replace the product with the given id in full, forcing its id to
    /// `id` regardless of any id in the draft. `NotFound` if absent.
    async fn update(&self, id: i64, draft: ProductDraft) -> ProductResult<Product>;

    /// Remove the product with the given id. `NotFound` if absent.
    async fn delete(&self, id: i64) -> ProductResult<()>;
}
