//! Product Service - Business logic layer

use std::borrow::Cow;
use std::sync::Arc;

use tracing::instrument;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::error::{ProductError, ProductResult};
use crate::models::{normalize, Product, ProductDraft};
use crate::repository::ProductRepository;

/// Violation message for the cross-record duplicate rule.
pub const DUPLICATE_TITLE_BRAND_MESSAGE: &str =
    "A product with the same title and brand already exists.";

/// Product service providing business logic operations
///
/// The service layer handles validation (field rules plus the cross-record
/// duplicate rule) and orchestrates repository operations.
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    /// Create a new ProductService with the given repository
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Full ordered catalog.
    #[instrument(skip(self))]
    pub async fn list_products(&self) -> ProductResult<Vec<Product>> {
        self.repository.list_all().await
    }

    /// Product by id, or None if absent.
    #[instrument(skip(self))]
    pub async fn get_product(&self, id: i64) -> ProductResult<Option<Product>> {
        self.repository.get_by_id(id).await
    }

    /// Validate and store a new product; the store assigns the id.
    #[instrument(skip(self, draft), fields(title = %draft.title))]
    pub async fn create_product(&self, draft: ProductDraft) -> ProductResult<Product> {
        draft.validate()?;
        self.check_duplicate(&draft, None).await?;
        self.repository.create(draft).await
    }

    /// Validate and replace an existing product in full.
    #[instrument(skip(self, draft), fields(title = %draft.title))]
    pub async fn update_product(&self, id: i64, draft: ProductDraft) -> ProductResult<Product> {
        draft.validate()?;
        // A product may keep its own (title, brand) pair
        self.check_duplicate(&draft, Some(id)).await?;
        self.repository.update(id, draft).await
    }

    /// Delete a product by id.
    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: i64) -> ProductResult<()> {
        self.repository.delete(id).await
    }

    /// Cross-record rule: no other product (different id) may carry the
    /// same normalized (title, brand) pair.
    ///
    /// Contract: if the catalog cannot be read or parsed here, the rule is
    /// skipped silently - validation never fails harder than "no duplicate
    /// detected" due to storage trouble. Storage errors stay fatal for the
    /// store operations themselves.
    async fn check_duplicate(
        &self,
        draft: &ProductDraft,
        exclude_id: Option<i64>,
    ) -> ProductResult<()> {
        let products = match self.repository.list_all().await {
            Ok(products) => products,
            Err(e) => {
                tracing::debug!("Skipping duplicate check, catalog unreadable: {}", e);
                return Ok(());
            }
        };

        let title = normalize(Some(&draft.title));
        let brand = normalize(draft.brand.as_deref());

        let duplicate_found = products.iter().any(|p| {
            Some(p.id) != exclude_id
                && normalize(Some(&p.title)) == title
                && normalize(p.brand.as_deref()) == brand
        });

        if duplicate_found {
            let mut errors = ValidationErrors::new();
            let mut error = ValidationError::new("duplicate");
            error.message = Some(Cow::Borrowed(DUPLICATE_TITLE_BRAND_MESSAGE));
            errors.add("title", error.clone());
            errors.add("brand", error);
            return Err(ProductError::Validation(errors));
        }

        Ok(())
    }
}
