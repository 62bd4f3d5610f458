//! JSON-file implementation of ProductRepository.
//!
//! The whole catalog lives in one file. Every operation re-reads and
//! re-parses it; every mutation rewrites it in full. Two guarantees on top
//! of the plain read-modify-write cycle:
//!
//! 1. Mutations serialize through one in-process lock, so concurrent
//!    writers cannot lose each other's updates.
//! 2. Writes land in a sibling temp file first and are renamed into place,
//!    so a crash mid-write cannot leave a half-written catalog.
//!
//! Reads take no lock; a read racing a mutation sees either the old or the
//! new catalog, never a torn one.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::instrument;

use crate::error::{ProductError, ProductResult};
use crate::models::{Catalog, Product, ProductDraft};
use crate::repository::ProductRepository;

/// ProductRepository backed by a single JSON catalog file.
pub struct JsonFileProductRepository {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonFileProductRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Seed an empty catalog if the file does not exist yet.
    ///
    /// The repository itself treats a missing file as an error on every
    /// operation, so deployments call this once at startup.
    pub async fn ensure_exists(&self) -> ProductResult<()> {
        if tokio::fs::try_exists(&self.path).await? {
            return Ok(());
        }
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }
        tracing::info!(path = %self.path.display(), "Seeding empty product catalog");
        self.write_catalog(&Catalog::default()).await
    }

    async fn read_catalog(&self) -> ProductResult<Catalog> {
        if !tokio::fs::try_exists(&self.path).await? {
            return Err(ProductError::StorageUnavailable(self.path.clone()));
        }

        let bytes = tokio::fs::read(&self.path).await?;
        serde_json::from_slice(&bytes).map_err(|e| ProductError::MalformedData(e.to_string()))
    }

    async fn write_catalog(&self, catalog: &Catalog) -> ProductResult<()> {
        let json = serde_json::to_vec_pretty(catalog)
            .map_err(|e| ProductError::MalformedData(e.to_string()))?;

        // Temp file + rename keeps the catalog intact across a crash mid-write
        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, &json).await?;
        tokio::fs::rename(&tmp, &self.path).await?;
        Ok(())
    }
}

#[async_trait]
impl ProductRepository for JsonFileProductRepository {
    #[instrument(skip(self))]
    async fn list_all(&self) -> ProductResult<Vec<Product>> {
        Ok(self.read_catalog().await?.products)
    }

    #[instrument(skip(self))]
    async fn get_by_id(&self, id: i64) -> ProductResult<Option<Product>> {
        let catalog = self.read_catalog().await?;
        Ok(catalog.products.into_iter().find(|p| p.id == id))
    }

    #[instrument(skip(self, draft), fields(title = %draft.title))]
    async fn create(&self, draft: ProductDraft) -> ProductResult<Product> {
        let _guard = self.write_lock.lock().await;

        let mut catalog = self.read_catalog().await?;
        let product = draft.into_product(catalog.next_id());
        catalog.products.push(product.clone());
        self.write_catalog(&catalog).await?;

        tracing::info!(id = product.id, "Product created");
        Ok(product)
    }

    #[instrument(skip(self, draft), fields(title = %draft.title))]
    async fn update(&self, id: i64, draft: ProductDraft) -> ProductResult<Product> {
        let _guard = self.write_lock.lock().await;

        let mut catalog = self.read_catalog().await?;
        let index = catalog
            .products
            .iter()
            .position(|p| p.id == id)
            .ok_or(ProductError::NotFound(id))?;

        // Whole-record replace, id forced to the path id
        let product = draft.into_product(id);
        catalog.products[index] = product.clone();
        self.write_catalog(&catalog).await?;

        tracing::info!(id, "Product updated");
        Ok(product)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> ProductResult<()> {
        let _guard = self.write_lock.lock().await;

        let mut catalog = self.read_catalog().await?;
        let index = catalog
            .products
            .iter()
            .position(|p| p.id == id)
            .ok_or(ProductError::NotFound(id))?;

        catalog.products.remove(index);
        self.write_catalog(&catalog).await?;

        tracing::info!(id, "Product deleted");
        Ok(())
    }
}
