//! Catalog service.
//!
//! The read path deliberately prefers availability over consistency: a
//! storage outage yields the well-known placeholder record instead of an
//! error, so a visitor never sees a broken page for a catalog read.

use sqlx::SqlitePool;

use myshop_core::Product;

use crate::db::products::ProductRepository;

/// Catalog service over the product repository.
pub struct CatalogService<'a> {
    products: ProductRepository<'a>,
}

impl<'a> CatalogService<'a> {
    /// Create a new catalog service.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self {
            products: ProductRepository::new(pool),
        }
    }

    /// List the full catalog in storage order.
    ///
    /// Infallible by design: if the storage backend is unreachable (or a
    /// stored row is corrupt) this returns exactly one placeholder record
    /// and logs the outage, rather than surfacing a hard error.
    pub async fn list_products(&self) -> Vec<Product> {
        match self.products.list().await {
            Ok(products) => products,
            Err(e) => {
                tracing::warn!(error = %e, "catalog store unreachable, serving placeholder");
                vec![Product::placeholder()]
            }
        }
    }
}
