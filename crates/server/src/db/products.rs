//! Product repository for catalog reads and seeding.

use std::str::FromStr;

use rust_decimal::Decimal;
use sqlx::SqlitePool;

use myshop_core::{Price, Product, ProductId};

use super::RepositoryError;

/// Row shape for the `products` table.
///
/// Prices are stored as TEXT and parsed into [`Price`] on read; bad
/// stored values surface as `DataCorruption` rather than panicking.
#[derive(sqlx::FromRow)]
struct ProductRow {
    id: i64,
    name: String,
    price: String,
    description: String,
    image: String,
    category: Option<String>,
}

impl TryFrom<ProductRow> for Product {
    type Error = RepositoryError;

    fn try_from(row: ProductRow) -> Result<Self, Self::Error> {
        let amount = Decimal::from_str(&row.price).map_err(|e| {
            RepositoryError::DataCorruption(format!("invalid price in database: {e}"))
        })?;
        let price = Price::new(amount).map_err(|e| {
            RepositoryError::DataCorruption(format!("invalid price in database: {e}"))
        })?;

        Ok(Self {
            id: ProductId::new(row.id),
            name: row.name,
            price,
            description: row.description,
            image: row.image,
            category: row.category,
        })
    }
}

/// Repository for product database operations.
pub struct ProductRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> ProductRepository<'a> {
    /// Create a new product repository.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List the full catalog in storage order.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails and
    /// `RepositoryError::DataCorruption` if a stored price is invalid.
    pub async fn list(&self) -> Result<Vec<Product>, RepositoryError> {
        let rows: Vec<ProductRow> = sqlx::query_as(
            r"
            SELECT id, name, price, description, image, category
            FROM products
            ORDER BY id
            ",
        )
        .fetch_all(self.pool)
        .await?;

        rows.into_iter().map(Product::try_from).collect()
    }

    /// Number of products in the catalog.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn count(&self) -> Result<i64, RepositoryError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM products")
            .fetch_one(self.pool)
            .await?;
        Ok(count)
    }

    /// Insert a product, returning it with its assigned id.
    ///
    /// Used by the operator CLI for seeding; the HTTP surface has no
    /// write path for the catalog.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn insert(
        &self,
        name: &str,
        price: Price,
        description: &str,
        image: &str,
        category: Option<&str>,
    ) -> Result<Product, RepositoryError> {
        let row: ProductRow = sqlx::query_as(
            r"
            INSERT INTO products (name, price, description, image, category)
            VALUES (?1, ?2, ?3, ?4, ?5)
            RETURNING id, name, price, description, image, category
            ",
        )
        .bind(name)
        .bind(price.amount().to_string())
        .bind(description)
        .bind(image)
        .bind(category)
        .fetch_one(self.pool)
        .await?;

        row.try_into()
    }
}
