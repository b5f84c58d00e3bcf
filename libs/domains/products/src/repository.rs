use async_trait::async_trait;

use crate::error::ProductResult;
use crate::models::{CreateProduct, Product};

/// Repository trait for Product persistence
///
/// Implemented by [`PgProductRepository`](crate::postgres::PgProductRepository)
/// for PostgreSQL and by
/// [`InMemoryProductRepository`](crate::memory::InMemoryProductRepository).
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Insert a product; the store assigns the id and sets availability to `true`
    async fn create(&self, input: CreateProduct) -> ProductResult<Product>;

    async fn get_by_id(&self, id: i32) -> ProductResult<Option<Product>>;

    /// Every product, highest id first
    async fn list(&self) -> ProductResult<Vec<Product>>;

    /// Overwrite name, price and availability of an existing product
    async fn update(&self, product: Product) -> ProductResult<Product>;

    /// Returns `false` when nothing was deleted
    async fn delete(&self, id: i32) -> ProductResult<bool>;
}
