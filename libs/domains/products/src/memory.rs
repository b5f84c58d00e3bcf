//! In-memory product store backing the handler tests.

use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

use crate::error::{ProductError, ProductResult};
use crate::models::{CreateProduct, Product};
use crate::repository::ProductRepository;

#[derive(Default)]
struct Store {
    products: BTreeMap<i32, Product>,
    /// Last id handed out; ids are never reused, even after deletes
    last_id: i32,
}

#[derive(Default)]
pub struct InMemoryProductRepository {
    store: RwLock<Store>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn create(&self, input: CreateProduct) -> ProductResult<Product> {
        let mut store = self.store.write().await;
        store.last_id += 1;

        let product = Product {
            id: store.last_id,
            name: input.name,
            price: input.price,
            availability: true,
        };
        store.products.insert(product.id, product.clone());

        tracing::info!(product_id = product.id, "Created product");
        Ok(product)
    }

    async fn get_by_id(&self, id: i32) -> ProductResult<Option<Product>> {
        Ok(self.store.read().await.products.get(&id).cloned())
    }

    async fn list(&self) -> ProductResult<Vec<Product>> {
        Ok(self
            .store
            .read()
            .await
            .products
            .values()
            .rev()
            .cloned()
            .collect())
    }

    async fn update(&self, product: Product) -> ProductResult<Product> {
        let mut store = self.store.write().await;
        let Some(slot) = store.products.get_mut(&product.id) else {
            return Err(ProductError::NotFound(product.id.to_string()));
        };
        *slot = product.clone();

        tracing::info!(product_id = product.id, "Updated product");
        Ok(product)
    }

    async fn delete(&self, id: i32) -> ProductResult<bool> {
        let removed = self.store.write().await.products.remove(&id).is_some();
        if removed {
            tracing::info!(product_id = id, "Deleted product");
        }
        Ok(removed)
    }
}
