use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, QueryOrder};

use crate::{
    entity,
    error::{ProductError, ProductResult},
    models::{CreateProduct, Product},
    repository::ProductRepository,
};

/// PostgreSQL-backed product repository.
///
/// The connection pool is created once at startup and injected here.
pub struct PgProductRepository {
    db: DatabaseConnection,
}

impl PgProductRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn create(&self, input: CreateProduct) -> ProductResult<Product> {
        let active_model: entity::ActiveModel = input.into();

        let model = active_model.insert(&self.db).await.inspect_err(|e| {
            tracing::error!(error = %e, "Failed to insert product");
        })?;

        tracing::info!(product_id = model.id, "Created product");
        Ok(model.into())
    }

    async fn get_by_id(&self, id: i32) -> ProductResult<Option<Product>> {
        let model = entity::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(Into::into))
    }

    async fn list(&self) -> ProductResult<Vec<Product>> {
        let models = entity::Entity::find()
            .order_by_desc(entity::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn update(&self, product: Product) -> ProductResult<Product> {
        let id = product.id;
        let active_model: entity::ActiveModel = product.into();

        let model = match active_model.update(&self.db).await {
            Ok(model) => model,
            Err(DbErr::RecordNotUpdated) => return Err(ProductError::NotFound(id.to_string())),
            Err(e) => {
                tracing::error!(product_id = id, error = %e, "Failed to update product");
                return Err(e.into());
            }
        };

        tracing::info!(product_id = id, "Updated product");
        Ok(model.into())
    }

    async fn delete(&self, id: i32) -> ProductResult<bool> {
        let result = entity::Entity::delete_by_id(id).exec(&self.db).await?;

        if result.rows_affected > 0 {
            tracing::info!(product_id = id, "Deleted product");
            Ok(true)
        } else {
            Ok(false)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    fn model(id: i32, name: &str, price: f64, availability: bool) -> entity::Model {
        entity::Model {
            id,
            name: name.to_string(),
            price,
            availability,
        }
    }

    #[tokio::test]
    async fn test_create_returns_inserted_row() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![model(1, "Mouse testing", 500.0, true)]])
            .into_connection();
        let repo = PgProductRepository::new(db);

        let product = repo
            .create(CreateProduct {
                name: "Mouse testing".to_string(),
                price: 500.0,
            })
            .await
            .unwrap();

        assert_eq!(product.id, 1);
        assert!(product.availability);
    }

    #[tokio::test]
    async fn test_get_by_id_missing() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<entity::Model>::new()])
            .into_connection();
        let repo = PgProductRepository::new(db);

        assert!(repo.get_by_id(42).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_maps_rows_in_order() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![
                model(2, "Teclado", 45.0, true),
                model(1, "Monitor", 300.0, false),
            ]])
            .into_connection();
        let repo = PgProductRepository::new(db);

        let products = repo.list().await.unwrap();
        let ids: Vec<_> = products.iter().map(|p| p.id).collect();
        assert_eq!(ids, [2, 1]);
        assert!(!products[1].availability);
    }

    #[tokio::test]
    async fn test_update_missing_row_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<entity::Model>::new()])
            .into_connection();
        let repo = PgProductRepository::new(db);

        let result = repo
            .update(Product {
                id: 5,
                name: "Monitor".to_string(),
                price: 10.0,
                availability: false,
            })
            .await;

        assert!(matches!(result, Err(ProductError::NotFound(id)) if id == "5"));
    }

    #[tokio::test]
    async fn test_delete_reports_rows_affected() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([
                MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 1,
                },
                MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 0,
                },
            ])
            .into_connection();
        let repo = PgProductRepository::new(db);

        assert!(repo.delete(1).await.unwrap());
        assert!(!repo.delete(1).await.unwrap());
    }

    #[tokio::test]
    async fn test_query_error_surfaces_as_database_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom("connection reset".to_string())])
            .into_connection();
        let repo = PgProductRepository::new(db);

        assert!(matches!(
            repo.list().await,
            Err(ProductError::Database(_))
        ));
    }
}
