//! Integration tests for Products domain
//!
//! These tests use real PostgreSQL via testcontainers to ensure:
//! - SeaORM queries and mappings work against the migrated schema
//! - Table constraints back up the API validation
//! - Ids come from the serial column and are never reused

use domain_products::*;
use sea_orm::ConnectionTrait;
use test_utils::{TestDataBuilder, TestDatabase, assertions::*};

// ============================================================================
// Repository Tests
// ============================================================================

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_create_and_get_product() {
    let db = TestDatabase::new().await;
    let repo = PgProductRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("create_and_get");

    let input = CreateProduct {
        name: builder.name("product", "main"),
        price: builder.price(),
    };

    let created = repo.create(input.clone()).await.unwrap();

    assert!(created.id > 0);
    assert_eq!(created.name, input.name);
    assert_price_eq(created.price, input.price, "created price");
    assert!(created.availability, "new products start available");

    let retrieved = repo.get_by_id(created.id).await.unwrap();
    let retrieved = assert_some(retrieved, "product should exist");
    assert_eq!(retrieved, created);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_list_orders_by_id_descending() {
    let db = TestDatabase::new().await;
    let repo = PgProductRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("list_order");

    for suffix in ["a", "b", "c"] {
        repo.create(CreateProduct {
            name: builder.name("product", suffix),
            price: builder.price(),
        })
        .await
        .unwrap();
    }

    let ids: Vec<_> = repo.list().await.unwrap().iter().map(|p| p.id).collect();
    assert_eq!(ids, [3, 2, 1]);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_update_persists_all_fields() {
    let db = TestDatabase::new().await;
    let repo = PgProductRepository::new(db.connection());

    let mut product = repo
        .create(CreateProduct {
            name: "Monitor".to_string(),
            price: 300.0,
        })
        .await
        .unwrap();

    product.name = "Monitor Curvo".to_string();
    product.price = 450.5;
    product.availability = false;

    let updated = repo.update(product.clone()).await.unwrap();
    assert_eq!(updated, product);

    let stored = assert_some(repo.get_by_id(product.id).await.unwrap(), "stored product");
    assert_eq!(stored, product);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_update_missing_product_is_not_found() {
    let db = TestDatabase::new().await;
    let repo = PgProductRepository::new(db.connection());

    let result = repo
        .update(Product {
            id: 2000,
            name: "Monitor".to_string(),
            price: 300.0,
            availability: true,
        })
        .await;

    assert!(matches!(result, Err(ProductError::NotFound(_))));
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_delete_and_id_not_reused() {
    let db = TestDatabase::new().await;
    let repo = PgProductRepository::new(db.connection());

    let first = repo
        .create(CreateProduct {
            name: "Monitor".to_string(),
            price: 300.0,
        })
        .await
        .unwrap();

    assert!(repo.delete(first.id).await.unwrap());
    assert!(!repo.delete(first.id).await.unwrap());
    assert!(repo.get_by_id(first.id).await.unwrap().is_none());

    let second = repo
        .create(CreateProduct {
            name: "Teclado".to_string(),
            price: 45.0,
        })
        .await
        .unwrap();
    assert!(second.id > first.id);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_truncate_restarts_ids() {
    let db = TestDatabase::new().await;
    let repo = PgProductRepository::new(db.connection());

    repo.create(CreateProduct {
        name: "Monitor".to_string(),
        price: 300.0,
    })
    .await
    .unwrap();

    db.truncate_products().await;

    assert!(repo.list().await.unwrap().is_empty());
    let created = repo
        .create(CreateProduct {
            name: "Teclado".to_string(),
            price: 45.0,
        })
        .await
        .unwrap();
    assert_eq!(created.id, 1);
}

// ============================================================================
// Constraint Tests
// ============================================================================

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_price_constraint_rejects_non_positive() {
    let db = TestDatabase::new().await;

    let result = db
        .connection
        .execute_unprepared("INSERT INTO products (name, price) VALUES ('Monitor', 0)")
        .await;

    assert!(result.is_err(), "price 0 must violate products_price_positive");
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_name_constraint_rejects_blank() {
    let db = TestDatabase::new().await;

    let result = db
        .connection
        .execute_unprepared("INSERT INTO products (name, price) VALUES ('   ', 10)")
        .await;

    assert!(result.is_err(), "blank name must violate products_name_not_blank");
}

// ============================================================================
// Service Tests
// ============================================================================

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_service_toggle_round_trip() {
    let db = TestDatabase::new().await;
    let service = ProductService::new(PgProductRepository::new(db.connection()));

    let created = service
        .create_product(CreateProduct {
            name: "Monitor".to_string(),
            price: 300.0,
        })
        .await
        .unwrap();

    let toggled = service.toggle_availability(created.id).await.unwrap();
    assert!(!toggled.availability);
    assert_eq!(toggled.name, created.name);

    let toggled = service.toggle_availability(created.id).await.unwrap();
    assert!(toggled.availability);
}
