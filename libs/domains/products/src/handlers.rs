//! HTTP handlers for Products API
//!
//! Each handler runs its route's validation chain first, so a malformed id
//! or body is rejected with 400 before the service is called.

use axum::{
    Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};
use axum_helpers::{
    AppError, DataResponse, ErrorResponse, FieldError, JsonBody, Location, RequestInput,
    ValidationErrorResponse,
    errors::responses::{
        BadRequestJsonResponse, BadRequestValidationResponse, InternalServerErrorResponse,
        NotFoundResponse, PayloadTooLargeResponse,
    },
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::ProductError;
use crate::models::{CreateProduct, Product, UpdateProduct};
use crate::repository::ProductRepository;
use crate::service::ProductService;
use crate::validation::{
    CREATE_RULES, ID_RULES, UPDATE_RULES, create_command, parse_id, update_command,
};

pub const PRODUCT_DELETED: &str = "Producto Eliminado";

/// OpenAPI documentation for Products API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_products,
        create_product,
        get_product,
        update_product,
        toggle_availability,
        delete_product,
    ),
    components(
        schemas(
            Product, CreateProduct, UpdateProduct,
            ErrorResponse, ValidationErrorResponse, FieldError, Location
        ),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            BadRequestJsonResponse,
            PayloadTooLargeResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Products", description = "Product management endpoints")
    )
)]
pub struct ApiDoc;

/// Create the products router with all HTTP endpoints
pub fn router<R: ProductRepository + 'static>(service: ProductService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_products).post(create_product))
        .route(
            "/{id}",
            get(get_product)
                .put(update_product)
                .patch(toggle_availability)
                .delete(delete_product),
        )
        .with_state(shared_service)
}

/// Run the id chain and resolve the path id.
fn checked_id(raw: &str) -> Result<i32, AppError> {
    ID_RULES
        .validate(&RequestInput::new().with_param("id", raw))
        .check()?;

    parse_id(raw).ok_or_else(|| ProductError::NotFound(raw.to_string()).into())
}

/// List all products
#[utoipa::path(
    get,
    path = "",
    tag = "Products",
    responses(
        (status = 200, description = "All products, highest id first", body = DataResponse<Vec<Product>>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_products<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
) -> Result<DataResponse<Vec<Product>>, AppError> {
    let products = service.list_products().await?;
    Ok(DataResponse::new(products))
}

/// Get a product by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product found", body = DataResponse<Product>),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Path(id): Path<String>,
) -> Result<DataResponse<Product>, AppError> {
    let id = checked_id(&id)?;
    let product = service.get_product(id).await?;
    Ok(DataResponse::new(product))
}

/// Create a new product
#[utoipa::path(
    post,
    path = "",
    tag = "Products",
    request_body = CreateProduct,
    responses(
        (status = 201, description = "Product created", body = DataResponse<Product>),
        (status = 400, response = BadRequestValidationResponse),
        (status = 413, response = PayloadTooLargeResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    JsonBody(body): JsonBody,
) -> Result<(StatusCode, DataResponse<Product>), AppError> {
    let input = RequestInput::new().with_body(body);
    CREATE_RULES.validate(&input).check()?;

    let product = service.create_product(create_command(input.body())).await?;
    Ok((StatusCode::CREATED, DataResponse::new(product)))
}

/// Replace a product's name, price and availability
#[utoipa::path(
    put,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    request_body = UpdateProduct,
    responses(
        (status = 200, description = "Product updated", body = DataResponse<Product>),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 413, response = PayloadTooLargeResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Path(id): Path<String>,
    JsonBody(body): JsonBody,
) -> Result<DataResponse<Product>, AppError> {
    let input = RequestInput::new().with_param("id", &id).with_body(body);
    UPDATE_RULES.validate(&input).check()?;

    let id = parse_id(&id).ok_or_else(|| ProductError::NotFound(id.clone()))?;
    let product = service
        .update_product(id, update_command(input.body()))
        .await?;
    Ok(DataResponse::new(product))
}

/// Flip a product's availability
#[utoipa::path(
    patch,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Availability toggled", body = DataResponse<Product>),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn toggle_availability<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Path(id): Path<String>,
) -> Result<DataResponse<Product>, AppError> {
    let id = checked_id(&id)?;
    let product = service.toggle_availability(id).await?;
    Ok(DataResponse::new(product))
}

/// Delete a product
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product deleted, `data` is \"Producto Eliminado\"", body = DataResponse<String>),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Path(id): Path<String>,
) -> Result<DataResponse<&'static str>, AppError> {
    let id = checked_id(&id)?;
    service.delete_product(id).await?;
    Ok(DataResponse::new(PRODUCT_DELETED))
}
