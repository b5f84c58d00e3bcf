//! OpenAPI documentation configuration

use utoipa::OpenApi;

/// Combined OpenAPI documentation for Products API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Products REST API",
        version = "0.1.0",
        description = "Product inventory management over REST, backed by PostgreSQL",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:4000", description = "Local development server")
    ),
    nest(
        (path = "/api/products", api = domain_products::ApiDoc)
    ),
    tags(
        (name = "Products", description = "Product management endpoints")
    )
)]
pub struct ApiDoc;
