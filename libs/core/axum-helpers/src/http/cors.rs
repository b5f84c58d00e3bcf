use axum::http::{HeaderValue, Method, header};
use core_config::cors::CorsConfig;
use std::io;
use std::time::Duration;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing::{info, warn};

/// Creates the CORS layer for the configured frontend origins.
///
/// Requests from an origin outside the list are still served; the browser
/// blocks them because no `Access-Control-Allow-Origin` header is sent back.
/// With no origins configured, no CORS headers are emitted at all.
///
/// - Methods: GET, POST, PUT, PATCH, DELETE, OPTIONS
/// - Headers: Content-Type, Accept
/// - Max age: 1 hour
///
/// # Errors
/// An origin that is not a valid header value.
pub fn create_cors_layer(config: &CorsConfig) -> io::Result<CorsLayer> {
    let layer = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .max_age(Duration::from_secs(3600));

    if config.is_empty() {
        warn!("FRONTEND_URL is not set, cross-origin requests will be refused by browsers");
        return Ok(layer);
    }

    let origins = config
        .allowed_origins
        .iter()
        .map(|origin| origin.parse::<HeaderValue>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("Invalid FRONTEND_URL value: {}", e),
            )
        })?;

    info!(origins = ?config.allowed_origins, "CORS configured");

    Ok(layer.allow_origin(AllowOrigin::list(origins)))
}
