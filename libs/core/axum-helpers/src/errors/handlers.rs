use axum::response::{IntoResponse, Response};

use super::{messages, AppError};

/// Fallback for unmatched routes: 404 with `{"error": "Ruta no encontrada"}`.
pub async fn not_found() -> Response {
    AppError::NotFound(messages::ROUTE_NOT_FOUND.to_string()).into_response()
}
