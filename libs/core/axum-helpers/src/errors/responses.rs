//! Reusable OpenAPI response types for consistent API documentation.

use super::{ErrorResponse, ValidationErrorResponse};
#[allow(unused_imports)]
use serde_json::json;
use utoipa::ToResponse;

#[derive(ToResponse)]
#[response(
    description = "Internal Server Error",
    content_type = "application/json",
    example = json!({ "error": "Error interno del servidor" })
)]
pub struct InternalServerErrorResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Bad Request - one entry per failed rule, in rule order",
    content_type = "application/json",
    example = json!({
        "errors": [
            {
                "field": "price",
                "msg": "Precio no valido",
                "location": "body"
            }
        ]
    })
)]
pub struct BadRequestValidationResponse(pub ValidationErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Bad Request - malformed JSON body",
    content_type = "application/json",
    example = json!({ "error": "JSON no valido" })
)]
pub struct BadRequestJsonResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Resource not found",
    content_type = "application/json",
    example = json!({ "error": "Producto no encontrado" })
)]
pub struct NotFoundResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Request body exceeds the size limit",
    content_type = "application/json",
    example = json!({ "error": "Cuerpo de la solicitud demasiado grande" })
)]
pub struct PayloadTooLargeResponse(pub ErrorResponse);
