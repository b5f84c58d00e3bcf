//! Client-facing error messages shared by every route.

pub const INTERNAL_ERROR: &str = "Error interno del servidor";
pub const ROUTE_NOT_FOUND: &str = "Ruta no encontrada";
pub const INVALID_JSON: &str = "JSON no valido";
pub const INVALID_BODY: &str = "Cuerpo de la solicitud no valido";
pub const PAYLOAD_TOO_LARGE: &str = "Cuerpo de la solicitud demasiado grande";
