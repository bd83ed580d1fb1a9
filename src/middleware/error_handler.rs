use actix_web::{error::QueryPayloadError, Error, HttpRequest};

use crate::core::AppError;

/// Turn query-string extraction failures into the JSON error envelope
///
/// Registered through `web::QueryConfig` so malformed report filters get the
/// same `{"error": {...}}` body as every other failure.
pub fn json_error_handler(err: QueryPayloadError, req: &HttpRequest) -> Error {
    log_error(req, &err);
    AppError::validation(format!("Invalid report filters: {}", err)).into()
}

/// Log a rejected request with its method and path
pub fn log_error(req: &HttpRequest, err: &dyn std::fmt::Display) {
    tracing::warn!(
        method = %req.method(),
        path = %req.path(),
        "Request rejected: {}", err
    );
}
