pub mod health;
pub mod products;
pub mod swagger;
pub mod users;

use actix_web::{error::InternalError, web, HttpResponse, ResponseError};
use crate::utils::AppError;

/// JSON extractor config shared by both services: malformed bodies and
/// missing fields become `422 {"detail": ...}`.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let app_error = AppError::InvalidRequest(err.to_string());
        log::warn!("❌ Rejected request body: {}", app_error);
        let response = app_error.error_response();
        InternalError::from_response(err, response).into()
    })
}

/// Fallback for unknown routes.
pub async fn not_found() -> HttpResponse {
    AppError::RouteNotFound.error_response()
}

/// Fallback for known paths hit with an unsupported method.
pub async fn method_not_allowed() -> HttpResponse {
    AppError::MethodNotAllowed.error_response()
}
