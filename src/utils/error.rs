use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum AppError {
    DuplicateEmail,
    NotFound(String),
    RouteNotFound,
    MethodNotAllowed,
    InvalidRequest(String),
    Config(String),
}

impl AppError {
    /// Text placed in the `detail` field of the error body.
    pub fn detail(&self) -> String {
        match self {
            AppError::DuplicateEmail => "User already exists".to_string(),
            AppError::NotFound(what) => format!("{} not found", what),
            AppError::RouteNotFound => "Not Found".to_string(),
            AppError::MethodNotAllowed => "Method Not Allowed".to_string(),
            AppError::InvalidRequest(msg) => msg.clone(),
            AppError::Config(msg) => msg.clone(),
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::DuplicateEmail => write!(f, "Duplicate email: {}", self.detail()),
            AppError::NotFound(what) => write!(f, "Not found: {}", what),
            AppError::RouteNotFound => write!(f, "Not found: route"),
            AppError::MethodNotAllowed => write!(f, "Method not allowed"),
            AppError::InvalidRequest(msg) => write!(f, "Invalid request: {}", msg),
            AppError::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::DuplicateEmail => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) | AppError::RouteNotFound => StatusCode::NOT_FOUND,
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::InvalidRequest(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorBody {
            detail: self.detail(),
        })
    }
}

#[derive(Debug, serde::Serialize, serde::Deserialize, utoipa::ToSchema)]
pub struct ErrorBody {
    pub detail: String,
}
