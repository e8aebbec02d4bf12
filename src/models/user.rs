use serde::{Deserialize, Serialize};

/// Stored user record. Also the response body of every user endpoint,
/// so it has no password field.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, utoipa::ToSchema)]
pub struct User {
    pub user_id: String,  // local part of the email, registry key
    pub email: String,
    pub name: String,
}

/// Body of `POST /users`. Every field is required; the password is read
/// and then dropped.
#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct CreateUserRequest {
    pub email: String,
    pub name: String,
    pub password: String,
}

/// Substring of the email before the first `@` (the whole string if there is none).
///
/// `alice@x.com` and `alice@y.com` both map to `alice`.
pub fn derive_user_id(email: &str) -> &str {
    email.split('@').next().unwrap_or(email)
}
