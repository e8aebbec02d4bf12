use crate::utils::AppError;
use std::env;
use std::str::FromStr;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_CORS_ORIGINS: &str = "http://localhost:3000";

/// How `POST /users` decides that an email is already registered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicatePolicy {
    /// Reject when the email is already stored, or when its local part is
    /// already taken by another email. Existing records are never overwritten.
    #[default]
    Strict,
    /// Reject only when the raw email equals an existing `user_id` key.
    /// Two emails with the same local part silently overwrite each other.
    Literal,
}

impl FromStr for DuplicatePolicy {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "strict" => Ok(DuplicatePolicy::Strict),
            "literal" => Ok(DuplicatePolicy::Literal),
            other => Err(AppError::Config(format!(
                "Invalid USER_DUPLICATE_POLICY: {}. Supported: strict, literal",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub host: String,
    pub port: u16,
    pub cors_origins: Vec<String>,
    pub duplicate_policy: DuplicatePolicy,
}

impl ServiceConfig {
    /// Reads HOST, PORT, CORS_ALLOWED_ORIGINS and USER_DUPLICATE_POLICY.
    /// `.env` is expected to be loaded by the caller.
    pub fn from_env(default_port: u16) -> Result<Self, AppError> {
        Self::from_lookup(default_port, |key| env::var(key).ok())
    }

    fn from_lookup<F>(default_port: u16, lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|e| AppError::Config(format!("Invalid PORT '{}': {}", raw, e)))?,
            None => default_port,
        };

        let cors_origins = lookup("CORS_ALLOWED_ORIGINS")
            .unwrap_or_else(|| DEFAULT_CORS_ORIGINS.to_string())
            .split(',')
            .map(|origin| origin.trim().to_string())
            .filter(|origin| !origin.is_empty())
            .collect();

        let duplicate_policy = match lookup("USER_DUPLICATE_POLICY") {
            Some(raw) => raw.parse()?,
            None => DuplicatePolicy::default(),
        };

        Ok(Self {
            host,
            port,
            cors_origins,
            duplicate_policy,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
