use crate::config::DuplicatePolicy;
use crate::models::{derive_user_id, CreateUserRequest, User};
use crate::utils::AppError;
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// Storage seam for user records. The in-memory registry is the only
/// implementation; handlers depend on the trait.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn create_user(&self, request: &CreateUserRequest) -> Result<User, AppError>;
    async fn get_user(&self, user_id: &str) -> Result<User, AppError>;
    async fn list_users(&self) -> Vec<User>;
}

#[derive(Default)]
struct RegistryState {
    users: HashMap<String, User>,
    order: Vec<String>,  // user_ids in first-insertion order
}

/// Process-lifetime user registry keyed by `user_id`.
///
/// Duplicate check and insert run under one write guard, so concurrent
/// creations are serialized.
pub struct InMemoryUserStore {
    policy: DuplicatePolicy,
    state: RwLock<RegistryState>,
}

impl InMemoryUserStore {
    pub fn new(policy: DuplicatePolicy) -> Self {
        Self {
            policy,
            state: RwLock::new(RegistryState::default()),
        }
    }

    fn is_duplicate(&self, state: &RegistryState, email: &str, user_id: &str) -> bool {
        match self.policy {
            DuplicatePolicy::Strict => {
                state.users.values().any(|u| u.email == email) || state.users.contains_key(user_id)
            }
            // Keys are user_ids, so this only matches an email without '@'
            // that equals an existing local part.
            DuplicatePolicy::Literal => state.users.contains_key(email),
        }
    }
}

impl Default for InMemoryUserStore {
    fn default() -> Self {
        Self::new(DuplicatePolicy::default())
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn create_user(&self, request: &CreateUserRequest) -> Result<User, AppError> {
        let user_id = derive_user_id(&request.email).to_string();

        let mut state = self.state.write().await;

        if self.is_duplicate(&state, &request.email, &user_id) {
            return Err(AppError::DuplicateEmail);
        }

        let user = User {
            user_id: user_id.clone(),
            email: request.email.clone(),
            name: request.name.clone(),
        };

        if state.users.insert(user_id.clone(), user.clone()).is_some() {
            log::warn!("⚠️  user_id '{}' overwritten by {}", user_id, request.email);
        } else {
            state.order.push(user_id);
        }

        Ok(user)
    }

    async fn get_user(&self, user_id: &str) -> Result<User, AppError> {
        let state = self.state.read().await;
        state
            .users
            .get(user_id)
            .cloned()
            .ok_or_else(|| AppError::NotFound("User".to_string()))
    }

    async fn list_users(&self) -> Vec<User> {
        let state = self.state.read().await;
        state
            .order
            .iter()
            .filter_map(|id| state.users.get(id).cloned())
            .collect()
    }
}
