use std::sync::Arc;

use tracing::{debug, info};

use shared_database::{AppState, MemoryStore};
use shared_models::auth::User;
use shared_models::error::AppError;

pub struct AccountService {
    store: Arc<MemoryStore>,
}

impl AccountService {
    pub fn new(state: &AppState) -> Self {
        Self {
            store: state.store.clone(),
        }
    }

    /// Always creates a new account, even for an email seen before.
    pub async fn register(&self, email: String, full_name: String) -> User {
        debug!("Registering account for {}", email);
        let user = self.store.insert_user(email, full_name).await;
        info!("Registered user {}", user.id);
        user
    }

    /// Succeeds whenever the email is known. Passwords are not part of the
    /// prototype's account model.
    pub async fn login(&self, email: &str) -> Result<(User, String), AppError> {
        debug!("Login attempt for {}", email);

        let user = self
            .store
            .find_user_by_email(email)
            .await
            .ok_or_else(|| AppError::Unauthorized("Invalid credentials".to_string()))?;

        let token = user.demo_token();
        info!("User {} logged in", user.id);
        Ok((user, token))
    }
}
