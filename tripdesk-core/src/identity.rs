use std::sync::Arc;

use serde::Serialize;
use tracing::{info, warn};
use tripdesk_shared::{Masked, User};

use crate::latency::Latency;
use crate::repository::UserRepository;
use crate::{CoreError, CoreResult};

pub const DEFAULT_PLACEHOLDER_TOKEN: &str = "mock-jwt-token";

#[derive(Debug, Clone, Serialize)]
pub struct AuthResponse {
    pub token: Masked<String>,
    pub user: User,
}

/// Email-only login against the seeded users.
///
/// There is no password and no real token: every successful login receives
/// the same opaque placeholder string.
pub struct AuthService {
    users: Arc<dyn UserRepository>,
    latency: Latency,
    placeholder_token: String,
}

impl AuthService {
    pub fn new(users: Arc<dyn UserRepository>, latency: Latency) -> Self {
        Self {
            users,
            latency,
            placeholder_token: DEFAULT_PLACEHOLDER_TOKEN.to_string(),
        }
    }

    pub fn with_placeholder_token(mut self, token: impl Into<String>) -> Self {
        self.placeholder_token = token.into();
        self
    }

    /// Exact, case-sensitive email match.
    pub async fn login(&self, email: &str) -> CoreResult<AuthResponse> {
        self.latency.simulate().await;

        match self.users.find_by_email(email).await? {
            Some(user) => {
                info!("Login succeeded for user {}", user.id);
                Ok(AuthResponse {
                    token: Masked::new(self.placeholder_token.clone()),
                    user,
                })
            }
            None => {
                warn!("Login rejected for {}", Masked::new(email));
                Err(CoreError::InvalidCredentials)
            }
        }
    }
}
