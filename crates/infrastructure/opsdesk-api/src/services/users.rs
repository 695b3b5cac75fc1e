use std::sync::Arc;

use opsdesk_core::User;

use crate::classify::ApiFailure;
use crate::client::{ApiClient, ApiModule};

/// User administration. The backend exposes no delete; accounts are
/// deactivated through update instead.
#[derive(Debug, Clone)]
pub struct UserService {
    client: Arc<ApiClient>,
}

impl UserService {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> Result<Vec<User>, ApiFailure> {
        self.client.get_json(ApiModule::Users, &["users"]).await
    }

    pub async fn get(&self, id: &str) -> Result<User, ApiFailure> {
        self.client.get_json(ApiModule::Users, &["users", id]).await
    }

    pub async fn create(&self, user: &User) -> Result<User, ApiFailure> {
        self.client
            .post_json(ApiModule::Users, &["users"], user)
            .await
    }

    pub async fn update(&self, user: &User) -> Result<User, ApiFailure> {
        self.client
            .put_json(ApiModule::Users, &["users", &user.id], user)
            .await
    }
}
