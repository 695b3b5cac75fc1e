use std::sync::Arc;

use serde::{Deserialize, Serialize};

use opsdesk_core::Profile;

use crate::classify::ApiFailure;
use crate::client::{ApiClient, ApiModule};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignInResponse {
    pub token: String,
    pub profile: Profile,
}

#[derive(Debug, Clone)]
pub struct AuthService {
    client: Arc<ApiClient>,
}

impl AuthService {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// Exchanges credentials for a session token, installing it into the
    /// shared session context on success.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<Profile, ApiFailure> {
        let body = SignInRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let resp: SignInResponse = self
            .client
            .post_json(ApiModule::Auth, &["sign-in"], &body)
            .await?;
        self.client.session().install(resp.token);
        Ok(resp.profile)
    }

    /// Tears the session down locally. The backend holds no per-session
    /// state, so no request is made.
    pub fn sign_out(&self) {
        self.client.session().clear();
    }

    pub async fn profile(&self) -> Result<Profile, ApiFailure> {
        self.client.get_json(ApiModule::Auth, &["profile"]).await
    }
}
