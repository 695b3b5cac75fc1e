use std::sync::{Arc, RwLock};
use std::time::Duration;

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use reqwest::{Client, Method, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use opsdesk_config::{Endpoints, DEFAULT_HTTP_TIMEOUT_SECS};

use crate::classify::{ApiFailure, Problem};

// Everything a URL path segment must not contain raw.
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}')
    .add(b'/')
    .add(b'%');

/// Explicitly owned session token shared between the kernel and the HTTP
/// client. Installed on sign-in, cleared on sign-out; no ambient globals.
#[derive(Debug, Clone, Default)]
pub struct SessionContext {
    token: Arc<RwLock<Option<String>>>,
}

impl SessionContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn install(&self, token: String) {
        if let Ok(mut guard) = self.token.write() {
            *guard = Some(token);
        }
    }

    pub fn clear(&self) {
        if let Ok(mut guard) = self.token.write() {
            *guard = None;
        }
    }

    pub fn token(&self) -> Option<String> {
        self.token.read().ok().and_then(|guard| guard.clone())
    }

    pub fn is_signed_in(&self) -> bool {
        self.token().is_some()
    }
}

/// Backend module a request is addressed to. Each module has its own base
/// URL resolved from the environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiModule {
    Auth,
    Financial,
    Billing,
    Inventory,
    Users,
}

pub fn default_http_client() -> reqwest::Result<Client> {
    Client::builder()
        .timeout(Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS))
        .build()
}

/// JSON-over-HTTP boundary shared by every resource service.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    endpoints: Endpoints,
    session: SessionContext,
}

impl ApiClient {
    pub fn new(http: Client, endpoints: Endpoints, session: SessionContext) -> Self {
        Self {
            http,
            endpoints,
            session,
        }
    }

    pub fn session(&self) -> &SessionContext {
        &self.session
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    fn base(&self, module: ApiModule) -> &str {
        match module {
            ApiModule::Auth => &self.endpoints.auth,
            ApiModule::Financial => &self.endpoints.financial,
            ApiModule::Billing => &self.endpoints.billing,
            ApiModule::Inventory => &self.endpoints.inventory,
            ApiModule::Users => &self.endpoints.users,
        }
    }

    fn url(&self, module: ApiModule, segments: &[&str]) -> String {
        let mut url = self.base(module).to_string();
        for segment in segments {
            url.push('/');
            url.push_str(&utf8_percent_encode(segment, SEGMENT).to_string());
        }
        url
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        module: ApiModule,
        segments: &[&str],
    ) -> Result<T, ApiFailure> {
        self.request_json::<(), T>(Method::GET, module, segments, None)
            .await
    }

    pub(crate) async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        module: ApiModule,
        segments: &[&str],
        body: &B,
    ) -> Result<T, ApiFailure> {
        self.request_json(Method::POST, module, segments, Some(body))
            .await
    }

    pub(crate) async fn put_json<B: Serialize, T: DeserializeOwned>(
        &self,
        module: ApiModule,
        segments: &[&str],
        body: &B,
    ) -> Result<T, ApiFailure> {
        self.request_json(Method::PUT, module, segments, Some(body))
            .await
    }

    pub(crate) async fn delete(
        &self,
        module: ApiModule,
        segments: &[&str],
    ) -> Result<(), ApiFailure> {
        let url = self.url(module, segments);
        let request_id = uuid::Uuid::new_v4();
        debug!(%request_id, %url, "DELETE");

        let mut req = self.http.delete(&url);
        if let Some(token) = self.session.token() {
            req = req.bearer_auth(token);
        }
        let resp = req.send().await.map_err(ApiFailure::from)?;
        let status = resp.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(failure_from_response(status, resp).await)
        }
    }

    async fn request_json<B: Serialize, T: DeserializeOwned>(
        &self,
        method: Method,
        module: ApiModule,
        segments: &[&str],
        body: Option<&B>,
    ) -> Result<T, ApiFailure> {
        let url = self.url(module, segments);
        let request_id = uuid::Uuid::new_v4();
        debug!(%request_id, %method, %url, "request");

        let mut req = self.http.request(method, &url);
        if let Some(token) = self.session.token() {
            req = req.bearer_auth(token);
        }
        if let Some(body) = body {
            req = req.json(body);
        }

        let resp = req.send().await.map_err(ApiFailure::from)?;
        let status = resp.status();
        if status.is_success() {
            resp.json::<T>().await.map_err(ApiFailure::from)
        } else {
            Err(failure_from_response(status, resp).await)
        }
    }
}

async fn failure_from_response(status: StatusCode, resp: Response) -> ApiFailure {
    let body = resp.text().await.unwrap_or_default();
    let problem = serde_json::from_str::<Problem>(&body).ok();
    ApiFailure::Http {
        status: status.as_u16(),
        problem,
        message: status
            .canonical_reason()
            .map(str::to_string)
            .unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> ApiClient {
        let endpoints = Endpoints {
            auth: "http://localhost:1/api/auth".into(),
            financial: "http://localhost:1/api/financial".into(),
            billing: "http://localhost:1/api/billing".into(),
            inventory: "http://localhost:1/api/inventory".into(),
            users: "http://localhost:1/api/users".into(),
        };
        ApiClient::new(Client::new(), endpoints, SessionContext::new())
    }

    #[test]
    fn url_joins_and_escapes_segments() {
        let c = client();
        assert_eq!(
            c.url(ApiModule::Financial, &["companies", "id with space"]),
            "http://localhost:1/api/financial/companies/id%20with%20space"
        );
        assert_eq!(
            c.url(ApiModule::Users, &["users", "a/b"]),
            "http://localhost:1/api/users/users/a%2Fb"
        );
    }

    #[test]
    fn session_install_and_clear() {
        let session = SessionContext::new();
        assert!(!session.is_signed_in());
        session.install("tok-123".into());
        assert_eq!(session.token().as_deref(), Some("tok-123"));
        session.clear();
        assert!(!session.is_signed_in());
    }
}
