//! Drives the real services against a mock backend: sign-in installs the
//! token, subsequent requests carry it, and a stale-version update comes
//! back as a classified conflict.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{delete, get, post, put};
use axum::Router;

use opsdesk_api::classify::{Classifier, FallbackOrder};
use opsdesk_api::client::{default_http_client, ApiClient, SessionContext};
use opsdesk_api::services::{AuthService, CompanyService, SupplierService};
use opsdesk_config::Endpoints;
use opsdesk_core::Company;

const TOKEN: &str = "tok-e2e-1";

struct Backend {
    company_version: std::sync::Mutex<String>,
}

fn authed(headers: &HeaderMap) -> bool {
    headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v == format!("Bearer {TOKEN}"))
}

async fn sign_in(body: String) -> Response {
    let creds: serde_json::Value = serde_json::from_str(&body).unwrap();
    if creds["email"] == "ops@example.com" && creds["password"] == "hunter2" {
        axum::Json(serde_json::json!({
            "token": TOKEN,
            "profile": { "id": "u-1", "email": "ops@example.com", "displayName": "Ops" }
        }))
        .into_response()
    } else {
        (
            StatusCode::UNAUTHORIZED,
            axum::Json(serde_json::json!({
                "title": "Unauthorized",
                "detail": "Invalid credentials"
            })),
        )
            .into_response()
    }
}

async fn list_companies(State(_): State<Arc<Backend>>, headers: HeaderMap) -> Response {
    if !authed(&headers) {
        return StatusCode::UNAUTHORIZED.into_response();
    }
    axum::Json(serde_json::json!([
        { "id": "c-1", "name": "Acme Ltd", "tradeName": "Acme", "taxId": "12.345", "active": true, "rowVersion": "v1" }
    ]))
    .into_response()
}

async fn update_company(
    State(backend): State<Arc<Backend>>,
    headers: HeaderMap,
    body: String,
) -> Response {
    if !authed(&headers) {
        return StatusCode::UNAUTHORIZED.into_response();
    }
    let company: Company = serde_json::from_str(&body).unwrap();
    let mut current = backend.company_version.lock().unwrap();
    if company.row_version.as_deref() == Some(current.as_str()) {
        let number: u64 = current.trim_start_matches('v').parse().unwrap();
        *current = format!("v{}", number + 1);
        let mut saved = company;
        saved.row_version = Some(current.clone());
        axum::Json(saved).into_response()
    } else {
        StatusCode::CONFLICT.into_response()
    }
}

async fn list_suppliers(headers: HeaderMap) -> Response {
    if !authed(&headers) {
        return StatusCode::UNAUTHORIZED.into_response();
    }
    axum::Json(serde_json::json!([
        { "id": "s-1", "companyId": "c-1", "name": "Initech Parts", "taxId": "98.765", "email": "sales@initech.example" }
    ]))
    .into_response()
}

async fn delete_supplier(headers: HeaderMap, Path(id): Path<String>) -> StatusCode {
    if !authed(&headers) {
        return StatusCode::UNAUTHORIZED;
    }
    if id == "s-1" {
        StatusCode::NO_CONTENT
    } else {
        StatusCode::NOT_FOUND
    }
}

async fn start_mock_backend() -> (SocketAddr, tokio::task::JoinHandle<()>) {
    let app = Router::new()
        .route("/api/auth/sign-in", post(sign_in))
        .route("/api/financial/companies", get(list_companies))
        .route("/api/financial/companies/:id", put(update_company))
        .route("/api/inventory/companies/:id/suppliers", get(list_suppliers))
        .route("/api/inventory/suppliers/:id", delete(delete_supplier))
        .with_state(Arc::new(Backend {
            company_version: std::sync::Mutex::new("v1".into()),
        }));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let handle = tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (addr, handle)
}

fn endpoints(addr: SocketAddr) -> Endpoints {
    Endpoints {
        auth: format!("http://{addr}/api/auth"),
        financial: format!("http://{addr}/api/financial"),
        billing: format!("http://{addr}/api/billing"),
        inventory: format!("http://{addr}/api/inventory"),
        users: format!("http://{addr}/api/users"),
    }
}

#[tokio::test]
async fn sign_in_list_update_and_conflict_workflow() {
    let (addr, server_handle) = start_mock_backend().await;

    let session = SessionContext::new();
    let client = Arc::new(ApiClient::new(
        default_http_client().unwrap(),
        endpoints(addr),
        session.clone(),
    ));
    let auth = AuthService::new(client.clone());
    let companies = CompanyService::new(client.clone());

    // Unauthenticated list is rejected.
    assert!(companies.list().await.is_err());

    // Wrong password surfaces the backend's problem detail, with the
    // title demoted to the secondary line.
    let failure = auth.sign_in("ops@example.com", "nope").await.unwrap_err();
    let classified = Classifier::new(FallbackOrder::ErrorsFirst).classify(&failure);
    assert_eq!(classified.message, "Invalid credentials");
    assert_eq!(classified.details.as_deref(), Some("Unauthorized"));
    assert!(!session.is_signed_in());

    // Correct credentials install the token for every later call.
    let profile = auth.sign_in("ops@example.com", "hunter2").await.unwrap();
    assert_eq!(profile.email, "ops@example.com");
    assert!(session.is_signed_in());

    let list = companies.list().await.unwrap();
    assert_eq!(list.len(), 1);
    let mut company = list[0].clone();
    assert_eq!(company.row_version.as_deref(), Some("v1"));

    // Echoing the fresh token succeeds and returns the next version.
    company.name = "Acme Holdings".into();
    let saved = companies.update(&company).await.unwrap();
    assert_eq!(saved.row_version.as_deref(), Some("v2"));

    // Re-sending the stale token is a conflict.
    let failure = companies.update(&company).await.unwrap_err();
    assert_eq!(failure.status(), Some(409));
    let classified = Classifier::new(FallbackOrder::ErrorsFirst).classify(&failure);
    assert_eq!(classified.message, "conflict: resource changed concurrently");

    // Sign-out clears the token locally.
    auth.sign_out();
    assert!(!session.is_signed_in());
    assert!(companies.list().await.is_err());

    server_handle.abort();
}

#[tokio::test]
async fn suppliers_are_company_scoped_and_require_a_session() {
    let (addr, server_handle) = start_mock_backend().await;

    let session = SessionContext::new();
    let client = Arc::new(ApiClient::new(
        default_http_client().unwrap(),
        endpoints(addr),
        session.clone(),
    ));
    let auth = AuthService::new(client.clone());
    let suppliers = SupplierService::new(client.clone());

    assert!(suppliers.list_for_company("c-1").await.is_err());

    auth.sign_in("ops@example.com", "hunter2").await.unwrap();
    let list = suppliers.list_for_company("c-1").await.unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0].name, "Initech Parts");
    assert_eq!(list[0].company_id, "c-1");

    suppliers.delete("s-1").await.unwrap();

    let failure = suppliers.delete("s-404").await.unwrap_err();
    let classified = Classifier::new(FallbackOrder::ErrorsFirst).classify(&failure);
    assert_eq!(classified.message, "resource not found");

    server_handle.abort();
}
