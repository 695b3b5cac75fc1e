use std::sync::Arc;

use opsdesk_core::Company;

use crate::classify::ApiFailure;
use crate::client::{ApiClient, ApiModule};

#[derive(Debug, Clone)]
pub struct CompanyService {
    client: Arc<ApiClient>,
}

impl CompanyService {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> Result<Vec<Company>, ApiFailure> {
        self.client
            .get_json(ApiModule::Financial, &["companies"])
            .await
    }

    pub async fn get(&self, id: &str) -> Result<Company, ApiFailure> {
        self.client
            .get_json(ApiModule::Financial, &["companies", id])
            .await
    }

    pub async fn create(&self, company: &Company) -> Result<Company, ApiFailure> {
        self.client
            .post_json(ApiModule::Financial, &["companies"], company)
            .await
    }

    /// The body carries the `rowVersion` received on the preceding read;
    /// a stale token comes back as HTTP 409.
    pub async fn update(&self, company: &Company) -> Result<Company, ApiFailure> {
        self.client
            .put_json(ApiModule::Financial, &["companies", &company.id], company)
            .await
    }

    pub async fn delete(&self, id: &str) -> Result<(), ApiFailure> {
        self.client
            .delete(ApiModule::Financial, &["companies", id])
            .await
    }
}
