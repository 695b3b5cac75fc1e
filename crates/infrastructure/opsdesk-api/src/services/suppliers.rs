use std::sync::Arc;

use opsdesk_core::Supplier;

use crate::classify::ApiFailure;
use crate::client::{ApiClient, ApiModule};

#[derive(Debug, Clone)]
pub struct SupplierService {
    client: Arc<ApiClient>,
}

impl SupplierService {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn list_for_company(&self, company_id: &str) -> Result<Vec<Supplier>, ApiFailure> {
        self.client
            .get_json(
                ApiModule::Inventory,
                &["companies", company_id, "suppliers"],
            )
            .await
    }

    pub async fn create(&self, supplier: &Supplier) -> Result<Supplier, ApiFailure> {
        self.client
            .post_json(ApiModule::Inventory, &["suppliers"], supplier)
            .await
    }

    pub async fn update(&self, supplier: &Supplier) -> Result<Supplier, ApiFailure> {
        self.client
            .put_json(ApiModule::Inventory, &["suppliers", &supplier.id], supplier)
            .await
    }

    pub async fn delete(&self, id: &str) -> Result<(), ApiFailure> {
        self.client
            .delete(ApiModule::Inventory, &["suppliers", id])
            .await
    }
}
