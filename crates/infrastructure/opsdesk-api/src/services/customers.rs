use std::sync::Arc;

use opsdesk_core::Customer;

use crate::classify::ApiFailure;
use crate::client::{ApiClient, ApiModule};

/// Customers are always scoped to a company; there is no unscoped list.
#[derive(Debug, Clone)]
pub struct CustomerService {
    client: Arc<ApiClient>,
}

impl CustomerService {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn list_for_company(&self, company_id: &str) -> Result<Vec<Customer>, ApiFailure> {
        self.client
            .get_json(
                ApiModule::Financial,
                &["companies", company_id, "customers"],
            )
            .await
    }

    pub async fn get(&self, id: &str) -> Result<Customer, ApiFailure> {
        self.client
            .get_json(ApiModule::Financial, &["customers", id])
            .await
    }

    pub async fn create(&self, customer: &Customer) -> Result<Customer, ApiFailure> {
        self.client
            .post_json(ApiModule::Financial, &["customers"], customer)
            .await
    }

    pub async fn update(&self, customer: &Customer) -> Result<Customer, ApiFailure> {
        self.client
            .put_json(ApiModule::Financial, &["customers", &customer.id], customer)
            .await
    }

    pub async fn delete(&self, id: &str) -> Result<(), ApiFailure> {
        self.client
            .delete(ApiModule::Financial, &["customers", id])
            .await
    }
}
