use std::sync::Arc;

use opsdesk_core::Invoice;

use crate::classify::ApiFailure;
use crate::client::{ApiClient, ApiModule};

/// Read-only billing view. Invoices are created by the backend billing
/// module; the desk only lists and inspects them.
#[derive(Debug, Clone)]
pub struct InvoiceService {
    client: Arc<ApiClient>,
}

impl InvoiceService {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn list_for_company(&self, company_id: &str) -> Result<Vec<Invoice>, ApiFailure> {
        self.client
            .get_json(ApiModule::Billing, &["companies", company_id, "invoices"])
            .await
    }

    pub async fn get(&self, id: &str) -> Result<Invoice, ApiFailure> {
        self.client
            .get_json(ApiModule::Billing, &["invoices", id])
            .await
    }
}
