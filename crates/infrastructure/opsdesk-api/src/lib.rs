pub mod classify;
pub mod client;
pub mod services;
pub mod static_site;

// Re-exports for convenience
pub use classify::{ApiFailure, ClassifiedError, Classifier, FallbackOrder, Problem, Severity};
pub use client::{default_http_client, ApiClient, ApiModule, SessionContext};
pub use services::{
    AuthService, CompanyService, CustomerService, InvoiceService, SupplierService, UserService,
};
