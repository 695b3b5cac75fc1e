//! Typed resource services over the HTTP boundary.
//!
//! Each service owns nothing but a handle to the shared [`ApiClient`] and
//! translates one backend module into typed calls. Transport failures
//! propagate as [`crate::ApiFailure`]; callers classify and display them.

mod auth;
mod companies;
mod customers;
mod invoices;
mod suppliers;
mod users;

pub use auth::{AuthService, SignInRequest, SignInResponse};
pub use companies::CompanyService;
pub use customers::CustomerService;
pub use invoices::InvoiceService;
pub use suppliers::SupplierService;
pub use users::UserService;
