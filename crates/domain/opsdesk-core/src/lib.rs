pub mod records;
pub mod validate;

pub use records::{
    Company, CompanyId, Customer, CustomerId, Invoice, Profile, Supplier, User, UserId,
};
pub use validate::{
    email_validation_error, is_valid_email, is_valid_email_strict, required_error,
    validate_email, ValidationResult,
};
