pub mod billing;
pub mod companies;
pub mod customers;
pub mod settings;
pub mod signin;
pub mod users;
