pub mod errors;
pub mod models;
pub mod search;
pub mod services;
pub mod validation;
