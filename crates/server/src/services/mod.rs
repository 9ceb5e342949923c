//! Service layer: auth and catalog logic over the repositories.

pub mod auth;
pub mod catalog;

pub use auth::AuthService;
pub use catalog::CatalogService;
