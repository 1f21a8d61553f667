//! Splice Admin Core Library
//!
//! Provides the form lifecycle of the admin front-end, independent of any UI:
//! - Typed ad group draft and per-mode field schema (`form`)
//! - Synchronous validation run before every submit
//! - Create/update submission and reference data loading (`services`)
//! - Route parsing (`route`)
//!
//! The API is abstracted through the `AdminApi` trait, so the services run
//! against the HTTP client in production and a mock in tests.

pub mod error;
pub mod form;
pub mod route;
pub mod services;
pub mod traits;
pub mod types;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use error::{CoreError, CoreResult};
pub use route::Route;
pub use services::ServiceContext;
pub use traits::AdminApi;
pub use splice_admin_api::{ClientConfig, SpliceClient};
