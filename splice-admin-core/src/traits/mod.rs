//! Backend abstraction trait definition
//!
//! The API trait lives in `splice-admin-api`; services depend on it only
//! through `Arc<dyn AdminApi>` so tests can inject a mock.

pub use splice_admin_api::AdminApi;
