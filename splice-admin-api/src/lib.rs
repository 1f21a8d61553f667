//! # splice-admin-api
//!
//! Typed client for the Splice admin REST API.
//!
//! Every endpoint answers with the same envelope: `{"result": ...}` on success
//! or `{"message": "..."}` on failure. [`ApiEnvelope::into_result`] turns that
//! into a `Result`, so callers only ever see typed values or an [`ApiError`].
//!
//! ## Endpoints
//!
//! | Operation | Request |
//! |-----------|---------|
//! | [`AdminApi::get_adgroup`] | `GET /adgroups/{id}` |
//! | [`AdminApi::create_adgroup`] | `POST /adgroups` |
//! | [`AdminApi::update_adgroup`] | `PUT /adgroups/{id}` |
//! | [`AdminApi::list_channels`] | `GET /channels` |
//! | [`AdminApi::list_categories`] | `GET /categories` |
//! | [`AdminApi::list_locales`] | `GET /locales` |
//!
//! ## Feature Flags
//!
//! - **`native-tls`** *(default)* — Use the platform's native TLS implementation.
//! - **`rustls`** — Use rustls.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use splice_admin_api::{AdminApi, ClientConfig, SpliceClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = SpliceClient::new(ClientConfig::new("http://localhost:5000/api"))?;
//!     let reference = client.reference_data().await?;
//!     println!("{} channels", reference.channels.len());
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! - [`ApiError::Rejected`] — the API answered with `{message}`; `Display` is the message itself
//! - [`ApiError::NotFound`] — `GET /adgroups/{id}` returned 404
//! - [`ApiError::NetworkError`] / [`ApiError::Timeout`] — transport failures, retried for reads only

mod client;
mod error;
mod http_client;
mod traits;
mod types;
mod utils;

pub use client::{ClientConfig, SpliceClient};
pub use error::{ApiError, Result};
pub use traits::AdminApi;
pub use types::{
    Adgroup, AdgroupPayload, AdgroupType, ApiEnvelope, Channel, ReferenceData, SavedEntity,
};
