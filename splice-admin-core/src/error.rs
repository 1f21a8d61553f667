//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

use crate::form::{FieldId, ValidationErrors};

// Re-export library error type
pub use splice_admin_api::ApiError;

/// Core layer error type
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// Client-side validation failed; nothing was sent
    #[error("{0}")]
    Validation(ValidationErrors),

    /// A field the payload needs has no value
    #[error("{0} is missing")]
    MissingField(FieldId),

    /// Path that matches no route
    #[error("Unknown route: {0}")]
    InvalidRoute(String),

    /// API error (converting from library)
    #[error("{0}")]
    Api(#[from] ApiError),
}

impl CoreError {
    /// Whether it is expected behavior (user input, server rejection, missing
    /// resource), used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    /// **Please update this method simultaneously when new variants are added.**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::Validation(_) | Self::MissingField(_) | Self::InvalidRoute(_) => true,
            Self::Api(e) => e.is_expected(),
        }
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;
