use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{ApiError, Result};

// ============ Response envelope ============

/// Body shape shared by every admin API endpoint.
///
/// Success responses carry `result`, failures carry `message`. The HTTP status
/// is not trusted as the discriminator: a body without `result` is a rejection
/// even when served with `200`.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiEnvelope<T> {
    /// Payload on success.
    pub result: Option<T>,
    /// Human-readable error on failure.
    #[serde(default)]
    pub message: Option<String>,
}

impl<T> ApiEnvelope<T> {
    /// Branch on the discriminator: `result` present → `Ok`, otherwise a
    /// [`ApiError::Rejected`] carrying the server message.
    pub fn into_result(self, status: u16) -> Result<T> {
        match self.result {
            Some(result) => Ok(result),
            None => Err(ApiError::Rejected {
                status,
                message: self
                    .message
                    .filter(|m| !m.trim().is_empty())
                    .unwrap_or_else(|| format!("Request failed (HTTP {status})")),
            }),
        }
    }
}

// ============ Ad groups ============

/// Ad group kind. Directory ad groups are not targeted by category or budget.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdgroupType {
    /// Shown as a suggested tile, targeted by categories.
    #[default]
    Suggested,
    /// Shown in the directory.
    Directory,
}

impl AdgroupType {
    /// Wire name (`"suggested"` / `"directory"`).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Suggested => "suggested",
            Self::Directory => "directory",
        }
    }

    /// The other state of the two-state toggle.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Suggested => Self::Directory,
            Self::Directory => Self::Suggested,
        }
    }

    /// Whether categories and frequency caps apply to this kind.
    pub fn is_targeted(self) -> bool {
        matches!(self, Self::Suggested)
    }
}

impl std::fmt::Display for AdgroupType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ad group record as returned by `GET /adgroups/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Adgroup {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: AdgroupType,
    pub campaign_id: i64,
    pub channel_id: i64,
    pub locale: String,
    #[serde(default)]
    pub categories: BTreeSet<String>,
    #[serde(default)]
    pub frequency_cap_daily: Option<u32>,
    #[serde(default)]
    pub frequency_cap_total: Option<u32>,
    #[serde(default)]
    pub paused: bool,
    #[serde(default)]
    pub explanation: Option<String>,
    #[serde(default)]
    pub check_inadjacency: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Request body for create and update.
///
/// Categories are a set, so they serialize sorted and de-duplicated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdgroupPayload {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: AdgroupType,
    pub campaign_id: i64,
    pub channel_id: i64,
    pub locale: String,
    pub categories: BTreeSet<String>,
    pub frequency_cap_daily: Option<u32>,
    pub frequency_cap_total: Option<u32>,
    pub paused: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
    pub check_inadjacency: bool,
}

/// Minimal view of a saved entity: the API only guarantees `id` in the
/// `result` of a create/update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedEntity {
    pub id: i64,
}

// ============ Reference data ============

/// Distribution channel (`{id, name}`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Channel {
    pub id: i64,
    pub name: String,
}

/// Options offered by the form pickers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceData {
    pub categories: Vec<String>,
    pub channels: Vec<Channel>,
    pub locales: Vec<String>,
}

impl ReferenceData {
    /// Name of a channel, if known.
    pub fn channel_name(&self, id: i64) -> Option<&str> {
        self.channels
            .iter()
            .find(|c| c.id == id)
            .map(|c| c.name.as_str())
    }
}
