//! Typed draft of the ad group being created or edited

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::field::{FieldId, FieldValue};
use super::validate::validate;
use crate::error::{CoreError, CoreResult};
use crate::types::{Adgroup, AdgroupPayload, AdgroupType, FormMode};

/// Form-side state of an ad group.
///
/// Numeric fields are kept as the text the user typed so that validation can
/// report non-numeric input; they are parsed when the payload is built.
/// Values of fields hidden by the current type are kept, so toggling the type
/// back restores them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdgroupDraft {
    pub campaign_id: i64,
    pub name: String,
    pub kind: AdgroupType,
    pub channel_id: Option<i64>,
    pub locale: Option<String>,
    pub categories: BTreeSet<String>,
    pub frequency_cap_daily: String,
    pub frequency_cap_total: String,
    pub explanation: String,
    pub check_inadjacency: bool,
    pub paused: bool,
}

/// One user edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldChange {
    Name(String),
    ToggleType,
    Channel(Option<i64>),
    Locale(Option<String>),
    ToggleCategory(String),
    FrequencyCapDaily(String),
    FrequencyCapTotal(String),
    Explanation(String),
    ToggleCheckInadjacency,
    TogglePaused,
}

impl FieldChange {
    /// New value for a free-text field; `None` for other fields.
    pub fn text(field: FieldId, value: String) -> Option<Self> {
        match field {
            FieldId::Name => Some(Self::Name(value)),
            FieldId::FrequencyCapDaily => Some(Self::FrequencyCapDaily(value)),
            FieldId::FrequencyCapTotal => Some(Self::FrequencyCapTotal(value)),
            FieldId::Explanation => Some(Self::Explanation(value)),
            _ => None,
        }
    }

    pub fn field(&self) -> FieldId {
        match self {
            Self::Name(_) => FieldId::Name,
            Self::ToggleType => FieldId::Type,
            Self::Channel(_) => FieldId::Channel,
            Self::Locale(_) => FieldId::Locale,
            Self::ToggleCategory(_) => FieldId::Categories,
            Self::FrequencyCapDaily(_) => FieldId::FrequencyCapDaily,
            Self::FrequencyCapTotal(_) => FieldId::FrequencyCapTotal,
            Self::Explanation(_) => FieldId::Explanation,
            Self::ToggleCheckInadjacency => FieldId::CheckInadjacency,
            Self::TogglePaused => FieldId::Paused,
        }
    }
}

impl AdgroupDraft {
    /// Empty draft for a new ad group in `campaign_id`.
    pub fn new(campaign_id: i64) -> Self {
        Self {
            campaign_id,
            ..Self::default()
        }
    }

    /// Draft pre-filled from an existing record.
    pub fn from_adgroup(adgroup: &Adgroup) -> Self {
        Self {
            campaign_id: adgroup.campaign_id,
            name: adgroup.name.clone(),
            kind: adgroup.kind,
            channel_id: Some(adgroup.channel_id),
            locale: Some(adgroup.locale.clone()),
            categories: adgroup.categories.clone(),
            frequency_cap_daily: adgroup
                .frequency_cap_daily
                .map(|v| v.to_string())
                .unwrap_or_default(),
            frequency_cap_total: adgroup
                .frequency_cap_total
                .map(|v| v.to_string())
                .unwrap_or_default(),
            explanation: adgroup.explanation.clone().unwrap_or_default(),
            check_inadjacency: adgroup.check_inadjacency,
            paused: adgroup.paused,
        }
    }

    /// Value of a field as seen by the validation rules.
    pub fn value(&self, field: FieldId) -> FieldValue<'_> {
        match field {
            FieldId::Name => FieldValue::Text(&self.name),
            FieldId::Type => FieldValue::Flag(self.kind == AdgroupType::Directory),
            FieldId::Channel => FieldValue::Choice(self.channel_id.is_some()),
            FieldId::Locale => FieldValue::Choice(self.locale.is_some()),
            FieldId::Categories => FieldValue::Selections(self.categories.len()),
            FieldId::FrequencyCapDaily => FieldValue::Text(&self.frequency_cap_daily),
            FieldId::FrequencyCapTotal => FieldValue::Text(&self.frequency_cap_total),
            FieldId::Explanation => FieldValue::Text(&self.explanation),
            FieldId::CheckInadjacency => FieldValue::Flag(self.check_inadjacency),
            FieldId::Paused => FieldValue::Flag(self.paused),
        }
    }

    /// Current text of a free-text field.
    pub fn text(&self, field: FieldId) -> Option<&str> {
        match field {
            FieldId::Name => Some(&self.name),
            FieldId::FrequencyCapDaily => Some(&self.frequency_cap_daily),
            FieldId::FrequencyCapTotal => Some(&self.frequency_cap_total),
            FieldId::Explanation => Some(&self.explanation),
            _ => None,
        }
    }

    /// Apply an edit. Returns `false` when the draft did not change.
    pub fn apply(&mut self, change: FieldChange) -> bool {
        let before = self.clone();
        match change {
            FieldChange::Name(v) => self.name = v,
            FieldChange::ToggleType => self.kind = self.kind.toggled(),
            FieldChange::Channel(v) => self.channel_id = v,
            FieldChange::Locale(v) => self.locale = v,
            FieldChange::ToggleCategory(category) => {
                if !self.categories.remove(&category) {
                    self.categories.insert(category);
                }
            }
            FieldChange::FrequencyCapDaily(v) => self.frequency_cap_daily = v,
            FieldChange::FrequencyCapTotal(v) => self.frequency_cap_total = v,
            FieldChange::Explanation(v) => self.explanation = v,
            FieldChange::ToggleCheckInadjacency => self.check_inadjacency = !self.check_inadjacency,
            FieldChange::TogglePaused => self.paused = !self.paused,
        }
        *self != before
    }

    /// Validate and build the request body.
    ///
    /// The type is taken from the toggle state. Fields hidden by a directory
    /// type are sent empty regardless of what the draft still holds.
    pub fn to_payload(&self, mode: FormMode) -> CoreResult<AdgroupPayload> {
        validate(self, mode).map_err(CoreError::Validation)?;

        let channel_id = self
            .channel_id
            .ok_or(CoreError::MissingField(FieldId::Channel))?;
        let locale = self
            .locale
            .clone()
            .ok_or(CoreError::MissingField(FieldId::Locale))?;

        let (categories, frequency_cap_daily, frequency_cap_total) = if self.kind.is_targeted() {
            (
                self.categories.clone(),
                parse_cap(&self.frequency_cap_daily),
                parse_cap(&self.frequency_cap_total),
            )
        } else {
            (BTreeSet::new(), None, None)
        };

        let explanation = self.explanation.trim();
        Ok(AdgroupPayload {
            name: self.name.trim().to_string(),
            kind: self.kind,
            campaign_id: self.campaign_id,
            channel_id,
            locale,
            categories,
            frequency_cap_daily,
            frequency_cap_total,
            paused: mode.is_edit() && self.paused,
            explanation: (!explanation.is_empty()).then(|| explanation.to_string()),
            check_inadjacency: self.check_inadjacency,
        })
    }
}

fn parse_cap(text: &str) -> Option<u32> {
    text.trim().parse().ok()
}
