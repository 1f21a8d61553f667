//! Form fields of the ad group form

use serde::{Deserialize, Serialize};

/// Every field the ad group form can show, in display order.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum FieldId {
    #[default]
    Name,
    Type,
    Channel,
    Locale,
    Categories,
    FrequencyCapDaily,
    FrequencyCapTotal,
    Explanation,
    CheckInadjacency,
    Paused,
}

impl FieldId {
    pub const ALL: [Self; 10] = [
        Self::Name,
        Self::Type,
        Self::Channel,
        Self::Locale,
        Self::Categories,
        Self::FrequencyCapDaily,
        Self::FrequencyCapTotal,
        Self::Explanation,
        Self::CheckInadjacency,
        Self::Paused,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Type => "Directory",
            Self::Channel => "Channel",
            Self::Locale => "Locale",
            Self::Categories => "Categories",
            Self::FrequencyCapDaily => "Daily frequency cap",
            Self::FrequencyCapTotal => "Total frequency cap",
            Self::Explanation => "Explanation",
            Self::CheckInadjacency => "Check inadjacency",
            Self::Paused => "Paused",
        }
    }

    /// Wire name of the field.
    pub fn key(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Type => "type",
            Self::Channel => "channel_id",
            Self::Locale => "locale",
            Self::Categories => "categories",
            Self::FrequencyCapDaily => "frequency_cap_daily",
            Self::FrequencyCapTotal => "frequency_cap_total",
            Self::Explanation => "explanation",
            Self::CheckInadjacency => "check_inadjacency",
            Self::Paused => "paused",
        }
    }

    /// Free-text fields edited character by character.
    pub fn is_text(self) -> bool {
        matches!(
            self,
            Self::Name | Self::FrequencyCapDaily | Self::FrequencyCapTotal | Self::Explanation
        )
    }
}

impl std::fmt::Display for FieldId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Current value of a field, as seen by validation rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    /// Single-choice picker; `true` when something is selected.
    Choice(bool),
    /// Multi-select; number of selected options.
    Selections(usize),
    Flag(bool),
}
