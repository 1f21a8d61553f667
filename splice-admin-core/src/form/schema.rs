//! Declarative field schema: which fields are shown, editable and validated
//! for a given mode and ad group type.

use serde::Serialize;

use super::field::{FieldId, FieldValue};
use crate::types::{AdgroupType, FormMode};

/// Minimum length of an ad group name.
pub const NAME_MIN_LENGTH: usize = 2;

/// A single validation rule.
///
/// Only [`Rule::Required`] rejects an empty value; the other rules pass on
/// empty input so that optional fields can carry them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "rule", content = "arg", rename_all = "snake_case")]
pub enum Rule {
    Required,
    MinLength(usize),
    Numeric,
    MinSelected(usize),
}

impl Rule {
    /// Check a value; returns the violated rule's message on failure.
    pub fn check(self, field: FieldId, value: FieldValue<'_>) -> Result<(), String> {
        let ok = match (self, value) {
            (Self::Required, FieldValue::Text(s)) => !s.trim().is_empty(),
            (Self::Required, FieldValue::Choice(selected)) => selected,
            (Self::Required, FieldValue::Selections(n)) => n > 0,
            (Self::MinLength(min), FieldValue::Text(s)) => {
                let s = s.trim();
                s.is_empty() || s.chars().count() >= min
            }
            (Self::Numeric, FieldValue::Text(s)) => {
                let s = s.trim();
                s.is_empty() || s.parse::<u32>().is_ok()
            }
            (Self::MinSelected(min), FieldValue::Selections(n)) => n >= min,
            _ => true,
        };
        if ok {
            Ok(())
        } else {
            Err(self.message(field))
        }
    }

    fn message(self, field: FieldId) -> String {
        match self {
            Self::Required => format!("{field} is required"),
            Self::MinLength(min) => format!("{field} must be at least {min} characters"),
            Self::Numeric => format!("{field} must be a whole number"),
            Self::MinSelected(1) => format!("Select at least one of {}", field.label().to_lowercase()),
            Self::MinSelected(min) => {
                format!("Select at least {min} of {}", field.label().to_lowercase())
            }
        }
    }
}

/// Whether a field is part of the form for this mode and type.
///
/// Directory ad groups hide category and budget fields; `paused` only exists
/// once the ad group exists.
pub fn is_visible(field: FieldId, mode: FormMode, kind: AdgroupType) -> bool {
    match field {
        FieldId::Categories | FieldId::FrequencyCapDaily | FieldId::FrequencyCapTotal => {
            kind.is_targeted()
        }
        FieldId::Paused => mode.is_edit(),
        _ => true,
    }
}

/// Channel and locale are fixed once the ad group is created.
pub fn is_editable(field: FieldId, mode: FormMode) -> bool {
    !(mode.is_edit() && matches!(field, FieldId::Channel | FieldId::Locale))
}

/// Fields shown for this mode and type, in display order.
pub fn visible_fields(mode: FormMode, kind: AdgroupType) -> Vec<FieldId> {
    FieldId::ALL
        .into_iter()
        .filter(|&f| is_visible(f, mode, kind))
        .collect()
}

/// Fields that can take focus: visible and editable.
pub fn focusable_fields(mode: FormMode, kind: AdgroupType) -> Vec<FieldId> {
    FieldId::ALL
        .into_iter()
        .filter(|&f| is_visible(f, mode, kind) && is_editable(f, mode))
        .collect()
}

/// Rules bound to a field. Hidden or read-only fields have none.
pub fn rules_for(field: FieldId, mode: FormMode, kind: AdgroupType) -> &'static [Rule] {
    if !is_visible(field, mode, kind) || !is_editable(field, mode) {
        return &[];
    }
    match field {
        FieldId::Name => &[Rule::Required, Rule::MinLength(NAME_MIN_LENGTH)],
        FieldId::Channel | FieldId::Locale => &[Rule::Required],
        FieldId::Categories => &[Rule::MinSelected(1)],
        FieldId::FrequencyCapDaily | FieldId::FrequencyCapTotal => {
            &[Rule::Required, Rule::Numeric]
        }
        FieldId::Type | FieldId::Explanation | FieldId::CheckInadjacency | FieldId::Paused => &[],
    }
}
