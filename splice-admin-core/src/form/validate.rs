//! Validation of a draft against the field schema

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use super::draft::AdgroupDraft;
use super::field::FieldId;
use super::schema::rules_for;
use crate::types::FormMode;

/// First failing rule of a field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: FieldId,
    pub message: String,
}

/// Per-field errors, at most one per field, ordered by display order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors {
    errors: BTreeMap<FieldId, String>,
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn get(&self, field: FieldId) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    /// Field that should receive focus after a failed submit.
    pub fn first_field(&self) -> Option<FieldId> {
        self.errors.keys().next().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = FieldError> + '_ {
        self.errors.iter().map(|(field, message)| FieldError {
            field: *field,
            message: message.clone(),
        })
    }

    fn insert(&mut self, field: FieldId, message: String) {
        self.errors.entry(field).or_insert(message);
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for message in self.errors.values() {
            if !first {
                f.write_str("; ")?;
            }
            f.write_str(message)?;
            first = false;
        }
        Ok(())
    }
}

/// Run every rule bound to the draft's visible fields.
///
/// Synchronous and side-effect free; a non-empty result means the submit
/// must not reach the network.
pub fn validate(draft: &AdgroupDraft, mode: FormMode) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::default();
    for field in FieldId::ALL {
        for rule in rules_for(field, mode, draft.kind) {
            if let Err(message) = rule.check(field, draft.value(field)) {
                errors.insert(field, message);
                break;
            }
        }
    }
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
