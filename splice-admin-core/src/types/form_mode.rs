//! Create vs. edit

use serde::{Deserialize, Serialize};

/// Which operation a form submission performs.
///
/// The mode is also the form's bound identity: reconciling bindings compares
/// modes, so moving from one ad group to another re-initializes the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "camelCase")]
pub enum FormMode {
    /// New ad group inside a campaign (no id yet).
    Create { campaign_id: i64 },
    /// Existing ad group.
    Edit { id: i64 },
}

impl FormMode {
    /// Id of the entity being edited, `None` while creating.
    pub fn id(self) -> Option<i64> {
        match self {
            Self::Create { .. } => None,
            Self::Edit { id } => Some(id),
        }
    }

    pub fn is_edit(self) -> bool {
        matches!(self, Self::Edit { .. })
    }

    /// Text of the notification raised after a successful save.
    pub fn success_message(self) -> &'static str {
        match self {
            Self::Create { .. } => "Ad Group Created Successfully",
            Self::Edit { .. } => "Ad Group Updated Successfully",
        }
    }

    /// Label of the submit button.
    pub fn action_label(self) -> &'static str {
        match self {
            Self::Create { .. } => "Create",
            Self::Edit { .. } => "Save",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_messages_depend_on_mode() {
        assert_eq!(
            FormMode::Create { campaign_id: 1 }.success_message(),
            "Ad Group Created Successfully"
        );
        assert_eq!(
            FormMode::Edit { id: 42 }.success_message(),
            "Ad Group Updated Successfully"
        );
    }

    #[test]
    fn only_edit_mode_has_an_id() {
        assert_eq!(FormMode::Create { campaign_id: 3 }.id(), None);
        assert_eq!(FormMode::Edit { id: 9 }.id(), Some(9));
    }
}
