//! Widget bindings of the form

use crate::types::FormMode;

/// Tracks which entity the form's validation bindings and multi-select
/// widgets are attached to.
///
/// Every successful [`FormBindings::reconcile`] bumps `generation`; views
/// and pickers compare generations to know when their cached state is stale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormBindings {
    identity: Option<FormMode>,
    generation: u64,
}

impl FormBindings {
    pub fn identity(&self) -> Option<FormMode> {
        self.identity
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Attach to `identity`. Returns `true` when the identity changed and the
    /// caller must re-initialize errors, focus and picker state; reconciling
    /// with the current identity is a no-op.
    pub fn reconcile(&mut self, identity: FormMode) -> bool {
        if self.identity == Some(identity) {
            return false;
        }
        self.identity = Some(identity);
        self.generation += 1;
        true
    }

    /// Detach, so the next reconcile always re-initializes.
    pub fn reset(&mut self) {
        self.identity = None;
    }
}
