//! Onboarding wizard state machine.
//!
//! Holds the mutable profile draft while a new user walks through the three
//! steps. Each `next()` validates the step being left; `back()` never
//! re-validates. The error slot reflects the last validation attempt only —
//! any field edit clears it optimistically.

use super::model::{ProfileField, UserProfile};
use super::validation::{Step, ValidationError, validate_step};

/// Wizard state: current step, profile draft, and the last validation error.
#[derive(Debug, Clone, Default)]
pub struct OnboardingWizard {
    step: Step,
    profile: UserProfile,
    error: Option<ValidationError>,
}

impl OnboardingWizard {
    /// Start a fresh wizard at step 1 with an empty draft.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    pub fn error(&self) -> Option<&ValidationError> {
        self.error.as_ref()
    }

    /// Update a single profile field and clear the error slot.
    pub fn edit(&mut self, field: ProfileField, value: impl Into<String>) {
        self.profile.set_field(field, value);
        self.error = None;
    }

    /// Advance to the next step if the current step validates.
    ///
    /// Returns `true` when the step changed. On a validation failure the
    /// wizard stays put with the first failing rule's message in the error
    /// slot. No-op on the final step, where `try_finish` takes over.
    pub fn next(&mut self) -> bool {
        let Some(target) = self.step.next() else {
            return false;
        };
        match validate_step(self.step, &self.profile) {
            Ok(()) => {
                self.step = target;
                self.error = None;
                true
            }
            Err(err) => {
                self.error = Some(err);
                false
            }
        }
    }

    /// Move back one step unconditionally. The step being left is not
    /// re-validated; any error is cleared.
    pub fn back(&mut self) -> bool {
        match self.step.prev() {
            Some(target) => {
                self.step = target;
                self.error = None;
                true
            }
            None => false,
        }
    }

    /// Attempt to finish the wizard from the final step.
    ///
    /// Re-validates the resume step only (earlier steps were validated on
    /// the way in). On pass, returns the finalized profile to hand to the
    /// submission pipeline; the wizard itself is left intact so a failed
    /// submission can resume exactly where it was.
    pub fn try_finish(&mut self) -> Option<UserProfile> {
        if !self.step.is_last() {
            return None;
        }
        match validate_step(Step::Resume, &self.profile) {
            Ok(()) => {
                self.error = None;
                Some(self.profile.clone())
            }
            Err(err) => {
                self.error = Some(err);
                None
            }
        }
    }
}
