//! Profile edit form — the single-step re-submission flow.
//!
//! Starts from an existing profile and applies the union of all three step
//! rule sets at once, in the same first-failure-wins order as the wizard,
//! before funnelling into the same submission pipeline.

use super::model::{ProfileField, UserProfile};
use super::validation::{ValidationError, validate_all};

/// Edit-form state: profile draft plus the last validation error.
#[derive(Debug, Clone)]
pub struct ProfileEditor {
    profile: UserProfile,
    error: Option<ValidationError>,
}

impl ProfileEditor {
    /// Open the editor over an existing profile.
    pub fn new(initial: UserProfile) -> Self {
        Self {
            profile: initial,
            error: None,
        }
    }

    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    pub fn error(&self) -> Option<&ValidationError> {
        self.error.as_ref()
    }

    /// Update a single field and clear the error slot.
    pub fn edit(&mut self, field: ProfileField, value: impl Into<String>) {
        self.profile.set_field(field, value);
        self.error = None;
    }

    /// Validate everything; on pass, return the edited profile for
    /// re-submission. The editor keeps its state either way.
    pub fn try_save(&mut self) -> Option<UserProfile> {
        match validate_all(&self.profile) {
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
