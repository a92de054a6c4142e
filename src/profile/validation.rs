//! Per-step validation rules for the onboarding wizard and the edit form.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::model::UserProfile;

/// Simple `local@domain.tld` shape. Deliberately loose — the address is
/// never verified, only sanity-checked.
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex is valid"));

/// The three ordered stages of first-time onboarding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    Identity,
    Skills,
    Resume,
}

impl Step {
    /// 1-based step number, as shown in the UI ("Step {n}/3").
    pub fn number(&self) -> u8 {
        match self {
            Self::Identity => 1,
            Self::Skills => 2,
            Self::Resume => 3,
        }
    }

    /// The step after this one, if any.
    pub fn next(&self) -> Option<Step> {
        match self {
            Self::Identity => Some(Self::Skills),
            Self::Skills => Some(Self::Resume),
            Self::Resume => None,
        }
    }

    /// The step before this one, if any.
    pub fn prev(&self) -> Option<Step> {
        match self {
            Self::Identity => None,
            Self::Skills => Some(Self::Identity),
            Self::Resume => Some(Self::Skills),
        }
    }

    /// Whether this is the final step (where `Submit` becomes available).
    pub fn is_last(&self) -> bool {
        matches!(self, Self::Resume)
    }
}

impl Default for Step {
    fn default() -> Self {
        Self::Identity
    }
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "step {}", self.number())
    }
}

/// A failed validation: one human-readable message tied to one step.
///
/// Validation failures are state, not control flow — they live in the
/// wizard's error slot and are cleared on the next edit or transition.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ValidationError {
    pub step: Step,
    pub message: String,
}

impl ValidationError {
    fn new(step: Step, message: impl Into<String>) -> Self {
        Self {
            step,
            message: message.into(),
        }
    }
}

/// Validate a single step of the profile. First violated rule wins.
pub fn validate_step(step: Step, profile: &UserProfile) -> Result<(), ValidationError> {
    match step {
        Step::Identity => {
            if profile.name.trim().is_empty() {
                return Err(ValidationError::new(step, "Full Name is required."));
            }
            if profile.email.trim().is_empty() || !EMAIL_RE.is_match(&profile.email) {
                return Err(ValidationError::new(
                    step,
                    "Please enter a valid email address.",
                ));
            }
            if profile.education.trim().is_empty() {
                return Err(ValidationError::new(step, "Education / Role is required."));
            }
            Ok(())
        }
        Step::Skills => {
            let count = profile.skill_count();
            if count < 3 {
                return Err(ValidationError::new(
                    step,
                    format!(
                        "Please select at least 3 skills from the database (Current: {count})."
                    ),
                ));
            }
            Ok(())
        }
        Step::Resume => {
            if profile.resume_text.trim().len() < 50 {
                return Err(ValidationError::new(
                    step,
                    "Please provide more resume content (at least 50 characters) for accurate analysis.",
                ));
            }
            Ok(())
        }
    }
}

/// Validate the union of all three rule sets, in step order. Used by the
/// single-form edit flow and by the HTTP submit endpoint.
pub fn validate_all(profile: &UserProfile) -> Result<(), ValidationError> {
    validate_step(Step::Identity, profile)?;
    validate_step(Step::Skills, profile)?;
    validate_step(Step::Resume, profile)
}
