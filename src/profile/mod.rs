//! Profile system — the onboarding wizard, the edit form, and the skill
//! tag editor that both of them embed.
//!
//! The wizard walks a new user through three steps (identity, skills,
//! resume), validating each step before advancing and handing the finalized
//! `UserProfile` to the submission pipeline. The edit form applies the same
//! rules all at once against a pre-populated profile.

pub mod catalog;
pub mod editor;
pub mod model;
pub mod tags;
pub mod validation;
pub mod wizard;

pub use catalog::{SkillCatalog, skill_catalog};
pub use editor::ProfileEditor;
pub use model::{ProfileField, UserProfile, join_skills, split_skills};
pub use tags::SkillTagEditor;
pub use validation::{Step, ValidationError, validate_all, validate_step};
pub use wizard::OnboardingWizard;

/// Default user ID (single-user local deployment).
pub const DEFAULT_USER: &str = "default";
