//! User profile data model and the canonical skills serialization.

use serde::{Deserialize, Serialize};

/// A candidate profile, as collected by the onboarding wizard.
///
/// `skills` holds the canonical serialization of the selected skill tags:
/// a comma-and-space-joined sequence of distinct tags, insertion order
/// preserved, unique under case-insensitive comparison.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    pub education: String,
    pub skills: String,
    pub interests: String,
    pub resume_text: String,
}

/// A profile field addressable by name, for form-style edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileField {
    Name,
    Email,
    Education,
    Skills,
    Interests,
    ResumeText,
}

impl UserProfile {
    /// Set a single field by name.
    pub fn set_field(&mut self, field: ProfileField, value: impl Into<String>) {
        let value = value.into();
        match field {
            ProfileField::Name => self.name = value,
            ProfileField::Email => self.email = value,
            ProfileField::Education => self.education = value,
            ProfileField::Skills => self.skills = value,
            ProfileField::Interests => self.interests = value,
            ProfileField::ResumeText => self.resume_text = value,
        }
    }

    /// Deserialize the skills string into its tag sequence.
    pub fn skill_list(&self) -> Vec<String> {
        split_skills(&self.skills)
    }

    /// Number of selected skill tags.
    pub fn skill_count(&self) -> usize {
        self.skill_list().len()
    }
}

/// Split a serialized skills string into tags: split on `,`, trim each
/// entry, drop empties.
pub fn split_skills(serialized: &str) -> Vec<String> {
    serialized
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

/// Join a tag sequence back into the canonical comma-and-space form.
pub fn join_skills(tags: &[String]) -> String {
    tags.join(", ")
}
