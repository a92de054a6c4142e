//! Skill tag editor — ordered distinct tags with typeahead against the
//! static catalog.
//!
//! The editor's only output is the canonical `skills` serialization (see
//! [`super::model::join_skills`]); the selected-tag sequence is derived from
//! it on every read rather than stored separately. No network or
//! persistence side effects originate here.

use super::catalog::{SkillCatalog, skill_catalog};
use super::model::{join_skills, split_skills};

/// Transient editor state around one `skills` string.
#[derive(Debug, Clone)]
pub struct SkillTagEditor {
    value: String,
    draft: String,
    suggestions: Vec<&'static str>,
    notice: Option<String>,
    focused: bool,
    catalog: &'static SkillCatalog,
}

impl SkillTagEditor {
    /// Open the editor over an existing serialized skills value.
    pub fn new(initial: &str) -> Self {
        Self {
            value: initial.to_string(),
            draft: String::new(),
            suggestions: Vec::new(),
            notice: None,
            focused: false,
            catalog: skill_catalog(),
        }
    }

    /// The canonical serialized value to propagate to the owning profile.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// The selected tags, derived from the serialized value.
    pub fn selected(&self) -> Vec<String> {
        split_skills(&self.value)
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn suggestions(&self) -> &[&'static str] {
        &self.suggestions
    }

    /// Transient duplicate-tag notice, if any.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Store the draft text and recompute typeahead suggestions.
    pub fn on_input_change(&mut self, text: &str) {
        self.draft = text.to_string();
        self.notice = None;
        self.suggestions = self.catalog.suggest(&self.draft, &self.selected());
    }

    /// Append a tag, rejecting case-insensitive duplicates with a transient
    /// notice instead of an error.
    pub fn add_skill(&mut self, tag: &str) {
        let mut selected = self.selected();
        if selected.iter().any(|s| s.eq_ignore_ascii_case(tag)) {
            self.notice = Some(format!("'{tag}' is already added."));
            return;
        }
        selected.push(tag.to_string());
        self.value = join_skills(&selected);
        self.draft.clear();
        self.suggestions.clear();
        self.notice = None;
    }

    /// Submit-like trigger (Enter key or suggestion click): resolve the
    /// trimmed draft against the catalog for canonical casing, falling back
    /// to the raw input verbatim. No-op on whitespace-only input.
    pub fn attempt_add_from_input(&mut self) {
        let raw = self.draft.trim().to_string();
        if raw.is_empty() {
            return;
        }
        match self.catalog.resolve(&raw) {
            Some(canonical) => self.add_skill(canonical),
            None => self.add_skill(&raw),
        }
    }

    /// Remove the first exact-string match from the selection.
    pub fn remove_skill(&mut self, tag: &str) {
        let mut selected = self.selected();
        if let Some(pos) = selected.iter().position(|s| s == tag) {
            selected.remove(pos);
            self.value = join_skills(&selected);
        }
    }

    /// Backspace on an empty draft removes the most recently added tag.
    pub fn backspace(&mut self) {
        if !self.draft.is_empty() {
            return;
        }
        if let Some(last) = self.selected().last().cloned() {
            self.remove_skill(&last);
        }
    }

    pub fn focus(&mut self) {
        self.focused = true;
    }

    /// Pointer interaction outside the editor: close the suggestion list
    /// and drop focus, keeping the draft and selection.
    pub fn blur(&mut self) {
        self.suggestions.clear();
        self.focused = false;
    }
}
