//! `ProfileStore` trait — async interface for profile persistence.
//!
//! Persistence is best-effort from the flow's point of view: the submission
//! pipeline logs and swallows failures here so a backend outage never hides
//! a successful analysis from the user.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::analysis::AnalysisResult;
use crate::error::DatabaseError;
use crate::profile::UserProfile;

/// A persisted profile row with its optional analysis.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredProfile {
    pub profile: UserProfile,
    pub analysis: Option<AnalysisResult>,
    pub updated_at: DateTime<Utc>,
}

/// Backend-agnostic profile storage.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Fetch the stored profile for a user, if any.
    async fn get_profile(&self, user_id: &str) -> Result<Option<StoredProfile>, DatabaseError>;

    /// Insert or update a user's profile.
    ///
    /// Passing `analysis: None` leaves any previously stored analysis in
    /// place; it never clears it.
    async fn upsert_profile(
        &self,
        user_id: &str,
        profile: &UserProfile,
        analysis: Option<&AnalysisResult>,
    ) -> Result<(), DatabaseError>;

    /// Delete a user's profile and analysis.
    async fn delete_profile(&self, user_id: &str) -> Result<(), DatabaseError>;
}
