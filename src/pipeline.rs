//! Submission pipeline — coordinates the analysis call and best-effort
//! persistence.
//!
//! One submission at a time: the busy flag is taken before the provider
//! call and released when it completes, success or failure. A second
//! submit while busy is rejected, never queued. Persistence failures are
//! logged and swallowed so the user still sees a successful analysis.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::analysis::{AnalysisProvider, AnalysisResult};
use crate::error::LlmError;
use crate::profile::UserProfile;
use crate::store::ProfileStore;

/// Why a submission did not produce an analysis.
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    /// A submission is already in flight.
    #[error("A submission is already in progress")]
    Busy,

    /// The analysis provider rejected or failed. The caller's pre-submission
    /// state is untouched; this is a generic notice, not a validation error.
    #[error("Analysis failed: {0}")]
    Analysis(#[from] LlmError),
}

/// Coordinates analyze-then-persist for finalized profiles.
pub struct SubmitPipeline {
    provider: Arc<dyn AnalysisProvider>,
    store: Arc<dyn ProfileStore>,
    busy: AtomicBool,
}

/// Releases the busy flag when the submission completes.
struct BusyGuard<'a>(&'a AtomicBool);

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl SubmitPipeline {
    pub fn new(provider: Arc<dyn AnalysisProvider>, store: Arc<dyn ProfileStore>) -> Self {
        Self {
            provider,
            store,
            busy: AtomicBool::new(false),
        }
    }

    /// Whether a submission is currently in flight.
    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    /// Submit a finalized profile for analysis.
    ///
    /// On success the profile and analysis are persisted best-effort and
    /// the analysis is returned. On failure the stored state is left as it
    /// was. Rejects with [`SubmitError::Busy`] while another submission is
    /// in flight.
    pub async fn submit(
        &self,
        user_id: &str,
        profile: &UserProfile,
    ) -> Result<AnalysisResult, SubmitError> {
        if self
            .busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Err(SubmitError::Busy);
        }
        let _guard = BusyGuard(&self.busy);

        let analysis = self.provider.analyze(profile).await?;

        if let Err(e) = self
            .store
            .upsert_profile(user_id, profile, Some(&analysis))
            .await
        {
            tracing::warn!(user_id, "Failed to persist profile: {e}");
        }

        Ok(analysis)
    }
}
