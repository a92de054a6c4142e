//! Session reducer — discrete auth events over one application state.

use crate::analysis::AnalysisResult;
use crate::profile::UserProfile;
use crate::store::StoredProfile;

use super::view::{AppView, resolve};

/// An authenticated session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user_id: String,
}

/// Discrete authentication events emitted by the auth collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthEvent {
    SignedIn { user_id: String },
    SignedOut,
}

/// The whole application state consumed by the view resolver.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub session: Option<Session>,
    pub profile: Option<UserProfile>,
    pub analysis: Option<AnalysisResult>,
    pub view: AppView,
}

impl AppState {
    pub fn is_signed_in(&self) -> bool {
        self.session.is_some()
    }

    /// Apply one auth event. Sign-out clears all user data and returns to
    /// the landing page; sign-in establishes the session — profile
    /// hydration follows separately via [`AppState::hydrate`].
    pub fn apply(&mut self, event: AuthEvent) {
        match event {
            AuthEvent::SignedIn { user_id } => {
                self.session = Some(Session { user_id });
            }
            AuthEvent::SignedOut => {
                self.session = None;
                self.profile = None;
                self.analysis = None;
                self.view = AppView::Landing;
            }
        }
    }

    /// Hydrate from storage after sign-in and pick the next view.
    ///
    /// A stored profile without an analysis is treated as incomplete and
    /// routes to onboarding, not to an edit state.
    pub fn hydrate(&mut self, stored: Option<StoredProfile>) {
        match stored {
            Some(StoredProfile {
                profile,
                analysis: Some(analysis),
                ..
            }) => {
                self.profile = Some(profile);
                self.analysis = Some(analysis);
                self.view = resolve(self, AppView::Dashboard);
            }
            Some(StoredProfile { profile, .. }) => {
                self.profile = Some(profile);
                self.analysis = None;
                self.view = AppView::Onboarding;
            }
            None => {
                self.view = AppView::Onboarding;
            }
        }
    }

    /// Record a completed submission and move to the dashboard.
    pub fn complete_submission(&mut self, profile: UserProfile, analysis: AnalysisResult) {
        self.profile = Some(profile);
        self.analysis = Some(analysis);
        self.view = resolve(self, AppView::Dashboard);
    }

    /// Navigate to a requested view, subject to the resolver's rules.
    pub fn navigate(&mut self, requested: AppView) {
        self.view = resolve(self, requested);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn analysis() -> AnalysisResult {
        serde_json::from_str(crate::analysis::model::tests::sample_json()).unwrap()
    }

    fn stored(analysis: Option<AnalysisResult>) -> StoredProfile {
        StoredProfile {
            profile: UserProfile {
                name: "Alice".to_string(),
                ..Default::default()
            },
            analysis,
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn signed_in_establishes_session() {
        let mut state = AppState::default();
        state.apply(AuthEvent::SignedIn {
            user_id: "u1".to_string(),
        });
        assert!(state.is_signed_in());
        assert_eq!(state.session.as_ref().unwrap().user_id, "u1");
    }

    #[test]
    fn signed_out_clears_everything() {
        let mut state = AppState::default();
        state.apply(AuthEvent::SignedIn {
            user_id: "u1".to_string(),
        });
        state.complete_submission(UserProfile::default(), analysis());
        assert_eq!(state.view, AppView::Dashboard);

        state.apply(AuthEvent::SignedOut);
        assert!(!state.is_signed_in());
        assert!(state.profile.is_none());
        assert!(state.analysis.is_none());
        assert_eq!(state.view, AppView::Landing);
    }

    #[test]
    fn hydrate_with_analysis_goes_to_dashboard() {
        let mut state = AppState::default();
        state.hydrate(Some(stored(Some(analysis()))));
        assert_eq!(state.view, AppView::Dashboard);
        assert_eq!(state.profile.as_ref().unwrap().name, "Alice");
    }

    #[test]
    fn hydrate_without_analysis_routes_to_onboarding() {
        let mut state = AppState::default();
        state.hydrate(Some(stored(None)));
        assert_eq!(state.view, AppView::Onboarding);
        assert!(state.profile.is_some());
    }

    #[test]
    fn hydrate_without_profile_routes_to_onboarding() {
        let mut state = AppState::default();
        state.hydrate(None);
        assert_eq!(state.view, AppView::Onboarding);
        assert!(state.profile.is_none());
    }

    #[test]
    fn navigate_respects_resolver_rules() {
        let mut state = AppState::default();
        state.navigate(AppView::Dashboard);
        assert_eq!(state.view, AppView::Onboarding);

        state.navigate(AppView::Pricing);
        assert_eq!(state.view, AppView::Pricing);
    }
}
