//! View selection — one exhaustively matched sum type, one resolver.

use serde::{Deserialize, Serialize};

use super::session::AppState;

/// Every screen the application can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppView {
    Landing,
    Login,
    Register,
    Onboarding,
    Dashboard,
    Pricing,
    Profile,
}

impl Default for AppView {
    fn default() -> Self {
        Self::Landing
    }
}

/// Resolve a requested view against the current state.
///
/// Views with preconditions fall back to `Onboarding` when unmet: the
/// dashboard needs both a profile and an analysis, the profile editor
/// needs a profile.
pub fn resolve(state: &AppState, requested: AppView) -> AppView {
    match requested {
        AppView::Dashboard => {
            if state.profile.is_some() && state.analysis.is_some() {
                AppView::Dashboard
            } else {
                AppView::Onboarding
            }
        }
        AppView::Profile => {
            if state.profile.is_some() {
                AppView::Profile
            } else {
                AppView::Onboarding
            }
        }
        other => other,
    }
}

/// Where the landing page's start button leads: straight to the dashboard
/// for a signed-in user, registration otherwise.
pub fn start_target(state: &AppState) -> AppView {
    if state.is_signed_in() {
        resolve(state, AppView::Dashboard)
    } else {
        AppView::Register
    }
}
