//! End-to-end onboarding flow: wizard + tag editor → submission pipeline →
//! store, with the analysis provider mocked out.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use career_pilot::analysis::{
    AnalysisProvider, AnalysisResult, CareerMatch, DemandLevel, ResumeFeedback, RoadmapStep,
    SkillMetric, SkillsAnalysis,
};
use career_pilot::app::{AppState, AppView, AuthEvent};
use career_pilot::error::LlmError;
use career_pilot::pipeline::{SubmitError, SubmitPipeline};
use career_pilot::profile::{OnboardingWizard, ProfileField, SkillTagEditor, Step};
use career_pilot::store::{LibSqlBackend, ProfileStore};

fn canned_analysis() -> AnalysisResult {
    AnalysisResult {
        skills_analysis: SkillsAnalysis {
            strengths: vec!["Solid fundamentals".to_string()],
            weaknesses: vec!["Narrow tooling exposure".to_string()],
            skill_matrix: vec![SkillMetric {
                skill: "Python".to_string(),
                level: 80,
                category: "Technical".to_string(),
            }],
        },
        career_matches: vec![CareerMatch {
            title: "Data Engineer".to_string(),
            match_percentage: 85,
            salary_range: "$95k - $140k".to_string(),
            demand_level: DemandLevel::High,
            description: "Pipelines and platforms.".to_string(),
        }],
        roadmap: vec![RoadmapStep {
            phase: "Foundation".to_string(),
            duration: "3 months".to_string(),
            tasks: vec!["Ship a portfolio project".to_string()],
        }],
        resume_feedback: ResumeFeedback {
            score: 74,
            strengths: vec!["Concrete outcomes".to_string()],
            weaknesses: vec![],
            improvements: vec!["Add metrics".to_string()],
        },
        optimized_resume: "Professional Summary\n...".to_string(),
    }
}

struct MockAnalyst {
    calls: AtomicUsize,
    fail: bool,
}

impl MockAnalyst {
    fn new(fail: bool) -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
            fail,
        })
    }
}

#[async_trait]
impl AnalysisProvider for MockAnalyst {
    async fn analyze(
        &self,
        _profile: &career_pilot::profile::UserProfile,
    ) -> Result<AnalysisResult, LlmError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            Err(LlmError::RequestFailed {
                provider: "mock".to_string(),
                reason: "upstream outage".to_string(),
            })
        } else {
            Ok(canned_analysis())
        }
    }

    fn model_name(&self) -> &str {
        "mock"
    }
}

/// Walk the wizard to a finalized profile, using the tag editor for skills.
fn completed_wizard() -> OnboardingWizard {
    let mut wizard = OnboardingWizard::new();
    wizard.edit(ProfileField::Name, "Alice Ray");
    wizard.edit(ProfileField::Email, "alice@example.com");
    wizard.edit(ProfileField::Education, "Senior CS Student");
    assert!(wizard.next());

    let mut editor = SkillTagEditor::new(wizard.profile().skills.as_str());
    editor.on_input_change("python");
    editor.attempt_add_from_input();
    editor.on_input_change("sql");
    editor.attempt_add_from_input();
    editor.add_skill("Docker");
    wizard.edit(ProfileField::Skills, editor.value());
    assert!(wizard.next());

    wizard.edit(
        ProfileField::ResumeText,
        "Built and operated batch and streaming data pipelines for three years.",
    );
    wizard
}

#[tokio::test]
async fn wizard_to_dashboard_happy_path() {
    let analyst = MockAnalyst::new(false);
    let store = Arc::new(LibSqlBackend::new_memory().await.unwrap());
    let pipeline = SubmitPipeline::new(analyst.clone(), store.clone());

    let mut wizard = completed_wizard();
    // Tag editor resolved catalog casing on the way in
    assert_eq!(wizard.profile().skills, "Python, SQL, Docker");

    let profile = wizard.try_finish().expect("wizard should finish");
    let analysis = pipeline.submit("default", &profile).await.unwrap();
    assert_eq!(analyst.calls.load(Ordering::SeqCst), 1);

    // Persisted for the next session
    let stored = store.get_profile("default").await.unwrap().unwrap();
    assert_eq!(stored.profile, profile);
    assert_eq!(stored.analysis.as_ref(), Some(&analysis));

    // App state lands on the dashboard
    let mut state = AppState::default();
    state.apply(AuthEvent::SignedIn {
        user_id: "default".to_string(),
    });
    state.complete_submission(profile, analysis);
    assert_eq!(state.view, AppView::Dashboard);
}

#[tokio::test]
async fn short_resume_never_reaches_the_provider() {
    let analyst = MockAnalyst::new(false);
    let store = Arc::new(LibSqlBackend::new_memory().await.unwrap());
    let pipeline = SubmitPipeline::new(analyst.clone(), store);

    let mut wizard = completed_wizard();
    wizard.edit(ProfileField::ResumeText, "too short");
    assert!(wizard.try_finish().is_none());
    assert_eq!(wizard.step(), Step::Resume);
    assert!(wizard.error().is_some());

    // No profile was finalized, so nothing to submit
    assert_eq!(analyst.calls.load(Ordering::SeqCst), 0);
    drop(pipeline);
}

#[tokio::test]
async fn provider_failure_leaves_wizard_and_store_intact() {
    let analyst = MockAnalyst::new(true);
    let store = Arc::new(LibSqlBackend::new_memory().await.unwrap());
    let pipeline = SubmitPipeline::new(analyst, store.clone());

    let mut wizard = completed_wizard();
    let profile = wizard.try_finish().unwrap();

    let err = pipeline.submit("default", &profile).await.unwrap_err();
    assert!(matches!(err, SubmitError::Analysis(_)));

    // Pre-submission state retained: same step, profile editable
    assert_eq!(wizard.step(), Step::Resume);
    assert_eq!(wizard.profile(), &profile);
    assert!(wizard.error().is_none());
    assert!(store.get_profile("default").await.unwrap().is_none());
    assert!(!pipeline.is_busy());
}

#[tokio::test]
async fn hydration_without_analysis_routes_to_onboarding() {
    let store = Arc::new(LibSqlBackend::new_memory().await.unwrap());
    let mut wizard = completed_wizard();
    let profile = wizard.try_finish().unwrap();

    // Profile saved without an analysis (e.g. analysis never completed)
    store.upsert_profile("default", &profile, None).await.unwrap();

    let mut state = AppState::default();
    state.apply(AuthEvent::SignedIn {
        user_id: "default".to_string(),
    });
    state.hydrate(store.get_profile("default").await.unwrap());
    assert_eq!(state.view, AppView::Onboarding);
    assert_eq!(state.profile, Some(profile));
}
