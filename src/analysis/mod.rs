//! Career analysis — the remote generative-AI collaborator.
//!
//! A finalized `UserProfile` goes in, a structured `AnalysisResult` (skills
//! radar, career matches, roadmap, resume feedback, rewritten resume body)
//! comes back. The call is opaque to the rest of the system: anything that
//! goes wrong surfaces as a single `LlmError` and the caller returns to its
//! pre-submission state.

pub mod model;
pub mod prompts;
pub mod provider;

pub use model::{
    AnalysisResult, CareerMatch, DemandLevel, ResumeFeedback, RoadmapStep, SkillMetric,
    SkillsAnalysis,
};
pub use provider::{AnalysisProvider, GeminiAnalyst};
