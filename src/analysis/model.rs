//! Structured analysis result returned by the AI provider.
//!
//! Field names follow the provider's JSON response schema (camelCase), so
//! these types deserialize the model output directly and round-trip through
//! the `analysis_data` column unchanged.

use serde::{Deserialize, Serialize};

/// One axis of the skills radar chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillMetric {
    pub skill: String,
    /// Skill level from 0 to 100.
    pub level: u8,
    /// e.g. "Technical", "Soft", "Analytical".
    pub category: String,
}

/// Labor-market demand bucket for a career match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DemandLevel {
    High,
    Medium,
    Low,
}

/// A suggested career path with fit and market signals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerMatch {
    pub title: String,
    pub match_percentage: u8,
    pub salary_range: String,
    pub demand_level: DemandLevel,
    pub description: String,
}

/// One phase of the personalized learning roadmap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadmapStep {
    pub phase: String,
    pub duration: String,
    pub tasks: Vec<String>,
}

/// Scored feedback on the submitted resume text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeFeedback {
    /// Score out of 100.
    pub score: u8,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub improvements: Vec<String>,
}

/// Strengths, weaknesses, and the radar matrix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillsAnalysis {
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub skill_matrix: Vec<SkillMetric>,
}

/// The full career analysis for one profile submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub skills_analysis: SkillsAnalysis,
    pub career_matches: Vec<CareerMatch>,
    pub roadmap: Vec<RoadmapStep>,
    pub resume_feedback: ResumeFeedback,
    /// Rewritten professional resume body (no name/contact header).
    pub optimized_resume: String,
}
