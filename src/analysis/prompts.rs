//! Analysis prompt, response schema, and response parsing.

use serde_json::json;

use crate::error::LlmError;
use crate::profile::UserProfile;

use super::model::AnalysisResult;

/// Build the career-analysis prompt for a candidate profile.
pub fn analysis_prompt(profile: &UserProfile) -> String {
    format!(
        "\
Analyze the following candidate profile for career optimization.

Candidate Name: {name}
Education: {education}
Stated Skills: {skills}
Interests: {interests}
Resume Content: {resume}

Please provide:
1. A skills analysis (strengths, weaknesses, and a numeric skill matrix for a radar chart).
2. Top 5 career matches with match percentage, salary range, and demand.
3. A personalized learning roadmap with phases.
4. Resume feedback with a score out of 100.
5. A fully rewritten, professional \"Resume Body\" text.
   - IMPORTANT: Do NOT include the Name, Email, or Contact Info at the top (these will be added dynamically).
   - Start directly with a \"Professional Summary\".
   - Include \"Experience\", \"Projects\", \"Education\" (optimized), and \"Skills\" sections.
   - Use clear formatting with bullet points where appropriate.
   - Ensure the Education section from the profile is included and formatted professionally.

Be realistic but encouraging. The tone should be professional and futuristic.",
        name = profile.name,
        education = profile.education,
        skills = profile.skills,
        interests = profile.interests,
        resume = profile.resume_text,
    )
}

/// Structured-output schema sent alongside the prompt, constraining the
/// model to the `AnalysisResult` shape.
pub fn response_schema() -> serde_json::Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "skillsAnalysis": {
                "type": "OBJECT",
                "properties": {
                    "strengths": {"type": "ARRAY", "items": {"type": "STRING"}},
                    "weaknesses": {"type": "ARRAY", "items": {"type": "STRING"}},
                    "skillMatrix": {
                        "type": "ARRAY",
                        "items": {
                            "type": "OBJECT",
                            "properties": {
                                "skill": {"type": "STRING"},
                                "level": {"type": "INTEGER", "description": "Skill level from 0 to 100"},
                                "category": {"type": "STRING", "description": "e.g., Technical, Soft, Analytical"}
                            },
                            "required": ["skill", "level", "category"]
                        }
                    }
                },
                "required": ["strengths", "weaknesses", "skillMatrix"]
            },
            "careerMatches": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "title": {"type": "STRING"},
                        "matchPercentage": {"type": "INTEGER"},
                        "salaryRange": {"type": "STRING"},
                        "demandLevel": {"type": "STRING", "enum": ["High", "Medium", "Low"]},
                        "description": {"type": "STRING"}
                    },
                    "required": ["title", "matchPercentage", "salaryRange", "demandLevel", "description"]
                }
            },
            "roadmap": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "phase": {"type": "STRING"},
                        "duration": {"type": "STRING"},
                        "tasks": {"type": "ARRAY", "items": {"type": "STRING"}}
                    },
                    "required": ["phase", "duration", "tasks"]
                }
            },
            "resumeFeedback": {
                "type": "OBJECT",
                "properties": {
                    "score": {"type": "INTEGER"},
                    "strengths": {"type": "ARRAY", "items": {"type": "STRING"}},
                    "weaknesses": {"type": "ARRAY", "items": {"type": "STRING"}},
                    "improvements": {"type": "ARRAY", "items": {"type": "STRING"}}
                },
                "required": ["score", "strengths", "weaknesses", "improvements"]
            },
            "optimizedResume": {"type": "STRING"}
        },
        "required": ["skillsAnalysis", "careerMatches", "roadmap", "resumeFeedback", "optimizedResume"]
    })
}

/// Parse the model's JSON text into an `AnalysisResult`.
///
/// Tolerates markdown code fences, which some models emit despite the JSON
/// response mime type.
pub fn parse_analysis_response(provider: &str, text: &str) -> Result<AnalysisResult, LlmError> {
    let trimmed = strip_code_fences(text.trim());
    serde_json::from_str(trimmed).map_err(|e| LlmError::InvalidResponse {
        provider: provider.to_string(),
        reason: format!("analysis JSON did not match schema: {e}"),
    })
}

fn strip_code_fences(text: &str) -> &str {
    let text = text
        .strip_prefix("```json")
        .or_else(|| text.strip_prefix("```"))
        .unwrap_or(text);
    text.strip_suffix("```").unwrap_or(text).trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_profile() -> UserProfile {
        UserProfile {
            name: "Alice Ray".to_string(),
            email: "alice@example.com".to_string(),
            education: "Senior CS Student".to_string(),
            skills: "Python, SQL, Docker".to_string(),
            interests: "Open Source".to_string(),
            resume_text: "Built data pipelines.".to_string(),
        }
    }

    #[test]
    fn prompt_interpolates_profile_fields() {
        let prompt = analysis_prompt(&sample_profile());
        assert!(prompt.contains("Candidate Name: Alice Ray"));
        assert!(prompt.contains("Stated Skills: Python, SQL, Docker"));
        assert!(prompt.contains("Resume Content: Built data pipelines."));
        // Email is intentionally not part of the prompt
        assert!(!prompt.contains("alice@example.com"));
    }

    #[test]
    fn schema_covers_all_top_level_sections() {
        let schema = response_schema();
        let props = schema["properties"].as_object().unwrap();
        for key in [
            "skillsAnalysis",
            "careerMatches",
            "roadmap",
            "resumeFeedback",
            "optimizedResume",
        ] {
            assert!(props.contains_key(key), "schema missing {key}");
        }
    }

    #[test]
    fn parse_accepts_bare_and_fenced_json() {
        let json = crate::analysis::model::tests::sample_json();
        assert!(parse_analysis_response("gemini", json).is_ok());

        let fenced = format!("```json\n{json}\n```");
        assert!(parse_analysis_response("gemini", &fenced).is_ok());
    }

    #[test]
    fn parse_rejects_non_schema_json() {
        let err = parse_analysis_response("gemini", r#"{"hello": "world"}"#).unwrap_err();
        match err {
            LlmError::InvalidResponse { provider, .. } => assert_eq!(provider, "gemini"),
            other => panic!("unexpected error: {other}"),
        }
    }
}
