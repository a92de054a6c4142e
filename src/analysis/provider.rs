//! Analysis provider trait and the Gemini-backed implementation.

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde_json::json;

use crate::error::LlmError;
use crate::profile::UserProfile;

use super::model::AnalysisResult;
use super::prompts::{analysis_prompt, parse_analysis_response, response_schema};

const PROVIDER: &str = "gemini";
const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// The remote career-analysis capability.
#[async_trait]
pub trait AnalysisProvider: Send + Sync {
    /// Turn a finalized profile into a structured career analysis.
    async fn analyze(&self, profile: &UserProfile) -> Result<AnalysisResult, LlmError>;

    /// Model identifier, for logging.
    fn model_name(&self) -> &str;
}

/// Gemini `generateContent` client with structured JSON output.
pub struct GeminiAnalyst {
    http: reqwest::Client,
    api_key: SecretString,
    model: String,
}

impl GeminiAnalyst {
    pub fn new(api_key: SecretString, model: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key,
            model: model.into(),
        }
    }

    /// Request body for one analysis call.
    fn request_body(profile: &UserProfile) -> serde_json::Value {
        json!({
            "contents": [{"parts": [{"text": analysis_prompt(profile)}]}],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": response_schema(),
            },
        })
    }
}

#[async_trait]
impl AnalysisProvider for GeminiAnalyst {
    async fn analyze(&self, profile: &UserProfile) -> Result<AnalysisResult, LlmError> {
        let url = format!("{API_BASE}/{}:generateContent", self.model);
        tracing::info!(model = %self.model, "Requesting career analysis");

        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", self.api_key.expose_secret())
            .json(&Self::request_body(profile))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(LlmError::RequestFailed {
                provider: PROVIDER.to_string(),
                reason: format!("HTTP {status}: {body}"),
            });
        }

        let payload: serde_json::Value = response.json().await?;
        let text = payload["candidates"][0]["content"]["parts"][0]["text"]
            .as_str()
            .ok_or_else(|| LlmError::InvalidResponse {
                provider: PROVIDER.to_string(),
                reason: "no text candidate in response".to_string(),
            })?;

        parse_analysis_response(PROVIDER, text)
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_body_carries_prompt_and_schema() {
        let profile = UserProfile {
            name: "Bob".to_string(),
            skills: "Go, Rust, SQL".to_string(),
            ..Default::default()
        };
        let body = GeminiAnalyst::request_body(&profile);

        let text = body["contents"][0]["parts"][0]["text"].as_str().unwrap();
        assert!(text.contains("Candidate Name: Bob"));
        assert_eq!(
            body["generationConfig"]["responseMimeType"],
            "application/json"
        );
        assert!(body["generationConfig"]["responseSchema"].is_object());
    }

    #[test]
    fn analyst_reports_model_name() {
        let analyst = GeminiAnalyst::new(SecretString::from("test-key"), "gemini-2.5-flash");
        assert_eq!(analyst.model_name(), "gemini-2.5-flash");
    }
}
