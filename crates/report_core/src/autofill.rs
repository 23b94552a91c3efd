//! Gemini-backed draft autofill: one-shot request carrying a free-text
//! case description and a fixed response schema, returning the structured
//! fields to pre-fill the form with. The credential comes from the
//! process-wide settings; its absence is a reported, non-fatal error
//! confined to this flow.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::json;
use thiserror::Error;
use tracing::debug;

use crate::config::Settings;

const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Structured draft fields returned by the AI sink. All fields default so
/// an omitted field becomes empty rather than a parse failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AutofillFields {
    pub case_name: String,
    pub file_code: String,
    pub legal_aid_provider: String,
    pub success_criterion: String,
    pub notes: Option<String>,
}

#[derive(Debug, Error)]
pub enum AutofillError {
    #[error("no Gemini API key is configured; set GEMINI_API_KEY to enable autofill")]
    MissingApiKey,
    #[error("failed to reach the AI service: {0}")]
    Http(#[from] reqwest::Error),
    #[error("AI service returned an error: {0}")]
    Api(String),
    #[error("invalid AI response: {0}")]
    InvalidResponse(String),
}

#[derive(Debug, Serialize)]
struct GeminiRequest {
    contents: Vec<GeminiContent>,
    #[serde(rename = "generationConfig")]
    generation_config: GeminiGenerationConfig,
}

#[derive(Debug, Serialize)]
struct GeminiContent {
    parts: Vec<GeminiPart>,
}

#[derive(Debug, Serialize)]
struct GeminiPart {
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiGenerationConfig {
    response_mime_type: &'static str,
    response_schema: serde_json::Value,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidate {
    content: GeminiResponseContent,
}

#[derive(Debug, Deserialize)]
struct GeminiResponseContent {
    #[serde(default)]
    parts: Vec<GeminiResponsePart>,
}

#[derive(Debug, Deserialize)]
struct GeminiResponsePart {
    text: String,
}

/// Target schema sent with every request; field names match the serde
/// shape of [`AutofillFields`].
fn response_schema() -> serde_json::Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "caseName": { "type": "STRING" },
            "fileCode": { "type": "STRING" },
            "legalAidProvider": { "type": "STRING" },
            "successCriterion": { "type": "STRING" },
            "notes": { "type": "STRING" }
        },
        "required": ["caseName", "fileCode", "legalAidProvider", "successCriterion"]
    })
}

fn build_prompt(description: &str) -> String {
    format!(
        "Bạn là trợ lý nhập liệu cho trung tâm trợ giúp pháp lý. Từ mô tả \
         vụ việc dưới đây, hãy trích xuất tên vụ việc (caseName), mã hồ sơ \
         (fileCode), người thực hiện trợ giúp pháp lý (legalAidProvider), \
         tiêu chí thành công (successCriterion) và ghi chú (notes, nếu có).\n\
         Respond with valid JSON only. No markdown, no explanatory text \
         outside the JSON.\n\nMÔ TẢ VỤ VIỆC:\n{description}"
    )
}

/// Strips an optional markdown code fence around the model's JSON payload.
fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    rest.strip_suffix("```").unwrap_or(rest).trim()
}

#[derive(Debug, Clone)]
pub struct AutofillClient {
    http: Client,
    base_url: String,
    model: String,
    api_key: Option<String>,
}

impl AutofillClient {
    pub fn new(settings: &Settings) -> Self {
        Self {
            http: Client::new(),
            base_url: GEMINI_BASE_URL.to_string(),
            model: settings.gemini_model.clone(),
            api_key: settings.gemini_api_key.clone(),
        }
    }

    /// Points the client at a different endpoint; used by tests to talk to
    /// a local mock server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// One-shot request turning a free-text description into structured
    /// draft fields. Never touches the draft itself; the form controller
    /// applies or discards the result.
    pub async fn draft_from_description(
        &self,
        description: &str,
    ) -> Result<AutofillFields, AutofillError> {
        let api_key = self.api_key.as_deref().ok_or(AutofillError::MissingApiKey)?;

        let body = GeminiRequest {
            contents: vec![GeminiContent {
                parts: vec![GeminiPart {
                    text: build_prompt(description),
                }],
            }],
            generation_config: GeminiGenerationConfig {
                response_mime_type: "application/json",
                response_schema: response_schema(),
            },
        };

        let url = format!(
            "{}/{}:generateContent?key={api_key}",
            self.base_url, self.model
        );
        debug!(model = %self.model, "sending autofill request to Gemini");

        let response = self.http.post(&url).json(&body).send().await?;
        let status = response.status();
        let text = response.text().await?;
        if !status.is_success() {
            return Err(AutofillError::Api(format!("HTTP {status}: {text}")));
        }

        let envelope: GeminiResponse = serde_json::from_str(&text)
            .map_err(|err| AutofillError::InvalidResponse(err.to_string()))?;
        let payload = envelope
            .candidates
            .first()
            .and_then(|candidate| candidate.content.parts.first())
            .map(|part| part.text.as_str())
            .ok_or_else(|| {
                AutofillError::InvalidResponse("no candidates in response".to_string())
            })?;

        serde_json::from_str(strip_code_fence(payload))
            .map_err(|err| AutofillError::InvalidResponse(err.to_string()))
    }
}

#[cfg(test)]
#[path = "tests/autofill_tests.rs"]
mod tests;
