use async_trait::async_trait;
use eyre::{Result, bail};
use log::{debug, warn};

use crate::error::SummaryError;

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const API_KEY_ENV: &str = "GOOGLE_API_KEY";

const PROMPT_PREAMBLE: &str = "Please provide a comprehensive summary of the following YouTube video transcript.
Focus on the main points, key insights, and important information discussed in the video.
Make the summary clear, concise, and well-structured with bullet points for key topics.";

/// A generative-AI completion service
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Request a single non-streaming completion. The returned text may be empty.
    async fn generate(&self, prompt: &str) -> Result<String>;
}

/// Build the summarization prompt around the full transcript text
pub fn build_prompt(transcript_text: &str) -> String {
    format!("{PROMPT_PREAMBLE}\n\nTranscript:\n{transcript_text}")
}

/// Summarize a transcript. The transcript is sent whole, with no chunking.
pub async fn summarize<G>(generator: &G, transcript_text: &str) -> std::result::Result<String, SummaryError>
where
    G: TextGenerator + ?Sized,
{
    let prompt = build_prompt(transcript_text);
    debug!("Summary prompt is {} bytes", prompt.len());

    match generator.generate(&prompt).await {
        Ok(text) if text.is_empty() => {
            warn!("Generator returned no text");
            Err(SummaryError::Empty)
        }
        Ok(text) => Ok(text),
        Err(e) => {
            warn!("Summary generation failed: {e:#}");
            Err(SummaryError::Request(format!("{e:#}")))
        }
    }
}

/// Connection settings for the Gemini API
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub endpoint: String,
}

impl GeminiConfig {
    pub fn new(api_key: Option<String>, model: impl Into<String>) -> Self {
        Self {
            api_key,
            model: model.into(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }

    /// Read the API key from `GOOGLE_API_KEY`
    pub fn from_env(model: impl Into<String>) -> Self {
        let api_key = std::env::var(API_KEY_ENV).ok().filter(|k| !k.is_empty());
        Self::new(api_key, model)
    }
}

/// Google Gemini `generateContent` client
#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: reqwest::Client,
    config: GeminiConfig,
}

impl GeminiClient {
    pub fn new(client: reqwest::Client, config: GeminiConfig) -> Self {
        Self { client, config }
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String> {
        let Some(api_key) = self.config.api_key.as_deref() else {
            bail!("{API_KEY_ENV} environment variable not set (required for Gemini summarization)");
        };

        debug!("Summarizing via Gemini API with model {}", self.config.model);

        let url = format!(
            "{}/models/{}:generateContent",
            self.config.endpoint.trim_end_matches('/'),
            self.config.model
        );

        let body = serde_json::json!({
            "contents": [
                {
                    "role": "user",
                    "parts": [
                        {
                            "text": prompt
                        }
                    ]
                }
            ]
        });

        let resp = self
            .client
            .post(&url)
            .header("x-goog-api-key", api_key)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            bail!("Gemini API returned {status}: {body}");
        }

        let json: serde_json::Value = resp.json().await?;
        Ok(extract_gemini_text(&json))
    }
}

/// Concatenate the text parts of the first candidate; empty when there are none
fn extract_gemini_text(json: &serde_json::Value) -> String {
    json.get("candidates")
        .and_then(|c| c.get(0))
        .and_then(|c| c.get("content"))
        .and_then(|c| c.get("parts"))
        .and_then(|p| p.as_array())
        .map(|parts| {
            parts
                .iter()
                .filter_map(|part| part.get("text")?.as_str())
                .collect::<Vec<_>>()
                .join("")
        })
        .unwrap_or_default()
}
