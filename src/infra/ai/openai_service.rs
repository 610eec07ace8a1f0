use crate::domain::ports::LlmService;
use crate::error::AppError;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};
use std::time::Duration;
use tracing::{error, info, instrument};

const COMPLETIONS_URL: &str = "https://api.openai.com/v1/chat/completions";

pub struct OpenAiService {
    client: Client,
}

impl Default for OpenAiService {
    fn default() -> Self {
        Self::new()
    }
}

impl OpenAiService {
    pub fn new() -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(30))
                .build()
                .unwrap_or_else(|_| Client::new()),
        }
    }

    fn extract_content(&self, body: Value) -> Result<String, AppError> {
        if let Some(content) = body
            .get("choices")
            .and_then(|c| c.as_array())
            .and_then(|c| c.first())
            .and_then(|c| c.get("message"))
            .and_then(|m| m.get("content"))
            .and_then(|t| t.as_str())
        {
            // Clean up markdown code fences if present
            let cleaned = content
                .trim()
                .trim_start_matches("```json")
                .trim_start_matches("```")
                .trim_end_matches("```")
                .trim();
            return Ok(cleaned.to_string());
        }

        error!("Invalid or unexpected response structure from completion API: {:?}", body);
        Err(AppError::InternalWithMsg("Completion response missing content".to_string()))
    }
}

#[async_trait]
impl LlmService for OpenAiService {
    #[instrument(skip(self, api_key), fields(prompt_len = prompt.len()))]
    async fn generate(
        &self,
        api_key: &str,
        prompt: &str,
        system_instruction: &str,
    ) -> Result<String, AppError> {
        let payload = json!({
            "model": "gpt-4",
            "messages": [
                { "role": "system", "content": system_instruction },
                { "role": "user", "content": prompt }
            ],
            "temperature": 0.7,
            "max_tokens": 1500,
            "response_format": { "type": "json_object" }
        });

        info!("Sending generation request to completion API...");

        let res = self
            .client
            .post(COMPLETIONS_URL)
            .header("Authorization", format!("Bearer {}", api_key))
            .header("Content-Type", "application/json")
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                error!("Completion API network error: {:?}", e);
                AppError::InternalWithMsg(format!("Completion API network error: {}", e))
            })?;

        let status = res.status();
        if !status.is_success() {
            let text = res.text().await.unwrap_or_default();
            error!("Completion API error {}: {}", status, text);
            return Err(AppError::InternalWithMsg(format!(
                "Completion API error: {} - {}",
                status, text
            )));
        }

        let body: Value = res.json().await.map_err(|e| {
            error!("Failed to parse completion response JSON: {:?}", e);
            AppError::Internal
        })?;

        let content = self.extract_content(body)?;
        info!("Successfully generated content from completion API.");
        Ok(content)
    }
}
