use super::types::{ChatCompletionRequest, ChatCompletionResponse, ErrorEnvelope};
use crate::application::CompletionClient;
use crate::infrastructure::config::CompletionConfig;
use async_trait::async_trait;
use reqwest::StatusCode;
use summarizer_errors::AppError;

pub struct OpenAiClient {
    http_client: reqwest::Client,
    config: CompletionConfig,
}

impl OpenAiClient {
    pub fn new(config: CompletionConfig) -> Result<Self, AppError> {
        let http_client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| AppError::Configuration(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http_client,
            config,
        })
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/chat/completions",
            self.config.base_url.trim_end_matches('/')
        )
    }
}

#[async_trait]
impl CompletionClient for OpenAiClient {
    async fn complete(&self, system_prompt: &str, user_content: &str) -> Result<String, AppError> {
        let request = ChatCompletionRequest::new(
            &self.config.model,
            self.config.temperature,
            system_prompt,
            user_content,
        );

        tracing::debug!(
            model = %self.config.model,
            chars = user_content.len(),
            "Sending completion request"
        );

        let response = self
            .http_client
            .post(self.endpoint())
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Completion API connection error: {}", e);
                AppError::ApiError(format!("connection error: {}", e))
            })?;

        let status = response.status();

        if status == StatusCode::TOO_MANY_REQUESTS {
            tracing::error!("Rate limit exceeded. Please try again later.");
            return Err(AppError::RateLimited);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let detail = serde_json::from_str::<ErrorEnvelope>(&body)
                .map(|envelope| format!("{} - {}", status, envelope.error.message))
                .unwrap_or_else(|_| status.to_string());
            tracing::error!("Completion API error: {} - {}", status, body);
            return Err(AppError::ApiError(detail));
        }

        let completion: ChatCompletionResponse = response.json().await.map_err(|e| {
            tracing::error!("Unexpected completion response: {}", e);
            AppError::Unexpected(e.to_string())
        })?;

        completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| {
                tracing::error!("Completion API returned no choices");
                AppError::ApiError("No response from model".to_string())
            })
    }
}
