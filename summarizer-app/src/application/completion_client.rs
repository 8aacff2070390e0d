use async_trait::async_trait;
use summarizer_errors::AppError;

/// Chat-style completion: one system prompt, one user message, generated text back.
///
/// Implementations classify every failure as `RateLimited`, `ApiError` or
/// `Unexpected` and never panic.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(&self, system_prompt: &str, user_content: &str) -> Result<String, AppError>;
}
