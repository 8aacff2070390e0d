use super::CompletionClient;
use crate::domain::AnalysisRequest;
use crate::infrastructure::openai::prompt;
use summarizer_errors::AppError;

/// Prompt composition in front of a completion client. The model's text is
/// returned unchanged.
pub struct FinancialAnalyst<C> {
    client: C,
}

impl<C: CompletionClient> FinancialAnalyst<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    pub async fn analyze(&self, request: &AnalysisRequest) -> Result<String, AppError> {
        tracing::info!("Performing {} analysis on content", request.analysis_type);

        let system_prompt = prompt::compose_analysis_prompt(request.analysis_type);
        let user_content = prompt::compose_analysis_content(&request.content);
        let result = self.client.complete(&system_prompt, &user_content).await?;

        tracing::debug!("Successfully completed {} analysis", request.analysis_type);
        Ok(result)
    }

    pub async fn ask_question(
        &self,
        question: &str,
        context: Option<&str>,
    ) -> Result<String, AppError> {
        let question = question.trim();
        if question.is_empty() {
            tracing::error!("No question provided");
            return Err(AppError::EmptyInput);
        }

        tracing::info!(
            "Processing custom question: {}...",
            question.chars().take(50).collect::<String>()
        );

        let system_prompt = prompt::compose_question_prompt();
        let user_content = prompt::compose_question_content(question, context);
        self.client.complete(&system_prompt, &user_content).await
    }

    pub async fn recommend_websites(&self, topic: &str) -> Result<String, AppError> {
        tracing::info!("Fetching website recommendations for: {}", topic);

        let system_prompt = prompt::ANALYST_PERSONA;
        let user_content = prompt::compose_website_prompt(topic);
        let result = self.client.complete(system_prompt, &user_content).await?;

        tracing::debug!("Successfully retrieved recommendations for {}", topic);
        Ok(result)
    }
}
