use crate::application::{FinancialAnalyst, SummarizationService};
use crate::infrastructure::config::AppConfig;
use crate::infrastructure::openai::OpenAiClient;
use crate::infrastructure::scraper::PageFetcher;
use summarizer_errors::AppError;

/// Long-lived handles shared by every command of one process.
pub struct AppContext {
    pub service: SummarizationService<OpenAiClient>,
}

impl AppContext {
    pub fn new(config: &AppConfig) -> Result<Self, AppError> {
        let client = OpenAiClient::new(config.completion.clone())?;
        tracing::debug!("Configuration loaded: model={}", client.model());

        let fetcher = PageFetcher::new(&config.fetch)?;
        let service = SummarizationService::new(fetcher, FinancialAnalyst::new(client));

        Ok(Self { service })
    }

    pub fn analyst(&self) -> &FinancialAnalyst<OpenAiClient> {
        self.service.analyst()
    }
}
