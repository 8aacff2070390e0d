mod completion_client;
mod financial_analyst;
mod summarize;

pub use completion_client::CompletionClient;
pub use financial_analyst::FinancialAnalyst;
pub use summarize::SummarizationService;

#[cfg(test)]
pub(crate) mod stub;
