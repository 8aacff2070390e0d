#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Failed to fetch page: {0}")]
    FetchFailed(String),

    #[error("No readable content extracted from {0}")]
    EmptyContent(String),

    #[error("No text provided for analysis")]
    EmptyInput,

    #[error("Rate limit exceeded")]
    RateLimited,

    #[error("Completion API error: {0}")]
    ApiError(String),

    #[error("Unexpected completion error: {0}")]
    Unexpected(String),

    #[error("Invalid command: {0}")]
    InvalidCommand(String),
}

impl AppError {
    pub fn user_message(&self) -> &str {
        match self {
            Self::Configuration(_) => "Configuration is incomplete. Check your .env file.",
            Self::InvalidUrl(_) => "The URL you entered is not valid.",
            Self::FetchFailed(_) => "Could not reach the website. Make sure the URL is accessible.",
            Self::EmptyContent(_) => "Failed to extract content from the URL.",
            Self::EmptyInput => "No text provided for analysis.",
            Self::RateLimited => "Rate limit exceeded. Please try again later.",
            Self::ApiError(_) => "The completion service returned an error.",
            Self::Unexpected(_) => "Something went wrong talking to the completion service.",
            Self::InvalidCommand(msg) => msg,
        }
    }

    /// True for the failures raised at the completion client boundary.
    pub fn is_completion_failure(&self) -> bool {
        matches!(
            self,
            Self::RateLimited | Self::ApiError(_) | Self::Unexpected(_)
        )
    }
}
