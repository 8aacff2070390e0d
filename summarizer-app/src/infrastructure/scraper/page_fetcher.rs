use crate::infrastructure::config::FetchConfig;
use reqwest::header::USER_AGENT;
use summarizer_errors::AppError;
use url::Url;

const ALLOWED_SCHEMES: &[&str] = &["http", "https"];

/// Raw response body on success. Failures carry a human-readable detail.
pub type FetchResult = Result<Vec<u8>, AppError>;

pub struct PageFetcher {
    http_client: reqwest::Client,
    user_agent: String,
}

impl PageFetcher {
    pub fn new(config: &FetchConfig) -> Result<Self, AppError> {
        let http_client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| AppError::Configuration(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http_client,
            user_agent: config.user_agent.clone(),
        })
    }

    /// Prepends `http://` when the input carries no scheme.
    pub fn normalize_url(url: &str) -> Result<Url, AppError> {
        let url = url.trim();

        if url.is_empty() {
            return Err(AppError::InvalidUrl("URL must not be empty".to_string()));
        }

        let candidate = if has_scheme(url) {
            url.to_string()
        } else {
            format!("http://{}", url)
        };

        let parsed = Url::parse(&candidate)
            .map_err(|e| AppError::InvalidUrl(format!("{}: {}", url, e)))?;

        if !ALLOWED_SCHEMES.contains(&parsed.scheme()) {
            return Err(AppError::InvalidUrl(format!(
                "only HTTP and HTTPS are supported, got {}",
                parsed.scheme()
            )));
        }

        if parsed.host_str().is_none() {
            return Err(AppError::InvalidUrl(format!("{} has no host", url)));
        }

        Ok(parsed)
    }

    /// One GET, no retries. Any transport error or non-2xx status is a `FetchFailed`.
    pub async fn fetch(&self, url: &str) -> FetchResult {
        let parsed_url = Self::normalize_url(url)?;
        tracing::info!("Fetching {}", parsed_url);

        let response = self
            .http_client
            .get(parsed_url.as_str())
            .header(USER_AGENT, &self.user_agent)
            .send()
            .await
            .map_err(|e| AppError::FetchFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::FetchFailed(format!("HTTP {}", status)));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| AppError::FetchFailed(e.to_string()))?;

        tracing::debug!("Fetched {} bytes from {}", body.len(), parsed_url);
        Ok(body.to_vec())
    }
}

/// True when the text before the first `://` is a syntactically valid scheme,
/// so `://` inside a path or query string does not count.
fn has_scheme(url: &str) -> bool {
    let Some((scheme, _)) = url.split_once("://") else {
        return false;
    };

    let mut chars = scheme.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '.' | '-'))
}
