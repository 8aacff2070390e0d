use super::{CompletionClient, FinancialAnalyst};
use crate::domain::{AnalysisRequest, AnalysisType, ExtractedPage};
use crate::infrastructure::scraper::{ContentExtractor, PageFetcher};
use summarizer_errors::AppError;

/// Fetch, extract, compose, complete. Each call is a one-shot pipeline that
/// stops at the first failing stage.
pub struct SummarizationService<C> {
    fetcher: PageFetcher,
    extractor: ContentExtractor,
    analyst: FinancialAnalyst<C>,
}

impl<C: CompletionClient> SummarizationService<C> {
    pub fn new(fetcher: PageFetcher, analyst: FinancialAnalyst<C>) -> Self {
        Self {
            fetcher,
            extractor: ContentExtractor::new(),
            analyst,
        }
    }

    pub fn analyst(&self) -> &FinancialAnalyst<C> {
        &self.analyst
    }

    pub fn analysis_types(&self) -> &'static [AnalysisType] {
        &AnalysisType::ALL
    }

    /// A failed fetch is logged and yields a page with empty content.
    pub async fn extract_page(&self, url: &str) -> ExtractedPage {
        match self.fetcher.fetch(url).await {
            Ok(raw_html) => self.extractor.extract(&raw_html),
            Err(e) => {
                tracing::warn!("Error fetching {}: {}", url, e);
                ExtractedPage::new()
            }
        }
    }

    pub async fn summarize_from_url(
        &self,
        url: &str,
        analysis_type: AnalysisType,
    ) -> Result<String, AppError> {
        tracing::info!("Starting article summarization from URL: {}", url);

        let page = self.extract_page(url).await;
        if !page.has_content() {
            tracing::error!("Failed to extract content from {}", url);
            return Err(AppError::EmptyContent(url.to_string()));
        }

        tracing::debug!(
            title = %page.title,
            "Extracted {} characters from article",
            page.content.len()
        );

        let result = self
            .analyst
            .analyze(&AnalysisRequest::new(page.content, analysis_type))
            .await?;

        tracing::info!("Successfully completed {} analysis", analysis_type);
        Ok(result)
    }

    pub async fn summarize_text(
        &self,
        text: &str,
        analysis_type: AnalysisType,
    ) -> Result<String, AppError> {
        tracing::info!("Performing {} analysis on provided text", analysis_type);

        if text.trim().is_empty() {
            tracing::error!("No text provided for analysis");
            return Err(AppError::EmptyInput);
        }

        let result = self
            .analyst
            .analyze(&AnalysisRequest::new(text, analysis_type))
            .await?;

        tracing::info!("Successfully completed {} analysis", analysis_type);
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::stub::StubCompletion;
    use crate::infrastructure::config::FetchConfig;
    use crate::infrastructure::openai::prompt;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const ARTICLE: &str = r#"<html><head><title>Fed Week</title></head><body>
        <nav>Markets | Tech</nav>
        <article><h1>Inflation in focus</h1><p>Traders expect a cut.</p></article>
        <script>track()</script>
    </body></html>"#;

    fn service(stub: StubCompletion) -> SummarizationService<StubCompletion> {
        let fetcher = PageFetcher::new(&FetchConfig::default()).unwrap();
        SummarizationService::new(fetcher, FinancialAnalyst::new(stub))
    }

    async fn serve(body: &str, status: u16) -> MockServer {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/article"))
            .respond_with(ResponseTemplate::new(status).set_body_string(body))
            .mount(&server)
            .await;
        server
    }

    #[tokio::test]
    async fn test_summarize_text_blank_never_calls_completion() {
        let service = service(StubCompletion::replying("unused"));

        for text in ["", "   ", "\n\t"] {
            let err = service.summarize_text(text, AnalysisType::Summary).await.unwrap_err();
            assert_eq!(err, AppError::EmptyInput);
        }
        assert_eq!(service.analyst().client().calls(), 0);
    }

    #[tokio::test]
    async fn test_summarize_text_passes_result_through() {
        let service = service(StubCompletion::replying("  Verbatim model output.\n"));

        let result = service
            .summarize_text("Revenue grew 12%.", AnalysisType::Risks)
            .await
            .unwrap();

        assert_eq!(result, "  Verbatim model output.\n");
        let (system, user) = service.analyst().client().last_request().unwrap();
        assert_eq!(system, prompt::compose_analysis_prompt(AnalysisType::Risks));
        assert!(user.ends_with("Revenue grew 12%."));
    }

    #[tokio::test]
    async fn test_summarize_from_url_sends_extracted_content() {
        let server = serve(ARTICLE, 200).await;
        let service = service(StubCompletion::replying("A cut is expected."));

        let result = service
            .summarize_from_url(&format!("{}/article", server.uri()), AnalysisType::Summary)
            .await
            .unwrap();

        assert_eq!(result, "A cut is expected.");
        let (_, user) = service.analyst().client().last_request().unwrap();
        assert_eq!(
            user,
            "Here is the content to analyze:\n\nInflation in focus\nTraders expect a cut."
        );
    }

    #[tokio::test]
    async fn test_summarize_from_url_rate_limited_is_failure() {
        let server = serve(ARTICLE, 200).await;
        let service = service(StubCompletion::failing(AppError::RateLimited));

        let err = service
            .summarize_from_url(&format!("{}/article", server.uri()), AnalysisType::Summary)
            .await
            .unwrap_err();

        assert_eq!(err, AppError::RateLimited);
        assert_eq!(service.analyst().client().calls(), 1);
    }

    #[tokio::test]
    async fn test_summarize_from_url_fetch_failure_is_empty_content() {
        let server = serve("gone", 404).await;
        let service = service(StubCompletion::replying("unused"));

        let err = service
            .summarize_from_url(&format!("{}/article", server.uri()), AnalysisType::Summary)
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::EmptyContent(_)));
        assert_eq!(service.analyst().client().calls(), 0);
    }

    #[tokio::test]
    async fn test_summarize_from_url_chrome_only_page_is_empty_content() {
        let server = serve(
            "<html><body><nav>Home</nav><script>app()</script><div> </div></body></html>",
            200,
        )
        .await;
        let service = service(StubCompletion::replying("unused"));

        let err = service
            .summarize_from_url(&format!("{}/article", server.uri()), AnalysisType::KeyPoints)
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::EmptyContent(_)));
        assert_eq!(service.analyst().client().calls(), 0);
    }

    #[tokio::test]
    async fn test_extract_page_keeps_title() {
        let server = serve(ARTICLE, 200).await;
        let service = service(StubCompletion::replying("unused"));

        let page = service.extract_page(&format!("{}/article", server.uri())).await;

        assert_eq!(page.title, "Fed Week");
        assert!(page.has_content());
    }

    #[test]
    fn test_analysis_types_lists_all_keywords() {
        let service = service(StubCompletion::replying("unused"));
        let keywords: Vec<_> = service.analysis_types().iter().map(|t| t.keyword()).collect();
        assert_eq!(keywords, vec!["summary", "key_points", "action_items", "risks"]);
    }
}
