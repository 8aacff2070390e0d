mod content_extractor;
mod page_fetcher;

pub use content_extractor::{ContentExtractor, DENYLIST};
pub use page_fetcher::{FetchResult, PageFetcher};
