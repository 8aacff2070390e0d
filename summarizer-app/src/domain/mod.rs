mod analysis;
mod extracted_page;

pub use analysis::{AnalysisRequest, AnalysisType};
pub use extracted_page::{ExtractedPage, NO_DESCRIPTION, NO_TITLE};
