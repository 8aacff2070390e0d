pub const NO_TITLE: &str = "No Title";
pub const NO_DESCRIPTION: &str = "No Description";

/// Readable view of a fetched page. `content` holds the linearized body text
/// and may be empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedPage {
    pub title: String,
    pub description: String,
    pub content: String,
}

impl ExtractedPage {
    pub fn new() -> Self {
        Self {
            title: NO_TITLE.to_string(),
            description: NO_DESCRIPTION.to_string(),
            content: String::new(),
        }
    }

    pub fn with_title(mut self, title: Option<String>) -> Self {
        self.title = title.unwrap_or_else(|| NO_TITLE.to_string());
        self
    }

    pub fn with_description(mut self, description: Option<String>) -> Self {
        self.description = description.unwrap_or_else(|| NO_DESCRIPTION.to_string());
        self
    }

    pub fn with_content(mut self, content: String) -> Self {
        self.content = content;
        self
    }

    pub fn has_content(&self) -> bool {
        !self.content.trim().is_empty()
    }
}

impl Default for ExtractedPage {
    fn default() -> Self {
        Self::new()
    }
}
