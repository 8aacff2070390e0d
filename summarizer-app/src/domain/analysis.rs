use std::fmt;
use std::str::FromStr;
use summarizer_errors::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AnalysisType {
    #[default]
    Summary,
    KeyPoints,
    ActionItems,
    Risks,
}

impl AnalysisType {
    pub const ALL: [AnalysisType; 4] = [
        AnalysisType::Summary,
        AnalysisType::KeyPoints,
        AnalysisType::ActionItems,
        AnalysisType::Risks,
    ];

    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Summary => "summary",
            Self::KeyPoints => "key_points",
            Self::ActionItems => "action_items",
            Self::Risks => "risks",
        }
    }

    /// Title-case label used in section headers, e.g. "Key Points".
    pub fn label(&self) -> &'static str {
        match self {
            Self::Summary => "Summary",
            Self::KeyPoints => "Key Points",
            Self::ActionItems => "Action Items",
            Self::Risks => "Risks",
        }
    }

    /// Unknown keywords map to `Summary`.
    pub fn from_keyword_or_default(keyword: &str) -> Self {
        keyword.parse().unwrap_or_default()
    }

    pub fn keywords() -> Vec<&'static str> {
        Self::ALL.iter().map(|t| t.keyword()).collect()
    }
}

impl FromStr for AnalysisType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let keyword = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|t| t.keyword() == keyword)
            .ok_or_else(|| {
                AppError::InvalidCommand(format!(
                    "Invalid analysis type. Available: {}",
                    Self::keywords().join(", ")
                ))
            })
    }
}

impl fmt::Display for AnalysisType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisRequest {
    pub content: String,
    pub analysis_type: AnalysisType,
}

impl AnalysisRequest {
    pub fn new(content: impl Into<String>, analysis_type: AnalysisType) -> Self {
        Self {
            content: content.into(),
            analysis_type,
        }
    }
}
