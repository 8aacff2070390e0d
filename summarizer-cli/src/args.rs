use clap::builder::PossibleValuesParser;
use clap::Parser;
use summarizer_app::domain::AnalysisType;
use summarizer_app::infrastructure::openai::prompt::DEFAULT_TOPIC;

const EXAMPLES: &str = "Examples:
  # Summarize an article from a URL
  summarizer --url https://finance.yahoo.com/news/...

  # Get website recommendations
  summarizer --websites

  # Summarize with key points analysis
  summarizer --url https://example.com --type key_points

  # Ask a custom financial question
  summarizer --ask \"What are the implications of rising interest rates?\"

  # Interactive mode
  summarizer --interactive";

#[derive(Parser, Debug)]
#[command(author, version, about = "Financial Content Summarization Tool", long_about = None, after_help = EXAMPLES)]
pub struct Args {
    /// URL of the financial article to summarize
    #[arg(long, value_name = "URL")]
    pub url: Option<String>,

    /// Type of analysis to perform
    #[arg(
        long = "type",
        value_name = "TYPE",
        default_value = "summary",
        value_parser = PossibleValuesParser::new(["summary", "key_points", "action_items", "risks"])
    )]
    pub analysis_type: String,

    /// Get recommendations for financial information websites
    #[arg(long)]
    pub websites: bool,

    /// Topic for website recommendations
    #[arg(long, default_value = DEFAULT_TOPIC)]
    pub topic: String,

    /// Ask a custom financial question
    #[arg(long, value_name = "QUESTION")]
    pub ask: Option<String>,

    /// Summarize provided text content
    #[arg(long, value_name = "TEXT")]
    pub text: Option<String>,

    /// Start interactive mode
    #[arg(long)]
    pub interactive: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Websites(String),
    Url(String),
    Ask(String),
    Text(String),
    Interactive,
    Demo,
}

impl Args {
    pub fn analysis_type(&self) -> AnalysisType {
        AnalysisType::from_keyword_or_default(&self.analysis_type)
    }

    /// First matching flag wins: websites, url, ask, text, interactive. Otherwise the demo runs.
    pub fn action(&self) -> Action {
        if self.websites {
            Action::Websites(self.topic.clone())
        } else if let Some(url) = &self.url {
            Action::Url(url.clone())
        } else if let Some(question) = &self.ask {
            Action::Ask(question.clone())
        } else if let Some(text) = &self.text {
            Action::Text(text.clone())
        } else if self.interactive {
            Action::Interactive
        } else {
            Action::Demo
        }
    }
}
