use crate::domain::AnalysisType;

pub const ANALYST_PERSONA: &str = "You are a helpful assistant who is an expert financial analyst.";
pub const DEFAULT_TOPIC: &str = "stock market";

pub fn analysis_instruction(analysis_type: AnalysisType) -> &'static str {
    match analysis_type {
        AnalysisType::Summary => "You are provided with a cleaned up financial news article. Please summarize the key points and implications for investors.",
        AnalysisType::KeyPoints => "Extract and list the top 5 key points from this financial article that investors should know about.",
        AnalysisType::ActionItems => "Based on this financial article, what actionable items should investors consider? List them clearly.",
        AnalysisType::Risks => "Identify and explain the key risks mentioned or implied in this financial article for investors.",
    }
}

pub fn compose_analysis_prompt(analysis_type: AnalysisType) -> String {
    format!("{} {}", ANALYST_PERSONA, analysis_instruction(analysis_type))
}

/// Keyword entry point: unrecognized keywords get the summary prompt.
pub fn compose_analysis_prompt_for(keyword: &str) -> String {
    compose_analysis_prompt(AnalysisType::from_keyword_or_default(keyword))
}

pub fn compose_analysis_content(content: &str) -> String {
    format!("Here is the content to analyze:\n\n{}", content)
}

pub fn compose_question_prompt() -> String {
    format!("{} Provide clear, actionable advice.", ANALYST_PERSONA)
}

pub fn compose_question_content(question: &str, context: Option<&str>) -> String {
    match context.map(str::trim).filter(|c| !c.is_empty()) {
        Some(context) => format!("Context:\n{}\n\nQuestion: {}", context, question),
        None => question.to_string(),
    }
}

pub fn compose_website_prompt(topic: &str) -> String {
    let topic = match topic.trim() {
        "" => DEFAULT_TOPIC,
        t => t,
    };

    format!(
        "Provide some good websites for financial information pertaining to the {topic}. \
         These should include both sites with news and analysis, as well as sites that provide \
         data and statistics on {topic}, especially sites where basic financial information, \
         such as EPS, revenue, earnings, etc. Please include a brief description of each site \
         and what it offers.",
        topic = topic
    )
}
