use summarizer_errors::AppError;

pub const HELP: &str = "  1. summarize <url>           - Summarize an article from URL
  2. analyze <url> <type>      - Analyze with specific type (summary, key_points, action_items, risks)
  3. ask <question>            - Ask a financial question
  4. websites [topic]          - Get website recommendations
  5. help                      - Show this help message
  6. exit                      - Exit the program
";

pub fn print_section_header(title: &str) {
    let rule = "=".repeat(60);
    println!("\n{}\n  {}\n{}\n", rule, title, rule);
}

pub fn print_help() {
    println!("Available commands:");
    println!("{}", HELP);
}

/// Completion failures are errors on our side; anything else came from the input.
pub fn log_failure(error: &AppError) {
    if error.is_completion_failure() {
        tracing::error!("Completion failed: {}", error);
    } else {
        tracing::warn!("Request failed: {}", error);
    }
}
