use crate::output::{log_failure, print_help, print_section_header};
use std::io::{BufRead, Write};
use summarizer_app::domain::AnalysisType;
use summarizer_app::infrastructure::openai::prompt::DEFAULT_TOPIC;
use summarizer_app::AppContext;
use summarizer_errors::AppError;
use tokio::sync::mpsc;

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Summarize(String),
    Analyze {
        url: String,
        analysis_type: AnalysisType,
    },
    Ask(String),
    Websites(String),
    Help,
    Exit,
}

fn usage(text: &str) -> AppError {
    AppError::InvalidCommand(format!("Usage: {}", text))
}

/// Parses one input line. Blank lines yield `None`.
pub fn parse_command(line: &str) -> Result<Option<Command>, AppError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let (head, rest) = match line.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, rest.trim()),
        None => (line, ""),
    };

    let command = match head.to_lowercase().as_str() {
        "exit" => Command::Exit,
        "help" => Command::Help,
        "summarize" => {
            let url = rest
                .split_whitespace()
                .next()
                .ok_or_else(|| usage("summarize <url>"))?;
            Command::Summarize(url.to_string())
        }
        "analyze" => {
            let mut parts = rest.split_whitespace();
            let url = parts.next().ok_or_else(|| usage("analyze <url> [type]"))?;
            let analysis_type = match parts.next() {
                Some(keyword) => keyword.parse()?,
                None => AnalysisType::Summary,
            };
            Command::Analyze {
                url: url.to_string(),
                analysis_type,
            }
        }
        "ask" => {
            if rest.is_empty() {
                return Err(usage("ask <question>"));
            }
            Command::Ask(rest.to_string())
        }
        "websites" => {
            let topic = if rest.is_empty() { DEFAULT_TOPIC } else { rest };
            Command::Websites(topic.to_string())
        }
        other => {
            return Err(AppError::InvalidCommand(format!(
                "Unknown command: {}. Type 'help' for available commands.",
                other
            )))
        }
    };

    Ok(Some(command))
}

/// Reads stdin on a plain thread so a pending read never blocks runtime shutdown.
fn spawn_stdin_reader() -> mpsc::Receiver<std::io::Result<String>> {
    let (tx, rx) = mpsc::channel(1);

    std::thread::spawn(move || {
        for line in std::io::stdin().lock().lines() {
            let failed = line.is_err();
            if tx.blocking_send(line).is_err() || failed {
                break;
            }
        }
    });

    rx
}

pub async fn run_interactive(ctx: &AppContext) {
    print_section_header("Interactive Mode");
    print_help();

    let mut lines = spawn_stdin_reader();

    loop {
        print!("Enter command: ");
        let _ = std::io::stdout().flush();

        let line = match lines.recv().await {
            Some(Ok(line)) => line,
            None => {
                println!("\nExiting interactive mode.");
                break;
            }
            Some(Err(e)) => {
                tracing::error!("Error reading input: {}", e);
                break;
            }
        };

        match parse_command(&line) {
            Ok(None) => continue,
            Ok(Some(Command::Exit)) => {
                println!("Exiting interactive mode.");
                break;
            }
            Ok(Some(command)) => execute(ctx, command).await,
            Err(e) => println!("{}\n", e.user_message()),
        }
    }
}

async fn execute(ctx: &AppContext, command: Command) {
    let (result, failure) = match command {
        Command::Help => {
            print_help();
            return;
        }
        Command::Exit => return,
        Command::Summarize(url) => {
            println!("\nAnalyzing article...");
            (
                ctx.service.summarize_from_url(&url, AnalysisType::Summary).await,
                "Failed to summarize the article.",
            )
        }
        Command::Analyze { url, analysis_type } => {
            println!("\nAnalyzing article...");
            (
                ctx.service.summarize_from_url(&url, analysis_type).await,
                "Failed to analyze the article.",
            )
        }
        Command::Ask(question) => {
            println!("\nProcessing question...");
            (
                ctx.analyst().ask_question(&question, None).await,
                "Failed to process the question.",
            )
        }
        Command::Websites(topic) => {
            println!("\nGetting recommendations for: {}...", topic);
            (
                ctx.analyst().recommend_websites(&topic).await,
                "Failed to retrieve recommendations.",
            )
        }
    };

    match result {
        Ok(text) => println!("\n{}\n", text),
        Err(e) => {
            log_failure(&e);
            println!("{} {}\n", failure, e.user_message());
        }
    }
}
