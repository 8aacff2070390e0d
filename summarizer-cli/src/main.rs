use crate::args::{Action, Args};
use crate::output::{log_failure, print_section_header};
use clap::Parser;
use std::process::ExitCode;
use summarizer_app::domain::AnalysisType;
use summarizer_app::infrastructure::config::AppConfig;
use summarizer_app::infrastructure::logging::init_logging;
use summarizer_app::infrastructure::openai::prompt::DEFAULT_TOPIC;
use summarizer_app::AppContext;
use summarizer_errors::AppError;

mod args;
mod interactive;
mod output;

const DEMO_ARTICLE_URL: &str = "https://finance.yahoo.com/news/inflation-in-focus-as-september-fed-meeting-nears-what-to-watch-this-week-120006808.html";

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    dotenvy::dotenv_override().ok();
    let args = Args::parse();

    let config = match AppConfig::from_env() {
        Ok(config) if args.debug => config.with_debug(),
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    init_logging(&config);
    tracing::info!("Application started");

    let ctx = match AppContext::new(&config) {
        Ok(ctx) => ctx,
        Err(e) => {
            eprintln!("{}", e);
            tracing::error!("Failed to initialize: {}", e);
            return ExitCode::FAILURE;
        }
    };

    tokio::select! {
        succeeded = run(&ctx, &args) => {
            if succeeded {
                tracing::info!("Application completed successfully");
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        _ = tokio::signal::ctrl_c() => {
            println!("\n\nApplication interrupted by user.");
            tracing::info!("Application interrupted by user");
            ExitCode::SUCCESS
        }
    }
}

async fn run(ctx: &AppContext, args: &Args) -> bool {
    let analysis_type = args.analysis_type();

    match args.action() {
        Action::Websites(topic) => {
            print_section_header(&format!("Financial Website Recommendations: {}", topic));
            report(
                ctx.analyst().recommend_websites(&topic).await,
                "Failed to retrieve website recommendations.",
            )
        }
        Action::Url(url) => {
            print_section_header(&format!("Analyzing Article ({})", analysis_type.label()));
            println!("URL: {}\n", url);
            report(
                ctx.service.summarize_from_url(&url, analysis_type).await,
                "Failed to summarize the article.",
            )
        }
        Action::Ask(question) => {
            print_section_header("Financial Analysis");
            println!("Question: {}\n", question);
            report(
                ctx.analyst().ask_question(&question, None).await,
                "Failed to process the question.",
            )
        }
        Action::Text(text) => {
            print_section_header(&format!("Text Analysis ({})", analysis_type.label()));
            report(
                ctx.service.summarize_text(&text, analysis_type).await,
                "Failed to analyze the text.",
            )
        }
        Action::Interactive => {
            interactive::run_interactive(ctx).await;
            true
        }
        Action::Demo => run_demo(ctx).await,
    }
}

async fn run_demo(ctx: &AppContext) -> bool {
    print_section_header("Financial Website Recommendations");
    let recommended = report(
        ctx.analyst().recommend_websites(DEFAULT_TOPIC).await,
        "Failed to retrieve website recommendations.",
    );
    if !recommended {
        return false;
    }

    print_section_header("Summarizing Yahoo Finance Article");
    println!("URL: {}\n", DEMO_ARTICLE_URL);
    report(
        ctx.service
            .summarize_from_url(DEMO_ARTICLE_URL, AnalysisType::Summary)
            .await,
        "Failed to summarize the article.",
    )
}

fn report(result: Result<String, AppError>, failure: &str) -> bool {
    match result {
        Ok(text) => {
            println!("{}", text);
            true
        }
        Err(e) => {
            log_failure(&e);
            println!("{}", failure);
            eprintln!("Error: {}", e.user_message());
            false
        }
    }
}
