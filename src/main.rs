use clap::Parser;
use emd_hunter::cli::commands::{Cli, Commands};
use emd_hunter::domain::entities::evaluation::{Narration, OpportunityEvaluation};
use emd_hunter::domain::entities::keyword_metrics::KeywordMetrics;
use emd_hunter::domain::entities::ranking_page::PageCandidate;
use emd_hunter::EmdHunter;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("emd_hunter=info")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let hunter = match EmdHunter::new() {
        Ok(h) => h,
        Err(e) => {
            eprintln!("Error initializing emd-hunter: {e}");
            std::process::exit(1);
        }
    };

    let result = run_command(hunter, cli.command).await;
    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

#[derive(Serialize)]
struct EvaluationOutput<'a> {
    #[serde(flatten)]
    evaluation: &'a OpportunityEvaluation,
    #[serde(skip_serializing_if = "Option::is_none")]
    narration: Option<Narration>,
}

async fn run_command(hunter: EmdHunter, cmd: Commands) -> Result<(), Box<dyn std::error::Error>> {
    match cmd {
        Commands::Keywords { seed, market } => {
            let keywords = hunter.search_keywords(&seed, &market.into()).await?;
            print_json(&keywords)?;
        }
        Commands::Serp { keyword, locale } => {
            let analysis = hunter.analyze_serp(&keyword, &locale.into()).await?;
            print_json(&analysis)?;
        }
        Commands::Evaluate {
            keyword,
            market,
            narrate,
        } => {
            let evaluation = hunter.evaluate_opportunity(&keyword, &market.into()).await?;
            let narration = if narrate {
                Some(hunter.narrate(&evaluation).await)
            } else {
                None
            };
            print_json(&EvaluationOutput {
                evaluation: &evaluation,
                narration,
            })?;
        }
        Commands::Score { pages, metrics } => {
            let pages: Vec<PageCandidate> = serde_json::from_str(&pages)?;
            let metrics: KeywordMetrics = serde_json::from_str(&metrics)?;
            let score = hunter.score_only(pages, &metrics)?;
            print_json(&serde_json::json!({ "kill_score": score }))?;
        }
    }
    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<(), serde_json::Error> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
