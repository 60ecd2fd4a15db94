use crate::domain::values::market_params::{MarketParams, SerpLocale};
use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "emd-hunter", about = "Score exact-match-domain opportunities from search results")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args, Debug, Clone)]
pub struct LocaleArgs {
    #[arg(long, default_value = "United States")]
    pub location: String,
    #[arg(long, default_value = "English")]
    pub language: String,
}

#[derive(Args, Debug, Clone)]
pub struct MarketArgs {
    #[command(flatten)]
    pub locale: LocaleArgs,
    #[arg(long, default_value = "200")]
    pub min_volume: u64,
    #[arg(long, default_value = "1200")]
    pub max_volume: u64,
    #[arg(long, default_value = "10.0")]
    pub min_cpc: f64,
    #[arg(long)]
    pub max_cpc: Option<f64>,
    #[arg(long, default_value = "50")]
    pub limit: usize,
}

impl From<LocaleArgs> for SerpLocale {
    fn from(a: LocaleArgs) -> Self {
        SerpLocale {
            location_name: a.location,
            language_name: a.language,
            ..SerpLocale::default()
        }
    }
}

impl From<MarketArgs> for MarketParams {
    fn from(a: MarketArgs) -> Self {
        MarketParams {
            location_name: a.locale.location,
            language_name: a.locale.language,
            min_volume: a.min_volume,
            max_volume: a.max_volume,
            min_cpc: a.min_cpc,
            max_cpc: a.max_cpc,
            limit: a.limit,
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Find keywords around a seed term inside a volume/CPC window
    Keywords {
        seed: String,
        #[command(flatten)]
        market: MarketArgs,
    },
    /// Fetch the first SERP page for a keyword and score it against baseline metrics
    Serp {
        keyword: String,
        #[command(flatten)]
        locale: LocaleArgs,
    },
    /// Full evaluation: keyword metrics + SERP + Kill Score
    Evaluate {
        keyword: String,
        #[command(flatten)]
        market: MarketArgs,
        /// Also request a prose analysis from the configured language model
        #[arg(long)]
        narrate: bool,
    },
    /// Re-score stored data without fetching
    Score {
        /// JSON array of pages (rank, domain, url, title, domain_rank, backlinks)
        pages: String,
        /// JSON keyword metrics (keyword, search_volume, cpc, competition)
        metrics: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_market_defaults_match_params_defaults() {
        let cli = Cli::parse_from(["emd-hunter", "evaluate", "plumber phoenix"]);
        match cli.command {
            Commands::Evaluate { keyword, market, narrate } => {
                assert_eq!(keyword, "plumber phoenix");
                assert!(!narrate);
                assert_eq!(MarketParams::from(market), MarketParams::default());
            }
            _ => panic!("expected evaluate"),
        }
    }

    #[test]
    fn test_market_flags() {
        let cli = Cli::parse_from([
            "emd-hunter", "keywords", "roofing", "--min-volume", "100", "--max-cpc", "80",
            "--location", "Canada",
        ]);
        match cli.command {
            Commands::Keywords { seed, market } => {
                let p = MarketParams::from(market);
                assert_eq!(seed, "roofing");
                assert_eq!(p.min_volume, 100);
                assert_eq!(p.max_cpc, Some(80.0));
                assert_eq!(p.location_name, "Canada");
            }
            _ => panic!("expected keywords"),
        }
    }

    #[test]
    fn test_serp_locale() {
        let cli = Cli::parse_from(["emd-hunter", "serp", "hvac denver", "--language", "Spanish"]);
        match cli.command {
            Commands::Serp { keyword, locale } => {
                let l = SerpLocale::from(locale);
                assert_eq!(keyword, "hvac denver");
                assert_eq!(l.language_name, "Spanish");
                assert_eq!(l.device, "desktop");
            }
            _ => panic!("expected serp"),
        }
    }
}
