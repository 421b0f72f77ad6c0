use clap::{Parser, ValueEnum};
use investiguard_classifiers::SentimentBackend;

#[derive(Parser, Debug, Clone)]
#[command(name = "investiguard")]
#[command(author, version, about = "InvestiGuard fraud risk analysis service", long_about = None)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, env = "INVESTIGUARD_CONFIG", default_value = "investiguard.yaml")]
    pub config: String,

    /// Listen address
    #[arg(short = 'l', long, env = "INVESTIGUARD_LISTEN")]
    pub listen: Option<String>,

    /// Listen port
    #[arg(short = 'P', long, env = "INVESTIGUARD_PORT")]
    pub port: Option<u16>,

    /// Sentiment backend: keyword or model
    #[arg(short, long, env = "INVESTIGUARD_SENTIMENT", value_parser = parse_backend)]
    pub sentiment: Option<SentimentBackend>,

    /// Log output format
    #[arg(long, env = "INVESTIGUARD_LOG_FORMAT", value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}

fn parse_backend(s: &str) -> Result<SentimentBackend, String> {
    s.parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_overrides() {
        let cli = Cli::try_parse_from([
            "investiguard",
            "--config",
            "custom.yaml",
            "--port",
            "9000",
            "--sentiment",
            "model",
            "--log-format",
            "json",
        ])
        .unwrap();

        assert_eq!(cli.config, "custom.yaml");
        assert_eq!(cli.port, Some(9000));
        assert_eq!(cli.sentiment, Some(SentimentBackend::Model));
        assert_eq!(cli.log_format, LogFormat::Json);
        assert!(!cli.verbose);
    }

    #[test]
    fn test_log_format_from_env() {
        std::env::set_var("INVESTIGUARD_LOG_FORMAT", "json");
        let cli = Cli::try_parse_from(["investiguard"]).unwrap();
        std::env::remove_var("INVESTIGUARD_LOG_FORMAT");
        assert_eq!(cli.log_format, LogFormat::Json);
    }

    #[test]
    fn test_rejects_unknown_backend() {
        let result = Cli::try_parse_from(["investiguard", "--sentiment", "bayes"]);
        assert!(result.is_err());
    }
}
