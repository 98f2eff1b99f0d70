mod cli;

use clap::Parser;
use cli::Cli;
use resume_rag_client::config::{LoggingSettings, Settings};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Filter directive to log with: `-v` wins, then `RUST_LOG`, then the configured level
fn filter_directive(level: &str, verbose: bool, rust_log: Option<String>) -> String {
    if verbose {
        return "debug".to_string();
    }
    rust_log
        .filter(|directive| !directive.trim().is_empty())
        .unwrap_or_else(|| level.to_string())
}

fn init_logging(logging: &LoggingSettings, verbose: bool) {
    let directive = filter_directive(&logging.level, verbose, std::env::var("RUST_LOG").ok());
    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new(&logging.level));

    // Logs go to stderr so command output on stdout stays clean
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true);

    match logging.format.as_str() {
        "pretty" => subscriber.pretty().init(),
        "compact" => subscriber.compact().init(),
        _ => subscriber.init(),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let cli = Cli::parse();

    let mut settings = match &cli.config {
        Some(path) => Settings::load_from(path)?,
        None => Settings::load()?,
    };
    if let Some(base_url) = &cli.base_url {
        settings = settings.with_base_url(base_url.clone())?;
    }

    init_logging(&settings.logging, cli.verbose);
    debug!("Configuration loaded: {:?}", settings);

    cli::commands::run(cli, settings).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbose_overrides_rust_log() {
        let directive = filter_directive("warn", true, Some("resume_rag_client=error".to_string()));
        assert_eq!(directive, "debug");
    }

    #[test]
    fn test_rust_log_overrides_config_level() {
        let directive = filter_directive("warn", false, Some("resume_rag_client=trace".to_string()));
        assert_eq!(directive, "resume_rag_client=trace");
    }

    #[test]
    fn test_config_level_is_fallback() {
        assert_eq!(filter_directive("info", false, None), "info");
        assert_eq!(filter_directive("info", false, Some("  ".to_string())), "info");
    }
}
