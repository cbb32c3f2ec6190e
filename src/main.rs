use anyhow::Result;
use clap::Parser;
use jjstats::infrastructure::client::JjClient;
use jjstats::presentation::cli::{Cli, Commands, dashboard, metrics, novels, stats};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (before clap parses env vars)
    let _ = dotenvy::dotenv();

    init_tracing();

    let cli = Cli::parse();

    match cli.command {
        Commands::Novels(cmd) => {
            let client = JjClient::from_base_url(&cli.api_url)?;
            novels::run(&client, cli.format, cmd).await
        }
        Commands::Stats(cmd) => {
            let client = JjClient::from_base_url(&cli.api_url)?;
            stats::run(&client, cli.format, cmd).await
        }
        Commands::Dashboard(cmd) => {
            let client = JjClient::from_base_url(&cli.api_url)?;
            dashboard::run(&client, cli.format, cmd).await
        }
        Commands::Metrics => metrics::run(cli.format),
    }
}

// Logs go to stderr; stdout carries tables and JSON.
fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let use_json = std::env::var("RUST_LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json"));

    let registry = tracing_subscriber::registry().with(env_filter);

    if use_json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .compact()
                    .with_writer(std::io::stderr),
            )
            .init();
    }
}
