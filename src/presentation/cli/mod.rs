pub mod dashboard;
pub mod metrics;
pub mod novels;
pub mod render;
pub mod stats;

use clap::{Parser, Subcommand, ValueEnum};

use crate::application::state::ViewStatus;
use crate::infrastructure::client::DEFAULT_API_URL;
use dashboard::DashboardCommand;
use novels::NovelsCommand;
use stats::StatsCommand;

#[derive(Debug, Parser)]
#[command(author, version, about = "Browse tracked novels and their statistics", long_about = None)]
pub struct Cli {
    #[arg(long, global = true, env = "JJSTATS_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    #[arg(
        long,
        global = true,
        env = "JJSTATS_FORMAT",
        value_enum,
        default_value_t = OutputFormat::Table
    )]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show the novel list, one tab per list name
    Novels(NovelsCommand),

    /// Chart one statistic of a novel over time
    Stats(StatsCommand),

    /// Latest value and trend of a statistic for every novel in a list
    Dashboard(DashboardCommand),

    /// List the statistics that can be charted
    Metrics,
}

pub(crate) fn print_json<T>(value: &T) -> anyhow::Result<()>
where
    T: serde::Serialize,
{
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}

/// Fail the command when the resource it exists to show did not load.
pub(crate) fn ensure_loaded(resource: &str, status: &ViewStatus) -> anyhow::Result<()> {
    match status {
        ViewStatus::Ready => Ok(()),
        ViewStatus::Loading => anyhow::bail!("{resource} did not finish loading"),
        ViewStatus::Failed { message, .. } => anyhow::bail!("{resource}: {message}"),
    }
}
