use anyhow::Result;
use clap::Args;

use super::render::{bar_chart, status_line};
use super::{OutputFormat, ensure_loaded, print_json};
use crate::application::services::load_novel_stats;
use crate::application::views::NovelStatsView;
use crate::domain::ids::NovelId;
use crate::domain::statistics::MetricKey;
use crate::infrastructure::client::JjClient;

#[derive(Debug, Args)]
pub struct StatsCommand {
    #[arg(long)]
    pub novel_id: NovelId,
    /// Statistic to chart (reviews, first-chapter-clicks, last-chapter-clicks, collected, rewards)
    #[arg(long, default_value_t = MetricKey::Reviews)]
    pub metric: MetricKey,
    /// Width of the longest bar, in characters
    #[arg(long, default_value_t = 40)]
    pub width: usize,
}

pub async fn run(client: &JjClient, format: OutputFormat, command: StatsCommand) -> Result<()> {
    let (detail, stats) = load_novel_stats(client, command.novel_id).await;
    let view = NovelStatsView::build(command.novel_id, &detail, &stats, command.metric);

    match format {
        OutputFormat::Json => print_json(&view)?,
        OutputFormat::Table => print!("{}", render_stats(&view, command.width)),
    }

    ensure_loaded("novel statistics", &view.stats_status)
}

pub fn render_stats(view: &NovelStatsView, width: usize) -> String {
    let mut out = String::new();

    let heading = view
        .heading
        .clone()
        .unwrap_or_else(|| view.novel_id.to_string());
    out.push_str(&heading);
    out.push('\n');

    for line in [
        status_line("novel detail", &view.detail_status),
        status_line("novel statistics", &view.stats_status),
    ]
    .into_iter()
    .flatten()
    {
        out.push_str(&line);
        out.push('\n');
    }

    out.push_str(&format!("\nStatistic: {} ({})\n\n", view.metric_label, view.color));
    out.push_str(&bar_chart(&view.series, width));
    out
}
