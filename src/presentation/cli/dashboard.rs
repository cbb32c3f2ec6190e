use anyhow::Result;
use clap::Args;

use super::render::{optional, optional_delta, status_line, table};
use super::{OutputFormat, ensure_loaded, print_json};
use crate::application::services::{load_dashboard, load_novel_list};
use crate::application::views::DashboardView;
use crate::domain::statistics::MetricKey;
use crate::infrastructure::client::JjClient;

#[derive(Debug, Args)]
pub struct DashboardCommand {
    /// Only show this list; every list is shown when omitted
    #[arg(long)]
    pub list: Option<String>,
    #[arg(long, default_value_t = MetricKey::Reviews)]
    pub metric: MetricKey,
}

pub async fn run(client: &JjClient, format: OutputFormat, command: DashboardCommand) -> Result<()> {
    let novels = load_novel_list(client).await;
    let view = load_dashboard(client, &novels, command.list.as_deref(), command.metric).await;
    tracing::debug!(cached = client.cache().len(), "dashboard requests served");

    match format {
        OutputFormat::Json => print_json(&view)?,
        OutputFormat::Table => print!("{}", render_dashboard(&view)),
    }

    ensure_loaded("novel list", &view.status)
}

pub fn render_dashboard(view: &DashboardView) -> String {
    let mut out = String::new();
    if let Some(line) = status_line("novel list", &view.status) {
        out.push_str(&line);
        out.push('\n');
    }

    for (i, tab) in view.tabs.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(&format!("{} \u{00b7} {}\n", tab.name, view.metric_label));

        let rows: Vec<Vec<String>> = tab
            .rows
            .iter()
            .map(|row| {
                vec![
                    row.novel_id.to_string(),
                    row.title.clone(),
                    if row.in_list { "yes" } else { "no" }.to_string(),
                    optional(row.latest),
                    optional_delta(row.trend),
                    row.snapshots.to_string(),
                ]
            })
            .collect();
        out.push_str(&table(
            &["ID", "Name", "In List", "Latest", "Trend", "Snapshots"],
            &rows,
        ));
    }
    out
}
