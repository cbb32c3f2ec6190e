use anyhow::Result;
use clap::Args;

use super::render::{status_line, table};
use super::{OutputFormat, ensure_loaded, print_json};
use crate::application::services::load_novel_list;
use crate::application::views::{ListSelection, NovelListView, TabView};
use crate::infrastructure::client::JjClient;

#[derive(Debug, Args)]
pub struct NovelsCommand {
    /// List (tab) to show; defaults to the first list returned by the API
    #[arg(long)]
    pub list: Option<String>,
    /// Show novels currently in the list ahead of those that dropped out
    #[arg(long)]
    pub in_list_first: bool,
}

pub async fn run(client: &JjClient, format: OutputFormat, command: NovelsCommand) -> Result<()> {
    let novels = load_novel_list(client).await;
    let selection = ListSelection {
        tab: command.list,
        in_list_first: command.in_list_first,
    };
    let view = NovelListView::build(&novels, &selection);

    match format {
        OutputFormat::Json => print_json(&view)?,
        OutputFormat::Table => print!("{}", render_list(&view)),
    }

    ensure_loaded("novel list", &view.status)
}

pub fn render_list(view: &NovelListView) -> String {
    let mut out = String::new();
    if let Some(line) = status_line("novel list", &view.status) {
        out.push_str(&line);
        out.push('\n');
    }

    if !view.tabs.is_empty() {
        out.push_str(&render_tabs(&view.tabs));
        out.push_str("\n\n");
    }

    let rows: Vec<Vec<String>> = view
        .rows
        .iter()
        .map(|novel| {
            vec![
                novel.novel_id.to_string(),
                novel.title.clone(),
                novel.author_id.to_string(),
                novel.list_name.clone(),
            ]
        })
        .collect();
    out.push_str(&table(&["ID", "Name", "Author ID", "List"], &rows));
    out
}

fn render_tabs(tabs: &[TabView]) -> String {
    tabs.iter()
        .map(|tab| {
            if tab.active {
                format!("[{} ({})]", tab.name, tab.count)
            } else {
                format!(" {} ({}) ", tab.name, tab.count)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
