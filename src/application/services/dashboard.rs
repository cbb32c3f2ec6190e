use std::collections::{HashMap, HashSet};
use std::time::Instant;

use futures::future::join_all;
use tracing::{info, warn};

use crate::application::state::Loadable;
use crate::application::views::{DashboardRow, DashboardTab, DashboardView};
use crate::domain::grouping::group;
use crate::domain::ids::NovelId;
use crate::domain::novels::NovelRecord;
use crate::domain::repositories::NovelSource;
use crate::domain::statistics::{MetricKey, StatSnapshot};

/// Build the dashboard for `tab`, or for every tab when `tab` is `None`.
///
/// Tabs are processed one after another in first-seen order; the novels of a
/// single tab are fetched concurrently, one request per distinct novel id.
/// A novel listed in several tabs is therefore requested again only after its
/// first fetch has completed, which lets a caching source answer the repeat.
pub async fn load_dashboard(
    source: &dyn NovelSource,
    novels: &Loadable<Vec<NovelRecord>>,
    tab: Option<&str>,
    metric: MetricKey,
) -> DashboardView {
    let start = Instant::now();
    let grouping = group(novels.items());

    let names: Vec<&str> = match tab {
        Some(name) => grouping
            .names
            .iter()
            .map(String::as_str)
            .filter(|n| *n == name)
            .collect(),
        None => grouping.names.iter().map(String::as_str).collect(),
    };

    let mut tabs = Vec::with_capacity(names.len());
    for name in names {
        let members = grouping.in_list_first(name);
        let loaded = load_statistics(source, &members).await;

        let pending = Loadable::Loading;
        let rows = members
            .iter()
            .map(|record| {
                let stats = loaded.get(&record.novel_id).unwrap_or(&pending);
                DashboardRow::build(record, stats, metric)
            })
            .collect();

        tabs.push(DashboardTab {
            name: name.to_string(),
            rows,
        });
    }

    info!(
        tabs = tabs.len(),
        %metric,
        duration_ms = start.elapsed().as_millis(),
        "dashboard built"
    );

    DashboardView {
        status: novels.status(),
        metric,
        metric_label: metric.label(),
        tabs,
    }
}

/// Fetch statistics once for every distinct novel id among `members`.
async fn load_statistics(
    source: &dyn NovelSource,
    members: &[&NovelRecord],
) -> HashMap<NovelId, Loadable<Vec<StatSnapshot>>> {
    let mut seen = HashSet::new();
    let ids: Vec<NovelId> = members
        .iter()
        .map(|record| record.novel_id)
        .filter(|id| seen.insert(*id))
        .collect();

    let results = join_all(ids.iter().map(|&id| source.novel_statistics(id))).await;

    ids.into_iter()
        .zip(results)
        .map(|(id, result)| {
            if let Err(err) = &result {
                warn!(error = %err, %id, "novel statistics failed to load");
            }
            (id, Loadable::from(result))
        })
        .collect()
}
