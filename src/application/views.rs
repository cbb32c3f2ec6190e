use serde::Serialize;

use crate::application::state::{Loadable, ViewStatus};
use crate::domain::grouping::group;
use crate::domain::ids::NovelId;
use crate::domain::novels::{NovelDetail, NovelRecord};
use crate::domain::series::{Series, derive_series};
use crate::domain::statistics::{MetricKey, StatSnapshot};

/// Which tab of the novel list is shown and how its rows are ordered.
///
/// Owned by the presentation layer; the grouping itself stays stateless.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListSelection {
    pub tab: Option<String>,
    pub in_list_first: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TabView {
    pub name: String,
    pub count: usize,
    pub active: bool,
}

/// The novel list page: a tab strip plus the table of the active tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NovelListView {
    pub status: ViewStatus,
    pub tabs: Vec<TabView>,
    pub selected: Option<String>,
    pub rows: Vec<NovelRecord>,
}

impl NovelListView {
    /// Falls back to the first tab when nothing is selected. An explicit tab
    /// that does not exist selects nothing and shows no rows.
    pub fn build(novels: &Loadable<Vec<NovelRecord>>, selection: &ListSelection) -> Self {
        let grouping = group(novels.items());
        let selected = selection
            .tab
            .clone()
            .or_else(|| grouping.default_tab().map(str::to_string));

        let tabs = grouping
            .names
            .iter()
            .map(|name| TabView {
                name: name.clone(),
                count: grouping.bucket(name).len(),
                active: selected.as_deref() == Some(name.as_str()),
            })
            .collect();

        let rows = match selected.as_deref() {
            Some(name) if selection.in_list_first => grouping.in_list_first(name),
            Some(name) => grouping.bucket(name).to_vec(),
            None => Vec::new(),
        };

        Self {
            status: novels.status(),
            tabs,
            selected,
            rows: rows.into_iter().cloned().collect(),
        }
    }
}

/// The per-novel page: heading plus one metric charted over time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NovelStatsView {
    pub novel_id: NovelId,
    pub heading: Option<String>,
    pub metric: MetricKey,
    pub metric_label: &'static str,
    pub color: &'static str,
    pub detail_status: ViewStatus,
    pub stats_status: ViewStatus,
    pub series: Series,
}

impl NovelStatsView {
    pub fn build(
        novel_id: NovelId,
        detail: &Loadable<NovelDetail>,
        stats: &Loadable<Vec<StatSnapshot>>,
        metric: MetricKey,
    ) -> Self {
        Self {
            novel_id,
            heading: detail.data().map(NovelDetail::heading),
            metric,
            metric_label: metric.label(),
            color: metric.color(),
            detail_status: detail.status(),
            stats_status: stats.status(),
            series: derive_series(stats.items(), metric),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardRow {
    pub novel_id: NovelId,
    pub title: String,
    pub in_list: bool,
    pub snapshots: usize,
    pub latest: Option<i64>,
    pub trend: Option<i64>,
    pub status: ViewStatus,
}

impl DashboardRow {
    pub fn build(
        record: &NovelRecord,
        stats: &Loadable<Vec<StatSnapshot>>,
        metric: MetricKey,
    ) -> Self {
        let series = derive_series(stats.items(), metric);
        let last = series.last();
        Self {
            novel_id: record.novel_id,
            title: record.title.clone(),
            in_list: record.in_list,
            snapshots: series.len(),
            latest: last.map(|p| p.value),
            trend: last.map(|p| p.delta),
            status: stats.status(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardTab {
    pub name: String,
    pub rows: Vec<DashboardRow>,
}

/// Latest value and trend of one metric for every novel in the chosen tabs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    pub status: ViewStatus,
    pub metric: MetricKey,
    pub metric_label: &'static str,
    pub tabs: Vec<DashboardTab>,
}
