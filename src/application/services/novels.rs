use std::time::Instant;

use tracing::{info, warn};

use crate::application::state::Loadable;
use crate::domain::ids::NovelId;
use crate::domain::novels::{NovelDetail, NovelRecord};
use crate::domain::repositories::NovelSource;
use crate::domain::statistics::StatSnapshot;

/// Fetch the full novel collection for the list view.
pub async fn load_novel_list(source: &dyn NovelSource) -> Loadable<Vec<NovelRecord>> {
    let start = Instant::now();
    let result = source.list_novels().await;

    match &result {
        Ok(novels) => info!(
            count = novels.len(),
            duration_ms = start.elapsed().as_millis(),
            "novel list loaded"
        ),
        Err(err) => warn!(error = %err, kind = err.kind(), "novel list failed to load"),
    }

    result.into()
}

/// Fetch detail and statistics for one novel.
///
/// The two requests run concurrently and resolve independently: a failed
/// detail request does not prevent the chart from loading.
pub async fn load_novel_stats(
    source: &dyn NovelSource,
    id: NovelId,
) -> (Loadable<NovelDetail>, Loadable<Vec<StatSnapshot>>) {
    let start = Instant::now();
    let (detail, stats) = tokio::join!(source.novel_detail(id), source.novel_statistics(id));

    if let Err(err) = &detail {
        warn!(error = %err, %id, "novel detail failed to load");
    }
    match &stats {
        Ok(snapshots) => info!(
            %id,
            snapshots = snapshots.len(),
            duration_ms = start.elapsed().as_millis(),
            "novel statistics loaded"
        ),
        Err(err) => warn!(error = %err, %id, "novel statistics failed to load"),
    }

    (detail.into(), stats.into())
}
