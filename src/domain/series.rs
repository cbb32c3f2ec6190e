use serde::Serialize;

use crate::domain::formatting::format_timestamp;
use crate::domain::statistics::{MetricKey, StatSnapshot};

/// Chart-ready projection of one metric over a run of snapshots.
///
/// The three columns always have the same length as the input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Series {
    pub labels: Vec<String>,
    pub values: Vec<i64>,
    pub deltas: Vec<i64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeriesPoint<'a> {
    pub label: &'a str,
    pub value: i64,
    pub delta: i64,
}

/// Project `metric` out of `snapshots`, which are expected in ascending
/// `created_at` order.
///
/// A zero value reports a zero delta, and so does the first point since it
/// has nothing to compare against. Deltas saturate at the `i64` bounds.
pub fn derive_series(snapshots: &[StatSnapshot], metric: MetricKey) -> Series {
    let labels = snapshots
        .iter()
        .map(|snap| format_timestamp(snap.created_at))
        .collect();
    let values: Vec<i64> = snapshots.iter().map(|snap| snap.metric(metric)).collect();

    let deltas = values
        .iter()
        .enumerate()
        .map(|(i, &value)| match i.checked_sub(1) {
            Some(prev) if value != 0 => value.saturating_sub(values[prev]),
            _ => 0,
        })
        .collect();

    Series {
        labels,
        values,
        deltas,
    }
}

impl Series {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn points(&self) -> impl Iterator<Item = SeriesPoint<'_>> {
        self.labels
            .iter()
            .zip(&self.values)
            .zip(&self.deltas)
            .map(|((label, &value), &delta)| SeriesPoint {
                label,
                value,
                delta,
            })
    }

    pub fn last(&self) -> Option<SeriesPoint<'_>> {
        self.points().last()
    }

    /// Largest value in the series, used to scale bar widths.
    pub fn max_value(&self) -> i64 {
        self.values.iter().copied().max().unwrap_or(0)
    }
}
