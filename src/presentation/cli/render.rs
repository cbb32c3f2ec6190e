use std::fmt::Write;

use crate::application::state::ViewStatus;
use crate::domain::formatting::{EM_DASH, format_delta};
use crate::domain::series::Series;

const BAR: char = '█';

/// Left-aligned plain-text table with a dashed rule under the header.
pub fn table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if let Some(width) = widths.get_mut(i) {
                *width = (*width).max(cell.chars().count());
            }
        }
    }

    let mut out = String::new();
    push_row(&mut out, headers.iter().copied(), &widths);
    let rule = widths.iter().sum::<usize>() + 2 * widths.len().saturating_sub(1);
    out.push_str(&"-".repeat(rule));
    out.push('\n');
    for row in rows {
        push_row(&mut out, row.iter().map(String::as_str), &widths);
    }
    out
}

fn push_row<'a>(out: &mut String, cells: impl Iterator<Item = &'a str>, widths: &[usize]) {
    let line = cells
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join("  ");
    out.push_str(line.trim_end());
    out.push('\n');
}

/// Horizontal bar chart of a series, one line per point, with the trend
/// delta in the last column.
pub fn bar_chart(series: &Series, width: usize) -> String {
    if series.is_empty() {
        return "(no data)\n".to_string();
    }

    let max = series.max_value();
    let label_width = series.labels.iter().map(|l| l.chars().count()).max().unwrap_or(0);
    let value_width = series.values.iter().map(|v| v.to_string().len()).max().unwrap_or(1);

    let mut out = String::new();
    for point in series.points() {
        let filled = scaled(point.value, max, width);
        let bar: String = std::iter::repeat_n(BAR, filled).collect();
        let _ = writeln!(
            out,
            "{label:<label_width$}  {bar:<width$}  {value:>value_width$}  {delta}",
            label = point.label,
            value = point.value,
            delta = format_delta(point.delta),
        );
    }
    out
}

fn scaled(value: i64, max: i64, width: usize) -> usize {
    if value <= 0 || max <= 0 || width == 0 {
        return 0;
    }
    let filled = (value as u128 * width as u128) / max as u128;
    // Any non-zero value gets at least one cell.
    (filled as usize).clamp(1, width)
}

/// One-line description of a non-ready resource, or `None` when ready.
pub fn status_line(resource: &str, status: &ViewStatus) -> Option<String> {
    match status {
        ViewStatus::Ready => None,
        ViewStatus::Loading => Some(format!("{resource}: loading")),
        ViewStatus::Failed { kind, message } => {
            Some(format!("{resource}: failed to load ({kind}): {message}"))
        }
    }
}

pub fn optional(value: Option<i64>) -> String {
    value.map_or_else(|| EM_DASH.to_string(), |v| v.to_string())
}

pub fn optional_delta(value: Option<i64>) -> String {
    value.map_or_else(|| EM_DASH.to_string(), format_delta)
}
