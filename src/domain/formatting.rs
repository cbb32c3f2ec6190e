use chrono::{DateTime, Utc};

/// Format a timestamp as a localized medium date-time, e.g. "Oct 18, 2026 3:04 PM".
pub fn format_timestamp(dt: DateTime<Utc>) -> String {
    dt.format("%b %-d, %Y %-I:%M %p").to_string()
}

/// Format a trend delta with an explicit sign; zero renders bare.
pub fn format_delta(delta: i64) -> String {
    if delta > 0 {
        format!("+{delta}")
    } else {
        delta.to_string()
    }
}

/// Em dash constant for use as a placeholder when a value is absent.
pub const EM_DASH: &str = "\u{2014}";
