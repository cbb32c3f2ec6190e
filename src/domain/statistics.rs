use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::ids::NovelId;

/// One scrape of a novel's public counters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatSnapshot {
    pub id: String,
    pub novel_id: NovelId,
    pub first_chapter_clicks: i64,
    pub last_chapter_clicks: i64,
    pub reviews: i64,
    pub collected: i64,
    pub rewards: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl StatSnapshot {
    pub const fn metric(&self, key: MetricKey) -> i64 {
        match key {
            MetricKey::Reviews => self.reviews,
            MetricKey::FirstChapterClicks => self.first_chapter_clicks,
            MetricKey::LastChapterClicks => self.last_chapter_clicks,
            MetricKey::Collected => self.collected,
            MetricKey::Rewards => self.rewards,
        }
    }
}

/// Which counter of a [`StatSnapshot`] is charted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MetricKey {
    #[default]
    Reviews,
    FirstChapterClicks,
    LastChapterClicks,
    Collected,
    Rewards,
}

impl MetricKey {
    pub const ALL: [MetricKey; 5] = [
        MetricKey::Reviews,
        MetricKey::FirstChapterClicks,
        MetricKey::LastChapterClicks,
        MetricKey::Collected,
        MetricKey::Rewards,
    ];

    /// Key as it appears in API payloads.
    pub const fn as_str(self) -> &'static str {
        match self {
            MetricKey::Reviews => "reviews",
            MetricKey::FirstChapterClicks => "firstChapterClicks",
            MetricKey::LastChapterClicks => "lastChapterClicks",
            MetricKey::Collected => "collected",
            MetricKey::Rewards => "rewards",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            MetricKey::Reviews => "Reviews",
            MetricKey::FirstChapterClicks => "First Chapter Clicks",
            MetricKey::LastChapterClicks => "Last Chapter Clicks",
            MetricKey::Collected => "Collected",
            MetricKey::Rewards => "Rewards",
        }
    }

    /// Chart colour name associated with the metric.
    pub const fn color(self) -> &'static str {
        match self {
            MetricKey::Reviews => "emerald",
            MetricKey::FirstChapterClicks => "orange",
            MetricKey::LastChapterClicks => "slate",
            MetricKey::Collected => "red",
            MetricKey::Rewards => "lime",
        }
    }
}

impl fmt::Display for MetricKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown metric `{0}` (expected one of: reviews, first-chapter-clicks, last-chapter-clicks, collected, rewards)")]
pub struct UnknownMetric(pub String);

impl FromStr for MetricKey {
    type Err = UnknownMetric;

    /// Accepts the API spelling (`firstChapterClicks`) as well as kebab and
    /// snake case (`first-chapter-clicks`, `first_chapter_clicks`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .flat_map(char::to_lowercase)
            .collect();
        MetricKey::ALL
            .into_iter()
            .find(|key| key.as_str().eq_ignore_ascii_case(&normalized))
            .ok_or_else(|| UnknownMetric(s.to_string()))
    }
}
