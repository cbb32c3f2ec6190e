use serde::{Deserialize, Serialize};

use crate::domain::ids::{AuthorId, NovelId};

/// A novel as it appears in one of the tracked lists.
///
/// The same novel may appear in several lists, so `novel_id` identifies the
/// novel while `id` identifies this particular list entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NovelRecord {
    pub id: String,
    pub title: String,
    pub novel_id: NovelId,
    pub author_id: AuthorId,
    pub list_name: String,
    pub in_list: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NovelDetail {
    pub novel_id: NovelId,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_id: Option<AuthorId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list_name: Option<String>,
}

impl NovelDetail {
    /// Heading shown above the statistics chart, e.g. `4211 Some Title`.
    pub fn heading(&self) -> String {
        format!("{} {}", self.novel_id, self.title)
    }
}
