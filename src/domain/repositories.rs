use async_trait::async_trait;

use crate::domain::errors::FetchError;
use crate::domain::ids::NovelId;
use crate::domain::novels::{NovelDetail, NovelRecord};
use crate::domain::statistics::StatSnapshot;

/// Read access to the novels API.
#[async_trait]
pub trait NovelSource: Send + Sync {
    async fn list_novels(&self) -> Result<Vec<NovelRecord>, FetchError>;
    async fn novel_detail(&self, id: NovelId) -> Result<NovelDetail, FetchError>;
    /// Snapshots in ascending `created_at` order.
    async fn novel_statistics(&self, id: NovelId) -> Result<Vec<StatSnapshot>, FetchError>;
}
