use async_trait::async_trait;

use super::JjClient;
use crate::domain::errors::FetchError;
use crate::domain::ids::NovelId;
use crate::domain::novels::{NovelDetail, NovelRecord};
use crate::domain::repositories::NovelSource;
use crate::domain::statistics::StatSnapshot;
use crate::infrastructure::cache::QueryKey;

pub struct NovelsClient<'a> {
    client: &'a JjClient,
}

impl<'a> NovelsClient<'a> {
    pub fn new(client: &'a JjClient) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> Result<Vec<NovelRecord>, FetchError> {
        self.client.fetch(QueryKey::Novels).await
    }

    pub async fn detail(&self, id: NovelId) -> Result<NovelDetail, FetchError> {
        self.client.fetch(QueryKey::NovelDetail(id)).await
    }

    /// Snapshots in the order the API returns them (ascending `createdAt`).
    pub async fn statistics(&self, id: NovelId) -> Result<Vec<StatSnapshot>, FetchError> {
        self.client.fetch(QueryKey::NovelStatistics(id)).await
    }
}

#[async_trait]
impl NovelSource for JjClient {
    async fn list_novels(&self) -> Result<Vec<NovelRecord>, FetchError> {
        self.novels().list().await
    }

    async fn novel_detail(&self, id: NovelId) -> Result<NovelDetail, FetchError> {
        self.novels().detail(id).await
    }

    async fn novel_statistics(&self, id: NovelId) -> Result<Vec<StatSnapshot>, FetchError> {
        self.novels().statistics(id).await
    }
}
