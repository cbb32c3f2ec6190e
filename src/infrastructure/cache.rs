use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};

use crate::domain::ids::NovelId;

/// Identifies one cacheable request: the resource kind plus its parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryKey {
    Novels,
    NovelDetail(NovelId),
    NovelStatistics(NovelId),
}

impl QueryKey {
    /// Path relative to the API base url.
    pub fn path(&self) -> String {
        match self {
            QueryKey::Novels => "api/novels".to_string(),
            QueryKey::NovelDetail(id) => format!("api/novel/{id}/detail"),
            QueryKey::NovelStatistics(id) => format!("api/novel/{id}/statistics"),
        }
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryKey::Novels => f.write_str("novels"),
            QueryKey::NovelDetail(id) => write!(f, "novel-detail/{id}"),
            QueryKey::NovelStatistics(id) => write!(f, "novel-stats/{id}"),
        }
    }
}

/// In-memory memo of successful response bodies.
///
/// Only bodies that decoded successfully are stored. The lock is never held
/// across an await point.
#[derive(Debug, Default)]
pub struct QueryCache {
    entries: Mutex<HashMap<QueryKey, Arc<str>>>,
}

impl QueryCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &QueryKey) -> Option<Arc<str>> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    pub fn insert(&self, key: QueryKey, body: Arc<str>) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key, body);
    }

    /// Drop one entry so the next request refetches it.
    pub fn invalidate(&self, key: &QueryKey) -> bool {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(key)
            .is_some()
    }

    pub fn clear(&self) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    pub fn len(&self) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
