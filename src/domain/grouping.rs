use std::collections::HashMap;

use crate::domain::novels::NovelRecord;

/// Novel records bucketed by list name.
///
/// `names` keeps the order in which each list name was first seen, so the tab
/// strip matches the upstream ordering rather than an alphabetical one. Every
/// input record lands in exactly one bucket, and buckets keep input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grouping<'a> {
    pub names: Vec<String>,
    pub buckets: HashMap<String, Vec<&'a NovelRecord>>,
}

pub fn group(records: &[NovelRecord]) -> Grouping<'_> {
    let mut grouping = Grouping::default();

    for record in records {
        match grouping.buckets.get_mut(&record.list_name) {
            Some(bucket) => bucket.push(record),
            None => {
                grouping.names.push(record.list_name.clone());
                grouping
                    .buckets
                    .insert(record.list_name.clone(), vec![record]);
            }
        }
    }

    grouping
}

impl<'a> Grouping<'a> {
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// The tab selected when the user has not picked one.
    pub fn default_tab(&self) -> Option<&str> {
        self.names.first().map(String::as_str)
    }

    pub fn bucket(&self, name: &str) -> &[&'a NovelRecord] {
        self.buckets.get(name).map(Vec::as_slice).unwrap_or_default()
    }

    /// Members of `name` with every `in_list` entry ahead of the rest.
    ///
    /// Stable partition: both halves keep their relative input order.
    pub fn in_list_first(&self, name: &str) -> Vec<&'a NovelRecord> {
        let (mut listed, unlisted): (Vec<_>, Vec<_>) =
            self.bucket(name).iter().copied().partition(|r| r.in_list);
        listed.extend(unlisted);
        listed
    }
}
