use crate::model::collection::CollectionStatus;

/// A repository saved inside a collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoItem {
    pub rid: String,
    pub name: String,
    pub full_name: String,
    /// Markdown summary written by the site editors.
    pub description: String,
    pub primary_lang: Option<String>,
    pub stars: u64,
    pub github_url: String,
}

/// Header data for a single collection's drill-down.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionSummary {
    pub name: String,
    pub status: CollectionStatus,
}

/// One page of a collection's members.
///
/// Pages are 1-based. `page_total` is the number of pages the store reports;
/// clipping out-of-range requests is the store's job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberPage {
    pub collection: CollectionSummary,
    pub items: Vec<RepoItem>,
    pub page: u32,
    pub total: u32,
    pub page_total: u32,
}

impl MemberPage {
    #[must_use]
    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    #[must_use]
    pub fn has_next(&self) -> bool {
        self.page < self.page_total
    }
}
