use hub_core::model::{
    Collection, CollectionId, CollectionListing, CollectionStatus, UserId, Visibility,
};

use super::time_fmt::format_created_at;

pub const EMPTY_DESCRIPTION: &str = "No description yet";

/// Route of a collection's drill-down page.
#[must_use]
pub fn collection_path(owner: &UserId, fid: &CollectionId) -> String {
    format!("/user/{owner}/favorite/?fid={fid}")
}

#[must_use]
pub fn status_label(status: CollectionStatus) -> &'static str {
    match status {
        CollectionStatus::Private => "Private",
        CollectionStatus::PendingReview => "In review",
        CollectionStatus::Public => "Public",
    }
}

/// Render-ready data for one collection row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CollectionRowVm {
    pub id: CollectionId,
    pub name: String,
    pub status_label: &'static str,
    pub locked: bool,
    pub shareable: bool,
    pub description: String,
    pub created_at_str: String,
    pub total_label: String,
    pub href: String,
    pub collection: Collection,
}

impl CollectionRowVm {
    #[must_use]
    pub fn from_collection(owner: &UserId, collection: &Collection) -> Self {
        let total = collection.total();
        let total_label = if total == 1 {
            "1 project".to_owned()
        } else {
            format!("{total} projects")
        };
        Self {
            id: collection.id().clone(),
            name: collection.name().to_owned(),
            status_label: status_label(collection.status()),
            locked: collection.status() == CollectionStatus::Private,
            shareable: collection.status().is_public(),
            description: collection
                .description()
                .unwrap_or(EMPTY_DESCRIPTION)
                .to_owned(),
            created_at_str: format_created_at(collection.created_at()),
            total_label,
            href: collection_path(owner, collection.id()),
            collection: collection.clone(),
        }
    }
}

/// What the list page shows once the listing has loaded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CollectionListVm {
    /// The owner's collections are not visible to this viewer.
    Hidden,
    /// Loaded but empty. `can_create` is set for the signed-in owner.
    Empty { can_create: bool },
    Rows {
        owner_controls: bool,
        rows: Vec<CollectionRowVm>,
    },
}

impl CollectionListVm {
    /// Owner controls need both a signed-in viewer and the server's
    /// `in_person` flag.
    #[must_use]
    pub fn build(
        owner: &UserId,
        listing: &Visibility<CollectionListing>,
        viewer_logged_in: bool,
    ) -> Self {
        let Visibility::Visible(listing) = listing else {
            return Self::Hidden;
        };
        let owner_controls = viewer_logged_in && listing.in_person();
        if listing.is_empty() {
            return Self::Empty {
                can_create: owner_controls,
            };
        }
        Self::Rows {
            owner_controls,
            rows: listing
                .collections()
                .iter()
                .map(|collection| CollectionRowVm::from_collection(owner, collection))
                .collect(),
        }
    }

    #[must_use]
    pub fn owner_controls(&self) -> bool {
        match self {
            Self::Hidden => false,
            Self::Empty { can_create } => *can_create,
            Self::Rows { owner_controls, .. } => *owner_controls,
        }
    }
}
