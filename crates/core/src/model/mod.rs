mod collection;
mod ids;
mod member;
mod share;

pub use collection::{
    Collection, CollectionError, CollectionFields, CollectionListing, CollectionStatus,
    Visibility, DESCRIPTION_MAX_CHARS, NAME_MAX_CHARS,
};
pub use ids::{CollectionId, ParseIdError, UserId};
pub use member::{CollectionSummary, MemberPage, RepoItem};
pub use share::{ShareLink, ShareLinkError, SiteConfig};
