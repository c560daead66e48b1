use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::ids::CollectionId;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CollectionError {
    #[error("collection name cannot be empty")]
    EmptyName,

    #[error("collection name must be at most 32 characters")]
    NameTooLong,

    #[error("collection description must be at most 200 characters")]
    DescriptionTooLong,

    #[error("unknown collection status code {0}")]
    UnknownStatus(u8),

    #[error("status \"{0}\" is assigned by the server and cannot be chosen")]
    StatusNotSettable(CollectionStatus),
}

pub const NAME_MAX_CHARS: usize = 32;
pub const DESCRIPTION_MAX_CHARS: usize = 200;

//
// ─── STATUS ────────────────────────────────────────────────────────────────────
//

/// Visibility status of a collection, as encoded by the remote API (0/1/2).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum CollectionStatus {
    Private,
    PendingReview,
    Public,
}

impl CollectionStatus {
    /// Decode the wire status code.
    ///
    /// # Errors
    ///
    /// Returns `CollectionError::UnknownStatus` for codes outside 0..=2.
    pub fn from_code(code: u8) -> Result<Self, CollectionError> {
        match code {
            0 => Ok(Self::Private),
            1 => Ok(Self::PendingReview),
            2 => Ok(Self::Public),
            other => Err(CollectionError::UnknownStatus(other)),
        }
    }

    #[must_use]
    pub fn code(self) -> u8 {
        match self {
            Self::Private => 0,
            Self::PendingReview => 1,
            Self::Public => 2,
        }
    }

    /// Statuses an owner may request when creating or editing.
    #[must_use]
    pub fn owner_settable(self) -> bool {
        matches!(self, Self::Private | Self::Public)
    }

    #[must_use]
    pub fn is_public(self) -> bool {
        self == Self::Public
    }
}

impl TryFrom<u8> for CollectionStatus {
    type Error = CollectionError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::from_code(code)
    }
}

impl From<CollectionStatus> for u8 {
    fn from(status: CollectionStatus) -> Self {
        status.code()
    }
}

impl std::fmt::Display for CollectionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Private => "private",
            Self::PendingReview => "pending review",
            Self::Public => "public",
        };
        f.write_str(label)
    }
}

//
// ─── COLLECTION ────────────────────────────────────────────────────────────────
//

/// A user-curated, named set of saved repositories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collection {
    id: CollectionId,
    name: String,
    description: Option<String>,
    status: CollectionStatus,
    created_at: String,
    total: u32,
}

impl Collection {
    /// Build a collection from server data.
    ///
    /// Blank descriptions are normalised to `None`.
    ///
    /// # Errors
    ///
    /// Returns `CollectionError::EmptyName` when the name is blank.
    pub fn new(
        id: CollectionId,
        name: impl Into<String>,
        description: Option<String>,
        status: CollectionStatus,
        created_at: impl Into<String>,
        total: u32,
    ) -> Result<Self, CollectionError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(CollectionError::EmptyName);
        }
        Ok(Self {
            id,
            name,
            description: normalize_description(description),
            status,
            created_at: created_at.into(),
            total,
        })
    }

    #[must_use]
    pub fn id(&self) -> &CollectionId {
        &self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    #[must_use]
    pub fn status(&self) -> CollectionStatus {
        self.status
    }

    /// Creation timestamp exactly as delivered by the server.
    #[must_use]
    pub fn created_at(&self) -> &str {
        &self.created_at
    }

    /// Number of member items.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.total
    }

    /// The owner-editable fields of this collection, used to seed an edit form.
    ///
    /// A pending-review collection is seeded as private, since that status
    /// cannot be requested by the owner.
    #[must_use]
    pub fn fields(&self) -> CollectionFields {
        let status = if self.status.owner_settable() {
            self.status
        } else {
            CollectionStatus::Private
        };
        CollectionFields {
            name: self.name.clone(),
            description: self.description.clone(),
            status,
        }
    }
}

fn normalize_description(description: Option<String>) -> Option<String> {
    description
        .map(|desc| desc.trim().to_owned())
        .filter(|desc| !desc.is_empty())
}

//
// ─── FIELDS ────────────────────────────────────────────────────────────────────
//

/// Validated owner-settable fields for create/edit requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionFields {
    name: String,
    description: Option<String>,
    status: CollectionStatus,
}

impl CollectionFields {
    /// # Errors
    ///
    /// Returns `CollectionError` when the name is blank or too long, the
    /// description is too long, or the status is server-assigned.
    pub fn new(
        name: &str,
        description: &str,
        status: CollectionStatus,
    ) -> Result<Self, CollectionError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(CollectionError::EmptyName);
        }
        if name.chars().count() > NAME_MAX_CHARS {
            return Err(CollectionError::NameTooLong);
        }
        let description = description.trim();
        if description.chars().count() > DESCRIPTION_MAX_CHARS {
            return Err(CollectionError::DescriptionTooLong);
        }
        if !status.owner_settable() {
            return Err(CollectionError::StatusNotSettable(status));
        }
        Ok(Self {
            name: name.to_owned(),
            description: normalize_description(Some(description.to_owned())),
            status,
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    #[must_use]
    pub fn status(&self) -> CollectionStatus {
        self.status
    }
}

//
// ─── LISTING ───────────────────────────────────────────────────────────────────
//

/// Outcome of a read against the remote store: either the data, or a signal
/// that the resource is not visible to the current viewer.
///
/// `Hidden` is distinct from an empty result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Visibility<T> {
    Visible(T),
    Hidden,
}

impl<T> Visibility<T> {
    #[must_use]
    pub fn visible(self) -> Option<T> {
        match self {
            Self::Visible(value) => Some(value),
            Self::Hidden => None,
        }
    }

    #[must_use]
    pub fn is_hidden(&self) -> bool {
        matches!(self, Self::Hidden)
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Visibility<U> {
        match self {
            Self::Visible(value) => Visibility::Visible(f(value)),
            Self::Hidden => Visibility::Hidden,
        }
    }
}

/// A user's collections in server order, plus whether the viewer owns them.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CollectionListing {
    in_person: bool,
    collections: Vec<Collection>,
}

impl CollectionListing {
    #[must_use]
    pub fn new(in_person: bool, collections: Vec<Collection>) -> Self {
        Self {
            in_person,
            collections,
        }
    }

    /// True when the viewer is the owner of this list.
    #[must_use]
    pub fn in_person(&self) -> bool {
        self.in_person
    }

    #[must_use]
    pub fn collections(&self) -> &[Collection] {
        &self.collections
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.collections.is_empty()
    }

    #[must_use]
    pub fn find(&self, id: &CollectionId) -> Option<&Collection> {
        self.collections.iter().find(|c| c.id() == id)
    }
}
