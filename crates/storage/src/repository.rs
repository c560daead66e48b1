use async_trait::async_trait;
use hub_core::Clock;
use hub_core::model::{
    Collection, CollectionFields, CollectionId, CollectionListing, CollectionSummary, MemberPage,
    RepoItem, UserId, Visibility,
};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// Members returned per page by the in-memory store.
pub const MEMBER_PAGE_SIZE: usize = 10;

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("not found")]
    NotFound,

    /// The server answered `success: false` to a mutation.
    #[error("rejected by server: {}", .message.as_deref().unwrap_or("no reason given"))]
    Rejected { message: Option<String> },

    #[error("connection error: {0}")]
    Connection(String),

    #[error("unexpected http status {0}")]
    HttpStatus(u16),

    #[error("serialization error: {0}")]
    Serialization(String),
}

impl StorageError {
    /// Server-provided explanation for a rejected mutation, if any.
    #[must_use]
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Rejected { message } => message.as_deref().filter(|m| !m.trim().is_empty()),
            _ => None,
        }
    }
}

/// Contract of the remote collection store.
///
/// Reads report `Visibility::Hidden` when the server says the resource is not
/// visible to the caller. Mutations never return data; callers re-read.
#[async_trait]
pub trait CollectionRepository: Send + Sync {
    /// Fetch an owner's collections in server order.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` on transport or decoding failures.
    async fn list_collections(
        &self,
        owner: &UserId,
    ) -> Result<Visibility<CollectionListing>, StorageError>;

    /// Fetch one page (1-based) of a collection's members.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` on transport or decoding failures.
    async fn list_members(
        &self,
        owner: &UserId,
        collection: &CollectionId,
        page: u32,
    ) -> Result<Visibility<MemberPage>, StorageError>;

    /// # Errors
    ///
    /// Returns `StorageError::Rejected` when the server refuses the delete.
    async fn delete_collection(&self, collection: &CollectionId) -> Result<(), StorageError>;

    /// # Errors
    ///
    /// Returns `StorageError::Rejected` when the server refuses the edit.
    async fn edit_collection(
        &self,
        collection: &CollectionId,
        fields: &CollectionFields,
    ) -> Result<(), StorageError>;

    /// # Errors
    ///
    /// Returns `StorageError::Rejected` when the server refuses the creation.
    async fn create_collection(&self, fields: &CollectionFields) -> Result<(), StorageError>;
}

#[derive(Debug, Clone)]
struct StoredCollection {
    collection: Collection,
    members: Vec<RepoItem>,
}

#[derive(Debug, Default)]
struct Shelves {
    viewer: Option<UserId>,
    owners: HashMap<UserId, Vec<StoredCollection>>,
    next_id: u64,
}

impl Shelves {
    fn owner_of(&self, id: &CollectionId) -> Option<UserId> {
        self.owners.iter().find_map(|(owner, list)| {
            list.iter()
                .any(|stored| stored.collection.id() == id)
                .then(|| owner.clone())
        })
    }

    fn require_owner(&self, id: &CollectionId) -> Result<UserId, StorageError> {
        let owner = self.owner_of(id).ok_or(StorageError::Rejected {
            message: Some("collection does not exist".into()),
        })?;
        if self.viewer.as_ref() != Some(&owner) {
            return Err(StorageError::Rejected {
                message: Some("permission denied".into()),
            });
        }
        Ok(owner)
    }

    fn fresh_id(&mut self) -> CollectionId {
        loop {
            self.next_id += 1;
            let candidate = CollectionId::new(self.next_id.to_string());
            if self.owner_of(&candidate).is_none() {
                return candidate;
            }
        }
    }
}

/// In-memory collection store for tests and offline runs.
///
/// Mirrors the server's visibility rules: owners see every collection, other
/// viewers only public ones, and unknown owners are hidden.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    shelves: Arc<Mutex<Shelves>>,
    clock: Clock,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_clock(clock: Clock) -> Self {
        Self {
            shelves: Arc::default(),
            clock,
        }
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Shelves>, StorageError> {
        self.shelves
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))
    }

    /// Set the logged-in viewer used for ownership and visibility checks.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Connection` if the store lock is poisoned.
    pub fn set_viewer(&self, viewer: Option<UserId>) -> Result<(), StorageError> {
        self.lock()?.viewer = viewer;
        Ok(())
    }

    /// Register an owner with an empty shelf so their listing is visible.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Connection` if the store lock is poisoned.
    pub fn ensure_owner(&self, owner: &UserId) -> Result<(), StorageError> {
        self.lock()?.owners.entry(owner.clone()).or_default();
        Ok(())
    }

    /// Append a collection to an owner's list.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Rejected` if the id already exists.
    pub fn insert_collection(
        &self,
        owner: &UserId,
        collection: Collection,
    ) -> Result<(), StorageError> {
        let mut shelves = self.lock()?;
        if shelves.owner_of(collection.id()).is_some() {
            return Err(StorageError::Rejected {
                message: Some("collection already exists".into()),
            });
        }
        shelves
            .owners
            .entry(owner.clone())
            .or_default()
            .push(StoredCollection {
                collection,
                members: Vec::new(),
            });
        Ok(())
    }

    /// Replace the members of a collection.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::NotFound` if the collection is unknown.
    pub fn set_members(
        &self,
        collection: &CollectionId,
        members: Vec<RepoItem>,
    ) -> Result<(), StorageError> {
        let mut shelves = self.lock()?;
        let stored = shelves
            .owners
            .values_mut()
            .flat_map(|list| list.iter_mut())
            .find(|stored| stored.collection.id() == collection)
            .ok_or(StorageError::NotFound)?;
        let total = u32::try_from(members.len()).unwrap_or(u32::MAX);
        stored.collection = rebuild(&stored.collection, None, total);
        stored.members = members;
        Ok(())
    }

    /// Ids of an owner's collections in stored order.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Connection` if the store lock is poisoned.
    pub fn collection_ids(&self, owner: &UserId) -> Result<Vec<CollectionId>, StorageError> {
        let shelves = self.lock()?;
        Ok(shelves
            .owners
            .get(owner)
            .map(|list| list.iter().map(|s| s.collection.id().clone()).collect())
            .unwrap_or_default())
    }
}

fn rebuild(current: &Collection, fields: Option<&CollectionFields>, total: u32) -> Collection {
    let (name, description, status) = match fields {
        Some(fields) => (
            fields.name().to_owned(),
            fields.description().map(str::to_owned),
            fields.status(),
        ),
        None => (
            current.name().to_owned(),
            current.description().map(str::to_owned),
            current.status(),
        ),
    };
    Collection::new(
        current.id().clone(),
        name,
        description,
        status,
        current.created_at(),
        total,
    )
    .unwrap_or_else(|_| current.clone())
}

#[async_trait]
impl CollectionRepository for InMemoryRepository {
    async fn list_collections(
        &self,
        owner: &UserId,
    ) -> Result<Visibility<CollectionListing>, StorageError> {
        let shelves = self.lock()?;
        let Some(list) = shelves.owners.get(owner) else {
            return Ok(Visibility::Hidden);
        };
        let in_person = shelves.viewer.as_ref() == Some(owner);
        let collections = list
            .iter()
            .map(|stored| &stored.collection)
            .filter(|c| in_person || c.status().is_public())
            .cloned()
            .collect();
        Ok(Visibility::Visible(CollectionListing::new(in_person, collections)))
    }

    async fn list_members(
        &self,
        owner: &UserId,
        collection: &CollectionId,
        page: u32,
    ) -> Result<Visibility<MemberPage>, StorageError> {
        let shelves = self.lock()?;
        let in_person = shelves.viewer.as_ref() == Some(owner);
        let Some(stored) = shelves
            .owners
            .get(owner)
            .and_then(|list| list.iter().find(|s| s.collection.id() == collection))
        else {
            return Ok(Visibility::Hidden);
        };
        if !in_person && !stored.collection.status().is_public() {
            return Ok(Visibility::Hidden);
        }

        let page_total = stored.members.len().div_ceil(MEMBER_PAGE_SIZE);
        let page = (page.max(1) as usize).min(page_total.max(1));
        let items = stored
            .members
            .iter()
            .skip((page - 1) * MEMBER_PAGE_SIZE)
            .take(MEMBER_PAGE_SIZE)
            .cloned()
            .collect();

        Ok(Visibility::Visible(MemberPage {
            collection: CollectionSummary {
                name: stored.collection.name().to_owned(),
                status: stored.collection.status(),
            },
            items,
            page: u32::try_from(page).unwrap_or(u32::MAX),
            total: u32::try_from(stored.members.len()).unwrap_or(u32::MAX),
            page_total: u32::try_from(page_total).unwrap_or(u32::MAX),
        }))
    }

    async fn delete_collection(&self, collection: &CollectionId) -> Result<(), StorageError> {
        let mut shelves = self.lock()?;
        let owner = shelves.require_owner(collection)?;
        if let Some(list) = shelves.owners.get_mut(&owner) {
            list.retain(|stored| stored.collection.id() != collection);
        }
        Ok(())
    }

    async fn edit_collection(
        &self,
        collection: &CollectionId,
        fields: &CollectionFields,
    ) -> Result<(), StorageError> {
        let mut shelves = self.lock()?;
        let owner = shelves.require_owner(collection)?;
        let stored = shelves
            .owners
            .get_mut(&owner)
            .and_then(|list| list.iter_mut().find(|s| s.collection.id() == collection))
            .ok_or(StorageError::NotFound)?;
        stored.collection = rebuild(&stored.collection, Some(fields), stored.collection.total());
        Ok(())
    }

    async fn create_collection(&self, fields: &CollectionFields) -> Result<(), StorageError> {
        let mut shelves = self.lock()?;
        let viewer = shelves.viewer.clone().ok_or(StorageError::Rejected {
            message: Some("login required".into()),
        })?;
        let id = shelves.fresh_id();
        let collection = Collection::new(
            id,
            fields.name(),
            fields.description().map(str::to_owned),
            fields.status(),
            self.clock.server_stamp(),
            0,
        )
        .map_err(|e| StorageError::Rejected {
            message: Some(e.to_string()),
        })?;
        shelves
            .owners
            .entry(viewer)
            .or_default()
            .push(StoredCollection {
                collection,
                members: Vec::new(),
            });
        Ok(())
    }
}

/// Aggregates the collection store behind a trait object for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub collections: Arc<dyn CollectionRepository>,
}

impl Storage {
    #[must_use]
    pub fn http(config: crate::http::ApiConfig) -> Self {
        Self {
            collections: Arc::new(crate::http::HttpRepository::new(config)),
        }
    }
}
