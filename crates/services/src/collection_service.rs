use std::sync::Arc;

use hub_core::model::{
    CollectionFields, CollectionId, CollectionListing, CollectionStatus, MemberPage, UserId,
    Visibility,
};
use storage::repository::CollectionRepository;

use crate::error::CollectionServiceError;

/// Reads and mutates a user's collections through the remote store.
///
/// Mutations only report success or failure. Callers refresh their view
/// from `list` once a mutation has succeeded.
#[derive(Clone)]
pub struct CollectionService {
    collections: Arc<dyn CollectionRepository>,
}

impl CollectionService {
    #[must_use]
    pub fn new(collections: Arc<dyn CollectionRepository>) -> Self {
        Self { collections }
    }

    /// Fetch the collections owned by `owner`, in server order.
    ///
    /// # Errors
    ///
    /// Returns `CollectionServiceError::Storage` if the store cannot be reached.
    pub async fn list(
        &self,
        owner: &UserId,
    ) -> Result<Visibility<CollectionListing>, CollectionServiceError> {
        Ok(self.collections.list_collections(owner).await?)
    }

    /// Fetch one page of a collection's members. Page numbers start at 1.
    ///
    /// # Errors
    ///
    /// Returns `CollectionServiceError::Storage` if the store cannot be reached.
    pub async fn members(
        &self,
        owner: &UserId,
        collection: &CollectionId,
        page: u32,
    ) -> Result<Visibility<MemberPage>, CollectionServiceError> {
        Ok(self
            .collections
            .list_members(owner, collection, page.max(1))
            .await?)
    }

    /// # Errors
    ///
    /// Returns `CollectionServiceError::Storage` if the store refuses or fails.
    pub async fn delete(&self, collection: &CollectionId) -> Result<(), CollectionServiceError> {
        match self.collections.delete_collection(collection).await {
            Ok(()) => {
                tracing::info!(fid = %collection, "collection deleted");
                Ok(())
            }
            Err(err) => {
                tracing::warn!(fid = %collection, error = %err, "delete refused");
                Err(err.into())
            }
        }
    }

    /// Validate and submit the owner-editable fields of a collection.
    ///
    /// # Errors
    ///
    /// Returns `CollectionServiceError::Collection` for invalid input, before
    /// anything is sent.
    /// Returns `CollectionServiceError::Storage` if the store refuses or fails.
    pub async fn edit(
        &self,
        collection: &CollectionId,
        name: &str,
        description: &str,
        status: CollectionStatus,
    ) -> Result<(), CollectionServiceError> {
        let fields = CollectionFields::new(name, description, status)?;
        match self.collections.edit_collection(collection, &fields).await {
            Ok(()) => {
                tracing::info!(fid = %collection, "collection updated");
                Ok(())
            }
            Err(err) => {
                tracing::warn!(fid = %collection, error = %err, "edit refused");
                Err(err.into())
            }
        }
    }

    /// Create a new collection for the logged-in viewer.
    ///
    /// # Errors
    ///
    /// Returns `CollectionServiceError::Collection` for invalid input.
    /// Returns `CollectionServiceError::Storage` if the store refuses or fails.
    pub async fn create(
        &self,
        name: &str,
        description: &str,
        status: CollectionStatus,
    ) -> Result<(), CollectionServiceError> {
        let fields = CollectionFields::new(name, description, status)?;
        match self.collections.create_collection(&fields).await {
            Ok(()) => {
                tracing::info!(name = fields.name(), "collection created");
                Ok(())
            }
            Err(err) => {
                tracing::warn!(error = %err, "create refused");
                Err(err.into())
            }
        }
    }
}
