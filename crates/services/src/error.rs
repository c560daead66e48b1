//! Shared error types for the services crate.

use thiserror::Error;

use hub_core::model::{CollectionError, ShareLinkError};
use storage::repository::StorageError;

/// Errors emitted by `CollectionService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CollectionServiceError {
    #[error(transparent)]
    Collection(#[from] CollectionError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl CollectionServiceError {
    /// Explanation the server attached to a refused mutation, if any.
    #[must_use]
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Storage(err) => err.server_message(),
            Self::Collection(_) => None,
        }
    }

    /// True for input the user can correct in the form.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Collection(_))
    }
}

/// Errors emitted by `ShareService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ShareError {
    #[error("only public collections can be shared")]
    NotPublic,
    #[error(transparent)]
    Link(#[from] ShareLinkError),
    #[error("clipboard unavailable: {0}")]
    Clipboard(String),
}
