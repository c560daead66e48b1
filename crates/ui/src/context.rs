use std::sync::Arc;

use hub_core::model::UserId;
use services::{CollectionService, ShareService};

/// What the composition root hands to the UI.
pub trait UiApp: Send + Sync {
    fn collection_service(&self) -> Arc<CollectionService>;
    fn share_service(&self) -> Arc<ShareService>;

    /// The signed-in user, if any.
    fn viewer(&self) -> Option<UserId>;

    /// Whose collections the home page lists.
    fn default_owner(&self) -> UserId;

    /// Collection to open on launch, if one was requested.
    fn initial_collection(&self) -> Option<String> {
        None
    }
}

#[derive(Clone)]
pub struct AppContext {
    collections: Arc<CollectionService>,
    share: Arc<ShareService>,
    viewer: Option<UserId>,
    default_owner: UserId,
    initial_collection: Option<String>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            collections: app.collection_service(),
            share: app.share_service(),
            viewer: app.viewer(),
            default_owner: app.default_owner(),
            initial_collection: app.initial_collection(),
        }
    }

    #[must_use]
    pub fn collection_service(&self) -> Arc<CollectionService> {
        Arc::clone(&self.collections)
    }

    #[must_use]
    pub fn share_service(&self) -> Arc<ShareService> {
        Arc::clone(&self.share)
    }

    #[must_use]
    pub fn viewer(&self) -> Option<&UserId> {
        self.viewer.as_ref()
    }

    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        self.viewer.is_some()
    }

    #[must_use]
    pub fn default_owner(&self) -> &UserId {
        &self.default_owner
    }

    #[must_use]
    pub fn initial_collection(&self) -> Option<&str> {
        self.initial_collection.as_deref()
    }
}

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
