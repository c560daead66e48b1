use std::sync::{Arc, Mutex};

use hub_core::model::{Collection, CollectionId, ShareLink, SiteConfig, UserId};

use crate::error::ShareError;

/// Destination for copied share text.
pub trait Clipboard: Send + Sync {
    /// # Errors
    ///
    /// Returns `ShareError::Clipboard` when the text cannot be written.
    fn write_text(&self, text: &str) -> Result<(), ShareError>;
}

/// The desktop clipboard, opened per write.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

impl Clipboard for SystemClipboard {
    fn write_text(&self, text: &str) -> Result<(), ShareError> {
        arboard::Clipboard::new()
            .and_then(|mut clipboard| clipboard.set_text(text.to_owned()))
            .map_err(|e| ShareError::Clipboard(e.to_string()))
    }
}

/// Clipboard that keeps the last write in memory.
#[derive(Debug, Default, Clone)]
pub struct MemoryClipboard {
    contents: Arc<Mutex<Option<String>>>,
    unavailable: bool,
}

impl MemoryClipboard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A clipboard whose every write fails.
    #[must_use]
    pub fn unavailable() -> Self {
        Self {
            contents: Arc::default(),
            unavailable: true,
        }
    }

    #[must_use]
    pub fn contents(&self) -> Option<String> {
        self.contents.lock().ok().and_then(|guard| guard.clone())
    }
}

impl Clipboard for MemoryClipboard {
    fn write_text(&self, text: &str) -> Result<(), ShareError> {
        if self.unavailable {
            return Err(ShareError::Clipboard("clipboard is not available".into()));
        }
        let mut guard = self
            .contents
            .lock()
            .map_err(|e| ShareError::Clipboard(e.to_string()))?;
        *guard = Some(text.to_owned());
        Ok(())
    }
}

/// Builds canonical collection links and copies them for sharing.
#[derive(Clone)]
pub struct ShareService {
    site: SiteConfig,
    clipboard: Arc<dyn Clipboard>,
}

impl ShareService {
    #[must_use]
    pub fn new(site: SiteConfig, clipboard: Arc<dyn Clipboard>) -> Self {
        Self { site, clipboard }
    }

    #[must_use]
    pub fn site(&self) -> &SiteConfig {
        &self.site
    }

    /// Copy the share text of a public collection to the clipboard.
    ///
    /// # Errors
    ///
    /// Returns `ShareError::NotPublic` for private or pending collections.
    /// Returns `ShareError::Clipboard` when the copy fails.
    pub fn share(&self, owner: &UserId, collection: &Collection) -> Result<ShareLink, ShareError> {
        if !collection.status().is_public() {
            return Err(ShareError::NotPublic);
        }
        let link = ShareLink::new(&self.site, owner, collection.id(), collection.name())?;
        self.clipboard.write_text(link.text())?;
        tracing::debug!(fid = %collection.id(), url = %link.url(), "share link copied");
        Ok(link)
    }

    /// Same as [`ShareService::share`] for the drill-down header, where only
    /// the id and name are at hand.
    ///
    /// # Errors
    ///
    /// Returns `ShareError::Clipboard` when the copy fails.
    pub fn share_by_id(
        &self,
        owner: &UserId,
        collection: &CollectionId,
        name: &str,
    ) -> Result<ShareLink, ShareError> {
        let link = ShareLink::new(&self.site, owner, collection, name)?;
        self.clipboard.write_text(link.text())?;
        tracing::debug!(fid = %collection, url = %link.url(), "share link copied");
        Ok(link)
    }
}
