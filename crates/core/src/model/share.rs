use thiserror::Error;
use url::Url;

use crate::model::ids::{CollectionId, UserId};

pub const DEFAULT_SITE_URL: &str = "https://hellogithub.com";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ShareLinkError {
    #[error("invalid site url: {0}")]
    InvalidSiteUrl(String),
}

/// Public site location used to build shareable links.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    base: Url,
}

impl SiteConfig {
    /// # Errors
    ///
    /// Returns `ShareLinkError::InvalidSiteUrl` unless `raw` is an absolute
    /// http(s) url.
    pub fn new(raw: &str) -> Result<Self, ShareLinkError> {
        let base =
            Url::parse(raw.trim()).map_err(|e| ShareLinkError::InvalidSiteUrl(e.to_string()))?;
        if !matches!(base.scheme(), "http" | "https") || base.cannot_be_a_base() {
            return Err(ShareLinkError::InvalidSiteUrl(raw.to_owned()));
        }
        Ok(Self { base })
    }

    #[must_use]
    pub fn base(&self) -> &Url {
        &self.base
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base: Url::parse(DEFAULT_SITE_URL).expect("default site url should be valid"),
        }
    }
}

/// A canonical link to one of a user's collections, plus the text copied when
/// sharing it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareLink {
    url: Url,
    text: String,
}

impl ShareLink {
    /// Build `<site>/user/<owner>/favorite/?fid=<fid>`.
    ///
    /// # Errors
    ///
    /// Returns `ShareLinkError::InvalidSiteUrl` if the site url cannot carry a path.
    pub fn new(
        site: &SiteConfig,
        owner: &UserId,
        collection: &CollectionId,
        name: &str,
    ) -> Result<Self, ShareLinkError> {
        let mut url = site.base.clone();
        url.set_query(None);
        url.set_fragment(None);
        url.path_segments_mut()
            .map_err(|()| ShareLinkError::InvalidSiteUrl(site.base.to_string()))?
            .pop_if_empty()
            .extend(["user", owner.as_str(), "favorite", ""]);
        url.query_pairs_mut().append_pair("fid", collection.as_str());

        let text = format!("Collection {name}\nOpen for details: {url}");
        Ok(Self { url, text })
    }

    #[must_use]
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Clipboard payload: the collection name followed by the link.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}
