use std::env;

use async_trait::async_trait;
use hub_core::model::{
    Collection, CollectionError, CollectionFields, CollectionId, CollectionListing,
    CollectionStatus, CollectionSummary, MemberPage, RepoItem, UserId, Visibility,
};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::repository::{CollectionRepository, StorageError};

/// Location and credentials of the remote API.
#[derive(Clone, Debug)]
pub struct ApiConfig {
    pub base_url: String,
    pub token: Option<String>,
}

impl ApiConfig {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: None,
        }
    }

    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Read `HUB_API_URL` (required) and `HUB_API_TOKEN` (optional).
    #[must_use]
    pub fn from_env() -> Option<Self> {
        let base_url = env::var("HUB_API_URL").ok()?;
        if base_url.trim().is_empty() {
            return None;
        }
        let token = env::var("HUB_API_TOKEN")
            .ok()
            .filter(|token| !token.trim().is_empty());
        Some(Self { base_url, token })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path)
    }
}

/// Collection store backed by the site's JSON API.
#[derive(Clone)]
pub struct HttpRepository {
    client: Client,
    config: ApiConfig,
}

impl HttpRepository {
    #[must_use]
    pub fn new(config: ApiConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, StorageError> {
        let request = match &self.config.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        };
        let response = request
            .send()
            .await
            .map_err(|e| StorageError::Connection(e.to_string()))?;

        let status = response.status();
        tracing::debug!(url = %response.url(), %status, "collection api response");
        if !status.is_success() {
            return Err(StorageError::HttpStatus(status.as_u16()));
        }

        response.json::<T>().await.map_err(|e| {
            if e.is_decode() {
                StorageError::Serialization(e.to_string())
            } else {
                StorageError::Connection(e.to_string())
            }
        })
    }

    async fn mutate(&self, request: RequestBuilder) -> Result<(), StorageError> {
        let body: MutationResponse = self.send(request).await?;
        if body.success {
            Ok(())
        } else {
            Err(StorageError::Rejected {
                message: body.message,
            })
        }
    }
}

#[async_trait]
impl CollectionRepository for HttpRepository {
    async fn list_collections(
        &self,
        owner: &UserId,
    ) -> Result<Visibility<CollectionListing>, StorageError> {
        let url = self.config.endpoint(&format!("user/{owner}/favorite/"));
        let body: ListResponse = self.send(self.client.get(url)).await?;
        if !body.success {
            return Ok(Visibility::Hidden);
        }
        let collections = body
            .data
            .into_iter()
            .filter_map(|wire| {
                let fid = wire.fid.clone();
                wire.into_collection()
                    .inspect_err(|err| {
                        tracing::warn!(%owner, %fid, error = %err, "skipping malformed collection");
                    })
                    .ok()
            })
            .collect();
        Ok(Visibility::Visible(CollectionListing::new(
            body.in_person,
            collections,
        )))
    }

    async fn list_members(
        &self,
        owner: &UserId,
        collection: &CollectionId,
        page: u32,
    ) -> Result<Visibility<MemberPage>, StorageError> {
        let url = self
            .config
            .endpoint(&format!("user/{owner}/favorite/{collection}/"));
        let request = self.client.get(url).query(&[("page", page)]);
        let body: MembersResponse = self.send(request).await?;
        if !body.success {
            return Ok(Visibility::Hidden);
        }
        let summary = body.favorite.ok_or_else(|| {
            StorageError::Serialization("member page without collection header".into())
        })?;
        Ok(Visibility::Visible(MemberPage {
            collection: CollectionSummary {
                name: summary.name,
                status: summary.status,
            },
            items: body.data.into_iter().map(RepoItem::from).collect(),
            page: body.page,
            total: body.total,
            page_total: body.page_total,
        }))
    }

    async fn delete_collection(&self, collection: &CollectionId) -> Result<(), StorageError> {
        let url = self.config.endpoint(&format!("favorite/{collection}/"));
        self.mutate(self.client.delete(url)).await
    }

    async fn edit_collection(
        &self,
        collection: &CollectionId,
        fields: &CollectionFields,
    ) -> Result<(), StorageError> {
        let url = self.config.endpoint(&format!("favorite/{collection}/"));
        self.mutate(self.client.patch(url).json(&FieldsBody::from(fields)))
            .await
    }

    async fn create_collection(&self, fields: &CollectionFields) -> Result<(), StorageError> {
        let url = self.config.endpoint("favorite/");
        self.mutate(self.client.post(url).json(&FieldsBody::from(fields)))
            .await
    }
}

//
// ─── WIRE TYPES ────────────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize)]
struct ListResponse {
    success: bool,
    #[serde(default)]
    in_person: bool,
    #[serde(default)]
    data: Vec<WireCollection>,
}

#[derive(Debug, Deserialize)]
struct WireCollection {
    fid: String,
    name: String,
    #[serde(default)]
    description: Option<String>,
    status: u8,
    #[serde(default)]
    created_at: String,
    #[serde(default)]
    total: u32,
}

impl WireCollection {
    fn into_collection(self) -> Result<Collection, CollectionError> {
        Collection::new(
            CollectionId::new(self.fid),
            self.name,
            self.description,
            CollectionStatus::from_code(self.status)?,
            self.created_at,
            self.total,
        )
    }
}

#[derive(Debug, Deserialize)]
struct MembersResponse {
    success: bool,
    #[serde(default)]
    favorite: Option<WireSummary>,
    #[serde(default)]
    data: Vec<WireRepo>,
    #[serde(default = "first_page")]
    page: u32,
    #[serde(default)]
    total: u32,
    #[serde(default)]
    page_total: u32,
}

fn first_page() -> u32 {
    1
}

#[derive(Debug, Deserialize)]
struct WireSummary {
    name: String,
    status: CollectionStatus,
}

#[derive(Debug, Deserialize)]
struct WireRepo {
    rid: String,
    name: String,
    #[serde(default)]
    full_name: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    primary_lang: Option<String>,
    #[serde(default)]
    stars: u64,
    #[serde(default)]
    github_url: String,
}

impl From<WireRepo> for RepoItem {
    fn from(wire: WireRepo) -> Self {
        Self {
            rid: wire.rid,
            name: wire.name,
            full_name: wire.full_name,
            description: wire.description,
            primary_lang: wire.primary_lang.filter(|lang| !lang.is_empty()),
            stars: wire.stars,
            github_url: wire.github_url,
        }
    }
}

#[derive(Debug, Deserialize)]
struct MutationResponse {
    success: bool,
    #[serde(default)]
    message: Option<String>,
}

#[derive(Debug, Serialize)]
struct FieldsBody<'a> {
    name: &'a str,
    description: &'a str,
    status: CollectionStatus,
}

impl<'a> From<&'a CollectionFields> for FieldsBody<'a> {
    fn from(fields: &'a CollectionFields) -> Self {
        Self {
            name: fields.name(),
            description: fields.description().unwrap_or_default(),
            status: fields.status(),
        }
    }
}
