use anyhow::{Context, anyhow};
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use typedex_protocol::{RawSpecies, RawType, RawVersionGroup, ResourceList, SpeciesListing};

use crate::config::CatalogConfig;
use crate::error::{CatalogError, ResourceKind, Result};
use crate::service::CatalogService;

const INDEX_LIMIT: u32 = 10000;

/// [`CatalogService`] backed by the PokeAPI REST endpoints
#[derive(Debug, Clone)]
pub struct HttpCatalog {
    http: reqwest::Client,
    config: CatalogConfig,
}

impl HttpCatalog {
    pub fn new(config: CatalogConfig) -> Self {
        Self::with_client(reqwest::Client::new(), config)
    }

    /// Use a preconfigured reqwest client (proxies, timeouts, ...)
    pub fn with_client(http: reqwest::Client, config: CatalogConfig) -> Self {
        Self { http, config }
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        kind: ResourceKind,
        name: &str,
    ) -> Result<T> {
        tracing::debug!(url, %kind, "Fetching catalog resource");

        let response = self
            .http
            .get(url)
            .send()
            .await
            .with_context(|| format!("Failed to request {}", url))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .with_context(|| format!("Failed to read response from {}", url))?;

        decode_response(status, &body, url, kind, name)
    }

    async fn get_index(&self, path: &str, kind: ResourceKind) -> Result<ResourceList> {
        let url = self.config.endpoint(&format!("{}?limit={}", path, INDEX_LIMIT));
        self.get_json(&url, kind, path).await
    }
}

/// Map a catalog response to a payload.
///
/// 404 and an empty body mean the resource does not exist. Any other
/// unsuccessful status or an unparseable body is an upstream failure.
fn decode_response<T: DeserializeOwned>(
    status: StatusCode,
    body: &str,
    url: &str,
    kind: ResourceKind,
    name: &str,
) -> Result<T> {
    if status == StatusCode::NOT_FOUND {
        return Err(CatalogError::not_found(kind, name));
    }
    if !status.is_success() {
        return Err(anyhow!("Catalog returned {} for {}", status, url).into());
    }
    if body.trim().is_empty() {
        return Err(CatalogError::not_found(kind, name));
    }

    let payload = serde_json::from_str(body)
        .with_context(|| format!("Failed to parse {} response from {}", kind, url))?;
    Ok(payload)
}

impl Default for HttpCatalog {
    fn default() -> Self {
        Self::new(CatalogConfig::default())
    }
}

#[async_trait]
impl CatalogService for HttpCatalog {
    async fn fetch_type(&self, name: &str) -> Result<RawType> {
        let name = name.to_lowercase();
        let url = self.config.endpoint(&format!("type/{}", name));
        self.get_json(&url, ResourceKind::Type, &name).await
    }

    async fn fetch_species(&self, id_or_name: &str) -> Result<RawSpecies> {
        let key = id_or_name.trim().to_lowercase();
        let url = self.config.endpoint(&format!("pokemon/{}", key));
        self.get_json(&url, ResourceKind::Species, &key).await
    }

    async fn fetch_move_names(&self) -> Result<Vec<String>> {
        let index = self.get_index("move", ResourceKind::MoveIndex).await?;
        Ok(index.names())
    }

    async fn fetch_all_species_names(&self) -> Result<Vec<SpeciesListing>> {
        let index = self.get_index("pokemon", ResourceKind::SpeciesIndex).await?;
        let listings = index
            .species_listings()
            .context("Species index contains a malformed reference")?;
        Ok(listings)
    }

    async fn resolve_version_group_generation(&self, version_group_ref: &str) -> Result<String> {
        // References are absolute catalog URLs
        let group: RawVersionGroup = self
            .get_json(version_group_ref, ResourceKind::VersionGroup, version_group_ref)
            .await?;
        Ok(group.generation.url)
    }
}
