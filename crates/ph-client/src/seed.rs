use crate::{ClientError, ClientResult, StoreOperation};

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use ph_config::SeedLocation;
use ph_core::{Experience, ExperienceDocument};
use reqwest::Client as ReqwestClient;

/// Read-only source of the initial experience list
#[async_trait]
pub trait SeedSource: Send + Sync {
    async fn fetch_seed(&self) -> ClientResult<Vec<Experience>>;
}

/// Seed document served over HTTP
pub struct HttpSeedSource {
    pub url: String,
    client: ReqwestClient,
}

impl HttpSeedSource {
    pub fn new(url: &str) -> Self {
        Self {
            url: url.to_string(),
            client: ReqwestClient::new(),
        }
    }

    pub fn with_timeout(url: &str, timeout: Duration) -> ClientResult<Self> {
        let client = ReqwestClient::builder()
            .timeout(timeout)
            .build()
            .map_err(ClientError::setup)?;

        Ok(Self {
            url: url.to_string(),
            client,
        })
    }
}

#[async_trait]
impl SeedSource for HttpSeedSource {
    async fn fetch_seed(&self) -> ClientResult<Vec<Experience>> {
        let operation = StoreOperation::FetchSeed;
        debug!("GET {}", self.url);

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| ClientError::http(operation, e))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ClientError::http(operation, e))?;

        if !status.is_success() {
            return Err(ClientError::api(
                operation,
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown error"),
            ));
        }

        parse_document(&body)
    }
}

/// Seed document read from the local filesystem
pub struct FileSeedSource {
    pub path: PathBuf,
}

impl FileSeedSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl SeedSource for FileSeedSource {
    async fn fetch_seed(&self) -> ClientResult<Vec<Experience>> {
        debug!("Reading seed document {}", self.path.display());

        let body = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| ClientError::io(StoreOperation::FetchSeed, self.path.clone(), e))?;

        parse_document(&body)
    }
}

/// Build the seed source for a configured location
pub fn seed_source_for(
    location: &SeedLocation,
    timeout: Duration,
) -> ClientResult<Arc<dyn SeedSource>> {
    match location {
        SeedLocation::Url(url) => Ok(Arc::new(HttpSeedSource::with_timeout(url, timeout)?)),
        SeedLocation::File(path) => Ok(Arc::new(FileSeedSource::new(path.clone()))),
    }
}

fn parse_document(body: &str) -> ClientResult<Vec<Experience>> {
    ExperienceDocument::from_json(body)
        .map(|document| document.experiences)
        .map_err(|e| ClientError::json(StoreOperation::FetchSeed, e))
}
