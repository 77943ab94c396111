use crate::{ClientError, ClientResult, RecordStore, StoreOperation};

use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use ph_core::{CustomAttribute, Profile};
use reqwest::{Client as ReqwestClient, Method, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;

const PROFILE_PATH: &str = "/profile";
const CUSTOM_INFO_PATH: &str = "/customInfo";

/// HTTP client for the profile record store
pub struct Client {
    pub base_url: String,
    client: ReqwestClient,
}

impl Client {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - Record store URL (e.g., "http://localhost:3001")
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: normalize_base_url(base_url),
            client: ReqwestClient::new(),
        }
    }

    /// Create a client whose requests give up after `timeout`
    pub fn with_timeout(base_url: &str, timeout: Duration) -> ClientResult<Self> {
        let client = ReqwestClient::builder()
            .timeout(timeout)
            .build()
            .map_err(ClientError::setup)?;

        Ok(Self {
            base_url: normalize_base_url(base_url),
            client,
        })
    }

    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        debug!("{method} {url}");
        self.client.request(method, &url)
    }

    /// Execute request and decode the JSON body
    async fn execute<T: DeserializeOwned>(
        &self,
        operation: StoreOperation,
        req: reqwest::RequestBuilder,
    ) -> ClientResult<T> {
        let body = self.send(operation, req).await?;
        serde_json::from_str(&body).map_err(|e| ClientError::json(operation, e))
    }

    /// Execute request, failing on any non-success status
    async fn send(
        &self,
        operation: StoreOperation,
        req: reqwest::RequestBuilder,
    ) -> ClientResult<String> {
        let response = req
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
                error_message(status, &body),
            ));
        }

        Ok(body)
    }
}

#[async_trait]
impl RecordStore for Client {
    async fn fetch_profile(&self) -> ClientResult<Profile> {
        let req = self.request(Method::GET, PROFILE_PATH);
        self.execute(StoreOperation::FetchProfile, req).await
    }

    async fn replace_profile(&self, profile: &Profile) -> ClientResult<Profile> {
        let req = self.request(Method::PUT, PROFILE_PATH).json(profile);
        self.execute(StoreOperation::ReplaceProfile, req).await
    }

    async fn list_custom_attributes(&self) -> ClientResult<Vec<CustomAttribute>> {
        let req = self.request(Method::GET, CUSTOM_INFO_PATH);
        self.execute(StoreOperation::ListCustomAttributes, req)
            .await
    }

    async fn create_custom_attribute(
        &self,
        attribute: &CustomAttribute,
    ) -> ClientResult<CustomAttribute> {
        let req = self.request(Method::POST, CUSTOM_INFO_PATH).json(attribute);
        self.execute(StoreOperation::CreateCustomAttribute, req)
            .await
    }

    async fn delete_custom_attribute(&self, id: u64) -> ClientResult<()> {
        let req = self.request(Method::DELETE, &format!("{CUSTOM_INFO_PATH}/{id}"));
        self.send(StoreOperation::DeleteCustomAttribute, req)
            .await
            .map(|_| ())
    }
}

fn normalize_base_url(base_url: &str) -> String {
    base_url.trim_end_matches('/').to_string()
}

/// Prefer a server-provided `{"error": {"message": ...}}` or `{"message": ...}`,
/// else the status reason.
fn error_message(status: StatusCode, body: &str) -> String {
    let parsed: Option<Value> = serde_json::from_str(body).ok();
    let message = parsed.as_ref().and_then(|value| {
        value
            .get("error")
            .and_then(|error| error.get("message").or(Some(error)))
            .or_else(|| value.get("message"))
            .and_then(|m| m.as_str())
            .map(String::from)
    });

    message.unwrap_or_else(|| {
        status
            .canonical_reason()
            .unwrap_or("Unknown error")
            .to_string()
    })
}
