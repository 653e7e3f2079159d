//! HTTP implementation of the management API client.
//!
//! Talks to the REST management API with a bearer token. Responses are
//! mapped onto [`ClientError`] variants; nothing is retried here.

use crate::api::{ManagementApi, SpaceApi};
use crate::config::ManagementConfig;
use crate::error::{ClientError, ClientResult};
use async_trait::async_trait;
use reqwest::header::HeaderMap;
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use spacefetch_types::{Collection, PageQuery, Record, ResourceKind, SpaceId};
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Rate limit reset header sent by the management API.
const RATE_LIMIT_RESET_HEADER: &str = "x-contentful-ratelimit-reset";

/// Management API client over HTTP.
#[derive(Clone)]
pub struct HttpManagementClient {
    inner: Arc<Inner>,
}

struct Inner {
    config: ManagementConfig,
    client: Client,
}

impl HttpManagementClient {
    /// Creates a client, validating the config first.
    pub fn new(config: ManagementConfig) -> ClientResult<Self> {
        config.validate()?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self {
            inner: Arc::new(Inner { config, client }),
        })
    }

    /// The config this client was built with.
    pub fn config(&self) -> &ManagementConfig {
        &self.inner.config
    }
}

impl Inner {
    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> ClientResult<T> {
        let url = format!("{}{}", self.config.base_url(), path);
        debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.config.access_token)
            .query(query)
            .send()
            .await?;

        let response = check_status(response, path).await?;
        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

/// Maps a non-success response onto a [`ClientError`].
async fn check_status(response: Response, path: &str) -> ClientResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    match status {
        StatusCode::NOT_FOUND => Err(ClientError::NotFound(path.to_string())),
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            let message = response.text().await.unwrap_or_default();
            Err(ClientError::AuthFailed(format!("{status}: {message}")))
        }
        StatusCode::TOO_MANY_REQUESTS => Err(ClientError::RateLimited {
            retry_after_secs: retry_after_secs(response.headers()),
        }),
        _ => {
            let message = response.text().await.unwrap_or_default();
            Err(ClientError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }
}

fn retry_after_secs(headers: &HeaderMap) -> u64 {
    [RATE_LIMIT_RESET_HEADER, "retry-after"]
        .iter()
        .find_map(|name| {
            headers
                .get(*name)
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.trim().parse().ok())
        })
        .unwrap_or(1)
}

#[async_trait]
impl ManagementApi for HttpManagementClient {
    type Space = HttpSpace;

    async fn get_space(&self, space_id: &SpaceId) -> ClientResult<HttpSpace> {
        let record: Record = self
            .inner
            .get_json(&format!("/spaces/{space_id}"), &[])
            .await?;

        if let Some(returned) = record.id() {
            if returned != space_id.as_str() {
                return Err(ClientError::InvalidResponse(format!(
                    "requested space {space_id} but got {returned}"
                )));
            }
        }

        let space = HttpSpace {
            inner: Arc::clone(&self.inner),
            space_id: space_id.clone(),
            record,
        };
        debug!(
            "Resolved space {} ({})",
            space_id,
            space.name().unwrap_or("unnamed")
        );
        Ok(space)
    }
}

/// A space reached through [`HttpManagementClient`].
pub struct HttpSpace {
    inner: Arc<Inner>,
    space_id: SpaceId,
    record: Record,
}

impl HttpSpace {
    /// Space name, if the API returned one.
    pub fn name(&self) -> Option<&str> {
        self.record.get_str("/name")
    }
}

#[async_trait]
impl SpaceApi for HttpSpace {
    fn space_id(&self) -> &SpaceId {
        &self.space_id
    }

    async fn list(&self, kind: ResourceKind, query: &PageQuery) -> ClientResult<Collection<Record>> {
        let path = format!("/spaces/{}/{}", self.space_id, kind.path_segment());
        self.inner.get_json(&path, &query.to_query_pairs()).await
    }

    async fn get_editor_interface(&self, content_type_id: &str) -> ClientResult<Record> {
        let path = format!(
            "/spaces/{}/content_types/{}/editor_interface",
            self.space_id, content_type_id
        );
        self.inner.get_json(&path, &[]).await
    }
}
