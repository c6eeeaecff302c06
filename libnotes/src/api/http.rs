//! HTTP implementation of the notes API

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;

use super::{Endpoint, NotesApi};
use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::types::{DeleteResponse, ListResponse, NoteDto, NoteKey, NotePayload};

/// `reqwest`-backed client for the notes server
pub struct HttpNotesApi {
    client: Client,
    base_url: String,
}

impl HttpNotesApi {
    /// Create a client for the configured server
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let mut builder = Client::builder();
        if config.timeout_secs > 0 {
            builder = builder.timeout(Duration::from_secs(config.timeout_secs));
        }
        let client = builder.build().map_err(ApiError::Http)?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL of an endpoint
    pub fn url(&self, endpoint: Endpoint) -> String {
        format!("{}{}", self.base_url, endpoint.path())
    }

    fn request(&self, endpoint: Endpoint) -> RequestBuilder {
        self.client.request(endpoint.method(), self.url(endpoint))
    }

    /// Send a request and decode the JSON body
    async fn send<R: DeserializeOwned>(
        &self,
        endpoint: Endpoint,
        request: RequestBuilder,
    ) -> Result<R, ApiError> {
        tracing::debug!(method = %endpoint.method(), url = %self.url(endpoint), "Sending request");

        let response = request.send().await.map_err(|e| {
            if e.is_connect() {
                ApiError::Connection(format!("Cannot connect to {}", self.base_url))
            } else {
                ApiError::Http(e)
            }
        })?;

        let status = response.status();
        let body = response.text().await.map_err(ApiError::Http)?;

        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }

        serde_json::from_str(&body).map_err(|e| ApiError::Parse(e.to_string()))
    }
}

#[async_trait]
impl NotesApi for HttpNotesApi {
    async fn get_list(&self) -> Result<ListResponse, ApiError> {
        let endpoint = Endpoint::List;
        self.send(endpoint, self.request(endpoint)).await
    }

    async fn add(&self, body: &NotePayload) -> Result<Option<NoteDto>, ApiError> {
        let endpoint = Endpoint::Add;
        self.send(endpoint, self.request(endpoint).json(body)).await
    }

    async fn edit(&self, key: NoteKey, body: &NotePayload) -> Result<Option<NoteDto>, ApiError> {
        let endpoint = Endpoint::Edit(key);
        self.send(endpoint, self.request(endpoint).json(body)).await
    }

    async fn delete(&self, key: NoteKey) -> Result<DeleteResponse, ApiError> {
        let endpoint = Endpoint::Delete(key);
        self.send(endpoint, self.request(endpoint)).await
    }

    async fn search(&self, query: &str) -> Result<Vec<NoteDto>, ApiError> {
        let endpoint = Endpoint::Search;
        let request = self.request(endpoint).query(&[("q", query)]);
        self.send(endpoint, request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api(base_url: &str) -> HttpNotesApi {
        HttpNotesApi::new(&ApiConfig {
            base_url: base_url.to_string(),
            timeout_secs: 1,
        })
        .unwrap()
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let api = api("http://localhost:3000/");
        assert_eq!(api.base_url(), "http://localhost:3000");
        assert_eq!(api.url(Endpoint::Edit(5)), "http://localhost:3000/notes/5");
    }

    #[test]
    fn test_zero_timeout_builds() {
        let api = HttpNotesApi::new(&ApiConfig {
            base_url: "http://localhost:3000".to_string(),
            timeout_secs: 0,
        });
        assert!(api.is_ok());
    }

    #[tokio::test]
    async fn test_unreachable_server_is_error() {
        // Port 9 (discard) on localhost is closed in test environments
        let api = api("http://127.0.0.1:9");
        let result = api.get_list().await;
        assert!(matches!(
            result,
            Err(ApiError::Connection(_)) | Err(ApiError::Http(_))
        ));
    }
}
