//! HTTP client for the remote to-do API.
//!
//! A thin wrapper over [`reqwest::Client`] covering the two read-only
//! endpoints the app needs: `GET /todos` and `GET /users`. There is no
//! retry, backoff, pagination, or auth; a failed load is surfaced to the
//! UI as a single error message.

use std::time::Duration;

use crate::task::Task;
use crate::user::User;

/// Errors from the remote API client.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Failed to construct the underlying HTTP client.
    #[error("failed to build HTTP client: {0}")]
    Build(#[source] reqwest::Error),

    /// The request could not be sent or the connection failed.
    #[error("request to {url} failed: {source}")]
    Request {
        /// URL that was requested.
        url: String,
        /// Underlying transport error.
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-success status code.
    #[error("{url} returned status {status}")]
    Status {
        /// URL that was requested.
        url: String,
        /// HTTP status received.
        status: reqwest::StatusCode,
    },

    /// The response body was not valid JSON for the expected shape.
    #[error("failed to decode response from {url}: {source}")]
    Decode {
        /// URL that was requested.
        url: String,
        /// Underlying decode error.
        #[source]
        source: reqwest::Error,
    },
}

/// Client for the to-do fixture API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Creates a client for `base_url` with a per-request timeout.
    ///
    /// A trailing slash on `base_url` is accepted and stripped.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Build`] if the underlying HTTP client cannot
    /// be constructed.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(ApiError::Build)?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Base URL this client was built with (no trailing slash).
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetches the full task list from `GET /todos`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure, non-success status, or
    /// a malformed response body.
    pub async fn fetch_todos(&self) -> Result<Vec<Task>, ApiError> {
        self.get_json("todos").await
    }

    /// Fetches the full user list from `GET /users`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure, non-success status, or
    /// a malformed response body.
    pub async fn fetch_users(&self) -> Result<Vec<User>, ApiError> {
        self.get_json("users").await
    }

    /// Fetches tasks and users concurrently.
    ///
    /// Both requests run in parallel; if either fails the whole load
    /// fails and nothing partial is returned.
    ///
    /// # Errors
    ///
    /// Returns the first [`ApiError`] from either request.
    pub async fn fetch_all(&self) -> Result<(Vec<Task>, Vec<User>), ApiError> {
        tokio::try_join!(self.fetch_todos(), self.fetch_users())
    }

    /// `GET {base_url}/{path}` and decode the JSON array body.
    async fn get_json<T>(&self, path: &str) -> Result<Vec<T>, ApiError>
    where
        T: serde::de::DeserializeOwned,
    {
        let url = format!("{}/{path}", self.base_url);
        tracing::debug!(%url, "fetching");

        let response = self.http.get(&url).send().await.map_err(|e| {
            ApiError::Request {
                url: url.clone(),
                source: e,
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status { url, status });
        }

        response
            .json()
            .await
            .map_err(|e| ApiError::Decode { url, source: e })
    }
}
