//! Authenticated client for the story endpoints.

use crate::config::ApiConfig;
use crate::error::{Error, Result};
use crate::models::StoryDto;
use reqwest::{Client, RequestBuilder, Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde_json::from_str;

/// Login endpoint.
pub const LOGIN_PATH: &str = "/api/User/Authentication";
/// Story creation endpoint.
pub const CREATE_STORY_PATH: &str = "/api/Story/Create";
/// Story edit endpoint prefix; the story id is appended.
pub const EDIT_STORY_PATH: &str = "/api/Story/Edit";
/// Story listing endpoint.
pub const LIST_STORIES_PATH: &str = "/api/Story/All";
/// Story deletion endpoint prefix; the story id is appended.
pub const DELETE_STORY_PATH: &str = "/api/Story/Delete";

/// Build the underlying HTTP client, honoring the configured timeout.
pub(crate) fn build_http_client(api: &ApiConfig) -> Result<Client> {
    let mut builder = Client::builder();
    if let Some(timeout) = api.timeout() {
        builder = builder.timeout(timeout);
    }
    Ok(builder.build()?)
}

/// Join a base URL and an endpoint path with exactly one slash between them.
pub(crate) fn endpoint(base_url: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim().trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// URL of `prefix` with `story_id` appended as one percent-encoded path segment.
pub(crate) fn story_endpoint(base_url: &str, prefix: &str, story_id: &str) -> Result<Url> {
    let raw = endpoint(base_url, prefix);
    let mut url = Url::parse(&raw)
        .map_err(|err| Error::Config(format!("invalid endpoint {raw:?}: {err}")))?;
    url.path_segments_mut()
        .map_err(|()| Error::Config(format!("endpoint {raw:?} cannot take a path")))?
        .push(story_id);
    Ok(url)
}

/// Status and raw body of an API response.
///
/// The body is kept as text so callers can assert on substrings and still
/// parse JSON out of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiReply {
    /// HTTP status code
    status: StatusCode,
    /// Raw response body
    body: String,
}

impl ApiReply {
    /// Create a reply from its parts.
    #[must_use]
    pub fn new(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Read status and body out of a live response.
    ///
    /// # Errors
    /// Returns an error if the body cannot be read
    pub async fn from_response(response: Response) -> Result<Self> {
        let status = response.status();
        let body = response.text().await?;
        Ok(Self { status, body })
    }

    /// HTTP status code.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Raw body text.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Whether the body contains `needle`.
    pub fn contains(&self, needle: &str) -> bool {
        self.body.contains(needle)
    }

    /// Parse the body as JSON.
    ///
    /// # Errors
    /// Returns an error if the body is not valid JSON for `T`
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(from_str(&self.body)?)
    }
}

/// HTTP client carrying a bearer token for every story request.
#[derive(Debug, Clone)]
pub struct StoryClient {
    /// HTTP client for API requests
    http: Client,
    /// Base URL of the deployment
    base_url: String,
    /// Bearer token obtained at login
    token: String,
}

impl StoryClient {
    /// Create a client for the configured deployment using `token`.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built
    pub fn new(api: &ApiConfig, token: impl Into<String>) -> Result<Self> {
        Ok(Self {
            http: build_http_client(api)?,
            base_url: api.base_url.clone(),
            token: token.into(),
        })
    }

    /// Bearer token attached to requests.
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Base URL requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `POST /api/Story/Create`.
    ///
    /// # Errors
    /// Returns an error on transport failure
    pub async fn create_story(&self, story: &StoryDto) -> Result<ApiReply> {
        let url = endpoint(&self.base_url, CREATE_STORY_PATH);
        self.send(self.http.post(&url).json(story), "POST", &url).await
    }

    /// `PUT /api/Story/Edit/{id}`.
    ///
    /// # Errors
    /// Returns an error on transport failure
    pub async fn edit_story(&self, story_id: &str, story: &StoryDto) -> Result<ApiReply> {
        let url = story_endpoint(&self.base_url, EDIT_STORY_PATH, story_id)?;
        self.send(self.http.put(url.as_str()).json(story), "PUT", url.as_str()).await
    }

    /// `GET /api/Story/All`.
    ///
    /// # Errors
    /// Returns an error on transport failure
    pub async fn list_stories(&self) -> Result<ApiReply> {
        let url = endpoint(&self.base_url, LIST_STORIES_PATH);
        self.send(self.http.get(&url), "GET", &url).await
    }

    /// `DELETE /api/Story/Delete/{id}`.
    ///
    /// # Errors
    /// Returns an error on transport failure
    pub async fn delete_story(&self, story_id: &str) -> Result<ApiReply> {
        let url = story_endpoint(&self.base_url, DELETE_STORY_PATH, story_id)?;
        self.send(self.http.delete(url.as_str()), "DELETE", url.as_str()).await
    }

    /// Attach the bearer token, send, and capture the reply.
    async fn send(&self, request: RequestBuilder, method: &str, url: &str) -> Result<ApiReply> {
        tracing::debug!("{method} {url}");
        let response = request.bearer_auth(&self.token).send().await?;
        let reply = ApiReply::from_response(response).await?;
        tracing::debug!("{method} {url} -> {}", reply.status());
        Ok(reply)
    }
}
