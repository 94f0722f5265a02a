//! Login against the Story Spoiler API.

use crate::client::{ApiReply, LOGIN_PATH, build_http_client, endpoint};
use crate::config::{ApiConfig, Credentials};
use crate::error::{Error, Result};
use crate::models::{LoginRequest, LoginResponse};
use reqwest::Client;

/// Exchanges credentials for a bearer token.
pub struct Authenticator {
    /// HTTP client used only for the login call
    http: Client,
    /// Base URL of the deployment
    base_url: String,
}

impl Authenticator {
    /// Create an authenticator for the configured deployment.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built
    pub fn new(api: &ApiConfig) -> Result<Self> {
        Ok(Self {
            http: build_http_client(api)?,
            base_url: api.base_url.clone(),
        })
    }

    /// Log in and return the `accessToken` from the response.
    ///
    /// A success response without a token yields an empty string; the
    /// missing token surfaces later as authorization failures.
    ///
    /// # Errors
    /// Returns an error on transport failure, a non-success login status, or
    /// a body that is not JSON
    pub async fn fetch_token(&self, credentials: &Credentials) -> Result<String> {
        let url = endpoint(&self.base_url, LOGIN_PATH);
        let request = LoginRequest {
            username: &credentials.username,
            password: &credentials.password,
        };

        tracing::debug!("POST {url} as {}", credentials.username);
        let response = self.http.post(&url).json(&request).send().await?;
        let reply = ApiReply::from_response(response).await?;

        if !reply.status().is_success() {
            return Err(Error::Authentication {
                status: reply.status().as_u16(),
                body: reply.body().to_owned(),
            });
        }

        let login: LoginResponse = reply.json()?;
        let token = login.access_token.unwrap_or_default();
        if token.is_empty() {
            tracing::warn!("Login for {} returned no accessToken", credentials.username);
        }

        Ok(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::TcpListener;

    /// A loopback address nothing is listening on.
    fn closed_port_url() -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);
        format!("http://127.0.0.1:{port}")
    }

    #[tokio::test]
    async fn test_unreachable_host_is_transport_error() {
        let api = ApiConfig {
            base_url: closed_port_url(),
            timeout_seconds: Some(5),
        };
        let authenticator = Authenticator::new(&api).unwrap();

        let error = authenticator
            .fetch_token(&Credentials::default())
            .await
            .unwrap_err();
        assert!(error.is_transport(), "unexpected error: {error}");
    }
}
