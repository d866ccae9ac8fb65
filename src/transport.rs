//! Configured HTTP transport for the REST backend.
//!
//! One `reqwest` client with a fixed base URL, timeout, and default JSON
//! content type. Authenticated calls attach the bearer token from the
//! session store; with no token present they fail fast with [`AuthError`]
//! instead of going out unauthenticated. This layer performs no retries.

use std::sync::Arc;

use anyhow::Context;
use reqwest::header::{self, HeaderMap, HeaderValue};
use reqwest::{Method, RequestBuilder, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::config::Config;
use crate::error::{AuthError, ClientError, ClientResult, TransportError};
use crate::session::{Session, SessionStore};

pub struct Transport {
    http: reqwest::Client,
    base_url: Url,
    session: Arc<SessionStore>,
}

impl Transport {
    pub fn new(config: &Config, session: Arc<SessionStore>) -> anyhow::Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );

        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .default_headers(headers)
            .build()
            .context("failed to build HTTP client")?;

        Ok(Self {
            http,
            base_url: config.base_url.clone(),
            session,
        })
    }

    fn endpoint(&self, path: &str) -> ClientResult<Url> {
        let raw = format!(
            "{}/{}",
            self.base_url.as_str().trim_end_matches('/'),
            path.trim_start_matches('/')
        );
        Url::parse(&raw).map_err(|e| {
            ClientError::Transport(TransportError {
                status: None,
                message: format!("invalid request URL {raw:?}: {e}"),
            })
        })
    }

    /// Builder for an unauthenticated request.
    pub fn request(&self, method: Method, path: &str) -> ClientResult<RequestBuilder> {
        Ok(self.http.request(method, self.endpoint(path)?))
    }

    /// Builder for an authenticated request, plus the session snapshot it
    /// was built from. Checked locally before anything is sent: no token
    /// means [`AuthError::NotSignedIn`], not an unauthenticated request.
    pub fn authed(&self, method: Method, path: &str) -> ClientResult<(RequestBuilder, Arc<Session>)> {
        let Some(session) = self.session.snapshot() else {
            return Err(AuthError::NotSignedIn.into());
        };
        let builder = self.request(method, path)?.bearer_auth(&session.token);
        Ok((builder, session))
    }

    /// GET a JSON payload without authentication.
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> ClientResult<T> {
        let builder = self.request(Method::GET, path)?.query(query);
        self.send_json(builder).await
    }

    /// POST a JSON body without authentication.
    pub async fn post_json<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let builder = self.request(Method::POST, path)?.json(body);
        self.send_json(builder).await
    }

    /// Send a request and decode its JSON response.
    pub async fn send_json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> ClientResult<T> {
        let response = builder.send().await.map_err(TransportError::from)?;
        let response = check_status(response).await?;
        Ok(response.json().await.map_err(TransportError::from)?)
    }

    /// Send a request, requiring a 2xx response and ignoring the body.
    pub async fn send_expect_ok(&self, builder: RequestBuilder) -> ClientResult<()> {
        let response = builder.send().await.map_err(TransportError::from)?;
        check_status(response).await?;
        Ok(())
    }
}

/// Turn a non-2xx response into a [`TransportError`] carrying the status
/// and whatever message the backend provided.
async fn check_status(response: Response) -> Result<Response, TransportError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let message = extract_message(&body).unwrap_or_else(|| {
        status
            .canonical_reason()
            .unwrap_or("request failed")
            .to_string()
    });

    debug!(status = status.as_u16(), %message, "backend returned an error response");
    Err(TransportError {
        status: Some(status.as_u16()),
        message,
    })
}

/// Backend error bodies are either `{"message": "..."}` or plain text.
fn extract_message(body: &str) -> Option<String> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(value) = serde_json::from_str::<serde_json::Value>(trimmed)
        && let Some(message) = value.get("message").and_then(|m| m.as_str())
    {
        return Some(message.to_string());
    }

    Some(trimmed.to_string())
}
