use crate::api::schemas::auth::RefreshResponse;
use crate::config::Config;
use crate::error::{ClientError, Result};
use crate::storage::CredentialStore;
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use std::time::Duration;
use tokio::sync::Mutex;

pub mod admin;
pub mod auth;
pub mod cart;
pub mod catalog;
pub mod orders;
pub mod reviews;
pub mod schemas;

/// Uniform REST access to the NexCart backend with transparent single-shot
/// token refresh.
///
/// Constructed explicitly from [`Config`] and shared via `Arc`; there is no
/// module-level singleton. Expired tokens found in storage are evicted at
/// construction so the first request of a fresh process is not doomed.
#[derive(Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    config: Config,
    credentials: CredentialStore,
    /// Serializes refresh attempts so concurrent 401s cost one refresh call.
    refresh_gate: Mutex<()>,
}

impl ApiClient {
    pub fn new(config: Config) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.http.request_timeout_secs))
            .user_agent(config.http.user_agent.clone())
            .build()?;

        let credentials = CredentialStore::new(&config.state_dir);
        credentials.evict_expired(Duration::from_secs(config.auth.token_expiry_skew_secs));

        let base_url = config.api_url.trim_end_matches('/').to_string();

        Ok(Self { http, base_url, config, credentials, refresh_gate: Mutex::new(()) })
    }

    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    #[must_use]
    pub const fn credentials(&self) -> &CredentialStore {
        &self.credentials
    }

    /// Issues a request under the one-shot retry protocol and returns the
    /// successful response.
    ///
    /// On a 401 the recovery attempt happens exactly once per logical
    /// request; the guard is this function's control flow, never state
    /// carried on a request value.
    #[tracing::instrument(skip(self, query, body), fields(method = %method, path))]
    pub(crate) async fn send(
        &self,
        method: Method,
        path: &str,
        query: Option<&[(&str, String)]>,
        body: Option<&Value>,
    ) -> Result<reqwest::Response> {
        let token = self.credentials.access_token();
        let response = self.dispatch(&method, path, query, body, token.as_deref()).await?;

        if response.status() != StatusCode::UNAUTHORIZED {
            return Self::check(response).await;
        }

        if self.credentials.refresh_token().is_none() {
            // Nothing to recover with; the 401 propagates to the caller.
            return Self::check(response).await;
        }

        match self.refreshed_access_token(token.as_deref()).await {
            Ok(access) => {
                tracing::debug!("replaying request with refreshed access token");
                let retry = self.dispatch(&method, path, query, body, Some(&access)).await?;
                Self::check(retry).await
            }
            Err(e) => {
                // Session is over. Replaying without credentials lets
                // requests to public endpoints still succeed.
                tracing::debug!(error = %e, "token refresh failed, replaying unauthenticated");
                self.credentials.clear();
                let retry = self.dispatch(&method, path, query, body, None).await?;
                Self::check(retry).await
            }
        }
    }

    async fn dispatch(
        &self,
        method: &Method,
        path: &str,
        query: Option<&[(&str, String)]>,
        body: Option<&Value>,
        bearer: Option<&str>,
    ) -> std::result::Result<reqwest::Response, reqwest::Error> {
        let mut request = self.http.request(method.clone(), format!("{}{path}", self.base_url));
        if let Some(query) = query {
            request = request.query(query);
        }
        if let Some(body) = body {
            request = request.json(body);
        }
        if let Some(token) = bearer {
            request = request.bearer_auth(token);
        }
        request.send().await
    }

    /// Exchanges the refresh token for a new access token, persisting it.
    ///
    /// `stale` is the access token the failed request carried. Refreshes are
    /// serialized behind a gate; a flow that waited its turn and finds the
    /// stored token already rotated adopts it instead of refreshing again.
    async fn refreshed_access_token(&self, stale: Option<&str>) -> Result<String> {
        let _guard = self.refresh_gate.lock().await;

        if let Some(current) = self.credentials.access_token() {
            if stale != Some(current.as_str()) {
                tracing::debug!("access token already rotated by a concurrent request");
                return Ok(current);
            }
        }

        let refresh = self.credentials.refresh_token().ok_or(ClientError::Api {
            status: StatusCode::UNAUTHORIZED,
            message: "session expired".to_string(),
        })?;

        let response = self
            .dispatch(&Method::POST, "/auth/token/refresh", None, Some(&json!({ "refresh": refresh })), None)
            .await?;
        let response = Self::check(response).await?;
        let body: RefreshResponse = response.json().await?;

        self.credentials.save_access_token(&body.access);
        tracing::debug!("access token refreshed");
        Ok(body.access)
    }

    async fn check(response: reqwest::Response) -> Result<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.bytes().await?;
        Err(ClientError::from_body(status, &body))
    }

    pub(crate) async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        query: Option<&[(&str, String)]>,
        body: Option<&Value>,
    ) -> Result<T> {
        let response = self.send(method, path, query, body).await?;
        Ok(response.json().await?)
    }

    pub(crate) async fn request_empty(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> Result<()> {
        self.send(method, path, None, body).await?;
        Ok(())
    }

    // Generic verbs for endpoints without a typed wrapper.

    pub async fn get(&self, path: &str) -> Result<Value> {
        self.request(Method::GET, path, None, None).await
    }

    pub async fn post(&self, path: &str, body: &Value) -> Result<Value> {
        self.request(Method::POST, path, None, Some(body)).await
    }

    pub async fn put(&self, path: &str, body: &Value) -> Result<Value> {
        self.request(Method::PUT, path, None, Some(body)).await
    }

    pub async fn patch(&self, path: &str, body: &Value) -> Result<Value> {
        self.request(Method::PATCH, path, None, Some(body)).await
    }

    pub async fn delete(&self, path: &str) -> Result<()> {
        self.request_empty(Method::DELETE, path, None).await
    }
}
