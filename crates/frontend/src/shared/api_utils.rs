//! API utilities for frontend-backend communication
//!
//! URL construction plus the small amount of glue every REST module needs:
//! cookie credentials on every call and one mapping from HTTP outcomes to
//! [`ApiError`].

use contracts::shared::api_error::ApiError;
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use web_sys::RequestCredentials;

/// Build-time override for deployments where the API is not on port 3000 of
/// the page's host, e.g. `MAID_API_BASE=https://api.example.com`.
const API_BASE_OVERRIDE: Option<&str> = option_env!("MAID_API_BASE");

/// Get the base URL for API requests
///
/// Constructs the API base URL from the current window location,
/// using port 3000 for the backend server.
///
/// # Returns
/// - API base URL like "http://localhost:3000" or "https://example.com:3000"
/// - Empty string if window is not available
pub fn api_base() -> String {
    if let Some(base) = API_BASE_OVERRIDE {
        return base.trim_end_matches('/').to_string();
    }
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

/// Build a full API URL from an absolute path such as "/records".
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Backend-hosted sign-in page, offered when a call comes back 401/403.
pub fn login_url() -> String {
    format!("{}/login", api_base())
}

/// Attach the session cookie. Every call to the records API goes through here.
pub fn with_session(builder: RequestBuilder) -> RequestBuilder {
    builder
        .credentials(RequestCredentials::Include)
        .header("Accept", "application/json")
}

pub fn get(path: &str) -> RequestBuilder {
    with_session(Request::get(&api_url(path)))
}

pub fn post(path: &str) -> RequestBuilder {
    with_session(Request::post(&api_url(path)))
}

pub fn put(path: &str) -> RequestBuilder {
    with_session(Request::put(&api_url(path)))
}

pub fn delete(path: &str) -> RequestBuilder {
    with_session(Request::delete(&api_url(path)))
}

/// Send a prepared request and return the response only when it is 2xx.
pub async fn send(builder: RequestBuilder) -> Result<Response, ApiError> {
    let response = builder
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    ensure_ok(response).await
}

/// Serialize `body` as JSON and send it.
pub async fn send_json<B: Serialize>(builder: RequestBuilder, body: &B) -> Result<Response, ApiError> {
    let request = builder
        .json(body)
        .map_err(|e| ApiError::Decode(format!("cannot encode request body: {}", e)))?;
    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    ensure_ok(response).await
}

async fn ensure_ok(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    let err = ApiError::from_status(status, &body);
    log::warn!("{} {} -> {}", status, response.url(), err);
    Err(err)
}

pub async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}
