//! # API crate — typed client for the CRM REST backend
//!
//! All persistence, validation, and business rules live behind the REST API;
//! this crate is the one place the frontend talks to it. Each method maps to
//! a single endpoint and returns the decoded body.
//!
//! ## Endpoints
//!
//! | Method | Path | Wrapper |
//! |--------|------|---------|
//! | GET | `client` | [`ApiClient::list_clients`] |
//! | GET | `client/{id}` | [`ApiClient::get_client`] |
//! | POST | `client` | [`ApiClient::create_client`] |
//! | GET | `client/{id}/note` | [`ApiClient::list_notes`] |
//! | POST | `client/{id}/note` | [`ApiClient::create_note`] |
//!
//! List endpoints wrap their payload in a `{ "data": [...] }` envelope; the
//! wrappers unwrap it. Non-success responses carry `{ "detail": "..." }`,
//! surfaced through [`ApiError::user_message`]. There is no retry, caching,
//! or timeout handling here: a failed call is reported to the view and the
//! user decides whether to try again.

use reqwest::Response;
use serde::de::DeserializeOwned;
use serde::Deserialize;

mod error;
pub use error::{ApiError, ErrorBody, GENERIC_ERROR};

pub use model::{Client, ClientNote, CreateClientNoteRequest, CreateClientRequest};

/// Base URL used when `CRM_API_URL` is not set at build time.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/api";

/// Envelope shape of the list endpoints.
#[derive(Debug, Deserialize)]
struct ListEnvelope<T> {
    data: Vec<T>,
}

/// Thin wrapper over the CRM REST API.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        ApiClient {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    /// Build a client from the `CRM_API_URL` compile-time environment
    /// variable, falling back to [`DEFAULT_BASE_URL`].
    pub fn from_env() -> Self {
        Self::new(option_env!("CRM_API_URL").unwrap_or(DEFAULT_BASE_URL))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    /// Fetch the full client roster.
    pub async fn list_clients(&self) -> Result<Vec<Client>, ApiError> {
        let url = self.url("client");
        tracing::debug!("GET {url}");
        let response = self.http.get(&url).send().await?;
        let envelope: ListEnvelope<Client> = decode(response).await?;
        Ok(envelope.data)
    }

    /// Fetch a single client by id.
    pub async fn get_client(&self, client_id: &str) -> Result<Client, ApiError> {
        let url = self.url(&format!("client/{client_id}"));
        tracing::debug!("GET {url}");
        let response = self.http.get(&url).send().await?;
        decode(response).await
    }

    /// Create a client and return the record the server stored.
    pub async fn create_client(&self, request: &CreateClientRequest) -> Result<Client, ApiError> {
        let url = self.url("client");
        tracing::debug!("POST {url}");
        let response = self.http.post(&url).json(request).send().await?;
        decode(response).await
    }

    /// Fetch the notes for a client, in the order the server returns them
    /// (newest first).
    pub async fn list_notes(&self, client_id: &str) -> Result<Vec<ClientNote>, ApiError> {
        let url = self.url(&format!("client/{client_id}/note"));
        tracing::debug!("GET {url}");
        let response = self.http.get(&url).send().await?;
        let envelope: ListEnvelope<ClientNote> = decode(response).await?;
        Ok(envelope.data)
    }

    /// Create a note for a client and return the stored note.
    pub async fn create_note(
        &self,
        client_id: &str,
        request: &CreateClientNoteRequest,
    ) -> Result<ClientNote, ApiError> {
        let url = self.url(&format!("client/{client_id}/note"));
        tracing::debug!("POST {url}");
        let response = self.http.post(&url).json(request).send().await?;
        decode(response).await
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::from_env()
    }
}

/// Turn a response into the decoded body, or an [`ApiError::Api`] carrying
/// the server's `detail` message for non-success statuses.
async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status();
    if !status.is_success() {
        let body = response.bytes().await.unwrap_or_default();
        let detail = error::detail_from_body(&body);
        tracing::warn!("api error {status}: {detail}");
        return Err(ApiError::Api {
            status: status.as_u16(),
            detail,
        });
    }
    Ok(response.json().await?)
}
