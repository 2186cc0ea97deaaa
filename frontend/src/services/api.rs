use gloo::net::http::{Request, Response};
use serde::{de::DeserializeOwned, Serialize};
use shared::{
    AppConfig, CancellationToken, LeaveDecision, ListKey, Mutation, NewAlbumItemRequest,
    NewLeaveRequest, NewMedicineRequest, NewMessageRequest,
};
use thiserror::Error;
use web_sys::AbortController;

use crate::services::config::app_config;
use crate::services::logging::Logger;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Failed to parse response: {0}")]
    Decode(String),
    #[error("Failed to serialize request: {0}")]
    Encode(String),
}

/// API client for communicating with the backend server
#[derive(Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    /// Create a new API client from the build-time configuration
    pub fn new() -> Self {
        Self::from_config(&app_config())
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::with_base_url(config.backend_url.clone())
    }

    /// Create a new API client with a custom base URL; empty means same-origin
    pub fn with_base_url(base_url: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub fn list_url(&self, key: ListKey) -> String {
        self.url(&key.path())
    }

    /// GET a JSON body. Cancelling `token` aborts the browser fetch.
    ///
    /// The status code is not inspected; a body that does not decode as `T`
    /// is a [`ApiError::Decode`].
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        token: &CancellationToken,
    ) -> Result<T, ApiError> {
        let mut request = Request::get(url);
        if let Ok(controller) = AbortController::new() {
            request = request.abort_signal(Some(&controller.signal()));
            token.on_cancel(move || controller.abort());
        }

        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    pub async fn send_message(&self, request: &NewMessageRequest) -> Result<(), ApiError> {
        self.post_json(&Mutation::SendMessage, request).await
    }

    pub async fn upload_album_item(&self, request: &NewAlbumItemRequest) -> Result<(), ApiError> {
        self.post_json(&Mutation::UploadAlbumItem, request).await
    }

    pub async fn create_leave_request(&self, request: &NewLeaveRequest) -> Result<(), ApiError> {
        self.post_json(&Mutation::CreateLeaveRequest, request).await
    }

    pub async fn create_medicine_request(
        &self,
        request: &NewMedicineRequest,
    ) -> Result<(), ApiError> {
        self.post_json(&Mutation::CreateMedicineRequest, request).await
    }

    /// Approve or reject a pending leave request
    pub async fn decide_leave_request(
        &self,
        id: &str,
        decision: LeaveDecision,
    ) -> Result<(), ApiError> {
        self.post_empty(&Mutation::DecideLeaveRequest {
            id: id.to_string(),
            decision,
        })
        .await
    }

    /// Mark a medicine request as given
    pub async fn confirm_medicine_request(&self, id: &str) -> Result<(), ApiError> {
        self.post_empty(&Mutation::ConfirmMedicineRequest { id: id.to_string() })
            .await
    }

    async fn post_json<B: Serialize>(&self, mutation: &Mutation, body: &B) -> Result<(), ApiError> {
        let url = self.url(&mutation.path());
        let request = Request::post(&url)
            .json(body)
            .map_err(|e| ApiError::Encode(e.to_string()))?;
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Self::note_status(&url, &response);
        Ok(())
    }

    async fn post_empty(&self, mutation: &Mutation) -> Result<(), ApiError> {
        let url = self.url(&mutation.path());
        let response = Request::post(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Self::note_status(&url, &response);
        Ok(())
    }

    // Any HTTP response counts as a completed write
    fn note_status(url: &str, response: &Response) {
        if !response.ok() {
            Logger::warn_with_component(
                "api",
                &format!("POST {} answered with status {}", url, response.status()),
            );
        }
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}
