//! HTTP client wrapper for the Repair Hub backend.
//!
//! Attaches the bearer credential to authorized requests, serializes query
//! filters, and maps non-success responses to [`ApiError`]. The client never
//! consults session state: every authorized call takes the credential as an
//! explicit parameter, keeping the store/session separation testable.

use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::errors::{ApiError, ErrorBody};
use crate::models::{
    AuthResponse, Guide, GuideDraft, GuideFilters, GuideListResponse, LikeResponse, LoginRequest,
    RegisterRequest, UserProfile,
};

/// Request body for the AI assistance endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct AssistRequest {
    pub message: String,
    pub context: String,
}

/// Response from the AI assistance endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct AssistResponse {
    pub response: String,
}

/// Response from the image analysis endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisResponse {
    pub analysis: String,
}

/// Response from the image upload endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    pub url: String,
    #[serde(default)]
    pub public_id: Option<String>,
}

/// Thin typed wrapper over the backend REST API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    /// Build a client from configuration.
    pub fn new(config: &Config) -> Result<Self, ApiError> {
        let http = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| ApiError::Network(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Decode a response body, mapping non-2xx statuses to the error taxonomy.
    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        let status = response.status();
        if !status.is_success() {
            return Err(Self::error_from(status, response).await);
        }
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(format!("Response decode error: {}", e)))
    }

    /// Check a response for success without decoding a body.
    async fn check(response: Response) -> Result<(), ApiError> {
        let status = response.status();
        if !status.is_success() {
            return Err(Self::error_from(status, response).await);
        }
        Ok(())
    }

    async fn error_from(status: StatusCode, response: Response) -> ApiError {
        let message = response
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.message)
            .unwrap_or_else(|| format!("Request failed with status {}", status));
        ApiError::from_status(status, message)
    }

    // --- Auth ---

    /// POST /auth/login
    pub async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, ApiError> {
        let response = self
            .http
            .post(self.url("/auth/login"))
            .json(request)
            .send()
            .await?;
        Self::decode(response).await
    }

    /// POST /auth/register
    pub async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, ApiError> {
        let response = self
            .http
            .post(self.url("/auth/register"))
            .json(request)
            .send()
            .await?;
        Self::decode(response).await
    }

    /// GET /auth/me
    pub async fn get_me(&self, credential: &str) -> Result<UserProfile, ApiError> {
        let response = self
            .http
            .get(self.url("/auth/me"))
            .bearer_auth(credential)
            .send()
            .await?;
        Self::decode(response).await
    }

    // --- Guides ---

    /// GET /guides
    pub async fn get_guides(&self, filters: &GuideFilters) -> Result<GuideListResponse, ApiError> {
        let response = self
            .http
            .get(self.url("/guides"))
            .query(&filters.to_query_pairs())
            .send()
            .await?;
        Self::decode(response).await
    }

    /// GET /guides/:id
    pub async fn get_guide(&self, id: &str) -> Result<Guide, ApiError> {
        let response = self
            .http
            .get(self.url(&format!("/guides/{}", id)))
            .send()
            .await?;
        Self::decode(response).await
    }

    /// POST /guides
    pub async fn create_guide(
        &self,
        draft: &GuideDraft,
        credential: &str,
    ) -> Result<Guide, ApiError> {
        let response = self
            .http
            .post(self.url("/guides"))
            .bearer_auth(credential)
            .json(draft)
            .send()
            .await?;
        Self::decode(response).await
    }

    /// PUT /guides/:id
    pub async fn update_guide(
        &self,
        id: &str,
        draft: &GuideDraft,
        credential: &str,
    ) -> Result<Guide, ApiError> {
        let response = self
            .http
            .put(self.url(&format!("/guides/{}", id)))
            .bearer_auth(credential)
            .json(draft)
            .send()
            .await?;
        Self::decode(response).await
    }

    /// DELETE /guides/:id
    pub async fn delete_guide(&self, id: &str, credential: &str) -> Result<(), ApiError> {
        let response = self
            .http
            .delete(self.url(&format!("/guides/{}", id)))
            .bearer_auth(credential)
            .send()
            .await?;
        Self::check(response).await
    }

    /// POST /guides/:id/like — idempotent toggle; the response reports the
    /// resulting state.
    pub async fn like_guide(&self, id: &str, credential: &str) -> Result<LikeResponse, ApiError> {
        let response = self
            .http
            .post(self.url(&format!("/guides/{}/like", id)))
            .bearer_auth(credential)
            .json(&serde_json::json!({}))
            .send()
            .await?;
        Self::decode(response).await
    }

    // --- Uploads ---

    /// POST /upload/image (multipart)
    pub async fn upload_image(
        &self,
        bytes: Vec<u8>,
        filename: &str,
        credential: &str,
    ) -> Result<UploadResponse, ApiError> {
        let form = Form::new().part("image", Part::bytes(bytes).file_name(filename.to_string()));
        let response = self
            .http
            .post(self.url("/upload/image"))
            .bearer_auth(credential)
            .multipart(form)
            .send()
            .await?;
        Self::decode(response).await
    }

    // --- AI ---

    /// POST /ai/assist
    pub async fn ai_assist(
        &self,
        request: &AssistRequest,
        credential: &str,
    ) -> Result<AssistResponse, ApiError> {
        let response = self
            .http
            .post(self.url("/ai/assist"))
            .bearer_auth(credential)
            .json(request)
            .send()
            .await?;
        Self::decode(response).await
    }

    /// POST /ai/analyze-image (multipart)
    pub async fn analyze_image(
        &self,
        bytes: Vec<u8>,
        filename: &str,
        credential: &str,
    ) -> Result<AnalysisResponse, ApiError> {
        let form = Form::new().part("image", Part::bytes(bytes).file_name(filename.to_string()));
        let response = self
            .http
            .post(self.url("/ai/analyze-image"))
            .bearer_auth(credential)
            .multipart(form)
            .send()
            .await?;
        Self::decode(response).await
    }
}
