//! Backend API
//!
//! Typed bindings to the dashboard backend, organized by endpoint family.
//! Flows talk to the backend through [`DashboardApi`] so they can run
//! against an in-memory fake in tests.

mod categories;
mod tasks;
mod update;

use async_trait::async_trait;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use crate::config::ApiConfig;
use crate::models::{CategoriesResponse, CategoryResponse, StaleResponse, UpdateRequest, UpdateResponse};

/// Transport-tier failure. Never shown to the user verbatim.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("HTTP {status} {status_text}")]
    Status { status: u16, status_text: String },
    #[error("invalid response body: {0}")]
    Decode(String),
    #[error("failed to encode request: {0}")]
    Encode(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

/// The four backend calls the dashboard makes
#[async_trait(?Send)]
pub trait DashboardApi {
    async fn process_update(&self, request: &UpdateRequest) -> ApiResult<UpdateResponse>;

    async fn stale_tasks(&self) -> ApiResult<StaleResponse>;

    async fn tasks_by_category(&self, category: &str) -> ApiResult<CategoryResponse>;

    async fn categories(&self) -> ApiResult<CategoriesResponse>;
}

/// Fetch-based implementation used in the browser
#[derive(Debug, Clone)]
pub struct HttpApi {
    config: ApiConfig,
}

impl HttpApi {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }
}

#[async_trait(?Send)]
impl DashboardApi for HttpApi {
    async fn process_update(&self, request: &UpdateRequest) -> ApiResult<UpdateResponse> {
        update::process_update(&self.config, request).await
    }

    async fn stale_tasks(&self) -> ApiResult<StaleResponse> {
        tasks::stale_tasks(&self.config).await
    }

    async fn tasks_by_category(&self, category: &str) -> ApiResult<CategoryResponse> {
        tasks::tasks_by_category(&self.config, category).await
    }

    async fn categories(&self) -> ApiResult<CategoriesResponse> {
        categories::list_categories(&self.config).await
    }
}

// ========================
// Request Helpers
// ========================

async fn get_json<T: DeserializeOwned>(url: &str) -> ApiResult<T> {
    tracing::debug!(url, "GET");
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    decode(response).await
}

async fn post_json<B: Serialize, T: DeserializeOwned>(url: &str, body: &B) -> ApiResult<T> {
    tracing::debug!(url, "POST");
    let request = Request::post(url)
        .json(body)
        .map_err(|e| ApiError::Encode(e.to_string()))?;
    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    decode(response).await
}

/// HTTP error statuses and non-JSON bodies are both transport failures
async fn decode<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
    if !response.ok() {
        return Err(ApiError::Status {
            status: response.status(),
            status_text: response.status_text(),
        });
    }
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}
