//! Update Submission Endpoint

use super::{post_json, ApiResult};
use crate::config::{endpoints, ApiConfig};
use crate::models::{UpdateRequest, UpdateResponse};

pub async fn process_update(config: &ApiConfig, request: &UpdateRequest) -> ApiResult<UpdateResponse> {
    post_json(&config.url(endpoints::PROCESS_UPDATE), request).await
}
