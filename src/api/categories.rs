//! Category List Endpoint

use super::{get_json, ApiResult};
use crate::config::{endpoints, ApiConfig};
use crate::models::CategoriesResponse;

pub async fn list_categories(config: &ApiConfig) -> ApiResult<CategoriesResponse> {
    get_json(&config.url(endpoints::CATEGORIES)).await
}
