//! Task Query Endpoints
//!
//! Overdue tasks and tasks filtered by category.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use super::{get_json, ApiResult};
use crate::config::{endpoints, ApiConfig};
use crate::models::{CategoryResponse, StaleResponse};

/// Characters left unescaped by `encodeURIComponent`
const QUERY_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

pub fn tasks_by_category_url(config: &ApiConfig, category: &str) -> String {
    format!(
        "{}?category={}",
        config.url(endpoints::TASKS_BY_CATEGORY),
        utf8_percent_encode(category, QUERY_COMPONENT)
    )
}

pub async fn stale_tasks(config: &ApiConfig) -> ApiResult<StaleResponse> {
    get_json(&config.url(endpoints::STALE_TASKS)).await
}

pub async fn tasks_by_category(config: &ApiConfig, category: &str) -> ApiResult<CategoryResponse> {
    get_json(&tasks_by_category_url(config, category)).await
}
