//! Dashboard Configuration
//!
//! Backend location, endpoint paths and the page element identifiers the
//! controller binds to.

/// Name of the `<meta>` tag that may override the API base URL
pub const API_BASE_META: &str = "dashboard-api-base";

/// Backend endpoint paths
pub mod endpoints {
    pub const PROCESS_UPDATE: &str = "/api/process_update";
    pub const STALE_TASKS: &str = "/api/stale_tasks";
    pub const TASKS_BY_CATEGORY: &str = "/api/tasks_by_category";
    pub const CATEGORIES: &str = "/api/categories";
}

/// Page element identifiers
pub mod ids {
    pub const UPDATE_FORM: &str = "updateForm";
    pub const UPDATE_TEXT: &str = "updateText";
    pub const SUBMIT_BTN: &str = "submitBtn";
    pub const LOADING_INDICATOR: &str = "loadingIndicator";
    pub const RESULTS: &str = "results";
    pub const REMINDER_BTN: &str = "reminderBtn";
    pub const REMINDER_OUTPUT: &str = "reminderOutput";
    pub const CATEGORY_DROPDOWN: &str = "categoryDropdown";
    pub const CATEGORY_BTN: &str = "categoryBtn";
    pub const CATEGORY_RESULT: &str = "categoryResult";
}

/// Where API requests are sent
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ApiConfig {
    /// Empty means same-origin
    pub base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim().trim_end_matches('/').to_string();
        Self { base_url }
    }

    /// Read the base URL from `<meta name="dashboard-api-base" content="...">`,
    /// falling back to same-origin requests.
    pub fn from_document() -> Self {
        let selector = format!("meta[name=\"{}\"]", API_BASE_META);
        let content = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.query_selector(&selector).ok().flatten())
            .and_then(|meta| meta.get_attribute("content"));

        match content {
            Some(base) => {
                tracing::info!(base = %base, "using configured API base");
                Self::new(base)
            }
            None => Self::default(),
        }
    }

    /// Absolute (or same-origin relative) URL for an endpoint path
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_same_origin() {
        let config = ApiConfig::default();
        assert_eq!(config.url(endpoints::STALE_TASKS), "/api/stale_tasks");
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let config = ApiConfig::new(" https://tasks.example.com/ ");
        assert_eq!(config.base_url, "https://tasks.example.com");
        assert_eq!(
            config.url(endpoints::CATEGORIES),
            "https://tasks.example.com/api/categories"
        );
    }
}
