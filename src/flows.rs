//! Dashboard Flows
//!
//! Each user action is one request/response/render cycle:
//! read input → validate → call backend → render → restore the trigger.
//! Flows are independent and may overlap; each one touches only its own
//! trigger and output area.

use std::sync::Arc;

use leptos::prelude::*;

use crate::api::{ApiError, ApiResult, DashboardApi, HttpApi};
use crate::generation::{FlowGenerations, GenerationToken};
use crate::models::{CategoriesResponse, CategoryResponse, StaleResponse, UpdateRequest, UpdateResponse};
use crate::render;
use crate::store::{AppStore, Flow, ViewModel};

pub const EMPTY_UPDATE_PROMPT: &str = "Please enter your update text";
pub const NO_CATEGORY_PROMPT: &str = "Please select a category";

/// How a flow ended
#[derive(Debug, Clone, PartialEq)]
pub enum FlowOutcome<T> {
    /// A JSON body came back; it may still report `success: false`
    Ok(T),
    /// Transport-tier failure
    NetworkError(ApiError),
    /// Input rejected before any request was made
    ValidationError(String),
    /// A newer request of the same flow started before this one resolved
    Superseded,
}

impl<T> FlowOutcome<T> {
    pub fn is_superseded(&self) -> bool {
        matches!(self, FlowOutcome::Superseded)
    }
}

/// Trimmed update text, or the prompt to show when there is none
pub fn validate_update_text(raw: &str) -> Result<String, String> {
    let text = raw.trim();
    if text.is_empty() {
        Err(EMPTY_UPDATE_PROMPT.to_string())
    } else {
        Ok(text.to_string())
    }
}

/// Selected category, or the prompt to show when nothing is selected
pub fn validate_category(selected: &str) -> Result<String, String> {
    if selected.is_empty() {
        Err(NO_CATEGORY_PROMPT.to_string())
    } else {
        Ok(selected.to_string())
    }
}

/// Drives the flows against a backend and a view model
pub struct DashboardController<A, V> {
    api: A,
    view: V,
    generations: FlowGenerations,
}

/// Controller as wired in the browser
pub type Controller = Arc<DashboardController<HttpApi, AppStore>>;

/// Get the controller from context
pub fn use_controller() -> Controller {
    expect_context::<Controller>()
}

impl<A: DashboardApi, V: ViewModel> DashboardController<A, V> {
    pub fn new(api: A, view: V) -> Self {
        Self {
            api,
            view,
            generations: FlowGenerations::default(),
        }
    }

    /// Disable the trigger, show the placeholder and issue a generation token
    fn start(&self, flow: Flow) -> GenerationToken {
        let token = self.generations.for_flow(flow).begin();
        self.view.set_trigger_enabled(flow, false);
        if flow == Flow::Update {
            self.view.set_busy(true);
        }
        self.view.set_output(flow, render::placeholder(flow));
        token
    }

    /// Classify the transport result; stale responses become `Superseded`
    fn settle<T>(&self, flow: Flow, token: GenerationToken, result: ApiResult<T>) -> FlowOutcome<T> {
        if !self.generations.for_flow(flow).is_current(token) {
            tracing::debug!(?flow, "discarding superseded response");
            return FlowOutcome::Superseded;
        }
        match result {
            Ok(response) => FlowOutcome::Ok(response),
            Err(err) => {
                tracing::error!(?flow, error = %err, "request failed");
                FlowOutcome::NetworkError(err)
            }
        }
    }

    /// Render the outcome and restore the trigger, exactly once per live request
    fn finish(&self, flow: Flow, html: Option<String>) {
        if let Some(html) = html {
            self.view.set_output(flow, html);
        }
        self.view.set_trigger_enabled(flow, true);
        if flow == Flow::Update {
            self.view.set_busy(false);
        }
    }

    fn reject<T>(&self, message: String) -> FlowOutcome<T> {
        self.view.prompt(&message);
        FlowOutcome::ValidationError(message)
    }

    /// Submit a free-text status update, then refresh the category list
    pub async fn submit_update(&self, raw_text: &str) -> FlowOutcome<UpdateResponse> {
        let update_text = match validate_update_text(raw_text) {
            Ok(text) => text,
            Err(message) => return self.reject(message),
        };

        let token = self.start(Flow::Update);
        tracing::info!(chars = update_text.len(), "submitting update");
        let result = self.api.process_update(&UpdateRequest { update_text }).await;

        let outcome = self.settle(Flow::Update, token, result);
        if !outcome.is_superseded() {
            if let FlowOutcome::Ok(resp) = &outcome {
                if !resp.success {
                    tracing::warn!(server_message = ?resp.message, "update rejected by server");
                }
            }
            self.finish(Flow::Update, render::update_outcome(&outcome));
        }

        self.refresh_categories().await;
        outcome
    }

    /// Fetch and render overdue tasks grouped by employee
    pub async fn check_overdue(&self) -> FlowOutcome<StaleResponse> {
        let token = self.start(Flow::Overdue);
        let result = self.api.stale_tasks().await;

        let outcome = self.settle(Flow::Overdue, token, result);
        if !outcome.is_superseded() {
            self.finish(Flow::Overdue, render::overdue_outcome(&outcome));
        }
        outcome
    }

    /// Fetch and render open tasks for the selected category
    pub async fn view_category(&self, selected: &str) -> FlowOutcome<CategoryResponse> {
        let category = match validate_category(selected) {
            Ok(category) => category,
            Err(message) => return self.reject(message),
        };

        let token = self.start(Flow::Category);
        tracing::info!(category = %category, "fetching category tasks");
        let result = self.api.tasks_by_category(&category).await;

        let outcome = self.settle(Flow::Category, token, result);
        if !outcome.is_superseded() {
            self.finish(Flow::Category, render::category_outcome(&category, &outcome));
        }
        outcome
    }

    /// Reload the category selector. Failures are logged, never shown,
    /// and leave the current options untouched.
    pub async fn refresh_categories(&self) -> FlowOutcome<CategoriesResponse> {
        let generation = &self.generations.categories;
        let token = generation.begin();
        let result = self.api.categories().await;

        if !generation.is_current(token) {
            tracing::debug!("discarding superseded category list");
            return FlowOutcome::Superseded;
        }
        match result {
            Ok(resp) => {
                if resp.success {
                    tracing::debug!(count = resp.categories.len(), "categories refreshed");
                    self.view.replace_categories(resp.categories.clone());
                } else {
                    tracing::warn!(server_message = ?resp.message, "category refresh rejected by server");
                }
                FlowOutcome::Ok(resp)
            }
            Err(err) => {
                tracing::error!(error = %err, "error refreshing categories");
                FlowOutcome::NetworkError(err)
            }
        }
    }
}
