//! Dashboard State Store
//!
//! The page's view model. Uses Leptos reactive_stores for fine-grained
//! reactivity; flows only mutate it through the [`ViewModel`] setters.

use std::collections::HashSet;

use leptos::prelude::*;
use reactive_stores::Store;

/// The three user-triggered flows, each owning a trigger and an output area
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Flow {
    Update,
    Overdue,
    Category,
}

/// Page state with field-level reactivity
#[derive(Clone, Debug, Store)]
pub struct DashboardState {
    /// Rendered HTML of the update results area
    pub update_output: String,
    /// Rendered HTML of the overdue results area
    pub overdue_output: String,
    /// Rendered HTML of the category results area
    pub category_output: String,
    pub submit_enabled: bool,
    pub overdue_enabled: bool,
    pub category_enabled: bool,
    /// Busy indicator next to the update form
    pub busy: bool,
    /// Options of the category selector, in backend order
    pub categories: Vec<String>,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self {
            update_output: String::new(),
            overdue_output: String::new(),
            category_output: String::new(),
            submit_enabled: true,
            overdue_enabled: true,
            category_enabled: true,
            busy: false,
            categories: Vec::new(),
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<DashboardState>;

/// Get the dashboard store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

/// Setter operations a flow may perform on the page
pub trait ViewModel {
    fn set_trigger_enabled(&self, flow: Flow, enabled: bool);

    fn set_busy(&self, busy: bool);

    fn set_output(&self, flow: Flow, html: String);

    /// Replace every category option with `categories`, in order
    fn replace_categories(&self, categories: Vec<String>);

    /// Blocking validation prompt; never goes to an output area
    fn prompt(&self, message: &str);
}

/// Category names usable as selector options, order preserved.
/// Blank names are dropped since an empty value means "nothing selected";
/// repeats keep their first position so option keys stay unique.
pub fn selectable_categories(categories: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    categories
        .into_iter()
        .filter(|c| !c.trim().is_empty())
        .filter(|c| seen.insert(c.clone()))
        .collect()
}

impl ViewModel for AppStore {
    fn set_trigger_enabled(&self, flow: Flow, enabled: bool) {
        match flow {
            Flow::Update => self.submit_enabled().set(enabled),
            Flow::Overdue => self.overdue_enabled().set(enabled),
            Flow::Category => self.category_enabled().set(enabled),
        }
    }

    fn set_busy(&self, busy: bool) {
        self.busy().set(busy);
    }

    fn set_output(&self, flow: Flow, html: String) {
        match flow {
            Flow::Update => self.update_output().set(html),
            Flow::Overdue => self.overdue_output().set(html),
            Flow::Category => self.category_output().set(html),
        }
    }

    fn replace_categories(&self, categories: Vec<String>) {
        self.categories().set(selectable_categories(categories));
    }

    fn prompt(&self, message: &str) {
        if let Some(window) = web_sys::window() {
            if window.alert_with_message(message).is_err() {
                tracing::warn!(prompt = message, "alert unavailable");
            }
        }
    }
}
