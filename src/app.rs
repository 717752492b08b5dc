//! Dashboard App
//!
//! Root component: builds the controller, provides it and the store as
//! context, and loads the category options on mount.

use std::sync::Arc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api::HttpApi;
use crate::components::{CategoryPanel, OverduePanel, UpdateForm};
use crate::config::ApiConfig;
use crate::flows::{Controller, DashboardController};
use crate::store::DashboardState;

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(DashboardState::default());
    provide_context(store);

    let controller: Controller = Arc::new(DashboardController::new(
        HttpApi::new(ApiConfig::from_document()),
        store,
    ));
    provide_context(controller.clone());

    // Initial option list for the category selector
    Effect::new(move |_| {
        let controller = controller.clone();
        spawn_local(async move {
            controller.refresh_categories().await;
        });
    });

    view! {
        <div class="dashboard container">
            <h1>"Team Task Dashboard"</h1>
            <UpdateForm />
            <div class="dashboard-row">
                <OverduePanel />
                <CategoryPanel />
            </div>
        </div>
    }
}
