//! Overdue Panel Component

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::config::ids;
use crate::flows::use_controller;
use crate::store::{use_app_store, DashboardStateStoreFields};

/// Overdue-task check button and its output area
#[component]
pub fn OverduePanel() -> impl IntoView {
    let store = use_app_store();
    let controller = use_controller();

    let on_check = move |_| {
        let controller = controller.clone();
        spawn_local(async move {
            controller.check_overdue().await;
        });
    };

    view! {
        <section class="overdue-section">
            <h4>"Overdue Tasks"</h4>
            <button
                id=ids::REMINDER_BTN
                class="btn btn-warning"
                prop:disabled=move || !store.overdue_enabled().get()
                on:click=on_check
            >
                "Check Overdue Tasks"
            </button>
            <div id=ids::REMINDER_OUTPUT class="reminder-output" inner_html=move || store.overdue_output().get()></div>
        </section>
    }
}
