//! Update Form Component
//!
//! Free-text status update submission with busy indicator and results area.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::config::ids;
use crate::flows::use_controller;
use crate::store::{use_app_store, DashboardStateStoreFields};

/// Status update form
#[component]
pub fn UpdateForm() -> impl IntoView {
    let store = use_app_store();
    let controller = use_controller();

    let (update_text, set_update_text) = signal(String::new());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = update_text.get_untracked();
        let controller = controller.clone();
        spawn_local(async move {
            controller.submit_update(&text).await;
        });
    };

    view! {
        <section class="update-section">
            <h4>"Post an Update"</h4>
            <form id=ids::UPDATE_FORM class="update-form" on:submit=on_submit>
                <textarea
                    id=ids::UPDATE_TEXT
                    class="update-text"
                    rows="5"
                    placeholder="What did you work on? e.g. Finished the Q3 report, still blocked on API access..."
                    prop:value=move || update_text.get()
                    on:input=move |ev| set_update_text.set(event_target_value(&ev))
                ></textarea>
                <div class="update-actions">
                    <button
                        id=ids::SUBMIT_BTN
                        type="submit"
                        class="btn btn-primary"
                        prop:disabled=move || !store.submit_enabled().get()
                    >
                        "Submit Update"
                    </button>
                    <span
                        id=ids::LOADING_INDICATOR
                        class="loading-indicator"
                        style:display=move || if store.busy().get() { "inline-block" } else { "none" }
                    >
                        "Processing..."
                    </span>
                </div>
            </form>
            <div id=ids::RESULTS class="results" inner_html=move || store.update_output().get()></div>
        </section>
    }
}
