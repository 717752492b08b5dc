//! Category Panel Component
//!
//! Category selector, view button and output area. The option list is
//! owned by the store and replaced wholesale on every refresh.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::config::ids;
use crate::flows::use_controller;
use crate::store::{use_app_store, DashboardStateStoreFields};

/// Tasks-by-category viewer
#[component]
pub fn CategoryPanel() -> impl IntoView {
    let store = use_app_store();
    let controller = use_controller();

    let (selected, set_selected) = signal(String::new());

    // Drop a selection whose option disappeared in the last refresh
    Effect::new(move |_| {
        let categories = store.categories().get();
        let current = selected.get_untracked();
        if !current.is_empty() && !categories.contains(&current) {
            set_selected.set(String::new());
        }
    });

    let on_view = move |_| {
        let category = selected.get_untracked();
        let controller = controller.clone();
        spawn_local(async move {
            controller.view_category(&category).await;
        });
    };

    view! {
        <section class="category-section">
            <h4>"Tasks by Project"</h4>
            <div class="category-controls">
                <select
                    id=ids::CATEGORY_DROPDOWN
                    class="form-select"
                    prop:value=move || selected.get()
                    on:change=move |ev| set_selected.set(event_target_value(&ev))
                >
                    <option value="">"Select a category"</option>
                    <For
                        each=move || store.categories().get()
                        // names are unique once stored, see `selectable_categories`
                        key=|category| category.clone()
                        children=move |category| {
                            let label = category.clone();
                            view! { <option value=category>{label}</option> }
                        }
                    />
                </select>
                <button
                    id=ids::CATEGORY_BTN
                    class="btn btn-info"
                    prop:disabled=move || !store.category_enabled().get()
                    on:click=on_view
                >
                    "View Tasks"
                </button>
            </div>
            <div id=ids::CATEGORY_RESULT class="category-result" inner_html=move || store.category_output().get()></div>
        </section>
    }
}
