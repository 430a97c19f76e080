//! New Category Form Component

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::config::Config;
use crate::draft::{submit_with, CategoryDraft};

const CATEGORY_INPUT_ID: &str = "categoryName";

/// Single-field form; posts a multipart body to `/categories`
#[component]
pub fn CategoryForm(
    draft: RwSignal<CategoryDraft>,
    on_submitted: Callback<()>,
) -> impl IntoView {
    let config = use_context::<Config>().expect("Config should be provided");

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let current = draft.get_untracked();
        let Some(name) = current.ready().map(str::to_string) else {
            log::warn!("[SUBMIT] category name empty, not sending");
            return;
        };
        let config = config.clone();
        spawn_local(async move {
            submit_with(
                "POST /categories",
                name,
                move |name| async move { api::create_category(&config, &name).await },
                move || on_submitted.run(()),
            )
            .await;
        });
    };

    view! {
        <form on:submit=on_submit>
            <label for=CATEGORY_INPUT_ID class="CategoryName">"Category Name:"</label>
            <input
                type="text"
                name=CATEGORY_INPUT_ID
                id=CATEGORY_INPUT_ID
                placeholder="new category"
                required=true
                prop:value=move || draft.with(|d| d.name.clone())
                on:input=move |ev| draft.update(|d| d.name = event_target_value(&ev))
            />
            <button type="submit">"Add a category"</button>
        </form>
    }
}
