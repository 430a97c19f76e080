//! New Item Form Component
//!
//! Name, category and image inputs; posts a multipart body to `/items`.

use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::HtmlInputElement;

use crate::api;
use crate::config::Config;
use crate::draft::{submit_with, ItemDraft, FIELD_CATEGORY, FIELD_IMAGE, FIELD_NAME};

#[component]
pub fn ItemForm(
    draft: RwSignal<ItemDraft, LocalStorage>,
    on_submitted: Callback<()>,
) -> impl IntoView {
    let config = use_context::<Config>().expect("Config should be provided");

    // Text fields update by their `name` attribute
    let set_text_field = move |input: HtmlInputElement| {
        draft.update(|d| {
            d.set_text_field(&input.name(), input.value());
        });
    };

    let set_image = move |input: HtmlInputElement| {
        let file = input.files().and_then(|files| files.get(0));
        if let Some(file) = &file {
            log::debug!("[SUBMIT] image selected: {} ({} bytes)", file.name(), file.size());
        }
        draft.update(|d| d.set_image(file));
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let current = draft.get_untracked();
        if current.ready().is_none() {
            log::warn!("[SUBMIT] item form incomplete, not sending");
            return;
        }
        let config = config.clone();
        spawn_local(async move {
            let Some(item) = current.ready() else { return };
            submit_with(
                "POST /items",
                item,
                move |item| async move { api::create_item(&config, &item).await },
                move || on_submitted.run(()),
            )
            .await;
        });
    };

    view! {
        <form on:submit=on_submit>
            <label for=FIELD_NAME class="ItemName">"Name:"</label>
            <input
                type="text"
                name=FIELD_NAME
                id=FIELD_NAME
                placeholder="name"
                required=true
                prop:value=move || draft.with(|d| d.name.clone())
                on:input=move |ev| set_text_field(event_target::<HtmlInputElement>(&ev))
            />
            <label for=FIELD_CATEGORY class="ItemCategory">"Category:"</label>
            <input
                type="text"
                name=FIELD_CATEGORY
                id=FIELD_CATEGORY
                placeholder="category"
                required=true
                prop:value=move || draft.with(|d| d.category.clone())
                on:input=move |ev| set_text_field(event_target::<HtmlInputElement>(&ev))
            />
            <label for=FIELD_IMAGE class="ItemImage">"Image:"</label>
            <input
                type="file"
                name=FIELD_IMAGE
                id=FIELD_IMAGE
                accept="image/*"
                required=true
                on:change=move |ev| set_image(event_target::<HtmlInputElement>(&ev))
            />
            <button type="submit">"List this item"</button>
        </form>
    }
}
