//! Category Button Component

use leptos::prelude::*;

/// One entry in the category picker
#[component]
pub fn CategoryButton(
    name: String,
    #[prop(into)] is_active: Signal<bool>,
    on_select: Callback<String>,
) -> impl IntoView {
    let label = name.clone();

    view! {
        <button
            type="button"
            class=move || if is_active.get() { "CategoryButton active" } else { "CategoryButton" }
            on:click=move |_| on_select.run(name.clone())
        >
            {label}
        </button>
    }
}
