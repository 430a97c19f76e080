//! Mercari Web App
//!
//! Page shell: submission controls above the item listing.

use leptos::prelude::*;

use crate::components::{ItemListing, ItemSubmission};
use crate::config::Config;

#[component]
pub fn App() -> impl IntoView {
    provide_context(Config::from_env());

    // Raised by a finished submission, cleared once the listing has reloaded
    let reload = RwSignal::new(true);

    view! {
        <div class="App">
            <header class="Title">
                <p>
                    <b>"Simple Mercari"</b>
                </p>
            </header>
            <div>
                <ItemSubmission on_completed=Callback::new(move |_: ()| reload.set(true)) />
            </div>
            <div>
                <ItemListing
                    reload=reload
                    on_load_completed=Callback::new(move |_: ()| reload.set(false))
                />
            </div>
        </div>
    }
}
