//! Item Listing Component
//!
//! Category picker plus the item grid. Owns its list and filter state and
//! reloads whenever the parent raises `reload`.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api;
use crate::components::{CategoryButton, ItemCard};
use crate::config::Config;
use crate::store::{load_with, ListingState, ListingStateStoreFields, ListingStore, ListingUpdate};

/// Run one load cycle against the API.
///
/// State is only touched while `alive` holds, so a response landing after
/// unmount is dropped.
fn load_items(
    config: Config,
    state: ListingStore,
    alive: Arc<AtomicBool>,
    on_load_completed: Option<Callback<()>>,
) {
    spawn_local(async move {
        let apply = |update: ListingUpdate| {
            if !alive.load(Ordering::Relaxed) {
                return false;
            }
            state.update(|s| s.apply(update));
            true
        };
        let on_loaded = move || {
            if let Some(callback) = on_load_completed {
                callback.run(());
            }
        };
        load_with(
            || api::fetch_items(&config),
            || api::fetch_categories(&config),
            apply,
            on_loaded,
        )
        .await;
    });
}

#[component]
pub fn ItemListing(
    /// Load items whenever this is true
    #[prop(into)]
    reload: Signal<bool>,
    /// Runs after each successful item load; the parent clears `reload` here
    #[prop(optional)]
    on_load_completed: Option<Callback<()>>,
) -> impl IntoView {
    let config = use_context::<Config>().expect("Config should be provided");
    let state: ListingStore = Store::new(ListingState::default());

    let alive = Arc::new(AtomicBool::new(true));
    on_cleanup({
        let alive = alive.clone();
        move || alive.store(false, Ordering::Relaxed)
    });

    Effect::new(move |_| {
        if reload.get() {
            load_items(config.clone(), state, alive.clone(), on_load_completed);
        }
    });

    let filtered = Memo::new(move |_| state.with(|s| s.filtered()));

    let on_select = Callback::new(move |category: String| {
        log::debug!("[LISTING] select category {:?}", category);
        state.update(|s| s.select(category));
    });

    view! {
        <div class="Container">
            <div class="CategorySection">
                <div class="CategoryList">
                    <h2>"Category"</h2>
                    <For
                        each=move || state.categories().get()
                        key=|name| name.clone()
                        children=move |name| {
                            let is_active = {
                                let name = name.clone();
                                Signal::derive(move || state.selected().with(|s| *s == name))
                            };
                            view! {
                                <CategoryButton name=name is_active=is_active on_select=on_select />
                            }
                        }
                    />
                </div>
            </div>

            <div class="ItemList">
                <For
                    each=move || filtered.get()
                    key=|item| item.id
                    children=move |item| view! { <ItemCard item=item /> }
                />
            </div>

            <Show when=move || filtered.with(|items| items.is_empty())>
                <p class="EmptyList">"No items"</p>
            </Show>
        </div>
    }
}
