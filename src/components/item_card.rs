//! Item Card Component
//!
//! A single tile in the item grid.

use leptos::prelude::*;

use crate::config::Config;
use crate::models::Item;

/// Item image and name. Items without an image show the placeholder.
#[component]
pub fn ItemCard(item: Item) -> impl IntoView {
    let config = use_context::<Config>().expect("Config should be provided");
    let image_url = config.image_url(&item.image_name);

    view! {
        <div class="ItemDisplay">
            <img src=image_url alt=item.name.clone() class="ItemImage" />
            <p>{item.name}</p>
        </div>
    }
}
