//! Listing State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.
//! Owned by a single `ItemListing`; nothing else writes to it.

use std::future::Future;

use reactive_stores::Store;

use crate::api::ApiResult;
use crate::filter::{category_names_from_categories, category_names_from_items, filter_items};
use crate::models::{Category, Item, ALL_CATEGORY};

/// Item listing view state with field-level reactivity
#[derive(Clone, Debug, PartialEq, Store)]
pub struct ListingState {
    /// Full item list as last fetched
    pub items: Vec<Item>,
    /// Category picker entries, always starting with "All"
    pub categories: Vec<String>,
    /// Currently selected category name
    pub selected: String,
}

impl Default for ListingState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            categories: vec![ALL_CATEGORY.to_string()],
            selected: ALL_CATEGORY.to_string(),
        }
    }
}

impl ListingState {
    /// Replace the item list wholesale.
    ///
    /// Provisional categories come from the items; the filter goes back to "All".
    pub fn apply_items(&mut self, items: Vec<Item>) {
        self.categories = category_names_from_items(&items);
        self.selected = ALL_CATEGORY.to_string();
        self.items = items;
    }

    /// Overwrite the category list with the canonical one
    pub fn apply_categories(&mut self, categories: &[Category]) {
        self.categories = category_names_from_categories(categories);
    }

    pub fn select(&mut self, category: impl Into<String>) {
        self.selected = category.into();
    }

    /// Items visible under the current selection
    pub fn filtered(&self) -> Vec<Item> {
        filter_items(&self.items, &self.selected)
    }

    pub fn apply(&mut self, update: ListingUpdate) {
        match update {
            ListingUpdate::Items(items) => self.apply_items(items),
            ListingUpdate::Categories(categories) => self.apply_categories(&categories),
        }
    }
}

/// A successful fetch, ready to be written into the listing
#[derive(Clone, Debug, PartialEq)]
pub enum ListingUpdate {
    Items(Vec<Item>),
    Categories(Vec<Category>),
}

/// Type alias for the store
pub type ListingStore = Store<ListingState>;

/// One load cycle: items, then `on_loaded`, then the canonical categories.
///
/// `apply` writes an update and returns false once the listing is gone,
/// which stops the cycle. A failed items fetch touches nothing; a failed
/// categories fetch keeps the provisional list. Returns whether items applied.
pub async fn load_with<I, IFut, C, CFut>(
    fetch_items: I,
    fetch_categories: C,
    mut apply: impl FnMut(ListingUpdate) -> bool,
    on_loaded: impl FnOnce(),
) -> bool
where
    I: FnOnce() -> IFut,
    IFut: Future<Output = ApiResult<Vec<Item>>>,
    C: FnOnce() -> CFut,
    CFut: Future<Output = ApiResult<Vec<Category>>>,
{
    let items = match fetch_items().await {
        Ok(items) => items,
        Err(e) => {
            log::error!("[LISTING] GET /items error: {}", e);
            return false;
        }
    };
    log::info!("[LISTING] GET /items success: {} items", items.len());
    if !apply(ListingUpdate::Items(items)) {
        return false;
    }
    on_loaded();

    match fetch_categories().await {
        Ok(categories) => {
            log::info!("[LISTING] GET /categories success: {} categories", categories.len());
            apply(ListingUpdate::Categories(categories));
        }
        Err(e) => log::error!("[LISTING] GET /categories error: {}", e),
    }
    true
}
