//! UI Components
//!
//! Leptos components for the storefront page.

mod category_button;
mod category_form;
mod item_card;
mod item_form;
mod item_listing;
mod item_submission;

pub use category_button::CategoryButton;
pub use category_form::CategoryForm;
pub use item_card::ItemCard;
pub use item_form::ItemForm;
pub use item_listing::ItemListing;
pub use item_submission::ItemSubmission;
