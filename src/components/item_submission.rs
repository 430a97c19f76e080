//! Item Submission Component
//!
//! "Create" buttons and the two modal forms behind them.
//! Drafts live here so closing a modal resets them.

use leptos::prelude::*;
use leptos_modal::Modal;

use crate::components::{CategoryForm, ItemForm};
use crate::draft::{CategoryDraft, FormVisibility, ItemDraft};

#[component]
pub fn ItemSubmission(
    /// Runs once per completed submission (item or category)
    #[prop(optional)]
    on_completed: Option<Callback<()>>,
) -> impl IntoView {
    let visibility = RwSignal::new(FormVisibility::default());
    let item_draft = RwSignal::new_local(ItemDraft::default());
    let category_draft = RwSignal::new(CategoryDraft::default());

    let close_item_form = Callback::new(move |_: ()| {
        visibility.update(|v| v.close_item());
        item_draft.set(ItemDraft::default());
    });
    let close_category_form = Callback::new(move |_: ()| {
        visibility.update(|v| v.close_category());
        category_draft.set(CategoryDraft::default());
    });

    // Close first, then tell the parent
    let item_submitted = Callback::new(move |_: ()| {
        close_item_form.run(());
        if let Some(callback) = on_completed {
            callback.run(());
        }
    });
    let category_submitted = Callback::new(move |_: ()| {
        close_category_form.run(());
        if let Some(callback) = on_completed {
            callback.run(());
        }
    });

    let toggle_item_form = move |_| {
        if visibility.get_untracked().item_form {
            close_item_form.run(());
        } else {
            visibility.update(|v| v.toggle_item());
        }
    };
    let toggle_category_form = move |_| {
        if visibility.get_untracked().category_form {
            close_category_form.run(());
        } else {
            visibility.update(|v| v.toggle_category());
        }
    };

    view! {
        <div class="Listing">
            <div class="NavButton">
                <button type="button" class="CreateButton" on:click=toggle_item_form>
                    "Create an item"
                </button>
                <button type="button" class="CreateButton" on:click=toggle_category_form>
                    "Create a category"
                </button>
            </div>

            <Show when=move || visibility.with(|v| v.item_form)>
                <Modal on_close=close_item_form>
                    <ItemForm draft=item_draft on_submitted=item_submitted />
                </Modal>
            </Show>

            <Show when=move || visibility.with(|v| v.category_form)>
                <Modal on_close=close_category_form>
                    <CategoryForm draft=category_draft on_submitted=category_submitted />
                </Modal>
            </Show>
        </div>
    }
}
