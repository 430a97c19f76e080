//! Submission Drafts
//!
//! Form state for the new-item and new-category modals, plus the shared
//! settle step that runs after a submission request.

use std::future::Future;

use crate::api::{ApiResult, SubmitStatus};

// ========================
// Multipart Field Names
// ========================

pub const FIELD_NAME: &str = "name";
pub const FIELD_CATEGORY: &str = "category";
pub const FIELD_IMAGE: &str = "image";

// ========================
// Item Draft
// ========================

/// Uncommitted new-item form input.
///
/// Generic over the file handle so the form logic runs without a browser.
#[derive(Clone, Debug, PartialEq)]
pub struct ItemDraft<F = web_sys::File> {
    pub name: String,
    pub category: String,
    pub image: Option<F>,
}

impl<F> Default for ItemDraft<F> {
    fn default() -> Self {
        Self {
            name: String::new(),
            category: String::new(),
            image: None,
        }
    }
}

/// A complete item draft, borrowed for the duration of the request
#[derive(Debug, PartialEq)]
pub struct NewItem<'a, F> {
    pub name: &'a str,
    pub category: &'a str,
    pub image: &'a F,
}

impl<F> NewItem<'_, F> {
    /// Text parts of the multipart body, in send order
    pub fn text_fields(&self) -> [(&'static str, &str); 2] {
        [(FIELD_NAME, self.name), (FIELD_CATEGORY, self.category)]
    }
}

impl<F> ItemDraft<F> {
    /// Update a text field by its input name. Returns false for unknown names.
    pub fn set_text_field(&mut self, field: &str, value: String) -> bool {
        match field {
            FIELD_NAME => self.name = value,
            FIELD_CATEGORY => self.category = value,
            other => {
                log::warn!("[SUBMIT] ignoring unknown item field {:?}", other);
                return false;
            }
        }
        true
    }

    /// Replace the selected image (None clears it)
    pub fn set_image(&mut self, image: Option<F>) {
        self.image = image;
    }

    /// All three fields present
    pub fn ready(&self) -> Option<NewItem<'_, F>> {
        if self.name.is_empty() || self.category.is_empty() {
            return None;
        }
        let image = self.image.as_ref()?;
        Some(NewItem {
            name: &self.name,
            category: &self.category,
            image,
        })
    }
}

// ========================
// Category Draft
// ========================

#[derive(Clone, Debug, Default, PartialEq)]
pub struct CategoryDraft {
    pub name: String,
}

impl CategoryDraft {
    pub fn ready(&self) -> Option<&str> {
        if self.name.is_empty() {
            None
        } else {
            Some(&self.name)
        }
    }
}

// ========================
// Modal Visibility
// ========================

/// Which submission modals are open. The two flags are independent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FormVisibility {
    pub item_form: bool,
    pub category_form: bool,
}

impl FormVisibility {
    pub fn toggle_item(&mut self) {
        self.item_form = !self.item_form;
    }

    pub fn toggle_category(&mut self) {
        self.category_form = !self.category_form;
    }

    pub fn close_item(&mut self) {
        self.item_form = false;
    }

    pub fn close_category(&mut self) {
        self.category_form = false;
    }
}

// ========================
// Settle Step
// ========================

/// Send a submission and settle it.
///
/// Any completed response counts as done: the status is logged, not
/// inspected, and `on_settled` runs once. A transport failure is logged and
/// `on_settled` is dropped without running. Returns whether it ran.
pub async fn submit_with<P, S, Fut>(label: &str, payload: P, send: S, on_settled: impl FnOnce()) -> bool
where
    S: FnOnce(P) -> Fut,
    Fut: Future<Output = ApiResult<SubmitStatus>>,
{
    match send(payload).await {
        Ok(status) => {
            log::info!("[SUBMIT] {} status: {} {}", label, status.code, status.text);
            on_settled();
            true
        }
        Err(e) => {
            log::error!("[SUBMIT] {} error: {}", label, e);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiError;
    use futures::executor::block_on;
    use std::cell::{Cell, RefCell};

    type FakeFile = &'static str;

    fn filled_draft() -> ItemDraft<FakeFile> {
        let mut draft = ItemDraft::default();
        draft.set_text_field("name", "Shoe".into());
        draft.set_text_field("category", "Footwear".into());
        draft.set_image(Some("shoe.jpg"));
        draft
    }

    fn ok_status() -> ApiResult<SubmitStatus> {
        Ok(SubmitStatus { code: 200, text: "OK".into() })
    }

    #[test]
    fn test_set_text_field_by_name() {
        let mut draft = ItemDraft::<FakeFile>::default();
        assert!(draft.set_text_field("name", "Lamp".into()));
        assert!(draft.set_text_field("category", "Home".into()));
        assert!(!draft.set_text_field("price", "10".into()));
        assert_eq!(draft.name, "Lamp");
        assert_eq!(draft.category, "Home");
    }

    #[test]
    fn test_image_replaces_previous() {
        let mut draft = ItemDraft::<FakeFile>::default();
        draft.set_image(Some("first.png"));
        draft.set_image(Some("second.png"));
        assert_eq!(draft.image, Some("second.png"));
        draft.set_image(None);
        assert!(draft.image.is_none());
    }

    #[test]
    fn test_ready_requires_all_fields() {
        let mut draft = ItemDraft::<FakeFile>::default();
        assert!(draft.ready().is_none());
        draft.set_text_field("name", "Shoe".into());
        draft.set_text_field("category", "Footwear".into());
        assert!(draft.ready().is_none());
        draft.set_image(Some("shoe.jpg"));
        let item = draft.ready().unwrap();
        assert_eq!(item.text_fields(), [("name", "Shoe"), ("category", "Footwear")]);
        assert_eq!(*item.image, "shoe.jpg");

        draft.set_text_field("category", String::new());
        assert!(draft.ready().is_none());
    }

    #[test]
    fn test_category_draft_ready() {
        let mut draft = CategoryDraft::default();
        assert!(draft.ready().is_none());
        draft.name = "Garden".into();
        assert_eq!(draft.ready(), Some("Garden"));
    }

    #[test]
    fn test_visibility_flags_independent() {
        let mut vis = FormVisibility::default();
        vis.toggle_item();
        assert!(vis.item_form);
        assert!(!vis.category_form);
        vis.toggle_category();
        assert!(vis.item_form && vis.category_form);
        vis.close_item();
        assert!(!vis.item_form);
        assert!(vis.category_form);
        vis.toggle_category();
        assert_eq!(vis, FormVisibility::default());
    }

    #[test]
    fn test_submit_item_sends_once_then_settles_once() {
        let draft = filled_draft();
        let sent = RefCell::new(Vec::new());
        let events = RefCell::new(Vec::new());
        let settled = Cell::new(0);

        let item = draft.ready().unwrap();
        let done = block_on(submit_with(
            "POST /items",
            item,
            |item: NewItem<'_, FakeFile>| {
                let mut fields: Vec<(String, String)> = item
                    .text_fields()
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect();
                fields.push((FIELD_IMAGE.to_string(), item.image.to_string()));
                sent.borrow_mut().push(fields);
                events.borrow_mut().push("post");
                async { ok_status() }
            },
            || {
                events.borrow_mut().push("close");
                settled.set(settled.get() + 1);
            },
        ));

        assert!(done);
        assert_eq!(settled.get(), 1);
        assert_eq!(*events.borrow(), ["post", "close"]);
        let sent = sent.into_inner();
        assert_eq!(sent.len(), 1);
        assert_eq!(
            sent[0],
            [
                ("name".to_string(), "Shoe".to_string()),
                ("category".to_string(), "Footwear".to_string()),
                ("image".to_string(), "shoe.jpg".to_string()),
            ]
        );
    }

    #[test]
    fn test_server_error_status_still_settles() {
        let settled = Cell::new(false);
        let done = block_on(submit_with(
            "POST /categories",
            "Garden",
            |_| async { Ok(SubmitStatus { code: 500, text: "Internal Server Error".into() }) },
            || settled.set(true),
        ));
        assert!(done);
        assert!(settled.get());
    }

    #[test]
    fn test_transport_failure_does_not_settle() {
        let settled = Cell::new(false);
        let done = block_on(submit_with(
            "POST /items",
            (),
            |_| async { Err(ApiError::Network("Failed to fetch".into())) },
            || settled.set(true),
        ));
        assert!(!done);
        assert!(!settled.get());
    }
}
