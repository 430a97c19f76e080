//! Leptos Modal Overlay
//!
//! Backdrop + content panel for Leptos forms.
//! Closes on backdrop click, on the × control, or on Escape.

use leptos::prelude::*;

/// Keys that dismiss the modal
const CLOSE_KEYS: &[&str] = &["Escape", "Esc"];

/// Whether a `KeyboardEvent::key()` value should close the modal
pub fn is_close_key(key: &str) -> bool {
    CLOSE_KEYS.contains(&key)
}

/// Modal overlay
///
/// Clicks inside the content panel are stopped so only the backdrop
/// dismisses. The panel grabs focus on mount so Escape works without
/// clicking into it first.
#[component]
pub fn Modal(
    /// Invoked for every dismiss path
    #[prop(into)]
    on_close: Callback<()>,
    children: Children,
) -> impl IntoView {
    let panel_ref = NodeRef::<leptos::html::Div>::new();

    Effect::new(move |_| {
        if let Some(panel) = panel_ref.get() {
            let _ = panel.focus();
        }
    });

    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        if is_close_key(&ev.key()) {
            ev.prevent_default();
            on_close.run(());
        }
    };

    view! {
        <div class="modalBackdrop" on:click=move |_| on_close.run(())>
            <div
                class="modalContent"
                node_ref=panel_ref
                tabindex="-1"
                on:click=move |ev: web_sys::MouseEvent| ev.stop_propagation()
                on:keydown=on_keydown
            >
                {children()}
                <button
                    type="button"
                    class="modalCloseButton"
                    title="Close"
                    on:click=move |_| on_close.run(())
                >
                    "×"
                </button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_closes() {
        assert!(is_close_key("Escape"));
        assert!(is_close_key("Esc"));
    }

    #[test]
    fn test_other_keys_do_not_close() {
        assert!(!is_close_key("Enter"));
        assert!(!is_close_key("escape"));
        assert!(!is_close_key(""));
    }
}
