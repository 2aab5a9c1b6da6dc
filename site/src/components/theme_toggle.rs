//! Theme toggle button.

use leptos::prelude::*;

use crate::theme::{TOGGLE_BUTTON_ID, ThemeMode};

/// The button the browser-side toggle binds to.
///
/// Rendered with the label for the initial mode; the click handler is
/// attached after load by `theme::bind_document`.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    view! {
        <button id=TOGGLE_BUTTON_ID class="theme-toggle" type="button">
            {ThemeMode::default().toggle_label()}
        </button>
    }
}
