//! Circular success badge shown at the top of confirmation cards.

use dioxus::prelude::*;

/// Round check-mark badge confirming a completed step.
#[component]
pub fn SuccessBadge() -> Element {
    rsx! {
        div {
            class: "success-badge",
            span { class: "success-badge-icon", "\u{2705}" }
        }
    }
}
