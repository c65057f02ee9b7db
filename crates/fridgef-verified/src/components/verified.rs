//! The email-verified confirmation screen.

use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;

use fridgef_ui::{PhotoInfo, PhotoStrip, SuccessBadge};

use crate::activation::activate;
use crate::redirect::{PendingRedirect, RedirectPolicy, LOGIN_PATH};

use super::app::NavSender;

/// Stock photos shown under the confirmation message.
fn illustration_photos() -> Vec<PhotoInfo> {
    vec![
        PhotoInfo {
            src: "https://images.unsplash.com/photo-1517959105821-eaf2591984a0?q=80&w=1200&auto=format&fit=crop".to_string(),
            alt: "Fresh ingredients".to_string(),
        },
        PhotoInfo {
            src: "https://images.unsplash.com/photo-1543352634-8730c3b1f1dc?q=80&w=1200&auto=format&fit=crop".to_string(),
            alt: "Kitchen prep".to_string(),
        },
        PhotoInfo {
            src: "https://images.unsplash.com/photo-1544025162-d76694265947?q=80&w=1200&auto=format&fit=crop".to_string(),
            alt: "Healthy bowl".to_string(),
        },
    ]
}

/// Confirmation screen: celebrates, then redirects when the verification
/// link carried a destination.
#[component]
pub fn VerifiedScreen(next: Option<String>, policy: RedirectPolicy) -> Element {
    let nav = use_context::<NavSender>();

    // Owned handle for the single scheduled navigation.
    let pending = use_hook(|| Rc::new(RefCell::new(Option::<PendingRedirect>::None)));

    // Activation runs once per mount, not per re-render.
    {
        let nav = nav.clone();
        let next = next.clone();
        let pending = Rc::clone(&pending);
        use_effect(move || {
            let handle = activate(next.as_deref(), policy, |burst| burst.fire(), &nav.0);
            // Replacing the slot drops (and thereby cancels) any prior timer.
            *pending.borrow_mut() = handle;
        });
    }

    // The redirect must never fire after the screen is gone.
    {
        let pending = Rc::clone(&pending);
        use_drop(move || {
            if let Some(handle) = pending.borrow_mut().take() {
                handle.cancel();
            }
        });
    }

    let continue_target = policy
        .resolve(next.as_deref())
        .unwrap_or_else(|| LOGIN_PATH.to_string());
    let continue_nav = nav.clone();
    let signup_nav = nav;

    rsx! {
        main {
            class: "verified-screen",

            // Ambient background glow
            div { class: "bg-blob bg-blob-blue" }
            div { class: "bg-blob bg-blob-cyan" }

            section {
                class: "verified-card",

                SuccessBadge {}

                h1 { class: "verified-heading", "Email verified" }
                p {
                    class: "verified-message",
                    "Your email is confirmed. Welcome to "
                    span { class: "brand-name", "FridgeF" }
                    "."
                }

                PhotoStrip { photos: illustration_photos() }

                div {
                    class: "verified-actions",
                    button {
                        class: "btn-primary",
                        onclick: move |_| {
                            let _ = continue_nav.0.send(continue_target.clone());
                        },
                        "Continue to app"
                    }
                    button {
                        class: "btn-secondary",
                        onclick: move |_| {
                            let _ = signup_nav.0.send("/signup".to_string());
                        },
                        "Create account"
                    }
                }

                p {
                    class: "verified-footnote",
                    "You'll be redirected automatically. If not, use the button above."
                }
            }
        }
    }
}
