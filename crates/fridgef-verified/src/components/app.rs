//! Root application component and navigation hand-off.

use std::sync::Arc;

use dioxus::prelude::*;
use tokio::sync::mpsc;
use tokio::sync::Mutex;

use fridgef_ui::ThemedRoot;

use crate::departure::departure_url;
use crate::redirect::RedirectPolicy;

use super::verified::VerifiedScreen;

/// Navigation channel sender, shared through the component tree.
///
/// The redirect timer and the action buttons send destinations here; the
/// root component performs the webview hand-off.
#[derive(Clone)]
pub struct NavSender(pub mpsc::UnboundedSender<String>);

/// Root application component.
#[component]
pub fn App(next: Option<String>, policy: RedirectPolicy, app_url: String) -> Element {
    // Theme is set here, where the Dioxus runtime is available.
    use_hook(|| {
        *fridgef_ui::CURRENT_THEME.write() = fridgef_ui::Theme::default();
    });

    let (nav_tx, nav_rx) = use_hook(|| {
        let (tx, rx) = mpsc::unbounded_channel::<String>();
        (NavSender(tx), Arc::new(Mutex::new(rx)))
    });
    use_context_provider(move || nav_tx);

    // Hand-off loop: a destination arriving here leaves the confirmation
    // window for the web app.
    let _nav_loop = use_future(move || {
        let app_url = app_url.clone();
        let nav_rx = Arc::clone(&nav_rx);
        async move {
            let mut rx = nav_rx.lock().await;
            while let Some(destination) = rx.recv().await {
                let url = departure_url(&app_url, &destination);
                tracing::info!(url = %url, "Leaving the confirmation window");
                let js = format!("window.location.replace('{}')", url.replace('\'', "%27"));
                document::eval(&js);
            }
        }
    });

    rsx! {
        ThemedRoot {
            VerifiedScreen { next, policy }
        }
    }
}
