//! Entry point for the email-verified confirmation window.
//!
//! The window is opened by the verification email's callback link
//! (`fridgef://verified?next=/recipes`), celebrates the confirmed address,
//! and hands the user off into the FridgeF web app.

use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, LogicalSize, WindowBuilder};
use dioxus::prelude::*;

use fridgef_verified::components::App;
use fridgef_verified::link::VerificationLink;
use fridgef_verified::redirect::RedirectPolicy;

/// Shared design tokens and base styles.
const SHARED_CSS: &str = fridgef_ui::SHARED_CSS;

/// Window-specific CSS embedded at compile time.
const STYLES_CSS: &str = include_str!("../assets/styles.css");

/// Default base URL of the FridgeF web app.
const DEFAULT_APP_URL: &str = "https://app.fridgef.io";

/// Global storage for the parsed launch link.
static LAUNCH_LINK: OnceLock<Option<VerificationLink>> = OnceLock::new();

/// Global storage for the redirect policy.
static REDIRECT_POLICY: OnceLock<RedirectPolicy> = OnceLock::new();

/// Global storage for the web app base URL.
static APP_URL: OnceLock<String> = OnceLock::new();

/// Command line arguments.
#[derive(Parser, Debug)]
#[command(name = "fridgef-verified")]
#[command(about = "Email-verified confirmation window for FridgeF")]
struct Args {
    /// Verification callback link that opened the window
    /// (fridgef://verified?next=/recipes)
    link: Option<String>,

    /// Redirect to the login screen when the link carries no destination
    #[arg(long)]
    default_redirect: bool,

    /// Base URL of the FridgeF web app (also via FRIDGEF_APP_URL)
    #[arg(long)]
    app_url: Option<String>,
}

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(false)
        .init();

    tracing::info!("Starting FridgeF confirmation window");

    let args = Args::parse();

    let link = args.link.as_deref().and_then(|raw| {
        match VerificationLink::parse(raw) {
            Ok(link) => {
                tracing::info!(link = %link, "Launched from verification link");
                Some(link)
            }
            Err(e) => {
                tracing::warn!("Ignoring malformed verification link: {}", e);
                None
            }
        }
    });

    let policy = if args.default_redirect {
        RedirectPolicy::FallbackToLogin
    } else {
        RedirectPolicy::RequireTarget
    };

    let app_url = args
        .app_url
        .or_else(|| std::env::var("FRIDGEF_APP_URL").ok())
        .unwrap_or_else(|| DEFAULT_APP_URL.to_string());

    LAUNCH_LINK.set(link).ok();
    REDIRECT_POLICY.set(policy).ok();
    APP_URL.set(app_url).ok();

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(
                    WindowBuilder::new()
                        .with_title("FridgeF - Email verified")
                        .with_inner_size(LogicalSize::new(680.0, 780.0))
                        .with_resizable(false),
                )
                .with_custom_head(format!(
                    r#"
                    <link rel="preconnect" href="https://fonts.googleapis.com">
                    <link rel="preconnect" href="https://fonts.gstatic.com" crossorigin>
                    <link href="https://fonts.googleapis.com/css2?family=Inter:wght@400;500;600;700&display=swap" rel="stylesheet">
                    <script src="https://cdn.jsdelivr.net/npm/canvas-confetti@1.9.3/dist/confetti.browser.min.js"></script>
                    <style>{}</style>
                    <style>{}</style>
                    "#,
                    SHARED_CSS, STYLES_CSS
                )),
        )
        .launch(RootApp);
}

/// Root component: reads the launch configuration and renders the app.
#[component]
fn RootApp() -> Element {
    let next = LAUNCH_LINK
        .get()
        .and_then(|link| link.as_ref())
        .and_then(|link| link.next().map(str::to_string));
    let policy = REDIRECT_POLICY.get().copied().unwrap_or_default();
    let app_url = APP_URL
        .get()
        .cloned()
        .unwrap_or_else(|| DEFAULT_APP_URL.to_string());

    rsx! {
        App { next, policy, app_url }
    }
}
