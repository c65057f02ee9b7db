//! Departure URLs for the navigation hand-off.

/// Resolve a redirect destination against the web app's base URL.
///
/// Absolute http(s) destinations pass through untouched; anything else is
/// treated as a path within the app.
pub fn departure_url(app_url: &str, destination: &str) -> String {
    if destination.starts_with("http://") || destination.starts_with("https://") {
        return destination.to_string();
    }
    let base = app_url.trim_end_matches('/');
    if destination.starts_with('/') {
        format!("{}{}", base, destination)
    } else {
        format!("{}/{}", base, destination)
    }
}
