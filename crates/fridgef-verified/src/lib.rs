//! Email-verified confirmation window for FridgeF.
//!
//! Shown when a verification email's callback link opens the app: bursts
//! confetti, renders the confirmation card, and hands the webview off to
//! the web app after a short delay when the link carries a destination.

pub mod activation;
pub mod components;
pub mod confetti;
pub mod departure;
pub mod link;
pub mod redirect;
