//! UI components for the confirmation window.

mod app;
mod verified;

pub use app::{App, NavSender};
pub use verified::VerifiedScreen;
