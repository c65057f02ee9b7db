//! Activation sequence for the confirmation screen.
//!
//! Runs exactly once each time the screen comes up: fire the celebratory
//! burst, resolve the redirect target, and schedule the navigation.

use tokio::sync::mpsc::UnboundedSender;

use crate::confetti::ConfettiBurst;
use crate::redirect::{PendingRedirect, RedirectPolicy, REDIRECT_DELAY};

/// Activate the confirmation screen.
///
/// The burst fires unconditionally; the redirect is scheduled only when the
/// policy resolves a destination. Returns the owned timer handle, which the
/// caller keeps for the screen's lifetime and cancels on teardown.
pub fn activate(
    next: Option<&str>,
    policy: RedirectPolicy,
    celebrate: impl FnOnce(&ConfettiBurst),
    nav_tx: &UnboundedSender<String>,
) -> Option<PendingRedirect> {
    celebrate(&ConfettiBurst::default());

    let target = policy.resolve(next)?;
    tracing::info!(destination = %target, "Redirecting after confirmation");
    Some(PendingRedirect::schedule(target, REDIRECT_DELAY, nav_tx.clone()))
}
