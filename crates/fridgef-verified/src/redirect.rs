//! Redirect scheduling for the confirmation screen.
//!
//! The screen owns at most one pending redirect at a time. The handle must
//! be canceled when the screen is torn down so a navigation can never fire
//! against a window that no longer shows the screen.

use std::time::Duration;

use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tokio::time::sleep;

/// Path of the login screen, used when the fallback policy applies.
pub const LOGIN_PATH: &str = "/login";

/// Delay before a scheduled navigation fires.
pub const REDIRECT_DELAY: Duration = Duration::from_millis(1800);

/// How a missing `next` target is handled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RedirectPolicy {
    /// No target, no redirect; the screen stays up until the user acts.
    #[default]
    RequireTarget,
    /// Fall back to the login screen when the link has no target.
    FallbackToLogin,
}

impl RedirectPolicy {
    /// Resolve the destination to redirect to, if any.
    ///
    /// An empty target counts as missing, matching the web flow.
    pub fn resolve(&self, next: Option<&str>) -> Option<String> {
        match next.filter(|target| !target.is_empty()) {
            Some(target) => Some(target.to_string()),
            None => match self {
                RedirectPolicy::RequireTarget => None,
                RedirectPolicy::FallbackToLogin => Some(LOGIN_PATH.to_string()),
            },
        }
    }
}

/// Owned handle to the single scheduled navigation.
///
/// Dropping the handle aborts the timer task, so a replaced or torn-down
/// screen can never produce a late navigation.
#[derive(Debug)]
pub struct PendingRedirect {
    target: String,
    timer: JoinHandle<()>,
}

impl PendingRedirect {
    /// Schedule a one-shot navigation to `target` after `delay`.
    ///
    /// The destination is delivered on `nav_tx` once the delay elapses.
    pub fn schedule(
        target: String,
        delay: Duration,
        nav_tx: UnboundedSender<String>,
    ) -> Self {
        tracing::debug!(
            destination = %target,
            delay_ms = delay.as_millis() as u64,
            "Scheduling redirect"
        );
        let timer = tokio::spawn({
            let target = target.clone();
            async move {
                sleep(delay).await;
                if nav_tx.send(target).is_err() {
                    tracing::debug!("Navigation channel closed before the redirect fired");
                }
            }
        });
        Self { target, timer }
    }

    /// The destination this handle will navigate to.
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Cancel the scheduled navigation.
    pub fn cancel(self) {
        tracing::debug!(destination = %self.target, "Canceling pending redirect");
        self.timer.abort();
    }
}

impl Drop for PendingRedirect {
    fn drop(&mut self) {
        self.timer.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc::unbounded_channel;
    use tokio::task::yield_now;
    use tokio::time::advance;

    #[test]
    fn test_resolve_explicit_target() {
        let target = RedirectPolicy::RequireTarget.resolve(Some("/recipes"));
        assert_eq!(target.as_deref(), Some("/recipes"));
    }

    #[test]
    fn test_resolve_missing_target_is_skipped_by_default() {
        assert_eq!(RedirectPolicy::RequireTarget.resolve(None), None);
    }

    #[test]
    fn test_resolve_missing_target_with_fallback() {
        let target = RedirectPolicy::FallbackToLogin.resolve(None);
        assert_eq!(target.as_deref(), Some(LOGIN_PATH));
    }

    #[test]
    fn test_resolve_empty_target_counts_as_missing() {
        assert_eq!(RedirectPolicy::RequireTarget.resolve(Some("")), None);
        assert_eq!(
            RedirectPolicy::FallbackToLogin.resolve(Some("")).as_deref(),
            Some(LOGIN_PATH)
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_fires_once_at_the_delay() {
        let (tx, mut rx) = unbounded_channel();
        let _pending = PendingRedirect::schedule("/recipes".to_string(), REDIRECT_DELAY, tx);
        yield_now().await;

        advance(Duration::from_millis(1799)).await;
        assert!(rx.try_recv().is_err(), "nothing may fire before the delay");

        advance(Duration::from_millis(1)).await;
        assert_eq!(rx.recv().await.as_deref(), Some("/recipes"));

        advance(Duration::from_secs(10)).await;
        assert!(rx.try_recv().is_err(), "the redirect is one-shot");
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_before_the_delay_never_fires() {
        let (tx, mut rx) = unbounded_channel();
        let pending = PendingRedirect::schedule("/recipes".to_string(), REDIRECT_DELAY, tx);
        yield_now().await;

        advance(Duration::from_millis(1000)).await;
        pending.cancel();

        advance(Duration::from_secs(30)).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_cancels_the_timer() {
        let (tx, mut rx) = unbounded_channel();
        let pending = PendingRedirect::schedule("/recipes".to_string(), REDIRECT_DELAY, tx);
        yield_now().await;
        drop(pending);

        advance(Duration::from_secs(30)).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_replacing_cancels_the_prior_timer() {
        let (tx, mut rx) = unbounded_channel();
        let mut slot = Some(PendingRedirect::schedule(
            "/first".to_string(),
            REDIRECT_DELAY,
            tx.clone(),
        ));
        yield_now().await;

        advance(Duration::from_millis(900)).await;
        let prior = slot.replace(PendingRedirect::schedule(
            "/second".to_string(),
            REDIRECT_DELAY,
            tx,
        ));
        drop(prior);
        yield_now().await;

        assert_eq!(rx.recv().await.as_deref(), Some("/second"));
        advance(Duration::from_secs(10)).await;
        assert!(rx.try_recv().is_err(), "only the latest timer may fire");
    }

    #[tokio::test(start_paused = true)]
    async fn test_target_accessor() {
        let (tx, _rx) = unbounded_channel();
        let pending = PendingRedirect::schedule("/recipes".to_string(), REDIRECT_DELAY, tx);
        assert_eq!(pending.target(), "/recipes");
    }
}
