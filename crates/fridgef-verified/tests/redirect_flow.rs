//! End-to-end redirect scenarios: verification link in, navigation out.

use std::time::Duration;

use tokio::sync::mpsc::unbounded_channel;
use tokio::task::yield_now;
use tokio::time::advance;

use fridgef_verified::activation::activate;
use fridgef_verified::departure::departure_url;
use fridgef_verified::link::VerificationLink;
use fridgef_verified::redirect::RedirectPolicy;

#[tokio::test(start_paused = true)]
async fn verified_link_redirects_after_the_delay() {
    let link = VerificationLink::parse("fridgef://verified?next=/login").unwrap();
    let (tx, mut rx) = unbounded_channel();

    let mut bursts = 0;
    let _pending = activate(
        link.next(),
        RedirectPolicy::RequireTarget,
        |_| bursts += 1,
        &tx,
    );
    assert_eq!(bursts, 1);
    yield_now().await;

    advance(Duration::from_millis(1799)).await;
    assert!(rx.try_recv().is_err(), "no navigation before the delay");

    advance(Duration::from_millis(1)).await;
    let destination = rx.recv().await.unwrap();
    assert_eq!(destination, "/login");
    assert_eq!(
        departure_url("https://app.fridgef.io", &destination),
        "https://app.fridgef.io/login"
    );
}

#[tokio::test(start_paused = true)]
async fn bare_launch_stays_put_under_the_strict_policy() {
    let link = VerificationLink::parse("fridgef://verified").unwrap();
    let (tx, mut rx) = unbounded_channel();

    let pending = activate(link.next(), RedirectPolicy::RequireTarget, |_| {}, &tx);
    assert!(pending.is_none());

    advance(Duration::from_millis(5000)).await;
    assert!(rx.try_recv().is_err());
}

#[tokio::test(start_paused = true)]
async fn bare_launch_falls_back_to_login_when_configured() {
    let link = VerificationLink::parse("fridgef://verified").unwrap();
    let (tx, mut rx) = unbounded_channel();

    let _pending = activate(link.next(), RedirectPolicy::FallbackToLogin, |_| {}, &tx);
    yield_now().await;

    advance(Duration::from_millis(5000)).await;
    assert_eq!(rx.recv().await.as_deref(), Some("/login"));
}

#[tokio::test(start_paused = true)]
async fn teardown_before_the_delay_suppresses_the_redirect() {
    let (tx, mut rx) = unbounded_channel();

    let pending = activate(
        Some("/recipes"),
        RedirectPolicy::RequireTarget,
        |_| {},
        &tx,
    )
    .expect("a supplied target schedules a redirect");
    yield_now().await;

    advance(Duration::from_millis(1000)).await;
    pending.cancel();

    advance(Duration::from_secs(60)).await;
    assert!(rx.try_recv().is_err(), "a canceled redirect never fires");
}
