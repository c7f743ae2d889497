//! View synchronizer lifecycle and transition tests
//!
//! All tests run with a paused clock; time only moves when a test advances
//! it, which makes tick boundaries exact.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use agentdeck_app::domains::auth::sync::{PointerEvents, ViewSync};
use agentdeck_app::domains::auth::types::ViewMode;
use agentdeck_app::widget::rendered::{RenderNode, RenderSurface, RenderedOutput};
use tokio::time::advance;

fn reset_tree() -> RenderNode {
    RenderNode::container(vec![
        RenderNode::input("Your email address"),
        RenderNode::button("Send reset password instructions"),
    ])
}

fn sign_in_tree() -> RenderNode {
    RenderNode::container(vec![
        RenderNode::input("Your email address"),
        RenderNode::button("Sign in"),
        RenderNode::anchor("Forgot your password?"),
    ])
}

/// Give the worker task a chance to run without moving the clock.
async fn settle() {
    for _ in 0..16 {
        tokio::task::yield_now().await;
    }
}

/// Rendered-output wrapper counting how often it is sampled.
struct CountingSurface {
    surface: RenderSurface,
    samples: AtomicUsize,
}

impl CountingSurface {
    fn new() -> Self {
        Self {
            surface: RenderSurface::new(),
            samples: AtomicUsize::new(0),
        }
    }

    fn sample_count(&self) -> usize {
        self.samples.load(Ordering::SeqCst)
    }
}

impl RenderedOutput for CountingSurface {
    fn snapshot(&self) -> RenderNode {
        self.samples.fetch_add(1, Ordering::SeqCst);
        self.surface.snapshot()
    }
}

#[tokio::test(start_paused = true)]
async fn initial_probe_runs_before_first_tick() {
    let surface = RenderSurface::new();
    surface.publish(reset_tree());

    let mut sync = ViewSync::start(Arc::new(surface), PointerEvents::new().subscribe());

    // No time has passed; the synchronous initial probe already saw the
    // affordance
    assert_eq!(sync.current(), ViewMode::ForgotPassword);
    sync.stop();
}

#[tokio::test(start_paused = true)]
async fn empty_tree_starts_in_sign_in() {
    let mut sync = ViewSync::start(
        Arc::new(RenderSurface::new()),
        PointerEvents::new().subscribe(),
    );
    assert_eq!(sync.current(), ViewMode::SignIn);
    sync.stop();
}

#[tokio::test(start_paused = true)]
async fn affordance_injection_detected_after_one_poll() {
    let surface = RenderSurface::new();
    surface.publish(sign_in_tree());
    let handle = surface.clone();

    let mut sync = ViewSync::start(Arc::new(surface), PointerEvents::new().subscribe());
    settle().await;
    assert_eq!(sync.current(), ViewMode::SignIn);

    handle.publish(reset_tree());
    advance(ViewSync::POLL_INTERVAL).await;
    settle().await;

    assert_eq!(sync.current(), ViewMode::ForgotPassword);
    sync.stop();
}

#[tokio::test(start_paused = true)]
async fn probe_sequence_notifies_only_on_change() {
    let surface = RenderSurface::new();
    surface.publish(sign_in_tree());
    let handle = surface.clone();

    let mut sync = ViewSync::start(Arc::new(surface), PointerEvents::new().subscribe());
    let mut changes = sync.subscribe();
    let mut notifications = 0;

    let count_notifications = |changes: &mut tokio::sync::watch::Receiver<ViewMode>| {
        if changes.has_changed().expect("store alive") {
            changes.mark_unchanged();
            true
        } else {
            false
        }
    };

    // Sampled results across ticks: [false, false, true, true, false]
    settle().await;
    assert!(!count_notifications(&mut changes));

    advance(ViewSync::POLL_INTERVAL).await; // false
    settle().await;
    assert!(!count_notifications(&mut changes));

    handle.publish(reset_tree());
    advance(ViewSync::POLL_INTERVAL).await; // true -> transition
    settle().await;
    if count_notifications(&mut changes) {
        notifications += 1;
    }

    advance(ViewSync::POLL_INTERVAL).await; // true -> no-op
    settle().await;
    if count_notifications(&mut changes) {
        notifications += 1;
    }

    handle.publish(sign_in_tree());
    advance(ViewSync::POLL_INTERVAL).await; // false -> transition
    settle().await;
    if count_notifications(&mut changes) {
        notifications += 1;
    }

    // Two renders, not five
    assert_eq!(notifications, 2);
    assert_eq!(sync.current(), ViewMode::SignIn);
    sync.stop();
}

#[tokio::test(start_paused = true)]
async fn click_then_mutation_is_detected_before_any_tick() {
    let surface = RenderSurface::new();
    surface.publish(sign_in_tree());
    let handle = surface.clone();
    let pointer_events = PointerEvents::new();

    let mut sync = ViewSync::start(Arc::new(surface), pointer_events.subscribe());
    settle().await;

    // Click, then a DOM mutation lands within the settle delay
    pointer_events.notify();
    settle().await;
    handle.publish(reset_tree());

    // Only the click-settle delay elapses: well short of the first 300ms
    // periodic tick
    advance(ViewSync::CLICK_SETTLE_DELAY).await;
    settle().await;

    assert_eq!(sync.current(), ViewMode::ForgotPassword);
    sync.stop();
}

#[tokio::test(start_paused = true)]
async fn stop_before_first_tick_leaves_nothing_running() {
    let surface = RenderSurface::new();
    let handle = surface.clone();

    let mut sync = ViewSync::start(Arc::new(surface), PointerEvents::new().subscribe());
    let changes = sync.subscribe();
    sync.stop();
    settle().await;

    assert!(!sync.is_running());

    // Nothing observes the tree anymore
    handle.publish(reset_tree());
    advance(ViewSync::POLL_INTERVAL * 4).await;
    settle().await;

    assert_eq!(sync.current(), ViewMode::SignIn);
    assert!(!changes.has_changed().expect("store alive"));
}

#[tokio::test(start_paused = true)]
async fn stop_freezes_probe_call_count() {
    let surface = Arc::new(CountingSurface::new());
    let pointer_events = PointerEvents::new();

    let mut sync = ViewSync::start(
        Arc::clone(&surface) as Arc<dyn RenderedOutput>,
        pointer_events.subscribe(),
    );
    assert_eq!(surface.sample_count(), 1); // initial probe

    advance(ViewSync::POLL_INTERVAL).await;
    settle().await;
    assert_eq!(surface.sample_count(), 2);

    sync.stop();
    settle().await;
    let frozen = surface.sample_count();

    pointer_events.notify();
    advance(ViewSync::POLL_INTERVAL * 10).await;
    settle().await;

    assert_eq!(surface.sample_count(), frozen);
}

#[tokio::test(start_paused = true)]
async fn drop_stops_the_worker() {
    let surface = RenderSurface::new();
    let handle = surface.clone();

    let sync = ViewSync::start(Arc::new(surface), PointerEvents::new().subscribe());
    let changes = sync.subscribe();
    drop(sync);
    settle().await;

    handle.publish(reset_tree());
    advance(ViewSync::POLL_INTERVAL * 4).await;
    settle().await;

    assert_eq!(*changes.borrow(), ViewMode::SignIn);
}

#[tokio::test(start_paused = true)]
async fn closed_pointer_bus_degrades_to_poll_only() {
    let surface = RenderSurface::new();
    surface.publish(sign_in_tree());
    let handle = surface.clone();

    let pointer_events = PointerEvents::new();
    let subscription = pointer_events.subscribe();
    let mut sync = ViewSync::start(Arc::new(surface), subscription);
    settle().await;

    // Dropping the bus closes the subscription; polling must keep working
    drop(pointer_events);
    settle().await;

    handle.publish(reset_tree());
    advance(ViewSync::POLL_INTERVAL).await;
    settle().await;

    assert_eq!(sync.current(), ViewMode::ForgotPassword);
    assert!(sync.is_running());
    sync.stop();
}
