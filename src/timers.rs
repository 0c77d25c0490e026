use dioxus::core::Task;
use dioxus::prelude::*;
use dioxus_router::Navigator;
#[cfg(target_arch = "wasm32")]
use gloo_timers::future::TimeoutFuture;
#[cfg(not(target_arch = "wasm32"))]
use std::time::Duration;

use crate::routes::Route;

/// Delay before the post-success redirect in the connect and unlock flows.
pub const REDIRECT_DELAY_MS: u32 = 2000;

/// Navigation that should happen once a delay has passed.
#[derive(Clone, Debug, PartialEq)]
pub struct PendingRedirect {
    pub to: Route,
    pub after_ms: u32,
}

impl PendingRedirect {
    pub fn to_dashboard() -> Self {
        Self {
            to: Route::Dashboard {},
            after_ms: REDIRECT_DELAY_MS,
        }
    }

    pub fn to_connect() -> Self {
        Self {
            to: Route::Connect {},
            after_ms: REDIRECT_DELAY_MS,
        }
    }
}

/// A single timer slot owned by a component. Starting a new timer cancels
/// the previous one and unmounting the component cancels whatever is left.
#[derive(Clone, Copy)]
pub struct ScopedTimer {
    task: Signal<Option<Task>>,
    label: &'static str,
}

impl ScopedTimer {
    pub fn start_timeout(&mut self, delay_ms: u32, callback: impl FnOnce() + 'static) {
        self.cancel();
        tracing::debug!("{}: timeout armed ({delay_ms}ms)", self.label);
        let mut slot = self.task;
        let task = spawn(async move {
            delay(delay_ms).await;
            slot.set(None);
            callback();
        });
        self.task.set(Some(task));
    }

    pub fn start_interval(&mut self, period_ms: u32, mut callback: impl FnMut() + 'static) {
        self.cancel();
        tracing::debug!("{}: interval armed ({period_ms}ms)", self.label);
        let task = spawn(async move {
            loop {
                delay(period_ms).await;
                callback();
            }
        });
        self.task.set(Some(task));
    }

    pub fn cancel(&mut self) {
        let previous = self.task.write().take();
        if let Some(previous) = previous {
            tracing::debug!("{}: timer cancelled", self.label);
            previous.cancel();
        }
    }

    /// Unmount path: the slot may already be gone with the rest of the scope.
    fn release(&mut self) {
        let previous = match self.task.try_write() {
            Ok(mut slot) => slot.take(),
            Err(_) => None,
        };
        if let Some(previous) = previous {
            tracing::debug!("{}: timer dropped with its component", self.label);
            previous.cancel();
        }
    }
}

pub fn use_scoped_timer(label: &'static str) -> ScopedTimer {
    let task = use_signal(|| None::<Task>);
    let timer = ScopedTimer { task, label };
    use_drop(move || {
        let mut timer = timer;
        timer.release();
    });
    timer
}

/// Schedules `redirect` on `timer`, replacing whatever it was doing.
pub fn schedule_redirect(timer: &mut ScopedTimer, navigator: Navigator, redirect: PendingRedirect) {
    let PendingRedirect { to, after_ms } = redirect;
    tracing::info!("redirect to {to} in {after_ms}ms");
    timer.start_timeout(after_ms, move || {
        navigator.push(to);
    });
}

/// Sleeps for `ms` on whichever executor drives the app.
pub async fn delay(ms: u32) {
    #[cfg(target_arch = "wasm32")]
    TimeoutFuture::new(ms).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(Duration::from_millis(u64::from(ms))).await;
}

/// Stand-in for a network round trip. Await it from a component-scoped
/// `spawn` so unmounting drops the wait.
pub async fn simulated_latency(ms: u32) {
    delay(ms).await;
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus::dioxus_core::{ScopeId, VirtualDom};
    use pretty_assertions::assert_eq;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;
    use std::time::Duration;

    #[derive(Clone, Default)]
    struct Fired(Rc<RefCell<Vec<String>>>);

    #[derive(Clone, Default)]
    struct Ticks(Rc<Cell<u32>>);

    #[derive(Clone)]
    struct Mounted(Rc<Cell<bool>>);

    #[component]
    fn Host() -> Element {
        let mounted = use_context::<Mounted>();
        rsx! {
            if mounted.0.get() {
                RedirectingScreen {}
                TickingScreen {}
            }
        }
    }

    #[component]
    fn RedirectingScreen() -> Element {
        let fired = use_context::<Fired>();
        let mut timer = use_scoped_timer("test-redirect");
        use_hook(move || {
            let stale = fired.clone();
            timer.start_timeout(500, move || stale.0.borrow_mut().push("stale".to_string()));
            let PendingRedirect { to, after_ms } = PendingRedirect::to_dashboard();
            timer.start_timeout(after_ms, move || fired.0.borrow_mut().push(to.to_string()));
        });
        rsx! { div {} }
    }

    #[component]
    fn TickingScreen() -> Element {
        let ticks = use_context::<Ticks>();
        let mut timer = use_scoped_timer("test-ticker");
        use_hook(move || {
            timer.start_interval(1000, move || ticks.0.set(ticks.0.get() + 1));
        });
        rsx! { div {} }
    }

    struct Harness {
        dom: VirtualDom,
        fired: Fired,
        ticks: Ticks,
        mounted: Mounted,
    }

    impl Harness {
        fn mount() -> Self {
            let fired = Fired::default();
            let ticks = Ticks::default();
            let mounted = Mounted(Rc::new(Cell::new(true)));
            let mut dom = VirtualDom::new(Host)
                .with_root_context(fired.clone())
                .with_root_context(ticks.clone())
                .with_root_context(mounted.clone());
            dom.rebuild_in_place();
            Self {
                dom,
                fired,
                ticks,
                mounted,
            }
        }

        async fn advance(&mut self, ms: u64) {
            let deadline = tokio::time::Instant::now() + Duration::from_millis(ms);
            while tokio::time::timeout_at(deadline, self.dom.wait_for_work())
                .await
                .is_ok()
            {
                self.dom.render_immediate_to_vec();
            }
        }

        fn unmount(&mut self) {
            self.mounted.0.set(false);
            self.dom.mark_dirty(ScopeId::APP);
            self.dom.render_immediate_to_vec();
        }

        fn fired(&self) -> Vec<String> {
            self.fired.0.borrow().clone()
        }
    }

    #[test]
    fn dashboard_redirect_waits_two_seconds() {
        let redirect = PendingRedirect::to_dashboard();
        assert_eq!(redirect.after_ms, 2000);
        assert_eq!(redirect.to.to_string(), "/dashboard");
    }

    #[test]
    fn connect_redirect_targets_connect_route() {
        assert_eq!(PendingRedirect::to_connect().to.to_string(), "/connect");
    }

    #[tokio::test(start_paused = true)]
    async fn scheduled_redirect_fires_after_its_delay() {
        let mut harness = Harness::mount();
        harness.advance(1000).await;
        assert!(harness.fired().is_empty());
        harness.advance(1500).await;
        assert_eq!(harness.fired(), vec!["/dashboard".to_string()]);
    }

    #[tokio::test(start_paused = true)]
    async fn restarting_a_timer_drops_the_previous_callback() {
        let mut harness = Harness::mount();
        harness.advance(5000).await;
        assert!(!harness.fired().contains(&"stale".to_string()));
    }

    #[tokio::test(start_paused = true)]
    async fn unmounting_before_the_delay_cancels_the_redirect() {
        let mut harness = Harness::mount();
        harness.advance(1000).await;
        harness.unmount();
        harness.advance(5000).await;
        assert!(harness.fired().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn interval_ticks_until_its_component_unmounts() {
        let mut harness = Harness::mount();
        harness.advance(3500).await;
        assert_eq!(harness.ticks.0.get(), 3);
        harness.unmount();
        harness.advance(5000).await;
        assert_eq!(harness.ticks.0.get(), 3);
    }
}
