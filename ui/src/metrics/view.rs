use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use futures_util::StreamExt;

use crate::content::METRICS;
use crate::core::{format, timing};
use crate::i18n;
use crate::t;

use super::animator::{CounterAnimator, FrameStep, Visibility, VISIBILITY_THRESHOLD};
use super::observer::VisibilityWatch;

/// DOM id of the counters' container (also the `#numeros` anchor).
pub const COUNTERS_CONTAINER_ID: &str = "numeros";

#[component]
pub fn MetricsSection() -> Element {
    let _lang = i18n::use_active_language();
    let animator = use_signal(|| CounterAnimator::new(METRICS));
    let lifecycle: Rc<RefCell<CounterLifecycle>> = use_hook(Default::default);

    let coroutine = {
        let lifecycle = lifecycle.clone();
        use_coroutine(move |mut rx: UnboundedReceiver<CounterEvent>| {
            let lifecycle = lifecycle.clone();
            let mut animator = animator;
            async move {
                while let Some(event) = rx.next().await {
                    match event {
                        CounterEvent::Visible(report) => {
                            let started =
                                animator.with_mut(|anim| anim.observe(report, timing::now()));
                            if started {
                                tracing::info!("metrics counters in view; animating");
                                let task = spawn(run_frames(animator));
                                lifecycle.borrow_mut().frames = Some(task);
                            }
                        }
                    }
                }
            }
        })
    };

    {
        let lifecycle = lifecycle.clone();
        use_effect(move || {
            if lifecycle.borrow().armed {
                return;
            }
            let tx = coroutine.tx();
            let watch = VisibilityWatch::arm(
                COUNTERS_CONTAINER_ID,
                VISIBILITY_THRESHOLD,
                move |report| {
                    let _ = tx.unbounded_send(CounterEvent::Visible(report));
                },
            );
            let mut state = lifecycle.borrow_mut();
            state.armed = true;
            state.watch = watch;
        });
    }

    {
        let lifecycle = lifecycle.clone();
        use_drop(move || lifecycle.borrow_mut().teardown());
    }

    let snapshot = animator();

    rsx! {
        section { id: COUNTERS_CONTAINER_ID, class: "section section--bordered",
            h2 { class: "section__title", {t!("metrics-title")} }
            div { class: "metrics__grid",
                for (metric , value) in snapshot.metrics().iter().zip(snapshot.displayed()) {
                    div { key: "{metric.label}", class: "card-frame",
                        div { class: "card metrics__card",
                            div { class: "metrics__value", {format::format_counter(*value, metric.suffix)} }
                            div { class: "metrics__label", "{metric.label}" }
                        }
                    }
                }
            }
        }
    }
}

async fn run_frames(mut animator: Signal<CounterAnimator>) {
    loop {
        let stamp = timing::next_frame().await;
        match animator.with_mut(|anim| anim.advance(stamp)) {
            FrameStep::Continue => {}
            FrameStep::Finished => {
                tracing::debug!("metrics counters reached their targets");
                break;
            }
            FrameStep::Idle => break,
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum CounterEvent {
    Visible(Visibility),
}

/// A running frame loop that can be stopped.
trait FrameLoop {
    fn cancel(self);
}

impl FrameLoop for Task {
    fn cancel(self) {
        Task::cancel(self);
    }
}

/// Resources owned by one mounted counters section. The observer and the
/// frame loop are released together.
struct CounterLifecycle<W = VisibilityWatch, F: FrameLoop = Task> {
    armed: bool,
    watch: Option<W>,
    frames: Option<F>,
}

impl<W, F: FrameLoop> Default for CounterLifecycle<W, F> {
    fn default() -> Self {
        Self {
            armed: false,
            watch: None,
            frames: None,
        }
    }
}

impl<W, F: FrameLoop> CounterLifecycle<W, F> {
    fn teardown(&mut self) {
        if let Some(frames) = self.frames.take() {
            frames.cancel();
        }
        if self.watch.take().is_some() {
            tracing::debug!("metrics counters torn down");
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;

    struct Watch(Rc<Cell<bool>>);

    impl Drop for Watch {
        fn drop(&mut self) {
            self.0.set(true);
        }
    }

    struct Frames(Rc<Cell<u32>>);

    impl FrameLoop for Frames {
        fn cancel(self) {
            self.0.set(self.0.get() + 1);
        }
    }

    fn mounted() -> (CounterLifecycle<Watch, Frames>, Rc<Cell<bool>>, Rc<Cell<u32>>) {
        let disconnected = Rc::new(Cell::new(false));
        let cancelled = Rc::new(Cell::new(0));
        let lifecycle = CounterLifecycle {
            armed: true,
            watch: Some(Watch(disconnected.clone())),
            frames: Some(Frames(cancelled.clone())),
        };
        (lifecycle, disconnected, cancelled)
    }

    #[test]
    fn unmount_disconnects_observer_and_cancels_frames() {
        let (mut lifecycle, disconnected, cancelled) = mounted();
        lifecycle.teardown();
        assert!(disconnected.get());
        assert_eq!(cancelled.get(), 1);
        assert!(lifecycle.watch.is_none());
        assert!(lifecycle.frames.is_none());
    }

    #[test]
    fn teardown_twice_cancels_once() {
        let (mut lifecycle, _disconnected, cancelled) = mounted();
        lifecycle.teardown();
        lifecycle.teardown();
        assert_eq!(cancelled.get(), 1);
    }

    #[test]
    fn teardown_before_trigger_only_drops_the_observer() {
        let disconnected = Rc::new(Cell::new(false));
        let mut lifecycle: CounterLifecycle<Watch, Frames> = CounterLifecycle {
            armed: true,
            watch: Some(Watch(disconnected.clone())),
            frames: None,
        };
        lifecycle.teardown();
        assert!(disconnected.get());
    }

    #[test]
    fn teardown_keeps_the_section_armed() {
        let (mut lifecycle, _, _) = mounted();
        lifecycle.teardown();
        // A torn-down section must not re-arm its observer on a late effect.
        assert!(lifecycle.armed);
    }
}
