//! Clocks, sleeps and animation-frame waits.
//!
//! On `wasm32` the clock is `performance.now()` and frames come from
//! `requestAnimationFrame`. Native builds (tests, tooling) use a monotonic
//! process clock and a ~60 Hz sleep so the same async code paths still run.

/// Milliseconds on the page's high-resolution clock.
pub type InstantStamp = f64;

#[cfg(not(target_arch = "wasm32"))]
static ORIGIN: once_cell::sync::Lazy<std::time::Instant> =
    once_cell::sync::Lazy::new(std::time::Instant::now);

#[cfg(not(target_arch = "wasm32"))]
const NATIVE_FRAME_MS: u64 = 16;

#[cfg(target_arch = "wasm32")]
pub fn now() -> InstantStamp {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn now() -> InstantStamp {
    ORIGIN.elapsed().as_secs_f64() * 1000.0
}

#[cfg(target_arch = "wasm32")]
pub async fn sleep_ms(ms: u64) {
    gloo_timers::future::TimeoutFuture::new(ms.min(u32::MAX as u64) as u32).await;
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep_ms(ms: u64) {
    tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
}

/// Wait for the next animation frame and return its timestamp.
///
/// Dropping the future before the frame fires cancels the pending
/// `requestAnimationFrame` request.
#[cfg(target_arch = "wasm32")]
pub async fn next_frame() -> InstantStamp {
    match frame::FrameRequest::schedule() {
        Some(request) => request.await,
        None => {
            // No window: degrade to a timer tick.
            sleep_ms(16).await;
            now()
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn next_frame() -> InstantStamp {
    sleep_ms(NATIVE_FRAME_MS).await;
    now()
}

#[cfg(target_arch = "wasm32")]
mod frame {
    use std::future::Future;
    use std::pin::Pin;
    use std::task::{Context, Poll};

    use futures_channel::oneshot;
    use wasm_bindgen::{closure::Closure, JsCast};

    use super::InstantStamp;

    /// A single `requestAnimationFrame` registration.
    pub(super) struct FrameRequest {
        id: i32,
        rx: oneshot::Receiver<InstantStamp>,
        // Kept alive until the frame fires or the request is dropped.
        _callback: Closure<dyn FnMut(f64)>,
    }

    impl FrameRequest {
        pub(super) fn schedule() -> Option<Self> {
            let window = web_sys::window()?;
            let (tx, rx) = oneshot::channel();
            let mut tx = Some(tx);
            let callback = Closure::<dyn FnMut(f64)>::new(move |timestamp: f64| {
                if let Some(tx) = tx.take() {
                    let _ = tx.send(timestamp);
                }
            });
            let id = window
                .request_animation_frame(callback.as_ref().unchecked_ref())
                .ok()?;
            Some(Self {
                id,
                rx,
                _callback: callback,
            })
        }
    }

    impl Future for FrameRequest {
        type Output = InstantStamp;

        fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
            match Pin::new(&mut self.rx).poll(cx) {
                Poll::Ready(Ok(ts)) => Poll::Ready(ts),
                Poll::Ready(Err(_)) => Poll::Ready(super::now()),
                Poll::Pending => Poll::Pending,
            }
        }
    }

    impl Drop for FrameRequest {
        fn drop(&mut self) {
            if let Some(window) = web_sys::window() {
                // No-op when the frame already fired.
                let _ = window.cancel_animation_frame(self.id);
            }
        }
    }
}
