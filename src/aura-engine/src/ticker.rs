//! Cancellable metronome for the streaming simulator.
//!
//! The simulator itself is synchronous; pacing comes from a spawned
//! tokio task that emits unit ticks over a channel. The owning view
//! applies each received tick inside its own event loop, so every
//! mutation happens on the loop and a dropped handle guarantees no
//! stray writes after teardown.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::debug;

/// Per-character reveal intervals for the simulated stream.
#[derive(Debug, Clone, Copy)]
pub struct TickerConfig {
    /// Interval between thinking characters.
    pub thinking_interval: Duration,
    /// Interval between response characters.
    pub response_interval: Duration,
    /// Delay before the first character of a response-only reply.
    pub start_delay: Duration,
}

impl Default for TickerConfig {
    fn default() -> Self {
        Self {
            thinking_interval: Duration::from_millis(15),
            response_interval: Duration::from_millis(10),
            start_delay: Duration::from_millis(200),
        }
    }
}

/// Spawns tick-emitting tasks for streamed replies.
pub struct StreamTicker;

impl StreamTicker {
    /// Starts a ticker for a reply that opens with a thinking phase.
    ///
    /// Call [`TickerHandle::switch_to_response`] when the simulator
    /// reports the thinking phase complete to pick up the faster
    /// response cadence.
    pub fn start_thinking(config: TickerConfig) -> (TickerHandle, mpsc::Receiver<()>) {
        Self::spawn(config.thinking_interval, Duration::ZERO, config)
    }

    /// Starts a ticker for a response-only reply, with a short delay
    /// before the first character.
    pub fn start_response(config: TickerConfig) -> (TickerHandle, mpsc::Receiver<()>) {
        Self::spawn(config.response_interval, config.start_delay, config)
    }

    fn spawn(
        initial_interval: Duration,
        start_delay: Duration,
        config: TickerConfig,
    ) -> (TickerHandle, mpsc::Receiver<()>) {
        let (tx, rx) = mpsc::channel(64);
        let cancelled = Arc::new(AtomicBool::new(false));
        let interval_ms = Arc::new(AtomicU64::new(initial_interval.as_millis() as u64));

        let flag = cancelled.clone();
        let interval = interval_ms.clone();
        let task = tokio::spawn(async move {
            if !start_delay.is_zero() {
                tokio::time::sleep(start_delay).await;
            }
            loop {
                if flag.load(Ordering::SeqCst) {
                    break;
                }
                // Receiver dropped means the view is gone; stop quietly.
                if tx.send(()).await.is_err() {
                    break;
                }
                let ms = interval.load(Ordering::SeqCst);
                tokio::time::sleep(Duration::from_millis(ms)).await;
            }
            debug!("stream ticker stopped");
        });

        (
            TickerHandle {
                cancelled,
                interval_ms,
                config,
                task: Some(task),
            },
            rx,
        )
    }
}

/// Owning handle for a running ticker task.
///
/// Scoped acquisition: the timer is released on every exit path.
/// [`TickerHandle::cancel`] stops it explicitly; dropping the handle
/// (view teardown) does the same.
pub struct TickerHandle {
    cancelled: Arc<AtomicBool>,
    interval_ms: Arc<AtomicU64>,
    config: TickerConfig,
    task: Option<JoinHandle<()>>,
}

impl TickerHandle {
    /// Switches the cadence to the response interval. Called at the
    /// thinking-to-response transition.
    pub fn switch_to_response(&self) {
        self.interval_ms.store(
            self.config.response_interval.as_millis() as u64,
            Ordering::SeqCst,
        );
    }

    /// Stops the ticker. Signals the task first, then aborts it so no
    /// tick can be emitted after this returns.
    pub fn cancel(&mut self) {
        self.cancelled.store(true, Ordering::SeqCst);
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }

    /// Returns `true` if the ticker has been cancelled.
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

impl Drop for TickerHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}
