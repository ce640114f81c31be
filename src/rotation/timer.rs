//! Repeating background timer driving the hero rotation.
//!
//! The timer runs on its own thread and does nothing but call a tick callback
//! once per interval; the callback is expected to hand the tick over to the
//! runtime thread (see [`Runtime`](crate::runtime::Runtime)), which owns all
//! state. The returned [`RotationTimer`] is the only way to stop the thread:
//! dropping it cancels and joins.

use crate::domain::error::{MarqueeError, Result};
use crossbeam_channel::{select, Sender};
use std::thread::JoinHandle;
use std::time::Duration;

/// Default interval between hero advances.
pub const DEFAULT_ROTATION_INTERVAL: Duration = Duration::from_millis(8000);

/// Handle to a running rotation timer.
///
/// # Cancellation
///
/// Dropping the handle disconnects the cancel channel and joins the timer
/// thread. Once `drop` returns the tick callback will not run again.
///
/// # Example
///
/// ```rust
/// use marquee::rotation::RotationTimer;
/// use std::time::Duration;
///
/// let timer = RotationTimer::start(Duration::from_secs(8), 1, |generation| {
///     println!("advance hero for generation {generation}");
///     true
/// })?;
/// drop(timer); // cancelled, thread joined
/// # Ok::<(), marquee::MarqueeError>(())
/// ```
#[derive(Debug)]
pub struct RotationTimer {
    generation: u64,
    cancel: Option<Sender<()>>,
    thread: Option<JoinHandle<()>>,
}

impl RotationTimer {
    /// Spawns the timer thread.
    ///
    /// `on_tick` receives the timer's generation on every tick. Returning
    /// `false` ends the timer early (e.g. when the event receiver is gone).
    ///
    /// # Errors
    ///
    /// Returns [`MarqueeError::Timer`] if the thread cannot be spawned.
    pub fn start<F>(interval: Duration, generation: u64, mut on_tick: F) -> Result<Self>
    where
        F: FnMut(u64) -> bool + Send + 'static,
    {
        let (cancel_tx, cancel_rx) = crossbeam_channel::bounded::<()>(0);

        let thread = std::thread::Builder::new()
            .name(format!("hero-rotation-{generation}"))
            .spawn(move || {
                let ticker = crossbeam_channel::tick(interval);
                loop {
                    let keep_running = select! {
                        recv(cancel_rx) -> _ => false,
                        recv(ticker) -> _ => {
                            tracing::trace!(generation, "rotation tick");
                            let delivered = on_tick(generation);
                            if !delivered {
                                tracing::debug!(generation, "tick receiver gone, stopping timer");
                            }
                            delivered
                        }
                    };
                    if !keep_running {
                        break;
                    }
                }
            })
            .map_err(|e| MarqueeError::Timer(format!("failed to spawn rotation thread: {e}")))?;

        tracing::debug!(generation, interval_ms = interval.as_millis(), "rotation timer started");

        Ok(Self {
            generation,
            cancel: Some(cancel_tx),
            thread: Some(thread),
        })
    }

    /// Generation this timer stamps on its ticks.
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }
}

impl Drop for RotationTimer {
    fn drop(&mut self) {
        drop(self.cancel.take());
        if let Some(thread) = self.thread.take() {
            if thread.join().is_err() {
                tracing::error!(generation = self.generation, "rotation timer thread panicked");
            }
        }
        tracing::debug!(generation = self.generation, "rotation timer stopped");
    }
}
