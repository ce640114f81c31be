//! Single-threaded event loop driver.
//!
//! The [`Runtime`] owns the [`AppState`] and is the only code that mutates it.
//! Other threads (the rotation timer, the input reader) never touch state;
//! they send [`Event`]s into the runtime's channel and the loop applies them
//! one at a time through [`handle_event`].
//!
//! ```text
//! stdin reader ──┐
//!                ├──► Event channel ──► Runtime::dispatch ──► handle_event ──► Actions
//! rotation timer ┘                                                              │
//!        ▲                                                                      │
//!        └─────────────── StartRotation / StopRotation ◄────────────────────────┘
//! ```

use crate::app::{handle_event, Action, AppState, Event};
use crate::domain::error::Result;
use crate::rotation::RotationTimer;
use crossbeam_channel::{Receiver, RecvTimeoutError, Sender};
use std::time::Duration;

/// Owner of application state, the event channel and the rotation timer.
///
/// At most one rotation timer exists at any time, and only while the home
/// page is shown. Dropping the runtime stops the timer.
#[derive(Debug)]
pub struct Runtime {
    timer: Option<RotationTimer>,
    state: AppState,
    events_tx: Sender<Event>,
    events_rx: Receiver<Event>,
    interval: Duration,
    running: bool,
}

impl Runtime {
    /// Creates the runtime and starts whatever the initial state requires
    /// (the home page's rotation timer).
    ///
    /// # Errors
    ///
    /// Returns [`MarqueeError::Timer`](crate::MarqueeError::Timer) if the
    /// rotation thread cannot be spawned.
    pub fn new(state: AppState, interval: Duration) -> Result<Self> {
        let (events_tx, events_rx) = crossbeam_channel::unbounded();
        let initial_actions = state.initial_actions();

        let mut runtime = Self {
            timer: None,
            state,
            events_tx,
            events_rx,
            interval,
            running: true,
        };

        for action in initial_actions {
            runtime.execute_action(action)?;
        }

        Ok(runtime)
    }

    /// Read access to the state for rendering.
    #[must_use]
    pub const fn state(&self) -> &AppState {
        &self.state
    }

    /// A sender for producers on other threads.
    #[must_use]
    pub fn sender(&self) -> Sender<Event> {
        self.events_tx.clone()
    }

    /// The event queue, for use in a `select!` alongside other inputs.
    #[must_use]
    pub const fn receiver(&self) -> &Receiver<Event> {
        &self.events_rx
    }

    /// `false` once an [`Action::Exit`] has been executed.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.running
    }

    /// Generation of the running rotation timer, if any.
    #[must_use]
    pub fn timer_generation(&self) -> Option<u64> {
        self.timer.as_ref().map(RotationTimer::generation)
    }

    /// Waits up to `timeout` for the next queued event.
    #[must_use]
    pub fn next_event(&self, timeout: Duration) -> Option<Event> {
        match self.events_rx.recv_timeout(timeout) {
            Ok(event) => Some(event),
            Err(RecvTimeoutError::Timeout | RecvTimeoutError::Disconnected) => None,
        }
    }

    /// Applies one event and executes the resulting actions in order.
    ///
    /// # Returns
    ///
    /// Whether the screen should be redrawn.
    ///
    /// # Errors
    ///
    /// Returns the handler's error (state unchanged) or a timer spawn failure.
    pub fn dispatch(&mut self, event: &Event) -> Result<bool> {
        let (should_render, actions) = handle_event(&mut self.state, event).map_err(|e| {
            tracing::warn!(error = %e, "event rejected");
            e
        })?;

        for action in actions {
            self.execute_action(action)?;
        }

        Ok(should_render)
    }

    /// Drains every queued event without blocking.
    ///
    /// Errors are logged and skipped. Returns whether any event asked for a
    /// redraw.
    pub fn dispatch_pending(&mut self) -> bool {
        let mut should_render = false;
        while let Ok(event) = self.events_rx.try_recv() {
            match self.dispatch(&event) {
                Ok(render) => should_render |= render,
                Err(e) => tracing::debug!(error = %e, "queued event failed"),
            }
        }
        should_render
    }

    fn execute_action(&mut self, action: Action) -> Result<()> {
        let _span = tracing::debug_span!("execute_action", action = ?action).entered();

        match action {
            Action::StartRotation { generation } => {
                // The previous timer must be joined before the new one starts.
                drop(self.timer.take());

                let tx = self.events_tx.clone();
                let timer = RotationTimer::start(self.interval, generation, move |generation| {
                    tx.send(Event::RotationTick { generation }).is_ok()
                })?;
                self.timer = Some(timer);
            }
            Action::StopRotation => {
                if self.timer.take().is_none() {
                    tracing::debug!("no rotation timer to stop");
                }
            }
            Action::Exit => {
                drop(self.timer.take());
                self.running = false;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::Page;
    use crate::catalog::fixtures::dune_and_her;
    use crate::catalog::Catalog;
    use crate::domain::{ItemId, MarqueeError};
    use crate::ui::Theme;

    const FAST: Duration = Duration::from_millis(10);

    fn runtime(interval: Duration) -> Runtime {
        let catalog = Catalog::new(vec![], dune_and_her(), vec![]).unwrap();
        Runtime::new(AppState::new(catalog, Theme::default()), interval).unwrap()
    }

    #[test]
    fn starts_timer_on_home() {
        let runtime = runtime(Duration::from_secs(60));
        assert_eq!(runtime.timer_generation(), Some(0));
        assert!(runtime.is_running());
    }

    #[test]
    fn ticks_advance_hero() {
        let mut runtime = runtime(FAST);
        let tick = runtime.next_event(Duration::from_secs(2)).unwrap();
        assert_eq!(tick, Event::RotationTick { generation: 0 });

        assert!(runtime.dispatch(&tick).unwrap());
        assert_eq!(runtime.state().rotation_index(), Some(1));
    }

    #[test]
    fn leaving_home_stops_timer() {
        let mut runtime = runtime(FAST);
        runtime.dispatch(&Event::PageChanged(Page::MoviesListing)).unwrap();
        assert_eq!(runtime.timer_generation(), None);

        // Ticks already queued before the stop are stale and ignored.
        runtime.dispatch_pending();
        assert!(runtime.next_event(Duration::from_millis(50)).is_none());
    }

    #[test]
    fn reentering_home_replaces_timer() {
        let mut runtime = runtime(Duration::from_secs(60));
        runtime.dispatch(&Event::PageChanged(Page::TvListing)).unwrap();
        runtime.dispatch(&Event::PageChanged(Page::Home)).unwrap();
        assert_eq!(runtime.timer_generation(), Some(1));
        assert_eq!(runtime.state().rotation_index(), Some(0));
    }

    #[test]
    fn stale_ticks_from_sender_are_ignored() {
        let mut runtime = runtime(Duration::from_secs(60));
        runtime.dispatch(&Event::PageChanged(Page::Newsletter)).unwrap();
        runtime.dispatch(&Event::PageChanged(Page::Home)).unwrap();

        runtime.sender().send(Event::RotationTick { generation: 0 }).unwrap();
        assert!(!runtime.dispatch_pending());
        assert_eq!(runtime.state().rotation_index(), Some(0));
    }

    #[test]
    fn handler_errors_leave_runtime_usable() {
        let mut runtime = runtime(Duration::from_secs(60));
        let err = runtime.dispatch(&Event::ItemSelected(ItemId(77))).unwrap_err();
        assert!(matches!(err, MarqueeError::ItemNotFound(_)));

        assert!(runtime.dispatch(&Event::ItemSelected(ItemId(1))).unwrap());
    }

    #[test]
    fn quit_stops_everything() {
        let mut runtime = runtime(FAST);
        runtime.dispatch(&Event::Quit).unwrap();
        assert!(!runtime.is_running());
        assert_eq!(runtime.timer_generation(), None);
    }
}
