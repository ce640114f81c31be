//! Actions representing side effects to be executed by the runtime.
//!
//! The event handler only mutates [`AppState`](crate::app::AppState); anything
//! that touches threads or process lifetime is returned as an [`Action`] and
//! carried out by the [`Runtime`](crate::runtime::Runtime) in order.
//!
//! # Example
//!
//! ```rust
//! use marquee::app::Action;
//!
//! let actions = vec![Action::StopRotation, Action::Exit];
//! assert_eq!(actions.len(), 2);
//! ```

/// Commands produced by the event handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Starts a rotation timer stamped with `generation`, replacing any
    /// timer already running.
    StartRotation {
        /// Generation of the rotation the timer belongs to.
        generation: u64,
    },

    /// Cancels the running rotation timer, if any.
    StopRotation,

    /// Leaves the event loop.
    Exit,
}
