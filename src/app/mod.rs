//! Application layer coordinating state, events, and actions.
//!
//! Sits between the [`Runtime`](crate::runtime::Runtime) and the pure engines
//! in [`crate::query`] and [`crate::rotation`].
//!
//! # Architecture
//!
//! ```text
//! Input lines / timer ticks → Events → Event Handler → State Mutations → Actions → Side Effects
//!                                          ↑                                          ↓
//!                                          └────────────── Rotation ticks ────────────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`command`]: Line command parsing for the terminal front end
//! - [`handler`]: Event processing logic and state transitions
//! - [`modes`]: The page state machine
//! - [`state`]: Central application state container and view model computation

pub mod actions;
pub mod command;
pub mod handler;
pub mod modes;
pub mod state;

pub use actions::Action;
pub use command::parse_command;
pub use handler::{handle_event, Event};
pub use modes::Page;
pub use state::AppState;
