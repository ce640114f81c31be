//! Featured hero rotation.
//!
//! - [`hero`]: the rotation cursor and hero resolution with fallbacks
//! - [`timer`]: the cancellable background task that produces ticks

pub mod hero;
pub mod timer;

pub use hero::{resolve_hero, HeroRotation};
pub use timer::{RotationTimer, DEFAULT_ROTATION_INTERVAL};
