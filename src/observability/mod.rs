//! Structured logging to a rotating file.
//!
//! ```text
//! tracing macros → EnvFilter → fmt layer (no ANSI) → RotatingFile → marquee.log
//! ```
//!
//! Stdout belongs to the terminal UI, so nothing is ever logged there.
//!
//! # Configuration
//!
//! Level is controlled via:
//! 1. `RUST_LOG` environment variable (highest priority)
//! 2. `trace_level` config option
//! 3. Default: `"info"`
//!
//! # Modules
//!
//! - [`init`]: Subscriber setup
//! - [`file_writer`]: Size-rotated log file with backup retention

pub mod file_writer;
pub mod init;

pub use file_writer::RotatingFile;
pub use init::{init_tracing, init_tracing_at, LOG_FILE_NAME};
