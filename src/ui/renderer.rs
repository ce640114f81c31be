//! Top-level rendering coordinator.
//!
//! The renderer follows a two-step process:
//!
//! 1. **View Model Computation**: Transform `AppState` into `UIViewModel`
//! 2. **Component Rendering**: Delegate to the component renderers, which
//!    append to one frame buffer
//!
//! The frame is returned rather than printed so the caller decides where it
//! goes (stdout for the CLI, assertions for tests).

use crate::app::AppState;
use crate::ui::components;
use crate::ui::helpers::clear_screen;

/// Renders the whole screen for `state` at `cols` columns.
///
/// The frame starts with a clear-screen sequence.
#[must_use]
pub fn render(state: &AppState, cols: usize) -> String {
    let viewmodel = state.compute_viewmodel(cols);

    let mut frame = String::with_capacity(4096);
    clear_screen(&mut frame);
    components::render_page(&mut frame, &viewmodel, &state.theme, cols);
    frame
}
