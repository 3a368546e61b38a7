//! Top-level rendering coordinator.
//!
//! This module provides the main rendering entry point, coordinating view
//! model computation and delegation to UI components.
//!
//! # Architecture
//!
//! The renderer follows a two-step process:
//!
//! 1. **View Model Computation**: Transform `AppState` into `UIViewModel`
//! 2. **Component Rendering**: Delegate to specialized component renderers

use crate::app::AppState;
use crate::ui::components;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

/// Renders the plugin UI to stdout.
///
/// Computes the view model from application state and delegates to the
/// component renderers. Prints ANSI-styled output using `print!`; does not
/// clear the screen or manage cursor position beyond explicit positioning.
pub fn render(state: &AppState, rows: usize, cols: usize) {
    let viewmodel = state.compute_viewmodel(rows, cols);

    render_viewmodel(&viewmodel, &state.theme, rows, cols);
}

/// Renders a view model with mode-specific layout.
///
/// An entirely empty roster shows the centered empty state (with the modal
/// still overlaid if open, so the first friend request can be sent from an
/// empty screen). Otherwise the full roster screen is rendered.
fn render_viewmodel(vm: &UIViewModel, theme: &Theme, rows: usize, cols: usize) {
    if let Some(empty) = &vm.empty_state {
        components::render_empty_state(empty, theme, cols);
        if let Some(modal) = &vm.modal {
            components::render_modal(modal, theme, rows, cols);
        }
        return;
    }

    components::render_roster_screen(vm, theme, cols, rows);
}
