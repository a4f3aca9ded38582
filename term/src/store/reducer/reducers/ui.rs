//! UI state reducers for errors, messages, and themes.

use crate::{
    store::state::State,
    ui::colors::{Colors, Theme},
};

/// Sets or clears the current error message.
pub fn set_error(state: &mut State, err: Option<String>) {
    state.error = err;
}

/// Sets or clears the status message shown in the title bar.
pub fn update_message(state: &mut State, message: Option<String>) {
    state.message = message;
}

/// Applies a theme without persisting it to config.
pub fn preview_theme(state: &mut State, theme: Theme) {
    state.theme = theme;
    state.colors = Colors::from_theme(theme, state.true_color_enabled);
}
