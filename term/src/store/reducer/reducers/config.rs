//! Config state reducers.

use crate::{config::Config, store::state::State, ui::colors::Theme};

use super::ui::preview_theme;

/// Replaces the current config and applies its theme. Persisting the config
/// is left to the returned effect.
pub fn update_config(state: &mut State, config: Config) {
    preview_theme(state, Theme::from_string(&config.theme));
    state.config = config;
}
