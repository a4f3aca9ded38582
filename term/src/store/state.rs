//! Application state definitions.

use tasklist_lib::store::TaskListStore;

use crate::{
    config::Config,
    ui::colors::{Colors, Theme},
};

/// Complete application state for the terminal UI.
#[derive(Debug, Clone)]
pub struct State {
    pub true_color_enabled: bool,
    pub theme: Theme,
    pub colors: Colors,
    pub config: Config,
    pub tasks: TaskListStore,
    pub error: Option<String>,
    pub message: Option<String>,
}

impl State {
    /// Creates the initial state: an empty task list styled with the
    /// configured theme.
    pub fn new(config: Config, true_color_enabled: bool) -> Self {
        let theme = Theme::from_string(&config.theme);

        Self {
            true_color_enabled,
            theme,
            colors: Colors::from_theme(theme, true_color_enabled),
            config,
            tasks: TaskListStore::new(),
            error: None,
            message: None,
        }
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new(Config::default(), true)
    }
}
