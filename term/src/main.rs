//! Terminal UI (TUI) app for keeping a simple to-do list
//!
//! # Features:
//!
//! - Add tasks by typing into the input and pressing enter
//! - Edit a task in place by selecting it and pressing `e`
//! - Delete tasks with `d`
//! - Cycle and persist the color theme with `t`
//!
//! Tasks live in memory only and are gone when the app exits.
//!
//! # Examples
//!
//! ```bash
//! # show help menu
//! tasklist-term --help
//!
//! # launch application
//! tasklist-term
//!
//! # launch with a one-off theme and debug logging
//! tasklist-term --theme emerald --debug
//! ```

use clap::Parser;
use color_eyre::eyre::{Result, eyre};
use config::ConfigManager;
use directories::ProjectDirs;
use indoc::indoc;
use log::*;
use ratatui::{Terminal, prelude::CrosstermBackend};
use std::{cell::RefCell, fs, io, rc::Rc};

use crate::{
    renderer::Renderer,
    store::{
        Dispatcher, Store, action::Action, effect::Effect,
        reducer::StoreReducer, state::State,
    },
    ui::colors::Theme,
};

#[doc(hidden)]
mod config;
#[doc(hidden)]
mod renderer;
#[doc(hidden)]
mod store;
#[doc(hidden)]
mod ui;

const APP_NAME: &str = "tasklist-term";

const LONG_ABOUT: &str = indoc! {"
    A single screen to-do list for the terminal.

    Type a task and press enter to add it. Press tab to move to the list,
    then e to edit the selected task, d to delete it, or t to cycle the
    color theme. Press q from the list, or ctrl+c anywhere, to quit.

    Tasks are kept in memory only. The chosen theme and title are saved to
    a YAML config file.
"};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = LONG_ABOUT)]
struct Args {
    /// Write debug logs to a file in the local data directory
    #[arg(short, long, default_value_t = false)]
    debug: bool,

    /// Path to an alternate config file
    #[arg(short, long)]
    config: Option<String>,

    /// Theme to use for this session without saving it
    /// (blue, emerald, indigo, red)
    #[arg(short, long)]
    theme: Option<String>,
}

#[doc(hidden)]
fn get_project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("", "", APP_NAME)
        .ok_or(eyre!("failed to get project directory"))
}

#[doc(hidden)]
fn initialize_logger(args: &Args, project_dirs: &ProjectDirs) -> Result<()> {
    // the terminal belongs to the UI so logs only ever go to a file
    if !args.debug {
        return Ok(());
    }

    let log_dir = project_dirs.data_local_dir();
    fs::create_dir_all(log_dir)?;
    let log_file = fs::File::create(log_dir.join(format!("{APP_NAME}.log")))?;

    simplelog::WriteLogger::init(
        simplelog::LevelFilter::Debug,
        simplelog::Config::default(),
        log_file,
    )?;

    Ok(())
}

#[doc(hidden)]
fn get_project_config_path(project_dirs: &ProjectDirs) -> Result<String> {
    let config_dir = project_dirs.config_dir();
    fs::create_dir_all(config_dir)?;
    let config_file_path = config_dir
        .join("config.yml")
        .to_str()
        .ok_or(eyre!("unable to construct config file path"))?
        .to_string();
    Ok(config_file_path)
}

#[doc(hidden)]
fn create_config_manager(
    args: &Args,
    project_dirs: &ProjectDirs,
) -> Result<ConfigManager> {
    let config_path = match &args.config {
        Some(path) => path.clone(),
        None => get_project_config_path(project_dirs)?,
    };

    let config_manager = ConfigManager::builder().path(config_path).build()?;
    info!("using config file {}", config_manager.path());

    Ok(config_manager)
}

#[doc(hidden)]
fn is_true_color_supported() -> bool {
    match supports_color::on(supports_color::Stream::Stdout) {
        Some(support) => support.has_16m,
        _ => false,
    }
}

#[doc(hidden)]
fn init_store(
    args: &Args,
    config_manager: ConfigManager,
    true_color_enabled: bool,
) -> Store {
    let state = State::new(config_manager.get(), true_color_enabled);
    let mut store = Store::new(state, StoreReducer::boxed());
    let config_manager = RefCell::new(config_manager);

    store.set_effect_handler(move |effect| match effect {
        Effect::SaveConfig(config) => {
            debug!("saving config: {config:?}");
            config_manager.borrow_mut().update(config)
        }
        Effect::None => Ok(()),
    });

    if let Some(theme) = &args.theme {
        store.dispatch(Action::PreviewTheme(Theme::from_string(theme)));
    }

    store
}

#[doc(hidden)]
fn main() -> Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    let project_dirs = get_project_dirs()?;

    initialize_logger(&args, &project_dirs)?;

    let config_manager = create_config_manager(&args, &project_dirs)?;
    let store = Rc::new(init_store(
        &args,
        config_manager,
        is_true_color_supported(),
    ));

    let terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
    let renderer = Renderer::new(terminal, store);

    renderer.start_render_loop()
}

#[cfg(test)]
#[path = "./main_tests.rs"]
mod tests;
