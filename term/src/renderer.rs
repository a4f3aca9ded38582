//! Main application loop and terminal management.

use color_eyre::eyre::{Context, Result, eyre};
use log::*;
use ratatui::{
    Terminal,
    crossterm::{
        event::{
            self, Event as CrossTermEvent, KeyCode, KeyEventKind, KeyModifiers,
        },
        execute,
        terminal::{
            EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
            enable_raw_mode,
        },
    },
    layout::Rect,
    prelude::Backend,
};
use std::{cell::RefCell, io, rc::Rc};

use crate::{
    store::{Dispatcher, StateGetter, Store, state::State},
    ui::views::{
        main::MainView,
        traits::{CustomWidgetContext, CustomWidgetRef, EventHandler},
    },
};

/// Main application coordinating rendering and event handling.
///
/// Manages the terminal lifecycle (raw mode, alternate screen) and runs the
/// render loop that draws UI and processes input events.
pub struct Renderer<B: Backend + std::io::Write> {
    terminal: RefCell<Terminal<B>>,
    store: Rc<Store>,
    main_view: MainView,
}

impl<B: Backend + std::io::Write> Renderer<B> {
    /// Creates a new renderer drawing the given store onto the terminal.
    pub fn new(terminal: Terminal<B>, store: Rc<Store>) -> Self {
        Self {
            terminal: RefCell::new(terminal),
            main_view: MainView::new(Rc::clone(&store) as Rc<dyn Dispatcher>),
            store,
        }
    }

    /// Initializes the terminal and starts the render loop. Returns when the
    /// user quits.
    pub fn start_render_loop(&self) -> Result<()> {
        self.enable_terminal_raw_mode()?;
        let res = self.start_loop();
        // always restore the terminal, even if the loop failed
        self.exit()?;
        res
    }

    fn start_loop(&self) -> Result<()> {
        self.render_frame(&self.store.get_state())?;

        loop {
            // nothing changes state other than key presses so block here
            let evt = event::read().wrap_err("failed to read terminal event")?;

            if self.handle_event(&evt)? {
                info!("quit requested");
                return Ok(());
            }
        }
    }

    /// Routes a single terminal event through the views and redraws.
    /// Returns true when the application should quit.
    fn handle_event(&self, evt: &CrossTermEvent) -> Result<bool> {
        let state = self.store.get_state();
        let size = self
            .terminal
            .borrow()
            .size()
            .map_err(|e| eyre!("failed to get terminal size: {}", e))?;

        let ctx = CustomWidgetContext {
            state: &state,
            app_area: Rect::new(0, 0, size.width, size.height),
        };

        let handled = self.main_view.process_event(evt, &ctx);

        // re-fetch state so the frame reflects any dispatched actions
        self.render_frame(&self.store.get_state())?;

        if let CrossTermEvent::Key(key) = evt {
            if key.kind != KeyEventKind::Press {
                return Ok(false);
            }

            match key.code {
                // allow views to claim q, e.g. while typing
                KeyCode::Char('q') if !handled => return Ok(true),
                // do not allow overriding ctrl-c
                KeyCode::Char('c')
                    if key.modifiers == KeyModifiers::CONTROL =>
                {
                    debug!("received control-c sequence");
                    return Ok(true);
                }
                _ => {}
            }
        }

        Ok(false)
    }

    fn render_frame(&self, state: &State) -> Result<()> {
        self.terminal
            .borrow_mut()
            .draw(|f| {
                let ctx = CustomWidgetContext {
                    state,
                    app_area: f.area(),
                };
                self.main_view.render_ref(f.area(), f.buffer_mut(), &ctx);
            })
            .map_err(|e| eyre!("failed to render: {}", e))?;

        Ok(())
    }

    fn enable_terminal_raw_mode(&self) -> Result<()> {
        enable_raw_mode().wrap_err("failed to enter raw mode")?;
        // Note we must use io::stdout() directly here. Using
        // self.terminal.borrow_mut().backend_mut() will result in immediate
        // exit.
        execute!(io::stdout(), EnterAlternateScreen)
            .wrap_err("failed to enter alternate screen")?;
        Ok(())
    }

    fn exit(&self) -> Result<()> {
        let mut terminal = self.terminal.borrow_mut();
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal
            .show_cursor()
            .map_err(|e| eyre!("failed to show terminal cursor: {}", e))?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "./renderer_tests.rs"]
mod tests;
