//! Single screen view for adding, editing, and deleting tasks.

use itertools::Itertools;
use ratatui::{
    crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    layout::{Constraint, Layout, Rect},
    style::Style,
    widgets::{Paragraph, Widget},
};
use std::{cell::RefCell, rc::Rc};
use tasklist_lib::task::TaskId;

use crate::{
    store::{Dispatcher, action::Action, derived, state::State},
    ui::components::{
        input::{Input, InputState},
        table::Table,
    },
};

use super::traits::{
    CustomStatefulWidget, CustomWidgetContext, CustomWidgetRef, EventHandler,
    View,
};

const PLACEHOLDER: &str = "Add or edit a task";
const EMPTY_LIST: &str = "Nothing to do. Type a task above and press enter.";

const INPUT_LEGEND: &[&str] =
    &["(enter) save", "(esc) cancel edit", "(tab) list"];
const LIST_LEGEND: &[&str] = &[
    "(q) quit",
    "(e) edit",
    "(d) delete",
    "(t) theme",
    "(tab) input",
];

/// Which part of the screen receives key presses.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Focus {
    Input,
    List,
}

pub struct TasksView {
    dispatcher: Rc<dyn Dispatcher>,
    focus: RefCell<Focus>,
    table: RefCell<Table>,
}

impl TasksView {
    pub fn new(dispatcher: Rc<dyn Dispatcher>) -> Self {
        Self {
            dispatcher,
            focus: RefCell::new(Focus::Input),
            table: RefCell::new(Table::new(
                Vec::new(),
                Some(vec!["#".to_string(), "TASK".to_string()]),
                vec![5, 30],
            )),
        }
    }

    pub fn focus(&self) -> Focus {
        *self.focus.borrow()
    }

    fn set_focus(&self, focus: Focus) {
        *self.focus.borrow_mut() = focus;
    }

    fn focus_list(&self) {
        self.set_focus(Focus::List);
        let table = self.table.borrow();
        if table.selected().is_none() {
            table.next();
        }
    }

    fn selected_task_id(&self, state: &State) -> Option<TaskId> {
        let selected = self.table.borrow().selected()?;
        state.tasks.items().get(selected).map(|t| t.id)
    }

    fn update_pending_text<F: FnOnce(&mut String)>(
        &self,
        state: &State,
        f: F,
    ) {
        let mut text = state.tasks.pending_text().to_string();
        f(&mut text);
        self.dispatcher.dispatch(Action::UpdatePendingText(text));
    }

    fn cycle_theme(&self, state: &State) {
        let theme = state.theme.next();
        let mut config = state.config.clone();
        config.theme = theme.to_string();
        self.dispatcher.dispatch(Action::UpdateConfig(config));
        self.dispatcher
            .dispatch(Action::UpdateMessage(Some(format!("Theme: {theme}"))));
    }

    fn process_input_key(&self, key: &KeyEvent, state: &State) -> bool {
        match key.code {
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.update_pending_text(state, |text| text.push(c));
                true
            }
            KeyCode::Backspace => {
                self.update_pending_text(state, |text| {
                    text.pop();
                });
                true
            }
            KeyCode::Enter => {
                self.dispatcher.dispatch(Action::SubmitPendingText);
                true
            }
            KeyCode::Esc => {
                if state.tasks.is_editing() {
                    self.dispatcher.dispatch(Action::CancelEditing);
                } else {
                    self.focus_list();
                }
                true
            }
            KeyCode::Tab | KeyCode::Down => {
                self.focus_list();
                true
            }
            _ => false,
        }
    }

    fn process_list_key(&self, key: &KeyEvent, state: &State) -> bool {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                self.table.borrow().next();
                true
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.table.borrow().previous();
                true
            }
            KeyCode::Char('e') | KeyCode::Enter => {
                if let Some(id) = self.selected_task_id(state) {
                    self.dispatcher.dispatch(Action::BeginEditing(id));
                    self.set_focus(Focus::Input);
                }
                true
            }
            KeyCode::Char('d') | KeyCode::Delete => {
                if let Some(id) = self.selected_task_id(state) {
                    self.dispatcher.dispatch(Action::DeleteTask(id));
                }
                true
            }
            KeyCode::Char('t') => {
                self.cycle_theme(state);
                true
            }
            KeyCode::Char('i') | KeyCode::Char('a') | KeyCode::Tab => {
                self.set_focus(Focus::Input);
                true
            }
            KeyCode::Esc => {
                if state.tasks.is_editing() {
                    self.dispatcher.dispatch(Action::CancelEditing);
                    true
                } else {
                    false
                }
            }
            _ => false,
        }
    }

    fn render_input(
        &self,
        area: Rect,
        buf: &mut ratatui::prelude::Buffer,
        ctx: &CustomWidgetContext,
    ) {
        let state = ctx.state;
        let label = derived::input_label(state);
        let input = Input::new(&label)
            .indicator(derived::input_indicator(state))
            .placeholder(PLACEHOLDER);
        let mut input_state = InputState {
            editing: self.focus() == Focus::Input,
            value: state.tasks.pending_text().to_string(),
        };
        input.render(area, buf, &mut input_state, ctx);
    }

    fn render_table(
        &self,
        area: Rect,
        buf: &mut ratatui::prelude::Buffer,
        ctx: &CustomWidgetContext,
    ) {
        self.table
            .borrow_mut()
            .update_items(derived::task_rows(ctx.state));

        if ctx.state.tasks.is_empty() {
            Paragraph::new(EMPTY_LIST)
                .style(Style::new().fg(ctx.state.colors.placeholder))
                .render(area, buf);
            return;
        }

        self.table.borrow().render_ref(area, buf, ctx);
    }
}

impl View for TasksView {
    fn legend(&self, _state: &State) -> String {
        let keys: &[&str] = match self.focus() {
            Focus::Input => INPUT_LEGEND,
            Focus::List => LIST_LEGEND,
        };

        keys.iter().join(" | ")
    }
}

impl CustomWidgetRef for TasksView {
    fn render_ref(
        &self,
        area: Rect,
        buf: &mut ratatui::prelude::Buffer,
        ctx: &CustomWidgetContext,
    ) {
        let [input_area, _, table_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1), // spacer
            Constraint::Min(3),
        ])
        .areas(area);

        self.render_input(input_area, buf, ctx);
        self.render_table(table_area, buf, ctx);
    }
}

impl EventHandler for TasksView {
    fn process_event(&self, evt: &Event, ctx: &CustomWidgetContext) -> bool {
        let Event::Key(key) = evt else {
            return false;
        };

        if key.kind != KeyEventKind::Press {
            return false;
        }

        match self.focus() {
            Focus::Input => self.process_input_key(key, ctx.state),
            Focus::List => self.process_list_key(key, ctx.state),
        }
    }
}

#[cfg(test)]
#[path = "./tasks_tests.rs"]
mod tests;
