use std::rc::Rc;

use ratatui::{
    crossterm::event::{Event as CrossTermEvent, KeyCode, KeyEventKind},
    layout::{Constraint, Layout, Rect},
    style::Style,
    widgets::{
        Block, BorderType, Clear as ClearWidget, Padding, Paragraph, Widget,
        Wrap,
    },
};

use crate::{
    store::{Dispatcher, action::Action, derived, state::State},
    ui::components::{
        footer::InfoFooter,
        header::Header,
        popover::{MIN_POPOVER_SIZE, get_popover_area},
    },
};

use super::{
    tasks::TasksView,
    traits::{CustomWidget, CustomWidgetContext, CustomWidgetRef, EventHandler, View},
};

const DEFAULT_PADDING: Padding = Padding::horizontal(2);

pub struct MainView {
    dispatcher: Rc<dyn Dispatcher>,
    tasks_view: TasksView,
}

impl MainView {
    pub fn new(dispatcher: Rc<dyn Dispatcher>) -> Self {
        let tasks_view = TasksView::new(Rc::clone(&dispatcher));
        Self {
            dispatcher,
            tasks_view,
        }
    }

    fn render_buffer_bg(
        &self,
        area: Rect,
        buf: &mut ratatui::prelude::Buffer,
        state: &State,
    ) {
        let block = Block::new()
            .style(Style::new().bg(state.colors.buffer_bg))
            .padding(DEFAULT_PADDING);
        block.render(area, buf);
    }

    fn render_top(
        &self,
        area: Rect,
        buf: &mut ratatui::prelude::Buffer,
        ctx: &CustomWidgetContext,
    ) {
        let block = Block::bordered()
            .border_style(Style::new().fg(ctx.state.colors.border_color))
            .border_type(BorderType::Double)
            .padding(DEFAULT_PADDING);
        let inner_area = block.inner(area);
        block.render(area, buf);

        // messages take the place of the summary until the next task action
        let status = ctx
            .state
            .message
            .clone()
            .unwrap_or_else(|| derived::task_count_summary(ctx.state));

        Header::new(ctx.state.config.title.clone())
            .status(status)
            .render(inner_area, buf, ctx);
    }

    fn render_middle_view(
        &self,
        area: Rect,
        buf: &mut ratatui::prelude::Buffer,
        ctx: &CustomWidgetContext,
    ) {
        let block: Block<'_> = Block::bordered()
            .border_style(Style::new().fg(ctx.state.colors.border_color))
            .border_type(BorderType::Plain)
            .padding(Padding::new(2, 2, 1, 0));
        let inner_area = block.inner(area);
        block.render(area, buf);
        self.tasks_view.render_ref(inner_area, buf, ctx);
    }

    fn render_error_popover(
        &self,
        area: Rect,
        buf: &mut ratatui::prelude::Buffer,
        state: &State,
    ) {
        let Some(msg) = state.error.as_ref() else {
            return;
        };

        let block = Block::bordered()
            .border_type(BorderType::Double)
            .border_style(
                Style::new().fg(state.colors.error).bg(state.colors.buffer_bg),
            )
            .padding(Padding::uniform(1))
            .style(Style::default().bg(state.colors.buffer_bg));
        let inner_area = block.inner(area);
        let [msg_area, exit_area] = Layout::vertical([
            Constraint::Min(1),    // msg
            Constraint::Length(1), // exit
        ])
        .areas(inner_area);

        let message = Paragraph::new(format!("Error: {msg}"))
            .style(Style::new().fg(state.colors.text))
            .wrap(Wrap { trim: true });
        let exit = Paragraph::new("Press enter to clear error")
            .style(Style::new().fg(state.colors.placeholder))
            .centered();
        ClearWidget.render(area, buf);
        block.render(area, buf);
        message.render(msg_area, buf);
        exit.render(exit_area, buf);
    }

    fn render_footer(
        &self,
        legend: &str,
        area: Rect,
        buf: &mut ratatui::prelude::Buffer,
        ctx: &CustomWidgetContext,
    ) {
        let mut info = String::from("(ctrl+c) quit");

        if !legend.is_empty() {
            info = format!("{info} | {legend}");
        }

        InfoFooter::new(info).render(area, buf, ctx);
    }
}

impl View for MainView {
    fn legend(&self, state: &State) -> String {
        self.tasks_view.legend(state)
    }
}

impl CustomWidgetRef for MainView {
    fn render_ref(
        &self,
        area: Rect,
        buf: &mut ratatui::prelude::Buffer,
        ctx: &CustomWidgetContext,
    ) {
        // consists of 3 vertical rectangles (top, middle, bottom)
        let [top_area, middle_area, footer_area] = Layout::vertical([
            Constraint::Length(4),
            Constraint::Min(6),
            Constraint::Length(3),
        ])
        .areas(area);

        let legend = self.tasks_view.legend(ctx.state);

        // render background for entire display
        self.render_buffer_bg(area, buf, ctx.state);
        // title & summary
        self.render_top(top_area, buf, ctx);
        // input & task list
        self.render_middle_view(middle_area, buf, ctx);
        // legend for the focused section
        self.render_footer(&legend, footer_area, buf, ctx);

        // popover when there are errors in the store
        // important to render this last so it properly layers on top
        self.render_error_popover(
            get_popover_area(ctx.app_area, 50, 40, MIN_POPOVER_SIZE),
            buf,
            ctx.state,
        );
    }
}

impl EventHandler for MainView {
    fn process_event(
        &self,
        evt: &CrossTermEvent,
        ctx: &CustomWidgetContext,
    ) -> bool {
        if ctx.state.error.is_none() {
            return self.tasks_view.process_event(evt, ctx);
        }

        // the error popover swallows everything until dismissed
        if let CrossTermEvent::Key(key) = evt {
            if key.kind == KeyEventKind::Press && key.code == KeyCode::Enter {
                self.dispatcher.dispatch(Action::SetError(None));
            }
        }

        true
    }
}

#[cfg(test)]
#[path = "./main_tests.rs"]
mod tests;
