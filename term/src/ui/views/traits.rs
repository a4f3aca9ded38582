//! Shared traits implemented by views and components.

use ratatui::{crossterm::event::Event as CrossTermEvent, layout::Rect};

use crate::store::state::State;

/// Handles terminal input events. Returns true when the event was consumed.
pub trait EventHandler {
    fn process_event(
        &self,
        evt: &CrossTermEvent,
        ctx: &CustomWidgetContext,
    ) -> bool;
}

/// Context passed to every widget while rendering and handling events.
pub struct CustomWidgetContext<'a> {
    // app state
    pub state: &'a State,
    // total area for the entire application - useful for calculating
    // popover areas
    pub app_area: Rect,
}

pub trait CustomWidget {
    fn render(
        self,
        area: Rect,
        buf: &mut ratatui::prelude::Buffer,
        ctx: &CustomWidgetContext,
    );
}

pub trait CustomWidgetRef {
    fn render_ref(
        &self,
        area: Rect,
        buf: &mut ratatui::prelude::Buffer,
        ctx: &CustomWidgetContext,
    );
}

pub trait CustomStatefulWidget {
    type State;

    fn render(
        self,
        area: Rect,
        buf: &mut ratatui::prelude::Buffer,
        state: &mut Self::State,
        ctx: &CustomWidgetContext,
    );
}

/// A renderable screen section that also reacts to input.
pub trait View: EventHandler + CustomWidgetRef {
    fn legend(&self, _state: &State) -> String {
        String::new()
    }
}
