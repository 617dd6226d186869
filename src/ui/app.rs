use crate::ui::counter::{CounterReducer, CounterState, CounterView, Trigger};
use crate::ui::layout::counter_rect;
use crate::ui::mvi::Store;
use ratatui::layout::Rect;

pub struct App {
    should_quit: bool,
    mouse_enabled: bool,
    size: Option<(u16, u16)>,
    /// Counter state (MVI pattern). Only mutated through `trigger`.
    store: Store<CounterReducer>,
    view: CounterView,
}

impl App {
    pub fn new(initial: i64, mouse_enabled: bool) -> Self {
        let mut store = Store::new(CounterState::new(initial));
        let view = CounterView::bind(&mut store);
        Self {
            should_quit: false,
            mouse_enabled,
            size: None,
            store,
            view,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn mouse_enabled(&self) -> bool {
        self.mouse_enabled
    }

    /// Committed count in the store.
    pub fn count(&self) -> i64 {
        self.store.read(|state| state.count)
    }

    pub fn view(&self) -> &CounterView {
        &self.view
    }

    pub fn store(&self) -> &Store<CounterReducer> {
        &self.store
    }

    pub fn trigger(&mut self, trigger: Trigger) {
        self.store.dispatch(trigger.intent());
    }

    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        self.size = Some((cols, rows));
    }

    /// Where the counter view sits for the current terminal size.
    pub fn counter_area(&self) -> Option<Rect> {
        self.size
            .map(|(cols, rows)| counter_rect(Rect::new(0, 0, cols, rows)))
    }

    /// Handle a left click. Returns the trigger it hit, if any.
    pub fn on_click(&mut self, column: u16, row: u16) -> Option<Trigger> {
        if !self.mouse_enabled {
            return None;
        }
        let area = self.counter_area()?;
        let trigger = self.view.trigger_at(area, column, row)?;
        self.trigger(trigger);
        Some(trigger)
    }

    /// True when a committed change has not been drawn yet. Clears the flag.
    pub fn take_redraw(&mut self) -> bool {
        self.view.take_dirty()
    }
}
