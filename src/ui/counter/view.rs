//! Presentational surface for the counter.
//!
//! The view never reads the store directly while rendering. It subscribes
//! once in [`CounterView::bind`] and keeps the last value the store
//! published, together with a dirty flag the event loop uses to decide
//! when to redraw.

use std::str::FromStr;
use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use parking_lot::Mutex;
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Paragraph, Widget};
use thiserror::Error;

use crate::ui::mvi::{Store, SubscriptionId};
use crate::ui::theme::{BUTTON_BG, BUTTON_TEXT, COUNT_NEGATIVE, COUNT_TEXT};

use super::intent::CounterIntent;
use super::reducer::CounterReducer;
use super::state::CounterState;

pub const UP_LABEL: &str = "[ up ]";
pub const DOWN_LABEL: &str = "[ down ]";
const GAP: u16 = 2;

/// A user interaction aimed at the counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    Increase,
    Decrease,
}

impl Trigger {
    pub fn intent(self) -> CounterIntent {
        match self {
            Trigger::Increase => CounterIntent::Increment,
            Trigger::Decrease => CounterIntent::Decrement,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown trigger '{token}' (expected up, down, + or -)")]
pub struct TriggerParseError {
    pub token: String,
}

impl FromStr for Trigger {
    type Err = TriggerParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "up" | "+" | "increase" => Ok(Trigger::Increase),
            "down" | "-" | "decrease" => Ok(Trigger::Decrease),
            other => Err(TriggerParseError {
                token: other.to_string(),
            }),
        }
    }
}

/// Parse a comma-separated trigger sequence such as `up,up,down`.
///
/// Empty segments are skipped, so an empty string is an empty sequence.
pub fn parse_triggers(input: &str) -> Result<Vec<Trigger>, TriggerParseError> {
    input
        .split(',')
        .filter(|token| !token.trim().is_empty())
        .map(str::parse)
        .collect()
}

/// Screen rectangles of the three counter elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterLayout {
    pub up: Rect,
    pub value: Rect,
    pub down: Rect,
}

impl CounterLayout {
    /// Lay out `up`, the count and `down` on the middle row of `area`.
    pub fn compute(area: Rect, count: i64) -> Self {
        let row = Rect {
            x: area.x,
            y: area.y + area.height / 2,
            width: area.width,
            height: area.height.min(1),
        };
        let value_width = value_text(count).chars().count() as u16;
        let [up, value, down] = Layout::horizontal([
            Constraint::Length(UP_LABEL.len() as u16),
            Constraint::Length(value_width),
            Constraint::Length(DOWN_LABEL.len() as u16),
        ])
        .flex(Flex::Center)
        .spacing(GAP)
        .areas(row);

        Self { up, value, down }
    }

    pub fn trigger_at(&self, column: u16, row: u16) -> Option<Trigger> {
        let position = Position::new(column, row);
        if self.up.contains(position) {
            Some(Trigger::Increase)
        } else if self.down.contains(position) {
            Some(Trigger::Decrease)
        } else {
            None
        }
    }
}

fn value_text(count: i64) -> String {
    format!(" {} ", count)
}

#[derive(Debug)]
struct Observed {
    count: i64,
    dirty: bool,
}

/// Leaf widget showing the counter and its two buttons.
///
/// Call [`CounterView::unbind`] before discarding a view whose store
/// outlives it.
pub struct CounterView {
    observed: Arc<Mutex<Observed>>,
    subscription: SubscriptionId,
}

impl CounterView {
    /// Subscribe to `store` and start observing its count.
    ///
    /// The view starts dirty so the first frame is always drawn.
    pub fn bind(store: &mut Store<CounterReducer>) -> Self {
        let observed = Arc::new(Mutex::new(Observed {
            count: store.read(|state| state.count),
            dirty: true,
        }));
        let sink = Arc::clone(&observed);
        let subscription = store.subscribe(move |state: &CounterState| {
            let mut observed = sink.lock();
            observed.count = state.count;
            observed.dirty = true;
        });

        Self {
            observed,
            subscription,
        }
    }

    pub fn subscription(&self) -> SubscriptionId {
        self.subscription
    }

    /// Drop the view's listener from `store`.
    ///
    /// A bound view's listener otherwise stays registered for as long as
    /// the store lives, even after the view itself is dropped.
    pub fn unbind(self, store: &mut Store<CounterReducer>) -> bool {
        store.unsubscribe(self.subscription)
    }

    /// Most recently observed count.
    pub fn displayed(&self) -> i64 {
        self.observed.lock().count
    }

    pub fn is_dirty(&self) -> bool {
        self.observed.lock().dirty
    }

    /// Clear the dirty flag, returning whether it was set.
    pub fn take_dirty(&self) -> bool {
        std::mem::replace(&mut self.observed.lock().dirty, false)
    }

    pub fn layout(&self, area: Rect) -> CounterLayout {
        CounterLayout::compute(area, self.displayed())
    }

    /// Resolve a click at (`column`, `row`) inside a view drawn in `area`.
    pub fn trigger_at(&self, area: Rect, column: u16, row: u16) -> Option<Trigger> {
        self.layout(area).trigger_at(column, row)
    }

    /// Key bindings: Up/`+`/`k` increase, Down/`-`/`j` decrease.
    pub fn trigger_for_key(key: KeyEvent) -> Option<Trigger> {
        if key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
        {
            return None;
        }
        match key.code {
            KeyCode::Up | KeyCode::Char('+') | KeyCode::Char('k') => Some(Trigger::Increase),
            KeyCode::Down | KeyCode::Char('-') | KeyCode::Char('j') => Some(Trigger::Decrease),
            _ => None,
        }
    }
}

impl Widget for &CounterView {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let count = self.displayed();
        let layout = CounterLayout::compute(area, count);
        let button_style = Style::default().fg(BUTTON_TEXT).bg(BUTTON_BG);
        let count_color = if count < 0 { COUNT_NEGATIVE } else { COUNT_TEXT };

        Paragraph::new(UP_LABEL)
            .style(button_style)
            .render(layout.up, buf);
        Paragraph::new(value_text(count))
            .alignment(Alignment::Center)
            .style(
                Style::default()
                    .fg(count_color)
                    .add_modifier(Modifier::BOLD),
            )
            .render(layout.value, buf);
        Paragraph::new(DOWN_LABEL)
            .style(button_style)
            .render(layout.down, buf);
    }
}
