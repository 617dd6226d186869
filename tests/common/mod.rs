//! Shared test utilities.

#![allow(dead_code, unused_imports)]

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;
use tally::ui::app::App;
use tally::ui::counter::CounterView;

/// Terminal size used by app-level tests.
pub const COLS: u16 = 80;
pub const ROWS: u16 = 24;

/// App with a known terminal size so mouse hit-testing works.
pub fn make_app(initial: i64) -> App {
    let mut app = App::new(initial, true);
    app.on_resize(COLS, ROWS);
    app
}

pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

pub fn ctrl(ch: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL)
}

pub fn release(code: KeyCode) -> KeyEvent {
    let mut event = key(code);
    event.kind = KeyEventKind::Release;
    event
}

pub fn left_click(column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

/// Render `view` into a fresh buffer and return each row as a string.
pub fn render_rows(view: &CounterView, area: Rect) -> Vec<String> {
    let mut buf = Buffer::empty(area);
    view.render(area, &mut buf);
    buffer_rows(&buf)
}

pub fn buffer_rows(buf: &Buffer) -> Vec<String> {
    let area = buf.area;
    (area.y..area.y + area.height)
        .map(|y| {
            (area.x..area.x + area.width)
                .map(|x| buf[(x, y)].symbol())
                .collect::<String>()
        })
        .collect()
}

/// The count as it appears on screen, parsed back from the rendered row.
pub fn displayed_text(view: &CounterView, area: Rect) -> String {
    let layout = view.layout(area);
    let rows = render_rows(view, area);
    let row = &rows[(layout.value.y - area.y) as usize];
    let start = (layout.value.x - area.x) as usize;
    let end = start + layout.value.width as usize;
    row.chars()
        .skip(start)
        .take(end - start)
        .collect::<String>()
        .trim()
        .to_string()
}
