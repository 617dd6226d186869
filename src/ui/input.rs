use crate::ui::app::App;
use crate::ui::counter::CounterView;
use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_quit(key) {
        app.request_quit();
        return;
    }

    if let Some(trigger) = CounterView::trigger_for_key(key) {
        app.trigger(trigger);
    }
}

pub fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    if mouse.kind == MouseEventKind::Down(MouseButton::Left) {
        app.on_click(mouse.column, mouse.row);
    }
}

fn is_quit(key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Esc => true,
        KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&'q') => {
            !key.modifiers.contains(KeyModifiers::ALT)
        }
        KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&'c') => {
            key.modifiers.contains(KeyModifiers::CONTROL)
        }
        _ => false,
    }
}
