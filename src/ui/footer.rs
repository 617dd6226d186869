use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT};
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Paragraph, Widget};

const VERSION: &str = env!("CARGO_PKG_VERSION");

const KEY_HINTS: &str = " ↑/+/k: Up │ ↓/-/j: Down │ q: Quit";
const MOUSE_HINTS: &str = " ↑/+/k: Up │ ↓/-/j: Down │ Click: Press │ q: Quit";

/// Key hints on the left, version on the right.
pub struct Footer {
    mouse_enabled: bool,
}

impl Footer {
    pub fn new(mouse_enabled: bool) -> Self {
        Self { mouse_enabled }
    }

    /// Only advertises clicking when mouse capture is on.
    pub fn hints(&self) -> &'static str {
        if self.mouse_enabled {
            MOUSE_HINTS
        } else {
            KEY_HINTS
        }
    }
}

impl Widget for Footer {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered().border_style(Style::default().fg(GLOBAL_BORDER));
        let inner = block.inner(area);
        block.render(area, buf);

        let style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);
        let version = format!("v{} ", VERSION);
        let [hints_area, version_area] = Layout::horizontal([
            Constraint::Min(0),
            Constraint::Length(version.chars().count() as u16),
        ])
        .areas(inner);

        Paragraph::new(self.hints())
            .style(style)
            .render(hints_area, buf);
        Paragraph::new(version)
            .style(style)
            .alignment(Alignment::Right)
            .render(version_area, buf);
    }
}
