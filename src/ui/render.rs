use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{body_block, counter_rect, layout_regions};
use crate::ui::theme::GLOBAL_BORDER;
use ratatui::style::Style;
use ratatui::widgets::Clear;
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(Header::new().widget(app.mouse_enabled()), header);
    frame.render_widget(Clear, body);
    frame.render_widget(
        body_block().border_style(Style::default().fg(GLOBAL_BORDER)),
        body,
    );
    frame.render_widget(app.view(), counter_rect(area));
    frame.render_widget(Footer::new(app.mouse_enabled()), footer);
}
