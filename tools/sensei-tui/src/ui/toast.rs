//! Toast notifications stacked in the top-right corner.

use ratatui::{
    layout::Rect,
    style::Style,
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::domain::App;

use super::Palette;

const TOAST_WIDTH: u16 = 44;
const TOAST_HEIGHT: u16 = 4;

pub fn render(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let width = TOAST_WIDTH.min(area.width);
    let x = area.right().saturating_sub(width + 1);
    let mut y = area.y + 1;

    for toast in app.toasts.iter() {
        if y + TOAST_HEIGHT > area.bottom() {
            break;
        }
        let rect = Rect::new(x, y, width, TOAST_HEIGHT);
        frame.render_widget(Clear, rect);

        let body = Paragraph::new(Line::raw(toast.description.as_str()))
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .title(format!(" {} ", toast.title))
                    .title_style(palette.title())
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(palette.accent))
                    .style(palette.base()),
            );
        frame.render_widget(body, rect);
        y += TOAST_HEIGHT;
    }
}
