//! Program console: streamed output plus a stdin line.

use ratatui::{
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::domain::{App, Focus};

use super::Palette;

pub fn render(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let focused = app.focus == Focus::Console;
    let status = if app.is_running() { " running " } else { " idle " };
    let block = Block::default()
        .title(Line::from(vec![
            Span::styled(" Console ", palette.title()),
            Span::styled(status, Style::default().fg(palette.muted)),
        ]))
        .borders(Borders::ALL)
        .border_style(palette.border(focused));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(inner);

    let text = app.console.text();
    let total = text.split('\n').count();
    let scroll = total.saturating_sub(usize::from(chunks[0].height));
    let output = Paragraph::new(text)
        .wrap(Wrap { trim: false })
        .scroll((scroll as u16, 0));
    frame.render_widget(output, chunks[0]);

    let prompt = "> ";
    let input = Paragraph::new(Line::from(vec![
        Span::styled(prompt, Style::default().fg(palette.key)),
        Span::raw(app.console_input.as_str()),
    ]));
    frame.render_widget(input, chunks[1]);

    if focused {
        let x = chunks[1].x + (prompt.len() + app.console_input.chars().count()) as u16;
        if x < chunks[1].right() {
            frame.set_cursor_position(Position::new(x, chunks[1].y));
        }
    }
}
