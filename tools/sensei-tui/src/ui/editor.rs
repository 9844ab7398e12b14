//! Code editor pane.

use ratatui::{
    layout::{Position, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::domain::{App, Focus};

use super::Palette;

pub fn render(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let focused = app.focus == Focus::Editor;
    let block = Block::default()
        .title(" main.cpp ")
        .title_style(palette.title())
        .borders(Borders::ALL)
        .border_style(palette.border(focused));
    let inner = block.inner(area);

    let editor = &app.editor;
    let gutter = editor.line_count().to_string().len();
    let (row, col) = editor.cursor();
    let scroll = row.saturating_sub(usize::from(inner.height.saturating_sub(1)));

    let lines: Vec<Line> = editor
        .line_numbers()
        .into_iter()
        .zip(editor.lines())
        .map(|(number, text)| {
            Line::from(vec![
                Span::styled(
                    format!("{number:>gutter$} "),
                    Style::default().fg(palette.muted),
                ),
                Span::raw(text.as_str()),
            ])
        })
        .collect();

    let paragraph = Paragraph::new(lines)
        .block(block)
        .scroll((scroll as u16, 0));
    frame.render_widget(paragraph, area);

    if focused {
        let x = inner.x + (gutter + 1 + col) as u16;
        let y = inner.y + (row - scroll) as u16;
        if x < inner.right() && y < inner.bottom() {
            frame.set_cursor_position(Position::new(x, y));
        }
    }
}
