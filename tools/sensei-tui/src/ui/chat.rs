//! AI assistant chat overlay.

use ratatui::{
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::domain::{App, Focus, QuickAction, Sender};

use super::{layout::bottom_right, Palette};

pub fn render(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let popup = bottom_right(area.width * 2 / 5, area.height.saturating_sub(2).max(10), area);
    frame.render_widget(Clear, popup);

    let focused = app.focus == Focus::Chat;
    let block = Block::default()
        .title(" AI Assistant ")
        .title_style(palette.title())
        .borders(Borders::ALL)
        .border_style(palette.border(focused))
        .style(palette.base());
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),    // Messages
            Constraint::Length(1), // Quick actions
            Constraint::Length(1), // Input
        ])
        .split(inner);

    let mut lines = Vec::new();
    for message in app.chat.messages() {
        let (who, style) = match message.sender {
            Sender::User => ("You", Style::default().fg(palette.key)),
            Sender::Ai => ("AI", Style::default().fg(palette.accent)),
        };
        lines.push(Line::from(vec![
            Span::styled(format!("{who}: "), style.add_modifier(Modifier::BOLD)),
            Span::raw(message.text.as_str()),
        ]));
    }
    if app.chat.pending_replies() > 0 {
        lines.push(Line::styled("AI is typing...", Style::default().fg(palette.muted)));
    }
    let total = lines.len();
    let scroll = total.saturating_sub(usize::from(chunks[0].height));
    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .scroll((scroll as u16, 0)),
        chunks[0],
    );

    let mut actions = Vec::new();
    for (i, action) in QuickAction::ALL.iter().enumerate() {
        actions.push(Span::styled(format!("[F{}]", i + 1), Style::default().fg(palette.key)));
        actions.push(Span::styled(
            format!(" {}  ", action.label()),
            Style::default().fg(palette.muted),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(actions)), chunks[1]);

    let prompt = "Ask: ";
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(prompt, Style::default().fg(palette.key)),
            Span::raw(app.chat_input.as_str()),
        ])),
        chunks[2],
    );
    if focused {
        let x = chunks[2].x + (prompt.len() + app.chat_input.chars().count()) as u16;
        if x < chunks[2].right() {
            frame.set_cursor_position(Position::new(x, chunks[2].y));
        }
    }
}
