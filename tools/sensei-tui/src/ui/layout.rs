//! Main layout orchestration.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  SENSEI  C++ learning environment          Beginner Mode  dark  │
//! ├──────────────────────────────────┬──────────────────────────────┤
//! │  EDITOR                          │  EXPLANATION PANEL           │
//! │   1 #include <iostream>          │  (idle / lines / full)       │
//! │  ...                             │              ┌ AI Assistant ┐│
//! ├──────────────────────────────────┴──────────────┤ (expanded)   ││
//! │  CONSOLE (after a run)                          └──────────────┘│
//! ├─────────────────────────────────────────────────────────────────┤
//! │  ^R Run  ^L Lines  ^F Full  ^B Style  ^T Theme  ^S Save  ^K Chat│
//! └─────────────────────────────────────────────────────────────────┘
//! ```

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::domain::App;

use super::{chat, console, editor, explanation, toast, Palette};

/// Render the entire UI.
pub fn render(frame: &mut Frame, app: &App) {
    let palette = Palette::for_theme(app.theme());
    let size = frame.area();
    frame.render_widget(Block::default().style(palette.base()), size);

    let mut constraints = vec![
        Constraint::Length(3), // Header
        Constraint::Min(8),    // Body
    ];
    if app.view.console_visible {
        constraints.push(Constraint::Length(12));
    }
    constraints.push(Constraint::Length(3)); // Footer

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(size);

    render_header(frame, chunks[0], app, &palette);
    render_body(frame, chunks[1], app, &palette);
    if app.view.console_visible {
        console::render(frame, chunks[2], app, &palette);
    }
    render_footer(frame, chunks[chunks.len() - 1], app, &palette);

    if app.view.chatbox_expanded {
        chat::render(frame, chunks[1], app, &palette);
    }
    toast::render(frame, size, app, &palette);
}

fn render_header(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let title = vec![
        Span::styled(" SENSEI ", palette.title()),
        Span::styled("C++ learning environment", Style::default().fg(palette.muted)),
    ];

    let mut status = vec![Span::styled(
        format!(" {} ", app.view.style.label()),
        Style::default().fg(palette.key).add_modifier(Modifier::BOLD),
    )];
    if app.is_running() {
        status.push(Span::styled(" ● running ", Style::default().fg(palette.accent)));
    }
    status.push(Span::styled(
        format!(" {} ", app.theme()),
        Style::default().fg(palette.muted),
    ));

    let used: usize = title
        .iter()
        .chain(status.iter())
        .map(|s| s.content.chars().count())
        .sum();
    let padding = area.width.saturating_sub(used as u16 + 2);

    let mut spans = title;
    spans.push(Span::raw(" ".repeat(padding as usize)));
    spans.extend(status);

    let header = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(palette.border(false)),
    );
    frame.render_widget(header, area);
}

fn render_body(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    editor::render(frame, body[0], app, palette);
    explanation::render(frame, body[1], app, palette);
}

fn render_footer(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let key = Style::default().fg(palette.key);
    let mut keybinds = vec![
        Span::styled("[^R]", key),
        Span::raw(" Run  "),
        Span::styled("[^L]", key),
        Span::raw(" Lines  "),
        Span::styled("[^F]", key),
        Span::raw(" Full  "),
        Span::styled("[^B]", key),
        Span::raw(" Style  "),
        Span::styled("[^T]", key),
        Span::raw(" Theme  "),
        Span::styled("[^S]", key),
        Span::raw(" Save  "),
        Span::styled("[^K]", key),
        Span::raw(if app.view.chatbox_expanded { " Hide chat  " } else { " AI Assistant  " }),
        Span::styled("[^N]", key),
        Span::raw(" Next pane  "),
    ];
    if app.view.console_visible {
        keybinds.push(Span::styled("[Esc]", key));
        keybinds.push(Span::raw(" Close console  "));
    }
    keybinds.push(Span::styled("[^Q]", key));
    keybinds.push(Span::raw(" Quit"));

    let footer = Paragraph::new(Line::from(keybinds))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(palette.border(false)),
        )
        .centered();
    frame.render_widget(footer, area);
}

/// Rectangle of `width` x `height` anchored to the bottom-right of `area`.
pub(crate) fn bottom_right(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + area.width - width,
        y: area.y + area.height - height,
        width,
        height,
    }
}
