//! Explanation panel: idle hint, line-by-line results or the full walkthrough.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use sensei_types::Region;

use crate::domain::{App, Focus, LinePanel};

use super::Palette;

pub fn render(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let mode = app.view.explanation_mode;
    let mut title = vec![Span::styled(format!(" {} ", mode.title()), palette.title())];
    if let Some(badge) = mode.badge() {
        title.push(Span::styled(
            format!("[{badge}] "),
            Style::default().fg(palette.key),
        ));
    }

    let block = Block::default()
        .title(Line::from(title))
        .title_bottom(Line::from(Span::styled(
            format!(" {} ", app.view.style.label()),
            Style::default().fg(palette.muted),
        )))
        .borders(Borders::ALL)
        .border_style(palette.border(app.focus == Focus::Explanation));

    let lines = match app.view.visible_region() {
        Region::Idle => idle_lines(palette),
        Region::Lines => line_entries(&app.lines, palette),
        Region::Full => full_sections(app, palette),
    };

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

fn idle_lines(palette: &Palette) -> Vec<Line<'static>> {
    let muted = Style::default().fg(palette.muted);
    vec![
        Line::raw(""),
        Line::styled("Ready to explain your code", palette.title()),
        Line::raw(""),
        Line::styled("Ctrl+L  explain every line", muted),
        Line::styled("Ctrl+F  walk through the whole program", muted),
    ]
}

fn line_entries<'a>(panel: &'a LinePanel, palette: &Palette) -> Vec<Line<'a>> {
    match panel {
        LinePanel::Entries(entries) => {
            let mut lines = Vec::with_capacity(entries.len() * 3);
            for entry in entries {
                lines.push(Line::from(vec![
                    Span::styled(
                        format!(" {} ", entry.badge()),
                        Style::default()
                            .fg(palette.bg)
                            .bg(palette.accent)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(" "),
                    Span::styled(entry.preview.as_str(), Style::default().fg(palette.key)),
                ]));
                lines.push(Line::raw(entry.explanation.as_str()));
                lines.push(Line::raw(""));
            }
            lines
        }
        LinePanel::Failed(message) => {
            vec![Line::styled(message.as_str(), Style::default().fg(palette.error))]
        }
        other => vec![Line::styled(
            other.message().unwrap_or_default(),
            Style::default().fg(palette.muted),
        )],
    }
}

fn full_sections<'a>(app: &'a App, palette: &Palette) -> Vec<Line<'a>> {
    let focused = app.focus == Focus::Explanation;
    let mut lines = Vec::new();

    for (index, section) in app.full.sections().iter().enumerate() {
        let open = app.full.is_open(index);
        let marker = if open { "▼" } else { "▶" };
        let mut style = Style::default().add_modifier(Modifier::BOLD);
        if focused && index == app.full.selected() {
            style = style.fg(palette.bg).bg(palette.focus);
        }
        lines.push(Line::styled(format!("{marker} {}", section.title), style));
        if open {
            lines.push(Line::raw(section.content(app.view.style)));
        }
        lines.push(Line::raw(""));
    }
    lines
}
