use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

use super::card;
use crate::app::{App, TranscriptLine};
use crate::data;

pub fn render(f: &mut Frame, app: &App, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(0)])
        .split(area);

    render_header(f, app, rows[0]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(22),
            Constraint::Min(0),
            Constraint::Length(36),
        ])
        .split(rows[1]);

    render_explorer(f, app, columns[0]);

    let middle = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(columns[1]);
    render_editor(f, app, middle[0]);
    render_terminal(f, app, middle[1]);

    render_mentor(f, app, columns[2]);
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(theme.border));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(24)])
        .split(inner);

    f.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(
                data::PRACTICE_TITLE,
                Style::default()
                    .fg(theme.foreground)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("  ● ", Style::default().fg(theme.success)),
            Span::styled(data::REPO_STATUS, Style::default().fg(theme.muted)),
        ])),
        chunks[0],
    );
    f.render_widget(
        Paragraph::new(Span::styled(
            "Esc FINISH MISSION",
            Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Right),
        chunks[1],
    );
}

fn render_explorer(f: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let block = card(" EXPLORER ", theme);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let items: Vec<ListItem> = data::EXPLORER
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let style = if i == app.explorer_idx {
                Style::default()
                    .fg(theme.selection_fg)
                    .bg(theme.selection_bg)
            } else if entry.is_dir {
                Style::default().fg(theme.accent)
            } else {
                Style::default().fg(theme.foreground)
            };
            let prefix = if entry.is_dir { "▸ " } else { "  " };
            let indent = if entry.nested { "  " } else { "" };
            ListItem::new(format!("{}{}{}", indent, prefix, entry.name)).style(style)
        })
        .collect();
    f.render_widget(List::new(items), inner);
}

fn render_editor(f: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let file = app.active_file().unwrap_or("index.js");
    let title = format!(" EDITOR - {} ", file);
    let block = card(&title, theme);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let mut lines = Vec::with_capacity(inner.height as usize);
    for row in 0..inner.height as usize {
        let number = Span::styled(format!("{:>3} ", row + 1), Style::default().fg(theme.muted));
        let content = match data::EDITOR_SNIPPET.get(row) {
            Some(text) if text.trim_start().starts_with("//") => Span::styled(
                *text,
                Style::default().fg(theme.muted).add_modifier(Modifier::ITALIC),
            ),
            Some(text) => Span::styled(*text, Style::default().fg(theme.foreground)),
            None => Span::raw(""),
        };
        lines.push(Line::from(vec![number, content]));
    }
    f.render_widget(Paragraph::new(lines), inner);
}

fn render_terminal(f: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    // The command line keeps the input focus, so this pane carries the
    // active border.
    let block = card(" TERMINAL ", theme).border_style(Style::default().fg(theme.border_active));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(inner);

    let lines: Vec<Line> = app
        .transcript
        .iter()
        .map(|entry| match entry {
            TranscriptLine::Command(cmd) => Line::from(vec![
                Span::styled("➜ ", Style::default().fg(theme.success)),
                Span::styled("~/project ", Style::default().fg(theme.accent)),
                Span::styled(cmd.clone(), Style::default().fg(theme.foreground)),
            ]),
            TranscriptLine::Output(out) => {
                Line::from(Span::styled(out.clone(), Style::default().fg(theme.muted)))
            }
        })
        .collect();

    // Keep the tail visible once the transcript outgrows the pane.
    let skip = lines.len().saturating_sub(parts[0].height as usize);
    f.render_widget(Paragraph::new(lines[skip..].to_vec()), parts[0]);

    let prompt = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(12), Constraint::Min(0)])
        .split(parts[1]);
    f.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled("➜ ", Style::default().fg(theme.success)),
            Span::styled("~/project", Style::default().fg(theme.accent)),
        ])),
        prompt[0],
    );

    let mut input = app.terminal_input.clone();
    input.set_style(Style::default().fg(theme.foreground));
    input.set_placeholder_style(Style::default().fg(theme.muted));
    f.render_widget(&input, prompt[1]);
}

fn render_mentor(f: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let block = card(" AI MENTOR ", theme);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .split(inner);

    f.render_widget(
        Paragraph::new(vec![
            Line::from(Span::styled(
                data::MENTOR_NAME,
                Style::default()
                    .fg(theme.foreground)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "online",
                Style::default().fg(theme.success),
            )),
        ]),
        parts[0],
    );

    f.render_widget(
        Paragraph::new(data::MENTOR_GREETING)
            .style(Style::default().fg(theme.foreground))
            .wrap(Wrap { trim: true }),
        parts[1],
    );

    f.render_widget(
        Paragraph::new("VISUALIZING GRAPH...")
            .style(Style::default().fg(theme.muted))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme.border)),
            ),
        parts[2],
    );

    let hints = data::MENTOR_HINTS
        .iter()
        .map(|hint| format!("[ {} ]", hint))
        .collect::<Vec<_>>()
        .join(" ");
    f.render_widget(
        Paragraph::new(hints).style(Style::default().fg(theme.muted)),
        parts[3],
    );
}
