// Shell rendering: sidebar, top bar, and dispatch into the four views

pub mod dashboard;
pub mod learning;
pub mod practice;
pub mod progress;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::app::{App, View};
use crate::data;
use crate::theme::{Theme, ThemeMode};

pub struct AppLayout {
    pub sidebar: Rect,
    pub topbar: Rect,
    pub content: Rect,
}

pub fn get_layout_chunks(area: Rect, view: &View) -> AppLayout {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(22), Constraint::Min(0)])
        .split(area);

    let sidebar = chunks[0];

    // The practice workspace takes the whole column; every other view keeps
    // the top bar.
    let topbar_height = if *view == View::Practice { 0 } else { 3 };
    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(topbar_height), Constraint::Min(0)])
        .split(chunks[1]);

    AppLayout {
        sidebar,
        topbar: right[0],
        content: right[1],
    }
}

pub fn ui(f: &mut Frame, app: &mut App) {
    let layout = get_layout_chunks(f.area(), &app.view);

    // Whole-frame background in the current palette
    f.render_widget(
        Block::default().style(
            Style::default()
                .bg(app.theme.background)
                .fg(app.theme.foreground),
        ),
        f.area(),
    );

    render_sidebar(f, app, layout.sidebar);
    if layout.topbar.height > 0 {
        render_topbar(f, app, layout.topbar);
    }

    match app.view {
        View::Dashboard => dashboard::render(f, app, layout.content),
        View::Learning => learning::render(f, app, layout.content),
        View::Practice => practice::render(f, app, layout.content),
        View::Progress => progress::render(f, app, layout.content),
    }
}

fn render_sidebar(f: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let block = Block::default()
        .borders(Borders::RIGHT)
        .border_style(Style::default().fg(theme.border))
        .style(Style::default().bg(theme.surface));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(inner);

    let logo = Paragraph::new(Line::from(vec![
        Span::styled(
            " ❯_ ",
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "GitFlow",
            Style::default()
                .fg(theme.foreground)
                .add_modifier(Modifier::BOLD),
        ),
    ]));
    f.render_widget(logo, chunks[0]);

    let width = chunks[1].width.saturating_sub(4) as usize;
    let items: Vec<ListItem> = View::ALL
        .iter()
        .map(|view| {
            let active = *view == app.view;
            let style = if active {
                Style::default()
                    .fg(theme.selection_fg)
                    .bg(theme.selection_bg)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.muted)
            };
            ListItem::new(format!(" {} {}", view.glyph(), fit(view.label(), width))).style(style)
        })
        .collect();
    f.render_widget(List::new(items), chunks[1]);

    let hints = Paragraph::new(vec![
        Line::from(Span::styled(
            " Tab/1-4 views",
            Style::default().fg(theme.muted),
        )),
        Line::from(Span::styled(
            " t theme · q quit",
            Style::default().fg(theme.muted),
        )),
    ]);
    f.render_widget(hints, chunks[2]);
}

fn render_topbar(f: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(theme.border));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(36)])
        .split(inner);

    let title = Paragraph::new(vec![
        Line::from(Span::styled(
            app.view.title().to_uppercase(),
            Style::default()
                .fg(theme.foreground)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled("SYSTEM STATUS: ", Style::default().fg(theme.muted)),
            Span::styled("ACTIVE", Style::default().fg(theme.success)),
            Span::styled(
                format!(" // USER: {}", data::USER_NAME),
                Style::default().fg(theme.muted),
            ),
        ]),
    ]);
    f.render_widget(title, chunks[0]);

    // Moon in light mode, sun in dark mode, as on the web top bar
    let toggle_glyph = match theme.mode {
        ThemeMode::Light => "☾",
        ThemeMode::Dark => "☀",
    };
    let status = Paragraph::new(vec![
        Line::from(vec![
            Span::styled("● ", Style::default().fg(theme.accent)),
            Span::styled(
                data::USER_XP,
                Style::default()
                    .fg(theme.foreground)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled("● ", Style::default().fg(theme.warning)),
            Span::styled(
                data::USER_CREDITS,
                Style::default()
                    .fg(theme.foreground)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(
            format!("{} t toggles theme", toggle_glyph),
            Style::default().fg(theme.muted),
        )),
    ])
    .alignment(Alignment::Right);
    f.render_widget(status, chunks[1]);
}

/// Bordered card with a bold title, shared by every view.
pub(crate) fn card<'a>(title: &'a str, theme: &Theme) -> Block<'a> {
    Block::default()
        .title(title)
        .title_style(
            Style::default()
                .fg(theme.foreground)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border))
        .style(Style::default().bg(theme.surface))
}

/// Truncate to a display width, ellipsis when it does not fit.
pub(crate) fn fit(text: &str, width: usize) -> String {
    if width == 0 {
        return String::new();
    }
    if text.width() <= width {
        return text.to_string();
    }
    let mut out = String::with_capacity(width);
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w >= width {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_layout_chunks() {
        let area = Rect::new(0, 0, 120, 40);
        let layout = get_layout_chunks(area, &View::Dashboard);

        assert_eq!(layout.sidebar.width, 22);
        assert_eq!(layout.topbar.height, 3);
        assert_eq!(layout.content.height, 37);
        assert_eq!(layout.content.x, 22);
    }

    #[test]
    fn test_practice_layout_has_no_topbar() {
        let area = Rect::new(0, 0, 120, 40);
        let layout = get_layout_chunks(area, &View::Practice);

        assert_eq!(layout.topbar.height, 0);
        assert_eq!(layout.content.height, 40);
    }

    #[test]
    fn test_fit_passes_short_text_through() {
        assert_eq!(fit("Dashboard", 20), "Dashboard");
    }

    #[test]
    fn test_fit_truncates_with_ellipsis() {
        assert_eq!(fit("Learning Path", 6), "Learn…");
        assert_eq!(fit("anything", 0), "");
    }
}
