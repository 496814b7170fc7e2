use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Gauge, List, ListItem, Paragraph, Wrap},
    Frame,
};

use super::{card, fit};
use crate::app::App;
use crate::data;

pub fn render(f: &mut Frame, app: &App, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(0)])
        .margin(1)
        .split(area);

    render_stats_row(f, app, rows[0]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(62), Constraint::Percentage(38)])
        .split(rows[1]);

    render_main_column(f, app, columns[0]);
    render_side_column(f, app, columns[1]);
}

fn render_stats_row(f: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(34),
            Constraint::Percentage(33),
            Constraint::Percentage(33),
        ])
        .split(area);

    // Git journey: completion gauge
    let block = card(" GIT JOURNEY ", theme);
    let inner = block.inner(chunks[0]);
    f.render_widget(block, chunks[0]);
    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner);
    f.render_widget(
        Gauge::default()
            .ratio(f64::from(data::JOURNEY_PERCENT) / 100.0)
            .label(format!("{}%", data::JOURNEY_PERCENT))
            .gauge_style(Style::default().fg(theme.accent).bg(theme.chart_dim))
            .use_unicode(true),
        parts[1],
    );
    f.render_widget(
        Paragraph::new(Span::styled(
            data::JOURNEY_CAPTION,
            Style::default().fg(theme.accent),
        )),
        parts[2],
    );

    // Missions
    let block = card(" MISSIONS ", theme);
    let inner = block.inner(chunks[1]);
    f.render_widget(block, chunks[1]);
    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Length(1)])
        .split(inner);
    f.render_widget(
        Paragraph::new(Span::styled(
            format!("{} / {}", data::MISSIONS_DONE, data::MISSIONS_TOTAL),
            Style::default()
                .fg(theme.foreground)
                .add_modifier(Modifier::BOLD),
        )),
        parts[0],
    );
    f.render_widget(
        Paragraph::new(Span::styled(
            data::MISSIONS_CAPTION,
            Style::default().fg(theme.highlight),
        )),
        parts[1],
    );

    // Practice hours
    let block = card(" PRACTICE ", theme);
    let inner = block.inner(chunks[2]);
    f.render_widget(block, chunks[2]);
    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Length(1)])
        .split(inner);
    f.render_widget(
        Paragraph::new(Span::styled(
            data::PRACTICE_HOURS,
            Style::default()
                .fg(theme.foreground)
                .add_modifier(Modifier::BOLD),
        )),
        parts[0],
    );
    f.render_widget(
        Paragraph::new(Span::styled(
            data::PRACTICE_CAPTION,
            Style::default().fg(theme.warning),
        )),
        parts[1],
    );
}

fn render_main_column(f: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6),
            Constraint::Length(10),
            Constraint::Min(0),
        ])
        .split(area);

    // Next mission
    let mission = card(" NEXT MISSION ", theme);
    let inner = mission.inner(rows[0]);
    f.render_widget(mission, rows[0]);
    let lines = vec![
        Line::from(vec![
            Span::styled(
                format!(" {} ", data::NEXT_MISSION.difficulty),
                Style::default().fg(theme.success).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!(" {}M ", data::NEXT_MISSION.minutes),
                Style::default().fg(theme.warning).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(
            data::NEXT_MISSION.title,
            Style::default()
                .fg(theme.foreground)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("MODULE: {}", data::NEXT_MISSION.module),
            Style::default().fg(theme.muted),
        )),
        Line::from(Span::styled(
            "▶ START MISSION (press 3)",
            Style::default().fg(theme.warning).add_modifier(Modifier::BOLD),
        )),
    ];
    f.render_widget(Paragraph::new(lines), inner);

    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[1]);

    render_achievements(f, app, cards[0]);
    render_skill_growth(f, app, cards[1]);

    // Recently practiced
    let block = card(" RECENTLY PRACTICED ", theme);
    let inner = block.inner(rows[2]);
    f.render_widget(block, rows[2]);
    let width = inner.width.saturating_sub(20) as usize;
    let items: Vec<ListItem> = data::RECENT_PRACTICE
        .iter()
        .map(|entry| {
            ListItem::new(Line::from(vec![
                Span::styled("❯ ", Style::default().fg(theme.muted)),
                Span::styled(
                    fit(entry.title, width),
                    Style::default()
                        .fg(theme.foreground)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("  {} • {}  ", entry.module, entry.time),
                    Style::default().fg(theme.muted),
                ),
                Span::styled("DONE", Style::default().fg(theme.success)),
            ]))
        })
        .collect();
    f.render_widget(List::new(items), inner);
}

fn render_achievements(f: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let block = card(" ACHIEVEMENTS ", theme);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let items: Vec<ListItem> = data::ACHIEVEMENTS
        .iter()
        .map(|item| {
            let style = if item.locked {
                Style::default().fg(theme.muted).add_modifier(Modifier::DIM)
            } else {
                Style::default().fg(theme.foreground)
            };
            let suffix = if item.locked { "  (locked)" } else { "" };
            ListItem::new(format!(" {}  {}{}", item.icon, item.name, suffix)).style(style)
        })
        .collect();
    f.render_widget(List::new(items), inner);
}

fn render_skill_growth(f: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let block = card(" SKILL GROWTH ", theme);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0)])
        .split(inner);
    f.render_widget(
        Paragraph::new(Span::styled(
            data::SKILL_GROWTH_CAPTION,
            Style::default().fg(theme.accent),
        )),
        parts[0],
    );

    // Last bar carries the accent, the rest stay dim, as in the mock chart.
    let last = data::SKILL_GROWTH.len() - 1;
    let bars: Vec<Bar> = data::SKILL_GROWTH
        .iter()
        .enumerate()
        .map(|(i, point)| {
            let color = if i == last {
                theme.accent
            } else {
                theme.chart_dim
            };
            Bar::default()
                .value(point.value)
                .label(Line::from(point.day))
                .style(Style::default().fg(color))
                .value_style(Style::default().fg(color).add_modifier(Modifier::REVERSED))
        })
        .collect();
    f.render_widget(
        BarChart::default()
            .data(BarGroup::default().bars(&bars))
            .bar_width(3)
            .bar_gap(1),
        parts[1],
    );
}

fn render_side_column(f: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6),
            Constraint::Length(8),
            Constraint::Min(0),
        ])
        .split(area);

    // Quick actions: 2x2 grid
    let grid_rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(3)])
        .split(rows[0]);
    for (row_idx, row_area) in grid_rows.iter().enumerate() {
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(*row_area);
        for (col_idx, cell) in cells.iter().enumerate() {
            let action = &data::QUICK_ACTIONS[row_idx * 2 + col_idx];
            let (border, text) = if action.active {
                (
                    Style::default().fg(theme.accent),
                    Style::default()
                        .fg(theme.selection_fg)
                        .bg(theme.selection_bg)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                (
                    Style::default().fg(theme.border),
                    Style::default().fg(theme.muted),
                )
            };
            f.render_widget(
                Paragraph::new(action.label)
                    .style(text)
                    .alignment(Alignment::Center)
                    .block(Block::default().borders(Borders::ALL).border_style(border)),
                *cell,
            );
        }
    }

    // Daily challenge
    let block = card(" DAILY_CHALLENGE ", theme);
    let inner = block.inner(rows[1]);
    f.render_widget(block, rows[1]);
    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner);
    f.render_widget(
        Paragraph::new(Span::styled(
            data::DAILY_CHALLENGE.title,
            Style::default()
                .fg(theme.foreground)
                .add_modifier(Modifier::BOLD),
        ))
        .wrap(Wrap { trim: true }),
        parts[0],
    );
    f.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled("SYNC_PROGRESS ", Style::default().fg(theme.muted)),
            Span::styled(
                format!("{:02} / {:02}", data::DAILY_CHALLENGE.done, data::DAILY_CHALLENGE.total),
                Style::default().fg(theme.highlight),
            ),
        ])),
        parts[1],
    );
    f.render_widget(
        Gauge::default()
            .ratio(f64::from(data::DAILY_CHALLENGE.done) / f64::from(data::DAILY_CHALLENGE.total))
            .label("")
            .gauge_style(Style::default().fg(theme.highlight).bg(theme.chart_dim))
            .use_unicode(true),
        parts[2],
    );
    f.render_widget(
        Paragraph::new(Span::styled(
            format!("+{} XP", data::DAILY_CHALLENGE.xp),
            Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
        )),
        parts[3],
    );

    // Leaderboard
    let block = card(" LEADERBOARD ", theme);
    let inner = block.inner(rows[2]);
    f.render_widget(block, rows[2]);
    let width = inner.width.saturating_sub(16) as usize;
    let items: Vec<ListItem> = data::LEADERBOARD
        .iter()
        .map(|user| {
            let style = if user.is_me {
                Style::default()
                    .fg(theme.selection_fg)
                    .bg(theme.selection_bg)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.foreground)
            };
            ListItem::new(Line::from(vec![
                Span::styled(format!(" {}  ", user.rank), Style::default().fg(theme.muted)),
                Span::raw(format!("{:w$}", fit(user.name, width), w = width)),
                Span::styled(format!("{} XP", user.xp), Style::default().fg(theme.muted)),
            ]))
            .style(style)
        })
        .collect();
    f.render_widget(List::new(items), inner);
}
