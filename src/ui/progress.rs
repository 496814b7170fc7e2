use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Gauge, Paragraph, Wrap},
    Frame,
};

use super::card;
use crate::app::App;
use crate::data;

pub fn render(f: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(6),
        ])
        .margin(1)
        .split(area);

    let header = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(32)])
        .split(rows[0]);
    f.render_widget(
        Paragraph::new("Detailed analysis of your Git mastery and learning journey.")
            .style(Style::default().fg(theme.muted)),
        header[0],
    );
    f.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled("▲ SKILL LEVEL: ", Style::default().fg(theme.success)),
            Span::styled(
                data::SKILL_LEVEL,
                Style::default()
                    .fg(theme.foreground)
                    .add_modifier(Modifier::BOLD),
            ),
        ]))
        .alignment(Alignment::Right),
        header[1],
    );

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(58), Constraint::Percentage(42)])
        .split(rows[1]);

    render_efficiency(f, app, columns[0]);
    render_skills(f, app, columns[1]);
    render_timeline(f, app, rows[2]);
}

fn render_efficiency(f: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let block = card(" EFFICIENCY TREND ", theme);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(2),
        ])
        .split(inner);

    f.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled("■ ", Style::default().fg(theme.accent)),
            Span::styled("CURRENT   ", Style::default().fg(theme.muted)),
            Span::styled("■ ", Style::default().fg(theme.chart_dim)),
            Span::styled("PREVIOUS", Style::default().fg(theme.muted)),
        ])),
        parts[0],
    );

    let mut chart = BarChart::default().bar_width(4).bar_gap(1).group_gap(3);
    let bars: Vec<Vec<Bar>> = data::EFFICIENCY
        .iter()
        .map(|week| {
            vec![
                Bar::default()
                    .value(week.current)
                    .style(Style::default().fg(theme.accent))
                    .value_style(
                        Style::default()
                            .fg(theme.accent)
                            .add_modifier(Modifier::REVERSED),
                    ),
                Bar::default()
                    .value(week.previous)
                    .style(Style::default().fg(theme.chart_dim))
                    .value_style(
                        Style::default()
                            .fg(theme.chart_dim)
                            .add_modifier(Modifier::REVERSED),
                    ),
            ]
        })
        .collect();
    for (week, group) in data::EFFICIENCY.iter().zip(bars.iter()) {
        chart = chart.data(
            BarGroup::default()
                .label(Line::from(Span::styled(
                    week.week,
                    Style::default().fg(theme.muted),
                )))
                .bars(group),
        );
    }
    f.render_widget(chart, parts[1]);

    let stats = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(34),
            Constraint::Percentage(33),
            Constraint::Percentage(33),
        ])
        .split(parts[2]);
    for (stat, chunk) in data::PROGRESS_STATS.iter().zip(stats.iter()) {
        let value_color = if stat.value.starts_with('-') {
            theme.success
        } else {
            theme.foreground
        };
        f.render_widget(
            Paragraph::new(vec![
                Line::from(Span::styled(stat.label, Style::default().fg(theme.muted))),
                Line::from(Span::styled(
                    stat.value,
                    Style::default().fg(value_color).add_modifier(Modifier::BOLD),
                )),
            ])
            .alignment(Alignment::Center),
            *chunk,
        );
    }
}

fn render_skills(f: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let block = card(" SKILL DISTRIBUTION ", theme);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let mut constraints = vec![Constraint::Length(1); data::SKILL_DISTRIBUTION.len()];
    constraints.push(Constraint::Min(0));
    let lanes = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    for (skill, lane) in data::SKILL_DISTRIBUTION.iter().zip(lanes.iter()) {
        let split = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(15), Constraint::Min(0)])
            .split(*lane);
        f.render_widget(
            Paragraph::new(skill.subject).style(Style::default().fg(theme.muted)),
            split[0],
        );
        f.render_widget(
            Gauge::default()
                .ratio(f64::from(skill.score) / f64::from(skill.full_mark))
                .label(format!("{}", skill.score))
                .gauge_style(Style::default().fg(theme.accent).bg(theme.chart_dim))
                .use_unicode(true),
            split[1],
        );
    }

    f.render_widget(
        Paragraph::new(data::SKILL_NOTE)
            .style(Style::default().fg(theme.accent))
            .wrap(Wrap { trim: true }),
        lanes[data::SKILL_DISTRIBUTION.len()],
    );
}

fn render_timeline(f: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let block = card(" MASTERY TIMELINE ", theme);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(25); 4])
        .split(inner);

    for (event, column) in data::MASTERY_TIMELINE.iter().zip(columns.iter()) {
        let status_color = match event.status {
            "Completed" => theme.success,
            "In Progress" => theme.accent,
            _ => theme.muted,
        };
        f.render_widget(
            Paragraph::new(vec![
                Line::from(vec![
                    Span::styled("● ", Style::default().fg(theme.accent)),
                    Span::styled(event.date, Style::default().fg(theme.muted)),
                ]),
                Line::from(Span::styled(
                    event.event,
                    Style::default()
                        .fg(theme.foreground)
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    event.status.to_uppercase(),
                    Style::default().fg(status_color),
                )),
            ]),
            *column,
        );
    }
}
