use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Gauge, Paragraph, Wrap},
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
            Constraint::Length(3),
            Constraint::Length(7),
            Constraint::Length(6),
            Constraint::Min(0),
        ])
        .margin(1)
        .split(area);

    let header = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(30)])
        .split(rows[0]);

    f.render_widget(
        Paragraph::new(
            "Follow the tactical curriculum to master Git. Each module is a chapter \
in your journey to becoming a maintainer.",
        )
        .style(Style::default().fg(theme.muted))
        .wrap(Wrap { trim: true }),
        header[0],
    );

    let sync = card(" GLOBAL SYNC ", theme);
    let sync_inner = sync.inner(header[1]);
    f.render_widget(sync, header[1]);
    f.render_widget(
        Gauge::default()
            .ratio(f64::from(data::GLOBAL_PROGRESS_PERCENT) / 100.0)
            .label(format!("{}%", data::GLOBAL_PROGRESS_PERCENT))
            .gauge_style(Style::default().fg(theme.accent).bg(theme.chart_dim))
            .use_unicode(true),
        sync_inner,
    );

    let mut flat_idx = 0;
    for (module_idx, module) in data::MODULES.iter().enumerate() {
        render_module(f, app, module, &mut flat_idx, rows[1 + module_idx]);
    }

    f.render_widget(
        Paragraph::new("↑/↓ select a lesson · Enter opens the practice workspace")
            .style(Style::default().fg(theme.muted)),
        rows[3],
    );
}

fn render_module(f: &mut Frame, app: &App, module: &data::Module, flat_idx: &mut usize, area: Rect) {
    let theme = &app.theme;
    let progress_color = if module.completed {
        theme.success
    } else {
        theme.accent
    };

    let title = format!(
        " {} // {} ─ {} / {} ",
        module.track.to_uppercase(),
        module.title,
        module.done,
        module.total
    );
    let block = card(&title, theme).border_style(Style::default().fg(progress_color));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let mut lines = vec![Line::from(Span::styled(
        module.description,
        Style::default().fg(theme.muted),
    ))];

    for lesson in module.lessons {
        let selected = app.lesson_idx == *flat_idx;
        *flat_idx += 1;

        let (check, check_color) = if lesson.completed {
            ("✓", theme.success)
        } else {
            ("○", theme.muted)
        };
        let mut line = Line::from(vec![
            Span::styled(format!(" {} ", check), Style::default().fg(check_color)),
            Span::styled(
                lesson.title,
                Style::default()
                    .fg(theme.foreground)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  {} · {} MINS · {}", lesson.tag, lesson.minutes, lesson.kind),
                Style::default().fg(theme.muted),
            ),
            Span::styled(
                format!("  +{} XP", lesson.xp),
                Style::default().fg(theme.accent),
            ),
        ]);
        if selected {
            line = line.style(Style::default().bg(theme.selection_bg));
        }
        lines.push(line);
    }

    f.render_widget(Paragraph::new(lines), inner);
}
