use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Clear, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::model::task::Priority;
use crate::ops::filter::Filter;

use super::app::{App, Mode};

/// Main render function
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    // Layout: filter bar (2 rows) | task list | status row (1 row)
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(area);

    render_filter_bar(frame, app, chunks[0]);
    render_task_list(frame, app, chunks[1]);
    render_status_row(frame, app, chunks[2]);

    if app.show_help {
        render_help_overlay(frame, app, area);
    }
}

/// Filter tabs with live per-tier counts, e.g. `all(4)  urgent(1) ...`
fn render_filter_bar(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let counts = app.session.counts();
    let active = app.session.filter();

    let tabs: [(Filter, usize, &str); 4] = [
        (Filter::All, counts.total, "1"),
        (Filter::Only(Priority::Urgent), counts.urgent, "2"),
        (Filter::Only(Priority::Medium), counts.medium, "3"),
        (Filter::Only(Priority::Low), counts.low, "4"),
    ];

    let mut spans = vec![Span::styled(" ", Style::default().bg(bg))];
    for (filter, count, key) in tabs {
        let label = format!(" {}:{}({}) ", key, filter.label(), count);
        let style = if filter == active {
            Style::default()
                .fg(app.theme.text_bright)
                .bg(app.theme.selection_bg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(app.theme.dim).bg(bg)
        };
        spans.push(Span::styled(label, style));
        spans.push(Span::styled(" ", Style::default().bg(bg)));
    }

    let lines = vec![
        Line::from(spans),
        Line::from(Span::styled(
            "─".repeat(area.width as usize),
            Style::default().fg(app.theme.dim).bg(bg),
        )),
    ];
    frame.render_widget(Paragraph::new(lines).style(Style::default().bg(bg)), area);
}

fn render_task_list(frame: &mut Frame, app: &mut App, area: Rect) {
    let bg = app.theme.background;
    let visible = app.session.visible();

    if visible.is_empty() {
        // Valid outcome, not an error: show the placeholder
        let placeholder = Paragraph::new(Line::from(Span::styled(
            "no tasks to show",
            Style::default().fg(app.theme.dim).bg(bg),
        )))
        .centered();
        let y = area.y + area.height / 2;
        let row = Rect::new(area.x, y.min(area.y + area.height.saturating_sub(1)), area.width, 1);
        frame.render_widget(placeholder, row);
        return;
    }

    // Keep the cursor row on screen
    let height = area.height as usize;
    if app.cursor < app.scroll_offset {
        app.scroll_offset = app.cursor;
    } else if app.cursor >= app.scroll_offset + height {
        app.scroll_offset = app.cursor + 1 - height;
    }

    let mut lines = Vec::new();
    for (i, task) in visible
        .iter()
        .enumerate()
        .skip(app.scroll_offset)
        .take(height)
    {
        let is_cursor = i == app.cursor;
        let is_selected = app.session.selection().contains(task.id);

        let row_bg = if is_cursor { app.theme.selection_bg } else { bg };
        let marker = if is_selected { "[x]" } else { "[ ]" };
        let text_style = if is_cursor {
            Style::default().fg(app.theme.text_bright).bg(row_bg)
        } else {
            Style::default().fg(app.theme.text).bg(row_bg)
        };

        let spans = vec![
            Span::styled(format!(" {} ", marker), text_style),
            Span::styled(
                format!("{:<8}", task.priority.label()),
                Style::default()
                    .fg(app.theme.priority_color(task.priority))
                    .bg(row_bg),
            ),
            Span::styled(task.text.clone(), text_style),
        ];
        lines.push(Line::from(spans));
    }

    frame.render_widget(Paragraph::new(lines).style(Style::default().bg(bg)), area);
}

/// Render the status row (bottom of screen)
fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let line = match app.mode {
        Mode::Insert => {
            // Add prompt: + text▌  [tier]
            let mut spans = vec![
                Span::styled(
                    format!("+ {}", app.input),
                    Style::default().fg(app.theme.text_bright).bg(bg),
                ),
                Span::styled("\u{258C}", Style::default().fg(app.theme.highlight).bg(bg)),
                Span::styled(
                    format!("  [{}]", app.input_priority.label()),
                    Style::default()
                        .fg(app.theme.priority_color(app.input_priority))
                        .bg(bg),
                ),
            ];
            let hint = "Enter add  Tab tier  Esc cancel";
            pad_with_hint(&mut spans, hint, width, app, bg);
            Line::from(spans)
        }
        Mode::Navigate => {
            let mut spans = Vec::new();
            if let Some(warning) = app.session.save_warning() {
                spans.push(Span::styled(
                    format!("! {}", warning),
                    Style::default().fg(app.theme.warning).bg(bg),
                ));
            } else {
                let selected = app.session.selection().len();
                let label = if selected > 0 {
                    format!("{} selected — c to complete", selected)
                } else {
                    String::new()
                };
                spans.push(Span::styled(
                    label,
                    Style::default().fg(app.theme.dim).bg(bg),
                ));
            }
            let hint = "a add  space select  d delete  ? help  q quit";
            pad_with_hint(&mut spans, hint, width, app, bg);
            Line::from(spans)
        }
    };

    frame.render_widget(
        Paragraph::new(line).style(Style::default().bg(bg)),
        area,
    );
}

/// Right-align a dim key hint after the existing spans, if it fits
fn pad_with_hint(
    spans: &mut Vec<Span<'_>>,
    hint: &str,
    width: usize,
    app: &App,
    bg: ratatui::style::Color,
) {
    let content_width: usize = spans.iter().map(|s| s.content.width()).sum();
    let hint_width = hint.width();
    if content_width + hint_width < width {
        let padding = width - content_width - hint_width;
        spans.push(Span::styled(" ".repeat(padding), Style::default().bg(bg)));
        spans.push(Span::styled(
            hint.to_string(),
            Style::default().fg(app.theme.dim).bg(bg),
        ));
    }
}

fn render_help_overlay(frame: &mut Frame, app: &App, area: Rect) {
    let entries = [
        ("j/k", "move cursor"),
        ("a", "add task (Tab cycles tier)"),
        ("space", "toggle selection"),
        ("c", "complete selection"),
        ("d", "delete task"),
        ("1-4", "filter: all / urgent / medium / low"),
        ("q", "quit"),
    ];

    let inner_width = 44u16.min(area.width);
    let inner_height = (entries.len() as u16 + 2).min(area.height);
    let popup = Rect::new(
        area.x + (area.width.saturating_sub(inner_width)) / 2,
        area.y + (area.height.saturating_sub(inner_height)) / 2,
        inner_width,
        inner_height,
    );

    let mut lines = vec![Line::from(Span::styled(
        " keys ",
        Style::default()
            .fg(app.theme.highlight)
            .add_modifier(Modifier::BOLD),
    ))];
    for (key, action) in entries {
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {:<7}", key),
                Style::default().fg(app.theme.text_bright),
            ),
            Span::styled(action, Style::default().fg(app.theme.text)),
        ]));
    }

    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(lines).style(Style::default().bg(app.theme.selection_bg)),
        popup,
    );
}
