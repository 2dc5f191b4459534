//! TUI layout and widget rendering.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap};

use super::runtime::App;
use super::style;

/// Renders the full TUI frame.
pub fn render(frame: &mut Frame, app: &App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // header
            Constraint::Length(3), // project
            Constraint::Min(10),   // loads + result
            Constraint::Length(1), // footer
        ])
        .split(frame.area());

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(rows[2]);

    render_header(frame, app, rows[0]);
    render_project(frame, app, rows[1]);
    render_loads(frame, app, body[0]);
    render_result(frame, app, body[1]);
    render_footer(frame, app, rows[3]);
}

/// Header bar: title, preset and selection count.
fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let header = Line::from(vec![
        Span::styled(
            " SOLAR SIZER ",
            Style::default()
                .fg(style::HEADER_FG)
                .bg(style::HEADER_BG)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(
            &app.preset_name,
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!(" │ {} selected ", app.form.selected_count())),
    ]);
    frame.render_widget(Paragraph::new(header), area);
}

/// Project category, description and chassis flag.
fn render_project(frame: &mut Frame, app: &App, area: Rect) {
    let kind = app
        .project
        .project_type
        .map_or("(choose with p)", |t| t.label());
    let mut spans = vec![
        Span::styled("Project: ", Style::default().fg(style::LABEL_FG)),
        Span::raw(kind),
    ];
    if app.editing_description || app.project.other_description.is_some() {
        let text = app.project.other_description.as_deref().unwrap_or("");
        let cursor = if app.editing_description { "_" } else { "" };
        spans.push(Span::raw(format!("  [{text}{cursor}]")));
    }
    spans.push(Span::styled(
        "   Mobile chassis: ",
        Style::default().fg(style::LABEL_FG),
    ));
    spans.push(Span::raw(if app.project.needs_mobile_chassis {
        "yes"
    } else {
        "no"
    }));

    let paragraph =
        Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::ALL));
    frame.render_widget(paragraph, area);
}

/// Catalog rows with checkbox, quantity and per-unit values.
fn render_loads(frame: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .form
        .iter()
        .map(|(name, s)| {
            let (mark, mark_style) = if s.selected {
                ("[x]", Style::default().fg(style::SELECTED_FG))
            } else {
                ("[ ]", Style::default())
            };
            ListItem::new(Line::from(vec![
                Span::styled(mark, mark_style),
                Span::raw(format!(
                    " {:<26} x{:<3} {:>5.0} W {:>5.0} Wp {:>4.1} h",
                    name, s.quantity, s.power_w, s.peak_power_w, s.usage_hours
                )),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(Block::default().title(" Loads ").borders(Borders::ALL))
        .highlight_style(Style::default().bg(style::CURSOR_BG));

    let mut state = ListState::default();
    state.select(Some(app.cursor));
    frame.render_stateful_widget(list, area, &mut state);
}

/// Latest result, or the validation errors that blocked it.
fn render_result(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default().title(" Result ").borders(Borders::ALL);

    let lines: Vec<Line> = if !app.errors.is_empty() {
        app.errors
            .iter()
            .map(|e| {
                Line::from(Span::styled(
                    format!("{}: {}", e.field, e.message),
                    Style::default().fg(style::ERROR_FG),
                ))
            })
            .collect()
    } else if let Some(report) = &app.report {
        let r = &report.result;
        let label = |text: &'static str| Span::styled(text, Style::default().fg(style::LABEL_FG));
        let mut lines = vec![
            Line::from(vec![
                label("Required power:    "),
                Span::raw(format!("{:.0} W", r.required_power_w)),
            ]),
            Line::from(vec![
                label("Peak power:        "),
                Span::raw(format!("{:.0} W", r.peak_power_w)),
            ]),
            Line::from(vec![
                label("Required autonomy: "),
                Span::raw(format!("{:.0} Wh", r.required_autonomy_wh)),
            ]),
            Line::from(vec![
                label("Solar panels:      "),
                Span::raw(format!(
                    "{} (computed {})",
                    r.display_panel_count, r.raw_panel_count
                )),
            ]),
            Line::from(vec![
                label("Battery capacity:  "),
                Span::raw(format!("{:.0} Wh", r.required_battery_wh)),
            ]),
            Line::from(vec![
                label("Extra batteries:   "),
                Span::raw(r.extra_battery_units.to_string()),
            ]),
            Line::from(vec![
                label("Station:           "),
                Span::styled(
                    r.station_model.to_string(),
                    Style::default()
                        .fg(style::station_color(r.station_model))
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(
                    r.station_model
                        .max_capacity_wh()
                        .map_or_else(|| " (beyond the largest tier)".to_string(), |wh| {
                            format!(" (up to {wh:.0} Wh)")
                        }),
                ),
            ]),
            Line::from(""),
        ];
        lines.extend(
            report
                .contacts
                .iter()
                .map(|c| Line::from(format!("{}: {}", c.label, c.url))),
        );
        lines
    } else if app.can_calculate() {
        vec![Line::from("Press Enter to calculate.")]
    } else {
        vec![Line::from("Choose a project type first.")]
    };

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

/// Footer with keybinding hints.
fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let line = if let Some(edit) = &app.editing_field {
        Line::from(vec![
            Span::styled(
                format!(" {} {}: ", edit.name, edit.field.label()),
                Style::default().fg(style::LABEL_FG),
            ),
            Span::raw(format!("{}_", edit.buffer)),
            Span::styled(
                "  Tab:Next field  Enter:Done  Esc:Cancel",
                Style::default().fg(style::FOOTER_FG),
            ),
        ])
    } else if app.editing_description {
        Line::from(Span::styled(
            " type description  Enter/Esc:Done  Backspace:Delete",
            Style::default().fg(style::FOOTER_FG),
        ))
    } else {
        Line::from(Span::styled(
            " q:Quit  Space:Select  +/-:Qty  f:Edit fields  p:Project  e:Describe  m:Chassis  Enter:Calculate  1/2/3:Preset  r:Reset",
            Style::default().fg(style::FOOTER_FG),
        ))
    };
    let footer = Paragraph::new(line);
    frame.render_widget(footer, area);
}
