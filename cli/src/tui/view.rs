// SPDX-FileCopyrightText: 2026 remcal developers
//
// SPDX-License-Identifier: Apache-2.0

//! Rendering. The view is a pure function of the store; every frame is
//! rebuilt from scratch.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
};

use remcal_core::{CalendarDay, DateRange, WeekStart, compose_weeks};

use crate::tui::store::{CalendarStore, Dialog, FormField, FormState};

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

pub fn draw(frame: &mut Frame, store: &CalendarStore) {
    let [header, body, footer] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(10),
            Constraint::Length(1),
        ])
        .areas(frame.area());

    let [calendar, sidebar] = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(62), Constraint::Percentage(38)])
        .areas(body);

    draw_header(frame, store, header);
    draw_grid(frame, store, calendar);
    draw_sidebar(frame, store, sidebar);
    draw_footer(frame, store, footer);

    match &store.dialog {
        Dialog::None => {}
        Dialog::Form(form) => draw_form(frame, form),
        Dialog::ConfirmClear => draw_confirm(frame, store),
    }
}

fn draw_header(frame: &mut Frame, store: &CalendarStore, area: Rect) {
    let month = store.displayed_month();
    let name = MONTH_NAMES
        .get(month.month as usize - 1)
        .copied()
        .unwrap_or("?");

    let arrow = |enabled: bool, glyph: &'static str| {
        if enabled {
            Span::raw(glyph)
        } else {
            Span::styled(glyph, Style::default().fg(Color::DarkGray))
        }
    };

    let line = Line::from(vec![
        arrow(store.nav.can_go_prev(), "◀ "),
        Span::styled(
            format!("{name} {}", month.year),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        arrow(store.nav.can_go_next(), " ▶"),
    ]);
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

fn draw_grid(frame: &mut Frame, store: &CalendarStore, area: Rect) {
    let block = Block::default().borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    // Before the allowed range arrives every cell renders as selectable.
    let open_range = DateRange {
        min_date: "0000-01-01".into(),
        max_date: "9999-12-31".into(),
    };
    let range = store.nav.range().unwrap_or(&open_range);

    let weeks = compose_weeks(
        store.displayed_month(),
        store.week_start,
        &store.today,
        range,
        &store.holidays,
        &store.dates_with_reminders,
        store.nav.selected_date(),
        &store.reminders,
    );

    let mut lines = vec![weekday_header(store.week_start)];
    for week in &weeks {
        let mut spans = Vec::with_capacity(week.len());
        for day in week {
            spans.push(day_cell(store, day));
        }
        lines.push(Line::from(spans));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

fn weekday_header(week_start: WeekStart) -> Line<'static> {
    let names = match week_start {
        WeekStart::Monday => ["Mo", "Tu", "We", "Th", "Fr", "Sa", "Su"],
        WeekStart::Sunday => ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"],
    };
    Line::from(
        names
            .iter()
            .map(|name| {
                Span::styled(
                    format!(" {name}  "),
                    Style::default().add_modifier(Modifier::DIM),
                )
            })
            .collect::<Vec<_>>(),
    )
}

fn day_cell(store: &CalendarStore, day: &CalendarDay) -> Span<'static> {
    // "2024-06-05" -> " 5"
    let number = day.date.as_str().get(8..).unwrap_or("??");
    let marker = if day.has_reminders { "*" } else { " " };
    let text = format!(" {:>2}{marker} ", number.trim_start_matches('0'));

    let mut style = Style::default();
    if !day.is_in_allowed_range || !day.is_in_current_month {
        style = style.fg(Color::DarkGray);
    } else if day.is_holiday {
        style = style.fg(Color::Red);
    }
    if day.is_today {
        style = style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
    }
    if &day.date == store.nav.selected_date() {
        style = style.add_modifier(Modifier::REVERSED);
    }
    Span::styled(text, style)
}

fn draw_sidebar(frame: &mut Frame, store: &CalendarStore, area: Rect) {
    let selected = store.nav.selected_date();
    let block = Block::default()
        .borders(Borders::ALL)
        .title(selected.to_string());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [holiday_area, list_area] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(1)])
        .areas(inner);

    let holiday_line = match store.holidays.get(selected) {
        Some(holiday) if holiday.local_name != holiday.english_name => Line::from(Span::styled(
            format!("{} ({})", holiday.local_name, holiday.english_name),
            Style::default().fg(Color::Red),
        )),
        Some(holiday) => Line::from(Span::styled(
            holiday.local_name.clone(),
            Style::default().fg(Color::Red),
        )),
        None => Line::default(),
    };
    frame.render_widget(Paragraph::new(holiday_line), holiday_area);

    if store.reminders.is_empty() {
        let empty = Span::styled("No reminders", Style::default().add_modifier(Modifier::DIM));
        frame.render_widget(Paragraph::new(Line::from(empty)), list_area);
        return;
    }

    let items: Vec<ListItem> = store
        .reminders
        .iter()
        .enumerate()
        .map(|(i, reminder)| {
            let mut style = Style::default();
            if i == store.reminder_cursor {
                style = style.add_modifier(Modifier::REVERSED);
            }
            ListItem::new(Line::from(Span::styled(
                format!("{}  {}", reminder.time, reminder.text),
                style,
            )))
        })
        .collect();
    frame.render_widget(List::new(items), list_area);
}

fn draw_footer(frame: &mut Frame, store: &CalendarStore, area: Rect) {
    let line = if let Some(status) = &store.status {
        Line::from(Span::styled(
            status.clone(),
            Style::default().fg(Color::Red),
        ))
    } else if store.loading {
        Line::from(Span::raw("Loading..."))
    } else {
        Line::from(Span::styled(
            "←↓↑→ move  [/] month  t today  enter add/clear  e edit  x delete  q quit",
            Style::default().add_modifier(Modifier::DIM),
        ))
    };
    frame.render_widget(Paragraph::new(line), area);
}

fn draw_form(frame: &mut Frame, form: &FormState) {
    let area = centered_rect(frame.area(), 46, 9);
    frame.render_widget(Clear, area);

    let title = match form.editing {
        Some(_) => "Edit reminder",
        None => "New reminder",
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!("{title} - {}", form.date));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let field = |label: &str, value: &str, focused: bool| {
        let style = if focused {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default()
        };
        Line::from(vec![
            Span::raw(format!("{label}: ")),
            Span::styled(format!("{value}_"), style),
        ])
    };

    let mut lines = vec![
        field("Text", &form.text, form.focus == FormField::Text),
        field("Time", &form.time, form.focus == FormField::Time),
    ];
    for (name, problem) in &form.field_errors {
        lines.push(Line::from(Span::styled(
            format!("{name}: {problem}"),
            Style::default().fg(Color::Red),
        )));
    }
    if let Some(error) = &form.error {
        lines.push(Line::from(Span::styled(
            error.clone(),
            Style::default().fg(Color::Red),
        )));
    }
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        if form.submitting {
            "Saving..."
        } else {
            "enter save  tab switch field  esc cancel"
        },
        Style::default().add_modifier(Modifier::DIM),
    )));

    frame.render_widget(Paragraph::new(lines), inner);
}

fn draw_confirm(frame: &mut Frame, store: &CalendarStore) {
    let area = centered_rect(frame.area(), 46, 5);
    frame.render_widget(Clear, area);

    let block = Block::default().borders(Borders::ALL).title("Confirm");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = vec![
        Line::from(format!(
            "Delete all reminders for {}?",
            store.nav.selected_date()
        )),
        Line::from(Span::styled(
            "y delete  n cancel",
            Style::default().add_modifier(Modifier::DIM),
        )),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}

fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use ratatui::{Terminal, backend::TestBackend};
    use ratatui::crossterm::event::{KeyCode, KeyEvent};

    fn rendered(store: &CalendarStore) -> String {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| draw(frame, store)).unwrap();

        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn form_title_names_the_date_in_ascii() {
        let mut store = CalendarStore::new(
            WeekStart::Monday,
            NaiveDate::from_ymd_opt(2024, 6, 15).unwrap(),
        );
        store.on_key(KeyEvent::from(KeyCode::Enter));

        let text = rendered(&store);
        assert!(text.contains("New reminder - 2024-06-15"), "{text}");
        assert!(!text.contains('\u{2014}'), "{text}");
    }

    #[test]
    fn header_shows_the_displayed_month() {
        let store = CalendarStore::new(
            WeekStart::Monday,
            NaiveDate::from_ymd_opt(2024, 6, 15).unwrap(),
        );
        let text = rendered(&store);
        assert!(text.contains("June 2024"), "{text}");
    }
}
