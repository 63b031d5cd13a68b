// SPDX-FileCopyrightText: 2026 remcal developers
//
// SPDX-License-Identifier: Apache-2.0

//! Calendar UI state. All key handling and worker-reply handling lives
//! here; handlers return the follow-up fetches the worker should run, so
//! the whole state machine is testable without a terminal or a server.

use std::collections::{HashMap, HashSet};

use chrono::{Days, NaiveDate};
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use remcal_core::{
    CalendarDate, DayAction, FieldErrors, Generations, MonthYear, Navigation, PublicHoliday,
    QueryKey, Reminder, ReminderDraft, WeekStart, from_naive, index_holidays, overview_dates,
    to_naive, validate_draft,
};

use crate::tui::worker::{AppEvent, Request};

/// Which form field has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Text,
    Time,
}

/// The create/edit reminder form.
#[derive(Debug, Clone)]
pub struct FormState {
    /// The reminder being edited, if any; `None` means create.
    pub editing: Option<i64>,
    pub date: CalendarDate,
    pub text: String,
    pub time: String,
    pub focus: FormField,
    pub field_errors: FieldErrors,
    pub error: Option<String>,
    pub submitting: bool,
}

impl FormState {
    fn create(date: CalendarDate) -> Self {
        Self {
            editing: None,
            date,
            text: String::new(),
            time: String::new(),
            focus: FormField::Text,
            field_errors: FieldErrors::new(),
            error: None,
            submitting: false,
        }
    }

    fn edit(reminder: &Reminder) -> Self {
        Self {
            editing: Some(reminder.id),
            date: reminder.date.clone(),
            text: reminder.text.clone(),
            time: reminder.time.clone(),
            focus: FormField::Text,
            field_errors: FieldErrors::new(),
            error: None,
            submitting: false,
        }
    }

    fn draft(&self) -> ReminderDraft {
        ReminderDraft {
            text: self.text.trim().to_string(),
            date: self.date.clone(),
            time: self.time.trim().to_string(),
        }
    }

    fn focused_value(&mut self) -> &mut String {
        match self.focus {
            FormField::Text => &mut self.text,
            FormField::Time => &mut self.time,
        }
    }
}

/// The modal on top of the calendar, if any.
#[derive(Debug, Clone, Default)]
pub enum Dialog {
    #[default]
    None,
    Form(FormState),
    /// "Delete all reminders for {selected date}?"
    ConfirmClear,
}

/// All state behind the calendar screen.
pub struct CalendarStore {
    pub week_start: WeekStart,
    pub today: CalendarDate,
    pub nav: Navigation,
    pub generations: Generations,
    pub holidays: HashMap<CalendarDate, PublicHoliday>,
    pub holiday_year: Option<i32>,
    pub dates_with_reminders: HashSet<CalendarDate>,
    pub reminders: Vec<Reminder>,
    pub reminder_cursor: usize,
    pub dialog: Dialog,
    pub status: Option<String>,
    pub loading: bool,
    pub should_quit: bool,
}

impl CalendarStore {
    pub fn new(week_start: WeekStart, today: NaiveDate) -> Self {
        Self {
            week_start,
            today: from_naive(today),
            nav: Navigation::new(today),
            generations: Generations::new(),
            holidays: HashMap::new(),
            holiday_year: None,
            dates_with_reminders: HashSet::new(),
            reminders: Vec::new(),
            reminder_cursor: 0,
            dialog: Dialog::None,
            status: None,
            loading: true,
            should_quit: false,
        }
    }

    /// The initial fetches: range, holidays, overview and the selected
    /// date's reminders.
    pub fn startup(&mut self) -> Vec<Request> {
        vec![
            self.fetch_range(),
            self.fetch_holidays(),
            self.fetch_overview(),
            self.fetch_reminders(),
        ]
    }

    pub fn displayed_month(&self) -> MonthYear {
        self.nav.current_month()
    }

    fn fetch_range(&mut self) -> Request {
        Request::FetchRange {
            generation: self.generations.issue(QueryKey::AllowedRange),
        }
    }

    fn fetch_holidays(&mut self) -> Request {
        Request::FetchHolidays {
            year: self.displayed_month().year,
            generation: self.generations.issue(QueryKey::Holidays),
        }
    }

    fn fetch_reminders(&mut self) -> Request {
        Request::FetchReminders {
            date: self.nav.selected_date().clone(),
            generation: self.generations.issue(QueryKey::RemindersByDate),
        }
    }

    fn fetch_overview(&mut self) -> Request {
        Request::FetchOverview {
            generation: self.generations.issue(QueryKey::RemindersOverview),
        }
    }

    /// Fetches needed after navigation changed the selection or month.
    fn sync_queries(&mut self, before_selected: CalendarDate, before_month: MonthYear) -> Vec<Request> {
        let mut requests = Vec::new();
        if self.nav.selected_date() != &before_selected {
            self.reminders.clear();
            self.reminder_cursor = 0;
            requests.push(self.fetch_reminders());
        }
        let year = self.displayed_month().year;
        if before_month.year != year && self.holiday_year != Some(year) {
            requests.push(self.fetch_holidays());
        }
        requests
    }

    /// Handle a worker reply.
    pub fn on_event(&mut self, event: AppEvent) -> Vec<Request> {
        match event {
            AppEvent::Range { range, generation } => {
                if !self.generations.is_current(QueryKey::AllowedRange, generation) {
                    return vec![];
                }
                let before_selected = self.nav.selected_date().clone();
                let before_month = self.displayed_month();
                self.nav.set_range(range);
                self.loading = false;
                self.status = None;
                self.sync_queries(before_selected, before_month)
            }
            AppEvent::Holidays {
                year,
                holidays,
                generation,
            } => {
                if self.generations.is_current(QueryKey::Holidays, generation) {
                    self.holidays = index_holidays(holidays);
                    self.holiday_year = Some(year);
                }
                vec![]
            }
            AppEvent::Reminders {
                date,
                reminders,
                generation,
            } => {
                if self.generations.is_current(QueryKey::RemindersByDate, generation)
                    && &date == self.nav.selected_date()
                {
                    self.reminder_cursor = self.reminder_cursor.min(reminders.len().saturating_sub(1));
                    self.reminders = reminders;
                }
                vec![]
            }
            AppEvent::Overview {
                overview,
                generation,
            } => {
                if self
                    .generations
                    .is_current(QueryKey::RemindersOverview, generation)
                {
                    self.dates_with_reminders = overview_dates(overview);
                }
                vec![]
            }
            AppEvent::MutationDone => {
                self.dialog = Dialog::None;
                self.status = None;
                vec![self.fetch_reminders(), self.fetch_overview()]
            }
            AppEvent::FetchFailed {
                message,
                generation: _,
            } => {
                self.loading = false;
                self.status = Some(message);
                vec![]
            }
            AppEvent::MutationFailed {
                message,
                field_errors,
            } => {
                match &mut self.dialog {
                    Dialog::Form(form) => {
                        form.submitting = false;
                        form.field_errors = field_errors.unwrap_or_default();
                        form.error = Some(message);
                    }
                    _ => {
                        self.dialog = Dialog::None;
                        self.status = Some(message);
                    }
                }
                vec![]
            }
        }
    }

    /// Handle a key press.
    pub fn on_key(&mut self, key: KeyEvent) -> Vec<Request> {
        if key.kind != KeyEventKind::Press {
            return vec![];
        }
        match std::mem::take(&mut self.dialog) {
            Dialog::None => self.on_calendar_key(key.code),
            Dialog::Form(form) => self.on_form_key(key.code, form),
            Dialog::ConfirmClear => self.on_confirm_key(key.code),
        }
    }

    fn on_calendar_key(&mut self, code: KeyCode) -> Vec<Request> {
        match code {
            KeyCode::Char('q') => {
                self.should_quit = true;
                vec![]
            }
            KeyCode::Char('r') => self.startup(),
            KeyCode::Left | KeyCode::Char('h') => self.move_selection(-1),
            KeyCode::Right | KeyCode::Char('l') => self.move_selection(1),
            KeyCode::Up | KeyCode::Char('k') => self.move_selection(-7),
            KeyCode::Down | KeyCode::Char('j') => self.move_selection(7),
            KeyCode::Char('[') | KeyCode::PageUp => self.change_month(false),
            KeyCode::Char(']') | KeyCode::PageDown => self.change_month(true),
            KeyCode::Char('t') => self.go_to_today(),
            KeyCode::Enter | KeyCode::Char('a') => self.day_action(code == KeyCode::Char('a')),
            KeyCode::Char('e') => {
                if let Some(reminder) = self.reminders.get(self.reminder_cursor) {
                    self.dialog = Dialog::Form(FormState::edit(reminder));
                }
                vec![]
            }
            KeyCode::Char('x') => {
                if let Some(reminder) = self.reminders.get(self.reminder_cursor) {
                    self.status = Some("Deleting...".to_string());
                    return vec![Request::Delete { id: reminder.id }];
                }
                vec![]
            }
            KeyCode::Char('d') => {
                if !self.reminders.is_empty() {
                    self.dialog = Dialog::ConfirmClear;
                }
                vec![]
            }
            KeyCode::Char('J') => {
                if !self.reminders.is_empty() {
                    self.reminder_cursor = (self.reminder_cursor + 1).min(self.reminders.len() - 1);
                }
                vec![]
            }
            KeyCode::Char('K') => {
                self.reminder_cursor = self.reminder_cursor.saturating_sub(1);
                vec![]
            }
            _ => vec![],
        }
    }

    fn on_form_key(&mut self, code: KeyCode, mut form: FormState) -> Vec<Request> {
        if form.submitting {
            // Ignore everything but Esc while a save is in flight.
            if code == KeyCode::Esc {
                return vec![];
            }
            self.dialog = Dialog::Form(form);
            return vec![];
        }
        match code {
            KeyCode::Esc => vec![],
            KeyCode::Enter => {
                let draft = form.draft();
                if let Err(errors) = validate_draft(&draft) {
                    form.field_errors = errors;
                    form.error = None;
                    self.dialog = Dialog::Form(form);
                    return vec![];
                }
                form.submitting = true;
                let request = match form.editing {
                    Some(id) => Request::Update { id, draft },
                    None => Request::Create { draft },
                };
                self.dialog = Dialog::Form(form);
                vec![request]
            }
            KeyCode::Tab | KeyCode::Down => {
                form.focus = FormField::Time;
                self.dialog = Dialog::Form(form);
                vec![]
            }
            KeyCode::BackTab | KeyCode::Up => {
                form.focus = FormField::Text;
                self.dialog = Dialog::Form(form);
                vec![]
            }
            KeyCode::Char(c) => {
                form.focused_value().push(c);
                self.dialog = Dialog::Form(form);
                vec![]
            }
            KeyCode::Backspace => {
                form.focused_value().pop();
                self.dialog = Dialog::Form(form);
                vec![]
            }
            _ => {
                self.dialog = Dialog::Form(form);
                vec![]
            }
        }
    }

    fn on_confirm_key(&mut self, code: KeyCode) -> Vec<Request> {
        match code {
            KeyCode::Char('y') | KeyCode::Enter => {
                self.status = Some("Deleting...".to_string());
                vec![Request::DeleteAllOn {
                    date: self.nav.selected_date().clone(),
                }]
            }
            KeyCode::Char('n') | KeyCode::Esc => vec![],
            _ => {
                self.dialog = Dialog::ConfirmClear;
                vec![]
            }
        }
    }

    fn move_selection(&mut self, delta: i64) -> Vec<Request> {
        let Some(current) = to_naive(self.nav.selected_date()) else {
            return vec![];
        };
        let target = if delta < 0 {
            current.checked_sub_days(Days::new(delta.unsigned_abs()))
        } else {
            current.checked_add_days(Days::new(delta.unsigned_abs()))
        };
        let Some(target) = target else {
            return vec![];
        };

        let before_selected = self.nav.selected_date().clone();
        let before_month = self.displayed_month();
        self.nav.select_date(from_naive(target));
        self.sync_queries(before_selected, before_month)
    }

    fn change_month(&mut self, forward: bool) -> Vec<Request> {
        let before_selected = self.nav.selected_date().clone();
        let before_month = self.displayed_month();
        let moved = if forward {
            self.nav.go_next_month()
        } else {
            self.nav.go_prev_month()
        };
        if !moved {
            return vec![];
        }
        self.sync_queries(before_selected, before_month)
    }

    fn go_to_today(&mut self) -> Vec<Request> {
        let Some(today) = to_naive(&self.today) else {
            return vec![];
        };
        let before_selected = self.nav.selected_date().clone();
        let before_month = self.displayed_month();
        self.nav.go_to_today(today);
        self.sync_queries(before_selected, before_month)
    }

    fn day_action(&mut self, force_create: bool) -> Vec<Request> {
        let selected = self.nav.selected_date().clone();
        let action = if force_create {
            DayAction::Create
        } else {
            self.nav.day_click(&selected, !self.reminders.is_empty())
        };
        match action {
            DayAction::Create | DayAction::SelectAndCreate => {
                self.dialog = Dialog::Form(FormState::create(selected));
            }
            DayAction::ConfirmDeleteAll => {
                self.dialog = Dialog::ConfirmClear;
            }
            DayAction::Ignore => {}
        }
        vec![]
    }
}
