// SPDX-FileCopyrightText: 2026 remcal developers
//
// SPDX-License-Identifier: Apache-2.0

//! Navigation state machine: displayed month and selected date, clamped to
//! the allowed range once it is known.

use chrono::Datelike;
use remcal_api::{CalendarDate, DateRange};

use crate::date::{clamp_to_range, from_naive, is_within_range};
use crate::grid::MonthYear;

/// What a click (or Enter) on a day cell should do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayAction {
    /// Out-of-range cells ignore clicks.
    Ignore,
    /// Open the create form for the clicked date.
    Create,
    /// The clicked date is already selected and has reminders: ask before
    /// deleting them all.
    ConfirmDeleteAll,
    /// Select the clicked date, then open the create form.
    SelectAndCreate,
}

/// Displayed month and selected date.
///
/// Before the allowed range arrives, selection defaults to today and every
/// date is considered selectable; once [`Navigation::set_range`] is called
/// the selection is clamped and all transitions honour the range.
#[derive(Debug, Clone)]
pub struct Navigation {
    current_month: MonthYear,
    selected_date: CalendarDate,
    range: Option<DateRange>,
}

impl Navigation {
    /// Initial state: today selected, today's month displayed, no range.
    pub fn new(today: chrono::NaiveDate) -> Self {
        Self {
            current_month: MonthYear {
                year: today.year(),
                month: today.month(),
            },
            selected_date: from_naive(today),
            range: None,
        }
    }

    /// The month currently displayed.
    pub fn current_month(&self) -> MonthYear {
        self.current_month
    }

    /// The currently selected date.
    pub fn selected_date(&self) -> &CalendarDate {
        &self.selected_date
    }

    /// The allowed range, once known.
    pub fn range(&self) -> Option<&DateRange> {
        self.range.as_ref()
    }

    /// Whether a date may be selected.
    pub fn is_allowed(&self, date: &CalendarDate) -> bool {
        match &self.range {
            Some(range) => is_within_range(date, &range.min_date, &range.max_date),
            None => true,
        }
    }

    /// Records the allowed range and clamps the current selection into it;
    /// the displayed month follows a moved selection.
    pub fn set_range(&mut self, range: DateRange) {
        let clamped = clamp_to_range(&self.selected_date, &range);
        if clamped != self.selected_date {
            if let Some(month) = MonthYear::containing(&clamped) {
                self.current_month = month;
            }
            self.selected_date = clamped;
        }
        self.range = Some(range);
    }

    /// Selects a date and moves the displayed month to it. A no-op when the
    /// date is outside the allowed range; returns whether it took effect.
    pub fn select_date(&mut self, date: CalendarDate) -> bool {
        if !self.is_allowed(&date) {
            return false;
        }
        if let Some(month) = MonthYear::containing(&date) {
            self.current_month = month;
        }
        self.selected_date = date;
        true
    }

    /// Whether the previous month overlaps the allowed range.
    pub fn can_go_prev(&self) -> bool {
        match (&self.range, self.current_month.prev().last_day()) {
            (Some(range), Some(last)) => last >= range.min_date,
            (Some(_), None) => false,
            (None, _) => true,
        }
    }

    /// Whether the next month overlaps the allowed range.
    pub fn can_go_next(&self) -> bool {
        match (&self.range, self.current_month.next().first_day()) {
            (Some(range), Some(first)) => first <= range.max_date,
            (Some(_), None) => false,
            (None, _) => true,
        }
    }

    /// Moves the displayed month back; selection is unchanged. Rejected when
    /// the previous month is entirely out of range.
    pub fn go_prev_month(&mut self) -> bool {
        if !self.can_go_prev() {
            return false;
        }
        self.current_month = self.current_month.prev();
        true
    }

    /// Moves the displayed month forward; selection is unchanged. Rejected
    /// when the next month is entirely out of range.
    pub fn go_next_month(&mut self) -> bool {
        if !self.can_go_next() {
            return false;
        }
        self.current_month = self.current_month.next();
        true
    }

    /// Selects today (clamped into the range) and navigates to it.
    pub fn go_to_today(&mut self, today: chrono::NaiveDate) {
        let mut target = from_naive(today);
        if let Some(range) = &self.range {
            target = clamp_to_range(&target, range);
        }
        if let Some(month) = MonthYear::containing(&target) {
            self.current_month = month;
        }
        self.selected_date = target;
    }

    /// Resolves a click on a day cell.
    pub fn day_click(&self, date: &CalendarDate, selected_has_reminders: bool) -> DayAction {
        if !self.is_allowed(date) {
            DayAction::Ignore
        } else if date == &self.selected_date {
            if selected_has_reminders {
                DayAction::ConfirmDeleteAll
            } else {
                DayAction::Create
            }
        } else {
            DayAction::SelectAndCreate
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn nav_at(y: i32, m: u32, d: u32) -> Navigation {
        Navigation::new(NaiveDate::from_ymd_opt(y, m, d).unwrap())
    }

    fn range(min: &str, max: &str) -> DateRange {
        DateRange {
            min_date: CalendarDate::from(min),
            max_date: CalendarDate::from(max),
        }
    }

    #[test]
    fn initial_state_is_today_and_its_month() {
        let nav = nav_at(2024, 6, 15);
        assert_eq!(nav.selected_date().as_str(), "2024-06-15");
        assert_eq!(nav.current_month(), MonthYear::new(2024, 6).unwrap());
        assert!(nav.range().is_none());
    }

    #[test]
    fn select_outside_range_is_a_no_op() {
        let mut nav = nav_at(2024, 1, 15);
        nav.set_range(range("2024-01-10", "2024-01-20"));

        assert!(!nav.select_date(CalendarDate::from("2024-01-25")));
        assert_eq!(nav.selected_date().as_str(), "2024-01-15");
        assert_eq!(nav.current_month(), MonthYear::new(2024, 1).unwrap());

        assert!(nav.select_date(CalendarDate::from("2024-01-18")));
        assert_eq!(nav.selected_date().as_str(), "2024-01-18");
    }

    #[test]
    fn select_recomputes_displayed_month() {
        let mut nav = nav_at(2024, 1, 15);
        nav.set_range(range("2024-01-01", "2024-12-31"));

        assert!(nav.select_date(CalendarDate::from("2024-03-05")));
        assert_eq!(nav.current_month(), MonthYear::new(2024, 3).unwrap());
    }

    #[test]
    fn late_range_arrival_clamps_selection_and_month() {
        // selection defaulted to "today" before the range loaded
        let mut nav = nav_at(2024, 1, 25);
        nav.set_range(range("2024-01-10", "2024-01-20"));

        assert_eq!(nav.selected_date().as_str(), "2024-01-20");
        assert_eq!(nav.current_month(), MonthYear::new(2024, 1).unwrap());
    }

    #[test]
    fn range_arrival_can_move_the_displayed_month() {
        let mut nav = nav_at(2024, 5, 1);
        nav.set_range(range("2024-06-10", "2024-07-10"));

        assert_eq!(nav.selected_date().as_str(), "2024-06-10");
        assert_eq!(nav.current_month(), MonthYear::new(2024, 6).unwrap());
    }

    #[test]
    fn next_month_rejected_when_max_is_inside_current_month() {
        let mut nav = nav_at(2024, 12, 10);
        nav.set_range(range("2024-01-01", "2024-12-20"));

        assert!(!nav.can_go_next());
        assert!(!nav.go_next_month());
        assert_eq!(nav.current_month(), MonthYear::new(2024, 12).unwrap());
    }

    #[test]
    fn prev_month_rejected_when_min_is_inside_current_month() {
        let mut nav = nav_at(2024, 1, 20);
        nav.set_range(range("2024-01-10", "2024-06-30"));

        assert!(!nav.can_go_prev());
        assert!(!nav.go_prev_month());
    }

    #[test]
    fn month_navigation_keeps_selection() {
        let mut nav = nav_at(2024, 6, 15);
        nav.set_range(range("2024-01-01", "2024-12-31"));

        assert!(nav.go_next_month());
        assert_eq!(nav.current_month(), MonthYear::new(2024, 7).unwrap());
        assert_eq!(nav.selected_date().as_str(), "2024-06-15");

        assert!(nav.go_prev_month());
        assert_eq!(nav.current_month(), MonthYear::new(2024, 6).unwrap());
    }

    #[test]
    fn adjacent_month_partially_in_range_is_navigable() {
        let mut nav = nav_at(2024, 6, 15);
        nav.set_range(range("2024-05-20", "2024-07-10"));

        assert!(nav.can_go_prev());
        assert!(nav.can_go_next());
    }

    #[test]
    fn go_to_today_clamps_into_range() {
        let mut nav = nav_at(2024, 1, 25);
        nav.set_range(range("2024-01-10", "2024-01-20"));
        let today = NaiveDate::from_ymd_opt(2024, 1, 25).unwrap();

        nav.go_to_today(today);
        assert_eq!(nav.selected_date().as_str(), "2024-01-20");
        assert_eq!(nav.current_month(), MonthYear::new(2024, 1).unwrap());
    }

    #[test]
    fn day_click_rules() {
        let mut nav = nav_at(2024, 6, 15);
        nav.set_range(range("2024-06-01", "2024-06-30"));

        let selected = CalendarDate::from("2024-06-15");
        let other = CalendarDate::from("2024-06-20");
        let outside = CalendarDate::from("2024-07-05");

        assert_eq!(nav.day_click(&outside, false), DayAction::Ignore);
        assert_eq!(nav.day_click(&selected, false), DayAction::Create);
        assert_eq!(nav.day_click(&selected, true), DayAction::ConfirmDeleteAll);
        assert_eq!(nav.day_click(&other, false), DayAction::SelectAndCreate);
        assert_eq!(nav.day_click(&other, true), DayAction::SelectAndCreate);
    }
}
