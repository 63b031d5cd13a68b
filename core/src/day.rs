// SPDX-FileCopyrightText: 2026 remcal developers
//
// SPDX-License-Identifier: Apache-2.0

//! Per-cell view models: the month grid annotated with everything the
//! calendar needs to render a day.

use std::collections::{HashMap, HashSet};

use remcal_api::{CalendarDate, DateRange, OverviewEntry, PublicHoliday, Reminder};

use crate::date::is_within_range;
use crate::grid::{MonthYear, WeekStart, month_grid};

/// One rendered day cell. Rebuilt on every render; never stored.
#[derive(Debug, Clone)]
pub struct CalendarDay {
    /// The cell's date.
    pub date: CalendarDate,
    /// Equal to the client's current date.
    pub is_today: bool,
    /// Belongs to the displayed month (false for overflow days).
    pub is_in_current_month: bool,
    /// Falls inside the allowed range.
    pub is_in_allowed_range: bool,
    /// A public holiday falls on this date.
    pub is_holiday: bool,
    /// Holiday detail, when `is_holiday`.
    pub holiday: Option<PublicHoliday>,
    /// At least one reminder exists on this date.
    pub has_reminders: bool,
    /// Full reminder list, populated only for the selected date.
    pub reminders: Option<Vec<Reminder>>,
}

/// Indexes a year's holidays by date for cell lookup.
pub fn index_holidays(holidays: Vec<PublicHoliday>) -> HashMap<CalendarDate, PublicHoliday> {
    holidays
        .into_iter()
        .map(|holiday| (holiday.date.clone(), holiday))
        .collect()
}

/// Reduces the overview aggregate to the set of dates with reminders.
pub fn overview_dates(overview: Vec<OverviewEntry>) -> HashSet<CalendarDate> {
    overview
        .into_iter()
        .filter(|entry| entry.count > 0)
        .map(|entry| entry.date)
        .collect()
}

/// Builds the displayed month's grid and annotates every cell.
///
/// The selected date's reminder list is attached only to its own cell; all
/// other cells carry just the has-reminders marker.
#[allow(clippy::too_many_arguments)]
pub fn compose_weeks(
    month: MonthYear,
    week_start: WeekStart,
    today: &CalendarDate,
    range: &DateRange,
    holidays_by_date: &HashMap<CalendarDate, PublicHoliday>,
    dates_with_reminders: &HashSet<CalendarDate>,
    selected_date: &CalendarDate,
    selected_reminders: &[Reminder],
) -> Vec<Vec<CalendarDay>> {
    month_grid(month, week_start)
        .into_iter()
        .map(|week| {
            week.into_iter()
                .map(|date| {
                    let holiday = holidays_by_date.get(&date).cloned();
                    let reminders =
                        (date == *selected_date).then(|| selected_reminders.to_vec());
                    CalendarDay {
                        is_today: date == *today,
                        is_in_current_month: month.contains(&date),
                        is_in_allowed_range: is_within_range(
                            &date,
                            &range.min_date,
                            &range.max_date,
                        ),
                        is_holiday: holiday.is_some(),
                        holiday,
                        has_reminders: dates_with_reminders.contains(&date),
                        reminders,
                        date,
                    }
                })
                .collect()
        })
        .collect()
}
