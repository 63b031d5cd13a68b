// SPDX-FileCopyrightText: 2026 remcal developers
//
// SPDX-License-Identifier: Apache-2.0

//! Month arithmetic and the 6×7 display grid.

use chrono::{Datelike, Days, NaiveDate};
use remcal_api::CalendarDate;

use crate::date::from_naive;

/// Which weekday starts the displayed week.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    /// ISO convention, the default.
    #[default]
    Monday,
    /// US convention.
    Sunday,
}

/// A (year, month) pair with month in 1..=12.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthYear {
    /// Calendar year.
    pub year: i32,
    /// Calendar month, 1..=12.
    pub month: u32,
}

impl MonthYear {
    /// Creates a month-year pair, rejecting months outside 1..=12.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        (1..=12).contains(&month).then_some(Self { year, month })
    }

    /// The month containing a canonical date, or `None` if malformed.
    pub fn containing(date: &CalendarDate) -> Option<Self> {
        let naive = crate::date::to_naive(date)?;
        Some(Self {
            year: naive.year(),
            month: naive.month(),
        })
    }

    /// The previous month; crossing January rolls the year back.
    pub fn prev(self) -> Self {
        if self.month == 1 {
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    /// The next month; crossing December rolls the year forward.
    pub fn next(self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    /// The first day of the month as a chrono date.
    fn first_naive(self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
    }

    /// The first calendar date of the month.
    pub fn first_day(self) -> Option<CalendarDate> {
        self.first_naive().map(from_naive)
    }

    /// The last calendar date of the month.
    pub fn last_day(self) -> Option<CalendarDate> {
        self.next().first_naive()?.pred_opt().map(from_naive)
    }

    /// Whether the date falls inside this month.
    pub fn contains(self, date: &CalendarDate) -> bool {
        MonthYear::containing(date) == Some(self)
    }
}

/// Number of cells in the fixed-size display grid.
pub const GRID_CELLS: usize = 42;

/// Days per grid row.
pub const GRID_COLUMNS: usize = 7;

/// Builds the flat 42-cell grid for a month.
///
/// The first cell is the 1st of the month moved back to the preceding
/// week-start day; 42 consecutive dates follow. Six rows are always
/// produced, even when the month fits in five, so the layout never jumps
/// while navigating. Returns an empty vector only for out-of-range years.
pub fn month_grid_flat(month: MonthYear, week_start: WeekStart) -> Vec<CalendarDate> {
    let Some(first) = month.first_naive() else {
        return Vec::new();
    };

    let weekday_index = match week_start {
        WeekStart::Monday => first.weekday().num_days_from_monday(),
        WeekStart::Sunday => first.weekday().num_days_from_sunday(),
    };

    let Some(start) = first.checked_sub_days(Days::new(u64::from(weekday_index))) else {
        return Vec::new();
    };

    start.iter_days().take(GRID_CELLS).map(from_naive).collect()
}

/// Same as [`month_grid_flat`], grouped into 6 rows of 7 days.
pub fn month_grid(month: MonthYear, week_start: WeekStart) -> Vec<Vec<CalendarDate>> {
    month_grid_flat(month, week_start)
        .chunks(GRID_COLUMNS)
        .map(<[CalendarDate]>::to_vec)
        .collect()
}
