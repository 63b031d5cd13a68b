// SPDX-FileCopyrightText: 2026 remcal developers
//
// SPDX-License-Identifier: Apache-2.0

//! Calendar core: canonical date handling, month-grid construction, the
//! navigation state machine, per-cell view composition, and the cached
//! client facade over the reminder service.

mod app;
mod cache;
mod date;
mod day;
mod grid;
mod navigation;
mod validate;

pub use remcal_api::{
    ApiClient, ApiConfig, ApiError, CalendarDate, DateRange, OverviewEntry, PublicHoliday,
    Reminder, ReminderDraft,
};

pub use crate::app::Remcal;
pub use crate::cache::{Generation, Generations, QueryCache, QueryKey};
pub use crate::date::{
    clamp_to_range, from_naive, is_within_range, parse_date, succ, to_naive, today,
};
pub use crate::day::{CalendarDay, compose_weeks, index_holidays, overview_dates};
pub use crate::grid::{MonthYear, WeekStart, month_grid, month_grid_flat};
pub use crate::navigation::{DayAction, Navigation};
pub use crate::validate::{FieldErrors, validate_draft};
