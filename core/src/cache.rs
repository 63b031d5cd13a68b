// SPDX-FileCopyrightText: 2026 remcal developers
//
// SPDX-License-Identifier: Apache-2.0

//! In-memory query cache with explicit invalidation keys.
//!
//! Owned by the facade and passed around explicitly; there is no
//! process-global query state. Mutations invalidate whole query groups
//! rather than patching cached values.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use remcal_api::{CalendarDate, DateRange, OverviewEntry, PublicHoliday, Reminder};

/// Cached query groups, each invalidated as a unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryKey {
    /// The allowed date range.
    AllowedRange,
    /// Holidays, grouped per year.
    Holidays,
    /// Reminder lists, grouped per date.
    RemindersByDate,
    /// The per-date reminder-count aggregate.
    RemindersOverview,
}

/// Monotonic token attached to an in-flight fetch. A response whose token is
/// older than the latest issued for its query group is stale and must be
/// dropped by the receiver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Generation(u64);

/// Latest issued generation per query group.
#[derive(Debug, Default)]
pub struct Generations {
    latest: HashMap<QueryKey, u64>,
    next: u64,
}

impl Generations {
    /// Creates an empty token table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues a fresh token for a query group, superseding earlier ones.
    pub fn issue(&mut self, key: QueryKey) -> Generation {
        self.next += 1;
        self.latest.insert(key, self.next);
        Generation(self.next)
    }

    /// Whether a response token is still the latest for its group.
    pub fn is_current(&self, key: QueryKey, generation: Generation) -> bool {
        self.latest.get(&key) == Some(&generation.0)
    }
}

#[derive(Debug, Clone)]
struct Slot<T> {
    value: T,
    fetched_at: Instant,
}

impl<T> Slot<T> {
    fn new(value: T) -> Self {
        Self {
            value,
            fetched_at: Instant::now(),
        }
    }

    fn fresh(&self, ttl: Option<Duration>) -> Option<&T> {
        match ttl {
            Some(ttl) if self.fetched_at.elapsed() > ttl => None,
            _ => Some(&self.value),
        }
    }
}

const RANGE_TTL: Duration = Duration::from_secs(5 * 60);
const HOLIDAYS_TTL: Duration = Duration::from_secs(24 * 60 * 60);
const OVERVIEW_TTL: Duration = Duration::from_secs(30);

/// Cache over the four remote query groups.
///
/// Reminder lists have no time-based staleness; they stay valid until a
/// mutation invalidates the group.
#[derive(Debug, Default)]
pub struct QueryCache {
    range: Option<Slot<DateRange>>,
    holidays: HashMap<i32, Slot<Vec<PublicHoliday>>>,
    reminders: HashMap<CalendarDate, Slot<Vec<Reminder>>>,
    overview: Option<Slot<Vec<OverviewEntry>>>,
}

impl QueryCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// The cached range, if fresh.
    pub fn range(&self) -> Option<&DateRange> {
        self.range.as_ref().and_then(|slot| slot.fresh(Some(RANGE_TTL)))
    }

    /// Caches the allowed range.
    pub fn put_range(&mut self, range: DateRange) {
        self.range = Some(Slot::new(range));
    }

    /// Cached holidays for a year, if fresh.
    pub fn holidays(&self, year: i32) -> Option<&Vec<PublicHoliday>> {
        self.holidays
            .get(&year)
            .and_then(|slot| slot.fresh(Some(HOLIDAYS_TTL)))
    }

    /// Caches a year's holidays.
    pub fn put_holidays(&mut self, year: i32, holidays: Vec<PublicHoliday>) {
        self.holidays.insert(year, Slot::new(holidays));
    }

    /// Cached reminders for a date, unless the group was invalidated.
    pub fn reminders(&self, date: &CalendarDate) -> Option<&Vec<Reminder>> {
        self.reminders.get(date).and_then(|slot| slot.fresh(None))
    }

    /// Caches one date's reminder list.
    pub fn put_reminders(&mut self, date: CalendarDate, reminders: Vec<Reminder>) {
        self.reminders.insert(date, Slot::new(reminders));
    }

    /// The cached overview, if fresh.
    pub fn overview(&self) -> Option<&Vec<OverviewEntry>> {
        self.overview
            .as_ref()
            .and_then(|slot| slot.fresh(Some(OVERVIEW_TTL)))
    }

    /// Caches the overview aggregate.
    pub fn put_overview(&mut self, overview: Vec<OverviewEntry>) {
        self.overview = Some(Slot::new(overview));
    }

    /// Drops everything cached under a query group.
    pub fn invalidate(&mut self, key: QueryKey) {
        match key {
            QueryKey::AllowedRange => self.range = None,
            QueryKey::Holidays => self.holidays.clear(),
            QueryKey::RemindersByDate => self.reminders.clear(),
            QueryKey::RemindersOverview => self.overview = None,
        }
    }
}
