// SPDX-FileCopyrightText: 2026 remcal developers
//
// SPDX-License-Identifier: Apache-2.0

//! Wire types shared with the reminder service. Field names follow the
//! service's camelCase JSON.

use std::fmt;

/// A calendar date in canonical `YYYY-MM-DD` form.
///
/// The format is fixed-width, zero-padded and big-endian, so the derived
/// lexical ordering is the chronological ordering. All date comparisons in
/// the client use this ordering directly.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct CalendarDate(String);

impl CalendarDate {
    /// Wraps an already-canonical date string.
    pub fn new(date: impl Into<String>) -> Self {
        Self(date.into())
    }

    /// Returns the date as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CalendarDate {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Inclusive window of dates in which navigation and selection are allowed.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateRange {
    /// First allowed date.
    pub min_date: CalendarDate,

    /// Last allowed date.
    pub max_date: CalendarDate,
}

/// A reminder as stored on the service.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reminder {
    /// Server-assigned identifier.
    pub id: i64,

    /// Reminder text, at most 255 characters.
    pub text: String,

    /// The date the reminder is attached to.
    pub date: CalendarDate,

    /// Time of day in `HH:MM` form.
    pub time: String,

    /// Creation timestamp (`YYYY-MM-DDTHH:MM:SS`).
    pub created_at: String,

    /// Last-update timestamp (`YYYY-MM-DDTHH:MM:SS`).
    pub updated_at: String,
}

/// Payload for creating or updating a reminder.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReminderDraft {
    /// Reminder text.
    pub text: String,

    /// The date the reminder is attached to.
    pub date: CalendarDate,

    /// Time of day in `HH:MM` form.
    pub time: String,
}

/// A public holiday for one country, keyed by date within a year.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicHoliday {
    /// The date of the holiday.
    pub date: CalendarDate,

    /// Holiday name in the local language.
    pub local_name: String,

    /// Holiday name in English.
    pub english_name: String,

    /// ISO country code.
    pub country_code: String,

    /// Holiday type as reported by the service (e.g. "Public").
    #[serde(rename = "type")]
    pub kind: String,

    /// Whether the holiday applies country-wide.
    pub global: bool,
}

/// One entry of the reminders-overview aggregate: how many reminders exist
/// on a date. Dates without reminders are omitted by the service.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverviewEntry {
    /// The date with at least one reminder.
    pub date: CalendarDate,

    /// Number of reminders on that date.
    pub count: u32,
}
