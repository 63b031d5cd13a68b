// SPDX-FileCopyrightText: 2026 remcal developers
//
// SPDX-License-Identifier: Apache-2.0

//! REST client for the calendar-reminders service: public holidays, per-date
//! reminders, and the allowed date range in which reminders may be placed.

#![warn(
    trivial_casts,
    trivial_numeric_casts,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications,
    clippy::dbg_macro,
    clippy::indexing_slicing,
    clippy::pedantic
)]
#![allow(clippy::missing_errors_doc, clippy::must_use_candidate)]

mod client;
mod config;
mod error;
mod http;
mod types;

pub use crate::client::ApiClient;
pub use crate::config::ApiConfig;
pub use crate::error::{ApiError, ApiErrorBody};
pub use crate::types::{
    CalendarDate, DateRange, OverviewEntry, PublicHoliday, Reminder, ReminderDraft,
};
