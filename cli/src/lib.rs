// SPDX-FileCopyrightText: 2026 remcal developers
//
// SPDX-License-Identifier: Apache-2.0

//! Command-line and terminal calendar client for the remcal reminder
//! service. The default invocation opens a full-screen month view; the
//! subcommands cover one-shot reminder and holiday queries.

mod cli;
mod cmd_calendar;
mod cmd_holidays;
mod cmd_range;
mod cmd_reminder;
mod config;
mod holiday_formatter;
mod reminder_formatter;
mod table;
mod tui;
mod util;

pub use crate::cli::{Cli, Commands, run};
pub use crate::config::Config;
