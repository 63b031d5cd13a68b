// SPDX-FileCopyrightText: 2026 remcal developers
//
// SPDX-License-Identifier: Apache-2.0

use clap::{Arg, ArgMatches, arg, value_parser};

use remcal_core::{CalendarDate, parse_date, today};

/// The output format for commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ArgOutputFormat {
    Json,
    Table,
}

impl ArgOutputFormat {
    pub fn arg() -> Arg {
        arg!(--"output-format" <FORMAT> "Output format")
            .value_parser(value_parser!(ArgOutputFormat))
            .default_value("table")
    }

    pub fn from(matches: &ArgMatches) -> Self {
        matches
            .get_one("output-format")
            .copied()
            .unwrap_or(ArgOutputFormat::Table)
    }
}

pub fn arg_date(required: bool) -> Arg {
    arg!(-d --date <DATE> "Date in YYYY-MM-DD form")
        .required(required)
        .value_parser(parse_date)
}

pub fn get_date(matches: &ArgMatches) -> Option<CalendarDate> {
    matches.get_one::<CalendarDate>("date").cloned()
}

/// Like [`get_date`], falling back to the client's current date.
pub fn get_date_or_today(matches: &ArgMatches) -> CalendarDate {
    get_date(matches).unwrap_or_else(today)
}

pub fn arg_year() -> Arg {
    arg!(-y --year <YEAR> "Year to query (defaults to the current year)")
        .required(false)
        .value_parser(value_parser!(i32))
}

pub fn get_year(matches: &ArgMatches) -> Option<i32> {
    matches.get_one("year").copied()
}
