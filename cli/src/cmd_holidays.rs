// SPDX-FileCopyrightText: 2026 remcal developers
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use chrono::Datelike;
use clap::{ArgMatches, Command};
use colored::Colorize;

use remcal_core::{Remcal, to_naive, today};

use crate::config::Config;
use crate::holiday_formatter::HolidayFormatter;
use crate::util::{ArgOutputFormat, arg_year, get_year};

/// List one year's public holidays.
#[derive(Debug, Clone)]
pub struct CmdHolidays {
    pub year: Option<i32>,
    pub output_format: ArgOutputFormat,
}

impl CmdHolidays {
    pub const NAME: &str = "holidays";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("List public holidays for a year")
            .arg(arg_year())
            .arg(ArgOutputFormat::arg())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            year: get_year(matches),
            output_format: ArgOutputFormat::from(matches),
        }
    }

    pub async fn run(self, config: Config) -> Result<(), Box<dyn Error>> {
        let today = today();
        let year = match self.year {
            Some(year) => year,
            None => to_naive(&today).ok_or("Failed to resolve the current year")?.year(),
        };
        tracing::debug!(year, "listing holidays");

        let mut app = Remcal::new(&config.api)?;
        let holidays = app.holidays(year).await?;

        if holidays.is_empty() && self.output_format == ArgOutputFormat::Table {
            println!("{}", format!("No holidays found for {year}").italic());
            return Ok(());
        }

        let formatter = HolidayFormatter::new(today).with_output_format(self.output_format);
        print!("{}", formatter.format(&holidays)?);
        Ok(())
    }
}
