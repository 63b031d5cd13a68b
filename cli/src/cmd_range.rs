// SPDX-FileCopyrightText: 2026 remcal developers
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{ArgMatches, Command};

use remcal_core::Remcal;

use crate::config::Config;
use crate::util::ArgOutputFormat;

/// Print the service's allowed date range.
#[derive(Debug, Clone, Copy)]
pub struct CmdRange {
    pub output_format: ArgOutputFormat,
}

impl CmdRange {
    pub const NAME: &str = "range";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Show the allowed date range")
            .arg(ArgOutputFormat::arg())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            output_format: ArgOutputFormat::from(matches),
        }
    }

    pub async fn run(self, config: Config) -> Result<(), Box<dyn Error>> {
        tracing::debug!("fetching allowed range");
        let mut app = Remcal::new(&config.api)?;
        let range = app.allowed_range().await?;

        match self.output_format {
            ArgOutputFormat::Json => println!("{}", serde_json::to_string_pretty(&range)?),
            ArgOutputFormat::Table => println!("{} .. {}", range.min_date, range.max_date),
        }
        Ok(())
    }
}
