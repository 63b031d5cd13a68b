// SPDX-FileCopyrightText: 2026 remcal developers
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{ArgMatches, Command};

use crate::config::Config;
use crate::tui;

/// Open the full-screen month calendar. This is the default command.
#[derive(Debug, Clone, Copy)]
pub struct CmdCalendar;

impl CmdCalendar {
    pub const NAME: &str = "calendar";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("cal")
            .about("Open the calendar (default)")
    }

    pub fn from(_matches: &ArgMatches) -> Self {
        Self
    }

    pub async fn run(self, config: Config) -> Result<(), Box<dyn Error>> {
        tracing::debug!("opening calendar");
        tui::run(config).await
    }
}
