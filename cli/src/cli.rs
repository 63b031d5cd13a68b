// SPDX-FileCopyrightText: 2026 remcal developers
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, ffi::OsString, io::IsTerminal, path::PathBuf};

use clap::{ArgMatches, Command, ValueHint, arg, builder::styling, crate_version, value_parser};
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use crate::cmd_calendar::CmdCalendar;
use crate::cmd_holidays::CmdHolidays;
use crate::cmd_range::CmdRange;
use crate::cmd_reminder::{
    CmdReminderAdd, CmdReminderClear, CmdReminderDelete, CmdReminderEdit, CmdReminderList,
};
use crate::config::{APP_NAME, parse_config};

/// Run the remcal command-line interface.
pub async fn run() -> Result<(), Box<dyn Error>> {
    init_tracing();
    match Cli::parse() {
        Ok(cli) => {
            if let Err(e) = cli.run().await {
                eprintln!("{} {}", "Error:".red(), e);
                std::process::exit(1);
            }
        }
        Err(e) => {
            eprintln!("{} {}", "Error:".red(), e);
            std::process::exit(2);
        }
    };
    Ok(())
}

// Logs go to stderr so the calendar screen and table output stay clean;
// nothing is emitted unless RUST_LOG asks for it.
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .init();
}

/// Command-line interface
#[derive(Debug)]
pub struct Cli {
    /// Path to the configuration file
    pub config: Option<PathBuf>,

    /// The command to execute
    pub command: Commands,
}

impl Cli {
    /// Create the command-line interface
    pub fn command() -> Command {
        const STYLES: styling::Styles = styling::Styles::styled()
            .header(styling::AnsiColor::Green.on_default().bold())
            .usage(styling::AnsiColor::Green.on_default().bold())
            .literal(styling::AnsiColor::Blue.on_default().bold())
            .placeholder(styling::AnsiColor::Cyan.on_default());

        Command::new(APP_NAME)
            .about("Browse public holidays and manage reminders from the terminal.")
            .version(crate_version!())
            .styles(STYLES)
            .subcommand_required(false) // allow default to the calendar
            .arg_required_else_help(false)
            .arg(
                arg!(-c --config [CONFIG] "Path to the configuration file")
                    .long_help(
                        "\
Path to the configuration file. Defaults to $XDG_CONFIG_HOME/remcal/config.toml on Linux and \
MacOS, %LOCALAPPDATA%/remcal/config.toml on Windows.",
                    )
                    .value_parser(value_parser!(PathBuf))
                    .value_hint(ValueHint::FilePath)
                    .global(true),
            )
            .subcommand(CmdCalendar::command())
            .subcommand(CmdReminderList::command())
            .subcommand(CmdReminderAdd::command())
            .subcommand(CmdReminderEdit::command())
            .subcommand(CmdReminderDelete::command())
            .subcommand(CmdReminderClear::command())
            .subcommand(CmdHolidays::command())
            .subcommand(CmdRange::command())
    }

    /// Parse the command-line arguments
    pub fn parse() -> Result<Self, Box<dyn Error>> {
        let commands = Self::command();
        let matches = commands.get_matches();
        Self::from(matches)
    }

    /// Parse the specified arguments
    pub fn try_parse_from<I, T>(args: I) -> Result<Self, Box<dyn Error>>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let commands = Self::command();
        let matches = commands.try_get_matches_from(args)?;
        Self::from(matches)
    }

    /// Create a CLI instance from the `ArgMatches`
    pub fn from(matches: ArgMatches) -> Result<Self, Box<dyn Error>> {
        use Commands::*;
        let command = match matches.subcommand() {
            Some((CmdCalendar::NAME, matches)) => Calendar(CmdCalendar::from(matches)),
            Some((CmdReminderList::NAME, matches)) => List(CmdReminderList::from(matches)),
            Some((CmdReminderAdd::NAME, matches)) => Add(CmdReminderAdd::from(matches)),
            Some((CmdReminderEdit::NAME, matches)) => Edit(CmdReminderEdit::from(matches)),
            Some((CmdReminderDelete::NAME, matches)) => Delete(CmdReminderDelete::from(matches)),
            Some((CmdReminderClear::NAME, matches)) => Clear(CmdReminderClear::from(matches)),
            Some((CmdHolidays::NAME, matches)) => Holidays(CmdHolidays::from(matches)),
            Some((CmdRange::NAME, matches)) => Range(CmdRange::from(matches)),
            None => Calendar(CmdCalendar),
            _ => unreachable!(),
        };

        let config = matches.get_one("config").cloned();
        Ok(Cli { config, command })
    }

    /// Run the command
    pub async fn run(self) -> Result<(), Box<dyn Error>> {
        tracing::debug!("parsing configuration");
        let config = parse_config(self.config).await?;

        use Commands::*;
        match self.command {
            Calendar(a) => a.run(config).await,
            List(a) => a.run(config).await,
            Add(a) => a.run(config).await,
            Edit(a) => a.run(config).await,
            Delete(a) => a.run(config).await,
            Clear(a) => a.run(config).await,
            Holidays(a) => a.run(config).await,
            Range(a) => a.run(config).await,
        }
    }
}

/// The commands available in the CLI
#[derive(Debug, Clone)]
pub enum Commands {
    /// Open the calendar
    Calendar(CmdCalendar),

    /// List reminders
    List(CmdReminderList),

    /// Add a reminder
    Add(CmdReminderAdd),

    /// Edit a reminder
    Edit(CmdReminderEdit),

    /// Delete a reminder
    Delete(CmdReminderDelete),

    /// Delete all reminders on a date
    Clear(CmdReminderClear),

    /// List public holidays
    Holidays(CmdHolidays),

    /// Show the allowed date range
    Range(CmdRange),
}
