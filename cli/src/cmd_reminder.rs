// SPDX-FileCopyrightText: 2026 remcal developers
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{Arg, ArgMatches, Command, arg, value_parser};
use colored::Colorize;

use remcal_core::{
    ApiError, CalendarDate, FieldErrors, Remcal, Reminder, ReminderDraft, parse_date, today,
    validate_draft,
};

use crate::config::Config;
use crate::reminder_formatter::ReminderFormatter;
use crate::util::{ArgOutputFormat, arg_date, get_date, get_date_or_today};

/// List reminders, either for one date or all of them.
#[derive(Debug, Clone)]
pub struct CmdReminderList {
    pub date: Option<CalendarDate>,
    pub output_format: ArgOutputFormat,
}

impl CmdReminderList {
    pub const NAME: &str = "list";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("ls")
            .about("List reminders (all of them, or one date's with --date)")
            .arg(arg_date(false))
            .arg(ArgOutputFormat::arg())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            date: get_date(matches),
            output_format: ArgOutputFormat::from(matches),
        }
    }

    pub async fn run(self, config: Config) -> Result<(), Box<dyn Error>> {
        tracing::debug!("listing reminders");
        let mut app = Remcal::new(&config.api)?;

        let reminders = match &self.date {
            Some(date) => app.reminders_on(date).await?,
            None => app.all_reminders().await?,
        };

        if reminders.is_empty() && self.output_format == ArgOutputFormat::Table {
            println!("{}", "No reminders found".italic());
            return Ok(());
        }

        print_reminders(&reminders, self.output_format)
    }
}

/// Add a reminder.
#[derive(Debug, Clone)]
pub struct CmdReminderAdd {
    pub text: String,
    pub date: Option<CalendarDate>,
    pub time: String,
    pub output_format: ArgOutputFormat,
}

impl CmdReminderAdd {
    pub const NAME: &str = "add";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("new")
            .about("Add a reminder")
            .arg(arg!(text: <TEXT> "Reminder text"))
            .arg(arg_date(false))
            .arg(arg_time(true))
            .arg(ArgOutputFormat::arg())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            text: get_text(matches).unwrap_or_default(),
            date: get_date(matches),
            time: get_time(matches).unwrap_or_default(),
            output_format: ArgOutputFormat::from(matches),
        }
    }

    pub async fn run(self, config: Config) -> Result<(), Box<dyn Error>> {
        tracing::debug!("adding reminder");
        let draft = ReminderDraft {
            text: self.text,
            date: self.date.unwrap_or_else(today),
            time: self.time,
        };
        if let Err(errors) = validate_draft(&draft) {
            return Err(describe_field_errors("Invalid reminder", &errors).into());
        }

        let mut app = Remcal::new(&config.api)?;
        let reminder = app.create_reminder(&draft).await.map_err(describe_api)?;
        print_reminders(&[reminder], self.output_format)
    }
}

/// Edit a reminder by id. Unset fields keep their current value.
#[derive(Debug, Clone)]
pub struct CmdReminderEdit {
    pub id: i64,
    pub text: Option<String>,
    pub date: Option<CalendarDate>,
    pub time: Option<String>,
    pub output_format: ArgOutputFormat,
}

impl CmdReminderEdit {
    pub const NAME: &str = "edit";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Edit a reminder")
            .arg(arg_id())
            .arg(arg!(-t --text <TEXT> "New reminder text").required(false))
            .arg(arg_date(false))
            .arg(arg_time(false))
            .arg(ArgOutputFormat::arg())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            id: get_id(matches),
            text: matches.get_one("text").cloned(),
            date: get_date(matches),
            time: get_time(matches),
            output_format: ArgOutputFormat::from(matches),
        }
    }

    pub async fn run(self, config: Config) -> Result<(), Box<dyn Error>> {
        tracing::debug!(id = self.id, "editing reminder");
        let mut app = Remcal::new(&config.api)?;

        // The service has no by-id read, so resolve the current values
        // from the full list before applying the partial edit.
        let current = app
            .all_reminders()
            .await?
            .into_iter()
            .find(|reminder| reminder.id == self.id)
            .ok_or_else(|| format!("No reminder with id {}", self.id))?;

        let draft = ReminderDraft {
            text: self.text.unwrap_or(current.text),
            date: self.date.unwrap_or(current.date),
            time: self.time.unwrap_or(current.time),
        };
        if let Err(errors) = validate_draft(&draft) {
            return Err(describe_field_errors("Invalid reminder", &errors).into());
        }

        let reminder = app
            .update_reminder(self.id, &draft)
            .await
            .map_err(describe_api)?;
        print_reminders(&[reminder], self.output_format)
    }
}

/// Delete one reminder by id.
#[derive(Debug, Clone)]
pub struct CmdReminderDelete {
    pub id: i64,
}

impl CmdReminderDelete {
    pub const NAME: &str = "delete";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("rm")
            .about("Delete a reminder")
            .arg(arg_id())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            id: get_id(matches),
        }
    }

    pub async fn run(self, config: Config) -> Result<(), Box<dyn Error>> {
        tracing::debug!(id = self.id, "deleting reminder");
        let mut app = Remcal::new(&config.api)?;
        app.delete_reminder(self.id).await.map_err(describe_api)?;
        println!("Deleted reminder {}", self.id);
        Ok(())
    }
}

/// Delete every reminder on one date.
#[derive(Debug, Clone)]
pub struct CmdReminderClear {
    pub date: CalendarDate,
}

impl CmdReminderClear {
    pub const NAME: &str = "clear";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Delete all reminders on a date")
            .arg(arg!(date: <DATE> "Date in YYYY-MM-DD form").value_parser(parse_date))
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            date: get_date_or_today(matches),
        }
    }

    pub async fn run(self, config: Config) -> Result<(), Box<dyn Error>> {
        tracing::debug!(date = %self.date, "clearing reminders");
        let mut app = Remcal::new(&config.api)?;
        app.delete_reminders_on(&self.date)
            .await
            .map_err(describe_api)?;
        println!("Cleared reminders on {}", self.date);
        Ok(())
    }
}

fn print_reminders(
    reminders: &[Reminder],
    output_format: ArgOutputFormat,
) -> Result<(), Box<dyn Error>> {
    let formatter = ReminderFormatter::new(today()).with_output_format(output_format);
    print!("{}", formatter.format(reminders)?);
    Ok(())
}

/// Folds the service's per-field validation errors into the error message.
fn describe_api(error: ApiError) -> Box<dyn Error> {
    match error.field_errors() {
        Some(fields) => describe_field_errors(&error.to_string(), fields).into(),
        None => error.into(),
    }
}

fn describe_field_errors(message: &str, errors: &FieldErrors) -> String {
    let details: Vec<String> = errors
        .iter()
        .map(|(field, problem)| format!("{field}: {problem}"))
        .collect();
    format!("{message} ({})", details.join(", "))
}

fn arg_id() -> Arg {
    arg!(id: <ID> "The id of the reminder").value_parser(value_parser!(i64))
}

fn get_id(matches: &ArgMatches) -> i64 {
    matches.get_one("id").copied().unwrap_or_default()
}

fn arg_time(required: bool) -> Arg {
    arg!(--time <TIME> "Time of day in HH:MM form").required(required)
}

fn get_time(matches: &ArgMatches) -> Option<String> {
    matches.get_one("time").cloned()
}

fn get_text(matches: &ArgMatches) -> Option<String> {
    matches.get_one::<String>("text").cloned()
}
