// SPDX-FileCopyrightText: 2026 remcal developers
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use colored::Color;

use remcal_core::{CalendarDate, Reminder};

use crate::table::{Column, PaddingDirection, Table};
use crate::util::ArgOutputFormat;

#[derive(Debug)]
pub struct ReminderFormatter {
    pub columns: Vec<ReminderColumn>,
    pub today: CalendarDate,
    pub output_format: ArgOutputFormat,
}

impl ReminderFormatter {
    pub fn new(today: CalendarDate) -> Self {
        Self {
            columns: vec![
                ReminderColumn::Id,
                ReminderColumn::Date,
                ReminderColumn::Time,
                ReminderColumn::Text,
            ],
            today,
            output_format: ArgOutputFormat::Table,
        }
    }

    pub fn with_output_format(mut self, output_format: ArgOutputFormat) -> Self {
        self.output_format = output_format;
        self
    }

    pub fn format(&self, reminders: &[Reminder]) -> Result<String, Box<dyn Error>> {
        match self.output_format {
            ArgOutputFormat::Json => Ok(serde_json::to_string_pretty(reminders)?),
            ArgOutputFormat::Table => {
                let columns = self
                    .columns
                    .iter()
                    .map(|column| BoundColumn {
                        column: *column,
                        today: &self.today,
                    })
                    .collect();

                let mut out = String::new();
                Table {
                    columns,
                    separator: "  ".to_string(),
                    padding: true,
                    data: reminders,
                }
                .write_to(&mut out)?;
                Ok(out)
            }
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub enum ReminderColumn {
    Id,
    Date,
    Time,
    Text,
}

struct BoundColumn<'a> {
    column: ReminderColumn,
    today: &'a CalendarDate,
}

impl Column<Reminder> for BoundColumn<'_> {
    fn format(&self, reminder: &Reminder) -> String {
        match self.column {
            ReminderColumn::Id => reminder.id.to_string(),
            ReminderColumn::Date => reminder.date.to_string(),
            ReminderColumn::Time => reminder.time.clone(),
            ReminderColumn::Text => reminder.text.clone(),
        }
    }

    fn padding_direction(&self) -> PaddingDirection {
        match self.column {
            ReminderColumn::Id => PaddingDirection::Right,
            _ => PaddingDirection::Left,
        }
    }

    fn color(&self, reminder: &Reminder) -> Option<Color> {
        const COLOR_PAST: Option<Color> = Some(Color::Red);
        const COLOR_TODAY: Option<Color> = Some(Color::Yellow);

        match self.column {
            ReminderColumn::Date => {
                if reminder.date < *self.today {
                    COLOR_PAST
                } else if reminder.date == *self.today {
                    COLOR_TODAY
                } else {
                    None
                }
            }
            _ => None,
        }
    }
}
