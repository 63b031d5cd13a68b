// SPDX-FileCopyrightText: 2026 remcal developers
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use colored::Color;

use remcal_core::{CalendarDate, PublicHoliday};

use crate::table::{Column, Table};
use crate::util::ArgOutputFormat;

#[derive(Debug)]
pub struct HolidayFormatter {
    pub columns: Vec<HolidayColumn>,
    pub today: CalendarDate,
    pub output_format: ArgOutputFormat,
}

impl HolidayFormatter {
    pub fn new(today: CalendarDate) -> Self {
        Self {
            columns: vec![
                HolidayColumn::Date,
                HolidayColumn::LocalName,
                HolidayColumn::EnglishName,
            ],
            today,
            output_format: ArgOutputFormat::Table,
        }
    }

    pub fn with_output_format(mut self, output_format: ArgOutputFormat) -> Self {
        self.output_format = output_format;
        self
    }

    pub fn format(&self, holidays: &[PublicHoliday]) -> Result<String, Box<dyn Error>> {
        match self.output_format {
            ArgOutputFormat::Json => Ok(serde_json::to_string_pretty(holidays)?),
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
                    data: holidays,
                }
                .write_to(&mut out)?;
                Ok(out)
            }
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub enum HolidayColumn {
    Date,
    LocalName,
    EnglishName,
}

struct BoundColumn<'a> {
    column: HolidayColumn,
    today: &'a CalendarDate,
}

impl Column<PublicHoliday> for BoundColumn<'_> {
    fn format(&self, holiday: &PublicHoliday) -> String {
        match self.column {
            HolidayColumn::Date => holiday.date.to_string(),
            HolidayColumn::LocalName => holiday.local_name.clone(),
            HolidayColumn::EnglishName => {
                // Skip the duplicate when both names match.
                if holiday.english_name == holiday.local_name {
                    String::new()
                } else {
                    holiday.english_name.clone()
                }
            }
        }
    }

    fn color(&self, holiday: &PublicHoliday) -> Option<Color> {
        match self.column {
            HolidayColumn::Date if holiday.date == *self.today => Some(Color::Yellow),
            HolidayColumn::Date => Some(Color::Green),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn holiday(date: &str, local: &str, english: &str) -> PublicHoliday {
        PublicHoliday {
            date: CalendarDate::from(date),
            local_name: local.to_string(),
            english_name: english.to_string(),
            country_code: "LT".to_string(),
            kind: "Public".to_string(),
            global: true,
        }
    }

    #[test]
    fn table_lists_both_names() {
        colored::control::set_override(false);

        let holidays = vec![
            holiday("2024-06-24", "Joninės", "St. John's Day"),
            holiday("2024-07-06", "Valstybės diena", "Statehood Day"),
        ];
        let formatter = HolidayFormatter::new(CalendarDate::from("2024-06-10"));
        let out = formatter.format(&holidays).unwrap();

        assert_eq!(
            out,
            "2024-06-24  Joninės          St. John's Day\n\
             2024-07-06  Valstybės diena  Statehood Day\n"
        );
    }

    #[test]
    fn json_keeps_wire_field_names() {
        let holidays = vec![holiday("2024-12-25", "Kalėdos", "Christmas Day")];
        let formatter = HolidayFormatter::new(CalendarDate::from("2024-06-10"))
            .with_output_format(ArgOutputFormat::Json);

        let out = formatter.format(&holidays).unwrap();
        assert!(out.contains("\"localName\""));
        assert!(out.contains("\"countryCode\""));
    }
}
