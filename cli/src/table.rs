// SPDX-FileCopyrightText: 2026 remcal developers
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

use colored::{Color, Colorize};
use unicode_width::UnicodeWidthStr;

/// A plain-text table with per-column alignment and color.
pub struct Table<'a, T, C: Column<T>> {
    pub columns: Vec<C>,
    pub separator: String,
    pub padding: bool,
    pub data: &'a [T],
}

impl<T, C: Column<T>> Table<'_, T, C> {
    pub fn write_to(&self, w: &mut impl fmt::Write) -> fmt::Result {
        let cells: Vec<Vec<String>> = self
            .data
            .iter()
            .map(|row| self.columns.iter().map(|col| col.format(row)).collect())
            .collect();

        let widths = self.padding.then(|| column_max_widths(&cells));

        for (row, data) in cells.into_iter().zip(self.data) {
            for (i, (col, cell)) in self.columns.iter().zip(row.into_iter()).enumerate() {
                let last = i == self.columns.len() - 1;

                // Last column does not need padding if it's left-aligned.
                let cell = match (&widths, col.padding_direction()) {
                    (Some(_), PaddingDirection::Left) if last => cell,
                    (Some(widths), direction) => pad(cell, widths[i], direction),
                    (None, _) => cell,
                };
                let cell = match col.color(data) {
                    Some(color) => cell.color(color).to_string(),
                    None => cell,
                };

                w.write_str(&cell)?;
                w.write_str(if last { "\n" } else { &self.separator })?;
            }
        }
        Ok(())
    }
}

pub trait Column<T> {
    fn format(&self, data: &T) -> String;

    fn padding_direction(&self) -> PaddingDirection {
        PaddingDirection::Left
    }

    fn color(&self, _data: &T) -> Option<Color> {
        None
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaddingDirection {
    Left,
    Right,
}

fn pad(cell: String, width: usize, direction: PaddingDirection) -> String {
    // Pad by display width, not char count.
    let fill = width.saturating_sub(cell.width());
    match direction {
        PaddingDirection::Left => format!("{}{}", cell, " ".repeat(fill)),
        PaddingDirection::Right => format!("{}{}", " ".repeat(fill), cell),
    }
}

fn column_max_widths(cells: &[Vec<String>]) -> Vec<usize> {
    let columns = cells.first().map_or(0, Vec::len);
    let mut max_widths = vec![0; columns];
    for row in cells {
        for (i, cell) in row.iter().enumerate() {
            max_widths[i] = max_widths[i].max(cell.width());
        }
    }
    max_widths
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Name;
    struct Count;

    impl Column<(String, u32)> for Name {
        fn format(&self, data: &(String, u32)) -> String {
            data.0.clone()
        }
    }

    impl Column<(String, u32)> for Count {
        fn format(&self, data: &(String, u32)) -> String {
            data.1.to_string()
        }

        fn padding_direction(&self) -> PaddingDirection {
            PaddingDirection::Right
        }
    }

    enum Col {
        Name(Name),
        Count(Count),
    }

    impl Column<(String, u32)> for Col {
        fn format(&self, data: &(String, u32)) -> String {
            match self {
                Col::Name(c) => c.format(data),
                Col::Count(c) => c.format(data),
            }
        }

        fn padding_direction(&self) -> PaddingDirection {
            match self {
                Col::Name(c) => c.padding_direction(),
                Col::Count(c) => c.padding_direction(),
            }
        }
    }

    #[test]
    fn pads_columns_to_widest_cell() {
        let data = vec![("short".to_string(), 1), ("a longer one".to_string(), 12)];
        let table = Table {
            columns: vec![Col::Count(Count), Col::Name(Name)],
            separator: "  ".to_string(),
            padding: true,
            data: &data,
        };

        let mut out = String::new();
        table.write_to(&mut out).unwrap();
        assert_eq!(out, " 1  short\n12  a longer one\n");
    }

    #[test]
    fn skips_padding_when_disabled() {
        let data = vec![("a".to_string(), 1), ("bb".to_string(), 22)];
        let table = Table {
            columns: vec![Col::Name(Name), Col::Count(Count)],
            separator: " ".to_string(),
            padding: false,
            data: &data,
        };

        let mut out = String::new();
        table.write_to(&mut out).unwrap();
        assert_eq!(out, "a 1\nbb 22\n");
    }
}
