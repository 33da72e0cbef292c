use std::fmt::Write;

use chrono::format::{Item, StrftimeItems};
use chrono::Local;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::Booking;

pub const HEADERS: [&str; 6] = ["Service", "Item", "Agent", "Amount", "Date", "Status"];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CsvError {
    #[error("Unterminated quoted field starting on row {row}")]
    UnterminatedQuote { row: usize },

    #[error("Unexpected character {found:?} after closing quote on row {row}")]
    TrailingCharacter { row: usize, found: char },

    #[error("Invalid date format: {0}")]
    InvalidDateFormat(String),
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExportOptions {
    /// chrono format string for the booking date, rendered in local time
    #[serde(default = "default_date_format")]
    pub date_format: String,
    /// Written in the Agent column when a booking has no agent
    #[serde(default = "default_agent_placeholder")]
    pub agent_placeholder: String,
}

fn default_date_format() -> String {
    "%-m/%-d/%Y".to_string()
}

fn default_agent_placeholder() -> String {
    "-".to_string()
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            date_format: default_date_format(),
            agent_placeholder: default_agent_placeholder(),
        }
    }
}

impl ExportOptions {
    /// Reject date formats chrono cannot render
    pub fn validate(&self) -> Result<(), CsvError> {
        if StrftimeItems::new(&self.date_format).any(|item| matches!(item, Item::Error)) {
            return Err(CsvError::InvalidDateFormat(self.date_format.clone()));
        }
        Ok(())
    }

    fn format_date(&self, booking: &Booking) -> Result<String, CsvError> {
        let mut date = String::new();
        write!(
            date,
            "{}",
            booking.booking_date.with_timezone(&Local).format(&self.date_format)
        )
        .map_err(|_| CsvError::InvalidDateFormat(self.date_format.clone()))?;
        Ok(date)
    }

    /// The six exported values for one booking, unescaped
    pub fn row(&self, booking: &Booking) -> Result<[String; 6], CsvError> {
        let agent = if booking.has_agent() {
            booking.agent_name.clone()
        } else {
            self.agent_placeholder.clone()
        };
        Ok([
            booking.service_type.to_string(),
            booking.item_name.clone(),
            agent,
            booking.total_amount.to_string(),
            self.format_date(booking)?,
            booking.status.to_string(),
        ])
    }
}

fn quote(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

fn join_row<S: AsRef<str>>(fields: &[S]) -> String {
    fields
        .iter()
        .map(|f| quote(f.as_ref()))
        .collect::<Vec<_>>()
        .join(",")
}

/// Render the ledger as CSV: one header row, then one row per booking in
/// the order given. Every field is quoted.
pub fn export_csv<'a, I>(bookings: I, options: &ExportOptions) -> Result<String, CsvError>
where
    I: IntoIterator<Item = &'a Booking>,
{
    options.validate()?;
    let mut lines = vec![join_row(&HEADERS)];
    for booking in bookings {
        lines.push(join_row(&options.row(booking)?));
    }
    Ok(lines.join("\n"))
}

/// Split CSV text into rows of unescaped fields. Commas and newlines inside
/// quotes belong to the field.
pub fn parse_csv(input: &str) -> Result<Vec<Vec<String>>, CsvError> {
    let mut rows = Vec::new();
    if input.is_empty() {
        return Ok(rows);
    }

    let mut row: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut chars = input.chars().peekable();
    let mut in_quotes = false;
    let mut closed_quote = false;
    let mut quote_row = 0;

    while let Some(c) = chars.next() {
        if in_quotes {
            match c {
                '"' if chars.peek() == Some(&'"') => {
                    chars.next();
                    field.push('"');
                }
                '"' => {
                    in_quotes = false;
                    closed_quote = true;
                }
                _ => field.push(c),
            }
            continue;
        }

        match c {
            ',' => {
                row.push(std::mem::take(&mut field));
                closed_quote = false;
            }
            '\n' => {
                row.push(std::mem::take(&mut field));
                rows.push(std::mem::take(&mut row));
                closed_quote = false;
            }
            '\r' if chars.peek() == Some(&'\n') => {}
            '"' if field.is_empty() && !closed_quote => {
                in_quotes = true;
                quote_row = rows.len() + 1;
            }
            _ if closed_quote => {
                return Err(CsvError::TrailingCharacter {
                    row: rows.len() + 1,
                    found: c,
                })
            }
            _ => field.push(c),
        }
    }

    if in_quotes {
        return Err(CsvError::UnterminatedQuote { row: quote_row });
    }
    row.push(field);
    rows.push(row);
    Ok(rows)
}
