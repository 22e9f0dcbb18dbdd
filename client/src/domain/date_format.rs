//! Display formatting for bill dates and statuses.
//!
//! Bills are stored with ISO-8601 dates (`2023-03-01`, optionally followed by a
//! time part) and shown in the list with the short French form used across the
//! employee pages: `1 Mar. 23`.

use chrono::{Datelike, NaiveDate};
use shared::BillStatus;

use crate::error::FormatError;

/// Format an ISO-8601 date as `<day> <Mon>. <yy>`.
///
/// Fails when the input is not a real calendar day (`2023-02-30`, `invalid-date`).
pub fn format_date(iso_date: &str) -> Result<String, FormatError> {
    let date = parse_iso_date(iso_date)?;
    Ok(format!(
        "{} {}. {:02}",
        date.day(),
        short_month_name(date.month()),
        date.year().rem_euclid(100)
    ))
}

/// Parse the date part of an ISO-8601 string
pub fn parse_iso_date(iso_date: &str) -> Result<NaiveDate, FormatError> {
    let date_part = iso_date.trim().split('T').next().unwrap_or_default();
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
        .map_err(|_| FormatError::InvalidDate(iso_date.to_string()))
}

/// Label shown in the status column
pub fn format_status(status: BillStatus) -> &'static str {
    match status {
        BillStatus::Pending => "En attente",
        BillStatus::Accepted => "Accepté",
        BillStatus::Refused => "Refused",
    }
}

// First three letters of the French short month names, capitalised.
// June and July both collapse to "Jui".
fn short_month_name(month: u32) -> &'static str {
    match month {
        1 => "Jan", 2 => "Fév", 3 => "Mar", 4 => "Avr",
        5 => "Mai", 6 => "Jui", 7 => "Jui", 8 => "Aoû",
        9 => "Sep", 10 => "Oct", 11 => "Nov", 12 => "Déc",
        _ => "Invalid Month",
    }
}
