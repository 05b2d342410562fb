//! Weekly opening hours
//!
//! The schedule is read from the first seven table rows. Each row's text is
//! split on newlines; the first two non-blank segments are the day label and
//! its hours. One incomplete row invalidates the whole week.

use indexmap::IndexMap;
use scraper::{ElementRef, Html};
use tracing::debug;

use super::text::{raw_text, select_all};
use crate::listing::Hours;

pub const HOURS_ROW_SELECTOR: &str = "table.hours-table tr";
pub const ANY_ROW_SELECTOR: &str = "tr";
pub const DAYS_IN_WEEK: usize = 7;

pub fn extract_hours(document: &Html) -> Hours {
    let mut rows = select_all(document, HOURS_ROW_SELECTOR);
    if rows.is_empty() {
        rows = select_all(document, ANY_ROW_SELECTOR);
    }
    parse_hours_rows(&rows)
}

pub fn parse_hours_rows(rows: &[ElementRef<'_>]) -> Hours {
    let texts: Vec<String> = rows.iter().map(|row| raw_text(*row)).collect();
    parse_hours_text(&texts)
}

/// Build the day -> hours map from raw row texts
pub fn parse_hours_text<S: AsRef<str>>(rows: &[S]) -> Hours {
    if rows.len() < DAYS_IN_WEEK {
        debug!(rows = rows.len(), "hours table missing or short");
        return Hours::NotUpdated;
    }

    let mut schedule = IndexMap::with_capacity(DAYS_IN_WEEK);
    for (index, row) in rows.iter().take(DAYS_IN_WEEK).enumerate() {
        let mut segments = row
            .as_ref()
            .split('\n')
            .map(str::trim)
            .filter(|segment| !segment.is_empty());

        match (segments.next(), segments.next()) {
            (Some(day), Some(hours)) => {
                schedule.insert(day.to_string(), hours.to_string());
            }
            _ => {
                debug!(row = index, "hours row incomplete");
                return Hours::NotUpdated;
            }
        }
    }

    Hours::Weekly(schedule)
}
