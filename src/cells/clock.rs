//! Clock cell: local time through a configurable strftime format.

use chrono::format::{Item, StrftimeItems};
use chrono::{Local, NaiveDateTime};

use crate::constants::DEFAULT_CLOCK_FORMAT;

/// Current local time in the configured format. An invalid format
/// string falls back to the default rather than failing the tick.
pub fn render(format: &str) -> String {
    format_time(&Local::now().naive_local(), format)
}

fn format_time(time: &NaiveDateTime, format: &str) -> String {
    let items: Vec<Item> = StrftimeItems::new(format).collect();
    if items.iter().any(|i| matches!(i, Item::Error)) {
        return time.format(DEFAULT_CLOCK_FORMAT).to_string();
    }
    time.format_with_items(items.into_iter()).to_string()
}
