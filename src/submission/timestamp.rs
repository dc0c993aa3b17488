use chrono::{DateTime, Utc};
use chrono_tz::Asia::Kolkata;

/// `DD/MM/YYYY, hh:mm AM/PM`
const DISPLAY_FORMAT: &str = "%d/%m/%Y, %I:%M %p";

/// Render an instant the way submissions display it: Indian Standard Time,
/// day-first date, 12-hour clock.
pub fn display(instant: DateTime<Utc>) -> String {
    instant.with_timezone(&Kolkata).format(DISPLAY_FORMAT).to_string()
}
