//! Fixed-locale date display.
//!
//! Documents always show dates as `dd/mm/yyyy`. Values that are not ISO
//! dates are free text and pass through untouched.

use jiff::civil::Date;

pub const DISPLAY_FORMAT: &str = "%d/%m/%Y";

pub fn format_document_date(raw: &str) -> String {
    match raw.trim().parse::<Date>() {
        Ok(date) => date.strftime(DISPLAY_FORMAT).to_string(),
        Err(_) => raw.to_string(),
    }
}

/// Today's date in the system time zone, ISO formatted.
pub fn today_iso() -> String {
    jiff::Zoned::now().date().to_string()
}
