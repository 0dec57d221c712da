//! Calendar date validation for the `YYYY-MM-DD` format used in journal files.

use chrono::NaiveDate;

const MONTH_LENGTHS: [u32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Check that `text` is a real calendar date written as `YYYY-MM-DD`
pub fn validate(text: &str) -> bool {
    let bytes = text.as_bytes();
    if bytes.len() != 10 {
        return false;
    }

    let shape_ok = bytes.iter().enumerate().all(|(i, b)| match i {
        4 | 7 => *b == b'-',
        _ => b.is_ascii_digit(),
    });
    if !shape_ok {
        return false;
    }

    let year = digits(&bytes[0..4]);
    let month = digits(&bytes[5..7]);
    let day = digits(&bytes[8..10]);

    if !(1..=12).contains(&month) || day < 1 {
        return false;
    }

    day <= days_in(month, year)
}

/// Number of days in `month` (1-12) of `year`
pub fn days_in(month: u32, year: u32) -> u32 {
    match month {
        2 if is_leap_year(year) => 29,
        1..=12 => MONTH_LENGTHS[(month - 1) as usize],
        _ => 0,
    }
}

pub fn is_leap_year(year: u32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Parse a validated date for arithmetic
pub fn to_naive_date(text: &str) -> Option<NaiveDate> {
    if !validate(text) {
        return None;
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d").ok()
}

// Caller has already checked every byte is an ASCII digit.
fn digits(bytes: &[u8]) -> u32 {
    bytes
        .iter()
        .fold(0, |acc, b| acc * 10 + u32::from(b - b'0'))
}
