use crate::PRESENT;

pub const MONTH_ABBREVIATIONS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Format a stored `YYYY-MM` date (or `Present`) for display.
///
/// `"2021-03"` becomes `"Mar 2021"` and `"Present"` is returned as is.
/// Anything that is not exactly four digits, a dash, and a two-digit month in
/// 1..=12 is returned unchanged.
pub fn format_display_date(value: &str) -> String {
    if value == PRESENT {
        return PRESENT.to_string();
    }

    match parse_year_month(value) {
        Some((year, month)) => format!("{} {}", MONTH_ABBREVIATIONS[month - 1], year),
        None => value.to_string(),
    }
}

fn parse_year_month(value: &str) -> Option<(&str, usize)> {
    let (year, month) = value.split_once('-')?;

    if year.len() != 4 || !year.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if month.len() != 2 || !month.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let month: usize = month.parse().ok()?;
    (1..=12).contains(&month).then_some((year, month))
}
