//! In-game period expressions such as `1 week and 2 days`.

use std::time::Duration;

use dungeon_foundation::{Error, ErrorKind, Result};

const MINUTE: u64 = 60;
const HOUR: u64 = 60 * MINUTE;
const DAY: u64 = 24 * HOUR;
const WEEK: u64 = 7 * DAY;
const MONTH: u64 = 30 * DAY;
const YEAR: u64 = 12 * MONTH;

/// Parses a period made of `<amount> <unit>` terms joined by `and` or `,`.
///
/// Units may be singular or plural and are case-insensitive. A month is
/// 30 days and a year is 12 months.
///
/// # Errors
///
/// Returns an invalid period error if a term is malformed, a unit is
/// unknown, the expression is empty, or the total overflows.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use dungeon_content::period::parse_period;
///
/// let period = parse_period("1 hour and 30 minutes").unwrap();
/// assert_eq!(period, Duration::from_secs(5400));
/// ```
pub fn parse_period(text: &str) -> Result<Duration> {
    let invalid = || Error::new(ErrorKind::InvalidPeriod(text.to_string()));

    let normalized = text.replace(',', " and ");
    let mut terms: Vec<Vec<&str>> = vec![Vec::new()];
    for word in normalized.split_whitespace() {
        if word.eq_ignore_ascii_case("and") {
            terms.push(Vec::new());
        } else if let Some(term) = terms.last_mut() {
            term.push(word);
        }
    }

    let mut total: u64 = 0;
    for term in &terms {
        let [amount, unit] = term.as_slice() else {
            return Err(invalid());
        };
        let amount: u64 = amount.parse().map_err(|_| invalid())?;
        let seconds = unit_seconds(unit).ok_or_else(invalid)?;
        total = amount
            .checked_mul(seconds)
            .and_then(|term| total.checked_add(term))
            .ok_or_else(invalid)?;
    }
    Ok(Duration::from_secs(total))
}

fn unit_seconds(unit: &str) -> Option<u64> {
    let unit = unit.to_ascii_lowercase();
    let singular = unit.strip_suffix('s').unwrap_or(unit.as_str());
    match singular {
        "second" => Some(1),
        "minute" => Some(MINUTE),
        "hour" => Some(HOUR),
        "day" => Some(DAY),
        "week" => Some(WEEK),
        "month" => Some(MONTH),
        "year" => Some(YEAR),
        _ => None,
    }
}
