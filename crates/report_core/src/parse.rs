//! Input parsing and display formatting
//!
//! Numeric steps are deliberately lenient: anything that is not a digit
//! or a minus sign is stripped, and input with no digits coerces to
//! zero instead of failing the session. The date step is the one strict
//! validator in the workflow.

use chrono::{Local, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;

static NON_AMOUNT: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\d-]").expect("static regex"));

const DATE_FORMAT: &str = "%d/%m/%Y";

/// Parse a money/count amount from free text.
///
/// Strips every character except digits and `-`, then parses the rest.
/// Returns 0 for empty, sign-only, or otherwise unparseable input
/// (e.g. a stray `-` in the middle of the digits).
pub fn parse_amount(text: &str) -> i64 {
    let cleaned = NON_AMOUNT.replace_all(text, "");
    if cleaned.is_empty() || cleaned == "-" {
        return 0;
    }
    cleaned.parse::<i64>().unwrap_or(0)
}

/// Format an amount with `.` as the thousands separator (`1500000` ->
/// `"1.500.000"`). The sign is preserved.
pub fn format_thousands(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    let offset = digits.len() % 3;
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (i + 3 - offset) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }
    if amount < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

/// Zero-pad a shift number to two digits (`"1"` -> `"01"`).
///
/// Non-numeric input passes through unchanged; empty input falls back
/// to `"01"`.
pub fn shift_two_digits(shift: &str) -> String {
    match shift.parse::<i64>() {
        Ok(n) => format!("{:02}", n),
        Err(_) if shift.is_empty() => "01".to_string(),
        Err(_) => shift.to_string(),
    }
}

/// Strict `dd/mm/yyyy` validation with zero-padded parts and real
/// calendar checking. `22/08/2025` passes; `2025-08-22`, `32/01/2025`
/// and `2/8/2025` do not.
pub fn is_valid_date(text: &str) -> bool {
    match NaiveDate::parse_from_str(text, DATE_FORMAT) {
        // chrono accepts unpadded day/month parts, the workflow does not
        Ok(date) => date.format(DATE_FORMAT).to_string() == text,
        Err(_) => false,
    }
}

/// Today's date in the report's `dd/mm/yyyy` format.
pub fn today_string() -> String {
    Local::now().format(DATE_FORMAT).to_string()
}
