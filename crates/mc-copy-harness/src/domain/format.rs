//! Table formatting
//!
//! Rows are tab-separated. Elapsed times print as whole milliseconds with
//! `,` between thousands groups and no decimal places.

use std::time::Duration;

/// Column labels of the header row.
pub const HEADER: [&str; 3] = ["Name", "Unlocked", "Locked"];

pub fn header_row() -> String {
    HEADER.join("\t")
}

/// Format an integer with `,` between groups of three digits.
pub fn group_thousands(value: u128) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    grouped
}

/// Whole elapsed milliseconds, grouped.
pub fn format_millis(elapsed: Duration) -> String {
    group_thousands(elapsed.as_millis())
}
