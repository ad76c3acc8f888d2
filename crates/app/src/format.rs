//! Display formatting helpers for amounts and dates.

use chrono::{Datelike, NaiveDate};

/// Philippine peso with thousands separators, no decimals.
pub fn format_peso(amount: u32) -> String {
    let digits = amount.to_string();
    let mut grouped = String::new();
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("\u{20B1}{grouped}")
}

/// "February 2026" style group header for transaction logs.
pub fn month_heading(date: NaiveDate) -> String {
    format!("{} {}", month_name(date.month()), date.year())
}

fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        _ => "December",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn peso_amounts_are_grouped() {
        assert_eq!(format_peso(12_000), "\u{20B1}12,000");
        assert_eq!(format_peso(500), "\u{20B1}500");
        assert_eq!(format_peso(1_234_567), "\u{20B1}1,234,567");
    }

    #[test]
    fn month_heading_spells_out_the_month() {
        let date = NaiveDate::from_ymd_opt(2026, 2, 1).unwrap();
        assert_eq!(month_heading(date), "February 2026");
    }
}
