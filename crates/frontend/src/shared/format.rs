//! Display formatting for table cells, cards and slider labels.

use chrono::NaiveDate;
use contracts::shared::maid_filter::RangeCategory;

/// Placeholder for absent values.
pub const EMPTY_CELL: &str = "—";

/// Whole number with a thousands separator: `12500.0` -> `"12,500"`.
pub fn format_amount(value: f64) -> String {
    let rounded = format!("{:.0}", value);
    let (sign, digits) = match rounded.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", rounded.as_str()),
    };

    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    format!("{}{}", sign, out)
}

pub fn format_opt_amount(value: Option<f64>) -> String {
    value.map(format_amount).unwrap_or_else(|| EMPTY_CELL.to_string())
}

/// `165.0` -> `"165 cm"`, absent -> placeholder.
pub fn format_measure(value: Option<f64>, unit: &str) -> String {
    match value {
        Some(v) if unit.is_empty() => format_amount(v),
        Some(v) => format!("{} {}", format_amount(v), unit),
        None => EMPTY_CELL.to_string(),
    }
}

/// Label for one slider endpoint.
pub fn format_range_value(category: RangeCategory, value: f64) -> String {
    match category {
        RangeCategory::Salary | RangeCategory::Loan => format!("${}", format_amount(value)),
        _ => format_measure(Some(value), category.unit()),
    }
}

/// `15.03.1994`, or placeholder.
pub fn format_birth_date(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%d.%m.%Y").to_string())
        .unwrap_or_else(|| EMPTY_CELL.to_string())
}

pub fn format_list(values: &[String]) -> String {
    if values.is_empty() {
        EMPTY_CELL.to_string()
    } else {
        values.join(", ")
    }
}
