use chrono::{Local, NaiveDate};
use std::cmp::Ordering;

use crate::domain::a001_maid::MaidRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortField {
    Name,
    Nationality,
    Age,
    Height,
    Weight,
    Salary,
    Availability,
}

impl SortField {
    pub fn key(&self) -> &'static str {
        match self {
            SortField::Name => "name",
            SortField::Nationality => "nationality",
            SortField::Age => "age",
            SortField::Height => "height",
            SortField::Weight => "weight",
            SortField::Salary => "salary",
            SortField::Availability => "availability",
        }
    }
}

pub fn sort_records(records: &mut [MaidRecord], field: SortField, ascending: bool) {
    sort_records_on(records, field, ascending, Local::now().date_naive())
}

/// Stable sort. Records missing the sort value go last in both directions.
pub fn sort_records_on(
    records: &mut [MaidRecord],
    field: SortField,
    ascending: bool,
    today: NaiveDate,
) {
    records.sort_by(|a, b| {
        let ord = match field {
            SortField::Name => Some(text_cmp(&a.name, &b.name)),
            SortField::Nationality => opt_cmp(
                a.nationality.as_deref(),
                b.nationality.as_deref(),
                text_cmp,
            ),
            SortField::Age => opt_cmp(a.age_on(today), b.age_on(today), |x, y| x.cmp(&y)),
            SortField::Height => opt_cmp(a.height, b.height, num_cmp),
            SortField::Weight => opt_cmp(a.weight, b.weight, num_cmp),
            SortField::Salary => opt_cmp(a.salary, b.salary, num_cmp),
            SortField::Availability => Some(a.availability().cmp(&b.availability())),
        };
        match ord {
            Some(o) if ascending => o,
            Some(o) => o.reverse(),
            // exactly one side is missing
            None => missing_last(field, a, b, today),
        }
    });
}

fn num_cmp(a: f64, b: f64) -> Ordering {
    a.total_cmp(&b)
}

fn text_cmp(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

/// `Some` when both sides have a value (or both lack one).
fn opt_cmp<T>(a: Option<T>, b: Option<T>, cmp: impl Fn(T, T) -> Ordering) -> Option<Ordering> {
    match (a, b) {
        (Some(x), Some(y)) => Some(cmp(x, y)),
        (None, None) => Some(Ordering::Equal),
        _ => None,
    }
}

fn missing_last(field: SortField, a: &MaidRecord, b: &MaidRecord, today: NaiveDate) -> Ordering {
    let has = |r: &MaidRecord| match field {
        SortField::Nationality => r.nationality.is_some(),
        SortField::Age => r.age_on(today).is_some(),
        SortField::Height => r.height.is_some(),
        SortField::Weight => r.weight.is_some(),
        SortField::Salary => r.salary.is_some(),
        SortField::Name | SortField::Availability => true,
    };
    // present before missing
    has(b).cmp(&has(a))
}
