use chrono::{Local, NaiveDate};
use std::collections::BTreeSet;

use super::state::{FilterState, RangeCategory, SetCategory};
use crate::domain::a001_maid::{Availability, MaidRecord};

/// Records passing every predicate, in their original order.
///
/// Age is computed against today's local date on each call.
pub fn evaluate(records: &[MaidRecord], state: &FilterState) -> Vec<MaidRecord> {
    evaluate_on(records, state, Local::now().date_naive())
}

pub fn evaluate_on(records: &[MaidRecord], state: &FilterState, today: NaiveDate) -> Vec<MaidRecord> {
    records
        .iter()
        .filter(|r| matches(r, state, today))
        .cloned()
        .collect()
}

/// Scalar set checks first, then list intersections, then ranges.
pub fn matches(record: &MaidRecord, state: &FilterState, today: NaiveDate) -> bool {
    SetCategory::ALL
        .iter()
        .filter(|c| !c.is_list())
        .all(|c| scalar_passes(record, state, *c))
        && SetCategory::ALL
            .iter()
            .filter(|c| c.is_list())
            .all(|c| list_passes(record, state, *c))
        && RangeCategory::ALL
            .iter()
            .all(|c| range_passes(record, state, *c, today))
}

fn scalar_value(record: &MaidRecord, category: SetCategory) -> Option<&str> {
    match category {
        SetCategory::Nationality => record.nationality.as_deref(),
        SetCategory::Religion => record.religion.as_deref(),
        SetCategory::MaritalStatus => record.marital_status.as_deref(),
        SetCategory::Availability => Some(record.availability().as_str()),
        SetCategory::Skills | SetCategory::Languages | SetCategory::Type => None,
    }
}

fn list_values(record: &MaidRecord, category: SetCategory) -> &[String] {
    match category {
        SetCategory::Skills => &record.skills,
        SetCategory::Languages => &record.languages,
        SetCategory::Type => &record.maid_type,
        _ => &[],
    }
}

fn numeric_value(record: &MaidRecord, category: RangeCategory, today: NaiveDate) -> Option<f64> {
    match category {
        RangeCategory::Age => record.age_on(today).map(f64::from),
        RangeCategory::Height => record.height,
        RangeCategory::Weight => record.weight,
        RangeCategory::Salary => record.salary,
        RangeCategory::Loan => record.loan_amount,
        RangeCategory::Children => record.children,
    }
}

fn scalar_passes(record: &MaidRecord, state: &FilterState, category: SetCategory) -> bool {
    let selected = state.selected(category);
    if selected.is_empty() {
        return true;
    }
    scalar_value(record, category).map_or(false, |v| selected.contains(v))
}

fn list_passes(record: &MaidRecord, state: &FilterState, category: SetCategory) -> bool {
    let selected = state.selected(category);
    if selected.is_empty() {
        return true;
    }
    list_values(record, category)
        .iter()
        .any(|v| selected.contains(v))
}

/// A present value must lie in `[lo, hi]`. A missing value only passes while
/// the range is still at its default bounds.
fn range_passes(
    record: &MaidRecord,
    state: &FilterState,
    category: RangeCategory,
    today: NaiveDate,
) -> bool {
    match numeric_value(record, category, today) {
        Some(v) => state.range(category).contains(v),
        None => state.is_default_range(category),
    }
}

/// Sorted distinct values present in `records` for a set category.
/// Availability always offers its three fixed states.
pub fn distinct_values(records: &[MaidRecord], category: SetCategory) -> Vec<String> {
    if category == SetCategory::Availability {
        return Availability::ALL
            .iter()
            .map(|a| a.as_str().to_string())
            .collect();
    }

    let mut values = BTreeSet::new();
    for record in records {
        if category.is_list() {
            values.extend(list_values(record, category).iter().cloned());
        } else if let Some(v) = scalar_value(record, category) {
            values.insert(v.to_string());
        }
    }
    values.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::maid_filter::state::{Endpoint, NumericRange};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    /// Birth date giving exactly `age` full years on `today()`.
    fn born_for_age(age: i32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024 - age, 1, 15).unwrap()
    }

    fn record(id: &str) -> MaidRecord {
        MaidRecord {
            id: id.to_string(),
            name: format!("Maid {}", id),
            nationality: Some("Filipino".into()),
            religion: Some("Catholic".into()),
            marital_status: Some("Single".into()),
            supplier: None,
            is_active: true,
            is_employed: false,
            date_of_birth: Some(born_for_age(30)),
            height: Some(155.0),
            weight: Some(50.0),
            salary: Some(600.0),
            loan_amount: Some(1000.0),
            children: Some(0.0),
            skills: vec!["Cooking".into(), "Cleaning".into()],
            languages: vec!["English".into()],
            maid_type: vec!["Transfer".into()],
            photo_url: None,
            summary: String::new(),
            source: Default::default(),
        }
    }

    fn ids(records: &[MaidRecord]) -> Vec<&str> {
        records.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn test_empty_collection() {
        let state = FilterState::default().toggle_set_member(SetCategory::Skills, "Cooking");
        assert!(evaluate_on(&[], &state, today()).is_empty());
    }

    #[test]
    fn test_evaluate_is_pure() {
        let records = vec![record("a"), record("b")];
        let state = FilterState::default().toggle_set_member(SetCategory::Religion, "Catholic");
        let before = (records.clone(), state.clone());

        let first = evaluate_on(&records, &state, today());
        let second = evaluate_on(&records, &state, today());

        assert_eq!(first, second);
        assert_eq!((records, state), before);
    }

    #[test]
    fn test_default_state_keeps_in_domain_records() {
        let records = vec![record("a"), record("b"), record("c")];
        let result = evaluate_on(&records, &FilterState::default(), today());
        assert_eq!(ids(&result), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_age_scenario() {
        let mut young = record("young");
        young.date_of_birth = Some(born_for_age(25));
        let mut old = record("old");
        old.date_of_birth = Some(born_for_age(70));
        let records = vec![young, old];

        let state = FilterState::default();
        assert_eq!(ids(&evaluate_on(&records, &state, today())), vec!["young"]);

        let narrowed = state.with_range_endpoint(RangeCategory::Age, Endpoint::Hi, 30.0);
        assert_eq!(ids(&evaluate_on(&records, &narrowed, today())), vec!["young"]);

        let widened = state.with_range_endpoint(RangeCategory::Age, Endpoint::Hi, 70.0);
        assert_eq!(
            ids(&evaluate_on(&records, &widened, today())),
            vec!["young", "old"]
        );
    }

    #[test]
    fn test_skills_intersection_scenario() {
        let a = record("a");
        let mut b = record("b");
        b.skills = vec!["Cleaning".into()];
        let state = FilterState::default().toggle_set_member(SetCategory::Skills, "Cooking");

        assert_eq!(ids(&evaluate_on(&[a, b], &state, today())), vec!["a"]);
    }

    #[test]
    fn test_missing_list_is_empty() {
        let mut r = record("a");
        r.skills.clear();
        assert_eq!(evaluate_on(&[r.clone()], &FilterState::default(), today()).len(), 1);

        let state = FilterState::default().toggle_set_member(SetCategory::Skills, "Cooking");
        assert!(evaluate_on(&[r], &state, today()).is_empty());
    }

    #[test]
    fn test_scalar_selection_matches_any_selected_value() {
        let a = record("a");
        let mut b = record("b");
        b.nationality = Some("Indonesian".into());
        let mut c = record("c");
        c.nationality = None;
        let state = FilterState::default()
            .toggle_set_member(SetCategory::Nationality, "Indonesian")
            .toggle_set_member(SetCategory::Nationality, "Myanmar");

        assert_eq!(ids(&evaluate_on(&[a, b, c], &state, today())), vec!["b"]);
    }

    #[test]
    fn test_availability_uses_derived_status() {
        let available = record("available");
        let mut employed = record("employed");
        employed.is_employed = true;
        let mut draft = record("draft");
        draft.is_active = false;

        let state = FilterState::default().toggle_set_member(SetCategory::Availability, "Draft");
        assert_eq!(
            ids(&evaluate_on(&[available, employed, draft], &state, today())),
            vec!["draft"]
        );
    }

    #[test]
    fn test_and_composition() {
        let r = record("a");
        let by_religion = FilterState::default().toggle_set_member(SetCategory::Religion, "Catholic");
        let by_salary = FilterState::default()
            .with_range_endpoint(RangeCategory::Salary, Endpoint::Lo, 1000.0);
        // each predicate alone, one that passes and one that does not
        assert_eq!(evaluate_on(&[r.clone()], &by_religion, today()).len(), 1);
        assert!(evaluate_on(&[r.clone()], &by_salary, today()).is_empty());

        let height_only = FilterState::default()
            .with_range_endpoint(RangeCategory::Height, Endpoint::Hi, 160.0);
        let weight_only = FilterState::default()
            .with_range_endpoint(RangeCategory::Weight, Endpoint::Lo, 60.0);
        let mut tall = record("tall");
        tall.height = Some(170.0);
        tall.weight = Some(70.0);
        let records = vec![r, tall];
        assert_eq!(ids(&evaluate_on(&records, &height_only, today())), vec!["a"]);
        assert_eq!(ids(&evaluate_on(&records, &weight_only, today())), vec!["tall"]);

        // each predicate is satisfiable on its own, no record satisfies both
        let both = height_only.with_range_endpoint(RangeCategory::Weight, Endpoint::Lo, 60.0);
        assert!(evaluate_on(&records, &both, today()).is_empty());
    }

    #[test]
    fn test_range_is_inclusive() {
        let mut at_lo = record("lo");
        at_lo.salary = Some(500.0);
        let mut at_hi = record("hi");
        at_hi.salary = Some(800.0);
        let mut below = record("below");
        below.salary = Some(499.0);
        let mut above = record("above");
        above.salary = Some(801.0);

        let state = FilterState::default()
            .with_range_endpoint(RangeCategory::Salary, Endpoint::Lo, 500.0)
            .with_range_endpoint(RangeCategory::Salary, Endpoint::Hi, 800.0);
        assert_eq!(
            ids(&evaluate_on(&[below, at_lo, at_hi, above], &state, today())),
            vec!["lo", "hi"]
        );
    }

    #[test]
    fn test_missing_numeric_fails_only_narrowed_ranges() {
        let mut r = record("a");
        r.height = None;
        r.date_of_birth = None;

        assert_eq!(evaluate_on(&[r.clone()], &FilterState::default(), today()).len(), 1);

        let narrowed = FilterState::default()
            .with_range_endpoint(RangeCategory::Height, Endpoint::Lo, 101.0);
        assert!(evaluate_on(&[r.clone()], &narrowed, today()).is_empty());

        let age_narrowed = FilterState::default()
            .with_range_endpoint(RangeCategory::Age, Endpoint::Hi, 64.0);
        assert!(evaluate_on(&[r], &age_narrowed, today()).is_empty());
    }

    #[test]
    fn test_default_predicate_equals_absence() {
        let records = vec![record("a"), record("b")];
        let constrained = FilterState::default()
            .toggle_set_member(SetCategory::Type, "Transfer")
            .with_range_endpoint(RangeCategory::Weight, Endpoint::Lo, 40.0);

        // clearing a category back to its default gives the same result as
        // never having set it
        let cleared = constrained
            .toggle_set_member(SetCategory::Type, "Transfer")
            .with_range_endpoint(RangeCategory::Weight, Endpoint::Lo, 30.0);
        assert_eq!(cleared, FilterState::default());
        assert_eq!(
            evaluate_on(&records, &cleared, today()),
            evaluate_on(&records, &FilterState::default(), today())
        );
        assert_eq!(
            FilterState::default().range(RangeCategory::Weight),
            NumericRange::new(30.0, 120.0)
        );
    }

    #[test]
    fn test_distinct_values() {
        let a = record("a");
        let mut b = record("b");
        b.nationality = Some("Indonesian".into());
        b.skills = vec!["Baking".into(), "Cooking".into()];
        let mut c = record("c");
        c.nationality = None;
        let records = vec![a, b, c];

        assert_eq!(
            distinct_values(&records, SetCategory::Nationality),
            vec!["Filipino", "Indonesian"]
        );
        assert_eq!(
            distinct_values(&records, SetCategory::Skills),
            vec!["Baking", "Cleaning", "Cooking"]
        );
        assert_eq!(
            distinct_values(&[], SetCategory::Availability),
            vec!["Available", "Employed", "Draft"]
        );
    }
}
