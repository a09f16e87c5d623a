use chrono::NaiveDate;
use contracts::domain::a001_maid::MaidRecord;
use contracts::shared::maid_filter::{evaluate_on, sort_records_on, FilterState, SortField};
use leptos::prelude::*;
use std::collections::HashSet;

#[derive(Clone, Debug)]
pub struct MaidListState {
    /// Normalized collection from the last applied response.
    pub records: Vec<MaidRecord>,
    pub filters: FilterState,
    pub sort_field: SortField,
    pub sort_ascending: bool,
    pub selected_ids: HashSet<String>,
    pub is_loaded: bool,
}

impl Default for MaidListState {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            filters: FilterState::default(),
            sort_field: SortField::Name,
            sort_ascending: true,
            selected_ids: HashSet::new(),
            is_loaded: false,
        }
    }
}

impl MaidListState {
    /// Filtered and sorted view of `records`.
    pub fn visible_on(&self, today: NaiveDate) -> Vec<MaidRecord> {
        let mut visible = evaluate_on(&self.records, &self.filters, today);
        sort_records_on(&mut visible, self.sort_field, self.sort_ascending, today);
        visible
    }

    /// Adopt a fresh collection. Selections of records that disappeared are
    /// dropped; filters and sort stay as they are.
    pub fn replace_records(&mut self, records: Vec<MaidRecord>) {
        let ids: HashSet<&str> = records.iter().map(|r| r.id.as_str()).collect();
        self.selected_ids.retain(|id| ids.contains(id.as_str()));
        self.records = records;
        self.is_loaded = true;
    }

    pub fn set_selected(&mut self, id: String, checked: bool) {
        if checked {
            self.selected_ids.insert(id);
        } else {
            self.selected_ids.remove(&id);
        }
    }

    /// Header checkbox: applies to the rows currently visible only.
    pub fn set_selected_many(&mut self, ids: &[String], checked: bool) {
        for id in ids {
            self.set_selected(id.clone(), checked);
        }
    }

    /// Selected ids in display order of the full collection.
    pub fn selected_in_order(&self) -> Vec<String> {
        self.records
            .iter()
            .filter(|r| self.selected_ids.contains(&r.id))
            .map(|r| r.id.clone())
            .collect()
    }
}

pub fn create_state() -> RwSignal<MaidListState> {
    RwSignal::new(MaidListState::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_maid::{normalize, MaidDto};
    use contracts::shared::maid_filter::{Endpoint, RangeCategory, SetCategory};

    fn record(id: &str, name: &str, country: &str) -> MaidRecord {
        normalize(&MaidDto {
            id: Some(id.into()),
            name: Some(name.into()),
            country: Some(country.into()),
            ..Default::default()
        })
        .unwrap()
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    #[test]
    fn test_visible_applies_filters_then_sort() {
        let mut state = MaidListState::default();
        state.replace_records(vec![
            record("1", "Carla", "Philippines"),
            record("2", "Ana", "Indonesia"),
            record("3", "Bea", "Philippines"),
        ]);
        state.filters = state
            .filters
            .toggle_set_member(SetCategory::Nationality, "Philippines");

        let ids: Vec<String> = state.visible_on(today()).into_iter().map(|r| r.id).collect();
        assert_eq!(ids, vec!["3", "1"]);
    }

    #[test]
    fn test_visible_follows_the_date_across_a_birthday() {
        let mut state = MaidListState::default();
        state.replace_records(vec![normalize(&MaidDto {
            id: Some("1".into()),
            name: Some("Dewi".into()),
            date_of_birth: Some("1960-06-02".into()),
            ..Default::default()
        })
        .unwrap()]);
        state.filters = state
            .filters
            .with_range_endpoint(RangeCategory::Age, Endpoint::Hi, 63.0);

        let eve = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let birthday = NaiveDate::from_ymd_opt(2024, 6, 2).unwrap();
        assert_eq!(state.visible_on(eve).len(), 1);
        assert!(state.visible_on(birthday).is_empty());
    }

    #[test]
    fn test_replace_records_prunes_selection() {
        let mut state = MaidListState::default();
        state.replace_records(vec![record("1", "A", "X"), record("2", "B", "Y")]);
        state.set_selected_many(&["1".to_string(), "2".to_string()], true);

        state.replace_records(vec![record("2", "B", "Y")]);
        assert!(state.is_loaded);
        assert_eq!(state.selected_in_order(), vec!["2"]);
    }

    #[test]
    fn test_selection_toggle() {
        let mut state = MaidListState::default();
        state.replace_records(vec![record("1", "A", "X"), record("2", "B", "Y")]);
        state.set_selected("2".into(), true);
        state.set_selected("1".into(), true);
        assert_eq!(state.selected_in_order(), vec!["1", "2"]);
        state.set_selected("1".into(), false);
        assert_eq!(state.selected_in_order(), vec!["2"]);
    }
}
