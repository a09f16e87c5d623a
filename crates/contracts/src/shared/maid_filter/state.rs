use std::collections::BTreeSet;

/// Categories matched by set membership. The first four compare a scalar
/// attribute; the last three intersect a list attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SetCategory {
    Nationality,
    Religion,
    MaritalStatus,
    Availability,
    Skills,
    Languages,
    Type,
}

impl SetCategory {
    pub const ALL: [SetCategory; 7] = [
        SetCategory::Nationality,
        SetCategory::Religion,
        SetCategory::MaritalStatus,
        SetCategory::Availability,
        SetCategory::Skills,
        SetCategory::Languages,
        SetCategory::Type,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SetCategory::Nationality => "Nationality",
            SetCategory::Religion => "Religion",
            SetCategory::MaritalStatus => "Marital status",
            SetCategory::Availability => "Availability",
            SetCategory::Skills => "Skills",
            SetCategory::Languages => "Languages",
            SetCategory::Type => "Type",
        }
    }

    pub fn is_list(&self) -> bool {
        matches!(
            self,
            SetCategory::Skills | SetCategory::Languages | SetCategory::Type
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RangeCategory {
    Age,
    Height,
    Weight,
    Salary,
    Loan,
    Children,
}

impl RangeCategory {
    pub const ALL: [RangeCategory; 6] = [
        RangeCategory::Age,
        RangeCategory::Height,
        RangeCategory::Weight,
        RangeCategory::Salary,
        RangeCategory::Loan,
        RangeCategory::Children,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            RangeCategory::Age => "Age",
            RangeCategory::Height => "Height",
            RangeCategory::Weight => "Weight",
            RangeCategory::Salary => "Salary",
            RangeCategory::Loan => "Loan",
            RangeCategory::Children => "Children",
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            RangeCategory::Age => "yrs",
            RangeCategory::Height => "cm",
            RangeCategory::Weight => "kg",
            RangeCategory::Salary | RangeCategory::Loan => "$",
            RangeCategory::Children => "",
        }
    }

    /// Documented full-domain bounds; also the slider domain.
    pub fn default_range(&self) -> NumericRange {
        match self {
            RangeCategory::Age => NumericRange::new(1.0, 65.0),
            RangeCategory::Height => NumericRange::new(100.0, 200.0),
            RangeCategory::Weight => NumericRange::new(30.0, 120.0),
            RangeCategory::Salary => NumericRange::new(0.0, 5000.0),
            RangeCategory::Loan => NumericRange::new(0.0, 10000.0),
            RangeCategory::Children => NumericRange::new(0.0, 10.0),
        }
    }

    pub fn step(&self) -> f64 {
        match self {
            RangeCategory::Salary => 50.0,
            RangeCategory::Loan => 100.0,
            _ => 1.0,
        }
    }
}

/// Closed interval `[lo, hi]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumericRange {
    pub lo: f64,
    pub hi: f64,
}

impl NumericRange {
    pub fn new(lo: f64, hi: f64) -> Self {
        Self { lo, hi }
    }

    pub fn contains(&self, value: f64) -> bool {
        self.lo <= value && value <= self.hi
    }
}

/// Which end of a range an update replaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Lo,
    Hi,
}

impl Endpoint {
    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Endpoint::Lo),
            1 => Some(Endpoint::Hi),
            _ => None,
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Endpoint::Lo => 0,
            Endpoint::Hi => 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterCategory {
    Set(SetCategory),
    Range(RangeCategory),
}

/// A non-default category, for badges and removable chips.
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveFilter {
    pub category: FilterCategory,
    pub label: String,
}

/// Every predicate the dashboard can apply.
///
/// Transitions return a new value and leave `self` untouched, so a reactive
/// layer can compare old and new states to decide whether to re-render.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterState {
    nationality: BTreeSet<String>,
    religion: BTreeSet<String>,
    marital_status: BTreeSet<String>,
    availability: BTreeSet<String>,
    skills: BTreeSet<String>,
    languages: BTreeSet<String>,
    maid_type: BTreeSet<String>,

    age: NumericRange,
    height: NumericRange,
    weight: NumericRange,
    salary: NumericRange,
    loan: NumericRange,
    children: NumericRange,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            nationality: BTreeSet::new(),
            religion: BTreeSet::new(),
            marital_status: BTreeSet::new(),
            availability: BTreeSet::new(),
            skills: BTreeSet::new(),
            languages: BTreeSet::new(),
            maid_type: BTreeSet::new(),
            age: RangeCategory::Age.default_range(),
            height: RangeCategory::Height.default_range(),
            weight: RangeCategory::Weight.default_range(),
            salary: RangeCategory::Salary.default_range(),
            loan: RangeCategory::Loan.default_range(),
            children: RangeCategory::Children.default_range(),
        }
    }
}

impl FilterState {
    pub fn selected(&self, category: SetCategory) -> &BTreeSet<String> {
        match category {
            SetCategory::Nationality => &self.nationality,
            SetCategory::Religion => &self.religion,
            SetCategory::MaritalStatus => &self.marital_status,
            SetCategory::Availability => &self.availability,
            SetCategory::Skills => &self.skills,
            SetCategory::Languages => &self.languages,
            SetCategory::Type => &self.maid_type,
        }
    }

    fn selected_mut(&mut self, category: SetCategory) -> &mut BTreeSet<String> {
        match category {
            SetCategory::Nationality => &mut self.nationality,
            SetCategory::Religion => &mut self.religion,
            SetCategory::MaritalStatus => &mut self.marital_status,
            SetCategory::Availability => &mut self.availability,
            SetCategory::Skills => &mut self.skills,
            SetCategory::Languages => &mut self.languages,
            SetCategory::Type => &mut self.maid_type,
        }
    }

    pub fn range(&self, category: RangeCategory) -> NumericRange {
        match category {
            RangeCategory::Age => self.age,
            RangeCategory::Height => self.height,
            RangeCategory::Weight => self.weight,
            RangeCategory::Salary => self.salary,
            RangeCategory::Loan => self.loan,
            RangeCategory::Children => self.children,
        }
    }

    fn range_mut(&mut self, category: RangeCategory) -> &mut NumericRange {
        match category {
            RangeCategory::Age => &mut self.age,
            RangeCategory::Height => &mut self.height,
            RangeCategory::Weight => &mut self.weight,
            RangeCategory::Salary => &mut self.salary,
            RangeCategory::Loan => &mut self.loan,
            RangeCategory::Children => &mut self.children,
        }
    }

    pub fn is_selected(&self, category: SetCategory, value: &str) -> bool {
        self.selected(category).contains(value)
    }

    pub fn is_default_range(&self, category: RangeCategory) -> bool {
        self.range(category) == category.default_range()
    }

    /// Remove `value` from the category if present, add it otherwise.
    pub fn toggle_set_member(&self, category: SetCategory, value: &str) -> FilterState {
        let mut next = self.clone();
        let set = next.selected_mut(category);
        if !set.remove(value) {
            set.insert(value.to_string());
        }
        next
    }

    /// Replace one end of a range. Ordering of `lo`/`hi` is the caller's
    /// responsibility; the range slider guarantees it.
    pub fn with_range_endpoint(
        &self,
        category: RangeCategory,
        endpoint: Endpoint,
        value: f64,
    ) -> FilterState {
        let mut next = self.clone();
        let range = next.range_mut(category);
        match endpoint {
            Endpoint::Lo => range.lo = value,
            Endpoint::Hi => range.hi = value,
        }
        next
    }

    pub fn reset_all(&self) -> FilterState {
        FilterState::default()
    }

    pub fn clear_category(&self, category: FilterCategory) -> FilterState {
        let mut next = self.clone();
        match category {
            FilterCategory::Set(c) => next.selected_mut(c).clear(),
            FilterCategory::Range(c) => *next.range_mut(c) = c.default_range(),
        }
        next
    }

    /// Set categories with a selection plus ranges moved off their defaults.
    pub fn count_active(&self) -> usize {
        let sets = SetCategory::ALL
            .iter()
            .filter(|c| !self.selected(**c).is_empty())
            .count();
        let ranges = RangeCategory::ALL
            .iter()
            .filter(|c| !self.is_default_range(**c))
            .count();
        sets + ranges
    }

    pub fn active_filters(&self) -> Vec<ActiveFilter> {
        let mut out = Vec::new();
        for c in SetCategory::ALL {
            let selected = self.selected(c);
            if !selected.is_empty() {
                let values: Vec<&str> = selected.iter().map(String::as_str).collect();
                out.push(ActiveFilter {
                    category: FilterCategory::Set(c),
                    label: format!("{}: {}", c.label(), values.join(", ")),
                });
            }
        }
        for c in RangeCategory::ALL {
            if !self.is_default_range(c) {
                let r = self.range(c);
                out.push(ActiveFilter {
                    category: FilterCategory::Range(c),
                    label: format!("{}: {}–{} {}", c.label(), r.lo, r.hi, c.unit())
                        .trim_end()
                        .to_string(),
                });
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_inactive() {
        let state = FilterState::default();
        assert_eq!(state.count_active(), 0);
        assert!(state.active_filters().is_empty());
        for c in RangeCategory::ALL {
            assert!(state.is_default_range(c));
        }
    }

    #[test]
    fn test_toggle_adds_then_removes_without_mutating_input() {
        let original = FilterState::default();
        let with_cooking = original.toggle_set_member(SetCategory::Skills, "Cooking");

        assert!(original.selected(SetCategory::Skills).is_empty());
        assert!(with_cooking.is_selected(SetCategory::Skills, "Cooking"));
        assert_eq!(with_cooking.count_active(), 1);

        let toggled_back = with_cooking.toggle_set_member(SetCategory::Skills, "Cooking");
        assert_eq!(toggled_back, original);
        assert!(with_cooking.is_selected(SetCategory::Skills, "Cooking"));
    }

    #[test]
    fn test_range_endpoint_updates() {
        let state = FilterState::default()
            .with_range_endpoint(RangeCategory::Age, Endpoint::Lo, 21.0)
            .with_range_endpoint(RangeCategory::Age, Endpoint::Hi, 40.0);
        assert_eq!(state.range(RangeCategory::Age), NumericRange::new(21.0, 40.0));
        assert_eq!(state.count_active(), 1);

        let restored = state
            .with_range_endpoint(RangeCategory::Age, Endpoint::Lo, 1.0)
            .with_range_endpoint(RangeCategory::Age, Endpoint::Hi, 65.0);
        assert_eq!(restored.count_active(), 0);
    }

    #[test]
    fn test_range_endpoint_is_stored_as_given() {
        // ordering belongs to the slider; the state keeps what it is told
        let state = FilterState::default()
            .with_range_endpoint(RangeCategory::Height, Endpoint::Lo, 180.0)
            .with_range_endpoint(RangeCategory::Height, Endpoint::Hi, 150.0);
        let range = state.range(RangeCategory::Height);
        assert_eq!(range.lo, 180.0);
        assert_eq!(range.hi, 150.0);

        let outside = FilterState::default().with_range_endpoint(RangeCategory::Age, Endpoint::Hi, 90.0);
        assert_eq!(outside.range(RangeCategory::Age).hi, 90.0);
    }

    #[test]
    fn test_count_active_mixes_sets_and_ranges() {
        let state = FilterState::default()
            .toggle_set_member(SetCategory::Nationality, "Filipino")
            .toggle_set_member(SetCategory::Nationality, "Indonesian")
            .toggle_set_member(SetCategory::Languages, "English")
            .with_range_endpoint(RangeCategory::Salary, Endpoint::Hi, 800.0);
        // two values in one category still count once
        assert_eq!(state.count_active(), 3);
    }

    #[test]
    fn test_reset_and_clear_category() {
        let state = FilterState::default()
            .toggle_set_member(SetCategory::Religion, "Muslim")
            .with_range_endpoint(RangeCategory::Height, Endpoint::Lo, 150.0);

        let cleared = state.clear_category(FilterCategory::Range(RangeCategory::Height));
        assert_eq!(cleared.count_active(), 1);
        assert!(cleared.is_selected(SetCategory::Religion, "Muslim"));

        assert_eq!(state.reset_all(), FilterState::default());
        assert_eq!(state.count_active(), 2);
    }

    #[test]
    fn test_active_filter_labels() {
        let state = FilterState::default()
            .toggle_set_member(SetCategory::Skills, "Cooking")
            .toggle_set_member(SetCategory::Skills, "Baking")
            .with_range_endpoint(RangeCategory::Children, Endpoint::Hi, 2.0);
        let labels: Vec<String> = state.active_filters().into_iter().map(|f| f.label).collect();
        assert_eq!(labels, vec!["Skills: Baking, Cooking", "Children: 0–2"]);
    }

    #[test]
    fn test_endpoint_index() {
        assert_eq!(Endpoint::from_index(0), Some(Endpoint::Lo));
        assert_eq!(Endpoint::from_index(1), Some(Endpoint::Hi));
        assert_eq!(Endpoint::from_index(2), None);
        assert_eq!(Endpoint::Hi.index(), 1);
    }
}
