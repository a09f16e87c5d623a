//! Client-side filtering of maid records.
//!
//! [`FilterState`] holds one predicate per category: set membership for
//! categorical and list attributes, a closed numeric interval for the rest.
//! [`evaluate`] keeps the records that satisfy all of them.

pub mod engine;
pub mod sort;
pub mod state;

pub use engine::{distinct_values, evaluate, evaluate_on, matches};
pub use sort::{sort_records, sort_records_on, SortField};
pub use state::{
    ActiveFilter, Endpoint, FilterCategory, FilterState, NumericRange, RangeCategory, SetCategory,
};
