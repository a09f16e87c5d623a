pub mod catalogue;
pub mod details;
pub mod filters;
pub mod list;

use contracts::domain::a001_maid::Availability;

/// Badge class for a placement status.
pub fn availability_class(availability: Availability) -> &'static str {
    match availability {
        Availability::Available => "badge badge--success",
        Availability::Employed => "badge badge--neutral",
        Availability::Draft => "badge badge--warning",
    }
}
