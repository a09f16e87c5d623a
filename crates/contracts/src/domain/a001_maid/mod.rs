pub mod aggregate;
pub mod record;

pub use aggregate::{EmploymentRecord, MaidDetails, MaidDto, MaidWriteDto};
pub use record::{normalize, normalize_all, Availability, MaidRecord};
