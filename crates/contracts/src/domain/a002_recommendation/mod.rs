pub mod aggregate;

pub use aggregate::{RecommendationLink, RecommendationRequest};
