pub mod output;
pub mod recommendation;

pub use recommendation::{RecommendRequest, RecommendationService};
