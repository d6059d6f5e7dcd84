pub mod consumer;
pub mod population;
pub mod types;

pub use consumer::Consumer;
pub use population::Population;
pub use types::{DEFAULT_RECOMMENDATION_LIMIT, ItemId, RatingMap, RatingValue};
