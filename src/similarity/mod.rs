pub mod cosine;
pub mod metric;
pub mod minkowski;
pub mod overlap;
pub mod pearson;

pub use cosine::cosine;
pub use metric::{DEFAULT_MINKOWSKI_POWER, Direction, Metric, NO_SIMILARITY};
pub use minkowski::minkowski;
pub use pearson::pearson;
