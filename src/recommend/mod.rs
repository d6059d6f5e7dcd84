pub mod single;
pub mod types;
pub mod weighted;

pub use single::recommend;
pub use types::Recommendation;
pub use weighted::recommender;
