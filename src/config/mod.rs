pub mod settings;

pub use settings::{AppConfig, LoaderSettings, RecommenderSettings};
