use std::num::NonZeroUsize;

use crate::domain::DEFAULT_RECOMMENDATION_LIMIT;
use crate::similarity::DEFAULT_MINKOWSKI_POWER;

pub struct RecommenderSettings {
    pub recommendation_limit: NonZeroUsize,
    pub neighbors: usize,
    pub minkowski_power: f64,
    pub metric: &'static str,
}

impl Default for RecommenderSettings {
    fn default() -> Self {
        Self {
            recommendation_limit: DEFAULT_RECOMMENDATION_LIMIT,
            neighbors: 4,
            minkowski_power: DEFAULT_MINKOWSKI_POWER,
            metric: "PEARSON",
        }
    }
}

pub struct LoaderSettings {
    pub ratings_file: &'static str,
    pub books_file: &'static str,
    pub delimiter: char,
    pub data_path_env: &'static str,
}

impl Default for LoaderSettings {
    fn default() -> Self {
        Self {
            ratings_file: "BX-Book-Ratings.csv",
            books_file: "BX-Books.csv",
            delimiter: ';',
            data_path_env: "BX_DATA_PATH",
        }
    }
}

pub struct AppConfig {
    pub recommender: RecommenderSettings,
    pub loader: LoaderSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            recommender: RecommenderSettings::default(),
            loader: LoaderSettings::default(),
        }
    }
}
