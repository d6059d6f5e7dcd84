use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::{info, warn};

use crate::cli::Strategy;
use crate::config::settings::AppConfig;
use crate::domain::{Consumer, Population};
use crate::loaders::{self, Catalog};
use crate::ranking::{self, NeighborSummary};
use crate::recommend::{self, Recommendation};
use crate::similarity::Metric;

/// Options of one `recommend` run; `None` falls back to the configured value.
#[derive(Debug, Clone, Default)]
pub struct RecommendRequest {
    pub user: String,
    pub metric: Option<String>,
    pub power: Option<f64>,
    pub strategy: Option<Strategy>,
    pub neighbors: Option<usize>,
    pub limit: Option<NonZeroUsize>,
}

pub struct RecommendationService {
    config: AppConfig,
    data_dir: PathBuf,
}

impl RecommendationService {
    pub fn new(config: AppConfig, data_dir: Option<PathBuf>) -> Self {
        let data_dir = data_dir
            .or_else(|| std::env::var(config.loader.data_path_env).ok().map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from("."));
        Self { config, data_dir }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn load_population(&self, limit: Option<NonZeroUsize>) -> Result<Population> {
        let path = self.data_dir.join(self.config.loader.ratings_file);
        let limit = limit.unwrap_or(self.config.recommender.recommendation_limit);
        info!("=== Loading ratings from {} ===", path.display());
        loaders::load_ratings(&path, &self.config.loader, limit)
    }

    /// The book catalog is optional; without it items are shown by ISBN.
    pub fn load_catalog(&self) -> Option<Catalog> {
        let path = self.data_dir.join(self.config.loader.books_file);
        if !path.exists() {
            info!("No catalog at {}, showing raw item ids", path.display());
            return None;
        }

        match loaders::load_catalog(&path, &self.config.loader) {
            Ok(catalog) => Some(catalog),
            Err(e) => {
                warn!("Ignoring catalog {}: {:#}", path.display(), e);
                None
            }
        }
    }

    pub fn resolve_metric(&self, name: Option<&str>, power: Option<f64>) -> Result<Metric> {
        let name = name.unwrap_or(self.config.recommender.metric);
        let power = power.unwrap_or(self.config.recommender.minkowski_power);
        Ok(Metric::from_name(name, power)?)
    }

    pub fn recommend(
        &self,
        population: &Population,
        request: &RecommendRequest,
    ) -> Result<Vec<Recommendation>> {
        let target = find_consumer(population, &request.user)?;
        let metric = self.resolve_metric(request.metric.as_deref(), request.power)?;
        let strategy = request.strategy.unwrap_or(Strategy::Weighted);

        info!(
            "Recommending for {} ({} ratings) with {} / {:?}",
            target.name(),
            target.rated_count(),
            metric,
            strategy
        );

        let recommendations = match strategy {
            Strategy::Single => recommend::recommend(target, population.iter(), metric),
            Strategy::Weighted => {
                let k = request
                    .neighbors
                    .unwrap_or(self.config.recommender.neighbors);
                recommend::recommender(target, population.iter(), metric, k)
            }
        }
        .with_context(|| format!("Failed to recommend for consumer {}", target.name()))?;

        info!("  → {} recommendations", recommendations.len());
        Ok(recommendations)
    }

    pub fn neighbors(
        &self,
        population: &Population,
        user: &str,
        metric: Metric,
        count: usize,
    ) -> Result<Vec<NeighborSummary>> {
        let target = find_consumer(population, user)?;
        let neighbors = ranking::rank(target, population.iter(), metric);

        Ok(neighbors.iter().take(count).map(|n| n.summary()).collect())
    }
}

fn find_consumer<'a>(population: &'a Population, name: &str) -> Result<&'a Consumer> {
    population
        .get(name)
        .ok_or_else(|| anyhow::anyhow!("Consumer {} not found in ratings", name))
}
