use log::debug;

use super::types::Recommendation;
use crate::domain::Consumer;
use crate::errors::RecommendError;
use crate::ranking::rank;
use crate::similarity::Metric;

/// Recommends everything the single closest neighbor rated that `target`
/// has not, scored with that neighbor's own rating and sorted by item.
pub fn recommend<'a, I>(
    target: &Consumer,
    population: I,
    metric: Metric,
) -> Result<Vec<Recommendation>, RecommendError>
where
    I: IntoIterator<Item = &'a Consumer>,
{
    let neighbors = rank(target, population, metric);
    let nearest = neighbors
        .first()
        .ok_or(RecommendError::InsufficientPopulation {
            requested: 1,
            available: 0,
        })?;

    debug!(
        "Nearest neighbor of {} is {} ({:.4})",
        target.name(),
        nearest.name(),
        nearest.score
    );

    let mut recommendations: Vec<Recommendation> = nearest
        .consumer
        .ratings()
        .iter()
        .filter(|(item, _)| !target.has_rated(item))
        .map(|(item, &rating)| Recommendation::new(item.clone(), rating))
        .collect();

    recommendations.sort_by(Recommendation::by_item);
    Ok(recommendations)
}
