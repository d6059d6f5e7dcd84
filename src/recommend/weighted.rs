use std::collections::HashMap;

use log::{debug, warn};

use super::types::Recommendation;
use crate::domain::{Consumer, ItemId};
use crate::errors::RecommendError;
use crate::ranking::{Neighbor, rank};
use crate::similarity::Metric;

/// Weighted k-nearest-neighbor recommendations.
///
/// Takes the `k` neighbors closest to `target` for `metric`, weights each
/// one by its share of the summed scores and adds `rating * weight` for every
/// item the target has not rated. The result is sorted by ascending score
/// (ties by item) and cut to the target's recommendation limit.
pub fn recommender<'a, I>(
    target: &Consumer,
    population: I,
    metric: Metric,
    k: usize,
) -> Result<Vec<Recommendation>, RecommendError>
where
    I: IntoIterator<Item = &'a Consumer>,
{
    if k == 0 {
        return Err(RecommendError::InvalidNeighborCount(k));
    }

    let neighbors = rank(target, population, metric);
    if k > neighbors.len() {
        return Err(RecommendError::InsufficientPopulation {
            requested: k,
            available: neighbors.len(),
        });
    }

    let nearest = &neighbors[..k];
    debug!(
        "Aggregating {} neighbors of {}: {:?}",
        k,
        target.name(),
        nearest.iter().map(|n| n.name()).collect::<Vec<_>>()
    );

    let weights = neighbor_weights(nearest);
    let scores = accumulate_scores(target, nearest, &weights);

    Ok(build_recommendations(scores, target.recommendation_limit()))
}

/// Each neighbor's score divided by the total. A zero total gives every
/// neighbor the same weight.
fn neighbor_weights(neighbors: &[Neighbor<'_>]) -> Vec<f64> {
    let total: f64 = neighbors.iter().map(|n| n.score).sum();

    if total == 0.0 {
        warn!(
            "Neighbor scores sum to zero, weighting {} neighbors equally",
            neighbors.len()
        );
        let equal = 1.0 / neighbors.len() as f64;
        return vec![equal; neighbors.len()];
    }

    neighbors.iter().map(|n| n.score / total).collect()
}

fn accumulate_scores(
    target: &Consumer,
    neighbors: &[Neighbor<'_>],
    weights: &[f64],
) -> HashMap<ItemId, f64> {
    let mut scores: HashMap<ItemId, f64> = HashMap::new();

    for (neighbor, &weight) in neighbors.iter().zip(weights) {
        for (item, &rating) in neighbor.consumer.ratings() {
            if target.has_rated(item) {
                continue;
            }
            *scores.entry(item.clone()).or_insert(0.0) += rating * weight;
        }
    }

    scores
}

fn build_recommendations(scores: HashMap<ItemId, f64>, limit: usize) -> Vec<Recommendation> {
    let mut recommendations: Vec<Recommendation> = scores
        .into_iter()
        .map(|(item, score)| Recommendation::new(item, score))
        .collect();

    recommendations.sort_by(Recommendation::by_score_ascending);
    recommendations.truncate(limit);
    recommendations
}
