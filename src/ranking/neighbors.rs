use log::debug;

use super::types::Neighbor;
use crate::domain::{Consumer, RatingMap};
use crate::similarity::{Direction, Metric};

/// Ranks `candidates` against `target`, closest first for `metric`.
///
/// The target itself is skipped by identity, so a different consumer with
/// identical ratings is still ranked. Equal scores fall back to name order.
pub fn rank<'a, I>(target: &Consumer, candidates: I, metric: Metric) -> Vec<Neighbor<'a>>
where
    I: IntoIterator<Item = &'a Consumer>,
{
    let neighbors = rank_by(
        target,
        candidates,
        |a, b| metric.score(a, b),
        metric.direction(),
    );
    debug!(
        "Ranked {} neighbors of {} by {}",
        neighbors.len(),
        target.name(),
        metric
    );
    neighbors
}

/// Same as [`rank`] with an arbitrary scoring function and explicit direction.
pub fn rank_by<'a, I, F>(
    target: &Consumer,
    candidates: I,
    score: F,
    direction: Direction,
) -> Vec<Neighbor<'a>>
where
    I: IntoIterator<Item = &'a Consumer>,
    F: Fn(&RatingMap, &RatingMap) -> f64,
{
    let mut neighbors: Vec<Neighbor<'a>> = candidates
        .into_iter()
        .filter(|candidate| !std::ptr::eq(*candidate, target))
        .map(|candidate| Neighbor {
            score: score(target.ratings(), candidate.ratings()),
            consumer: candidate,
        })
        .collect();

    sort_neighbors(&mut neighbors, direction);
    neighbors
}

fn sort_neighbors(neighbors: &mut [Neighbor<'_>], direction: Direction) {
    neighbors.sort_by(|a, b| {
        direction
            .compare(a.score, b.score)
            .then_with(|| a.consumer.name().cmp(b.consumer.name()))
    });
}
