use std::collections::BTreeMap;
use std::num::NonZeroUsize;

use super::consumer::Consumer;
use super::types::{DEFAULT_RECOMMENDATION_LIMIT, ItemId, RatingValue};

/// Consumers indexed by name, iterated in name order
#[derive(Debug)]
pub struct Population {
    consumers: BTreeMap<String, Consumer>,
    recommendation_limit: NonZeroUsize,
}

impl Population {
    pub fn new() -> Self {
        Self::with_recommendation_limit(DEFAULT_RECOMMENDATION_LIMIT)
    }

    /// Consumers created through [`Population::rate`] get this limit.
    pub fn with_recommendation_limit(limit: NonZeroUsize) -> Self {
        Self {
            consumers: BTreeMap::new(),
            recommendation_limit: limit,
        }
    }

    pub fn add(&mut self, consumer: Consumer) {
        self.consumers.insert(consumer.name().to_string(), consumer);
    }

    /// Records a rating, creating the consumer on first sight.
    pub fn rate(&mut self, name: &str, item: impl Into<ItemId>, value: RatingValue) {
        let limit = self.recommendation_limit;
        self.consumers
            .entry(name.to_string())
            .or_insert_with(|| Consumer::with_recommendation_limit(name, limit))
            .set_rating(item, value);
    }

    pub fn len(&self) -> usize {
        self.consumers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.consumers.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&Consumer> {
        self.consumers.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Consumer> {
        self.consumers.values()
    }

    /// Consumers that rated at least `min_ratings` items
    pub fn with_min_ratings(&self, min_ratings: usize) -> Vec<&Consumer> {
        self.iter()
            .filter(|c| c.rated_count() >= min_ratings)
            .collect()
    }

    pub fn into_vec(self) -> Vec<Consumer> {
        self.consumers.into_values().collect()
    }
}

impl Default for Population {
    fn default() -> Self {
        Self::new()
    }
}

impl FromIterator<Consumer> for Population {
    fn from_iter<I: IntoIterator<Item = Consumer>>(iter: I) -> Self {
        let mut population = Population::new();
        for consumer in iter {
            population.add(consumer);
        }
        population
    }
}
